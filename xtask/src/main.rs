use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{exit, Command};

use clap::{Parser, Subcommand, ValueEnum};
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

const LAMBDA_PACKAGE: &str = "file_recorder_lambda";
const LAMBDA_BIN: &str = "file_recorder";
const LAMBDA_ENTRYPOINT: &str = "bootstrap";
const DIST_DIR: &str = "infra/dist";

#[derive(Parser)]
#[command(name = "xtask", about = "Task runner for the file recorder workspace")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run CI checks
    Ci {
        #[arg(value_enum, default_value_t = CiJob::Check)]
        job: CiJob,
    },
    /// Build the Lambda binary and zip it for deployment
    ServerlessPackage {
        #[arg(long, default_value = "x86_64-unknown-linux-gnu")]
        target: String,
        /// Build in release mode
        #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
        release: bool,
    },
}

#[derive(Clone, ValueEnum)]
enum CiJob {
    /// fmt + clippy
    Lint,
    Test,
    /// lint then test
    Check,
}

fn run_cargo(args: &[&str]) {
    eprintln!("+ cargo {}", args.join(" "));
    let status = Command::new("cargo")
        .args(args)
        .status()
        .expect("failed to execute cargo");
    if !status.success() {
        exit(status.code().unwrap_or(1));
    }
}

fn lint() {
    run_cargo(&["fmt", "--all", "--", "--check"]);
    run_cargo(&[
        "clippy",
        "--all-targets",
        "--all-features",
        "--",
        "-D",
        "warnings",
    ]);
}

fn test() {
    run_cargo(&["test", "-p", "file_recorder_core", "-p", LAMBDA_PACKAGE]);
}

fn package(target: &str, release: bool) -> PathBuf {
    let mut args = vec!["build", "-p", LAMBDA_PACKAGE, "--bin", LAMBDA_BIN, "--target", target];
    if release {
        args.push("--release");
    }
    run_cargo(&args);

    let profile_dir = if release { "release" } else { "debug" };
    let binary_path = Path::new("target")
        .join(target)
        .join(profile_dir)
        .join(LAMBDA_BIN);
    let binary = fs::read(&binary_path).unwrap_or_else(|error| {
        panic!("expected lambda binary at '{}': {error}", binary_path.display())
    });

    fs::create_dir_all(DIST_DIR).expect("failed to create lambda dist directory");
    let zip_path = Path::new(DIST_DIR).join(format!("{LAMBDA_BIN}.zip"));

    // provided.al2023 executes the archive entry named `bootstrap`.
    let file = fs::File::create(&zip_path).expect("failed to create lambda zip");
    let mut zip = ZipWriter::new(file);
    let options = FileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .unix_permissions(0o755);
    zip.start_file(LAMBDA_ENTRYPOINT, options)
        .expect("failed to start bootstrap entry");
    zip.write_all(&binary).expect("failed to write bootstrap entry");
    zip.finish().expect("failed to finish lambda zip");

    zip_path
}

fn main() {
    match Cli::parse().command {
        Commands::Ci { job } => {
            match job {
                CiJob::Lint => lint(),
                CiJob::Test => test(),
                CiJob::Check => {
                    lint();
                    test();
                }
            }
            eprintln!("CI job passed.");
        }
        Commands::ServerlessPackage { target, release } => {
            let zip_path = package(&target, release);
            eprintln!("Packaged {}", zip_path.display());
        }
    }
}
