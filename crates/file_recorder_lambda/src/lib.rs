//! AWS-oriented adapters and the invocation handler for the file recorder.
//!
//! This crate owns runtime integration details (Lambda handler, environment
//! configuration, and storage adapter seams). Naming and response contracts
//! come from `file_recorder_core`.

pub mod adapters;
pub mod config;
pub mod handlers;
