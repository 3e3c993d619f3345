use thiserror::Error;

pub const BUCKET_NAME_VAR: &str = "BUCKET_NAME";
pub const TABLE_NAME_VAR: &str = "TABLE_NAME";
pub const LOCALSTACK_HOSTNAME_VAR: &str = "LOCALSTACK_HOSTNAME";

pub const DEFAULT_LOCALSTACK_HOSTNAME: &str = "localhost";
pub const LOCALSTACK_PORT: u16 = 4566;
pub const EMULATOR_REGION: &str = "us-east-1";
pub const EMULATOR_ACCESS_KEY_ID: &str = "test";
pub const EMULATOR_SECRET_ACCESS_KEY: &str = "test";

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be configured")]
    Missing(&'static str),
    #[error("{0} must not be blank")]
    Blank(&'static str),
}

/// Emulator endpoint shared by the object-store and table clients.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalEndpoint {
    pub hostname: String,
}

impl LocalEndpoint {
    pub fn url(&self) -> String {
        format!("http://{}:{LOCALSTACK_PORT}", self.hostname)
    }
}

impl Default for LocalEndpoint {
    fn default() -> Self {
        Self {
            hostname: DEFAULT_LOCALSTACK_HOSTNAME.to_string(),
        }
    }
}

/// Process-wide settings, validated once before the runtime loop starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecorderConfig {
    pub bucket_name: String,
    pub table_name: String,
    pub endpoint: LocalEndpoint,
}

impl RecorderConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let bucket_name = required(&lookup, BUCKET_NAME_VAR)?;
        let table_name = required(&lookup, TABLE_NAME_VAR)?;
        let endpoint = lookup(LOCALSTACK_HOSTNAME_VAR)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .map(|hostname| LocalEndpoint { hostname })
            .unwrap_or_default();

        Ok(Self {
            bucket_name,
            table_name,
            endpoint,
        })
    }
}

fn required(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
) -> Result<String, ConfigError> {
    let value = lookup(key).ok_or(ConfigError::Missing(key))?;
    if value.trim().is_empty() {
        return Err(ConfigError::Blank(key));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn loads_required_values_with_default_endpoint() {
        let config = RecorderConfig::from_lookup(lookup_from(&[
            ("BUCKET_NAME", "uploads"),
            ("TABLE_NAME", "file-records"),
        ]))
        .expect("config should load");

        assert_eq!(config.bucket_name, "uploads");
        assert_eq!(config.table_name, "file-records");
        assert_eq!(config.endpoint.url(), "http://localhost:4566");
    }

    #[test]
    fn hostname_override_changes_endpoint_host_only() {
        let config = RecorderConfig::from_lookup(lookup_from(&[
            ("BUCKET_NAME", "uploads"),
            ("TABLE_NAME", "file-records"),
            ("LOCALSTACK_HOSTNAME", "localstack.internal"),
        ]))
        .expect("config should load");

        assert_eq!(config.endpoint.url(), "http://localstack.internal:4566");
    }

    #[test]
    fn blank_hostname_falls_back_to_default() {
        let config = RecorderConfig::from_lookup(lookup_from(&[
            ("BUCKET_NAME", "uploads"),
            ("TABLE_NAME", "file-records"),
            ("LOCALSTACK_HOSTNAME", "  "),
        ]))
        .expect("config should load");

        assert_eq!(config.endpoint, LocalEndpoint::default());
    }

    #[test]
    fn missing_bucket_is_reported_by_name() {
        let error = RecorderConfig::from_lookup(lookup_from(&[("TABLE_NAME", "file-records")]))
            .expect_err("missing bucket should fail");

        assert_eq!(error, ConfigError::Missing("BUCKET_NAME"));
        assert_eq!(error.to_string(), "BUCKET_NAME must be configured");
    }

    #[test]
    fn missing_table_is_reported_by_name() {
        let error = RecorderConfig::from_lookup(lookup_from(&[("BUCKET_NAME", "uploads")]))
            .expect_err("missing table should fail");

        assert_eq!(error, ConfigError::Missing("TABLE_NAME"));
    }

    #[test]
    fn blank_required_value_is_rejected() {
        let error = RecorderConfig::from_lookup(lookup_from(&[
            ("BUCKET_NAME", "uploads"),
            ("TABLE_NAME", ""),
        ]))
        .expect_err("blank table should fail");

        assert_eq!(error, ConfigError::Blank("TABLE_NAME"));
    }
}
