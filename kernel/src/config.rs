// Store Configuration
//
// Where the reading log lives. Loaded from JSON, or the built-in
// default when no config is provided.

use std::path::PathBuf;

use serde::Deserialize;

/// Conventional log file name, relative to the working directory.
pub const DEFAULT_LOG_FILE: &str = "meter_log.csv";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StoreConfig {
    #[serde(default = "default_log_path")]
    pub log_path: PathBuf,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid store config: {0}")]
    Parse(#[from] serde_json::Error),
}

fn default_log_path() -> PathBuf {
    PathBuf::from(DEFAULT_LOG_FILE)
}

impl StoreConfig {
    /// Default built-in config (used if no config is provided).
    pub fn default_config() -> Self {
        Self {
            log_path: default_log_path(),
        }
    }

    pub fn from_json(data: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(data)?)
    }

    /// Override the log path, keeping everything else.
    pub fn with_log_path(mut self, log_path: impl Into<PathBuf>) -> Self {
        self.log_path = log_path.into();
        self
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::default_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_conventional_file() {
        assert_eq!(
            StoreConfig::default().log_path,
            PathBuf::from("meter_log.csv")
        );
    }

    #[test]
    fn parse_store_config_json() {
        let json = r#"{ "log_path": "/var/lib/meter/readings.csv" }"#;

        let config = StoreConfig::from_json(json).unwrap();
        assert_eq!(
            config.log_path,
            PathBuf::from("/var/lib/meter/readings.csv")
        );
    }

    #[test]
    fn missing_log_path_falls_back_to_default() {
        let config = StoreConfig::from_json("{}").unwrap();
        assert_eq!(config, StoreConfig::default_config());
    }

    #[test]
    fn malformed_json_is_rejected() {
        let err = StoreConfig::from_json("{ log_path: ").unwrap_err();
        assert!(err.to_string().starts_with("invalid store config"));
    }

    #[test]
    fn explicit_path_overrides_config() {
        let config = StoreConfig::default_config().with_log_path("other.csv");
        assert_eq!(config.log_path, PathBuf::from("other.csv"));
    }
}
