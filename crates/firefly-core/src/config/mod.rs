use serde::{Deserialize, Serialize};
use tracing::level_filters::LevelFilter;

use crate::host::Fs;
use crate::misc::SdkError;
use crate::Firefly;

/// App-side SDK settings, read from a JSON file shipped with the app.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Lowest level forwarded to the host log: off, error, warn, info, debug or trace.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Prefix each forwarded line with the event target.
    #[serde(default)]
    pub with_target: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            with_target: false,
        }
    }
}

impl LogConfig {
    pub fn level_filter(&self) -> Result<LevelFilter, ConfigError> {
        self.level
            .parse::<LevelFilter>()
            .map_err(|_| ConfigError::Validation(format!("log.level: unknown level {:?}", self.level)))
    }
}

impl Config {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.log.level_filter()?;
        Ok(())
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse config: {0}")]
    Parse(String),
    #[error("failed to serialize config: {0}")]
    Serialize(String),
    #[error("config validation failed: {0}")]
    Validation(String),
}

impl<H: Fs> Firefly<H> {
    /// Load and validate the config at `path`. A missing or empty file gives
    /// the defaults.
    pub fn load_config(&self, path: &str) -> Result<Config, SdkError> {
        let raw = self.load_file_buf(path);
        if raw.is_empty() {
            tracing::debug!(path, "no config file, using defaults");
            return Ok(Config::default());
        }
        let json = core::str::from_utf8(&raw).map_err(|e| ConfigError::Parse(e.to_string()))?;
        let config = Config::from_json(json)?;
        config.validate()?;
        tracing::debug!(path, level = %config.log.level, "config loaded");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::recording::RecordingHost;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.log.level, "info");
        assert!(!config.log.with_target);
        assert_eq!(config.log.level_filter().unwrap(), LevelFilter::INFO);
    }

    #[test]
    fn test_config_from_json_minimal() {
        let config = Config::from_json("{}").unwrap();
        assert_eq!(config, Config::default());
        let config = Config::from_json(r#"{"log": {}}"#).unwrap();
        assert_eq!(config.log.level, "info");
    }

    #[test]
    fn test_config_from_json_with_overrides() {
        let json = r#"{"log": {"level": "debug", "with_target": true}}"#;
        let config = Config::from_json(json).unwrap();
        assert_eq!(config.log.level_filter().unwrap(), LevelFilter::DEBUG);
        assert!(config.log.with_target);
    }

    #[test]
    fn test_config_roundtrip() {
        let mut config = Config::default();
        config.log.level = "warn".into();
        let parsed = Config::from_json(&config.to_json().unwrap()).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_config_validate_unknown_level() {
        let mut config = Config::default();
        config.log.level = "loud".into();
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(err.to_string().contains("log.level"));
    }

    #[test]
    fn test_config_invalid_json() {
        assert!(matches!(
            Config::from_json("not json"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_load_config_missing_file_gives_defaults() {
        let ff = Firefly::new(RecordingHost::new());
        assert_eq!(ff.load_config("config.json").unwrap(), Config::default());
    }

    #[test]
    fn test_load_config_from_file() {
        let host = RecordingHost::new().with_file("config.json", r#"{"log": {"level": "trace"}}"#);
        let ff = Firefly::new(host);
        let config = ff.load_config("config.json").unwrap();
        assert_eq!(config.log.level, "trace");
    }

    #[test]
    fn test_load_config_rejects_bad_file() {
        let host = RecordingHost::new()
            .with_file("bad.json", "{")
            .with_file("loud.json", r#"{"log": {"level": "loud"}}"#)
            .with_file("bin.json", vec![0xFFu8, 0x00]);
        let ff = Firefly::new(host);
        for path in ["bad.json", "loud.json", "bin.json"] {
            assert!(matches!(ff.load_config(path), Err(SdkError::Config(_))), "{path}");
        }
    }
}
