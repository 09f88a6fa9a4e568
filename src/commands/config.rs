use crate::Result;
use crate::reports::{DEFAULT_TIMESTAMP_FORMAT, EmptySummaryPolicy};
use camino::Utf8Path;
use chrono::format::{Item, StrftimeItems};
use ohno::{IntoAppError, app_err};
use serde::{Deserialize, Serialize};
use std::fs;

const LOG_TARGET: &str = "    config";

/// The default configuration TOML content, embedded from `default_config.toml`
pub const DEFAULT_CONFIG_TOML: &str = include_str!("../../default_config.toml");

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// What the execution-time statistics print when there are no records
    #[serde(default)]
    pub empty_summary: EmptySummaryPolicy,

    /// strftime pattern for the CSV timestamp column
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,
}

fn default_timestamp_format() -> String {
    DEFAULT_TIMESTAMP_FORMAT.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            empty_summary: EmptySummaryPolicy::default(),
            timestamp_format: default_timestamp_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file or use defaults
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or holds invalid values
    pub fn load(config_path: Option<&Utf8Path>) -> Result<Self> {
        let Some(path) = config_path else {
            return Ok(Self::default());
        };

        let text = fs::read_to_string(path).into_app_err_with(|| format!("reading configuration file '{path}'"))?;
        let config: Self = toml::from_str(&text).into_app_err_with(|| format!("parsing configuration file '{path}'"))?;
        config.validate()?;

        log::debug!(target: LOG_TARGET, "Loaded configuration from '{path}'");
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error if the timestamp format is not a valid strftime pattern
    fn validate(&self) -> Result<()> {
        if StrftimeItems::new(&self.timestamp_format).any(|item| matches!(item, Item::Error)) {
            return Err(app_err!("timestamp_format '{}' is not a valid strftime pattern", self.timestamp_format));
        }

        if self.timestamp_format.contains([',', '\n', '\r']) {
            log::warn!(
                target: LOG_TARGET,
                "timestamp_format '{}' emits CSV delimiters, exported rows will not split cleanly",
                self.timestamp_format.escape_debug()
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;

    fn write_config(dir: &tempfile::TempDir, text: &str) -> Utf8PathBuf {
        let path = Utf8PathBuf::from_path_buf(dir.path().join("config.toml")).unwrap();
        fs::write(&path, text).expect("Failed to write test config");
        path
    }

    #[test]
    fn test_no_config_path_uses_defaults() {
        assert_eq!(Config::load(None).unwrap(), Config::default());
    }

    #[test]
    fn test_default_config_matches_embedded() {
        let parsed: Config = toml::from_str(DEFAULT_CONFIG_TOML).expect("DEFAULT_CONFIG_TOML should parse successfully");
        assert_eq!(parsed, Config::default());
    }

    #[test]
    fn test_load_overrides() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = write_config(&temp_dir, "empty_summary = \"zero\"\ntimestamp_format = \"%Y/%m/%d\"\n");

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.empty_summary, EmptySummaryPolicy::Zero);
        assert_eq!(config.timestamp_format, "%Y/%m/%d");
    }

    #[test]
    fn test_missing_keys_take_defaults() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = write_config(&temp_dir, "");
        assert_eq!(Config::load(Some(&path)).unwrap(), Config::default());
    }

    #[test]
    fn test_unknown_field() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = write_config(&temp_dir, "unknown_field = \"value\"\n");

        let result = Config::load(Some(&path));
        assert!(result.unwrap_err().to_string().contains("parsing configuration file"));
    }

    #[test]
    fn test_unknown_policy() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = write_config(&temp_dir, "empty_summary = \"never\"\n");
        assert!(Config::load(Some(&path)).is_err());
    }

    #[test]
    fn test_invalid_timestamp_format() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = write_config(&temp_dir, "timestamp_format = \"%Y-%m-%\"\n");

        let result = Config::load(Some(&path));
        assert!(result.unwrap_err().to_string().contains("not a valid strftime pattern"));
    }

    #[test]
    fn test_missing_config_file() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = Utf8PathBuf::from_path_buf(temp_dir.path().join("absent.toml")).unwrap();

        let result = Config::load(Some(&path));
        assert!(result.unwrap_err().to_string().contains("reading configuration file"));
    }
}
