//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides. Everything
//! is resolved once at startup; the pages never read the environment.
//!
//! Loading runs before the log subscriber exists, so problems found along
//! the way are collected in a [`ConfigLoad`] and reported once logging is
//! up.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::api::DEFAULT_API_BASE;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Commander API configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    DEFAULT_API_BASE.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl LogFormat {
    fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" => Some(LogFormat::Pretty),
            "json" => Some(LogFormat::Json),
            _ => None,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default)]
    pub format: LogFormat,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

/// Outcome of resolving the configuration at startup
#[derive(Debug)]
pub struct ConfigLoad {
    pub config: Config,
    /// File the config came from, `None` when running on defaults
    pub source: Option<PathBuf>,
    /// Problems skipped over while loading
    pub warnings: Vec<ConfigError>,
}

impl ConfigLoad {
    /// Log where the config came from and everything that was skipped
    pub fn report(&self) {
        for warning in &self.warnings {
            tracing::warn!("{}", warning);
        }

        match &self.source {
            Some(path) => tracing::info!("Loaded config from {:?}", path),
            None => tracing::info!("Using default config with environment overrides"),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(path, &content)
    }

    fn parse(path: &Path, content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> ConfigLoad {
        let mut config = Config::default();
        let warnings = config.apply_env_overrides();

        ConfigLoad {
            config,
            source: None,
            warnings,
        }
    }

    /// Load a specific file with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<ConfigLoad, ConfigError> {
        let mut config = Self::load(path)?;
        let warnings = config.apply_env_overrides();

        Ok(ConfigLoad {
            config,
            source: Some(path.to_path_buf()),
            warnings,
        })
    }

    /// Load from default locations or environment
    pub fn load_default() -> ConfigLoad {
        Self::load_from_paths(&Self::default_paths())
    }

    /// Load the first readable file among `paths`, falling back to defaults
    pub fn load_from_paths(paths: &[PathBuf]) -> ConfigLoad {
        Self::load_from_paths_with(paths, |key| std::env::var(key).ok())
    }

    fn load_from_paths_with(
        paths: &[PathBuf],
        lookup: impl Fn(&str) -> Option<String>,
    ) -> ConfigLoad {
        let mut warnings = Vec::new();
        let mut found = None;

        for path in paths {
            if !path.exists() {
                continue;
            }
            match Self::load(path) {
                Ok(config) => {
                    found = Some((config, path.clone()));
                    break;
                }
                Err(e) => warnings.push(e),
            }
        }

        let (mut config, source) = match found {
            Some((config, path)) => (config, Some(path)),
            None => (Config::default(), None),
        };
        warnings.extend(config.apply_overrides(lookup));

        ConfigLoad {
            config,
            source,
            warnings,
        }
    }

    /// Candidate config file locations, in lookup order
    pub fn default_paths() -> Vec<PathBuf> {
        [
            dirs::config_dir().map(|p| p.join("commander").join("config.toml")),
            Some(PathBuf::from("./config.toml")),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    fn apply_env_overrides(&mut self) -> Vec<ConfigError> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from any key lookup, returning the ones rejected
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Vec<ConfigError> {
        let mut rejected = Vec::new();

        if let Some(url) = lookup("COMMANDER_API_URL") {
            self.api.base_url = url;
        }

        if let Some(level) = lookup("COMMANDER_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("COMMANDER_LOG_FORMAT") {
            match LogFormat::parse(&format) {
                Some(f) => self.logging.format = f,
                None => rejected.push(ConfigError::InvalidValue {
                    key: "COMMANDER_LOG_FORMAT".to_string(),
                    value: format,
                }),
            }
        }

        rejected
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },

    #[error("Ignoring {key}='{value}': not a recognized value")]
    InvalidValue { key: String, value: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    format!(
        r#"# Commander Randomizer Configuration
#
# Environment variables override these settings:
# - COMMANDER_API_URL
# - COMMANDER_LOG_LEVEL
# - COMMANDER_LOG_FORMAT

[api]
# Base URL of the commander API; "/commander" is appended
base_url = "{}"

[logging]
# Log level: trace, debug, info, warn, error (RUST_LOG wins when set)
level = "warn"

# Log format: pretty or json
format = "pretty"
"#,
        DEFAULT_API_BASE
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.api.base_url, DEFAULT_API_BASE);
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.logging.format, LogFormat::Pretty);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[api]\nbase_url = \"https://api.example.com\"\n\n[logging]\nformat = \"json\""
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.api.base_url, "https://api.example.com");
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.api.base_url, DEFAULT_API_BASE);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(&dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_invalid_toml_is_parse_error() {
        let err = Config::parse(Path::new("bad.toml"), "[api\nbase_url =").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            ("COMMANDER_API_URL", "http://deploy:9000"),
            ("COMMANDER_LOG_LEVEL", "debug"),
            ("COMMANDER_LOG_FORMAT", "JSON"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_overrides(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.api.base_url, "http://deploy:9000");
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_unknown_format_override_is_reported() {
        let mut config = Config::default();
        let rejected =
            config.apply_overrides(|key| (key == "COMMANDER_LOG_FORMAT").then(|| "xml".to_string()));

        assert_eq!(config.logging.format, LogFormat::Pretty);
        assert!(matches!(
            rejected.as_slice(),
            [ConfigError::InvalidValue { key, value }] if key == "COMMANDER_LOG_FORMAT" && value == "xml"
        ));
    }

    #[test]
    fn test_malformed_default_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let bad = dir.path().join("config.toml");
        std::fs::write(&bad, "[api\nbase_url =").unwrap();

        let loaded = Config::load_from_paths_with(&[bad.clone()], |_| None);

        assert!(loaded.source.is_none());
        assert_eq!(loaded.config.api.base_url, DEFAULT_API_BASE);
        match loaded.warnings.as_slice() {
            [ConfigError::Parse { path, .. }] => assert_eq!(path, &bad),
            other => panic!("expected one parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_first_good_file_wins_after_bad_one() {
        let dir = tempfile::tempdir().unwrap();
        let bad = dir.path().join("bad.toml");
        let good = dir.path().join("good.toml");
        std::fs::write(&bad, "not = [toml").unwrap();
        std::fs::write(&good, "[api]\nbase_url = \"http://good:1\"").unwrap();
        let missing = dir.path().join("missing.toml");

        let loaded = Config::load_from_paths_with(&[missing, bad, good.clone()], |_| None);

        assert_eq!(loaded.source, Some(good));
        assert_eq!(loaded.config.api.base_url, "http://good:1");
        assert_eq!(loaded.warnings.len(), 1);
    }

    #[test]
    fn test_no_files_means_defaults_without_warnings() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = Config::load_from_paths_with(&[dir.path().join("none.toml")], |key| {
            (key == "COMMANDER_API_URL").then(|| "http://env:2".to_string())
        });

        assert!(loaded.source.is_none());
        assert!(loaded.warnings.is_empty());
        assert_eq!(loaded.config.api.base_url, "http://env:2");
    }

    #[test]
    fn test_generated_config_parses() {
        let config = Config::parse(Path::new("default.toml"), &generate_default_config()).unwrap();
        assert_eq!(config.api.base_url, DEFAULT_API_BASE);
        assert_eq!(config.logging.level, "warn");
    }
}
