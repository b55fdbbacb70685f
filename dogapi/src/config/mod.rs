//! Configuration file support.
//!
//! Settings live in an INI file, by default
//! `~/.config/dogapi/config.ini` (platform config dir via `dirs`).
//!
//! ```ini
//! [api]
//! base_url = https://dog.ceo/api
//! timeout_secs = 30
//!
//! [logging]
//! level = info
//! file = /tmp/dogapi.log
//! ```
//!
//! Missing files, sections and keys fall back to defaults.

use std::path::{Path, PathBuf};

use ini::Ini;
use thiserror::Error;

use crate::provider::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};

/// Name of the application directory inside the platform config dir.
pub const CONFIG_DIR_NAME: &str = "dogapi";

/// Name of the configuration file.
pub const CONFIG_FILE_NAME: &str = "config.ini";

/// Default log filter directive.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Errors that can occur while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file exists but could not be read or parsed.
    #[error("Failed to read config file {path}: {message}")]
    Read { path: PathBuf, message: String },

    /// A key holds a value that cannot be used.
    #[error("Invalid value for [{section}] {key}: {value}")]
    InvalidValue {
        section: String,
        key: String,
        value: String,
    },
}

/// Remote API settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL of the Dog API, without trailing slash.
    pub base_url: String,

    /// HTTP request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// `tracing` filter directive (e.g. `info`, `dogapi=debug`).
    pub level: String,

    /// Optional log file. Logs go to stderr when unset.
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            file: None,
        }
    }
}

/// Parsed configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigFile {
    pub api: ApiConfig,
    pub logging: LoggingConfig,
}

impl ConfigFile {
    /// Default config file location, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Loads the config from the default location, or defaults if absent.
    pub fn load_default() -> Result<Self, ConfigError> {
        match Self::default_path() {
            Some(path) => Self::load(&path),
            None => Ok(Self::default()),
        }
    }

    /// Loads the config from `path`. A missing file yields defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let ini = Ini::load_from_file(path).map_err(|e| ConfigError::Read {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_ini(&ini)
    }

    /// Parses config from an INI string.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let ini = Ini::load_from_str(content).map_err(|e| ConfigError::Read {
            path: PathBuf::from("<string>"),
            message: e.to_string(),
        })?;
        Self::from_ini(&ini)
    }

    fn from_ini(ini: &Ini) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(section) = ini.section(Some("api")) {
            if let Some(url) = section.get("base_url") {
                let url = url.trim().trim_end_matches('/');
                if url.is_empty() {
                    return Err(invalid("api", "base_url", url));
                }
                config.api.base_url = url.to_string();
            }
            if let Some(timeout) = section.get("timeout_secs") {
                config.api.timeout_secs = match timeout.trim().parse::<u64>() {
                    Ok(secs) if secs > 0 => secs,
                    _ => return Err(invalid("api", "timeout_secs", timeout)),
                };
            }
        }

        if let Some(section) = ini.section(Some("logging")) {
            if let Some(level) = section.get("level").map(str::trim) {
                if !level.is_empty() {
                    config.logging.level = level.to_string();
                }
            }
            if let Some(file) = section.get("file").map(str::trim) {
                if !file.is_empty() {
                    config.logging.file = Some(PathBuf::from(file));
                }
            }
        }

        Ok(config)
    }
}

fn invalid(section: &str, key: &str, value: &str) -> ConfigError {
    ConfigError::InvalidValue {
        section: section.to_string(),
        key: key.to_string(),
        value: value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_defaults() {
        let config = ConfigFile::default();
        assert_eq!(config.api.base_url, "https://dog.ceo/api");
        assert_eq!(config.api.timeout_secs, 30);
        assert_eq!(config.logging.level, "info");
        assert!(config.logging.file.is_none());
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = ConfigFile::load(&dir.path().join("nope.ini")).unwrap();
        assert_eq!(config, ConfigFile::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.ini");
        fs::write(
            &path,
            "[api]\nbase_url = http://localhost:9000/api/\ntimeout_secs = 5\n\n\
             [logging]\nlevel = dogapi=debug\nfile = /tmp/dogapi.log\n",
        )
        .unwrap();

        let config = ConfigFile::load(&path).unwrap();
        assert_eq!(config.api.base_url, "http://localhost:9000/api");
        assert_eq!(config.api.timeout_secs, 5);
        assert_eq!(config.logging.level, "dogapi=debug");
        assert_eq!(config.logging.file, Some(PathBuf::from("/tmp/dogapi.log")));
    }

    #[test]
    fn test_partial_sections_keep_defaults() {
        let config = ConfigFile::parse("[logging]\nlevel = warn\n").unwrap();
        assert_eq!(config.api, ApiConfig::default());
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_empty_logging_values_are_ignored() {
        let config = ConfigFile::parse("[logging]\nlevel =\nfile =\n").unwrap();
        assert_eq!(config.logging, LoggingConfig::default());
    }

    #[test]
    fn test_invalid_timeout_rejected() {
        let err = ConfigFile::parse("[api]\ntimeout_secs = soon\n").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref key, .. } if key == "timeout_secs"));

        assert!(ConfigFile::parse("[api]\ntimeout_secs = 0\n").is_err());
    }

    #[test]
    fn test_empty_base_url_rejected() {
        let err = ConfigFile::parse("[api]\nbase_url = /\n").unwrap_err();
        assert!(err.to_string().contains("base_url"));
    }

    #[test]
    fn test_default_path_ends_with_file_name() {
        if let Some(path) = ConfigFile::default_path() {
            assert!(path.ends_with("dogapi/config.ini"));
        }
    }
}
