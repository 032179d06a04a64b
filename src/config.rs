//! User configuration stored as JSON in the platform config directory.

use crate::data::{DataSource, DEFAULT_HTTP_TIMEOUT_SECS};
use crate::selection::TraitFilter;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

const CONFIG_FILE: &str = "config.json";

/// Directory used when neither a data directory nor a URL is configured
pub const DEFAULT_DATA_DIR: &str = "data";

/// A config file exists but cannot be used.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("{path} is not a valid config file: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Local directory holding the datasets
    pub data_dir: Option<PathBuf>,

    /// Base URL serving the datasets (takes precedence over `data_dir`)
    pub data_url: Option<String>,

    /// Leader filter applied at startup
    pub default_filter: TraitFilter,

    /// Also filter the civilization lists by the selected trait
    pub filter_civilizations: bool,

    pub http_timeout_secs: u64,

    /// Log level used when RUST_LOG is unset
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            data_url: None,
            default_filter: TraitFilter::All,
            filter_civilizations: false,
            http_timeout_secs: DEFAULT_HTTP_TIMEOUT_SECS,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Load from the user's config directory. A missing file is not an error.
    pub fn load() -> Result<Self, ConfigError> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let json = match fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.display().to_string(),
                    source,
                })
            }
        };
        serde_json::from_str(&json).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    /// Like [`AppConfig::load`], but an unusable file yields defaults plus the
    /// error, so the caller can report it once logging is up.
    pub fn load_or_default() -> (Self, Option<ConfigError>) {
        match Self::load() {
            Ok(config) => (config, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    pub fn save_to(&self, path: &Path) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        fs::write(path, json)
    }

    /// Resolve where datasets come from: URL first, then directory, then `./data`.
    pub fn data_source(&self) -> DataSource {
        if let Some(url) = &self.data_url {
            return DataSource::Url(url.clone());
        }
        DataSource::Directory(
            self.data_dir
                .clone()
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR)),
        )
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs.max(1))
    }
}

fn project_dirs() -> Option<directories::ProjectDirs> {
    directories::ProjectDirs::from("", "", "civpath")
}

/// `<config_dir>/civpath/config.json`
pub fn config_path() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILE))
}

/// Directory for the TUI log file.
pub fn log_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.data_local_dir().to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_source_is_local_data_dir() {
        let config = AppConfig::default();
        assert_eq!(
            config.data_source(),
            DataSource::Directory(PathBuf::from("data"))
        );
    }

    #[test]
    fn test_url_takes_precedence() {
        let config = AppConfig {
            data_dir: Some(PathBuf::from("/srv/civ")),
            data_url: Some("https://example.org".to_string()),
            ..Default::default()
        };
        assert_eq!(
            config.data_source(),
            DataSource::Url("https://example.org".to_string())
        );
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: AppConfig =
            serde_json::from_str(r#"{"default_filter":"scientific"}"#).unwrap();
        assert_eq!(config.default_filter, TraitFilter::Scientific);
        assert!(!config.filter_civilizations);
        assert_eq!(config.http_timeout_secs, DEFAULT_HTTP_TIMEOUT_SECS);
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(CONFIG_FILE);
        let config = AppConfig {
            filter_civilizations: true,
            log_level: "debug".to_string(),
            ..Default::default()
        };
        config.save_to(&path).unwrap();
        assert_eq!(AppConfig::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        assert_eq!(AppConfig::load_from(&path).unwrap(), AppConfig::default());
    }

    #[test]
    fn test_invalid_file_surfaces_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "{ not json").unwrap();

        let err = AppConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains(CONFIG_FILE));
    }

    #[test]
    fn test_directory_in_place_of_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::create_dir(&path).unwrap();
        assert!(matches!(
            AppConfig::load_from(&path),
            Err(ConfigError::Read { .. })
        ));
    }

    #[test]
    fn test_timeout_never_zero() {
        let config = AppConfig {
            http_timeout_secs: 0,
            ..Default::default()
        };
        assert_eq!(config.http_timeout(), Duration::from_secs(1));
    }
}
