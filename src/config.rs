//! Application configuration.
//!
//! Configuration is loaded from environment variables with fallback to defaults.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

/// Runtime configuration of the PetCare core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Directory holding the persisted session record
    pub data_dir: PathBuf,

    /// Capacity of each slice's request channel
    pub slice_buffer: usize,

    /// Default tracing filter, used when `RUST_LOG` is not set
    pub log_filter: String,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let data_dir = match lookup("PETCARE_DATA_DIR") {
            Some(dir) if !dir.trim().is_empty() => PathBuf::from(dir),
            Some(_) => return Err(ConfigError::InvalidValue("PETCARE_DATA_DIR".to_string())),
            None => default_data_dir()?,
        };

        let slice_buffer: usize = lookup("PETCARE_SLICE_BUFFER")
            .unwrap_or_else(|| "32".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidValue("PETCARE_SLICE_BUFFER".to_string()))?;

        // A zero-capacity channel cannot be created.
        if slice_buffer == 0 {
            return Err(ConfigError::InvalidValue("PETCARE_SLICE_BUFFER".to_string()));
        }

        let log_filter = lookup("PETCARE_LOG").unwrap_or_else(|| "info".to_string());

        Ok(AppConfig {
            data_dir,
            slice_buffer,
            log_filter,
        })
    }
}

fn default_data_dir() -> Result<PathBuf, ConfigError> {
    ProjectDirs::from("com", "petcare", "petcare")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or(ConfigError::NoDataDir)
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Could not determine app data directory")]
    NoDataDir,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_explicit_values() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("PETCARE_DATA_DIR", "/tmp/petcare"),
            ("PETCARE_SLICE_BUFFER", "8"),
            ("PETCARE_LOG", "debug"),
        ]))
        .unwrap();

        assert_eq!(config.data_dir, PathBuf::from("/tmp/petcare"));
        assert_eq!(config.slice_buffer, 8);
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_lookup(lookup_from(&[("PETCARE_DATA_DIR", "/tmp/p")])).unwrap();
        assert_eq!(config.slice_buffer, 32);
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn test_invalid_buffer() {
        let err = AppConfig::from_lookup(lookup_from(&[
            ("PETCARE_DATA_DIR", "/tmp/p"),
            ("PETCARE_SLICE_BUFFER", "lots"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(ref key) if key == "PETCARE_SLICE_BUFFER"));

        let err = AppConfig::from_lookup(lookup_from(&[
            ("PETCARE_DATA_DIR", "/tmp/p"),
            ("PETCARE_SLICE_BUFFER", "0"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(_)));
    }

    #[test]
    fn test_blank_data_dir_is_rejected() {
        let err = AppConfig::from_lookup(lookup_from(&[("PETCARE_DATA_DIR", "  ")])).unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for PETCARE_DATA_DIR");
    }
}
