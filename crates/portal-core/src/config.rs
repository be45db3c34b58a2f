//! Server configuration
//!
//! Loaded from a TOML file; every field has a default so a missing file or a
//! partial file both work. CLI flags override whatever was loaded.

use crate::error::PortalError;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Configuration for the portal server
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Port for the API server
    pub port: u16,
    /// Database file path; the platform data dir is used when unset
    pub database: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8355,
            database: None,
        }
    }
}

impl ServerConfig {
    /// Load from a TOML file
    pub fn load(path: &Path) -> Result<Self, PortalError> {
        let raw = std::fs::read_to_string(path).map_err(|source| PortalError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&raw).map_err(|e| PortalError::ConfigParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Load from a TOML file if it exists, defaults otherwise
    pub fn load_or_default(path: &Path) -> Result<Self, PortalError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: ServerConfig = toml::from_str("port = 9000").unwrap();
        assert_eq!(config.port, 9000);
        assert!(config.database.is_none());
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let config = ServerConfig::load_or_default(Path::new("/nonexistent/portal.toml")).unwrap();
        assert_eq!(config.port, 8355);
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("portal.toml");
        std::fs::write(&path, "port = \"not a number\"").unwrap();
        assert!(matches!(
            ServerConfig::load(&path),
            Err(PortalError::ConfigParse { .. })
        ));
    }
}
