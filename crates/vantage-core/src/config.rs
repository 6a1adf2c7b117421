//! Configuration for Vantage.
//!
//! Loads configuration from ${VANTAGE_HOME}/config.toml with sensible
//! defaults. A missing file is not an error; every field has a default.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Route the session controller navigates to after a successful logout.
    pub landing_route: String,
    /// Placeholder email the login form is prefilled with.
    pub demo_email: String,
    /// Placeholder password the login form is prefilled with.
    pub demo_password: String,
    /// When set, diagnostics are written to this file instead of stderr.
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            landing_route: "/".to_string(),
            demo_email: "demo@demo.com".to_string(),
            demo_password: "Password123".to_string(),
            log_file: None,
        }
    }
}

impl Config {
    /// Loads configuration from the default path.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if the file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            Ok(Config::default())
        }
    }
}

pub mod paths {
    //! Path resolution for Vantage configuration.
    //!
    //! VANTAGE_HOME resolution order:
    //! 1. VANTAGE_HOME environment variable (if set)
    //! 2. ~/.config/vantage (default)

    use std::path::PathBuf;

    /// Returns the Vantage home directory.
    pub fn vantage_home() -> PathBuf {
        if let Ok(home) = std::env::var("VANTAGE_HOME") {
            return PathBuf::from(home);
        }

        home_dir().join(".config").join("vantage")
    }

    /// Returns the user's home directory.
    pub fn home_dir() -> PathBuf {
        std::env::var("HOME").map_or_else(|_| PathBuf::from("."), PathBuf::from)
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        vantage_home().join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();

        assert_eq!(config.landing_route, "/");
        assert_eq!(config.demo_email, "demo@demo.com");
        assert_eq!(config.demo_password, "Password123");
        assert!(config.log_file.is_none());
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "landing_route = \"/dashboard\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.landing_route, "/dashboard");
        assert_eq!(config.demo_email, "demo@demo.com");
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "landing_route = [not toml").unwrap();

        assert!(Config::load_from(&path).is_err());
    }
}
