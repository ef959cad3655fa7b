//! Application configuration
//!
//! Settings are layered: built-in defaults, then an optional
//! `ticket-tracker.toml` in the platform config directory, then one in
//! the working directory. Command-line flags override everything.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::Result;

/// Config file name looked up in the config and working directories
const CONFIG_FILE: &str = "ticket-tracker";

/// User-tunable application settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Start each session with the example ticket
    pub seed_example: bool,
    /// chrono format string for ticket timestamps
    pub date_format: String,
    /// Disable colored output
    pub no_color: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed_example: true,
            date_format: "%a %d %b %H:%M".to_string(),
            no_color: false,
        }
    }
}

impl AppConfig {
    /// Loads configuration from the standard locations
    ///
    /// Missing files are fine; a malformed file is an error.
    pub fn load() -> Result<Self> {
        let mut builder = config::Config::builder()
            .set_default("seed_example", true)?
            .set_default("date_format", "%a %d %b %H:%M")?
            .set_default("no_color", false)?;

        if let Some(dirs) = ProjectDirs::from("", "", "ticket-tracker") {
            let path = dirs.config_dir().join(format!("{CONFIG_FILE}.toml"));
            debug!(path = %path.display(), "checking user config");
            builder = builder.add_source(config::File::from(path).required(false));
        }

        builder = builder.add_source(config::File::with_name(CONFIG_FILE).required(false));

        let config = builder.build()?.try_deserialize()?;
        debug!(?config, "configuration loaded");
        Ok(config)
    }

    /// Loads configuration from an explicit file path
    pub fn load_from(path: &Path) -> Result<Self> {
        let config = config::Config::builder()
            .set_default("seed_example", true)?
            .set_default("date_format", "%a %d %b %H:%M")?
            .set_default("no_color", false)?
            .add_source(config::File::from(PathBuf::from(path)))
            .build()?
            .try_deserialize()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert!(config.seed_example);
        assert!(!config.no_color);
        assert_eq!(config.date_format, "%a %d %b %H:%M");
    }

    #[test]
    fn test_load_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ticket-tracker.toml");
        fs::write(&path, "seed_example = false\nno_color = true\n").unwrap();

        let config = AppConfig::load_from(&path).unwrap();
        assert!(!config.seed_example);
        assert!(config.no_color);
        // Unspecified keys fall back to defaults
        assert_eq!(config.date_format, "%a %d %b %H:%M");
    }

    #[test]
    fn test_load_from_malformed_file_errors() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ticket-tracker.toml");
        fs::write(&path, "seed_example = [not toml").unwrap();

        assert!(AppConfig::load_from(&path).is_err());
    }
}
