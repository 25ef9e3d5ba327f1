// Configuration module for hopsuggest
// This module handles loading and parsing configuration from ~/.config/hopsuggest/config.toml

mod types;

pub use types::{Config, HotelsConfig, PlacesConfig, RemoteConfig};

use std::fs;
use std::path::{Path, PathBuf};

/// Result of loading configuration
pub struct ConfigResult {
    pub config: Config,
    pub warning: Option<String>,
}

/// Loads configuration from ~/.config/hopsuggest/config.toml
/// Returns default configuration if file doesn't exist or on parse errors
pub fn load_config() -> ConfigResult {
    load_config_from(&get_config_path())
}

/// Loads configuration from an explicit path (the CLI's `--config` flag)
pub fn load_config_from(config_path: &Path) -> ConfigResult {
    log::debug!("Loading config from {:?}", config_path);

    // If file doesn't exist, return defaults silently
    if !config_path.exists() {
        log::debug!("Config file does not exist, using defaults");
        return ConfigResult {
            config: Config::default(),
            warning: None,
        };
    }

    // Try to read the file
    let contents = match fs::read_to_string(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            log::warn!("Failed to read config file {:?}: {}", config_path, e);
            return ConfigResult {
                config: Config::default(),
                warning: Some(format!("Failed to read config: {}", e)),
            };
        }
    };

    // Try to parse TOML
    match toml::from_str::<Config>(&contents) {
        Ok(config) => ConfigResult {
            config,
            warning: None,
        },
        Err(e) => {
            log::warn!("Failed to parse config file {:?}: {}", config_path, e);
            ConfigResult {
                config: Config::default(),
                warning: Some(format!("Invalid config: {}", e)),
            }
        }
    }
}

/// Returns the path to the configuration file
///
/// Always uses ~/.config/hopsuggest/config.toml on all platforms for consistency.
fn get_config_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("hopsuggest")
        .join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file_returns_defaults_without_warning() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_config_from(&dir.path().join("nope.toml"));

        assert!(result.warning.is_none());
        assert_eq!(result.config.remote.timeout_secs, 10);
    }

    #[test]
    fn test_valid_file_is_loaded() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[remote]\ntimeout_secs = 4").unwrap();

        let result = load_config_from(file.path());
        assert!(result.warning.is_none());
        assert_eq!(result.config.remote.timeout_secs, 4);
    }

    #[test]
    fn test_malformed_file_warns_and_falls_back() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[remote\ntimeout_secs = 4").unwrap();

        let result = load_config_from(file.path());
        assert!(result.warning.as_deref().unwrap_or("").starts_with("Invalid config"));
        assert_eq!(result.config.remote.timeout_secs, 10);
    }

    #[test]
    fn test_wrong_value_type_warns_and_falls_back() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[remote]\ntimeout_secs = \"fast\"").unwrap();

        let result = load_config_from(file.path());
        assert!(result.warning.is_some());
        assert_eq!(result.config.remote.timeout_secs, 10);
    }

    #[test]
    fn test_default_config_path_location() {
        let path = get_config_path();
        let path_str = path.to_string_lossy();
        assert!(
            path_str.ends_with("hopsuggest/config.toml")
                || path_str.ends_with("hopsuggest\\config.toml"),
            "Config path should end with hopsuggest/config.toml, got: {}",
            path_str
        );
    }
}
