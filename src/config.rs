//! Application configuration.

use crate::environment::{Environment, InvalidEnvironment};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Environment variable that overrides the configured API root.
pub const API_URL_ENV_VAR: &str = "BILLIONAIRES_API_URL";

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// API root of the billionaires service, e.g. `https://host/api`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,
}

impl Config {
    /// Create Config pointing at the given API root.
    pub fn new(api_url: String) -> Self {
        Config {
            api_url: Some(api_url),
        }
    }

    /// Loads configuration from a JSON file at the given path.
    ///
    /// # Errors
    /// Returns an `std::io::Error` if reading from file fails or JSON is invalid.
    pub fn load_from_file(path: &Path) -> Result<Self, std::io::Error> {
        let buf = fs::read(path)?;
        let config: Config = serde_json::from_slice(&buf)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        Ok(config)
    }

    /// Saves the configuration to a JSON file at the given path.
    ///
    /// Directories will be created if they don't exist. This method overwrites existing files.
    ///
    /// # Errors
    /// Returns an `std::io::Error` if writing to file fails or serialization fails.
    pub fn save(&self, path: &Path) -> Result<(), std::io::Error> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("Serialization failed: {}", e),
            )
        })?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Removes the configuration file, if present.
    pub fn clear(path: &Path) -> Result<(), std::io::Error> {
        match fs::remove_file(path) {
            Err(e) if e.kind() != std::io::ErrorKind::NotFound => Err(e),
            _ => Ok(()),
        }
    }
}

/// Directory holding the config file and the dashboard log.
pub fn get_app_dir() -> Result<PathBuf, std::io::Error> {
    let home = home::home_dir().ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "Could not determine the home directory",
        )
    })?;
    Ok(home.join(".billionaires"))
}

pub fn get_config_path() -> Result<PathBuf, std::io::Error> {
    Ok(get_app_dir()?.join("config.json"))
}

/// Picks the service environment.
///
/// Precedence: command-line flag, then environment variable, then the config
/// file, then [`Environment::Local`].
pub fn resolve_environment(
    flag: Option<&str>,
    env_var: Option<&str>,
    config: Option<&Config>,
) -> Result<Environment, InvalidEnvironment> {
    let present = |value: &&str| !value.trim().is_empty();
    let configured = config.and_then(|c| c.api_url.as_deref());
    match flag
        .filter(present)
        .or(env_var.filter(present))
        .or(configured.filter(present))
    {
        Some(value) => value.parse(),
        None => Ok(Environment::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    // Loading a saved configuration file should return the same configuration.
    fn test_load_recovers_saved_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");

        let config = Config::new("http://localhost:8080/api".to_string());
        config.save(&path).unwrap();

        let loaded_config = Config::load_from_file(&path).unwrap();
        assert_eq!(config, loaded_config);
    }

    #[test]
    // Saving a configuration should create directories if they don't exist.
    fn test_save_creates_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nonexistent_dir").join("config.json");

        let config = Config::new("http://localhost:8080/api".to_string());
        let result = config.save(&path);

        assert!(result.is_ok(), "Failed to save config");
        assert!(
            path.parent().unwrap().exists(),
            "Parent directory does not exist"
        );
    }

    #[test]
    // Loading an invalid JSON file should return an error.
    fn test_load_rejects_invalid_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("invalid_config.json");

        let mut file = File::create(&path).unwrap();
        writeln!(file, "invalid json").unwrap();

        let result = Config::load_from_file(&path);
        assert!(result.is_err());
    }

    #[test]
    // Clearing a missing config file is not an error.
    fn test_clear_missing_file_is_ok() {
        let dir = tempdir().unwrap();
        assert!(Config::clear(&dir.path().join("config.json")).is_ok());
    }

    #[test]
    fn test_flag_wins_over_env_and_file() {
        let config = Config::new("http://file.example/api".to_string());
        let env = resolve_environment(
            Some("http://flag.example/api"),
            Some("http://env.example/api"),
            Some(&config),
        )
        .unwrap();
        assert_eq!(env.api_url(), "http://flag.example/api");
    }

    #[test]
    fn test_env_var_wins_over_file() {
        let config = Config::new("http://file.example/api".to_string());
        let env = resolve_environment(None, Some("http://env.example/api"), Some(&config)).unwrap();
        assert_eq!(env.api_url(), "http://env.example/api");
    }

    #[test]
    fn test_blank_env_var_falls_through_to_file() {
        let config = Config::new("http://file.example/api".to_string());
        let env = resolve_environment(None, Some("  "), Some(&config)).unwrap();
        assert_eq!(env.api_url(), "http://file.example/api");
    }

    #[test]
    fn test_defaults_to_local() {
        let env = resolve_environment(None, Some("  "), Some(&Config::default())).unwrap();
        assert_eq!(env, Environment::Local);
    }
}
