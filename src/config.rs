//! Application configuration.

use crate::consts::cli_consts::polling::refresh_interval;
use crate::environment::Environment;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the dashboard API, overriding the environment default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,

    /// Seconds between unconditional refreshes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_interval_secs: Option<u64>,
}

impl Config {
    /// Create Config with the given API URL.
    pub fn new(api_url: Option<String>, refresh_interval_secs: Option<u64>) -> Self {
        Config {
            api_url,
            refresh_interval_secs,
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

    /// Loads the configuration if the file exists, falling back to defaults otherwise.
    pub fn load_or_default(path: &Path) -> Result<Self, std::io::Error> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            Ok(Self::default())
        }
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

    /// Removes the configuration file. A missing file is not an error.
    pub fn clear(path: &Path) -> Result<(), std::io::Error> {
        match fs::remove_file(path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e),
        }
    }
}

impl Config {
    /// Pick the environment to read from.
    ///
    /// Precedence: `--api-url` flag, then the config file, then the
    /// `DASHBOARD_ENVIRONMENT` variable, then production.
    pub fn resolve_environment(
        &self,
        flag: Option<&str>,
        env_var: Option<&str>,
    ) -> Result<Environment, String> {
        if let Some(url) = flag {
            return url
                .parse::<Environment>()
                .map_err(|_| format!("Invalid API URL: {}", url));
        }
        if let Some(url) = self.api_url.as_deref().filter(|url| !url.is_empty()) {
            return url
                .parse::<Environment>()
                .map_err(|_| format!("Invalid API URL in config file: {}", url));
        }
        Ok(env_var
            .and_then(|value| value.parse::<Environment>().ok())
            .unwrap_or_default())
    }

    /// Refresh interval: flag, then config file, then the default. Never zero.
    pub fn resolve_refresh_interval(&self, flag: Option<u64>) -> Duration {
        flag.or(self.refresh_interval_secs)
            .map(|secs| Duration::from_secs(secs.max(1)))
            .unwrap_or_else(refresh_interval)
    }
}

/// Location of the configuration file: `~/.zakat-dashboard/config.json`.
pub fn get_config_path() -> Result<PathBuf, std::io::Error> {
    let home = home::home_dir().ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "Could not determine home directory",
        )
    })?;
    Ok(home.join(".zakat-dashboard").join("config.json"))
}
