use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

/// Base URL of the weather backend when the config file has no override.
const DEFAULT_ENDPOINT: &str = "http://localhost:8000";

/// Where provider-hosted condition icons live; `{icon}` is replaced with
/// the icon identifier from a report.
const DEFAULT_ICON_URL: &str = "https://openweathermap.org/img/wn/{icon}@2x.png";

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// endpoint = "http://localhost:8000"
/// icon_url = "https://openweathermap.org/img/wn/{icon}@2x.png"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the weather backend.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Icon image URL template with an `{icon}` placeholder.
    #[serde(default = "default_icon_url")]
    pub icon_url: String,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_icon_url() -> String {
    DEFAULT_ICON_URL.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            icon_url: default_icon_url(),
        }
    }
}

impl Config {
    /// URL of the single read endpoint the backend exposes.
    pub fn weather_url(&self) -> String {
        format!("{}/weather", self.endpoint.trim_end_matches('/'))
    }

    /// Resolve the icon template against an icon identifier.
    pub fn icon_image_url(&self, icon: &str) -> String {
        self.icon_url.replace("{icon}", icon)
    }

    /// Load config from disk, or return the defaults if no file exists yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            // First run: no config file, defaults are fine.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "cityweather", "cityweather-cli")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}
