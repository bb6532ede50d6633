use crate::config::{self, DataSource};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

const SETTINGS_FILE: &str = "fraudwatch_settings.json";

fn default_api_base_url() -> String {
    config::DEFAULT_API_URL.to_string()
}

fn default_auto_refresh_secs() -> u64 {
    config::DEFAULT_REFRESH_SECS
}

fn default_export_directory() -> String {
    String::new() // empty means use the config default
}

/// User settings that persist between sessions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSettings {
    /// Base URL of the fraud-detection API
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    /// Live API or locally generated mock data
    #[serde(default)]
    pub data_source: DataSource,
    /// Auto-refresh interval in seconds (0 disables)
    #[serde(default = "default_auto_refresh_secs")]
    pub auto_refresh_secs: u64,
    /// Directory for CSV exports (empty = config default)
    #[serde(default = "default_export_directory")]
    pub export_directory: String,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            data_source: DataSource::default(),
            auto_refresh_secs: default_auto_refresh_secs(),
            export_directory: default_export_directory(),
        }
    }
}

impl UserSettings {
    /// Get the settings file path
    fn settings_path() -> PathBuf {
        // Try to use the app data directory, fall back to current directory
        if let Some(config_dir) = dirs::config_dir() {
            let app_dir = config_dir.join("fraudwatch");
            if !app_dir.exists() {
                let _ = fs::create_dir_all(&app_dir);
            }
            app_dir.join(SETTINGS_FILE)
        } else {
            PathBuf::from(SETTINGS_FILE)
        }
    }

    /// Load settings from disk, or return defaults if not found
    pub fn load() -> Self {
        let path = Self::settings_path();
        if path.exists() {
            match fs::read_to_string(&path) {
                Ok(content) => match serde_json::from_str(&content) {
                    Ok(settings) => {
                        tracing::info!("Loaded settings from {:?}", path);
                        return settings;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to parse settings file: {}", e);
                    }
                },
                Err(e) => {
                    tracing::warn!("Failed to read settings file: {}", e);
                }
            }
        }
        tracing::info!("Using default settings");
        Self::default()
    }

    /// Save settings to disk
    pub fn save(&self) -> Result<()> {
        let path = Self::settings_path();
        let content = serde_json::to_string_pretty(self)?;
        fs::write(&path, content)?;
        tracing::info!("Saved settings to {:?}", path);
        Ok(())
    }

    /// Apply the persisted settings on top of an env-derived config.
    pub fn apply_to(&self, config: &mut crate::config::Config) {
        config.api_base_url = self.api_base_url.clone();
        config.data_source = self.data_source;
        config.auto_refresh_secs = self.auto_refresh_secs;
        if !self.export_directory.trim().is_empty() {
            config.export_directory = self.export_directory.clone();
        }
    }

    /// Get the settings file path for display
    pub fn settings_path_display() -> String {
        Self::settings_path().display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_settings_default_values() {
        let settings = UserSettings::default();
        assert_eq!(settings.api_base_url, config::DEFAULT_API_URL);
        assert_eq!(settings.data_source, DataSource::Mock);
        assert_eq!(settings.auto_refresh_secs, config::DEFAULT_REFRESH_SECS);
        assert!(settings.export_directory.is_empty());
    }

    #[test]
    fn test_partial_settings_file_fills_defaults() {
        let settings: UserSettings =
            serde_json::from_str(r#"{"api_base_url": "http://fraud.internal/api/v1"}"#).unwrap();
        assert_eq!(settings.api_base_url, "http://fraud.internal/api/v1");
        assert_eq!(settings.auto_refresh_secs, config::DEFAULT_REFRESH_SECS);
    }

    #[test]
    fn test_apply_to_overrides_config() {
        let mut config = crate::config::Config::default();
        config.export_directory = "/tmp/exports".to_string();

        let mut settings = UserSettings::default();
        settings.api_base_url = "http://other/api".to_string();
        settings.data_source = DataSource::Live;
        settings.apply_to(&mut config);

        assert_eq!(config.api_base_url, "http://other/api");
        assert_eq!(config.data_source, DataSource::Live);
        // Empty export directory keeps the config default
        assert_eq!(config.export_directory, "/tmp/exports");
    }
}
