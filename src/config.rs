use serde::{Deserialize, Serialize};
use std::env;

/// Where the dashboard gets its data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DataSource {
    /// Fetch from the remote fraud-detection API.
    Live,
    /// Generate demo data locally.
    Mock,
}

impl Default for DataSource {
    fn default() -> Self {
        DataSource::Mock
    }
}

impl DataSource {
    pub fn label(&self) -> &'static str {
        match self {
            DataSource::Live => "Live API",
            DataSource::Mock => "Mock Data",
        }
    }
}

pub const DEFAULT_API_URL: &str = "http://localhost:8000/api/v1";
pub const DEFAULT_REFRESH_SECS: u64 = 30;
pub const DEFAULT_MOCK_TRANSACTIONS: usize = 100;
pub const DEFAULT_MOCK_ALERTS: usize = 25;

#[derive(Clone, Debug)]
pub struct Config {
    pub api_base_url: String,
    pub data_source: DataSource,
    pub auto_refresh_secs: u64, // 0 disables auto-refresh
    pub export_directory: String,
    pub mock_transaction_count: usize,
    pub mock_alert_count: usize,
}

impl Config {
    /// Build from environment, falling back to defaults. `dotenvy` is loaded
    /// in main before this runs.
    pub fn from_env() -> Self {
        let api_base_url =
            env::var("FRAUDWATCH_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        let data_source = match env::var("FRAUDWATCH_DATA_SOURCE").as_deref() {
            Ok("live") => DataSource::Live,
            Ok("mock") => DataSource::Mock,
            _ => DataSource::default(),
        };

        let auto_refresh_secs = env::var("FRAUDWATCH_REFRESH_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_REFRESH_SECS);

        // Default export directory to user's documents or current directory
        let export_directory = env::var("USERPROFILE")
            .or_else(|_| env::var("HOME"))
            .ok()
            .map(|home| {
                let mut path = std::path::PathBuf::from(home);
                path.push("Documents");
                path.push("Fraudwatch");
                path.to_string_lossy().to_string()
            })
            .unwrap_or_else(|| ".".to_string());

        Self {
            api_base_url,
            data_source,
            auto_refresh_secs,
            export_directory,
            mock_transaction_count: DEFAULT_MOCK_TRANSACTIONS,
            mock_alert_count: DEFAULT_MOCK_ALERTS,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            data_source: DataSource::default(),
            auto_refresh_secs: DEFAULT_REFRESH_SECS,
            export_directory: ".".to_string(),
            mock_transaction_count: DEFAULT_MOCK_TRANSACTIONS,
            mock_alert_count: DEFAULT_MOCK_ALERTS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.api_base_url, DEFAULT_API_URL);
        assert_eq!(config.data_source, DataSource::Mock);
        assert_eq!(config.auto_refresh_secs, DEFAULT_REFRESH_SECS);
    }

    #[test]
    fn test_data_source_labels() {
        assert_eq!(DataSource::Live.label(), "Live API");
        assert_eq!(DataSource::Mock.label(), "Mock Data");
    }
}
