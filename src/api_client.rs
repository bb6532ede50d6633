//! Thin client over the fraud-detection REST API.
//!
//! One method per endpoint, all returning the snake_case JSON model in
//! `types`. No retry or backoff; callers surface failures as notifications.

use crate::types::{
    Alert, AnomalyStats, CategoryStat, GeoStat, NewTransaction, RuleStat, TimePattern, Transaction,
};
use serde::de::DeserializeOwned;
use thiserror::Error;
use url::Url;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid API base URL: {0}")]
    BadUrl(#[from] url::ParseError),
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("server returned {status} for {path}")]
    Status {
        status: reqwest::StatusCode,
        path: String,
    },
    #[error("could not decode response from {path}: {source}")]
    Decode {
        path: String,
        source: serde_json::Error,
    },
}

pub struct ApiClient {
    http: reqwest::Client,
    base: Url,
}

impl ApiClient {
    /// Build a client for the given base URL (e.g. `http://localhost:8000/api/v1`).
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        // Url::join drops the last path segment unless the base ends with '/'.
        let normalized = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{}/", base_url)
        };
        let base = Url::parse(&normalized)?;
        Ok(Self {
            http: reqwest::Client::new(),
            base,
        })
    }

    pub fn base_url(&self) -> &str {
        self.base.as_str()
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        Ok(self.base.join(path)?)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.endpoint(path)?;
        tracing::debug!(%url, "GET");
        let resp = self.http.get(url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status,
                path: path.to_string(),
            });
        }
        let body = resp.text().await?;
        serde_json::from_str(&body).map_err(|source| ApiError::Decode {
            path: path.to_string(),
            source,
        })
    }

    pub async fn transactions(&self) -> Result<Vec<Transaction>, ApiError> {
        self.get_json("transactions/").await
    }

    /// Submit a transaction for scoring. The server responds with the full
    /// scored record.
    pub async fn submit_transaction(&self, tx: &NewTransaction) -> Result<Transaction, ApiError> {
        let url = self.endpoint("transactions/")?;
        tracing::debug!(%url, "POST");
        let resp = self.http.post(url).json(tx).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status,
                path: "transactions/".to_string(),
            });
        }
        let body = resp.text().await?;
        serde_json::from_str(&body).map_err(|source| ApiError::Decode {
            path: "transactions/".to_string(),
            source,
        })
    }

    pub async fn alerts(&self) -> Result<Vec<Alert>, ApiError> {
        self.get_json("alerts/").await
    }

    pub async fn geographic_distribution(&self) -> Result<Vec<GeoStat>, ApiError> {
        self.get_json("analytics/geographic-distribution").await
    }

    pub async fn fraud_by_category(&self) -> Result<Vec<CategoryStat>, ApiError> {
        self.get_json("analytics/fraud-by-category").await
    }

    pub async fn rule_contribution(&self) -> Result<Vec<RuleStat>, ApiError> {
        self.get_json("analytics/rule-contribution").await
    }

    pub async fn fraud_time_pattern(&self) -> Result<Vec<TimePattern>, ApiError> {
        self.get_json("analytics/fraud-time-pattern").await
    }

    pub async fn anomaly_distribution(&self) -> Result<Vec<RuleStat>, ApiError> {
        self.get_json("analytics/anomaly-distribution").await
    }

    pub async fn anomaly_stats(&self) -> Result<AnomalyStats, ApiError> {
        self.get_json("analytics/anomaly").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== URL handling tests ====================

    #[test]
    fn test_base_url_gains_trailing_slash() {
        let client = ApiClient::new("http://localhost:8000/api/v1").unwrap();
        assert_eq!(client.base_url(), "http://localhost:8000/api/v1/");
    }

    #[test]
    fn test_endpoint_preserves_base_path() {
        let client = ApiClient::new("http://localhost:8000/api/v1").unwrap();
        let url = client.endpoint("transactions/").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8000/api/v1/transactions/");

        let url = client.endpoint("analytics/fraud-by-category").unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:8000/api/v1/analytics/fraud-by-category"
        );
    }

    #[test]
    fn test_bad_base_url_is_rejected() {
        assert!(matches!(
            ApiClient::new("not a url"),
            Err(ApiError::BadUrl(_))
        ));
    }

    #[test]
    fn test_status_error_display() {
        let err = ApiError::Status {
            status: reqwest::StatusCode::BAD_GATEWAY,
            path: "alerts/".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("502"));
        assert!(msg.contains("alerts/"));
    }
}
