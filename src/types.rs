//! Domain types shared across modules.
//!
//! These mirror the wire format of the fraud-detection API (snake_case
//! JSON), so the same structs serve as both the client-side model and the
//! serde surface.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Transaction entry medium.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    Card,
    Upi,
    Atm,
    Netbanking,
    Wire,
}

impl Channel {
    /// All channels, in the order they appear in filter dropdowns.
    pub const ALL: [Channel; 5] = [
        Channel::Card,
        Channel::Upi,
        Channel::Atm,
        Channel::Netbanking,
        Channel::Wire,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Channel::Card => "Card",
            Channel::Upi => "UPI",
            Channel::Atm => "ATM",
            Channel::Netbanking => "Net Banking",
            Channel::Wire => "Wire",
        }
    }

    /// Short ASCII tag used in table cells and tickers.
    pub fn tag(&self) -> &'static str {
        match self {
            Channel::Card => "[CC]",
            Channel::Upi => "[UP]",
            Channel::Atm => "[AT]",
            Channel::Netbanking => "[NB]",
            Channel::Wire => "[WR]",
        }
    }
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Server-assigned fraud disposition for a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FraudStatus {
    Flagged,
    Confirmed,
    Cleared,
    Pending,
}

impl FraudStatus {
    pub fn label(&self) -> &'static str {
        match self {
            FraudStatus::Flagged => "Flagged",
            FraudStatus::Confirmed => "Confirmed",
            FraudStatus::Cleared => "Cleared",
            FraudStatus::Pending => "Pending",
        }
    }
}

/// Coarse bucketing of the 0-100 risk score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskBand {
    High,
    Medium,
    Low,
}

impl RiskBand {
    /// Band boundaries: high > 80, medium 50 < score <= 80, low <= 50.
    pub fn from_score(score: u8) -> Self {
        if score > 80 {
            RiskBand::High
        } else if score > 50 {
            RiskBand::Medium
        } else {
            RiskBand::Low
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RiskBand::High => "High",
            RiskBand::Medium => "Medium",
            RiskBand::Low => "Low",
        }
    }
}

/// Review state of an alert. Changes are acknowledged locally only; the
/// API has no write path for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertStatus {
    New,
    Reviewed,
    Escalated,
    FalsePositive,
}

impl AlertStatus {
    pub fn label(&self) -> &'static str {
        match self {
            AlertStatus::New => "New",
            AlertStatus::Reviewed => "Reviewed",
            AlertStatus::Escalated => "Escalated",
            AlertStatus::FalsePositive => "False Positive",
        }
    }
}

/// A scored banking transaction. Immutable once fetched; the whole
/// collection is replaced on refetch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub account_id: String,
    pub amount: f64,
    pub currency: String,
    pub timestamp: DateTime<Utc>,
    pub location: String,
    pub country: String,
    pub channel: Channel,
    pub merchant_category: String,
    pub risk_score: u8,
    pub fraud_status: FraudStatus,
    #[serde(default)]
    pub triggered_rules: Vec<String>,
    #[serde(default)]
    pub anomaly_indicators: Vec<String>,
}

impl Transaction {
    pub fn risk_band(&self) -> RiskBand {
        RiskBand::from_score(self.risk_score)
    }
}

/// Payload for the transaction ingest endpoint. The server scores it and
/// returns a full [`Transaction`].
#[derive(Debug, Clone, Serialize)]
pub struct NewTransaction {
    pub id: String,
    pub account_id: String,
    pub amount: f64,
    pub currency: String,
    pub merchant_category: String,
    pub channel: Channel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_lat: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_lon: Option<f64>,
}

/// A fraud alert raised by the server for a transaction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alert {
    pub id: String,
    pub transaction_id: String,
    pub risk_level: RiskBand,
    pub risk_score: u8,
    #[serde(default)]
    pub triggered_rules: Vec<String>,
    pub timestamp: DateTime<Utc>,
    pub channel: Channel,
    pub location: String,
    pub amount: f64,
    pub status: AlertStatus,
}

/// Per-country fraud counts for the analytics view.
#[derive(Debug, Clone, Deserialize)]
pub struct GeoStat {
    pub country: String,
    pub count: u64,
    pub risk_level: RiskBand,
}

/// Fraud counts per merchant category.
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryStat {
    pub category: String,
    pub fraud_count: u64,
}

/// Contribution of a single rule (or anomaly type) to the fraud total.
#[derive(Debug, Clone, Deserialize)]
pub struct RuleStat {
    pub rule: String,
    pub count: u64,
    pub percentage: f64,
    #[serde(default)]
    pub avg_score: f64,
}

/// Fraud counts bucketed by hour of day ("00:00" .. "23:00").
#[derive(Debug, Clone, Deserialize)]
pub struct TimePattern {
    pub hour: String,
    pub fraud_count: u64,
}

/// One point of the 24h anomaly trend series.
#[derive(Debug, Clone, Deserialize)]
pub struct TimeSeriesPoint {
    pub timestamp: String,
    pub count: u64,
}

/// Anomaly-based analytics rollup.
#[derive(Debug, Clone, Deserialize)]
pub struct AnomalyStats {
    pub total_anomalies: u64,
    pub recent_anomalies_24h: u64,
    #[serde(default)]
    pub series: Vec<TimeSeriesPoint>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_band_boundaries() {
        assert_eq!(RiskBand::from_score(0), RiskBand::Low);
        assert_eq!(RiskBand::from_score(50), RiskBand::Low);
        assert_eq!(RiskBand::from_score(51), RiskBand::Medium);
        assert_eq!(RiskBand::from_score(80), RiskBand::Medium);
        assert_eq!(RiskBand::from_score(81), RiskBand::High);
        assert_eq!(RiskBand::from_score(100), RiskBand::High);
    }

    #[test]
    fn test_channel_serde_names() {
        let json = serde_json::to_string(&Channel::Netbanking).unwrap();
        assert_eq!(json, "\"netbanking\"");
        let back: Channel = serde_json::from_str("\"upi\"").unwrap();
        assert_eq!(back, Channel::Upi);
    }

    #[test]
    fn test_alert_status_serde_names() {
        let json = serde_json::to_string(&AlertStatus::FalsePositive).unwrap();
        assert_eq!(json, "\"false_positive\"");
    }

    #[test]
    fn test_transaction_deserialize_defaults_lists() {
        let json = r#"{
            "id": "TXN-100001",
            "account_id": "ACC-10001",
            "amount": 1250.0,
            "currency": "USD",
            "timestamp": "2026-08-01T12:00:00Z",
            "location": "London, UK",
            "country": "UK",
            "channel": "card",
            "merchant_category": "Retail",
            "risk_score": 42,
            "fraud_status": "cleared"
        }"#;
        let tx: Transaction = serde_json::from_str(json).unwrap();
        assert!(tx.triggered_rules.is_empty());
        assert!(tx.anomaly_indicators.is_empty());
        assert_eq!(tx.risk_band(), RiskBand::Low);
    }
}
