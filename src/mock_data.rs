//! Synthetic demo data standing in for the remote fraud-detection API.
//!
//! Used when the data source is set to mock mode in settings, and by the
//! "Simulate Random" button on the ingest form.

use crate::types::{Alert, AlertStatus, Channel, FraudStatus, NewTransaction, RiskBand, Transaction};
use chrono::{Duration, Utc};
use rand::prelude::*;
use rand::rngs::StdRng;

pub const LOCATIONS: [&str; 10] = [
    "New York, US",
    "London, UK",
    "Mumbai, IN",
    "Singapore, SG",
    "Dubai, UAE",
    "Tokyo, JP",
    "Sydney, AU",
    "Frankfurt, DE",
    "Hong Kong, HK",
    "Toronto, CA",
];

pub const MERCHANT_CATEGORIES: [&str; 10] = [
    "Retail",
    "Gambling",
    "Crypto Exchange",
    "Travel",
    "Electronics",
    "Jewelry",
    "Cash Advance",
    "Wire Transfer",
    "P2P Transfer",
    "Online Shopping",
];

pub const RULES: [&str; 10] = [
    "Velocity Check Failed",
    "Unusual Location",
    "High-Value Transaction",
    "New Device Detected",
    "Cross-Border Transaction",
    "Time Anomaly",
    "Merchant Category Risk",
    "Account Age Risk",
    "Pattern Deviation",
    "Blacklisted Merchant",
];

pub const ANOMALY_INDICATORS: [&str; 6] = [
    "Spending spike detected",
    "Unusual transaction time",
    "Geographic impossibility",
    "Device fingerprint mismatch",
    "Behavioral anomaly",
    "Network risk signal",
];

const STATUSES: [FraudStatus; 4] = [
    FraudStatus::Flagged,
    FraudStatus::Confirmed,
    FraudStatus::Cleared,
    FraudStatus::Pending,
];

/// Seeded generator producing transactions and alerts with the same score
/// bands the server applies.
pub struct MockDataSource {
    rng: StdRng,
}

impl Default for MockDataSource {
    fn default() -> Self {
        Self::new()
    }
}

impl MockDataSource {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Fixed-seed constructor. Same seed, same output.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn transactions(&mut self, count: usize) -> Vec<Transaction> {
        let now = Utc::now();
        (0..count)
            .map(|i| {
                let risk_score: u8 = self.rng.gen_range(0..100);
                // Scores above the cleared band fall back to a random status.
                let fraud_status = if risk_score > 80 {
                    FraudStatus::Flagged
                } else if risk_score > 60 {
                    FraudStatus::Pending
                } else if risk_score > 40 {
                    FraudStatus::Cleared
                } else {
                    STATUSES[self.rng.gen_range(0..STATUSES.len())]
                };
                let location = LOCATIONS[self.rng.gen_range(0..LOCATIONS.len())];
                let country = location.rsplit(", ").next().unwrap_or("").to_string();
                let triggered_rules = if risk_score > 50 {
                    let n = self.rng.gen_range(1..=4);
                    RULES[..n].iter().map(|r| r.to_string()).collect()
                } else {
                    Vec::new()
                };
                let anomaly_indicators = if risk_score > 70 {
                    let n = self.rng.gen_range(1..=3);
                    ANOMALY_INDICATORS[..n].iter().map(|a| a.to_string()).collect()
                } else {
                    Vec::new()
                };

                Transaction {
                    id: format!("TXN-{}", 100_000 + i),
                    account_id: format!("ACC-{}", 10_000 + self.rng.gen_range(0..90_000)),
                    amount: self.rng.gen_range(100..50_100) as f64,
                    currency: "USD".to_string(),
                    timestamp: now - Duration::seconds(self.rng.gen_range(0..7 * 86_400)),
                    location: location.to_string(),
                    country,
                    channel: Channel::ALL[self.rng.gen_range(0..Channel::ALL.len())],
                    merchant_category: MERCHANT_CATEGORIES
                        [self.rng.gen_range(0..MERCHANT_CATEGORIES.len())]
                    .to_string(),
                    risk_score,
                    fraud_status,
                    triggered_rules,
                    anomaly_indicators,
                }
            })
            .collect()
    }

    pub fn alerts(&mut self, count: usize) -> Vec<Alert> {
        let now = Utc::now();
        (0..count)
            .map(|i| {
                // Alerts only exist in the upper score range.
                let risk_score: u8 = self.rng.gen_range(60..100);
                let risk_level = if risk_score > 85 {
                    RiskBand::High
                } else if risk_score > 70 {
                    RiskBand::Medium
                } else {
                    RiskBand::Low
                };
                let n = self.rng.gen_range(1..=3);
                Alert {
                    id: format!("ALT-{}", 1_000 + i),
                    transaction_id: format!("TXN-{}", 100_000 + self.rng.gen_range(0..1_000)),
                    risk_level,
                    risk_score,
                    triggered_rules: RULES[..n].iter().map(|r| r.to_string()).collect(),
                    timestamp: now - Duration::seconds(self.rng.gen_range(0..86_400)),
                    channel: Channel::ALL[self.rng.gen_range(0..Channel::ALL.len())],
                    location: LOCATIONS[self.rng.gen_range(0..LOCATIONS.len())].to_string(),
                    amount: self.rng.gen_range(500..25_500) as f64,
                    status: AlertStatus::New,
                }
            })
            .collect()
    }

    /// Score an ingest payload locally, standing in for the server's
    /// scoring pipeline in mock mode.
    pub fn score(&mut self, new: NewTransaction) -> Transaction {
        let risk_score: u8 = self.rng.gen_range(0..100);
        let fraud_status = if risk_score > 80 {
            FraudStatus::Flagged
        } else if risk_score > 60 {
            FraudStatus::Pending
        } else if risk_score > 40 {
            FraudStatus::Cleared
        } else {
            STATUSES[self.rng.gen_range(0..STATUSES.len())]
        };
        let location = LOCATIONS[self.rng.gen_range(0..LOCATIONS.len())];
        let triggered_rules = if risk_score > 50 {
            let n = self.rng.gen_range(1..=4);
            RULES[..n].iter().map(|r| r.to_string()).collect()
        } else {
            Vec::new()
        };
        let anomaly_indicators = if risk_score > 70 {
            let n = self.rng.gen_range(1..=3);
            ANOMALY_INDICATORS[..n].iter().map(|a| a.to_string()).collect()
        } else {
            Vec::new()
        };
        Transaction {
            id: new.id,
            account_id: new.account_id,
            amount: new.amount,
            currency: new.currency,
            timestamp: Utc::now(),
            location: location.to_string(),
            country: location.rsplit(", ").next().unwrap_or("").to_string(),
            channel: new.channel,
            merchant_category: new.merchant_category,
            risk_score,
            fraud_status,
            triggered_rules,
            anomaly_indicators,
        }
    }

    /// Random ingest payload for the "Simulate Random" button.
    pub fn random_ingest(&mut self) -> NewTransaction {
        NewTransaction {
            id: format!("TXN-{}", 900_000 + self.rng.gen_range(0..100_000)),
            account_id: format!("ACC-{}", 10_000 + self.rng.gen_range(0..90_000)),
            amount: self.rng.gen_range(100..50_100) as f64,
            currency: "USD".to_string(),
            merchant_category: MERCHANT_CATEGORIES
                [self.rng.gen_range(0..MERCHANT_CATEGORIES.len())]
            .to_string(),
            channel: Channel::ALL[self.rng.gen_range(0..Channel::ALL.len())],
            location_lat: None,
            location_lon: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_generator_is_deterministic() {
        let a = MockDataSource::seeded(42).transactions(50);
        let b = MockDataSource::seeded(42).transactions(50);
        for (x, y) in a.iter().zip(b.iter()) {
            assert_eq!(x.id, y.id);
            assert_eq!(x.account_id, y.account_id);
            assert_eq!(x.risk_score, y.risk_score);
            assert_eq!(x.amount, y.amount);
            assert_eq!(x.channel, y.channel);
        }
    }

    #[test]
    fn test_transaction_score_bands() {
        let txs = MockDataSource::seeded(7).transactions(500);
        for tx in &txs {
            assert!(tx.risk_score < 100);
            if tx.risk_score > 80 {
                assert_eq!(tx.fraud_status, FraudStatus::Flagged);
            } else if tx.risk_score > 60 {
                assert_eq!(tx.fraud_status, FraudStatus::Pending);
            } else if tx.risk_score > 40 {
                assert_eq!(tx.fraud_status, FraudStatus::Cleared);
            }
            if tx.risk_score > 50 {
                assert!(!tx.triggered_rules.is_empty());
                assert!(tx.triggered_rules.len() <= 4);
            } else {
                assert!(tx.triggered_rules.is_empty());
            }
            if tx.risk_score > 70 {
                assert!(!tx.anomaly_indicators.is_empty());
                assert!(tx.anomaly_indicators.len() <= 3);
            } else {
                assert!(tx.anomaly_indicators.is_empty());
            }
        }
    }

    #[test]
    fn test_country_matches_location() {
        let txs = MockDataSource::seeded(11).transactions(100);
        for tx in &txs {
            assert!(tx.location.ends_with(&tx.country));
        }
    }

    #[test]
    fn test_alert_bands_and_range() {
        let alerts = MockDataSource::seeded(3).alerts(200);
        for alert in &alerts {
            assert!((60..100).contains(&alert.risk_score));
            let expected = if alert.risk_score > 85 {
                RiskBand::High
            } else if alert.risk_score > 70 {
                RiskBand::Medium
            } else {
                RiskBand::Low
            };
            assert_eq!(alert.risk_level, expected);
            assert_eq!(alert.status, AlertStatus::New);
            assert!(!alert.triggered_rules.is_empty());
        }
    }
}
