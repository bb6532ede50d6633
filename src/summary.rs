//! Client-side aggregation: KPI rollups for the dashboard and the analytics
//! series used when running against mock data (live mode gets the same
//! shapes from the API).

use crate::types::{
    Alert, AnomalyStats, CategoryStat, FraudStatus, GeoStat, RiskBand, RuleStat, TimePattern,
    TimeSeriesPoint, Transaction,
};
use chrono::{Duration, Timelike, Utc};
use std::collections::HashMap;

/// Headline numbers for the dashboard KPI cards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KpiSummary {
    pub total_transactions: usize,
    pub flagged_count: usize,
    pub high_risk_alerts: usize,
    /// Flagged share of all transactions, in percent.
    pub fraud_rate: f64,
}

impl KpiSummary {
    pub fn compute(transactions: &[Transaction], alerts: &[Alert]) -> Self {
        let total_transactions = transactions.len();
        let flagged_count = transactions
            .iter()
            .filter(|t| t.fraud_status == crate::types::FraudStatus::Flagged)
            .count();
        let high_risk_alerts = alerts
            .iter()
            .filter(|a| a.risk_level == RiskBand::High)
            .count();
        let fraud_rate = if total_transactions > 0 {
            flagged_count as f64 / total_transactions as f64 * 100.0
        } else {
            0.0
        };
        Self {
            total_transactions,
            flagged_count,
            high_risk_alerts,
            fraud_rate,
        }
    }
}

fn is_fraud(tx: &Transaction) -> bool {
    tx.fraud_status == crate::types::FraudStatus::Flagged || tx.risk_score > 80
}

/// Top recent transactions with score above 70, newest first.
pub fn recent_suspicious(transactions: &[Transaction], limit: usize) -> Vec<&Transaction> {
    let mut suspicious: Vec<&Transaction> = transactions
        .iter()
        .filter(|t| t.risk_score > 70)
        .collect();
    suspicious.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    suspicious.truncate(limit);
    suspicious
}

/// Transaction counts per fraud status, in fixed display order.
pub fn fraud_status_distribution(transactions: &[Transaction]) -> Vec<(FraudStatus, u64)> {
    [
        FraudStatus::Flagged,
        FraudStatus::Confirmed,
        FraudStatus::Cleared,
        FraudStatus::Pending,
    ]
    .into_iter()
    .map(|status| {
        let count = transactions
            .iter()
            .filter(|t| t.fraud_status == status)
            .count() as u64;
        (status, count)
    })
    .collect()
}

/// Fraud counts per country, banded by the average score of each group.
pub fn geographic_distribution(transactions: &[Transaction]) -> Vec<GeoStat> {
    let mut groups: HashMap<&str, (u64, u64)> = HashMap::new(); // count, score sum
    for tx in transactions.iter().filter(|t| is_fraud(t)) {
        let entry = groups.entry(tx.country.as_str()).or_default();
        entry.0 += 1;
        entry.1 += tx.risk_score as u64;
    }
    let mut stats: Vec<GeoStat> = groups
        .into_iter()
        .map(|(country, (count, score_sum))| GeoStat {
            country: country.to_string(),
            count,
            risk_level: RiskBand::from_score((score_sum / count) as u8),
        })
        .collect();
    stats.sort_by(|a, b| b.count.cmp(&a.count));
    stats
}

/// Fraud counts per merchant category, largest first.
pub fn fraud_by_category(transactions: &[Transaction]) -> Vec<CategoryStat> {
    let mut groups: HashMap<&str, u64> = HashMap::new();
    for tx in transactions.iter().filter(|t| is_fraud(t)) {
        *groups.entry(tx.merchant_category.as_str()).or_default() += 1;
    }
    let mut stats: Vec<CategoryStat> = groups
        .into_iter()
        .map(|(category, fraud_count)| CategoryStat {
            category: category.to_string(),
            fraud_count,
        })
        .collect();
    stats.sort_by(|a, b| b.fraud_count.cmp(&a.fraud_count));
    stats
}

/// Top five deterministic rules by trigger count, with percentage of the
/// rule-trigger total. Anomaly-flavored rules belong to
/// [`anomaly_distribution`] instead.
pub fn rule_contribution(transactions: &[Transaction]) -> Vec<RuleStat> {
    let mut counts: HashMap<&str, u64> = HashMap::new();
    let mut total: u64 = 0;
    for tx in transactions {
        for rule in &tx.triggered_rules {
            if rule.contains("Anomaly") {
                continue;
            }
            *counts.entry(rule.as_str()).or_default() += 1;
            total += 1;
        }
    }
    let mut stats: Vec<RuleStat> = counts
        .into_iter()
        .map(|(rule, count)| RuleStat {
            rule: rule.to_string(),
            count,
            percentage: percentage_of(count, total),
            avg_score: 0.0,
        })
        .collect();
    stats.sort_by(|a, b| b.count.cmp(&a.count));
    stats.truncate(5);
    stats
}

/// Anomaly indicator counts with the average risk score of the carrying
/// transactions.
pub fn anomaly_distribution(transactions: &[Transaction]) -> Vec<RuleStat> {
    let mut groups: HashMap<&str, (u64, u64)> = HashMap::new(); // count, score sum
    let mut total: u64 = 0;
    for tx in transactions {
        for indicator in &tx.anomaly_indicators {
            let entry = groups.entry(indicator.as_str()).or_default();
            entry.0 += 1;
            entry.1 += tx.risk_score as u64;
            total += 1;
        }
    }
    let mut stats: Vec<RuleStat> = groups
        .into_iter()
        .map(|(rule, (count, score_sum))| RuleStat {
            rule: rule.to_string(),
            count,
            percentage: percentage_of(count, total),
            avg_score: round1(score_sum as f64 / count as f64),
        })
        .collect();
    stats.sort_by(|a, b| b.count.cmp(&a.count));
    stats
}

/// Fraud counts bucketed by hour of day, "00:00" through "23:00".
pub fn fraud_time_pattern(transactions: &[Transaction]) -> Vec<TimePattern> {
    let mut buckets = [0u64; 24];
    for tx in transactions.iter().filter(|t| is_fraud(t)) {
        buckets[tx.timestamp.hour() as usize] += 1;
    }
    buckets
        .iter()
        .enumerate()
        .map(|(hour, &fraud_count)| TimePattern {
            hour: format!("{:02}:00", hour),
            fraud_count,
        })
        .collect()
}

/// Anomaly totals plus an hourly series covering the trailing 24 hours,
/// oldest bucket first.
pub fn anomaly_stats(transactions: &[Transaction]) -> AnomalyStats {
    let now = Utc::now();
    let cutoff = now - Duration::hours(24);

    let anomalous: Vec<&Transaction> = transactions
        .iter()
        .filter(|t| !t.anomaly_indicators.is_empty())
        .collect();
    let total_anomalies = anomalous.len() as u64;

    let recent: Vec<&&Transaction> = anomalous.iter().filter(|t| t.timestamp >= cutoff).collect();
    let recent_anomalies_24h = recent.len() as u64;

    let mut buckets: HashMap<u32, u64> = HashMap::new();
    for tx in &recent {
        *buckets.entry(tx.timestamp.hour()).or_default() += 1;
    }

    let series = (0..24)
        .rev()
        .map(|i| {
            let t = now - Duration::hours(i);
            TimeSeriesPoint {
                timestamp: format!("{:02}:00", t.hour()),
                count: buckets.get(&t.hour()).copied().unwrap_or(0),
            }
        })
        .collect();

    AnomalyStats {
        total_anomalies,
        recent_anomalies_24h,
        series,
    }
}

fn percentage_of(count: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        round1(count as f64 / total as f64 * 100.0)
    }
}

fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock_data::MockDataSource;
    use crate::types::FraudStatus;

    // ==================== KPI tests ====================

    #[test]
    fn test_kpi_summary_counts() {
        let mut source = MockDataSource::seeded(1);
        let txs = source.transactions(200);
        let alerts = source.alerts(40);

        let kpi = KpiSummary::compute(&txs, &alerts);
        assert_eq!(kpi.total_transactions, 200);
        assert_eq!(
            kpi.flagged_count,
            txs.iter()
                .filter(|t| t.fraud_status == FraudStatus::Flagged)
                .count()
        );
        assert_eq!(
            kpi.high_risk_alerts,
            alerts
                .iter()
                .filter(|a| a.risk_level == RiskBand::High)
                .count()
        );
        let expected_rate = kpi.flagged_count as f64 / 200.0 * 100.0;
        assert!((kpi.fraud_rate - expected_rate).abs() < f64::EPSILON);
    }

    #[test]
    fn test_kpi_summary_empty_has_zero_rate() {
        let kpi = KpiSummary::compute(&[], &[]);
        assert_eq!(kpi.fraud_rate, 0.0);
    }

    // ==================== aggregation tests ====================

    #[test]
    fn test_recent_suspicious_threshold_order_and_limit() {
        let txs = MockDataSource::seeded(2).transactions(300);
        let suspicious = recent_suspicious(&txs, 10);
        assert!(suspicious.len() <= 10);
        for tx in &suspicious {
            assert!(tx.risk_score > 70);
        }
        for pair in suspicious.windows(2) {
            assert!(pair[0].timestamp >= pair[1].timestamp);
        }
    }

    #[test]
    fn test_fraud_status_distribution_partitions_all_transactions() {
        let txs = MockDataSource::seeded(9).transactions(300);
        let dist = fraud_status_distribution(&txs);
        assert_eq!(dist.len(), 4);
        let total: u64 = dist.iter().map(|(_, c)| *c).sum();
        assert_eq!(total, 300);
        let flagged = dist
            .iter()
            .find(|(s, _)| *s == FraudStatus::Flagged)
            .map(|(_, c)| *c)
            .unwrap();
        let expected = txs
            .iter()
            .filter(|t| t.fraud_status == FraudStatus::Flagged)
            .count() as u64;
        assert_eq!(flagged, expected);
    }

    #[test]
    fn test_fraud_by_category_counts_only_fraud() {
        let txs = MockDataSource::seeded(3).transactions(300);
        let stats = fraud_by_category(&txs);
        let fraud_total: u64 = stats.iter().map(|s| s.fraud_count).sum();
        let expected = txs
            .iter()
            .filter(|t| t.fraud_status == FraudStatus::Flagged || t.risk_score > 80)
            .count() as u64;
        assert_eq!(fraud_total, expected);
        for pair in stats.windows(2) {
            assert!(pair[0].fraud_count >= pair[1].fraud_count);
        }
    }

    #[test]
    fn test_rule_contribution_excludes_anomaly_rules_and_caps_at_five() {
        let txs = MockDataSource::seeded(4).transactions(300);
        let stats = rule_contribution(&txs);
        assert!(stats.len() <= 5);
        for stat in &stats {
            assert!(!stat.rule.contains("Anomaly"));
            assert!(stat.percentage >= 0.0 && stat.percentage <= 100.0);
        }
    }

    #[test]
    fn test_anomaly_distribution_avg_scores_in_range() {
        let txs = MockDataSource::seeded(5).transactions(300);
        let stats = anomaly_distribution(&txs);
        for stat in &stats {
            // Indicators only attach above score 70.
            assert!(stat.avg_score > 70.0);
            assert!(stat.avg_score < 100.0);
        }
    }

    #[test]
    fn test_fraud_time_pattern_covers_all_hours() {
        let txs = MockDataSource::seeded(6).transactions(300);
        let pattern = fraud_time_pattern(&txs);
        assert_eq!(pattern.len(), 24);
        assert_eq!(pattern[0].hour, "00:00");
        assert_eq!(pattern[23].hour, "23:00");
        let total: u64 = pattern.iter().map(|p| p.fraud_count).sum();
        let expected = txs
            .iter()
            .filter(|t| t.fraud_status == FraudStatus::Flagged || t.risk_score > 80)
            .count() as u64;
        assert_eq!(total, expected);
    }

    #[test]
    fn test_anomaly_stats_series_has_24_points() {
        let txs = MockDataSource::seeded(7).transactions(300);
        let stats = anomaly_stats(&txs);
        assert_eq!(stats.series.len(), 24);
        assert!(stats.recent_anomalies_24h <= stats.total_anomalies);
        let series_total: u64 = stats.series.iter().map(|p| p.count).sum();
        assert_eq!(series_total, stats.recent_anomalies_24h);
    }
}
