//! Filter/sort/paginate pipeline for the in-memory transaction table.
//!
//! The remote API hands us the full transaction list; everything the table
//! shows is derived from it synchronously on the UI thread. Filtering is
//! conjunctive, sorting is single-key and stable, and pages are fixed at
//! [`PAGE_SIZE`] rows.

use crate::types::{Channel, RiskBand, Transaction};
use std::cmp::Ordering;

/// Fixed number of rows per table page.
pub const PAGE_SIZE: usize = 10;

/// Channel predicate: wildcard or an exact channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChannelFilter {
    #[default]
    All,
    Only(Channel),
}

impl ChannelFilter {
    pub fn label(&self) -> &'static str {
        match self {
            ChannelFilter::All => "All Channels",
            ChannelFilter::Only(c) => c.label(),
        }
    }
}

/// Risk-band predicate: wildcard or an exact band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BandFilter {
    #[default]
    All,
    Only(RiskBand),
}

impl BandFilter {
    pub fn label(&self) -> &'static str {
        match self {
            BandFilter::All => "All Risk",
            BandFilter::Only(RiskBand::High) => "High Risk",
            BandFilter::Only(RiskBand::Medium) => "Medium Risk",
            BandFilter::Only(RiskBand::Low) => "Low Risk",
        }
    }
}

/// Sortable table columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Timestamp,
    Amount,
    RiskScore,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn arrow(&self) -> &'static str {
        match self {
            SortDirection::Asc => "^",
            SortDirection::Desc => "v",
        }
    }
}

/// Complete filter/sort/page state of the transaction table.
#[derive(Debug, Clone, PartialEq)]
pub struct TableQuery {
    pub search: String,
    pub channel: ChannelFilter,
    pub band: BandFilter,
    pub sort_field: SortField,
    pub sort_direction: SortDirection,
    /// 1-based page index. Clamped against the filtered length in [`TableQuery::apply`].
    pub page: usize,
}

impl Default for TableQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            channel: ChannelFilter::All,
            band: BandFilter::All,
            sort_field: SortField::Timestamp,
            sort_direction: SortDirection::Desc,
            page: 1,
        }
    }
}

/// One rendered page of the pipeline output.
#[derive(Debug)]
pub struct TablePage<'a> {
    /// Rows of the current page, in final order.
    pub rows: Vec<&'a Transaction>,
    /// Number of records that passed the filters.
    pub filtered_len: usize,
    /// Clamped 1-based page index actually shown.
    pub page: usize,
    /// Total number of pages (at least 1).
    pub page_count: usize,
    /// 1-based index of the first row shown, 0 when the page is empty.
    pub first_row: usize,
    /// 1-based index of the last row shown, 0 when the page is empty.
    pub last_row: usize,
}

impl TableQuery {
    /// Conjunctive filter predicate: search AND channel AND risk band.
    pub fn matches(&self, tx: &Transaction) -> bool {
        let matches_search = {
            let needle = self.search.trim().to_lowercase();
            needle.is_empty()
                || tx.id.to_lowercase().contains(&needle)
                || tx.account_id.to_lowercase().contains(&needle)
                || tx.location.to_lowercase().contains(&needle)
        };
        let matches_channel = match self.channel {
            ChannelFilter::All => true,
            ChannelFilter::Only(c) => tx.channel == c,
        };
        let matches_band = match self.band {
            BandFilter::All => true,
            BandFilter::Only(band) => tx.risk_band() == band,
        };
        matches_search && matches_channel && matches_band
    }

    fn compare(&self, a: &Transaction, b: &Transaction) -> Ordering {
        let ord = match self.sort_field {
            SortField::Timestamp => a.timestamp.cmp(&b.timestamp),
            SortField::Amount => a.amount.partial_cmp(&b.amount).unwrap_or(Ordering::Equal),
            SortField::RiskScore => a.risk_score.cmp(&b.risk_score),
        };
        match self.sort_direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    }

    /// Column-header click behavior: clicking the active column flips the
    /// direction, clicking a new column sorts it descending. Either way the
    /// view returns to the first page.
    pub fn toggle_sort(&mut self, field: SortField) {
        if self.sort_field == field {
            self.sort_direction = match self.sort_direction {
                SortDirection::Asc => SortDirection::Desc,
                SortDirection::Desc => SortDirection::Asc,
            };
        } else {
            self.sort_field = field;
            self.sort_direction = SortDirection::Desc;
        }
        self.page = 1;
    }

    /// Reset to the first page. Called whenever a filter changes so the view
    /// never points past the end of a shrunken result set.
    pub fn reset_page(&mut self) {
        self.page = 1;
    }

    /// Run the full pipeline over `transactions` and slice out the current
    /// page. `self.page` is treated as a request; the returned page index is
    /// clamped to the valid range.
    pub fn apply<'a>(&self, transactions: &'a [Transaction]) -> TablePage<'a> {
        let mut filtered: Vec<&Transaction> =
            transactions.iter().filter(|tx| self.matches(tx)).collect();
        // Vec::sort_by is stable, so ties keep their fetch order.
        filtered.sort_by(|a, b| self.compare(a, b));

        let filtered_len = filtered.len();
        let page_count = filtered_len.div_ceil(PAGE_SIZE).max(1);
        let page = self.page.clamp(1, page_count);

        let start = (page - 1) * PAGE_SIZE;
        let end = (start + PAGE_SIZE).min(filtered_len);
        let rows: Vec<&Transaction> = filtered[start.min(filtered_len)..end].to_vec();

        let (first_row, last_row) = if rows.is_empty() {
            (0, 0)
        } else {
            (start + 1, end)
        };

        TablePage {
            rows,
            filtered_len,
            page,
            page_count,
            first_row,
            last_row,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FraudStatus;
    use chrono::{Duration, TimeZone, Utc};

    fn tx(id: &str, amount: f64, score: u8, channel: Channel, minutes: i64) -> Transaction {
        Transaction {
            id: id.to_string(),
            account_id: format!("ACC-{}", id),
            amount,
            currency: "USD".to_string(),
            timestamp: Utc.with_ymd_and_hms(2026, 8, 1, 12, 0, 0).unwrap()
                + Duration::minutes(minutes),
            location: "Mumbai, IN".to_string(),
            country: "IN".to_string(),
            channel,
            merchant_category: "Retail".to_string(),
            risk_score: score,
            fraud_status: FraudStatus::Pending,
            triggered_rules: Vec::new(),
            anomaly_indicators: Vec::new(),
        }
    }

    fn sample() -> Vec<Transaction> {
        vec![
            tx("TXN-1", 100.0, 95, Channel::Card, 0),
            tx("TXN-2", 5000.0, 81, Channel::Wire, 1),
            tx("TXN-3", 250.0, 80, Channel::Upi, 2),
            tx("TXN-4", 99.0, 51, Channel::Card, 3),
            tx("TXN-5", 10.0, 50, Channel::Atm, 4),
            tx("TXN-6", 750.0, 12, Channel::Netbanking, 5),
        ]
    }

    // ==================== filter tests ====================

    #[test]
    fn test_default_query_passes_everything() {
        let txs = sample();
        let query = TableQuery::default();
        assert_eq!(query.apply(&txs).filtered_len, txs.len());
    }

    #[test]
    fn test_search_is_case_insensitive_over_three_fields() {
        let mut txs = sample();
        txs[0].location = "London, UK".to_string();
        let mut query = TableQuery::default();

        query.search = "txn-1".to_string();
        assert!(query.matches(&txs[0]));

        query.search = "acc-txn-2".to_string();
        assert!(query.matches(&txs[1]));
        assert!(!query.matches(&txs[2]));

        query.search = "LONDON".to_string();
        assert!(query.matches(&txs[0]));
        assert!(!query.matches(&txs[1]));
    }

    #[test]
    fn test_band_filter_boundaries() {
        let txs = sample();
        let mut query = TableQuery::default();

        query.band = BandFilter::Only(RiskBand::High);
        let page = query.apply(&txs);
        let ids: Vec<&str> = page.rows.iter().map(|t| t.id.as_str()).collect();
        // 81 and 95 are high; 80 is medium.
        assert_eq!(page.filtered_len, 2);
        assert!(ids.contains(&"TXN-1") && ids.contains(&"TXN-2"));

        query.band = BandFilter::Only(RiskBand::Medium);
        assert_eq!(query.apply(&txs).filtered_len, 2); // scores 80 and 51

        query.band = BandFilter::Only(RiskBand::Low);
        assert_eq!(query.apply(&txs).filtered_len, 2); // scores 50 and 12
    }

    #[test]
    fn test_filters_are_conjunctive() {
        let txs = sample();
        let mut query = TableQuery::default();
        query.channel = ChannelFilter::Only(Channel::Card);
        query.band = BandFilter::Only(RiskBand::High);
        let page = query.apply(&txs);
        // Only TXN-1 is both a card transaction and high risk.
        assert_eq!(page.filtered_len, 1);
        assert_eq!(page.rows[0].id, "TXN-1");
    }

    #[test]
    fn test_high_band_returns_only_scores_above_80() {
        let txs: Vec<Transaction> = (0..100)
            .map(|i| tx(&format!("TXN-{i}"), i as f64, (i % 101) as u8, Channel::Card, i as i64))
            .collect();
        let mut query = TableQuery::default();
        query.band = BandFilter::Only(RiskBand::High);
        let page = query.apply(&txs);
        assert_eq!(page.filtered_len, 19); // scores 81..=99
        for page_idx in 1..=page.page_count {
            query.page = page_idx;
            for row in query.apply(&txs).rows {
                assert!(row.risk_score > 80 && row.risk_score <= 100);
            }
        }
    }

    // ==================== sort tests ====================

    #[test]
    fn test_sort_amount_desc_largest_first() {
        let txs = sample();
        let mut query = TableQuery::default();
        query.sort_field = SortField::Amount;
        query.sort_direction = SortDirection::Desc;
        let page = query.apply(&txs);
        let amounts: Vec<f64> = page.rows.iter().map(|t| t.amount).collect();
        assert_eq!(amounts[0], 5000.0);
        for pair in amounts.windows(2) {
            assert!(pair[0] >= pair[1]);
        }
    }

    #[test]
    fn test_sort_timestamp_asc() {
        let txs = sample();
        let mut query = TableQuery::default();
        query.sort_field = SortField::Timestamp;
        query.sort_direction = SortDirection::Asc;
        let page = query.apply(&txs);
        for pair in page.rows.windows(2) {
            assert!(pair[0].timestamp <= pair[1].timestamp);
        }
    }

    #[test]
    fn test_sort_is_stable_on_ties() {
        let txs = vec![
            tx("TXN-A", 100.0, 40, Channel::Card, 0),
            tx("TXN-B", 100.0, 40, Channel::Card, 1),
            tx("TXN-C", 100.0, 40, Channel::Card, 2),
        ];
        let mut query = TableQuery::default();
        query.sort_field = SortField::Amount;
        query.sort_direction = SortDirection::Asc;
        let page = query.apply(&txs);
        let ids: Vec<&str> = page.rows.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["TXN-A", "TXN-B", "TXN-C"]);

        query.sort_direction = SortDirection::Desc;
        let page = query.apply(&txs);
        let ids: Vec<&str> = page.rows.iter().map(|t| t.id.as_str()).collect();
        // Reversing the comparator must not reverse tied rows.
        assert_eq!(ids, vec!["TXN-A", "TXN-B", "TXN-C"]);
    }

    #[test]
    fn test_toggle_sort_flips_and_switches() {
        let mut query = TableQuery::default();
        assert_eq!(query.sort_field, SortField::Timestamp);
        assert_eq!(query.sort_direction, SortDirection::Desc);

        query.toggle_sort(SortField::Timestamp);
        assert_eq!(query.sort_direction, SortDirection::Asc);

        query.page = 4;
        query.toggle_sort(SortField::Amount);
        assert_eq!(query.sort_field, SortField::Amount);
        assert_eq!(query.sort_direction, SortDirection::Desc);
        assert_eq!(query.page, 1);
    }

    // ==================== pagination tests ====================

    #[test]
    fn test_pages_concatenate_to_full_sequence() {
        let txs: Vec<Transaction> = (0..37)
            .map(|i| tx(&format!("TXN-{i:03}"), i as f64, 30, Channel::Card, i as i64))
            .collect();
        let mut query = TableQuery::default();
        query.sort_field = SortField::Amount;
        query.sort_direction = SortDirection::Asc;

        let first = query.apply(&txs);
        assert_eq!(first.page_count, 4);

        let mut seen = Vec::new();
        for page_idx in 1..=first.page_count {
            query.page = page_idx;
            let page = query.apply(&txs);
            assert!(page.rows.len() <= PAGE_SIZE);
            seen.extend(page.rows.iter().map(|t| t.id.clone()));
        }
        assert_eq!(seen.len(), 37);
        let expected: Vec<String> = (0..37).map(|i| format!("TXN-{i:03}")).collect();
        assert_eq!(seen, expected);
    }

    #[test]
    fn test_page_clamped_to_valid_range() {
        let txs = sample();
        let mut query = TableQuery::default();
        query.page = 99;
        let page = query.apply(&txs);
        assert_eq!(page.page, 1); // 6 rows, single page
        assert_eq!(page.rows.len(), 6);

        query.page = 0;
        assert_eq!(query.apply(&txs).page, 1);
    }

    #[test]
    fn test_empty_filter_result_yields_single_empty_page() {
        let txs = sample();
        let mut query = TableQuery::default();
        query.search = "no such transaction".to_string();
        let page = query.apply(&txs);
        assert_eq!(page.filtered_len, 0);
        assert_eq!(page.page, 1);
        assert_eq!(page.page_count, 1);
        assert!(page.rows.is_empty());
        assert_eq!(page.first_row, 0);
        assert_eq!(page.last_row, 0);
    }

    #[test]
    fn test_row_range_footer_values() {
        let txs: Vec<Transaction> = (0..23)
            .map(|i| tx(&format!("TXN-{i:02}"), i as f64, 30, Channel::Card, i as i64))
            .collect();
        let mut query = TableQuery::default();
        query.page = 3;
        let page = query.apply(&txs);
        assert_eq!(page.first_row, 21);
        assert_eq!(page.last_row, 23);
        assert_eq!(page.rows.len(), 3);
    }
}
