//! CSV export of the currently filtered transaction view.

use crate::types::Transaction;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Write `transactions` (already filtered and sorted) to a timestamped CSV
/// file under `export_dir`, creating the directory if needed. Returns the
/// path written.
pub fn export_transactions_csv(export_dir: &str, transactions: &[&Transaction]) -> Result<PathBuf> {
    fs::create_dir_all(export_dir)
        .with_context(|| format!("failed to create export directory {}", export_dir))?;

    let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
    let path = Path::new(export_dir).join(format!("transactions_{}.csv", timestamp));

    write_transactions_csv(&path, transactions)?;
    Ok(path)
}

fn write_transactions_csv(path: &Path, transactions: &[&Transaction]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("failed to create {}", path.display()))?;

    writer.write_record([
        "id",
        "account_id",
        "amount",
        "currency",
        "timestamp",
        "location",
        "country",
        "channel",
        "merchant_category",
        "risk_score",
        "fraud_status",
        "triggered_rules",
    ])?;

    for tx in transactions {
        writer.write_record([
            tx.id.as_str(),
            tx.account_id.as_str(),
            &format!("{:.2}", tx.amount),
            tx.currency.as_str(),
            &tx.timestamp.to_rfc3339(),
            tx.location.as_str(),
            tx.country.as_str(),
            tx.channel.label(),
            tx.merchant_category.as_str(),
            &tx.risk_score.to_string(),
            tx.fraud_status.label(),
            &tx.triggered_rules.join("; "),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock_data::MockDataSource;

    #[test]
    fn test_export_writes_header_and_rows() {
        let txs = MockDataSource::seeded(5).transactions(12);
        let refs: Vec<&Transaction> = txs.iter().collect();

        let dir = std::env::temp_dir().join("fraudwatch_export_test");
        let path = export_transactions_csv(dir.to_str().unwrap(), &refs).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        assert_eq!(reader.headers().unwrap().get(0), Some("id"));
        let rows: Vec<_> = reader.records().collect::<Result<_, _>>().unwrap();
        assert_eq!(rows.len(), 12);
        assert_eq!(rows[0].get(0), Some(txs[0].id.as_str()));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_export_empty_view_still_writes_header() {
        let dir = std::env::temp_dir().join("fraudwatch_export_empty_test");
        let path = export_transactions_csv(dir.to_str().unwrap(), &[]).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        assert!(!reader.headers().unwrap().is_empty());
        assert_eq!(reader.records().count(), 0);

        let _ = fs::remove_file(&path);
    }
}
