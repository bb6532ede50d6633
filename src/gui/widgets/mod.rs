//! Reusable UI widgets

pub mod transaction_table;

pub use transaction_table::{TableResponse, TransactionTable};
