//! Fraudwatch - desktop dashboard for banking-transaction fraud signals.
//!
//! The binary is a thin wrapper around [`gui::launch`]; everything else is
//! library code so the deterministic parts (table pipeline, aggregation,
//! mock generator, API client) are testable without a display.

pub mod api_client;
pub mod config;
pub mod export;
pub mod gui;
pub mod mock_data;
pub mod review_log;
pub mod summary;
pub mod table;
pub mod types;
pub mod user_settings;
