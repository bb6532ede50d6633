//! View modules for the GUI
//!
//! Each submodule contains the rendering logic for a specific screen.
//!
//! ## Module Structure
//!
//! - `dashboard` - KPI cards, suspicious-activity ticker, recent transactions, review log
//! - `transactions` - Full transaction table with detail window and ingest form
//! - `alerts` - Alert cards with review actions
//! - `analytics` - Rule-based and anomaly-based fraud analytics
//! - `settings` - Data source, refresh and export configuration
//!
//! Each view module exports a view function that takes `&mut GuiApp` and
//! `&mut egui::Ui`; they are called from `App::update` in `app.rs`.

pub mod alerts;
pub mod analytics;
pub mod dashboard;
pub mod settings;
pub mod transactions;

pub use alerts::view_alerts;
pub use analytics::view_analytics;
pub use dashboard::view_dashboard;
pub use settings::view_settings;
pub use transactions::view_transactions;
