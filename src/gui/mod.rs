//! GUI module for the Fraudwatch application
//!
//! This module provides the graphical user interface built with egui/eframe.
//!
//! ## Module Structure
//!
//! - `app` - Main GuiApp struct, state types, and core application logic
//! - `async_job` - Generic async job polling for background tasks
//! - `theme` - Centralized theme and styling system (AppTheme)
//! - `helpers` - Formatting utilities for amounts, timestamps, and risk labels
//! - `notifications` - Notification entries and history
//! - `views` - View rendering functions (dashboard, transactions, alerts, analytics, settings)
//! - `widgets` - Reusable UI widgets (TransactionTable)
//!
//! ## Usage
//!
//! ```no_run
//! use fraudwatch::config::Config;
//! use fraudwatch::gui;
//!
//! let config = Config::default();
//! gui::launch(config).expect("Failed to launch GUI");
//! ```

mod app;
pub mod async_job;
pub mod helpers;
pub mod notifications;
pub mod theme;
pub mod views;
pub mod widgets;

// Re-export main public API
pub use app::{launch, GuiApp, GuiSection};

// Re-export commonly used types from submodules for convenience
pub use async_job::AsyncJob;
pub use helpers::{format_amount, format_timestamp, risk_color};
pub use notifications::NotificationEntry;
pub use theme::{configure_style, AppTheme};
pub use widgets::TransactionTable;
