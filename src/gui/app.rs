//! Main GUI application module
//!
//! Contains the GuiApp struct and all its implementations.

use crate::{
    api_client::ApiClient,
    config::{Config, DataSource},
    mock_data::MockDataSource,
    review_log, summary,
    table::BandFilter,
    types::{
        Alert, AlertStatus, AnomalyStats, CategoryStat, GeoStat, NewTransaction, RuleStat,
        TimePattern, Transaction,
    },
};
use anyhow::{anyhow, Result};
use eframe::{egui, egui::RichText, App, Frame, NativeOptions};
use std::collections::{HashMap, VecDeque};

use super::async_job::AsyncJob;
use super::helpers;
use super::notifications::NotificationEntry;
use super::theme::{configure_style, AppTheme};
use super::widgets::TransactionTable;

/// GUI section enum for navigation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuiSection {
    Dashboard,
    Transactions,
    Alerts,
    Analytics,
    Settings,
}

/// Form state for the transaction ingest window
pub(crate) struct IngestFormState {
    pub(crate) id: String,
    pub(crate) account_id: String,
    pub(crate) amount: String,
    pub(crate) currency: String,
    pub(crate) merchant_category: String,
    pub(crate) channel: crate::types::Channel,
    pub(crate) error: Option<String>,
}

impl Default for IngestFormState {
    fn default() -> Self {
        Self {
            id: String::new(),
            account_id: String::new(),
            amount: String::new(),
            currency: "USD".to_string(),
            merchant_category: "Retail".to_string(),
            channel: crate::types::Channel::Card,
            error: None,
        }
    }
}

impl IngestFormState {
    /// Validate the form into an ingest payload.
    pub(crate) fn to_payload(&self) -> Result<NewTransaction, String> {
        if self.id.trim().is_empty() {
            return Err("Transaction ID is required".to_string());
        }
        if self.account_id.trim().is_empty() {
            return Err("Account ID is required".to_string());
        }
        let amount: f64 = self
            .amount
            .trim()
            .parse()
            .map_err(|_| "Amount must be a number".to_string())?;
        if amount <= 0.0 {
            return Err("Amount must be positive".to_string());
        }
        Ok(NewTransaction {
            id: self.id.trim().to_string(),
            account_id: self.account_id.trim().to_string(),
            amount,
            currency: self.currency.trim().to_string(),
            merchant_category: self.merchant_category.trim().to_string(),
            channel: self.channel,
            location_lat: None,
            location_lon: None,
        })
    }
}

pub(crate) struct TransactionsState {
    pub(crate) table: TransactionTable,
    pub(crate) transactions: Option<Vec<Transaction>>,
    pub(crate) fetch_job: Option<AsyncJob<Vec<Transaction>>>,
    /// Row opened in the detail window
    pub(crate) selected: Option<Transaction>,
    pub(crate) show_ingest_form: bool,
    pub(crate) ingest_form: IngestFormState,
    pub(crate) submit_job: Option<AsyncJob<Transaction>>,
}

impl Default for TransactionsState {
    fn default() -> Self {
        Self {
            table: TransactionTable::new("transactions_table").with_export(),
            transactions: None,
            fetch_job: None,
            selected: None,
            show_ingest_form: false,
            ingest_form: IngestFormState::default(),
            submit_job: None,
        }
    }
}

#[derive(Default)]
pub(crate) struct AlertsState {
    pub(crate) alerts: Option<Vec<Alert>>,
    pub(crate) fetch_job: Option<AsyncJob<Vec<Alert>>>,
    pub(crate) band_tab: BandFilter,
    /// Local review dispositions; never written back to the API.
    pub(crate) local_status: HashMap<String, AlertStatus>,
}

impl AlertsState {
    /// Status of an alert with any local review applied.
    pub(crate) fn effective_status(&self, alert: &Alert) -> AlertStatus {
        self.local_status
            .get(&alert.id)
            .copied()
            .unwrap_or(alert.status)
    }
}

/// Everything the analytics view shows, fetched (or derived) in one go.
pub(crate) struct AnalyticsBundle {
    pub(crate) geo: Vec<GeoStat>,
    pub(crate) categories: Vec<CategoryStat>,
    pub(crate) rules: Vec<RuleStat>,
    pub(crate) time_pattern: Vec<TimePattern>,
    pub(crate) anomaly_dist: Vec<RuleStat>,
    pub(crate) anomaly: AnomalyStats,
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub(crate) enum AnalyticsTab {
    Rules,
    Anomalies,
}

pub(crate) struct AnalyticsState {
    pub(crate) tab: AnalyticsTab,
    pub(crate) bundle: Option<AnalyticsBundle>,
    pub(crate) fetch_job: Option<AsyncJob<AnalyticsBundle>>,
}

impl Default for AnalyticsState {
    fn default() -> Self {
        Self {
            tab: AnalyticsTab::Rules,
            bundle: None,
            fetch_job: None,
        }
    }
}

pub(crate) struct LogViewState {
    pub(crate) content: String,
    pub(crate) job: Option<AsyncJob<String>>,
    pub(crate) error: Option<String>,
    /// Flag to scroll to bottom on next render
    pub(crate) scroll_to_bottom: bool,
}

impl Default for LogViewState {
    fn default() -> Self {
        Self {
            content: "No review actions yet.".to_string(),
            job: None,
            error: None,
            scroll_to_bottom: true,
        }
    }
}

pub struct GuiApp {
    pub(crate) config: Config,
    pub(crate) user_settings: crate::user_settings::UserSettings,
    pub(crate) theme: AppTheme,
    pub(crate) section: GuiSection,
    pub(crate) previous_section: GuiSection,
    pub(crate) notifications: VecDeque<NotificationEntry>,
    pub(crate) show_notifications_popup: bool,
    pub(crate) notification_toast_visible: bool,
    pub(crate) notification_toast_close_time: Option<std::time::Instant>,
    pub(crate) last_notification_count: usize,
    pub(crate) tx_state: TransactionsState,
    /// Separate query state for the dashboard's recent-transactions table.
    pub(crate) dashboard_table: TransactionTable,
    pub(crate) alerts_state: AlertsState,
    pub(crate) analytics_state: AnalyticsState,
    pub(crate) log_view: LogViewState,
    // Settings page editing state
    pub(crate) settings_pending_api_url: String,
    pub(crate) settings_pending_source: DataSource,
    pub(crate) settings_pending_refresh_secs: u64,
    pub(crate) settings_pending_export_dir: String,
    pub(crate) last_refresh: std::time::Instant,
}

impl GuiApp {
    fn new(mut config: Config, ctx: &egui::Context) -> Self {
        let theme = AppTheme::default();
        configure_style(ctx, &theme);

        // Load user settings and layer them over the env config
        let user_settings = crate::user_settings::UserSettings::load();
        user_settings.apply_to(&mut config);

        let settings_pending_api_url = config.api_base_url.clone();
        let settings_pending_source = config.data_source;
        let settings_pending_refresh_secs = config.auto_refresh_secs;
        let settings_pending_export_dir = config.export_directory.clone();

        let mut app = Self {
            config,
            user_settings,
            theme,
            section: GuiSection::Dashboard,
            previous_section: GuiSection::Dashboard,
            notifications: VecDeque::with_capacity(20),
            show_notifications_popup: false,
            notification_toast_visible: false,
            notification_toast_close_time: None,
            last_notification_count: 0,
            tx_state: TransactionsState::default(),
            dashboard_table: TransactionTable::new("dashboard_table"),
            alerts_state: AlertsState::default(),
            analytics_state: AnalyticsState::default(),
            log_view: LogViewState::default(),
            settings_pending_api_url,
            settings_pending_source,
            settings_pending_refresh_secs,
            settings_pending_export_dir,
            last_refresh: std::time::Instant::now(),
        };
        app.refresh_logs();
        app
    }

    // ==================== data loading ====================

    pub(crate) fn refresh_transactions(&mut self) {
        if self.tx_state.fetch_job.is_some() {
            return;
        }
        let source = self.config.data_source;
        let base = self.config.api_base_url.clone();
        let count = self.config.mock_transaction_count;
        self.tx_state.fetch_job = Some(AsyncJob::spawn(move || async move {
            match source {
                DataSource::Mock => Ok(MockDataSource::new().transactions(count)),
                DataSource::Live => Ok(ApiClient::new(&base)?.transactions().await?),
            }
        }));
    }

    pub(crate) fn refresh_alerts(&mut self) {
        if self.alerts_state.fetch_job.is_some() {
            return;
        }
        let source = self.config.data_source;
        let base = self.config.api_base_url.clone();
        let count = self.config.mock_alert_count;
        self.alerts_state.fetch_job = Some(AsyncJob::spawn(move || async move {
            match source {
                DataSource::Mock => Ok(MockDataSource::new().alerts(count)),
                DataSource::Live => Ok(ApiClient::new(&base)?.alerts().await?),
            }
        }));
    }

    pub(crate) fn refresh_analytics(&mut self) {
        if self.analytics_state.fetch_job.is_some() {
            return;
        }
        let source = self.config.data_source;
        let base = self.config.api_base_url.clone();
        let count = self.config.mock_transaction_count;
        self.analytics_state.fetch_job = Some(AsyncJob::spawn(move || async move {
            match source {
                DataSource::Mock => {
                    // Derive every series from one generated population so
                    // the panels agree with each other.
                    let txs = MockDataSource::new().transactions(count * 5);
                    Ok(AnalyticsBundle {
                        geo: summary::geographic_distribution(&txs),
                        categories: summary::fraud_by_category(&txs),
                        rules: summary::rule_contribution(&txs),
                        time_pattern: summary::fraud_time_pattern(&txs),
                        anomaly_dist: summary::anomaly_distribution(&txs),
                        anomaly: summary::anomaly_stats(&txs),
                    })
                }
                DataSource::Live => {
                    let client = ApiClient::new(&base)?;
                    Ok(AnalyticsBundle {
                        geo: client.geographic_distribution().await?,
                        categories: client.fraud_by_category().await?,
                        rules: client.rule_contribution().await?,
                        time_pattern: client.fraud_time_pattern().await?,
                        anomaly_dist: client.anomaly_distribution().await?,
                        anomaly: client.anomaly_stats().await?,
                    })
                }
            }
        }));
    }

    pub(crate) fn refresh_logs(&mut self) {
        if self.log_view.job.is_some() {
            return;
        }
        self.log_view.job = Some(AsyncJob::spawn(|| async { review_log::read_log() }));
    }

    /// Kick the fetches the current section needs, if their data is missing.
    fn ensure_section_data(&mut self) {
        match self.section {
            GuiSection::Dashboard => {
                if self.tx_state.transactions.is_none() {
                    self.refresh_transactions();
                }
                if self.alerts_state.alerts.is_none() {
                    self.refresh_alerts();
                }
            }
            GuiSection::Transactions => {
                if self.tx_state.transactions.is_none() {
                    self.refresh_transactions();
                }
            }
            GuiSection::Alerts => {
                if self.alerts_state.alerts.is_none() {
                    self.refresh_alerts();
                }
            }
            GuiSection::Analytics => {
                if self.analytics_state.bundle.is_none() {
                    self.refresh_analytics();
                }
            }
            GuiSection::Settings => {}
        }
    }

    /// Drop all fetched data so the next frame refetches against the
    /// current settings.
    pub(crate) fn invalidate_data(&mut self) {
        self.tx_state.transactions = None;
        self.alerts_state.alerts = None;
        self.alerts_state.local_status.clear();
        self.analytics_state.bundle = None;
    }

    fn poll_jobs(&mut self) {
        if let Some(job) = &mut self.tx_state.fetch_job {
            if let Some(res) = job.poll() {
                match res {
                    Ok(txs) => {
                        tracing::info!("Loaded {} transactions", txs.len());
                        self.tx_state.transactions = Some(txs);
                    }
                    Err(e) => {
                        self.notifications.push_back(NotificationEntry::new(format!(
                            "[XX] Failed to load transactions: {}",
                            e
                        )));
                    }
                }
                self.tx_state.fetch_job = None;
            }
        }

        if let Some(job) = &mut self.alerts_state.fetch_job {
            if let Some(res) = job.poll() {
                match res {
                    Ok(alerts) => {
                        self.alerts_state.alerts = Some(alerts);
                        self.alerts_state.local_status.clear();
                    }
                    Err(e) => {
                        self.notifications.push_back(NotificationEntry::new(format!(
                            "[XX] Failed to load alerts: {}",
                            e
                        )));
                    }
                }
                self.alerts_state.fetch_job = None;
            }
        }

        if let Some(job) = &mut self.analytics_state.fetch_job {
            if let Some(res) = job.poll() {
                match res {
                    Ok(bundle) => {
                        self.analytics_state.bundle = Some(bundle);
                    }
                    Err(e) => {
                        self.notifications.push_back(NotificationEntry::new(format!(
                            "[XX] Failed to load analytics: {}",
                            e
                        )));
                    }
                }
                self.analytics_state.fetch_job = None;
            }
        }

        if let Some(job) = &mut self.tx_state.submit_job {
            if let Some(res) = job.poll() {
                match res {
                    Ok(tx) => {
                        self.notifications.push_back(NotificationEntry::new(format!(
                            "[OK] Transaction {} scored: risk {}",
                            tx.id, tx.risk_score
                        )));
                        if let Some(txs) = &mut self.tx_state.transactions {
                            txs.insert(0, tx);
                        }
                        self.tx_state.show_ingest_form = false;
                        self.tx_state.ingest_form = IngestFormState::default();
                    }
                    Err(e) => {
                        self.tx_state.ingest_form.error = Some(e.to_string());
                        self.notifications.push_back(NotificationEntry::new(format!(
                            "[XX] Transaction submit failed: {}",
                            e
                        )));
                    }
                }
                self.tx_state.submit_job = None;
            }
        }

        if let Some(job) = &mut self.log_view.job {
            if let Some(res) = job.poll() {
                match res {
                    Ok(content) => {
                        self.log_view.content = if content.trim().is_empty() {
                            "No review actions yet.".to_string()
                        } else {
                            content
                        };
                        self.log_view.error = None;
                        self.log_view.scroll_to_bottom = true;
                    }
                    Err(e) => {
                        self.log_view.error = Some(e.to_string());
                    }
                }
                self.log_view.job = None;
            }
        }

        // Auto-refresh the data behind the current section
        let refresh_interval = self.config.auto_refresh_secs;
        if refresh_interval > 0 && self.last_refresh.elapsed().as_secs() >= refresh_interval {
            self.last_refresh = std::time::Instant::now();
            match self.section {
                GuiSection::Dashboard => {
                    self.refresh_transactions();
                    self.refresh_alerts();
                }
                GuiSection::Transactions => self.refresh_transactions(),
                GuiSection::Alerts => self.refresh_alerts(),
                GuiSection::Analytics => self.refresh_analytics(),
                GuiSection::Settings => {}
            }
        }

        while self.notifications.len() > 50 {
            self.notifications.pop_front();
        }
    }

    // ==================== actions ====================

    /// Apply a review action to an alert: local status, audit log entry,
    /// notification. Nothing goes back to the server.
    pub(crate) fn review_alert(&mut self, alert: &Alert, status: AlertStatus) {
        self.alerts_state
            .local_status
            .insert(alert.id.clone(), status);

        let action = status.label();
        if let Err(e) = review_log::append_log(
            action,
            &alert.id,
            format!(
                "transaction={} risk_score={} amount={} channel={}",
                alert.transaction_id, alert.risk_score, alert.amount, alert.channel
            ),
        ) {
            tracing::warn!("Failed to write review log: {}", e);
        }

        self.notifications.push_back(NotificationEntry::new(format!(
            "[OK] Alert {} marked {}",
            alert.id, action
        )));
    }

    /// Export the given rows to CSV in the configured export directory.
    pub(crate) fn export_csv(&mut self, rows: &[Transaction]) {
        let refs: Vec<&Transaction> = rows.iter().collect();
        match crate::export::export_transactions_csv(&self.config.export_directory, &refs) {
            Ok(path) => {
                self.notifications.push_back(NotificationEntry::new(format!(
                    "[OK] Exported {} rows to {}",
                    rows.len(),
                    path.display()
                )));
            }
            Err(e) => {
                self.notifications
                    .push_back(NotificationEntry::new(format!("[XX] Export failed: {}", e)));
            }
        }
    }

    /// Submit the ingest form (or a simulated payload) for scoring.
    pub(crate) fn submit_ingest(&mut self, payload: NewTransaction) {
        if self.tx_state.submit_job.is_some() {
            return;
        }
        let source = self.config.data_source;
        let base = self.config.api_base_url.clone();
        self.tx_state.submit_job = Some(AsyncJob::spawn(move || async move {
            match source {
                DataSource::Mock => Ok(MockDataSource::new().score(payload)),
                DataSource::Live => Ok(ApiClient::new(&base)?.submit_transaction(&payload).await?),
            }
        }));
    }

    /// Persist the pending settings-page edits and apply them.
    pub(crate) fn apply_settings(&mut self) {
        let source_changed = self.settings_pending_source != self.config.data_source
            || self.settings_pending_api_url != self.config.api_base_url;

        self.user_settings.api_base_url = self.settings_pending_api_url.trim().to_string();
        self.user_settings.data_source = self.settings_pending_source;
        self.user_settings.auto_refresh_secs = self.settings_pending_refresh_secs;
        self.user_settings.export_directory = self.settings_pending_export_dir.trim().to_string();

        let mut config = Config::from_env();
        self.user_settings.apply_to(&mut config);
        self.config = config;

        match self.user_settings.save() {
            Ok(()) => {
                self.notifications
                    .push_back(NotificationEntry::new("[OK] Settings saved"));
            }
            Err(e) => {
                self.notifications.push_back(NotificationEntry::new(format!(
                    "[XX] Failed to save settings: {}",
                    e
                )));
            }
        }

        if source_changed {
            self.invalidate_data();
        }
    }
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        self.poll_jobs();
        self.ensure_section_data();

        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.add_space(10.0);
            ui.horizontal_wrapped(|ui| {
                ui.heading(
                    RichText::new("[F] FRAUDWATCH")
                        .size(22.0)
                        .color(self.theme.primary),
                );
                ui.label(
                    RichText::new(format!("v{}", env!("CARGO_PKG_VERSION")))
                        .size(12.0)
                        .color(self.theme.text_primary),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    // Data source indicator + manual refresh (rightmost)
                    if ui
                        .add(self.theme.button_small("[R] Refresh"))
                        .on_hover_text("Refetch data for the current view")
                        .clicked()
                    {
                        self.invalidate_data();
                    }

                    let (source_label, source_color) = match self.config.data_source {
                        DataSource::Live => ("LIVE", self.theme.accent_cyan),
                        DataSource::Mock => ("MOCK", self.theme.accent_amber),
                    };
                    egui::Frame::none()
                        .fill(self.theme.surface)
                        .rounding(4.0)
                        .inner_margin(egui::Margin::symmetric(8.0, 4.0))
                        .stroke(egui::Stroke::new(1.0, source_color))
                        .show(ui, |ui| {
                            ui.label(
                                RichText::new(format!("● {}", source_label))
                                    .size(12.0)
                                    .color(source_color),
                            )
                            .on_hover_text(match self.config.data_source {
                                DataSource::Live => self.config.api_base_url.clone(),
                                DataSource::Mock => "Locally generated demo data".to_string(),
                            });
                        });
                    ui.add_space(self.theme.spacing_sm);
                });
            });
            ui.add_space(6.0);
        });

        // Check for new notifications and trigger toast
        let current_notification_count = self.notifications.len();
        if current_notification_count > self.last_notification_count {
            self.notification_toast_visible = true;
            self.notification_toast_close_time =
                Some(std::time::Instant::now() + std::time::Duration::from_secs(5));
        }
        self.last_notification_count = current_notification_count;

        // Auto-close toast after timeout
        if let Some(close_time) = self.notification_toast_close_time {
            if std::time::Instant::now() >= close_time {
                self.notification_toast_visible = false;
                self.notification_toast_close_time = None;
            }
        }

        // Notification toast/icon overlay - bottom right corner
        let notification_count = self.notifications.len();
        let has_notifications = notification_count > 0;
        let latest_notification = self.notifications.back().map(|n| n.message.clone());

        egui::Area::new(egui::Id::new("notification_overlay"))
            .anchor(egui::Align2::RIGHT_BOTTOM, [-10.0, -10.0])
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                egui::Frame::none()
                    .fill(self.theme.surface_active)
                    .rounding(6.0)
                    .stroke(egui::Stroke::new(1.0, self.theme.primary))
                    .inner_margin(egui::Margin::symmetric(8.0, 6.0))
                    .show(ui, |ui| {
                        ui.horizontal(|ui| {
                            let icon_color = if has_notifications {
                                self.theme.accent_green
                            } else {
                                self.theme.text_secondary
                            };

                            if ui
                                .add(
                                    egui::Button::new(
                                        RichText::new("[!]").size(14.0).color(icon_color).strong(),
                                    )
                                    .fill(egui::Color32::TRANSPARENT)
                                    .stroke(egui::Stroke::NONE),
                                )
                                .on_hover_text("Click to view notification history")
                                .clicked()
                            {
                                self.show_notifications_popup = !self.show_notifications_popup;
                            }

                            if self.notification_toast_visible {
                                if let Some(ref msg) = latest_notification {
                                    ui.add_space(4.0);
                                    let display_text = helpers::truncate_chars(msg, 40);
                                    ui.label(
                                        RichText::new(&display_text)
                                            .size(12.0)
                                            .color(self.theme.text_primary),
                                    );
                                }
                            } else if has_notifications {
                                ui.add_space(2.0);
                                ui.label(
                                    RichText::new(format!("{}", notification_count))
                                        .size(10.0)
                                        .color(self.theme.accent_amber),
                                );
                            }
                        });
                    });
            });

        // Notification history popup window
        if self.show_notifications_popup {
            egui::Window::new("[#] Notification History")
                .collapsible(false)
                .resizable(true)
                .default_width(450.0)
                .default_height(350.0)
                .anchor(egui::Align2::RIGHT_BOTTOM, [-10.0, -50.0])
                .show(ctx, |ui| {
                    ui.horizontal(|ui| {
                        ui.label(
                            RichText::new(format!("{} notifications", self.notifications.len()))
                                .color(self.theme.text_secondary),
                        );
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            if ui
                                .add(
                                    egui::Button::new(
                                        RichText::new("[X] Close").color(self.theme.text_primary),
                                    )
                                    .fill(self.theme.secondary),
                                )
                                .clicked()
                            {
                                self.show_notifications_popup = false;
                            }
                            if ui
                                .add(
                                    egui::Button::new(
                                        RichText::new("[C] Clear").color(self.theme.text_primary),
                                    )
                                    .fill(self.theme.secondary),
                                )
                                .clicked()
                            {
                                self.notifications.clear();
                            }
                        });
                    });
                    ui.add_space(self.theme.spacing_xs);
                    ui.label(RichText::new("-".repeat(50)).size(10.0).color(self.theme.primary));
                    ui.add_space(self.theme.spacing_xs);

                    egui::ScrollArea::vertical()
                        .auto_shrink([false, false])
                        .max_height(280.0)
                        .show(ui, |ui| {
                            if self.notifications.is_empty() {
                                ui.label(
                                    RichText::new("No notifications yet.")
                                        .color(self.theme.text_secondary),
                                );
                            } else {
                                for notification in self.notifications.iter().rev() {
                                    ui.horizontal(|ui| {
                                        ui.label(
                                            RichText::new(format!("[{}]", notification.time_ago()))
                                                .size(11.0)
                                                .color(self.theme.text_secondary),
                                        );
                                        ui.label(
                                            RichText::new(&notification.message)
                                                .size(12.0)
                                                .color(self.theme.text_primary),
                                        );
                                    });
                                    ui.add_space(3.0);
                                }
                            }
                        });
                });
        }

        egui::SidePanel::left("nav")
            .resizable(false)
            .default_width(180.0)
            .frame(
                egui::Frame::none()
                    .fill(self.theme.surface)
                    .stroke(egui::Stroke::new(1.0, self.theme.primary)),
            )
            .show(ctx, |ui| {
                ui.add_space(self.theme.spacing_md);

                ui.horizontal(|ui| {
                    ui.add_space(self.theme.spacing_xs);
                    ui.label(RichText::new("-".repeat(22)).size(10.0).color(self.theme.primary));
                });
                ui.add_space(self.theme.spacing_sm);

                let nav_items = [
                    (GuiSection::Dashboard, "[H] Dashboard"),
                    (GuiSection::Transactions, "[T] Transactions"),
                    (GuiSection::Alerts, "[!] Alerts"),
                    (GuiSection::Analytics, "[%] Analytics"),
                    (GuiSection::Settings, "[*] Settings"),
                ];

                for (section, label) in nav_items {
                    let selected = self.section == section;

                    ui.horizontal(|ui| {
                        // Left accent indicator for selected item
                        if selected {
                            ui.add_space(2.0);
                            let (rect, _) = ui
                                .allocate_exact_size(egui::vec2(3.0, 20.0), egui::Sense::hover());
                            ui.painter().rect_filled(rect, 0.0, self.theme.primary);
                            ui.add_space(4.0);
                        } else {
                            ui.add_space(9.0);
                        }

                        let text_color = if selected {
                            self.theme.text_primary
                        } else {
                            self.theme.text_secondary
                        };
                        let response = ui.add(
                            egui::Button::new(RichText::new(label).size(13.0).color(text_color))
                                .fill(egui::Color32::TRANSPARENT)
                                .stroke(egui::Stroke::NONE)
                                .sense(egui::Sense::click()),
                        );

                        if response.clicked() {
                            self.previous_section = self.section;
                            self.section = section;
                            // Pull the review log when entering Dashboard
                            if section == GuiSection::Dashboard
                                && self.previous_section != GuiSection::Dashboard
                            {
                                self.refresh_logs();
                                self.log_view.scroll_to_bottom = true;
                            }
                        }
                    });
                    ui.add_space(self.theme.spacing_xs);
                }

                ui.add_space(self.theme.spacing_lg);
                ui.horizontal(|ui| {
                    ui.add_space(self.theme.spacing_xs);
                    ui.label(
                        RichText::new("-".repeat(22))
                            .size(10.0)
                            .color(self.theme.surface_active),
                    );
                });
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(self.theme.spacing_md);
            egui::ScrollArea::vertical().show(ui, |ui| match self.section {
                GuiSection::Dashboard => super::views::view_dashboard(self, ui),
                GuiSection::Transactions => super::views::view_transactions(self, ui),
                GuiSection::Alerts => super::views::view_alerts(self, ui),
                GuiSection::Analytics => super::views::view_analytics(self, ui),
                GuiSection::Settings => super::views::view_settings(self, ui),
            });
        });

        ctx.request_repaint_after(std::time::Duration::from_millis(100));
    }
}

pub fn launch(config: Config) -> Result<()> {
    let app_creator = move |cc: &eframe::CreationContext<'_>| {
        Box::new(GuiApp::new(config.clone(), &cc.egui_ctx)) as Box<dyn App>
    };

    let viewport = egui::ViewportBuilder::default()
        .with_inner_size([1100.0, 720.0])
        .with_maximized(true);

    let native_options = NativeOptions {
        viewport,
        persist_window: true,
        ..Default::default()
    };

    eframe::run_native(
        "Fraudwatch - Banking Fraud Analytics Dashboard",
        native_options,
        Box::new(app_creator),
    )
    .map_err(|e| anyhow!("Failed to start GUI: {}", e))
}
