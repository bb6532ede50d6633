//! Dashboard view: KPI cards, suspicious-activity ticker, alert summary,
//! recent transactions and the review log.

use crate::gui::app::GuiApp;
use crate::gui::helpers::{draw_stat_bar, format_amount, time_ago};
use crate::summary::{self, KpiSummary};
use crate::types::{FraudStatus, RiskBand};
use eframe::egui::{self, RichText};

pub fn view_dashboard(app: &mut GuiApp, ui: &mut egui::Ui) {
    let theme = app.theme;

    ui.heading(
        RichText::new(theme.section_header_text("[H]", "DASHBOARD"))
            .color(theme.primary)
            .size(20.0),
    );
    ui.add_space(theme.spacing_md);

    let loading = app.tx_state.fetch_job.is_some() || app.alerts_state.fetch_job.is_some();
    if loading && app.tx_state.transactions.is_none() {
        ui.horizontal(|ui| {
            ui.spinner();
            ui.label(RichText::new("Loading data...").color(theme.text_secondary));
        });
        return;
    }

    let transactions = app.tx_state.transactions.clone().unwrap_or_default();
    let alerts = app.alerts_state.alerts.clone().unwrap_or_default();
    let kpi = KpiSummary::compute(&transactions, &alerts);

    // KPI cards row
    ui.horizontal(|ui| {
        kpi_card(
            ui,
            &theme,
            "TRANSACTIONS",
            &kpi.total_transactions.to_string(),
            theme.primary,
        );
        kpi_card(
            ui,
            &theme,
            "FLAGGED",
            &kpi.flagged_count.to_string(),
            theme.error,
        );
        kpi_card(
            ui,
            &theme,
            "HIGH-RISK ALERTS",
            &kpi.high_risk_alerts.to_string(),
            theme.warning,
        );
        kpi_card(
            ui,
            &theme,
            "FRAUD RATE",
            &format!("{:.1}%", kpi.fraud_rate),
            theme.accent_cyan,
        );
    });
    ui.add_space(theme.spacing_md);

    // Suspicious activity ticker
    theme.frame_panel().show(ui, |ui| {
        ui.label(
            RichText::new("[!] SUSPICIOUS ACTIVITY")
                .color(theme.warning)
                .strong(),
        );
        ui.add_space(theme.spacing_xs);
        let suspicious = summary::recent_suspicious(&transactions, 8);
        if suspicious.is_empty() {
            ui.label(
                RichText::new("No suspicious transactions in the current data.")
                    .color(theme.text_secondary),
            );
        } else {
            for tx in suspicious {
                ui.horizontal(|ui| {
                    let band = tx.risk_band();
                    ui.label(
                        RichText::new(crate::gui::helpers::band_tag(band))
                            .size(12.0)
                            .color(theme.band_color(band)),
                    );
                    ui.label(RichText::new(&tx.id).size(12.0).color(theme.primary));
                    ui.label(
                        RichText::new(format!("{} {}", format_amount(tx.amount), tx.currency))
                            .size(12.0),
                    );
                    ui.label(
                        RichText::new(format!("{} {}", tx.channel.tag(), tx.location))
                            .size(12.0)
                            .color(theme.text_secondary),
                    );
                    ui.label(
                        RichText::new(format!("risk {}", tx.risk_score))
                            .size(12.0)
                            .color(theme.band_color(band)),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            RichText::new(time_ago(tx.timestamp))
                                .size(11.0)
                                .color(theme.text_secondary),
                        );
                    });
                });
            }
        }
    });
    ui.add_space(theme.spacing_md);

    // Alert severity summary
    theme.frame_panel().show(ui, |ui| {
        ui.label(
            RichText::new("[!] ALERT SEVERITY")
                .color(theme.primary)
                .strong(),
        );
        ui.add_space(theme.spacing_xs);
        let high = alerts
            .iter()
            .filter(|a| a.risk_level == RiskBand::High)
            .count();
        let medium = alerts
            .iter()
            .filter(|a| a.risk_level == RiskBand::Medium)
            .count();
        let low = alerts
            .iter()
            .filter(|a| a.risk_level == RiskBand::Low)
            .count();
        ui.horizontal(|ui| {
            ui.label(
                RichText::new(format!("[HI] High: {}", high))
                    .size(13.0)
                    .color(theme.risk_high),
            );
            ui.add_space(theme.spacing_md);
            ui.label(
                RichText::new(format!("[MD] Medium: {}", medium))
                    .size(13.0)
                    .color(theme.risk_medium),
            );
            ui.add_space(theme.spacing_md);
            ui.label(
                RichText::new(format!("[LO] Low: {}", low))
                    .size(13.0)
                    .color(theme.risk_low),
            );
            ui.add_space(theme.spacing_md);
            ui.label(
                RichText::new(format!("total: {}", alerts.len()))
                    .size(13.0)
                    .color(theme.text_secondary),
            );
        });
    });
    ui.add_space(theme.spacing_md);

    // Fraud status distribution
    theme.frame_panel().show(ui, |ui| {
        ui.label(
            RichText::new("[S] FRAUD STATUS")
                .color(theme.primary)
                .strong(),
        );
        ui.add_space(theme.spacing_xs);
        let dist = summary::fraud_status_distribution(&transactions);
        let max = dist.iter().map(|(_, c)| *c).max().unwrap_or(0) as f64;
        for (status, count) in dist {
            let color = match status {
                FraudStatus::Flagged => theme.error,
                FraudStatus::Confirmed => theme.warning,
                FraudStatus::Pending => theme.accent_cyan,
                FraudStatus::Cleared => theme.accent_green,
            };
            draw_stat_bar(ui, status.label(), &count.to_string(), count as f64, max, color);
        }
    });
    ui.add_space(theme.spacing_md);

    // Recent transactions, through the same table widget as the full view
    theme.frame_panel().show(ui, |ui| {
        ui.label(
            RichText::new("[T] RECENT TRANSACTIONS")
                .color(theme.primary)
                .strong(),
        );
        ui.add_space(theme.spacing_xs);
        let mut recent = transactions.clone();
        recent.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        recent.truncate(20);
        let response = app.dashboard_table.show(ui, &theme, &recent);
        if let Some(selected) = response.selected {
            app.tx_state.selected = Some(selected);
            app.section = crate::gui::GuiSection::Transactions;
        }
    });
    ui.add_space(theme.spacing_md);

    // Review log panel
    theme.frame_panel().show(ui, |ui| {
        ui.horizontal(|ui| {
            ui.label(RichText::new("[L] REVIEW LOG").color(theme.primary).strong());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.add(theme.button_small("[R] Reload")).clicked() {
                    app.refresh_logs();
                }
            });
        });
        ui.add_space(theme.spacing_xs);

        if let Some(err) = &app.log_view.error {
            ui.label(RichText::new(format!("[XX] {}", err)).color(theme.error));
        }

        let scroll = egui::ScrollArea::vertical()
            .id_source("review_log_scroll")
            .max_height(180.0)
            .auto_shrink([false, true]);
        scroll.show(ui, |ui| {
            ui.label(
                RichText::new(&app.log_view.content)
                    .size(11.0)
                    .color(theme.text_secondary),
            );
            if app.log_view.scroll_to_bottom {
                ui.scroll_to_cursor(Some(egui::Align::BOTTOM));
                app.log_view.scroll_to_bottom = false;
            }
        });
    });
    ui.add_space(theme.spacing_md);

    // About panel
    theme.frame_surface().show(ui, |ui| {
        ui.horizontal(|ui| {
            ui.label(
                RichText::new(format!("FRAUDWATCH v{}", env!("CARGO_PKG_VERSION")))
                    .size(12.0)
                    .color(theme.primary),
            );
            ui.label(
                RichText::new(format!(
                    "| source: {} | refresh: {}s",
                    app.config.data_source.label(),
                    app.config.auto_refresh_secs
                ))
                .size(11.0)
                .color(theme.text_secondary),
            );
        });
        ui.label(
            RichText::new("Client-side fraud analytics. Scoring happens on the server.")
                .size(11.0)
                .color(theme.text_secondary),
        );
    });
}

fn kpi_card(
    ui: &mut egui::Ui,
    theme: &crate::gui::theme::AppTheme,
    label: &str,
    value: &str,
    color: egui::Color32,
) {
    theme.frame_surface().show(ui, |ui| {
        ui.set_min_width(150.0);
        ui.vertical(|ui| {
            ui.label(RichText::new(label).size(11.0).color(theme.text_secondary));
            ui.label(RichText::new(value).size(24.0).color(color).strong());
        });
    });
}
