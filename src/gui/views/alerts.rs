//! Alerts view: severity tabs and alert cards with local review actions.

use crate::gui::app::GuiApp;
use crate::gui::helpers::{format_amount, time_ago};
use crate::table::BandFilter;
use crate::types::{Alert, AlertStatus, RiskBand};
use eframe::egui::{self, RichText};

pub fn view_alerts(app: &mut GuiApp, ui: &mut egui::Ui) {
    let theme = app.theme;

    ui.heading(
        RichText::new(theme.section_header_text("[!]", "FRAUD ALERTS"))
            .color(theme.primary)
            .size(20.0),
    );
    ui.add_space(theme.spacing_md);

    if app.alerts_state.fetch_job.is_some() && app.alerts_state.alerts.is_none() {
        ui.horizontal(|ui| {
            ui.spinner();
            ui.label(RichText::new("Loading alerts...").color(theme.text_secondary));
        });
        return;
    }

    let alerts = app.alerts_state.alerts.clone().unwrap_or_default();

    // Severity tabs with live counts
    let tabs = [
        (BandFilter::All, format!("All ({})", alerts.len())),
        (
            BandFilter::Only(RiskBand::High),
            format!("High ({})", band_count(&alerts, RiskBand::High)),
        ),
        (
            BandFilter::Only(RiskBand::Medium),
            format!("Medium ({})", band_count(&alerts, RiskBand::Medium)),
        ),
        (
            BandFilter::Only(RiskBand::Low),
            format!("Low ({})", band_count(&alerts, RiskBand::Low)),
        ),
    ];
    ui.horizontal(|ui| {
        for (filter, label) in tabs {
            let selected = app.alerts_state.band_tab == filter;
            let color = if selected {
                theme.primary
            } else {
                theme.text_secondary
            };
            if ui
                .add(
                    egui::Button::new(RichText::new(label).size(13.0).color(color))
                        .fill(if selected {
                            theme.surface_active
                        } else {
                            theme.surface
                        })
                        .stroke(egui::Stroke::new(1.0, color)),
                )
                .clicked()
            {
                app.alerts_state.band_tab = filter;
            }
        }
    });
    ui.add_space(theme.spacing_md);

    let visible: Vec<Alert> = alerts
        .iter()
        .filter(|a| match app.alerts_state.band_tab {
            BandFilter::All => true,
            BandFilter::Only(band) => a.risk_level == band,
        })
        .cloned()
        .collect();

    if visible.is_empty() {
        ui.label(
            RichText::new("No alerts in this severity band.").color(theme.text_secondary),
        );
        return;
    }

    for alert in &visible {
        alert_card(app, ui, alert);
        ui.add_space(theme.spacing_sm);
    }
}

fn band_count(alerts: &[Alert], band: RiskBand) -> usize {
    alerts.iter().filter(|a| a.risk_level == band).count()
}

fn alert_card(app: &mut GuiApp, ui: &mut egui::Ui, alert: &Alert) {
    let theme = app.theme;
    let status = app.alerts_state.effective_status(alert);
    let band_color = theme.band_color(alert.risk_level);

    egui::Frame::none()
        .fill(theme.panel_fill)
        .rounding(2.0)
        .inner_margin(theme.spacing_sm)
        .stroke(egui::Stroke::new(2.0, band_color))
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new(crate::gui::helpers::band_tag(alert.risk_level))
                        .strong()
                        .color(band_color),
                );
                ui.label(RichText::new(&alert.id).strong().color(theme.primary));
                ui.label(
                    RichText::new(format!("-> {}", alert.transaction_id))
                        .size(12.0)
                        .color(theme.text_secondary),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        RichText::new(time_ago(alert.timestamp))
                            .size(11.0)
                            .color(theme.text_secondary),
                    );
                    let status_color = match status {
                        AlertStatus::New => theme.accent_amber,
                        AlertStatus::Escalated => theme.error,
                        AlertStatus::Reviewed => theme.accent_green,
                        AlertStatus::FalsePositive => theme.text_secondary,
                    };
                    ui.label(
                        RichText::new(format!("[{}]", status.label()))
                            .size(11.0)
                            .color(status_color),
                    );
                });
            });
            ui.add_space(4.0);

            // Risk score meter
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new(format!("risk {}", alert.risk_score))
                        .size(12.0)
                        .color(band_color),
                );
                let (rect, _) =
                    ui.allocate_exact_size(egui::vec2(160.0, 10.0), egui::Sense::hover());
                ui.painter().rect_stroke(
                    rect,
                    1.0,
                    egui::Stroke::new(1.0, band_color.gamma_multiply(0.5)),
                );
                let mut fill = rect;
                fill.set_width(rect.width() * (alert.risk_score as f32 / 100.0));
                ui.painter().rect_filled(fill, 1.0, band_color);

                ui.add_space(theme.spacing_sm);
                ui.label(
                    RichText::new(format!(
                        "{} {} | {} | {} USD",
                        alert.channel.tag(),
                        alert.channel,
                        alert.location,
                        format_amount(alert.amount)
                    ))
                    .size(12.0)
                    .color(theme.text_secondary),
                );
            });

            if !alert.triggered_rules.is_empty() {
                ui.add_space(4.0);
                ui.horizontal_wrapped(|ui| {
                    for rule in &alert.triggered_rules {
                        egui::Frame::none()
                            .fill(theme.surface_active)
                            .rounding(2.0)
                            .inner_margin(egui::Margin::symmetric(6.0, 2.0))
                            .show(ui, |ui| {
                                ui.label(
                                    RichText::new(rule).size(11.0).color(theme.text_primary),
                                );
                            });
                    }
                });
            }

            // Review actions stay local; the entry goes to the audit log.
            if status == AlertStatus::New {
                ui.add_space(theme.spacing_xs);
                ui.horizontal(|ui| {
                    if ui.add(theme.button_small("[OK] Review")).clicked() {
                        app.review_alert(alert, AlertStatus::Reviewed);
                    }
                    if ui.add(theme.button_small("[!!] Escalate")).clicked() {
                        app.review_alert(alert, AlertStatus::Escalated);
                    }
                    if ui.add(theme.button_small("[--] False +")).clicked() {
                        app.review_alert(alert, AlertStatus::FalsePositive);
                    }
                });
            }
        });
}
