//! Analytics view: rule-based and anomaly-based fraud breakdowns, rendered
//! as painter-drawn horizontal bars.

use crate::gui::app::{AnalyticsTab, GuiApp};
use crate::gui::helpers::{draw_stat_bar, risk_color};
use eframe::egui::{self, RichText};

pub fn view_analytics(app: &mut GuiApp, ui: &mut egui::Ui) {
    let theme = app.theme;

    ui.horizontal(|ui| {
        ui.heading(
            RichText::new(theme.section_header_text("[%]", "ANALYTICS"))
                .color(theme.primary)
                .size(20.0),
        );
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.add(theme.button_small("[R] Reload")).clicked() {
                app.analytics_state.bundle = None;
            }
        });
    });
    ui.add_space(theme.spacing_sm);

    // Tab row
    ui.horizontal(|ui| {
        for (tab, label) in [
            (AnalyticsTab::Rules, "[=] Rule Based"),
            (AnalyticsTab::Anomalies, "[~] Anomaly Based"),
        ] {
            let selected = app.analytics_state.tab == tab;
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
                app.analytics_state.tab = tab;
            }
        }
    });
    ui.add_space(theme.spacing_md);

    if app.analytics_state.bundle.is_none() {
        ui.horizontal(|ui| {
            ui.spinner();
            ui.label(RichText::new("Loading analytics...").color(theme.text_secondary));
        });
        return;
    }
    let Some(bundle) = &app.analytics_state.bundle else {
        return;
    };

    match app.analytics_state.tab {
        AnalyticsTab::Rules => {
            // Geographic distribution
            theme.frame_panel().show(ui, |ui| {
                ui.label(
                    RichText::new("[G] FRAUD BY COUNTRY")
                        .color(theme.primary)
                        .strong(),
                );
                ui.add_space(theme.spacing_xs);
                if bundle.geo.is_empty() {
                    ui.label(RichText::new("No fraud in the data.").color(theme.text_secondary));
                }
                let max = bundle.geo.iter().map(|g| g.count).max().unwrap_or(0) as f64;
                for stat in &bundle.geo {
                    draw_stat_bar(
                        ui,
                        &stat.country,
                        &stat.count.to_string(),
                        stat.count as f64,
                        max,
                        risk_color(stat.risk_level),
                    );
                }
            });
            ui.add_space(theme.spacing_md);

            // Merchant categories
            theme.frame_panel().show(ui, |ui| {
                ui.label(
                    RichText::new("[M] FRAUD BY MERCHANT CATEGORY")
                        .color(theme.primary)
                        .strong(),
                );
                ui.add_space(theme.spacing_xs);
                let max = bundle
                    .categories
                    .iter()
                    .map(|c| c.fraud_count)
                    .max()
                    .unwrap_or(0) as f64;
                for stat in &bundle.categories {
                    draw_stat_bar(
                        ui,
                        &stat.category,
                        &stat.fraud_count.to_string(),
                        stat.fraud_count as f64,
                        max,
                        theme.accent_cyan,
                    );
                }
            });
            ui.add_space(theme.spacing_md);

            // Top rules
            theme.frame_panel().show(ui, |ui| {
                ui.label(
                    RichText::new("[=] TOP TRIGGERED RULES")
                        .color(theme.primary)
                        .strong(),
                );
                ui.add_space(theme.spacing_xs);
                let max = bundle.rules.iter().map(|r| r.count).max().unwrap_or(0) as f64;
                for stat in &bundle.rules {
                    draw_stat_bar(
                        ui,
                        &stat.rule,
                        &format!("{} ({:.1}%)", stat.count, stat.percentage),
                        stat.count as f64,
                        max,
                        theme.primary,
                    );
                }
            });
            ui.add_space(theme.spacing_md);

            // Hour-of-day pattern
            theme.frame_panel().show(ui, |ui| {
                ui.label(
                    RichText::new("[O] FRAUD BY HOUR OF DAY")
                        .color(theme.primary)
                        .strong(),
                );
                ui.add_space(theme.spacing_xs);
                hour_chart(
                    ui,
                    &bundle
                        .time_pattern
                        .iter()
                        .map(|p| (p.hour.clone(), p.fraud_count))
                        .collect::<Vec<_>>(),
                    theme.warning,
                );
            });
        }
        AnalyticsTab::Anomalies => {
            // Totals
            ui.horizontal(|ui| {
                theme.frame_surface().show(ui, |ui| {
                    ui.set_min_width(180.0);
                    ui.vertical(|ui| {
                        ui.label(
                            RichText::new("TOTAL ANOMALIES")
                                .size(11.0)
                                .color(theme.text_secondary),
                        );
                        ui.label(
                            RichText::new(bundle.anomaly.total_anomalies.to_string())
                                .size(24.0)
                                .color(theme.warning)
                                .strong(),
                        );
                    });
                });
                theme.frame_surface().show(ui, |ui| {
                    ui.set_min_width(180.0);
                    ui.vertical(|ui| {
                        ui.label(
                            RichText::new("LAST 24 HOURS")
                                .size(11.0)
                                .color(theme.text_secondary),
                        );
                        ui.label(
                            RichText::new(bundle.anomaly.recent_anomalies_24h.to_string())
                                .size(24.0)
                                .color(theme.accent_cyan)
                                .strong(),
                        );
                    });
                });
            });
            ui.add_space(theme.spacing_md);

            // 24h trend
            theme.frame_panel().show(ui, |ui| {
                ui.label(
                    RichText::new("[~] ANOMALY TREND (24H)")
                        .color(theme.primary)
                        .strong(),
                );
                ui.add_space(theme.spacing_xs);
                hour_chart(
                    ui,
                    &bundle
                        .anomaly
                        .series
                        .iter()
                        .map(|p| (p.timestamp.clone(), p.count))
                        .collect::<Vec<_>>(),
                    theme.accent_cyan,
                );
            });
            ui.add_space(theme.spacing_md);

            // Indicator distribution
            theme.frame_panel().show(ui, |ui| {
                ui.label(
                    RichText::new("[~] ANOMALY INDICATORS")
                        .color(theme.primary)
                        .strong(),
                );
                ui.add_space(theme.spacing_xs);
                let max = bundle
                    .anomaly_dist
                    .iter()
                    .map(|r| r.count)
                    .max()
                    .unwrap_or(0) as f64;
                for stat in &bundle.anomaly_dist {
                    draw_stat_bar(
                        ui,
                        &stat.rule,
                        &format!("{} (avg score {:.1})", stat.count, stat.avg_score),
                        stat.count as f64,
                        max,
                        theme.warning,
                    );
                }
            });
        }
    }
}

/// Vertical bar chart over hourly buckets, labels every third bucket.
fn hour_chart(ui: &mut egui::Ui, buckets: &[(String, u64)], color: egui::Color32) {
    let max = buckets.iter().map(|(_, c)| *c).max().unwrap_or(0).max(1) as f32;
    let chart_height = 80.0;
    let available = ui.available_width();
    let bar_width = (available / buckets.len().max(1) as f32 - 4.0).clamp(4.0, 30.0);

    ui.horizontal(|ui| {
        for (label, count) in buckets {
            ui.vertical(|ui| {
                let (rect, _) = ui.allocate_exact_size(
                    egui::vec2(bar_width, chart_height),
                    egui::Sense::hover(),
                );
                let h = chart_height * (*count as f32 / max);
                let bar = egui::Rect::from_min_max(
                    egui::pos2(rect.min.x, rect.max.y - h),
                    rect.max,
                );
                ui.painter()
                    .rect_stroke(rect, 0.0, egui::Stroke::new(1.0, color.gamma_multiply(0.25)));
                if *count > 0 {
                    ui.painter().rect_filled(bar, 0.0, color);
                }
                ui.label(
                    RichText::new(label.get(..2).unwrap_or(""))
                        .size(9.0)
                        .color(egui::Color32::from_rgb(170, 170, 170)),
                );
            })
            .response
            .on_hover_text(format!("{}: {}", label, count));
        }
    });
}
