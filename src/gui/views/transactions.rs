//! Transactions view: the full filter/sort/paginate table, a detail window
//! for a selected row, CSV export and the ingest form.

use crate::gui::app::GuiApp;
use crate::gui::helpers::{format_amount, format_timestamp};
use crate::mock_data::MockDataSource;
use crate::types::Channel;
use eframe::egui::{self, RichText};

pub fn view_transactions(app: &mut GuiApp, ui: &mut egui::Ui) {
    let theme = app.theme;

    ui.horizontal(|ui| {
        ui.heading(
            RichText::new(theme.section_header_text("[T]", "TRANSACTIONS"))
                .color(theme.primary)
                .size(20.0),
        );
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.add(theme.button_small("[+] Ingest")).clicked() {
                app.tx_state.show_ingest_form = true;
            }
        });
    });
    ui.add_space(theme.spacing_md);

    if app.tx_state.fetch_job.is_some() && app.tx_state.transactions.is_none() {
        ui.horizontal(|ui| {
            ui.spinner();
            ui.label(RichText::new("Loading transactions...").color(theme.text_secondary));
        });
        return;
    }

    let transactions = app.tx_state.transactions.clone().unwrap_or_default();

    let response = app.tx_state.table.show(ui, &theme, &transactions);
    if let Some(selected) = response.selected {
        app.tx_state.selected = Some(selected);
    }
    if let Some(rows) = response.export_rows {
        app.export_csv(&rows);
    }

    detail_window(app, ui.ctx());
    ingest_window(app, ui.ctx());
}

/// Detail window for the clicked row. Closes via the title bar button or
/// the close button at the bottom.
fn detail_window(app: &mut GuiApp, ctx: &egui::Context) {
    let theme = app.theme;
    let Some(tx) = app.tx_state.selected.clone() else {
        return;
    };

    let mut open = true;
    let mut close_clicked = false;
    egui::Window::new(format!("[T] {}", tx.id))
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .default_width(420.0)
        .show(ctx, |ui| {
            egui::Grid::new("tx_detail_grid")
                .num_columns(2)
                .spacing([theme.spacing_md, 6.0])
                .show(ui, |ui| {
                    detail_row(ui, &theme, "Account", &tx.account_id);
                    detail_row(
                        ui,
                        &theme,
                        "Amount",
                        &format!("{} {}", format_amount(tx.amount), tx.currency),
                    );
                    detail_row(ui, &theme, "Time", &format_timestamp(tx.timestamp));
                    detail_row(ui, &theme, "Location", &tx.location);
                    detail_row(ui, &theme, "Country", &tx.country);
                    detail_row(ui, &theme, "Channel", tx.channel.label());
                    detail_row(ui, &theme, "Category", &tx.merchant_category);
                    detail_row(ui, &theme, "Status", tx.fraud_status.label());

                    ui.label(RichText::new("Risk").color(theme.text_secondary));
                    let band = tx.risk_band();
                    ui.label(
                        RichText::new(format!("{} ({})", tx.risk_score, band.label()))
                            .color(theme.band_color(band))
                            .strong(),
                    );
                    ui.end_row();
                });

            if !tx.triggered_rules.is_empty() {
                ui.add_space(theme.spacing_sm);
                ui.label(
                    RichText::new("Triggered rules")
                        .color(theme.text_secondary)
                        .size(12.0),
                );
                for rule in &tx.triggered_rules {
                    ui.label(RichText::new(format!("  - {}", rule)).size(12.0));
                }
            }
            if !tx.anomaly_indicators.is_empty() {
                ui.add_space(theme.spacing_sm);
                ui.label(
                    RichText::new("Anomaly indicators")
                        .color(theme.text_secondary)
                        .size(12.0),
                );
                for indicator in &tx.anomaly_indicators {
                    ui.label(
                        RichText::new(format!("  - {}", indicator))
                            .size(12.0)
                            .color(theme.warning),
                    );
                }
            }

            ui.add_space(theme.spacing_sm);
            if ui.add(theme.button_small("[X] Close")).clicked() {
                close_clicked = true;
            }
        });

    if !open || close_clicked {
        app.tx_state.selected = None;
    }
}

fn detail_row(ui: &mut egui::Ui, theme: &crate::gui::theme::AppTheme, label: &str, value: &str) {
    ui.label(RichText::new(label).color(theme.text_secondary));
    ui.label(RichText::new(value).color(theme.text_primary));
    ui.end_row();
}

/// Transaction ingest form window.
fn ingest_window(app: &mut GuiApp, ctx: &egui::Context) {
    let theme = app.theme;
    if !app.tx_state.show_ingest_form {
        return;
    }

    let submitting = app.tx_state.submit_job.is_some();
    let mut open = true;
    let mut submit_payload = None;
    let mut cancel_clicked = false;

    egui::Window::new("[+] Submit Transaction")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .default_width(380.0)
        .show(ctx, |ui| {
            let form = &mut app.tx_state.ingest_form;

            egui::Grid::new("ingest_form_grid")
                .num_columns(2)
                .spacing([theme.spacing_md, 8.0])
                .show(ui, |ui| {
                    ui.label(RichText::new("Transaction ID").color(theme.text_secondary));
                    ui.text_edit_singleline(&mut form.id);
                    ui.end_row();

                    ui.label(RichText::new("Account ID").color(theme.text_secondary));
                    ui.text_edit_singleline(&mut form.account_id);
                    ui.end_row();

                    ui.label(RichText::new("Amount").color(theme.text_secondary));
                    ui.text_edit_singleline(&mut form.amount);
                    ui.end_row();

                    ui.label(RichText::new("Currency").color(theme.text_secondary));
                    ui.text_edit_singleline(&mut form.currency);
                    ui.end_row();

                    ui.label(RichText::new("Category").color(theme.text_secondary));
                    egui::ComboBox::from_id_source("ingest_category")
                        .selected_text(form.merchant_category.clone())
                        .width(180.0)
                        .show_ui(ui, |ui| {
                            for cat in crate::mock_data::MERCHANT_CATEGORIES {
                                ui.selectable_value(
                                    &mut form.merchant_category,
                                    cat.to_string(),
                                    cat,
                                );
                            }
                        });
                    ui.end_row();

                    ui.label(RichText::new("Channel").color(theme.text_secondary));
                    egui::ComboBox::from_id_source("ingest_channel")
                        .selected_text(form.channel.label())
                        .width(180.0)
                        .show_ui(ui, |ui| {
                            for c in Channel::ALL {
                                ui.selectable_value(&mut form.channel, c, c.label());
                            }
                        });
                    ui.end_row();
                });

            if let Some(err) = &form.error {
                ui.add_space(theme.spacing_xs);
                ui.label(RichText::new(format!("[XX] {}", err)).color(theme.error));
            }

            ui.add_space(theme.spacing_sm);
            ui.horizontal(|ui| {
                if ui
                    .add_enabled(!submitting, theme.button_primary("[>] Submit"))
                    .clicked()
                {
                    match form.to_payload() {
                        Ok(payload) => {
                            form.error = None;
                            submit_payload = Some(payload);
                        }
                        Err(e) => form.error = Some(e),
                    }
                }
                if ui
                    .add_enabled(!submitting, theme.button_secondary("[?] Simulate Random"))
                    .on_hover_text("Fill the form with a random payload")
                    .clicked()
                {
                    let random = MockDataSource::new().random_ingest();
                    form.id = random.id;
                    form.account_id = random.account_id;
                    form.amount = format!("{:.2}", random.amount);
                    form.currency = random.currency;
                    form.merchant_category = random.merchant_category;
                    form.channel = random.channel;
                    form.error = None;
                }
                if ui.add(theme.button_secondary("[X] Cancel")).clicked() {
                    cancel_clicked = true;
                }
                if submitting {
                    ui.spinner();
                }
            });
        });

    if let Some(payload) = submit_payload {
        app.submit_ingest(payload);
    }
    if !open || cancel_clicked {
        app.tx_state.show_ingest_form = false;
        app.tx_state.ingest_form.error = None;
    }
}
