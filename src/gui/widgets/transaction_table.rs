//! Transaction table widget
//!
//! Search box, channel and risk-band dropdowns, sortable columns, fixed
//! 10-row pages. The filter/sort/paginate work itself lives in
//! [`crate::table`]; this widget owns a [`TableQuery`] and renders whatever
//! the pipeline hands back.

use crate::gui::helpers::{self, format_amount, format_timestamp};
use crate::gui::theme::AppTheme;
use crate::table::{BandFilter, ChannelFilter, SortField, TableQuery};
use crate::types::{Channel, RiskBand, Transaction};
use eframe::egui::{self, RichText};
use egui_extras::{Column, TableBuilder};

/// What the caller needs to react to after a frame of the table.
#[derive(Default)]
pub struct TableResponse {
    /// Row the user clicked, for the detail window.
    pub selected: Option<Transaction>,
    /// Export button was pressed; contains the currently visible filtered
    /// and sorted rows (all pages, not just the current one).
    pub export_rows: Option<Vec<Transaction>>,
}

/// State for the transaction table widget
pub struct TransactionTable {
    pub query: TableQuery,
    id_salt: &'static str,
    show_export: bool,
}

impl TransactionTable {
    pub fn new(id_salt: &'static str) -> Self {
        Self {
            query: TableQuery::default(),
            id_salt,
            show_export: false,
        }
    }

    /// Enable the CSV export button above the table.
    pub fn with_export(mut self) -> Self {
        self.show_export = true;
        self
    }

    /// Render the filter bar, table and pagination footer.
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        theme: &AppTheme,
        transactions: &[Transaction],
    ) -> TableResponse {
        let mut response = TableResponse::default();

        self.filter_bar(ui, theme, &mut response, transactions);
        ui.add_space(theme.spacing_sm);

        let page = self.query.apply(transactions);
        // Write the clamp back so the footer controls start from a valid page.
        self.query.page = page.page;

        let mut sort_clicked: Option<SortField> = None;

        ui.push_id(self.id_salt, |ui| {
            TableBuilder::new(ui)
            .striped(true)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .column(Column::initial(110.0)) // id
            .column(Column::initial(100.0)) // account
            .column(Column::initial(110.0)) // amount
            .column(Column::initial(90.0)) // channel
            .column(Column::remainder().at_least(120.0)) // location
            .column(Column::initial(130.0)) // time
            .column(Column::initial(80.0)) // risk
            .column(Column::initial(90.0)) // status
            .header(22.0, |mut header| {
                header.col(|ui| {
                    ui.label(RichText::new("ID").strong().color(theme.text_secondary));
                });
                header.col(|ui| {
                    ui.label(RichText::new("Account").strong().color(theme.text_secondary));
                });
                header.col(|ui| {
                    if self.sort_header(ui, theme, "Amount", SortField::Amount) {
                        sort_clicked = Some(SortField::Amount);
                    }
                });
                header.col(|ui| {
                    ui.label(RichText::new("Channel").strong().color(theme.text_secondary));
                });
                header.col(|ui| {
                    ui.label(RichText::new("Location").strong().color(theme.text_secondary));
                });
                header.col(|ui| {
                    if self.sort_header(ui, theme, "Time", SortField::Timestamp) {
                        sort_clicked = Some(SortField::Timestamp);
                    }
                });
                header.col(|ui| {
                    if self.sort_header(ui, theme, "Risk", SortField::RiskScore) {
                        sort_clicked = Some(SortField::RiskScore);
                    }
                });
                header.col(|ui| {
                    ui.label(RichText::new("Status").strong().color(theme.text_secondary));
                });
            })
            .body(|mut body| {
                for tx in &page.rows {
                    body.row(20.0, |mut row| {
                        let mut clicked = false;
                        row.col(|ui| {
                            if ui
                                .link(RichText::new(&tx.id).size(12.0).color(theme.primary))
                                .clicked()
                            {
                                clicked = true;
                            }
                        });
                        row.col(|ui| {
                            ui.label(RichText::new(&tx.account_id).size(12.0));
                        });
                        row.col(|ui| {
                            ui.label(
                                RichText::new(format!(
                                    "{} {}",
                                    format_amount(tx.amount),
                                    tx.currency
                                ))
                                .size(12.0),
                            );
                        });
                        row.col(|ui| {
                            ui.label(
                                RichText::new(format!("{} {}", tx.channel.tag(), tx.channel))
                                    .size(12.0)
                                    .color(theme.text_secondary),
                            );
                        });
                        row.col(|ui| {
                            ui.label(RichText::new(&tx.location).size(12.0));
                        });
                        row.col(|ui| {
                            ui.label(
                                RichText::new(format_timestamp(tx.timestamp))
                                    .size(12.0)
                                    .color(theme.text_secondary),
                            );
                        });
                        row.col(|ui| {
                            let band = tx.risk_band();
                            ui.label(
                                RichText::new(format!("{} {}", tx.risk_score, helpers::band_tag(band)))
                                    .size(12.0)
                                    .color(theme.band_color(band)),
                            );
                        });
                        row.col(|ui| {
                            ui.label(
                                RichText::new(tx.fraud_status.label())
                                    .size(12.0)
                                    .color(theme.text_secondary),
                            );
                        });
                        if clicked {
                            response.selected = Some((*tx).clone());
                        }
                    });
                }
            });
        });

        if let Some(field) = sort_clicked {
            self.query.toggle_sort(field);
        }

        ui.add_space(theme.spacing_sm);

        // Pagination footer
        ui.horizontal(|ui| {
            if page.filtered_len == 0 {
                ui.label(
                    RichText::new("No transactions match the current filters.")
                        .color(theme.text_secondary),
                );
                return;
            }
            ui.label(
                RichText::new(format!(
                    "Showing {} to {} of {} transactions",
                    page.first_row, page.last_row, page.filtered_len
                ))
                .size(12.0)
                .color(theme.text_secondary),
            );

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui
                    .add_enabled(page.page < page.page_count, theme.button_small("Next >"))
                    .clicked()
                {
                    self.query.page += 1;
                }
                ui.label(
                    RichText::new(format!("page {} / {}", page.page, page.page_count))
                        .size(12.0)
                        .color(theme.text_primary),
                );
                if ui
                    .add_enabled(page.page > 1, theme.button_small("< Prev"))
                    .clicked()
                {
                    self.query.page -= 1;
                }
            });
        });

        response
    }

    fn filter_bar(
        &mut self,
        ui: &mut egui::Ui,
        theme: &AppTheme,
        response: &mut TableResponse,
        transactions: &[Transaction],
    ) {
        ui.horizontal(|ui| {
            ui.label(RichText::new("[/]").color(theme.primary));
            let search = egui::TextEdit::singleline(&mut self.query.search)
                .hint_text("Search id, account or location...")
                .desired_width(240.0);
            if ui.add(search).changed() {
                self.query.reset_page();
            }

            let mut channel = self.query.channel;
            egui::ComboBox::from_id_source((self.id_salt, "channel_filter"))
                .selected_text(channel.label())
                .width(140.0)
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut channel, ChannelFilter::All, "All Channels");
                    for c in Channel::ALL {
                        ui.selectable_value(&mut channel, ChannelFilter::Only(c), c.label());
                    }
                });
            if channel != self.query.channel {
                self.query.channel = channel;
                self.query.reset_page();
            }

            let mut band = self.query.band;
            egui::ComboBox::from_id_source((self.id_salt, "band_filter"))
                .selected_text(band.label())
                .width(130.0)
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut band, BandFilter::All, "All Risk");
                    ui.selectable_value(&mut band, BandFilter::Only(RiskBand::High), "High Risk");
                    ui.selectable_value(
                        &mut band,
                        BandFilter::Only(RiskBand::Medium),
                        "Medium Risk",
                    );
                    ui.selectable_value(&mut band, BandFilter::Only(RiskBand::Low), "Low Risk");
                });
            if band != self.query.band {
                self.query.band = band;
                self.query.reset_page();
            }

            if self.show_export {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui
                        .add(theme.button_small("[>] Export CSV"))
                        .on_hover_text("Save the filtered view as CSV")
                        .clicked()
                    {
                        // All pages of the current filter/sort, in order.
                        let mut export_query = self.query.clone();
                        export_query.page = 1;
                        let mut rows = Vec::new();
                        let first = export_query.apply(transactions);
                        let page_count = first.page_count;
                        for page_idx in 1..=page_count {
                            export_query.page = page_idx;
                            rows.extend(
                                export_query.apply(transactions).rows.into_iter().cloned(),
                            );
                        }
                        response.export_rows = Some(rows);
                    }
                });
            }
        });
    }

    fn sort_header(
        &self,
        ui: &mut egui::Ui,
        theme: &AppTheme,
        label: &str,
        field: SortField,
    ) -> bool {
        let active = self.query.sort_field == field;
        let text = if active {
            format!("{} {}", label, self.query.sort_direction.arrow())
        } else {
            label.to_string()
        };
        let color = if active {
            theme.primary
        } else {
            theme.text_secondary
        };
        ui.add(
            egui::Button::new(RichText::new(text).strong().size(12.0).color(color))
                .fill(egui::Color32::TRANSPARENT)
                .stroke(egui::Stroke::NONE),
        )
        .clicked()
    }
}
