//! Settings view: data source, API endpoint, refresh interval and export
//! directory. Saved values persist across restarts.

use crate::config::DataSource;
use crate::gui::app::GuiApp;
use crate::review_log;
use crate::user_settings::UserSettings;
use eframe::egui::{self, RichText};

pub fn view_settings(app: &mut GuiApp, ui: &mut egui::Ui) {
    let theme = app.theme;

    ui.heading(
        RichText::new(theme.section_header_text("[*]", "SETTINGS"))
            .color(theme.primary)
            .size(20.0),
    );
    ui.add_space(theme.spacing_md);

    theme.frame_panel().show(ui, |ui| {
        ui.label(RichText::new("[D] DATA SOURCE").color(theme.primary).strong());
        ui.add_space(theme.spacing_xs);

        ui.horizontal(|ui| {
            for source in [DataSource::Mock, DataSource::Live] {
                ui.radio_value(&mut app.settings_pending_source, source, source.label());
            }
        });
        ui.add_space(theme.spacing_sm);

        ui.label(
            RichText::new("API base URL (live mode)")
                .size(12.0)
                .color(theme.text_secondary),
        );
        ui.add(
            egui::TextEdit::singleline(&mut app.settings_pending_api_url).desired_width(360.0),
        );
    });
    ui.add_space(theme.spacing_md);

    theme.frame_panel().show(ui, |ui| {
        ui.label(RichText::new("[R] REFRESH").color(theme.primary).strong());
        ui.add_space(theme.spacing_xs);
        ui.horizontal(|ui| {
            ui.label(
                RichText::new("Auto-refresh interval (seconds, 0 disables)")
                    .size(12.0)
                    .color(theme.text_secondary),
            );
            ui.add(
                egui::DragValue::new(&mut app.settings_pending_refresh_secs)
                    .clamp_range(0..=3600)
                    .speed(1),
            );
        });
    });
    ui.add_space(theme.spacing_md);

    theme.frame_panel().show(ui, |ui| {
        ui.label(RichText::new("[>] EXPORT").color(theme.primary).strong());
        ui.add_space(theme.spacing_xs);
        ui.label(
            RichText::new("CSV export directory")
                .size(12.0)
                .color(theme.text_secondary),
        );
        ui.add(
            egui::TextEdit::singleline(&mut app.settings_pending_export_dir)
                .desired_width(360.0),
        );
        ui.add_space(theme.spacing_xs);
        if ui
            .add(theme.button_small("[>] Open folder"))
            .on_hover_text("Open the export directory in the file manager")
            .clicked()
        {
            if let Err(e) = open::that(&app.settings_pending_export_dir) {
                tracing::warn!("Failed to open export directory: {}", e);
            }
        }
    });
    ui.add_space(theme.spacing_md);

    ui.horizontal(|ui| {
        if ui.add(theme.button_primary("[OK] Save Settings")).clicked() {
            app.apply_settings();
        }
        if ui
            .add(theme.button_secondary("[R] Reset to Current"))
            .clicked()
        {
            app.settings_pending_api_url = app.config.api_base_url.clone();
            app.settings_pending_source = app.config.data_source;
            app.settings_pending_refresh_secs = app.config.auto_refresh_secs;
            app.settings_pending_export_dir = app.config.export_directory.clone();
        }
    });
    ui.add_space(theme.spacing_md);

    // Storage locations, for support requests
    theme.frame_surface().show(ui, |ui| {
        ui.label(RichText::new("[i] FILES").color(theme.primary).strong());
        ui.add_space(theme.spacing_xs);
        ui.label(
            RichText::new(format!(
                "Settings: {}",
                UserSettings::settings_path_display()
            ))
            .size(11.0)
            .color(theme.text_secondary),
        );
        ui.label(
            RichText::new(format!("Review log: {}", review_log::log_file_path()))
                .size(11.0)
                .color(theme.text_secondary),
        );
    });
}
