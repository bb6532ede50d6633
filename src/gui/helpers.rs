//! Helper functions for the GUI
//!
//! Formatting utilities for currency amounts, timestamps, and risk display.

use crate::types::RiskBand;
use chrono::{DateTime, Local, Utc};
use eframe::egui;

/// Format a currency amount with thousands separators and two decimals,
/// e.g. `12,450.00`.
pub fn format_amount(amount: f64) -> String {
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let frac = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if negative {
        format!("-{}.{:02}", grouped, frac)
    } else {
        format!("{}.{:02}", grouped, frac)
    }
}

/// Format a UTC timestamp in the user's local time zone.
pub fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string()
}

/// Relative age of a timestamp, for ticker rows and alert cards.
pub fn time_ago(ts: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(ts);
    if duration.num_seconds() < 60 {
        "just now".to_string()
    } else if duration.num_minutes() < 60 {
        format!("{}m ago", duration.num_minutes())
    } else if duration.num_hours() < 24 {
        format!("{}h ago", duration.num_hours())
    } else {
        format!("{}d ago", duration.num_days())
    }
}

/// Truncate to at most `max_chars` characters, appending "..." when cut.
/// Counts characters, not bytes, so multibyte text never splits.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}

/// Short ASCII severity tag for a band, e.g. `[HI]`.
pub fn band_tag(band: RiskBand) -> &'static str {
    match band {
        RiskBand::High => "[HI]",
        RiskBand::Medium => "[MD]",
        RiskBand::Low => "[LO]",
    }
}

/// Risk color independent of theme instance, for painter calls in charts.
pub fn risk_color(band: RiskBand) -> egui::Color32 {
    match band {
        RiskBand::High => egui::Color32::from_rgb(255, 85, 85),
        RiskBand::Medium => egui::Color32::from_rgb(255, 170, 0),
        RiskBand::Low => egui::Color32::from_rgb(0, 221, 119),
    }
}

/// Draw a horizontal bar with a label, scaled against `max`. Used by the
/// analytics panels in place of a chart library.
pub fn draw_stat_bar(
    ui: &mut egui::Ui,
    label: &str,
    value_text: &str,
    value: f64,
    max: f64,
    color: egui::Color32,
) {
    ui.horizontal(|ui| {
        ui.add_sized(
            [180.0, 18.0],
            egui::Label::new(
                egui::RichText::new(label)
                    .size(12.0)
                    .color(egui::Color32::from_rgb(170, 170, 170)),
            ),
        );

        let bar_width = (ui.available_width() - 80.0).max(60.0);
        let fraction = if max > 0.0 {
            (value / max).clamp(0.0, 1.0) as f32
        } else {
            0.0
        };
        let (rect, _) =
            ui.allocate_exact_size(egui::vec2(bar_width, 14.0), egui::Sense::hover());
        ui.painter()
            .rect_stroke(rect, 1.0, egui::Stroke::new(1.0, color.gamma_multiply(0.5)));
        let mut fill = rect;
        fill.set_width(bar_width * fraction);
        ui.painter().rect_filled(fill, 1.0, color);

        ui.label(egui::RichText::new(value_text).size(12.0).color(color));
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    // ==================== format_amount tests ====================

    #[test]
    fn test_format_amount_grouping() {
        assert_eq!(format_amount(0.0), "0.00");
        assert_eq!(format_amount(999.0), "999.00");
        assert_eq!(format_amount(1000.0), "1,000.00");
        assert_eq!(format_amount(1234567.89), "1,234,567.89");
    }

    #[test]
    fn test_format_amount_rounds_to_cents() {
        assert_eq!(format_amount(12.345), "12.35");
        assert_eq!(format_amount(12.344), "12.34");
    }

    #[test]
    fn test_format_amount_negative() {
        assert_eq!(format_amount(-1250.5), "-1,250.50");
    }

    // ==================== band_tag tests ====================

    #[test]
    fn test_band_tags() {
        assert_eq!(band_tag(RiskBand::High), "[HI]");
        assert_eq!(band_tag(RiskBand::Medium), "[MD]");
        assert_eq!(band_tag(RiskBand::Low), "[LO]");
    }

    // ==================== truncate_chars tests ====================

    #[test]
    fn test_truncate_chars_short_text_unchanged() {
        assert_eq!(truncate_chars("short", 40), "short");
        assert_eq!(truncate_chars("", 40), "");
    }

    #[test]
    fn test_truncate_chars_cuts_long_text() {
        let long = "x".repeat(60);
        assert_eq!(truncate_chars(&long, 40), format!("{}...", "x".repeat(40)));
    }

    #[test]
    fn test_truncate_chars_multibyte_boundary() {
        // A path like this used to land a cut mid-character when sliced
        // by byte index.
        let msg = "[OK] Exported 10 rows to /home/müller/Dokumente/transactions_20260826.csv";
        let cut = truncate_chars(msg, 40);
        assert!(cut.ends_with("..."));
        assert_eq!(cut.chars().count(), 43);

        let umlauts = "ü".repeat(30);
        assert_eq!(truncate_chars(&umlauts, 20), format!("{}...", "ü".repeat(20)));
    }

    // ==================== time_ago tests ====================

    #[test]
    fn test_time_ago_old_timestamp_in_days() {
        let ts = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
        assert!(time_ago(ts).ends_with("d ago"));
    }
}
