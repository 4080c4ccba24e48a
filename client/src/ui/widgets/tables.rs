//! # Table Components
//!
//! Empty state, error banner and summary line shared by list screens.

use crate::ui::theme::Theme;

/// Render an empty state message
pub fn render_empty_state(
    ui: &mut egui::Ui,
    primary_text: &str,
    secondary_text: Option<&str>,
    theme: &Theme,
) {
    ui.vertical_centered(|ui| {
        ui.add_space(20.0);
        ui.colored_label(theme.dim, primary_text);
        if let Some(secondary) = secondary_text {
            ui.add_space(10.0);
            ui.colored_label(theme.dim, secondary);
        }
    });
}

/// Render a one-line error above a list. Returns `true` if "Retry" was clicked.
pub fn render_error_banner(ui: &mut egui::Ui, message: &str, theme: &Theme) -> bool {
    let mut retry = false;
    egui::Frame::new()
        .stroke(egui::Stroke::new(1.0, theme.error))
        .inner_margin(egui::Margin::same(6))
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.colored_label(theme.error, message);
                retry = ui.button("Retry").clicked();
            });
        });
    retry
}

/// Render stats summary (e.g., "Total: X | Pending: Y | Accepted: Z")
pub fn render_stats_summary(ui: &mut egui::Ui, stats: &[(&str, usize)]) {
    ui.horizontal(|ui| {
        ui.label(format_stats(stats));
    });
}

fn format_stats(stats: &[(&str, usize)]) -> String {
    stats
        .iter()
        .map(|(label, count)| format!("{}: {}", label, count))
        .collect::<Vec<_>>()
        .join("  |  ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_stats() {
        assert_eq!(
            format_stats(&[("Total", 3), ("Pending", 1)]),
            "Total: 3  |  Pending: 1"
        );
        assert_eq!(format_stats(&[]), "");
    }
}
