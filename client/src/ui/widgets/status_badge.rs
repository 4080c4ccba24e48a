//! # Status Badges
//!
//! Small filled labels for request statuses and session types.

use egui::{Color32, RichText};
use shared::{SessionType, SwapStatus};

use crate::ui::theme::Theme;

/// Visual variant of a badge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusVariant {
    Warning,
    Success,
    Destructive,
}

impl From<SwapStatus> for StatusVariant {
    fn from(status: SwapStatus) -> Self {
        match status {
            SwapStatus::Pending => StatusVariant::Warning,
            SwapStatus::Accepted => StatusVariant::Success,
            SwapStatus::Rejected => StatusVariant::Destructive,
        }
    }
}

impl StatusVariant {
    pub fn color(&self, theme: &Theme) -> Color32 {
        match self {
            StatusVariant::Warning => theme.warning,
            StatusVariant::Success => theme.success,
            StatusVariant::Destructive => theme.error,
        }
    }
}

/// Render `text` on a rounded background of `color`.
pub fn render_badge(ui: &mut egui::Ui, text: &str, color: Color32) {
    egui::Frame::new()
        .fill(color.gamma_multiply(0.25))
        .stroke(egui::Stroke::new(1.0, color))
        .corner_radius(egui::CornerRadius::same(8))
        .inner_margin(egui::Margin::symmetric(6, 1))
        .show(ui, |ui| {
            ui.label(RichText::new(text).small().color(color));
        });
}

pub fn status_badge(ui: &mut egui::Ui, status: SwapStatus, theme: &Theme) {
    render_badge(ui, status.label(), StatusVariant::from(status).color(theme));
}

pub fn session_type_badge(ui: &mut egui::Ui, session_type: SessionType, theme: &Theme) {
    render_badge(ui, session_type.label(), theme.session_type_color(session_type));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_variant_mapping() {
        assert_eq!(StatusVariant::from(SwapStatus::Pending), StatusVariant::Warning);
        assert_eq!(StatusVariant::from(SwapStatus::Accepted), StatusVariant::Success);
        assert_eq!(StatusVariant::from(SwapStatus::Rejected), StatusVariant::Destructive);
    }

    #[test]
    fn test_every_status_has_distinct_color() {
        let theme = Theme::default();
        let color = |status| StatusVariant::from(status).color(&theme);
        assert_ne!(color(SwapStatus::Pending), color(SwapStatus::Accepted));
        assert_ne!(color(SwapStatus::Accepted), color(SwapStatus::Rejected));
        assert_ne!(color(SwapStatus::Pending), color(SwapStatus::Rejected));
    }
}
