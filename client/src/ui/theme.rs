//! # GUI Theme
//!
//! Dark theme for the swap desk with a blue accent, plus the badge colors for
//! session types and request statuses.

use egui::Theme as EguiTheme;
use egui::{Color32, Context, Stroke, Visuals};
use shared::SessionType;

/// Color palette
#[derive(Debug, Clone)]
pub struct Palette {
    pub background: Color32,
    pub panel: Color32,
    pub text: Color32,
    pub accent: Color32,
    pub accent_dark: Color32,
    pub border: Color32,
    pub green: Color32,
    pub red: Color32,
    pub amber: Color32,
    pub blue: Color32,
    pub gray_inactive: Color32,
    pub gray_secondary: Color32,
}

impl Default for Palette {
    fn default() -> Self {
        Palette {
            background: Color32::from_rgb(16, 18, 22),        // #101216
            panel: Color32::from_rgb(22, 25, 31),             // #16191F
            text: Color32::from_rgb(230, 232, 236),           // #E6E8EC
            accent: Color32::from_rgb(59, 130, 246),          // #3B82F6
            accent_dark: Color32::from_rgb(30, 64, 120),      // #1E4078
            border: Color32::from_rgb(51, 56, 66),            // #333842
            green: Color32::from_rgb(34, 197, 94),            // #22C55E
            red: Color32::from_rgb(239, 68, 68),              // #EF4444
            amber: Color32::from_rgb(245, 158, 11),           // #F59E0B
            blue: Color32::from_rgb(96, 165, 250),            // #60A5FA
            gray_inactive: Color32::from_rgb(32, 36, 44),     // #20242C
            gray_secondary: Color32::from_rgb(148, 155, 168), // #949BA8
        }
    }
}

/// Application theme
#[derive(Debug, Clone)]
pub struct Theme {
    pub colors: Palette,
    pub normal: Color32,
    pub selected: Color32,
    pub border: Color32,
    pub dim: Color32,
    pub success: Color32,
    pub error: Color32,
    pub warning: Color32,
    pub info: Color32,
    pub background: Color32,
}

impl Default for Theme {
    fn default() -> Self {
        let colors = Palette::default();
        Theme {
            normal: colors.text,
            selected: colors.accent,
            border: colors.border,
            dim: colors.gray_secondary,
            success: colors.green,
            error: colors.red,
            warning: colors.amber,
            info: colors.blue,
            background: colors.background,
            colors,
        }
    }
}

impl Theme {
    /// Badge color for a session type
    pub fn session_type_color(&self, session_type: SessionType) -> Color32 {
        match session_type {
            SessionType::Lecture => self.colors.blue,
            SessionType::Tutorial => self.colors.green,
            SessionType::Lab => self.colors.amber,
        }
    }

    pub fn visuals(&self) -> Visuals {
        let colors = &self.colors;
        let mut visuals = Visuals::dark();

        visuals.override_text_color = Some(colors.text);
        visuals.faint_bg_color = colors.panel;
        visuals.extreme_bg_color = colors.background;
        visuals.panel_fill = colors.background;
        visuals.window_fill = colors.panel;
        visuals.window_stroke = Stroke::new(1.0, colors.border);

        visuals.widgets.noninteractive.bg_fill = colors.gray_inactive;
        visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, colors.border);
        visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, colors.text);

        visuals.widgets.inactive.bg_fill = colors.gray_inactive;
        visuals.widgets.inactive.bg_stroke = Stroke::new(1.0, colors.border);

        visuals.widgets.hovered.bg_fill = colors.accent_dark;
        visuals.widgets.hovered.bg_stroke = Stroke::new(1.5, colors.accent);

        visuals.widgets.active.bg_fill = colors.accent_dark;
        visuals.widgets.active.bg_stroke = Stroke::new(2.0, colors.accent);

        visuals.selection.bg_fill = Color32::from_rgba_unmultiplied(59, 130, 246, 76);
        visuals.selection.stroke = Stroke::new(1.5, colors.accent);

        visuals.hyperlink_color = colors.blue;
        visuals
    }

    /// Apply the theme to both egui themes of the context.
    pub fn apply(&self, ctx: &Context) {
        let visuals = self.visuals();
        for theme in [EguiTheme::Dark, EguiTheme::Light] {
            ctx.style_mut_of(theme, |style| {
                style.visuals = visuals.clone();
                style.spacing.item_spacing = egui::Vec2::new(8.0, 6.0);
                style.spacing.button_padding = egui::Vec2::new(10.0, 4.0);
                style.spacing.menu_margin = egui::Margin::same(4);
            });
        }
        tracing::debug!("Applied swap desk theme");
    }
}
