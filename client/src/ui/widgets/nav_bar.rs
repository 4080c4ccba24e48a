//! # Navigation Bar
//!
//! Screen tabs, refresh and sign-out. Only shown with a stored token.

use crate::app::{App, AppState, Screen};
use crate::ui::theme::Theme;

pub fn render_nav_bar(ui: &mut egui::Ui, state: &AppState, app: &mut App, theme: &Theme) {
    if !state.authenticated {
        return;
    }

    ui.horizontal(|ui| {
        ui.set_height(32.0);
        ui.heading("Swap Desk");
        ui.add_space(16.0);

        for &screen in Screen::all() {
            let selected = state.current_screen == screen;
            if ui.selectable_label(selected, screen.title()).clicked() && !selected {
                app.handle_screen_change(screen);
            }
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("Sign out").clicked() {
                app.handle_sign_out();
            }

            let refresh = ui.add_enabled(!state.requests_loading, egui::Button::new("Refresh"));
            if refresh.clicked() {
                app.refresh();
            }

            if state.requests_loading {
                ui.spinner();
            } else if let Some(age) = app.providers.query_client.age(crate::services::query::SWAP_REQUESTS_KEY) {
                ui.colored_label(theme.dim, format!("updated {}s ago", age.as_secs()));
            }
        });
    });
}
