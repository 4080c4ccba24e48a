//! # Sign In Screen
//!
//! The swap API authenticates with a bearer token issued by the university
//! portal. The token is pasted here and kept in the local storage file.

use crate::app::{App, AppState};
use crate::ui::theme::Theme;

pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App, theme: &Theme) {
    ui.vertical_centered(|ui| {
        ui.add_space(80.0);
        ui.heading("Swap Desk");
        ui.colored_label(theme.dim, "Paste your access token to continue");
        ui.add_space(16.0);

        let mut token = state.token_input.clone();
        let response = ui.add(
            egui::TextEdit::singleline(&mut token)
                .password(true)
                .hint_text("Access token")
                .desired_width(320.0),
        );
        if response.changed() {
            app.state.write().token_input = token;
        }

        let submitted = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        ui.add_space(8.0);
        if ui.button("Sign in").clicked() || submitted {
            app.handle_sign_in();
        }

        ui.add_space(12.0);
        ui.colored_label(
            theme.dim,
            format!("API: {}", crate::config::client_config().api_url),
        );
    });
}
