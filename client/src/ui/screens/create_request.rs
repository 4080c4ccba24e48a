//! # Create Request Screen
//!
//! Pick the session to give up and the session wanted in return.

use shared::Session;

use crate::app::{App, AppState};
use crate::ui::theme::Theme;
use crate::ui::widgets::status_badge;

fn session_label(session: &Session) -> String {
    format!(
        "{} · {} · {} ({})",
        session.module,
        session.date_range(),
        session.room.room_id,
        session.teacher.username
    )
}

fn session_combo(
    ui: &mut egui::Ui,
    id: &str,
    sessions: &[Session],
    selected: Option<i64>,
) -> Option<i64> {
    let current = selected
        .and_then(|id| sessions.iter().find(|s| s.id == id))
        .map(session_label)
        .unwrap_or_else(|| "Select a session".to_string());

    let mut picked = None;
    egui::ComboBox::from_id_salt(id)
        .width(420.0)
        .selected_text(current)
        .show_ui(ui, |ui| {
            for session in sessions {
                let is_selected = selected == Some(session.id);
                if ui.selectable_label(is_selected, session_label(session)).clicked() {
                    picked = Some(session.id);
                }
            }
        });
    picked
}

pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App, theme: &Theme) {
    let form = &state.create_form;

    if form.sessions_loading && form.sessions.is_empty() {
        ui.spinner();
        return;
    }

    egui::Grid::new("create-request-form")
        .num_columns(2)
        .spacing([16.0, 10.0])
        .show(ui, |ui| {
            ui.label("Your session");
            if let Some(id) = session_combo(ui, "from-session", &form.sessions, form.from_session) {
                app.handle_select_from_session(id);
            }
            ui.end_row();

            ui.label("Swap with");
            if let Some(id) = session_combo(ui, "to-session", &form.sessions, form.to_session) {
                app.handle_select_to_session(id);
            }
            ui.end_row();

            if let Some(session) = form.to_session.and_then(|id| form.session(id)) {
                ui.label("Type");
                status_badge::session_type_badge(ui, session.session_type, theme);
                ui.end_row();
            }

            ui.label("Swap");
            ui.horizontal(|ui| {
                let mut swap_room = form.swap_room;
                let mut swap_time = form.swap_time;
                let room_changed = ui.checkbox(&mut swap_room, "Room").changed();
                let time_changed = ui.checkbox(&mut swap_time, "Time").changed();
                if room_changed || time_changed {
                    let mut state = app.state.write();
                    state.create_form.swap_room = swap_room;
                    state.create_form.swap_time = swap_time;
                }
            });
            ui.end_row();
        });

    if let Some(error) = &form.error {
        ui.add_space(6.0);
        ui.colored_label(theme.error, error);
    }

    ui.add_space(12.0);
    ui.horizontal(|ui| {
        let submit = ui.add_enabled(form.can_submit(), egui::Button::new("Send request"));
        if submit.clicked() {
            app.handle_submit_create();
        }
        if form.submitting {
            ui.spinner();
        }
    });
}
