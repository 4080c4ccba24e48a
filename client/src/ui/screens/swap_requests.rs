//! # Swap Requests Screen
//!
//! The request table: one row per swap request, a checkbox per row, a header
//! checkbox for select-all, and a dropdown of row actions.
//!
//! ```text
//! ┌───┬───────────────┬──────────┬───────────┬──────┬──────┬──────────┬──────────┬─────┐
//! │ ☐ │ Date          │ Subject  │ Professor │ Type │ Room │ New Room │ Status   │     │
//! ├───┼───────────────┼──────────┼───────────┼──────┼──────┼──────────┼──────────┼─────┤
//! │ ☐ │ Mon, 08:00 -  │ Algo     │ alice     │ Cour │ B204 │ C101     │ Pending  │ ... │
//! └───┴───────────────┴──────────┴───────────┴──────┴──────┴──────────┴──────────┴─────┘
//! ```

use egui_extras::{Column, TableBuilder};
use shared::RequestId;

use crate::app::{App, AppState, RowActionKind, SwapAction};
use crate::ui::theme::Theme;
use crate::ui::widgets::{status_badge, tables};

const ROW_HEIGHT: f32 = 30.0;

// Collected while drawing, applied after the table borrows end.
enum Intent {
    SelectAll(bool),
    Select(RequestId, bool),
    ViewDetails(RequestId),
    Swap(RequestId, SwapAction),
    Retry,
}

pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App, theme: &Theme) {
    let mut intents = Vec::new();
    let table = &state.table;

    let (total, pending, accepted, rejected) = table.status_counts();
    tables::render_stats_summary(
        ui,
        &[
            ("Total", total),
            ("Pending", pending),
            ("Accepted", accepted),
            ("Rejected", rejected),
        ],
    );
    ui.separator();

    if let Some(error) = &state.last_error {
        if tables::render_error_banner(ui, error, theme) {
            intents.push(Intent::Retry);
        }
        ui.add_space(6.0);
    }

    if table.data().is_empty() {
        if state.requests_loading {
            ui.vertical_centered(|ui| {
                ui.add_space(20.0);
                ui.spinner();
            });
        } else {
            tables::render_empty_state(
                ui,
                "No swap requests yet",
                Some("Requests you send or receive will show up here."),
                theme,
            );
        }
        apply(app, intents);
        return;
    }

    TableBuilder::new(ui)
        .id_salt("swap-requests")
        .striped(true)
        .resizable(true)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::exact(24.0))
        .column(Column::auto().at_least(140.0))
        .column(Column::remainder().at_least(120.0))
        .column(Column::auto().at_least(90.0))
        .column(Column::auto().at_least(50.0))
        .column(Column::auto().at_least(60.0))
        .column(Column::auto().at_least(70.0))
        .column(Column::auto().at_least(80.0))
        .column(Column::exact(36.0))
        .header(24.0, |mut header| {
            header.col(|ui| {
                let mut all = table.all_selected();
                if ui.checkbox(&mut all, "").changed() {
                    intents.push(Intent::SelectAll(all));
                }
            });
            for title in ["Date", "Subject", "Professor", "Type", "Room", "New Room", "Status"] {
                header.col(|ui| {
                    ui.colored_label(theme.selected, title);
                });
            }
            header.col(|_| {});
        })
        .body(|mut body| {
            for request in table.data() {
                let from = &request.from_session;
                let to = &request.to_session;
                body.row(ROW_HEIGHT, |mut row| {
                    row.col(|ui| {
                        let mut selected = table.is_selected(&request.id);
                        if ui.checkbox(&mut selected, "").changed() {
                            intents.push(Intent::Select(request.id.clone(), selected));
                        }
                    });
                    row.col(|ui| {
                        ui.label(from.date_range());
                    });
                    row.col(|ui| {
                        ui.label(&from.module);
                    });
                    row.col(|ui| {
                        ui.label(&from.teacher.username);
                    });
                    row.col(|ui| {
                        status_badge::session_type_badge(ui, from.session_type, theme);
                    });
                    row.col(|ui| {
                        ui.label(&from.room.room_id);
                    });
                    row.col(|ui| {
                        ui.label(&to.room.room_id);
                    });
                    row.col(|ui| {
                        status_badge::status_badge(ui, request.status, theme);
                    });
                    row.col(|ui| {
                        let busy = table.is_busy(&request.id);
                        let trigger = if busy { "…" } else { "⋯" };
                        ui.menu_button(trigger, |ui| {
                            for item in table.row_actions(request) {
                                let clicked = ui
                                    .add_enabled(item.enabled, egui::Button::new(item.label))
                                    .clicked();
                                if clicked {
                                    intents.push(match item.kind {
                                        RowActionKind::ViewDetails => {
                                            Intent::ViewDetails(request.id.clone())
                                        }
                                        RowActionKind::Swap(action) => {
                                            Intent::Swap(request.id.clone(), action)
                                        }
                                    });
                                    ui.close();
                                }
                            }
                        });
                    });
                });
            }
        });

    apply(app, intents);
}

fn apply(app: &mut App, intents: Vec<Intent>) {
    for intent in intents {
        match intent {
            Intent::SelectAll(selected) => app.handle_select_all(selected),
            Intent::Select(id, selected) => app.handle_select_row(&id, selected),
            Intent::ViewDetails(id) => app.handle_view_details(&id),
            Intent::Swap(id, action) => app.handle_swap_action(id, action),
            Intent::Retry => app.refresh(),
        }
    }
}
