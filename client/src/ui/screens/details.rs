//! # Swap Request Details
//!
//! Modal with the read-only projection of the last opened request.

use crate::app::{App, AppState};
use crate::ui::theme::Theme;
use crate::ui::widgets::status_badge;

pub fn render(ctx: &egui::Context, state: &AppState, app: &mut App, theme: &Theme) {
    if !state.table.details_open() {
        return;
    }
    let Some(details) = state.table.details() else {
        return;
    };

    let mut close = false;
    let response = egui::Modal::new(egui::Id::new("swap-request-details")).show(ctx, |ui| {
        ui.set_width(380.0);
        ui.heading("Swap Request Details");
        ui.add_space(8.0);

        egui::Grid::new("swap-request-details-grid")
            .num_columns(2)
            .spacing([16.0, 6.0])
            .show(ui, |ui| {
                let field = |ui: &mut egui::Ui, label: &str, value: &str| {
                    ui.colored_label(theme.dim, label);
                    ui.label(value);
                    ui.end_row();
                };
                field(ui, "Subject", &details.subject);
                field(ui, "Date", &details.date);
                field(ui, "Requested by", &details.requested_by);
                field(ui, "Requested to", &details.requested_to);
                field(ui, "Room", &details.room);
                field(ui, "New room", &details.new_room);
                if let Some(created_at) = &details.created_at {
                    field(ui, "Created", created_at);
                }

                ui.colored_label(theme.dim, "Type");
                status_badge::session_type_badge(ui, details.session_type, theme);
                ui.end_row();

                ui.colored_label(theme.dim, "Status");
                status_badge::status_badge(ui, details.status, theme);
                ui.end_row();
            });

        ui.add_space(12.0);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            close = ui.button("Close").clicked();
        });
    });

    if close || response.should_close() {
        app.handle_close_details();
    }
}
