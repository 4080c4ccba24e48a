//! # GUI Rendering
//!
//! The eframe application and the per-frame render pipeline.
//!
//! ```text
//! update()
//!   ├── app.on_tick()              apply async results, refetch stale data
//!   ├── notifications.push(..)     toasts queued by handlers
//!   ├── render()                   nav bar + current screen + details modal
//!   └── request_repaint_after()    keep polling the event channel
//! ```

pub mod screens;
pub mod theme;
pub mod widgets;

use std::time::Duration;

use crate::app::{App, AppState, Screen};
use theme::Theme;
use widgets::notifications::NotificationManager;

/// Frame interval while idle, so background results are picked up.
const IDLE_REPAINT: Duration = Duration::from_millis(250);

/// eframe application wrapping the [`App`] orchestrator.
pub struct SwapDeskUi {
    app: App,
    notifications: NotificationManager,
    theme: Theme,
}

impl SwapDeskUi {
    pub fn new(cc: &eframe::CreationContext<'_>, app: App) -> Self {
        let theme = Theme::default();
        theme.apply(&cc.egui_ctx);
        Self {
            app,
            notifications: NotificationManager::new(),
            theme,
        }
    }
}

impl eframe::App for SwapDeskUi {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.app.on_tick();

        for notification in self.app.take_notifications() {
            self.notifications.push(&notification);
        }

        render(ctx, &mut self.app, &self.theme);
        self.notifications.show(ctx);

        ctx.request_repaint_after(IDLE_REPAINT);
    }
}

/// Main render function - called every frame
pub fn render(ctx: &egui::Context, app: &mut App, theme: &Theme) {
    let state = match app.state.try_read() {
        Some(guard) => guard.clone(),
        // Held by a handler; draw next frame
        None => return,
    };

    egui::CentralPanel::default().show(ctx, |ui| {
        if AppState::requires_auth(state.current_screen) && !state.authenticated {
            app.handle_screen_change(Screen::SignIn);
            screens::sign_in::render(ui, &state, app, theme);
            return;
        }

        if state.authenticated {
            widgets::nav_bar::render_nav_bar(ui, &state, app, theme);
            ui.separator();
            ui.add_space(4.0);
        }

        if ctx.input(|i| i.key_pressed(egui::Key::Tab) && i.modifiers.ctrl) {
            app.next_screen();
        }

        match state.current_screen {
            Screen::SignIn => screens::sign_in::render(ui, &state, app, theme),
            Screen::Requests => screens::swap_requests::render(ui, &state, app, theme),
            Screen::CreateRequest => screens::create_request::render(ui, &state, app, theme),
        }
    });

    screens::details::render(ctx, &state, app, theme);
}
