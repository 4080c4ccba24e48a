//! # Navigation Handlers
//!
//! Handlers for screen navigation.

use crate::app::state::{AppState, Screen};
use parking_lot::RwLock;
use std::sync::Arc;

/// Handle screen change with authentication guard
///
/// Internal handler function - use [`crate::app::App::handle_screen_change`] instead.
pub(crate) fn handle_screen_change(state: Arc<RwLock<AppState>>, screen: Screen) {
    let mut state = state.write();

    if AppState::requires_auth(screen) && !state.authenticated {
        tracing::info!("Access denied: {} requires a token, redirecting to sign in", screen.title());
        state.current_screen = Screen::SignIn;
    } else {
        state.current_screen = screen;
    }
}

/// Cycle through the navigation bar screens.
///
/// Internal handler function - use [`crate::app::App::next_screen`] instead.
pub(crate) fn next_screen(state: Arc<RwLock<AppState>>) {
    let mut state = match state.try_write() {
        Some(guard) => guard,
        None => {
            tracing::warn!("Skipped screen navigation - state locked");
            return;
        }
    };

    if !state.authenticated {
        return;
    }

    let screens = Screen::all();
    let next = screens
        .iter()
        .position(|&s| s == state.current_screen)
        .map(|idx| screens[(idx + 1) % screens.len()])
        .unwrap_or(Screen::Requests);
    state.current_screen = next;
}
