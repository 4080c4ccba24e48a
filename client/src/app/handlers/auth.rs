//! # Authentication Handlers
//!
//! Storing and dropping the access token pasted on the sign-in screen.

use crate::app::state::{AppState, Notification, Screen};
use crate::app::table::SwapRequestTable;
use crate::providers::AuthContext;
use parking_lot::RwLock;
use std::sync::Arc;

/// Store the token typed into the sign-in field.
///
/// Internal handler function - use [`crate::app::App::handle_sign_in`] instead.
/// Returns `true` when a token was stored.
pub(crate) fn handle_sign_in(state: Arc<RwLock<AppState>>, auth: &AuthContext) -> bool {
    let mut state = state.write();
    let token = state.token_input.trim().to_string();

    if token.is_empty() {
        state.notify(Notification::warning("Paste an access token first"));
        return false;
    }

    match auth.sign_in(&token) {
        Ok(()) => {
            state.token_input.clear();
            state.authenticated = true;
            state.current_screen = Screen::Requests;
            state.last_fetch_attempt = None;
            true
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to store access token");
            state.notify(Notification::error(format!("Could not store token: {}", e)));
            false
        }
    }
}

/// Forget the token and everything fetched with it.
///
/// Internal handler function - use [`crate::app::App::handle_sign_out`] instead.
///
/// The epoch is bumped before the query cache is cleared, under the write
/// lock, so fetches still in flight can neither repopulate the cache nor the
/// table.
pub(crate) fn handle_sign_out(state: Arc<RwLock<AppState>>, auth: &AuthContext) {
    let mut state = state.write();
    state.session_epoch += 1;
    if let Err(e) = auth.sign_out() {
        tracing::error!(error = %e, "Failed to remove access token");
    }

    let callback = state.table.update_callback();
    state.table = SwapRequestTable::default();
    state.table.set_update_callback(callback);
    state.create_form = Default::default();
    state.requests_loading = false;
    state.last_fetch_attempt = None;
    state.last_error = None;
    state.authenticated = false;
    state.current_screen = Screen::SignIn;
}
