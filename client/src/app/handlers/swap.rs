//! # Swap Handlers
//!
//! Table and create form interactions that only touch local state.

use crate::app::state::AppState;
use parking_lot::RwLock;
use shared::RequestId;
use std::sync::Arc;

/// Open the details modal for a row.
///
/// Internal handler function - use [`crate::app::App::handle_view_details`] instead.
pub(crate) fn open_details(state: Arc<RwLock<AppState>>, id: &RequestId) {
    let mut state = state.write();
    match state.table.get(id).cloned() {
        Some(request) => state.table.open_details(&request),
        None => tracing::warn!(id = %id, "Details requested for unknown row"),
    }
}

/// Internal handler function - use [`crate::app::App::handle_close_details`] instead.
pub(crate) fn close_details(state: Arc<RwLock<AppState>>) {
    state.write().table.close_details();
}

/// Internal handler function - use [`crate::app::App::handle_select_row`] instead.
pub(crate) fn select_row(state: Arc<RwLock<AppState>>, id: &RequestId, selected: bool) {
    state.write().table.set_selected(id, selected);
}

/// Internal handler function - use [`crate::app::App::handle_select_all`] instead.
pub(crate) fn select_all(state: Arc<RwLock<AppState>>, selected: bool) {
    state.write().table.set_all_selected(selected);
}

/// Pick the session offered up for the swap.
pub(crate) fn select_from_session(state: Arc<RwLock<AppState>>, id: i64) {
    let mut state = state.write();
    state.create_form.from_session = Some(id);
    state.create_form.error = None;
}

/// Pick the session asked for in return.
pub(crate) fn select_to_session(state: Arc<RwLock<AppState>>, id: i64) {
    let mut state = state.write();
    state.create_form.to_session = Some(id);
    state.create_form.error = None;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::table::tests::request;
    use shared::SwapStatus;

    #[test]
    fn test_open_details_unknown_row_is_ignored() {
        let state = Arc::new(RwLock::new(AppState::new(true)));
        open_details(state.clone(), &RequestId::from("nope"));
        assert!(!state.read().table.details_open());
    }

    #[test]
    fn test_open_and_close_details() {
        let state = Arc::new(RwLock::new(AppState::new(true)));
        state.write().table.set_data(vec![request("5", SwapStatus::Accepted)]);

        open_details(state.clone(), &RequestId::from("5"));
        assert!(state.read().table.details_open());

        close_details(state.clone());
        assert!(!state.read().table.details_open());
    }
}
