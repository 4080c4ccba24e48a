//! # Swap Tasks
//!
//! Async tasks for listing, creating, accepting and rejecting swap requests.
//! Each task takes what it needs out of the state under a short lock, spawns
//! onto the background runtime and reports back with an [`AppEvent`].

use async_channel::Sender;
use parking_lot::RwLock;
use shared::{NewSwapRequest, RequestId};
use std::sync::Arc;
use std::time::Instant;

use crate::app::events::AppEvent;
use crate::app::state::AppState;
use crate::app::table::SwapAction;
use crate::core::SwapService;
use crate::services::query::{QueryClient, SESSIONS_KEY, SWAP_REQUESTS_KEY};
use crate::utils::runtime::spawn;

/// Write a fetched value into the query cache unless the user signed out
/// since the fetch started.
///
/// The state read lock is held across the write, so a sign-out either sees
/// the entry and clears it or bumps the epoch first.
fn cache_if_current<T: serde::Serialize>(
    state: &RwLock<AppState>,
    queries: &QueryClient,
    epoch: u64,
    key: &str,
    value: &T,
) -> bool {
    let state = state.read();
    if state.session_epoch != epoch {
        tracing::debug!(key = key, "Dropping result fetched before sign-out");
        return false;
    }
    if let Err(e) = queries.set(key, value) {
        tracing::warn!(key = key, error = %e, "Failed to cache query result");
    }
    true
}

/// Fetch the swap request list.
///
/// Skipped while a fetch is already in flight.
pub(crate) fn fetch_swap_requests(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    api: Arc<dyn SwapService>,
    queries: Arc<QueryClient>,
) {
    let epoch = {
        let mut state = state.write();
        if state.requests_loading {
            return;
        }
        state.requests_loading = true;
        state.last_fetch_attempt = Some(Instant::now());
        state.session_epoch
    };

    spawn(async move {
        let result = api.list_swap_requests().await;

        if let Ok(requests) = &result {
            if cache_if_current(&state, &queries, epoch, SWAP_REQUESTS_KEY, requests) {
                tracing::info!(count = requests.len(), "Fetched swap requests");
            }
        }

        let event = AppEvent::SwapRequestsLoaded {
            epoch,
            result: result.map_err(|e| e.to_string()),
        };
        let _ = event_tx.send(event).await;
    });
}

/// Fetch the sessions offered by the create form.
pub(crate) fn fetch_sessions(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    api: Arc<dyn SwapService>,
    queries: Arc<QueryClient>,
) {
    let epoch = {
        let mut state = state.write();
        if state.create_form.sessions_loading {
            return;
        }
        state.create_form.sessions_loading = true;
        state.session_epoch
    };

    spawn(async move {
        let result = api.list_sessions().await;

        if let Ok(sessions) = &result {
            cache_if_current(&state, &queries, epoch, SESSIONS_KEY, sessions);
        }

        let event = AppEvent::SessionsLoaded {
            epoch,
            result: result.map_err(|e| e.to_string()),
        };
        let _ = event_tx.send(event).await;
    });
}

/// Run one accept or reject call and wrap its outcome as an event.
pub(crate) async fn run_swap_action(
    api: &dyn SwapService,
    id: RequestId,
    action: SwapAction,
) -> AppEvent {
    let result = match action {
        SwapAction::Accept => api.accept_swap_request(&id).await,
        SwapAction::Reject => api.reject_swap_request(&id).await,
    };

    AppEvent::SwapActionFinished {
        id,
        action,
        result: result.map_err(|e| e.to_string()),
    }
}

/// Mark the row busy and send the action.
///
/// Nothing is sent when the row cannot take the action (not pending, or
/// already busy).
pub(crate) fn spawn_swap_action(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    api: Arc<dyn SwapService>,
    id: RequestId,
    action: SwapAction,
) {
    if !state.write().table.begin(&id, action) {
        return;
    }

    tracing::info!(id = %id, ?action, "Sending swap action");
    spawn(async move {
        let event = run_swap_action(api.as_ref(), id, action).await;
        let _ = event_tx.send(event).await;
    });
}

/// Validate the create form and submit it.
pub(crate) fn submit_create(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    api: Arc<dyn SwapService>,
) {
    let data = {
        let mut state = state.write();
        let form = &mut state.create_form;
        if form.submitting {
            return;
        }

        let (from_session, to_session) = match (form.from_session, form.to_session) {
            (Some(from), Some(to)) if from != to => (from, to),
            (Some(_), Some(_)) => {
                form.error = Some("Pick two different sessions".to_string());
                return;
            }
            _ => {
                form.error = Some("Pick both sessions".to_string());
                return;
            }
        };

        form.error = None;
        form.submitting = true;
        NewSwapRequest {
            from_session,
            to_session,
            swap_room: form.swap_room,
            swap_time: form.swap_time,
        }
    };

    spawn(async move {
        let result = api.create_swap_request(data).await;
        let _ = event_tx
            .send(AppEvent::SwapRequestCreated(result.map_err(|e| e.to_string())))
            .await;
    });
}
