//! # Event Handler
//!
//! Applies async task results to the application state.
//!
//! Every handler takes the write lock once, for the duration of one event.

use shared::{RequestId, Session, SwapRequest};

use crate::app::state::Notification;
use crate::app::table::SwapAction;
use crate::app::{App, AppEvent, Screen};
use crate::services::query::SWAP_REQUESTS_KEY;

/// Trait for event handling implementation
pub(crate) trait AppEventHandler {
    fn handle_event_impl(&mut self, event: AppEvent);
}

impl AppEventHandler for App {
    fn handle_event_impl(&mut self, event: AppEvent) {
        match event {
            AppEvent::SwapRequestsLoaded { epoch, result } => {
                self.handle_requests_loaded(epoch, result);
            }
            AppEvent::SessionsLoaded { epoch, result } => {
                self.handle_sessions_loaded(epoch, result);
            }
            AppEvent::SwapActionFinished { id, action, result } => {
                self.handle_action_finished(id, action, result);
            }
            AppEvent::SwapRequestCreated(result) => {
                self.handle_request_created(result);
            }
            AppEvent::RefreshRequested => {
                tracing::debug!(event = "RefreshRequested", "Refetching swap requests");
                self.refresh();
            }
        }
    }
}

impl App {
    fn handle_requests_loaded(&mut self, epoch: u64, result: Result<Vec<SwapRequest>, String>) {
        tracing::info!(event = "SwapRequestsLoaded", success = result.is_ok(), "Processing swap requests");

        let mut state = self.state.write();
        if epoch != state.session_epoch {
            tracing::debug!(epoch, current = state.session_epoch, "Ignoring stale swap request list");
            return;
        }
        state.requests_loading = false;
        match result {
            Ok(requests) => {
                state.table.set_data(requests);
                state.last_error = None;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to load swap requests");
                state.last_error = Some(e);
            }
        }
    }

    fn handle_sessions_loaded(&mut self, epoch: u64, result: Result<Vec<Session>, String>) {
        let mut state = self.state.write();
        if epoch != state.session_epoch {
            tracing::debug!(epoch, current = state.session_epoch, "Ignoring stale session list");
            return;
        }
        state.create_form.sessions_loading = false;
        match result {
            Ok(sessions) => {
                tracing::info!(count = sessions.len(), "Sessions loaded");
                state.create_form.sessions = sessions;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to load sessions");
                state.create_form.error = Some(e);
            }
        }
    }

    fn handle_action_finished(&mut self, id: RequestId, action: SwapAction, result: Result<(), String>) {
        tracing::info!(
            event = "SwapActionFinished",
            id = %id,
            ?action,
            success = result.is_ok(),
            "Processing swap action result"
        );

        let mut state = self.state.write();
        let notification = state.table.complete(&id, action, result);
        state.notify(notification);
    }

    fn handle_request_created(&mut self, result: Result<(), String>) {
        tracing::info!(event = "SwapRequestCreated", success = result.is_ok(), "Processing create result");

        let created = {
            let mut state = self.state.write();
            if !state.authenticated {
                tracing::debug!("Signed out before the create result arrived");
                return;
            }
            state.create_form.submitting = false;
            match result {
                Ok(()) => {
                    state.create_form.reset();
                    state.current_screen = Screen::Requests;
                    state.notify(Notification::success("Swap request created"));
                    true
                }
                Err(e) => {
                    state.create_form.error = Some(e);
                    state.notify(Notification::error("Failed to create swap request"));
                    false
                }
            }
        };

        if created {
            self.providers.query_client.invalidate(SWAP_REQUESTS_KEY);
            self.refresh();
        }
    }
}
