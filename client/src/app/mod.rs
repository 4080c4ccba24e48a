//! # Application Orchestrator
//!
//! The [`App`] struct coordinates the UI layer, background network tasks and
//! the shared application state.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Main Thread (egui)                       │
//! │  ┌──────────────────────────────────────────────────────┐   │
//! │  │  App (orchestrator)                                  │   │
//! │  │  - on_tick() - called every frame                    │   │
//! │  │  - handle_event() - applies async results            │   │
//! │  │  - handle_*() - user actions                         │   │
//! │  └────────────┬─────────────────────────────────────────┘   │
//! │               │                                             │
//! │  ┌────────────▼─────────────────────────────────────────┐   │
//! │  │  State: Arc<RwLock<AppState>>                        │   │
//! │  │  - SwapRequestTable (per-row busy state)             │   │
//! │  │  - create form, queued toasts                        │   │
//! │  └──────────────────────────────────────────────────────┘   │
//! └───────────────────────┬─────────────────────────────────────┘
//!                         │ async_channel (unbounded)
//! ┌───────────────────────▼─────────────────────────────────────┐
//! │              Background Runtime (Tokio)                     │
//! │  - fetch_swap_requests() / fetch_sessions()                 │
//! │  - spawn_swap_action() - accept / reject                    │
//! │  - submit_create() - new swap request                       │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Refresh Flow
//!
//! A successful accept or reject runs the table's update callback. The
//! callback invalidates the cached request list and queues
//! [`AppEvent::RefreshRequested`]; the next tick refetches. The callback never
//! touches the state lock, which is held while it runs.
//!
//! ## Related Modules
//!
//! - [`state`]: Application state types
//! - [`table`]: Swap request table state machine
//! - [`events`]: Event enum for async communication

mod event_handler;
mod events;
mod handlers;
mod state;
pub mod table;
mod tasks;

pub use events::AppEvent;
pub use state::*;
pub use table::{
    RowActionItem, RowActionKind, RowState, SwapAction, SwapRequestDetails, SwapRequestTable,
    UpdateCallback,
};

use async_channel::{unbounded, Receiver, Sender};
use parking_lot::RwLock;
use shared::{RequestId, Session, SwapRequest};
use std::sync::Arc;

use crate::core::SwapService;
use crate::providers::Providers;
use crate::services::query::{SESSIONS_KEY, SWAP_REQUESTS_KEY};
use event_handler::AppEventHandler;

/// Main application orchestrator.
///
/// Owns the shared state and the event channel. All user actions enter
/// through the `handle_*` methods; all network results come back through
/// [`App::on_tick`].
pub struct App {
    /// Thread-safe shared application state.
    ///
    /// Hold locks for the shortest time possible: the UI reads it every frame.
    pub state: Arc<RwLock<AppState>>,

    /// Channel receiver for async task results, polled in `on_tick()`.
    pub event_rx: Receiver<AppEvent>,

    event_tx: Sender<AppEvent>,

    pub providers: Providers,

    api: Arc<dyn SwapService>,
}

impl App {
    /// Create the application with injected services.
    ///
    /// Cached query data, if any, seeds the table and the create form.
    pub fn new(providers: Providers, api: Arc<dyn SwapService>) -> Self {
        let (event_tx, event_rx) = unbounded();

        let callback: UpdateCallback = {
            let queries = providers.query_client.clone();
            let tx = event_tx.clone();
            Arc::new(move || {
                queries.invalidate(SWAP_REQUESTS_KEY);
                if tx.try_send(AppEvent::RefreshRequested).is_err() {
                    tracing::warn!("Event channel closed, refresh dropped");
                }
            })
        };

        let mut state = AppState::new(providers.auth.is_authenticated());
        let cached: Vec<SwapRequest> = providers
            .query_client
            .get(SWAP_REQUESTS_KEY)
            .unwrap_or_default();
        state.table = SwapRequestTable::new(cached).with_update_callback(callback);
        if let Some(sessions) = providers.query_client.get::<Vec<Session>>(SESSIONS_KEY) {
            state.create_form.sessions = sessions;
        }

        tracing::info!(authenticated = state.authenticated, "App state initialized");

        Self {
            state: Arc::new(RwLock::new(state)),
            event_rx,
            event_tx,
            providers,
            api,
        }
    }

    /// Called every frame: apply pending events, then refetch stale data.
    pub fn on_tick(&mut self) {
        let mut events_processed = 0u32;
        while let Ok(event) = self.event_rx.try_recv() {
            events_processed += 1;
            self.handle_event(event);
        }

        if events_processed > 0 {
            tracing::debug!(events_processed, "on_tick: processed events");
        }

        if self.should_auto_fetch() {
            self.fetch_requests();
        }
    }

    /// Stale cache, nothing in flight, and no attempt within the stale window.
    fn should_auto_fetch(&self) -> bool {
        let state = self.state.read();
        if !state.authenticated || state.requests_loading {
            return false;
        }

        let queries = &self.providers.query_client;
        let recently_tried = state
            .last_fetch_attempt
            .map(|at| at.elapsed() < queries.stale_time())
            .unwrap_or(false);

        queries.is_stale(SWAP_REQUESTS_KEY) && !recently_tried
    }

    fn fetch_requests(&self) {
        tasks::swap::fetch_swap_requests(
            self.state.clone(),
            self.event_tx.clone(),
            self.api.clone(),
            self.providers.query_client.clone(),
        );
    }

    /// Refetch the request list now, ignoring the stale window.
    pub fn refresh(&mut self) {
        if !self.state.read().authenticated {
            return;
        }
        self.fetch_requests();
    }

    /// Apply one async result.
    pub fn handle_event(&mut self, event: AppEvent) {
        self.handle_event_impl(event);
    }

    /// Drain the toasts queued since the last frame.
    pub fn take_notifications(&self) -> Vec<Notification> {
        std::mem::take(&mut self.state.write().pending_notifications)
    }

    pub fn next_screen(&mut self) {
        handlers::navigation::next_screen(self.state.clone());
        self.load_sessions_if_needed();
    }

    /// Switch screens; entering the create form loads the sessions once.
    pub fn handle_screen_change(&mut self, screen: Screen) {
        handlers::navigation::handle_screen_change(self.state.clone(), screen);
        self.load_sessions_if_needed();
    }

    fn load_sessions_if_needed(&self) {
        let needs_sessions = {
            let state = self.state.read();
            state.current_screen == Screen::CreateRequest
                && (state.create_form.sessions.is_empty()
                    || self.providers.query_client.is_stale(SESSIONS_KEY))
        };
        if needs_sessions {
            tasks::swap::fetch_sessions(
                self.state.clone(),
                self.event_tx.clone(),
                self.api.clone(),
                self.providers.query_client.clone(),
            );
        }
    }

    pub fn handle_sign_in(&mut self) {
        if handlers::auth::handle_sign_in(self.state.clone(), &self.providers.auth) {
            self.refresh();
        }
    }

    pub fn handle_sign_out(&mut self) {
        handlers::auth::handle_sign_out(self.state.clone(), &self.providers.auth);
    }

    /// Accept or reject one row.
    pub fn handle_swap_action(&mut self, id: RequestId, action: SwapAction) {
        tasks::swap::spawn_swap_action(
            self.state.clone(),
            self.event_tx.clone(),
            self.api.clone(),
            id,
            action,
        );
    }

    pub fn handle_view_details(&mut self, id: &RequestId) {
        handlers::swap::open_details(self.state.clone(), id);
    }

    pub fn handle_close_details(&mut self) {
        handlers::swap::close_details(self.state.clone());
    }

    pub fn handle_select_row(&mut self, id: &RequestId, selected: bool) {
        handlers::swap::select_row(self.state.clone(), id, selected);
    }

    pub fn handle_select_all(&mut self, selected: bool) {
        handlers::swap::select_all(self.state.clone(), selected);
    }

    pub fn handle_select_from_session(&mut self, id: i64) {
        handlers::swap::select_from_session(self.state.clone(), id);
    }

    pub fn handle_select_to_session(&mut self, id: i64) {
        handlers::swap::select_to_session(self.state.clone(), id);
    }

    pub fn handle_submit_create(&mut self) {
        tasks::swap::submit_create(self.state.clone(), self.event_tx.clone(), self.api.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::table::tests::request;
    use super::*;
    use crate::config::ClientConfig;
    use crate::core::{AppError, Result};
    use async_trait::async_trait;
    use shared::{NewSwapRequest, SwapStatus};
    use std::time::Duration;

    #[derive(Default)]
    struct MockSwapService {
        fail: bool,
        requests: Vec<SwapRequest>,
        calls: parking_lot::Mutex<Vec<String>>,
        created: parking_lot::Mutex<Vec<NewSwapRequest>>,
    }

    impl MockSwapService {
        fn outcome(&self) -> Result<()> {
            if self.fail {
                Err(AppError::Http { status: 500, message: "Internal Server Error".to_string() })
            } else {
                Ok(())
            }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().clone()
        }
    }

    #[async_trait]
    impl SwapService for MockSwapService {
        async fn create_swap_request(&self, data: NewSwapRequest) -> Result<()> {
            self.calls.lock().push("create".to_string());
            self.created.lock().push(data);
            self.outcome()
        }

        async fn accept_swap_request(&self, id: &RequestId) -> Result<()> {
            self.calls.lock().push(format!("accept:{}", id));
            self.outcome()
        }

        async fn reject_swap_request(&self, id: &RequestId) -> Result<()> {
            self.calls.lock().push(format!("reject:{}", id));
            self.outcome()
        }

        async fn list_swap_requests(&self) -> Result<Vec<SwapRequest>> {
            self.calls.lock().push("list".to_string());
            Ok(self.requests.clone())
        }

        async fn list_sessions(&self) -> Result<Vec<Session>> {
            self.calls.lock().push("sessions".to_string());
            Ok(Vec::new())
        }
    }

    fn test_providers(name: &str) -> Providers {
        let dir = std::env::temp_dir().join(format!("swapdesk-app-test-{}-{}", name, std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        let config = ClientConfig {
            storage_path: dir.join("storage.json"),
            cache_stale_time: Duration::from_secs(60),
            ..ClientConfig::default()
        };
        let providers = Providers::new(&config);
        providers.auth.sign_in("test-token").unwrap();
        providers
    }

    fn app_with(name: &str, mock: Arc<MockSwapService>, rows: Vec<SwapRequest>) -> App {
        let app = App::new(test_providers(name), mock);
        app.state.write().table.set_data(rows);
        app
    }

    async fn next_event(app: &App) -> AppEvent {
        tokio::time::timeout(Duration::from_secs(5), app.event_rx.recv())
            .await
            .expect("timed out waiting for event")
            .expect("event channel closed")
    }

    #[tokio::test]
    async fn test_accept_success_toasts_and_refreshes() {
        let mock = Arc::new(MockSwapService::default());
        let mut app = app_with("accept-ok", mock.clone(), vec![request("42", SwapStatus::Pending)]);
        let id = RequestId::from("42");

        app.handle_swap_action(id.clone(), SwapAction::Accept);
        assert_eq!(app.state.read().table.row_state(&id), RowState::Accepting);

        let event = next_event(&app).await;
        assert!(matches!(event, AppEvent::SwapActionFinished { result: Ok(()), .. }));
        app.handle_event(event);

        assert_eq!(app.state.read().table.row_state(&id), RowState::Idle);
        assert_eq!(
            app.take_notifications(),
            vec![Notification::success("Swap request accepted successfully")]
        );
        assert!(matches!(app.event_rx.try_recv(), Ok(AppEvent::RefreshRequested)));
        assert!(app.event_rx.try_recv().is_err());
        assert_eq!(mock.calls(), vec!["accept:42".to_string()]);
    }

    #[tokio::test]
    async fn test_reject_failure_toasts_without_refresh() {
        let mock = Arc::new(MockSwapService { fail: true, ..Default::default() });
        let mut app = app_with("reject-fail", mock.clone(), vec![request("42", SwapStatus::Pending)]);
        let id = RequestId::from("42");

        app.handle_swap_action(id.clone(), SwapAction::Reject);
        assert_eq!(app.state.read().table.row_state(&id), RowState::Rejecting);

        let event = next_event(&app).await;
        app.handle_event(event);

        assert_eq!(app.state.read().table.row_state(&id), RowState::Idle);
        assert_eq!(
            app.take_notifications(),
            vec![Notification::error("Failed to reject swap request")]
        );
        assert!(app.event_rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_concurrent_actions_resolve_independently() {
        let mock = Arc::new(MockSwapService::default());
        let mut app = app_with(
            "concurrent",
            mock.clone(),
            vec![request("42", SwapStatus::Pending), request("43", SwapStatus::Pending)],
        );
        let a = RequestId::from("42");
        let b = RequestId::from("43");

        app.handle_swap_action(a.clone(), SwapAction::Accept);
        app.handle_swap_action(b.clone(), SwapAction::Accept);

        let first = next_event(&app).await;
        let first_id = match &first {
            AppEvent::SwapActionFinished { id, .. } => id.clone(),
            other => panic!("unexpected event {:?}", other),
        };
        app.handle_event(first);

        let other = if first_id == a { &b } else { &a };
        assert_eq!(app.state.read().table.row_state(&first_id), RowState::Idle);
        assert_eq!(app.state.read().table.row_state(other), RowState::Accepting);
    }

    #[tokio::test]
    async fn test_non_pending_row_sends_nothing() {
        let mock = Arc::new(MockSwapService::default());
        let mut app = app_with("terminal", mock.clone(), vec![request("7", SwapStatus::Accepted)]);

        app.handle_swap_action(RequestId::from("7"), SwapAction::Accept);
        tokio::time::sleep(Duration::from_millis(50)).await;

        assert!(mock.calls().is_empty());
        assert!(app.event_rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_refresh_request_refetches_list() {
        let mock = Arc::new(MockSwapService {
            requests: vec![request("1", SwapStatus::Pending)],
            ..Default::default()
        });
        let mut app = app_with("refresh", mock.clone(), Vec::new());

        app.handle_event(AppEvent::RefreshRequested);
        assert!(app.state.read().requests_loading);

        let event = next_event(&app).await;
        app.handle_event(event);

        let state = app.state.read();
        assert!(!state.requests_loading);
        assert_eq!(state.table.data().len(), 1);
        assert!(!app.providers.query_client.is_stale(SWAP_REQUESTS_KEY));
    }

    #[tokio::test]
    async fn test_create_submits_selected_sessions() {
        let mock = Arc::new(MockSwapService::default());
        let mut app = app_with("create", mock.clone(), Vec::new());
        app.handle_select_from_session(3);
        app.handle_select_to_session(4);
        app.state.write().create_form.swap_room = false;

        app.handle_submit_create();
        assert!(app.state.read().create_form.submitting);

        let event = next_event(&app).await;
        app.handle_event(event);

        let created = mock.created.lock().clone();
        assert_eq!(created.len(), 1);
        assert_eq!(created[0].from_session, 3);
        assert_eq!(created[0].to_session, 4);

        let state = app.state.read();
        assert_eq!(state.current_screen, Screen::Requests);
        assert!(state.create_form.from_session.is_none());
    }

    #[test]
    fn test_create_rejects_same_session() {
        let mock = Arc::new(MockSwapService::default());
        let mut app = app_with("create-same", mock.clone(), Vec::new());
        app.handle_select_from_session(3);
        app.handle_select_to_session(3);

        app.handle_submit_create();
        let state = app.state.read();
        assert!(!state.create_form.submitting);
        assert!(state.create_form.error.is_some());
        assert!(mock.calls().is_empty());
    }

    #[tokio::test]
    async fn test_list_fetched_before_sign_out_is_dropped() {
        let mock = Arc::new(MockSwapService {
            requests: vec![request("1", SwapStatus::Pending)],
            ..Default::default()
        });
        let mut app = app_with("stale-list", mock.clone(), Vec::new());

        app.refresh();
        app.handle_sign_out();
        let event = next_event(&app).await;
        assert!(matches!(event, AppEvent::SwapRequestsLoaded { epoch: 0, .. }));
        app.handle_event(event);

        let state = app.state.read();
        assert!(!state.authenticated);
        assert!(state.table.data().is_empty());
        assert!(!state.requests_loading);
        assert!(app
            .providers
            .query_client
            .get::<Vec<SwapRequest>>(SWAP_REQUESTS_KEY)
            .is_none());
    }

    #[test]
    fn test_stale_list_does_not_clear_new_fetch() {
        let mock = Arc::new(MockSwapService {
            requests: vec![request("1", SwapStatus::Pending)],
            ..Default::default()
        });
        let mut app = app_with("stale-loading", mock.clone(), Vec::new());

        app.handle_sign_out();
        {
            let mut state = app.state.write();
            state.authenticated = true;
            state.requests_loading = true;
        }
        app.handle_event(AppEvent::SwapRequestsLoaded { epoch: 0, result: Ok(Vec::new()) });

        assert!(app.state.read().requests_loading);
    }

    #[tokio::test]
    async fn test_next_screen_loads_sessions() {
        let mock = Arc::new(MockSwapService::default());
        let mut app = app_with("next-screen", mock.clone(), Vec::new());

        app.next_screen();
        assert_eq!(app.state.read().current_screen, Screen::CreateRequest);
        assert!(app.state.read().create_form.sessions_loading);

        let event = next_event(&app).await;
        assert!(matches!(event, AppEvent::SessionsLoaded { result: Ok(_), .. }));
        app.handle_event(event);

        assert!(!app.state.read().create_form.sessions_loading);
        assert_eq!(mock.calls(), vec!["sessions".to_string()]);
    }

    #[test]
    fn test_sign_out_returns_to_sign_in() {
        let mock = Arc::new(MockSwapService::default());
        let mut app = app_with("sign-out", mock, vec![request("1", SwapStatus::Pending)]);

        app.handle_sign_out();
        let state = app.state.read();
        assert_eq!(state.current_screen, Screen::SignIn);
        assert!(state.table.data().is_empty());
        assert!(state.table.update_callback().is_some());
        assert_eq!(state.session_epoch, 1);
    }
}
