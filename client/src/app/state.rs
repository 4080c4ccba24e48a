//! # Application State Types
//!
//! All state-related types for the application: screens, the swap request
//! table, the create form and queued notifications.

use shared::Session;
use std::time::Instant;

use super::table::SwapRequestTable;

/// Application screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Paste an access token
    SignIn,
    /// Swap request table
    Requests,
    /// Propose a new swap
    CreateRequest,
}

impl Screen {
    /// Screens reachable from the navigation bar
    pub fn all() -> &'static [Screen] {
        &[Screen::Requests, Screen::CreateRequest]
    }

    /// Get screen title for header display
    pub fn title(&self) -> &'static str {
        match self {
            Screen::SignIn => "Sign In",
            Screen::Requests => "Swap Requests",
            Screen::CreateRequest => "New Swap Request",
        }
    }
}

/// Toast severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Warning,
}

/// A toast waiting to be shown by the UI layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn new(kind: NotificationKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Success, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Error, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Warning, message)
    }
}

/// Create form state
#[derive(Debug, Clone)]
pub struct CreateFormState {
    pub sessions: Vec<Session>,
    pub sessions_loading: bool,
    pub from_session: Option<i64>,
    pub to_session: Option<i64>,
    pub swap_room: bool,
    pub swap_time: bool,
    pub submitting: bool,
    pub error: Option<String>,
}

impl Default for CreateFormState {
    fn default() -> Self {
        Self {
            sessions: Vec::new(),
            sessions_loading: false,
            from_session: None,
            to_session: None,
            swap_room: true,
            swap_time: true,
            submitting: false,
            error: None,
        }
    }
}

impl CreateFormState {
    /// Two distinct sessions are picked and nothing is in flight.
    pub fn can_submit(&self) -> bool {
        !self.submitting
            && matches!((self.from_session, self.to_session), (Some(from), Some(to)) if from != to)
    }

    pub fn session(&self, id: i64) -> Option<&Session> {
        self.sessions.iter().find(|s| s.id == id)
    }

    /// Clear the selection after a successful submit, keeping the sessions.
    pub fn reset(&mut self) {
        *self = Self {
            sessions: std::mem::take(&mut self.sessions),
            ..Self::default()
        };
    }
}

/// Main application state.
#[derive(Debug, Clone)]
pub struct AppState {
    pub current_screen: Screen,
    pub table: SwapRequestTable,
    /// A request list fetch is in flight
    pub requests_loading: bool,
    /// When the last list fetch started, successful or not
    pub last_fetch_attempt: Option<Instant>,
    /// Last list fetch failure, shown above the table
    pub last_error: Option<String>,
    pub create_form: CreateFormState,
    pub token_input: String,
    pub authenticated: bool,
    /// Bumped on sign-out; fetches started under an older value are stale
    pub session_epoch: u64,
    /// Toasts queued by handlers, drained by the UI every frame
    pub pending_notifications: Vec<Notification>,
}

impl AppState {
    pub fn new(authenticated: bool) -> Self {
        Self {
            current_screen: if authenticated {
                Screen::Requests
            } else {
                Screen::SignIn
            },
            table: SwapRequestTable::default(),
            requests_loading: false,
            last_fetch_attempt: None,
            last_error: None,
            create_form: CreateFormState::default(),
            token_input: String::new(),
            authenticated,
            session_epoch: 0,
            pending_notifications: Vec::new(),
        }
    }

    pub fn notify(&mut self, notification: Notification) {
        self.pending_notifications.push(notification);
    }

    pub fn requires_auth(screen: Screen) -> bool {
        !matches!(screen, Screen::SignIn)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(false)
    }
}
