//! # Application Events
//!
//! Event types for async task communication between background tasks and the main thread.

use shared::{RequestId, Session, SwapRequest};

use super::table::SwapAction;

/// Async task results sent to main thread
///
/// List results carry the [`AppState::session_epoch`](super::AppState::session_epoch)
/// they were started under; results from before a sign-out are dropped.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Swap request list fetched
    SwapRequestsLoaded {
        epoch: u64,
        result: Result<Vec<SwapRequest>, String>,
    },
    /// Session list for the create form fetched
    SessionsLoaded {
        epoch: u64,
        result: Result<Vec<Session>, String>,
    },
    /// Accept or reject finished for one row
    SwapActionFinished {
        id: RequestId,
        action: SwapAction,
        result: Result<(), String>,
    },
    /// Create form submission finished
    SwapRequestCreated(Result<(), String>),
    /// Cached requests were invalidated and should be refetched
    RefreshRequested,
}
