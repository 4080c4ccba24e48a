//! # Swap Request Table State
//!
//! Rendering-independent state behind the swap request table: per-row busy
//! states, the actions each row offers, row selection and the details modal.
//!
//! ## Row State Machine
//!
//! ```text
//!            begin(Accept)              complete(..)
//!   Idle ─────────────────► Accepting ──────────────► Idle
//!     │                                                 ▲
//!     │      begin(Reject)              complete(..)    │
//!     └──────────────────► Rejecting ───────────────────┘
//! ```
//!
//! Busy states are tracked per request id, so any number of rows can be
//! in flight at once without affecting each other.

use shared::{RequestId, SessionType, SwapRequest, SwapStatus};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use super::state::Notification;

/// Callback run after an action succeeds, so the owner can refetch.
pub type UpdateCallback = Arc<dyn Fn() + Send + Sync>;

/// Action a user can take on a pending request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwapAction {
    Accept,
    Reject,
}

impl SwapAction {
    pub fn label(&self) -> &'static str {
        match self {
            SwapAction::Accept => "Accept",
            SwapAction::Reject => "Reject",
        }
    }

    /// Label shown while the action is in flight
    pub fn busy_label(&self) -> &'static str {
        match self {
            SwapAction::Accept => "Accepting...",
            SwapAction::Reject => "Rejecting...",
        }
    }

    pub fn success_message(&self) -> &'static str {
        match self {
            SwapAction::Accept => "Swap request accepted successfully",
            SwapAction::Reject => "Swap request rejected successfully",
        }
    }

    pub fn failure_message(&self) -> &'static str {
        match self {
            SwapAction::Accept => "Failed to accept swap request",
            SwapAction::Reject => "Failed to reject swap request",
        }
    }

    fn busy_state(&self) -> RowState {
        match self {
            SwapAction::Accept => RowState::Accepting,
            SwapAction::Reject => RowState::Rejecting,
        }
    }
}

/// Busy state of one row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RowState {
    #[default]
    Idle,
    Accepting,
    Rejecting,
}

impl RowState {
    pub fn is_busy(&self) -> bool {
        !matches!(self, RowState::Idle)
    }
}

/// What a row menu entry does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowActionKind {
    ViewDetails,
    Swap(SwapAction),
}

/// One entry of a row's dropdown menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowActionItem {
    pub kind: RowActionKind,
    pub label: &'static str,
    pub enabled: bool,
}

/// Read-only projection of a request shown in the details modal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapRequestDetails {
    pub id: RequestId,
    pub subject: String,
    pub session_type: SessionType,
    pub date: String,
    pub requested_by: String,
    pub requested_to: String,
    pub room: String,
    pub new_room: String,
    pub status: SwapStatus,
    /// Creation time as `"14 Oct 2026, 09:30 UTC"`, if the API sent one
    pub created_at: Option<String>,
}

impl From<&SwapRequest> for SwapRequestDetails {
    fn from(request: &SwapRequest) -> Self {
        let from = &request.from_session;
        let to = &request.to_session;
        Self {
            id: request.id.clone(),
            subject: from.module.clone(),
            session_type: from.session_type,
            date: from.date_range(),
            requested_by: from.teacher.username.clone(),
            requested_to: to.teacher.username.clone(),
            room: from.room.room_id.clone(),
            new_room: to.room.room_id.clone(),
            status: request.status,
            created_at: request
                .created_at
                .map(|at| at.format("%d %b %Y, %H:%M UTC").to_string()),
        }
    }
}

/// State of the swap request table.
#[derive(Clone, Default)]
pub struct SwapRequestTable {
    data: Vec<SwapRequest>,
    row_states: HashMap<RequestId, RowState>,
    selected: HashSet<RequestId>,
    details: Option<SwapRequestDetails>,
    details_open: bool,
    on_request_update: Option<UpdateCallback>,
}

impl std::fmt::Debug for SwapRequestTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SwapRequestTable")
            .field("rows", &self.data.len())
            .field("row_states", &self.row_states)
            .field("selected", &self.selected.len())
            .field("details", &self.details)
            .field("details_open", &self.details_open)
            .field("has_update_callback", &self.on_request_update.is_some())
            .finish()
    }
}

impl SwapRequestTable {
    pub fn new(data: Vec<SwapRequest>) -> Self {
        Self {
            data,
            ..Self::default()
        }
    }

    pub fn with_update_callback(mut self, callback: UpdateCallback) -> Self {
        self.on_request_update = Some(callback);
        self
    }

    pub fn set_update_callback(&mut self, callback: Option<UpdateCallback>) {
        self.on_request_update = callback;
    }

    pub fn update_callback(&self) -> Option<UpdateCallback> {
        self.on_request_update.clone()
    }

    pub fn data(&self) -> &[SwapRequest] {
        &self.data
    }

    pub fn get(&self, id: &RequestId) -> Option<&SwapRequest> {
        self.data.iter().find(|r| &r.id == id)
    }

    /// Replace the rows with a fresh fetch.
    ///
    /// Busy and selection state survive only for ids still present. The
    /// details projection is left as it was opened.
    pub fn set_data(&mut self, data: Vec<SwapRequest>) {
        let ids: HashSet<&RequestId> = data.iter().map(|r| &r.id).collect();
        self.row_states.retain(|id, _| ids.contains(id));
        self.selected.retain(|id| ids.contains(id));
        self.data = data;
    }

    pub fn row_state(&self, id: &RequestId) -> RowState {
        self.row_states.get(id).copied().unwrap_or_default()
    }

    pub fn is_busy(&self, id: &RequestId) -> bool {
        self.row_state(id).is_busy()
    }

    /// Dropdown entries for a row.
    ///
    /// "View Details" is always offered. Accept and Reject only for pending
    /// requests, disabled with a busy label while an action is in flight.
    pub fn row_actions(&self, request: &SwapRequest) -> Vec<RowActionItem> {
        let mut items = vec![RowActionItem {
            kind: RowActionKind::ViewDetails,
            label: "View Details",
            enabled: true,
        }];

        if !request.is_pending() {
            return items;
        }

        let state = self.row_state(&request.id);
        for action in [SwapAction::Accept, SwapAction::Reject] {
            let label = if state == action.busy_state() {
                action.busy_label()
            } else {
                action.label()
            };
            items.push(RowActionItem {
                kind: RowActionKind::Swap(action),
                label,
                enabled: !state.is_busy(),
            });
        }

        items
    }

    /// Mark a row busy. Returns `false` if the row is unknown, not pending,
    /// or already busy, in which case nothing should be sent.
    pub fn begin(&mut self, id: &RequestId, action: SwapAction) -> bool {
        let pending = self.get(id).map(SwapRequest::is_pending).unwrap_or(false);
        if !pending || self.is_busy(id) {
            tracing::debug!(id = %id, ?action, pending, "Ignoring swap action");
            return false;
        }

        self.row_states.insert(id.clone(), action.busy_state());
        true
    }

    /// Finish an action: the row always returns to idle.
    ///
    /// On success the update callback runs once and a success toast is
    /// returned; on failure only an error toast is returned.
    pub fn complete(
        &mut self,
        id: &RequestId,
        action: SwapAction,
        result: Result<(), String>,
    ) -> Notification {
        if self.row_states.remove(id) != Some(action.busy_state()) {
            tracing::debug!(id = %id, ?action, "Completed action was not tracked as busy");
        }

        match result {
            Ok(()) => {
                if let Some(callback) = &self.on_request_update {
                    callback();
                }
                Notification::success(action.success_message())
            }
            Err(e) => {
                tracing::warn!(id = %id, ?action, error = %e, "Swap action failed");
                Notification::error(action.failure_message())
            }
        }
    }

    /// Open the modal with `request`'s projection, replacing any previous one.
    pub fn open_details(&mut self, request: &SwapRequest) {
        self.details = Some(SwapRequestDetails::from(request));
        self.details_open = true;
    }

    pub fn close_details(&mut self) {
        self.details_open = false;
    }

    pub fn details_open(&self) -> bool {
        self.details_open
    }

    pub fn details(&self) -> Option<&SwapRequestDetails> {
        self.details.as_ref()
    }

    pub fn is_selected(&self, id: &RequestId) -> bool {
        self.selected.contains(id)
    }

    pub fn set_selected(&mut self, id: &RequestId, selected: bool) {
        if selected {
            self.selected.insert(id.clone());
        } else {
            self.selected.remove(id);
        }
    }

    pub fn all_selected(&self) -> bool {
        !self.data.is_empty() && self.data.iter().all(|r| self.selected.contains(&r.id))
    }

    pub fn set_all_selected(&mut self, selected: bool) {
        if selected {
            self.selected = self.data.iter().map(|r| r.id.clone()).collect();
        } else {
            self.selected.clear();
        }
    }

    /// (total, pending, accepted, rejected)
    pub fn status_counts(&self) -> (usize, usize, usize, usize) {
        let count = |status: SwapStatus| self.data.iter().filter(|r| r.status == status).count();
        (
            self.data.len(),
            count(SwapStatus::Pending),
            count(SwapStatus::Accepted),
            count(SwapStatus::Rejected),
        )
    }
}
