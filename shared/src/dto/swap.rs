//! # Swap Request Data Transfer Objects
//!
//! Requests to exchange two scheduled sessions, and the payload used to create one.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use super::session::Session;

/// Identifier of a swap request.
///
/// The API sends ids as numbers on some endpoints and as strings on others,
/// so both are accepted and normalized to their decimal string form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestId(String);

impl RequestId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<i64> for RequestId {
    fn from(id: i64) -> Self {
        Self(id.to_string())
    }
}

impl From<&str> for RequestId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl Serialize for RequestId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for RequestId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(i64),
            Unsigned(u64),
            Text(String),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Number(n) => RequestId::from(n),
            Raw::Unsigned(n) => RequestId(n.to_string()),
            Raw::Text(s) => RequestId(s),
        })
    }
}

/// Lifecycle status of a swap request
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum SwapStatus {
    Pending,
    Accepted,
    Rejected,
}

impl SwapStatus {
    /// Accepted and rejected requests accept no further actions
    pub fn is_terminal(&self) -> bool {
        !matches!(self, SwapStatus::Pending)
    }

    pub fn label(&self) -> &'static str {
        match self {
            SwapStatus::Pending => "Pending",
            SwapStatus::Accepted => "Accepted",
            SwapStatus::Rejected => "Rejected",
        }
    }
}

/// A proposed exchange between two scheduled sessions
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SwapRequest {
    pub id: RequestId,
    pub from_session: Session,
    pub to_session: Session,
    pub status: SwapStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl SwapRequest {
    pub fn is_pending(&self) -> bool {
        self.status == SwapStatus::Pending
    }
}

/// Payload proposing a new swap
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewSwapRequest {
    /// Id of the requester's session
    pub from_session: i64,
    /// Id of the session to exchange with
    pub to_session: i64,
    pub swap_room: bool,
    pub swap_time: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session_json(id: i64, teacher: &str, room: &str) -> serde_json::Value {
        serde_json::json!({
            "id": id,
            "week_day": "Monday",
            "starting_time": "08:00",
            "ending_time": "10:00",
            "module": "Algorithms",
            "teacher": { "id": id * 10, "username": teacher },
            "room": { "id": id * 100, "room_id": room },
            "session_type": "TD"
        })
    }

    #[test]
    fn test_request_id_accepts_number_and_string() {
        let n: RequestId = serde_json::from_str("42").unwrap();
        let s: RequestId = serde_json::from_str("\"42\"").unwrap();
        assert_eq!(n, s);
        assert_eq!(n.as_str(), "42");
    }

    #[test]
    fn test_request_id_above_i64_range() {
        let id: RequestId = serde_json::from_str("18446744073709551615").unwrap();
        assert_eq!(id.as_str(), "18446744073709551615");
    }

    #[test]
    fn test_swap_request_parses_api_payload() {
        let raw = serde_json::json!({
            "id": 7,
            "from_session": session_json(1, "alice", "B204"),
            "to_session": session_json(2, "bob", "C101"),
            "status": "PENDING"
        });

        let request: SwapRequest = serde_json::from_value(raw).unwrap();
        assert_eq!(request.id, RequestId::from(7_i64));
        assert!(request.is_pending());
        assert_eq!(request.from_session.session_type, crate::dto::session::SessionType::Tutorial);
        assert_eq!(request.to_session.room.room_id, "C101");
        assert!(request.created_at.is_none());
    }

    #[test]
    fn test_unknown_status_is_rejected() {
        let raw = serde_json::json!("CANCELLED");
        assert!(serde_json::from_value::<SwapStatus>(raw).is_err());
    }

    #[test]
    fn test_terminal_statuses() {
        assert!(!SwapStatus::Pending.is_terminal());
        assert!(SwapStatus::Accepted.is_terminal());
        assert!(SwapStatus::Rejected.is_terminal());
    }
}
