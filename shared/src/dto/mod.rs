//! # Data Transfer Objects (DTOs)
//!
//! Data structures exchanged with the timetable REST API.
//!
//! ## Module Organization
//!
//! - [`session`] - Scheduled sessions, teachers and rooms
//! - [`swap`] - Swap requests and the payload that creates them
//!
//! ## Serialization Format
//!
//! - **Field naming**: snake_case (default serde behavior)
//! - **Statuses**: upper-case strings (`"PENDING"`, `"ACCEPTED"`, `"REJECTED"`)
//! - **Session types**: the timetable's short labels (`"Cour"`, `"TD"`, `"TP"`)
//!
//! ## Example JSON
//!
//! ```text
//! POST /create/
//! Content-Type: application/json
//! Authorization: Bearer eyJhbGciOi...
//!
//! {
//!   "from_session": 12,
//!   "to_session": 31,
//!   "swap_room": true,
//!   "swap_time": true
//! }
//! ```

pub mod session;
pub mod swap;

use serde::{Deserialize, Serialize};

pub use session::*;
pub use swap::*;

/// Error response body returned by the API on non-2xx statuses
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
}
