//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between the swap desk client and the
//! timetable API. All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::session`]**: Sessions, teachers, rooms, session types
//!   - **[`dto::swap`]**: Swap requests, statuses, creation payload
//! - **[`utils`]**: Shared display helpers
//!
//! ## Usage
//!
//! ```rust,ignore
//! use shared::dto::swap::SwapRequest;
//!
//! let requests: Vec<SwapRequest> = reqwest::Client::new()
//!     .get("http://127.0.0.1:8000/api/swap/requests/")
//!     .bearer_auth("token")
//!     .send()
//!     .await?
//!     .json()
//!     .await?;
//! ```

pub mod dto;
pub mod utils;

pub use dto::*;
pub use utils::*;
