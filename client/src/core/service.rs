//! # Service Traits
//!
//! Seams for dependency injection: the swap API and the credential source.

use async_trait::async_trait;
use shared::{NewSwapRequest, RequestId, Session, SwapRequest};

use super::error::Result;

/// Operations the client performs against the swap API.
///
/// Implemented by [`crate::services::api::ApiClient`]; tests substitute a mock.
#[async_trait]
pub trait SwapService: Send + Sync {
    /// Propose a swap. Always requests both a room and a time swap.
    async fn create_swap_request(&self, data: NewSwapRequest) -> Result<()>;

    /// Accept a pending request
    async fn accept_swap_request(&self, id: &RequestId) -> Result<()>;

    /// Reject a pending request
    async fn reject_swap_request(&self, id: &RequestId) -> Result<()>;

    /// All requests visible to the current user
    async fn list_swap_requests(&self) -> Result<Vec<SwapRequest>>;

    /// Sessions the user can pick from when proposing a swap
    async fn list_sessions(&self) -> Result<Vec<Session>>;
}

/// Source of the bearer token attached to outgoing requests.
///
/// Read on every call, so a sign-in or sign-out takes effect on the next request.
pub trait TokenProvider: Send + Sync {
    fn access_token(&self) -> Option<String>;
}
