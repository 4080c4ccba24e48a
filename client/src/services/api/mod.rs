//! # Swap API Client Module
//!
//! HTTP client for the timetable swap API.
//!
//! ```text
//! api/
//! ├── mod.rs      - Module exports and the SwapService implementation
//! ├── client.rs   - ApiClient, FetchConfig, authenticated fetch
//! └── swap.rs     - Swap request endpoints (create, accept, reject, list)
//! ```

pub mod client;
pub mod swap;

pub use client::{ApiClient, FetchConfig};
pub use swap::CreateSwapRequestBody;

use async_trait::async_trait;
use shared::{NewSwapRequest, RequestId, Session, SwapRequest};

use crate::core::{Result, SwapService};

#[async_trait]
impl SwapService for ApiClient {
    async fn create_swap_request(&self, data: NewSwapRequest) -> Result<()> {
        swap::create_swap_request(self, &data).await.map(|_| ())
    }

    async fn accept_swap_request(&self, id: &RequestId) -> Result<()> {
        swap::accept_swap_request(self, id).await
    }

    async fn reject_swap_request(&self, id: &RequestId) -> Result<()> {
        swap::reject_swap_request(self, id).await
    }

    async fn list_swap_requests(&self) -> Result<Vec<SwapRequest>> {
        swap::list_swap_requests(self).await
    }

    async fn list_sessions(&self) -> Result<Vec<Session>> {
        swap::list_sessions(self).await
    }
}
