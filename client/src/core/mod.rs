//! # Core Abstractions
//!
//! Core traits and error types shared by every layer of the client.
//!
//! - **[`error`]**: Application error type ([`AppError`], [`Result<T>`])
//! - **[`service`]**: Service traits for dependency injection ([`SwapService`], [`TokenProvider`])
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use swap_client::core::SwapService;
//!
//! // In production: the HTTP client
//! let api: Arc<dyn SwapService> = Arc::new(ApiClient::new(&config.api_url, auth));
//!
//! // In tests: an in-memory mock
//! let api: Arc<dyn SwapService> = Arc::new(MockSwapService::default());
//! ```

pub mod error;
pub mod service;

pub use error::{AppError, Result};
pub use service::{SwapService, TokenProvider};
