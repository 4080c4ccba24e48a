//! # Utility Functions
//!
//! Shared utility functions used across the client.
//!
//! ## Modules
//!
//! - **[`runtime`]**: Background tokio runtime for network tasks
//!
//! ## Related Modules
//!
//! - [`shared::utils`]: Cross-crate utilities (session date formatting)
//! - [`crate::core`]: Core abstractions and error types

pub mod runtime;
