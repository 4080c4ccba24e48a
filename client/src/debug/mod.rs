//! # Logging
//!
//! File-based structured logging for the desktop client.
//!
//! ## Usage
//!
//! ```rust,ignore
//! // Keep the guard alive until exit so buffered lines are flushed
//! let _log_guard = debug::init();
//!
//! tracing::info!(endpoint = "/requests/", count = 12, "Fetched swap requests");
//! ```
//!
//! ## Configuration
//!
//! Environment variables:
//! - `RUST_LOG`: Log level filter (default `swap_client=info,warn`)
//! - `SWAPDESK_LOG_DIR`: Directory for rotated log files (default `logs/`)
//! - `SWAPDESK_LOG_JSON`: Write JSON lines (1=on)

pub mod config;
pub mod logger;

pub use config::DebugConfig;
pub use logger::init;
