//! # Async Tasks
//!
//! Network work spawned off the UI thread. Results come back as
//! [`AppEvent`](crate::app::AppEvent)s.

pub mod swap;
