//! # Event Handlers
//!
//! Synchronous state changes for user actions, organized by domain.

pub mod auth;
pub mod navigation;
pub mod swap;
