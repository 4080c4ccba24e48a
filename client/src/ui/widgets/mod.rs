//! # Reusable UI Widgets
//!
//! Common widgets used across screens.

pub mod nav_bar;
pub mod notifications;
pub mod status_badge;
pub mod tables;
