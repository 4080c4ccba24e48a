//! # Screen Modules
//!
//! Each screen module contains the rendering logic for one screen.
//!
//! - **[`sign_in`]**: Paste an access token
//! - **[`swap_requests`]**: Swap request table with row actions
//! - **[`details`]**: Read-only details modal for one request
//! - **[`create_request`]**: Propose a new swap
//!
//! ## Rendering Pattern
//!
//! ```rust,ignore
//! pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App, theme: &Theme) {
//!     // - Read from the state snapshot
//!     // - Call app.handle_* methods for actions
//! }
//! ```
//!
//! Screens receive a **cloned state snapshot**, so no lock is held while
//! drawing. User actions go through `app.handle_*`, which lock internally.

pub mod create_request;
pub mod details;
pub mod sign_in;
pub mod swap_requests;
