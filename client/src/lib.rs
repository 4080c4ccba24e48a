//! # Swap Desk Client - Library Root
//!
//! A **native desktop GUI** for proposing and reviewing class session swaps
//! between teachers. All scheduling rules live in the swap API; this crate
//! sends requests and renders what comes back.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │              swap-client (this crate)                  │
//! ├────────────────────────────────────────────────────────┤
//! │  egui / eframe  - Immediate-mode GUI, native window    │
//! │  egui_extras    - Swap request table                   │
//! │  egui-notify    - Toasts                               │
//! │  Tokio          - Background runtime                   │
//! │  Reqwest        - HTTP client                          │
//! └────────────────────────────────────────────────────────┘
//!          │ HTTP + Bearer token
//!          ▼
//! ┌─────────────────┐
//! │  Swap API       │
//! └─────────────────┘
//! ```
//!
//! ## Module Structure
//!
//! - **app**: Orchestrator, state, the swap request table state machine
//! - **services**: API client, token store, query cache
//! - **providers**: Composition root (query cache + auth context)
//! - **ui**: Screens, widgets, theme
//! - **core**: `AppError` and the service traits
//! - **config**: Environment configuration
//! - **debug**: File logging
//!
//! ### Module Dependency Graph
//!
//! ```text
//! main.rs
//!   │
//!   ├── config, debug
//!   ├── providers (QueryClient, AuthContext)
//!   ├── services::api::ApiClient (SwapService)
//!   ├── app (state, events, handlers, tasks)
//!   └── ui (SwapDeskUi: eframe::App)
//! ```
//!
//! ## Testing
//!
//! ```bash
//! cargo test --workspace
//! ```
//!
//! UI-independent logic is tested against a mock [`core::SwapService`];
//! request construction is tested without a network.

pub mod app;
pub mod config;
pub mod core;
pub mod debug;
pub mod providers;
pub mod services;
pub mod ui;
pub mod utils;

pub use app::{App, AppEvent, AppState, Screen};
pub use core::{AppError, Result};
