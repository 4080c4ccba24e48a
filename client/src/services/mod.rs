//! # Services Module
//!
//! External integrations and process-wide service objects.
//!
//! ```text
//! services/
//! ├── api/       - Authenticated HTTP client and swap request endpoints
//! ├── query.rs   - Keyed query result cache
//! └── token.rs   - Persistent token storage and token providers
//! ```
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │                 Swap Desk UI                 │
//! │                                              │
//! │  ┌──────────────┐      ┌──────────────────┐  │
//! │  │  ApiClient   │◄─────│  TokenProvider   │  │
//! │  │  (api/)      │      │  (AuthContext)   │  │
//! │  └──────┬───────┘      └──────────────────┘  │
//! └─────────┼────────────────────────────────────┘
//!           │ HTTP/JSON + Bearer token
//!           ▼
//! ┌──────────────────────┐
//! │  Timetable Swap API  │
//! │  /create/            │
//! │  /accept/{id}/       │
//! │  /reject/{id}/       │
//! │  /requests/          │
//! │  /sessions/          │
//! └──────────────────────┘
//! ```

pub mod api;
pub mod query;
pub mod token;
