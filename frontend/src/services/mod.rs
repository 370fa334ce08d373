//! # Services Module
//!
//! ```text
//! services/
//! ├── api/        - Request gateway and endpoint modules
//! └── session.rs  - Login, register, logout and token restore workflows
//! ```
//!
//! ## Service Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │                 UI / caller                   │
//! │                                               │
//! │  session::login ──┐          ┌── AuthStore    │
//! │                   ▼          │   (token)      │
//! │  trades::list ─► ApiClient ◄─┘                │
//! │                   │                           │
//! └───────────────────┼───────────────────────────┘
//!                     │ HttpTransport (reqwest)
//!                     ▼
//! ┌──────────────────────────────────────────────┐
//! │  Backend API                                 │
//! │  /api/auth/*  /api/trades/*                  │
//! │  /api/analytics/*  /api/subscriptions/*      │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! ## Error Handling
//!
//! Every call returns `Result<T, ApiError>`; see [`crate::core::error`].
//! Nothing retries: callers decide whether to try again.

pub mod api;
pub mod session;
