//! # Backend API Client Module
//!
//! HTTP client for the trade journal backend. Every endpoint goes through the
//! single gateway in [`client`], so header defaults, token handling and error
//! decoding are identical for all of them.
//!
//! ## Module Structure
//!
//! ```text
//! api/
//! ├── mod.rs           - Module exports and documentation
//! ├── client.rs        - ApiClient gateway and response decoding
//! ├── request.rs       - ApiRequest builder
//! ├── transport.rs     - Wire types and the reqwest transport
//! ├── auth.rs          - Register, login, current user
//! ├── trades.rs        - Trade CRUD
//! ├── analytics.rs     - Journal statistics
//! └── subscriptions.rs - Checkout sessions
//! ```

pub mod analytics;
pub mod auth;
pub mod client;
pub mod request;
pub mod subscriptions;
pub mod trades;
pub mod transport;

pub use client::ApiClient;
pub use request::ApiRequest;
pub use transport::{HttpRequest, HttpResponse, ReqwestTransport};
