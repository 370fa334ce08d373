//! # Data Transfer Objects (DTOs)
//!
//! This module contains all data structures used for communication between
//! the frontend and backend via the REST API.
//!
//! ## Module Organization
//!
//! - [`auth`] - Registration, login, profile and error body DTOs
//! - [`trade`] - Trade journal entries and list filters
//! - [`analytics`] - Overview, per-symbol, per-setup and mistake aggregates
//! - [`subscription`] - Subscription intervals and checkout sessions
//!
//! ## Example JSON Communication
//!
//! ```text
//! POST /api/auth/login
//! Content-Type: application/json
//!
//! {
//!   "email": "alice@example.com",
//!   "password": "MyPassword123!"
//! }
//! ```
//!
//! ```text
//! HTTP/1.1 200 OK
//! Content-Type: application/json
//!
//! {
//!   "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...",
//!   "user": {
//!     "id": "5f0c6f9e-8d5e-4c43-9a2e-1f7b7f3f1a10",
//!     "name": "Alice",
//!     "email": "alice@example.com",
//!     "email_verified": false,
//!     "subscription_status": "none",
//!     "subscription_tier": "none",
//!     "subscription_interval": null,
//!     "created_at": "2024-01-01T00:00:00Z"
//!   }
//! }
//! ```
//!
//! Failures carry an [`ErrorResponse`] body:
//!
//! ```text
//! HTTP/1.1 401 Unauthorized
//! Content-Type: application/json
//!
//! { "error": "Invalid credentials", "details": "Email or password is incorrect" }
//! ```

pub mod analytics;
pub mod auth;
pub mod subscription;
pub mod trade;

pub use analytics::*;
pub use auth::*;
pub use subscription::*;
pub use trade::*;
