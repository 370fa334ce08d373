//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between the trade journal frontend and
//! the backend API. All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::auth`]**: Registration, login and user profile DTOs
//!   - **[`dto::trade`]**: Journal entries, create/update payloads and list filters
//!   - **[`dto::analytics`]**: Aggregated performance statistics
//!   - **[`dto::subscription`]**: Subscription plans and checkout sessions
//!
//! ## Wire Format
//!
//! - Field names are **snake_case** in Rust and in JSON (default serde behavior)
//! - Optional request fields are omitted from JSON when `None`
//! - Decimal amounts use [`rust_decimal::Decimal`], which the backend emits as
//!   strings and which also accepts plain JSON numbers
//! - Timestamps are RFC 3339 UTC strings (`chrono::DateTime<Utc>`)
//!
//! ## Usage in Frontend
//!
//! ```rust,ignore
//! use shared::dto::auth::{LoginRequest, AuthResponse};
//!
//! let request = LoginRequest {
//!     email: "alice@example.com".to_string(),
//!     password: "secret-password".to_string(),
//! };
//!
//! let response: AuthResponse = reqwest::Client::new()
//!     .post("http://localhost:3000/api/auth/login")
//!     .json(&request)
//!     .send()
//!     .await?
//!     .json()
//!     .await?;
//!
//! println!("{} logged in", response.user.name);
//! ```

pub mod dto;

// Re-export commonly used types for convenience
pub use dto::*;

// Amount type used by the DTOs, re-exported so clients don't need a direct dependency
pub use rust_decimal::Decimal;
