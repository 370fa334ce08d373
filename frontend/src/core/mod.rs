//! # Core Abstractions
//!
//! Core traits and error types for dependency injection and better testability.
//!
//! ## Modules
//!
//! - **[`error`]**: Error envelope (`ApiError`, `ErrorKind`, `Result<T>`) and `StorageError`
//! - **[`service`]**: Service traits for dependency injection (`ApiService`, `HttpTransport`)
//!
//! ## Dependency Injection
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use frontend::core::service::ApiService;
//!
//! // In production: the real gateway-backed client
//! let api: Arc<dyn ApiService> = Arc::new(frontend::services::api::ApiClient::new(config, store));
//!
//! // In tests: a mock implementation
//! let api: Arc<dyn ApiService> = Arc::new(MockApiService::default());
//! ```

pub mod error;
pub mod service;

// Re-export commonly used types for convenience
pub use error::{ApiError, ErrorKind, Result, StorageError};
pub use service::{ApiService, HttpTransport};
