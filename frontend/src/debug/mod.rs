//! # Logging Infrastructure
//!
//! Structured logging for the journal client via `tracing`.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use frontend::debug::{self, LogConfig};
//!
//! // Keep the guard alive until shutdown so buffered lines are flushed
//! let _guard = debug::init_logger(&LogConfig::from_env()).expect("logging");
//!
//! tracing::info!(endpoint = "/api/trades", duration_ms = 42, "API call completed");
//! ```
//!
//! ## Configuration
//!
//! Environment variables:
//! - `RUST_LOG`: Log level filter (default `frontend=info,warn`)
//! - `JOURNAL_LOG_DIR`: Write a daily rolling `frontend.log` here instead of stderr

pub mod config;
pub mod logger;

pub use config::LogConfig;
pub use logger::{init as init_logger, LoggerError};
