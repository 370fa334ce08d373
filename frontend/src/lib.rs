//! # Trade Journal Frontend - Library Root
//!
//! Client-side core of the trade journal: the auth session store, the
//! backend request gateway and the typed endpoint modules built on it.
//! The crate compiles natively and for `wasm32` (browser `localStorage`).
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │              frontend (this crate)                     │
//! ├────────────────────────────────────────────────────────┤
//! │  state::AuthStore   - Session + subscribers            │
//! │  storage            - Token persistence                │
//! │  services::api      - Gateway + endpoints              │
//! │  services::session  - Login / restore workflows        │
//! └────────────────────────────────────────────────────────┘
//!          │
//!          │ HTTP/JSON (reqwest)
//!          ▼
//! ┌─────────────────┐
//! │  Backend API    │
//! └─────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! let config = FrontendConfig::from_env()?;
//! let store = Arc::new(AuthStore::new(Arc::new(FileStorage::new(&config.storage_path))));
//! let api = ApiClient::new(&config, store.clone());
//!
//! services::session::login(&api, &store, "alice@example.com", "secret").await?;
//! let trades = services::api::trades::list(&api, &TradeFilters::default()).await?;
//! ```

pub mod config;
pub mod core;
#[cfg(not(target_arch = "wasm32"))]
pub mod debug;
pub mod services;
pub mod state;
pub mod storage;

pub use config::{ConfigError, FrontendConfig};
pub use core::{ApiError, ApiService, ErrorKind, HttpTransport, Result, StorageError};
pub use services::api::{ApiClient, ApiRequest, ReqwestTransport};
pub use state::{AuthStore, Session, SubscriptionId};
pub use storage::{FileStorage, KeyValueStorage, MemoryStorage};
