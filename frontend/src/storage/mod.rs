//! # Durable Key-Value Storage
//!
//! The auth store persists exactly one value, the bearer token, through the
//! small [`KeyValueStorage`] capability. Backends:
//!
//! - [`MemoryStorage`]: process-local map, shared between clones (tests, embedding)
//! - [`FileStorage`]: JSON object on disk (native builds)
//! - `LocalStorage`: browser `window.localStorage` (`wasm32` builds only)

mod file;
#[cfg(target_arch = "wasm32")]
mod local;
mod memory;

pub use file::FileStorage;
#[cfg(target_arch = "wasm32")]
pub use local::LocalStorage;
pub use memory::MemoryStorage;

use crate::core::error::StorageError;

/// Persistence capability with two operations: read a key, and write or delete it.
pub trait KeyValueStorage: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, or remove the key when `value` is `None`.
    /// Removing a missing key is not an error.
    fn set(&self, key: &str, value: Option<&str>) -> Result<(), StorageError>;
}
