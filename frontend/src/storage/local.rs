use super::KeyValueStorage;
use crate::core::error::StorageError;

/// Browser `window.localStorage`.
///
/// The handle is looked up on every call instead of being stored, which keeps
/// this type `Send + Sync` like the other backends.
#[derive(Debug, Clone, Copy)]
pub struct LocalStorage;

impl LocalStorage {
    /// Fails when there is no `window` (workers, server-side rendering) or the
    /// browser denies storage access.
    pub fn new() -> Result<Self, StorageError> {
        Self::storage()?;
        Ok(Self)
    }

    fn storage() -> Result<web_sys::Storage, StorageError> {
        let window = web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("no window".to_string()))?;
        window
            .local_storage()
            .map_err(|e| StorageError::Unavailable(format!("{e:?}")))?
            .ok_or_else(|| StorageError::Unavailable("localStorage disabled".to_string()))
    }
}

impl KeyValueStorage for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| StorageError::Unavailable(format!("{e:?}")))
    }

    fn set(&self, key: &str, value: Option<&str>) -> Result<(), StorageError> {
        let storage = Self::storage()?;
        let result = match value {
            Some(value) => storage.set_item(key, value),
            None => storage.remove_item(key),
        };
        result.map_err(|e| StorageError::Unavailable(format!("{e:?}")))
    }
}
