//! Cache storage trait, typed extension, and error types.

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur during cache operations.
///
/// A cache miss is never an error; it is reported as `Ok(None)`.
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("Cache connection error: {0}")]
    ConnectionError(String),

    /// The entry under `key` exists but does not hold a value of the requested type.
    #[error("Cache entry '{key}' is not a {expected}: {reason}")]
    TypeMismatch {
        key: String,
        expected: &'static str,
        reason: String,
    },

    #[error("Cache serialization error: {0}")]
    SerializationError(String),
}

/// Result type for cache operations.
pub type CacheResult<T> = Result<T, CacheError>;

/// Key/value storage injected into services that want caching.
///
/// Values cross this boundary as untyped JSON so the trait stays object-safe
/// and can be shared as `Arc<dyn CacheStorage>`. Typed access lives in
/// [`CacheStorageExt`], which every implementation gets for free.
///
/// # Implementations
///
/// - [`crate::infrastructure::cache::MemoryCache`] - In-process map (default)
/// - [`crate::infrastructure::cache::RedisCache`] - External Redis server
/// - [`crate::infrastructure::cache::NullCache`] - Pass-through, stores nothing
#[async_trait]
pub trait CacheStorage: Send + Sync {
    /// Associates `value` with `key`, overwriting any existing entry.
    async fn store_value(&self, key: &str, value: Value) -> CacheResult<()>;

    /// Returns the value stored under `key`.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(value))` on cache hit
    /// - `Ok(None)` on cache miss
    async fn retrieve_value(&self, key: &str) -> CacheResult<Option<Value>>;

    /// Deletes the entry under `key`. Removing an absent key is a no-op.
    async fn remove(&self, key: &str) -> CacheResult<()>;

    /// Checks if the cache backend is healthy.
    async fn health_check(&self) -> bool;

    /// Short backend name used in logs and CLI output.
    fn backend_name(&self) -> &'static str;
}

/// Typed `store`/`retrieve` on top of any [`CacheStorage`].
#[async_trait]
pub trait CacheStorageExt: CacheStorage {
    /// Stores `value` under `key`, overwriting any existing entry.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::SerializationError`] if `value` cannot be encoded.
    async fn store<T>(&self, key: &str, value: &T) -> CacheResult<()>
    where
        T: Serialize + Sync + ?Sized,
    {
        let encoded = serde_json::to_value(value)
            .map_err(|e| CacheError::SerializationError(e.to_string()))?;
        self.store_value(key, encoded).await
    }

    /// Retrieves the value under `key` as `T`.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::TypeMismatch`] if an entry exists but does not
    /// decode as `T`. An absent key is `Ok(None)`.
    async fn retrieve<T>(&self, key: &str) -> CacheResult<Option<T>>
    where
        T: DeserializeOwned + Send,
    {
        let Some(raw) = self.retrieve_value(key).await? else {
            return Ok(None);
        };

        match serde_json::from_value::<T>(raw) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                debug!("Cache TYPE MISMATCH: {} ({})", key, e);
                Err(CacheError::TypeMismatch {
                    key: key.to_string(),
                    expected: std::any::type_name::<T>(),
                    reason: e.to_string(),
                })
            }
        }
    }
}

impl<C: CacheStorage + ?Sized> CacheStorageExt for C {}
