//! No-op cache implementation for disabled caching.

use super::service::{CacheResult, CacheStorage};
use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

/// A cache implementation that stores nothing.
///
/// Every retrieve is a miss, so services always go to their data source.
///
/// # Use Cases
///
/// - Caching explicitly disabled (`CACHE_BACKEND=none`)
/// - Tests that must exercise the data source on every call
pub struct NullCache;

impl NullCache {
    /// Creates a new NullCache instance.
    pub fn new() -> Self {
        debug!("Using NullCache (caching disabled)");
        Self
    }
}

impl Default for NullCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CacheStorage for NullCache {
    async fn store_value(&self, _key: &str, _value: Value) -> CacheResult<()> {
        Ok(())
    }

    async fn retrieve_value(&self, _key: &str) -> CacheResult<Option<Value>> {
        Ok(None)
    }

    async fn remove(&self, _key: &str) -> CacheResult<()> {
        Ok(())
    }

    async fn health_check(&self) -> bool {
        true
    }

    fn backend_name(&self) -> &'static str {
        "none"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::cache::CacheStorageExt;

    #[tokio::test]
    async fn test_store_is_never_retrievable() {
        let cache = NullCache::new();

        cache.store("k", &vec![1, 2]).await.unwrap();

        let value: Option<Vec<i32>> = cache.retrieve("k").await.unwrap();
        assert!(value.is_none());
    }
}
