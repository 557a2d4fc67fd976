//! In-process cache implementation.

use super::service::{CacheResult, CacheStorage};
use async_trait::async_trait;
use parking_lot::RwLock;
use serde_json::Value;
use std::collections::HashMap;
use tracing::debug;

/// A cache backed by a map living in this process.
///
/// Entries never expire and are only dropped by [`CacheStorage::remove`].
/// The lock is held for a single map operation and never across an `.await`.
#[derive(Default)]
pub struct MemoryCache {
    entries: RwLock<HashMap<String, Value>>,
}

impl MemoryCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        debug!("Using MemoryCache");
        Self::default()
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Returns true if an entry exists under `key`, whatever its type.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.read().contains_key(key)
    }
}

#[async_trait]
impl CacheStorage for MemoryCache {
    async fn store_value(&self, key: &str, value: Value) -> CacheResult<()> {
        let replaced = self.entries.write().insert(key.to_string(), value);
        debug!("Cache SET: {} (overwrite: {})", key, replaced.is_some());
        Ok(())
    }

    async fn retrieve_value(&self, key: &str) -> CacheResult<Option<Value>> {
        let value = self.entries.read().get(key).cloned();

        if value.is_some() {
            debug!("Cache HIT: {}", key);
        } else {
            debug!("Cache MISS: {}", key);
        }

        Ok(value)
    }

    async fn remove(&self, key: &str) -> CacheResult<()> {
        if self.entries.write().remove(key).is_some() {
            debug!("Cache INVALIDATE: {}", key);
        }
        Ok(())
    }

    async fn health_check(&self) -> bool {
        true
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::cache::CacheStorageExt;
    use serde_json::json;

    #[tokio::test]
    async fn test_store_then_retrieve() {
        let cache = MemoryCache::new();

        cache.store_value("a", json!([1, 2, 3])).await.unwrap();

        assert_eq!(
            cache.retrieve_value("a").await.unwrap(),
            Some(json!([1, 2, 3]))
        );
        assert_eq!(cache.len(), 1);
    }

    #[tokio::test]
    async fn test_store_overwrites_existing_entry() {
        let cache = MemoryCache::new();

        cache.store("k", &"first").await.unwrap();
        cache.store("k", &"second").await.unwrap();

        let value: Option<String> = cache.retrieve("k").await.unwrap();
        assert_eq!(value.as_deref(), Some("second"));
        assert_eq!(cache.len(), 1);
    }

    #[tokio::test]
    async fn test_remove_deletes_entry() {
        let cache = MemoryCache::new();
        cache.store("k", &42u32).await.unwrap();

        cache.remove("k").await.unwrap();

        assert!(!cache.contains_key("k"));
        assert!(cache.retrieve_value("k").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_remove_absent_key_is_noop() {
        let cache = MemoryCache::new();
        cache.store("other", &1u8).await.unwrap();

        assert!(cache.remove("missing").await.is_ok());
        assert_eq!(cache.len(), 1);
    }

    #[tokio::test]
    async fn test_empty_list_is_a_hit() {
        let cache = MemoryCache::new();
        cache.store("empty", &Vec::<u32>::new()).await.unwrap();

        let value: Option<Vec<u32>> = cache.retrieve("empty").await.unwrap();
        assert_eq!(value, Some(vec![]));
    }

    #[tokio::test]
    async fn test_health_check() {
        let cache = MemoryCache::new();
        assert!(cache.health_check().await);
        assert_eq!(cache.backend_name(), "memory");
        assert!(cache.is_empty());
    }
}
