use customer_cache::infrastructure::cache::{
    CacheError, CacheStorage, CacheStorageExt, MemoryCache, NullCache,
};
use std::sync::Arc;

fn backends() -> Vec<Arc<dyn CacheStorage>> {
    vec![Arc::new(MemoryCache::new()), Arc::new(NullCache::new())]
}

#[tokio::test]
async fn test_retrieve_absent_key_never_errors() {
    for cache in backends() {
        let value: Option<String> = cache.retrieve("missing").await.unwrap();
        assert!(value.is_none(), "backend {}", cache.backend_name());
    }
}

#[tokio::test]
async fn test_remove_absent_key_is_noop() {
    for cache in backends() {
        assert!(cache.remove("missing").await.is_ok());
    }
}

#[tokio::test]
async fn test_memory_store_overwrites() {
    let cache: Arc<dyn CacheStorage> = Arc::new(MemoryCache::new());

    cache.store("greeting", "hello").await.unwrap();
    cache.store("greeting", "bye").await.unwrap();

    let value: Option<String> = cache.retrieve("greeting").await.unwrap();
    assert_eq!(value.as_deref(), Some("bye"));
}

#[tokio::test]
async fn test_memory_retrieve_wrong_type() {
    let cache: Arc<dyn CacheStorage> = Arc::new(MemoryCache::new());
    cache.store("count", &3u64).await.unwrap();

    let result = cache.retrieve::<Vec<String>>("count").await;

    assert!(matches!(result, Err(CacheError::TypeMismatch { .. })));

    // The entry survives a mismatched read
    let count: Option<u64> = cache.retrieve("count").await.unwrap();
    assert_eq!(count, Some(3));
}

#[tokio::test]
async fn test_memory_cache_shared_across_tasks() {
    let cache = Arc::new(MemoryCache::new());

    let mut handles = Vec::new();
    for i in 0..8u32 {
        let cache = cache.clone();
        handles.push(tokio::spawn(async move {
            cache.store(&format!("key-{}", i), &i).await.unwrap();
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    assert_eq!(cache.len(), 8);
    let value: Option<u32> = cache.retrieve("key-5").await.unwrap();
    assert_eq!(value, Some(5));
}
