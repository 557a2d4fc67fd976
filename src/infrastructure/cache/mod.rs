//! Injectable cache storage.
//!
//! Provides a [`CacheStorage`] trait (plus typed [`CacheStorageExt`]) with three implementations:
//! - [`MemoryCache`] - In-process map, the default backend
//! - [`RedisCache`] - External Redis server
//! - [`NullCache`] - No-op implementation for disabled caching

mod memory_cache;
mod null_cache;
mod redis_cache;
mod service;

pub use memory_cache::MemoryCache;
pub use null_cache::NullCache;
pub use redis_cache::{DEFAULT_KEY_PREFIX, RedisCache};
pub use service::{CacheError, CacheResult, CacheStorage, CacheStorageExt};
