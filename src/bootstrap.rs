//! Wiring of the data source and cache into [`CustomerService`].

use crate::application::services::CustomerService;
use crate::config::{CacheBackend, Config};
use crate::infrastructure::cache::{CacheStorage, MemoryCache, NullCache, RedisCache};
use crate::infrastructure::persistence::InMemoryCustomerRepository;

use anyhow::{Context, Result};
use std::sync::Arc;

/// Builds the cache selected by `config.cache_backend`.
///
/// A Redis backend that cannot be reached falls back to [`MemoryCache`].
pub async fn build_cache(config: &Config) -> Arc<dyn CacheStorage> {
    match config.cache_backend {
        CacheBackend::Memory => {
            tracing::info!("Cache enabled (memory)");
            Arc::new(MemoryCache::new())
        }
        CacheBackend::Redis => {
            let Some(redis_url) = config.redis_url.as_deref() else {
                tracing::warn!("Redis backend selected without a URL. Using MemoryCache.");
                return Arc::new(MemoryCache::new());
            };

            match RedisCache::connect(redis_url, config.cache_key_prefix.clone()).await {
                Ok(redis) => {
                    tracing::info!("Cache enabled (Redis)");
                    Arc::new(redis)
                }
                Err(e) => {
                    tracing::warn!("Failed to connect to Redis: {}. Using MemoryCache.", e);
                    Arc::new(MemoryCache::new())
                }
            }
        }
        CacheBackend::None => {
            tracing::info!("Cache disabled (NullCache)");
            Arc::new(NullCache::new())
        }
    }
}

/// Builds the customer data source, seeded from `CUSTOMER_SEED_FILE` if set.
///
/// # Errors
///
/// Returns an error if the seed file cannot be loaded.
pub fn build_customer_repository(config: &Config) -> Result<InMemoryCustomerRepository> {
    match config.customer_seed_file {
        Some(ref path) => InMemoryCustomerRepository::from_json_file(path)
            .with_context(|| format!("Failed to load customers from {}", path.display())),
        None => Ok(InMemoryCustomerRepository::new()),
    }
}

/// Builds a [`CustomerService`] with the configured repository and cache injected.
///
/// The repository handle is returned too so callers can inspect fetch counts.
///
/// # Errors
///
/// Returns an error if the data source cannot be built.
pub async fn build_customer_service(
    config: &Config,
) -> Result<(
    CustomerService<InMemoryCustomerRepository>,
    Arc<InMemoryCustomerRepository>,
)> {
    let repository = Arc::new(build_customer_repository(config)?);
    let cache = build_cache(config).await;

    Ok((CustomerService::new(repository.clone(), cache), repository))
}
