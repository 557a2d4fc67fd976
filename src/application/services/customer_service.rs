//! Customer listing service with an injected cache.

use std::sync::Arc;

use crate::domain::entities::Customer;
use crate::domain::repositories::CustomerRepository;
use crate::error::AppError;
use crate::infrastructure::cache::{CacheStorage, CacheStorageExt};
use tracing::debug;

/// Cache key under which the full customer list is stored.
pub const ALL_CUSTOMERS_CACHE_KEY: &str = "GetAllCustomers";

/// Service for reading customers through a cache.
///
/// Both collaborators are injected at construction: the repository is the
/// authoritative data source, the cache is any [`CacheStorage`]. Cached
/// entries never expire; they change only through
/// [`Self::invalidate_all_customers`] or [`Self::refresh_all_customers`].
pub struct CustomerService<R: CustomerRepository> {
    customer_repository: Arc<R>,
    cache: Arc<dyn CacheStorage>,
}

impl<R: CustomerRepository> CustomerService<R> {
    /// Creates a new customer service.
    pub fn new(customer_repository: Arc<R>, cache: Arc<dyn CacheStorage>) -> Self {
        Self {
            customer_repository,
            cache,
        }
    }

    /// Returns all customers, from cache when present.
    ///
    /// On a miss the list is fetched from the repository and stored under
    /// [`ALL_CUSTOMERS_CACHE_KEY`] before being returned. An empty list is
    /// cached like any other value. The result may be stale if the data
    /// source changed since it was cached.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Cache`] if the cached entry is not a customer list.
    /// Propagates repository errors on a miss.
    pub async fn get_all_customers(&self) -> Result<Vec<Customer>, AppError> {
        if let Some(cached) = self
            .cache
            .retrieve::<Vec<Customer>>(ALL_CUSTOMERS_CACHE_KEY)
            .await?
        {
            debug!("Serving {} customers from cache", cached.len());
            return Ok(cached);
        }

        self.fetch_and_store().await
    }

    /// Fetches from the repository unconditionally and overwrites the cached list.
    ///
    /// # Errors
    ///
    /// Propagates repository and cache errors.
    pub async fn refresh_all_customers(&self) -> Result<Vec<Customer>, AppError> {
        self.fetch_and_store().await
    }

    /// Drops the cached customer list so the next read goes to the repository.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Cache`] if the backend rejects the removal.
    pub async fn invalidate_all_customers(&self) -> Result<(), AppError> {
        self.cache.remove(ALL_CUSTOMERS_CACHE_KEY).await?;
        Ok(())
    }

    /// Name of the injected cache backend.
    pub fn cache_backend(&self) -> &'static str {
        self.cache.backend_name()
    }

    /// Reports whether the injected cache backend is reachable.
    pub async fn cache_healthy(&self) -> bool {
        self.cache.health_check().await
    }

    async fn fetch_and_store(&self) -> Result<Vec<Customer>, AppError> {
        let customers = self.customer_repository.get_customers().await?;
        debug!("Fetched {} customers from repository", customers.len());

        self.cache
            .store(ALL_CUSTOMERS_CACHE_KEY, &customers)
            .await?;

        Ok(customers)
    }
}
