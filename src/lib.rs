//! # Customer Cache
//!
//! A customer service whose cache is injected instead of reached through a
//! global. Any [`infrastructure::cache::CacheStorage`] can back it: an
//! in-process map, a Redis server, or nothing at all.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Customer entity and data source trait
//! - **Application Layer** ([`application`]) - [`CustomerService`] read-through caching
//! - **Infrastructure Layer** ([`infrastructure`]) - Cache backends and data source implementations
//!
//! ## Example
//!
//! ```ignore
//! let repository = Arc::new(InMemoryCustomerRepository::new());
//! let cache: Arc<dyn CacheStorage> = Arc::new(MemoryCache::new());
//! let service = CustomerService::new(repository, cache);
//!
//! let customers = service.get_all_customers().await?; // miss: fetch + store
//! let customers = service.get_all_customers().await?; // hit
//! ```
//!
//! ## Configuration
//!
//! The binary loads its configuration from environment variables via
//! [`config::Config`]. See [`config`] module for available options.

pub mod application;
pub mod bootstrap;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod telemetry;

pub use application::services::CustomerService;
pub use error::AppError;

/// Commonly used types for external consumers.
pub mod prelude {
    pub use crate::application::services::{ALL_CUSTOMERS_CACHE_KEY, CustomerService};
    pub use crate::domain::entities::Customer;
    pub use crate::domain::repositories::CustomerRepository;
    pub use crate::error::AppError;
    pub use crate::infrastructure::cache::{
        CacheError, CacheStorage, CacheStorageExt, MemoryCache, NullCache, RedisCache,
    };
    pub use crate::infrastructure::persistence::InMemoryCustomerRepository;
}
