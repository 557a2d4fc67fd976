//! In-process customer data source.

use crate::domain::entities::Customer;
use crate::domain::repositories::CustomerRepository;
use crate::error::AppError;
use async_trait::async_trait;
use serde_json::json;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::{debug, info};

/// Customer repository holding its records in memory.
///
/// Empty unless seeded. Every call to [`CustomerRepository::get_customers`]
/// is counted so callers can observe whether a cache answered instead.
#[derive(Default)]
pub struct InMemoryCustomerRepository {
    customers: Vec<Customer>,
    fetches: AtomicUsize,
}

impl InMemoryCustomerRepository {
    /// Creates a repository with no customers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository seeded with `customers`, returned in the given order.
    pub fn with_customers(customers: Vec<Customer>) -> Self {
        Self {
            customers,
            fetches: AtomicUsize::new(0),
        }
    }

    /// Loads seed customers from a JSON array file.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the file cannot be read or is not a
    /// JSON array of customers.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let path = path.as_ref();

        let raw = std::fs::read_to_string(path).map_err(|e| {
            AppError::internal(
                "Failed to read customer seed file",
                json!({ "path": path.display().to_string(), "reason": e.to_string() }),
            )
        })?;

        let customers: Vec<Customer> = serde_json::from_str(&raw).map_err(|e| {
            AppError::internal(
                "Invalid customer seed file",
                json!({ "path": path.display().to_string(), "reason": e.to_string() }),
            )
        })?;

        info!(
            "Loaded {} customers from {}",
            customers.len(),
            path.display()
        );

        Ok(Self::with_customers(customers))
    }

    /// Number of times the data source has been queried.
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CustomerRepository for InMemoryCustomerRepository {
    async fn get_customers(&self) -> Result<Vec<Customer>, AppError> {
        let fetch = self.fetches.fetch_add(1, Ordering::SeqCst) + 1;
        debug!(
            "Fetching {} customers from data source (fetch #{})",
            self.customers.len(),
            fetch
        );
        Ok(self.customers.clone())
    }
}
