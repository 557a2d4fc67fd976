//! Repository trait for customer data access.

use crate::domain::entities::Customer;
use crate::error::AppError;
use async_trait::async_trait;

/// Authoritative (uncached) source of customers.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::InMemoryCustomerRepository`] - In-process data source
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Returns all customers in data-source order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the data source cannot be read.
    async fn get_customers(&self) -> Result<Vec<Customer>, AppError>;
}
