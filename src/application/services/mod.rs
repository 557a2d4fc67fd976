//! Business logic services for the application layer.

pub mod customer_service;

pub use customer_service::{ALL_CUSTOMERS_CACHE_KEY, CustomerService};
