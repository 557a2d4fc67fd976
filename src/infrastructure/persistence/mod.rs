//! Data source implementations of the domain repository traits.

mod in_memory_customer_repository;

pub use in_memory_customer_repository::InMemoryCustomerRepository;
