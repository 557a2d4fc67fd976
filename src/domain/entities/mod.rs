//! Core domain entities.
//!
//! Entities are plain data structures without business logic.
//!
//! - [`Customer`] - A customer record served by [`crate::application::services::CustomerService`]

pub mod customer;

pub use customer::Customer;
