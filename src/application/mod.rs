//! Application layer services implementing business logic.
//!
//! Services consume repository traits and the injected cache storage, and
//! provide a clean API for callers.
//!
//! # Available Services
//!
//! - [`services::customer_service::CustomerService`] - Cached customer listing

pub mod services;
