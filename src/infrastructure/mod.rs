//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer and the
//! cache abstraction injected into services.
//!
//! # Modules
//!
//! - [`cache`] - Cache storage abstraction (memory, Redis, and no-op implementations)
//! - [`persistence`] - Customer data source implementations

pub mod cache;
pub mod persistence;
