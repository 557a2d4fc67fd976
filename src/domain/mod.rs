//! Domain layer containing business entities and data source contracts.
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependencies on infrastructure. Repository traits
//! are implemented in [`crate::infrastructure::persistence`].

pub mod entities;
pub mod repositories;
