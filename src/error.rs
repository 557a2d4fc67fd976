//! Crate-level error type returned by repositories and services.

use crate::infrastructure::cache::CacheError;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{message}")]
    Internal { message: String, details: Value },

    #[error(transparent)]
    Cache(#[from] CacheError),
}

impl AppError {
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// Stable machine-readable code for the error kind.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Internal { .. } => "internal_error",
            AppError::Cache(CacheError::TypeMismatch { .. }) => "cache_type_mismatch",
            AppError::Cache(_) => "cache_error",
        }
    }
}
