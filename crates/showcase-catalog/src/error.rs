//! Catalog error types.

use thiserror::Error;

/// Errors raised by catalog operations.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// A record violates the listing data rules.
    #[error("Invalid product record {id}: {reason}")]
    InvalidRecord { id: String, reason: String },

    /// Currency is not a three-letter ISO code.
    #[error("Invalid currency code: {0:?}")]
    InvalidCurrencyCode(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for CatalogError {
    fn from(e: serde_json::Error) -> Self {
        CatalogError::Serialization(e.to_string())
    }
}
