//! Commerce error types.
//!
//! Only catalog loading can fail. Cart and filter operations are total.

use thiserror::Error;

/// Errors that can occur while building or loading a catalog.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Two products share an id.
    #[error("Duplicate product id: {0}")]
    DuplicateProductId(String),

    /// Product price is zero or negative.
    #[error("Invalid price for product {product_id}: {amount}")]
    InvalidPrice { product_id: String, amount: i64 },

    /// Unknown category label.
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in money calculation")]
    Overflow,

    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::SerializationError(e.to_string())
    }
}
