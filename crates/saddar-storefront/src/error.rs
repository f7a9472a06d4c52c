//! Storefront error types.

use std::path::PathBuf;

use saddar_commerce::{CommerceError, ProductId};

/// Errors surfaced by the storefront.
///
/// AI failures are absorbed below this layer and never appear here.
#[derive(Debug, thiserror::Error)]
pub enum StorefrontError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    #[error("Failed to serialize config: {0}")]
    ConfigSerialize(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CommerceError),

    #[error("Unknown product: {0}")]
    UnknownProduct(ProductId),

    #[error("{0} is out of stock")]
    OutOfStock(String),

    #[error("Logging already initialised: {0}")]
    Logging(String),
}
