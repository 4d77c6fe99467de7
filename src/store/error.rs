//! Wishlist Store Errors
//!
//! Error types for wishlist store operations.

use std::path::PathBuf;

use crate::domain::DomainError;

/// Errors that can occur in the wishlist store
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Wishlist not found
    #[error("Wishlist not found: {0}")]
    NotFound(String),

    /// Two wishlists sharing one id
    #[error("Duplicate wishlist id: {0}")]
    DuplicateWishlist(String),

    /// Wishlist failed domain validation
    #[error("Invalid wishlist: {0}")]
    Invalid(#[from] DomainError),

    /// Seed file could not be read
    #[error("Failed to read seed file {path}: {source}")]
    SeedIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Seed file is not a JSON array of wishlists
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
