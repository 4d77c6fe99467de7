//! Wishlist Store module
//!
//! In-memory wishlist collection shared by the API handlers.
//! Seeded from a JSON file or the built-in sample data.

mod error;
mod repository;
pub mod seed;

pub use error::StoreError;
pub use repository::WishlistRepository;
