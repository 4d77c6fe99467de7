//! Wishlist Admin Library
//!
//! Re-exports modules for integration testing and external use.

pub mod analytics;
pub mod api;
pub mod config;
pub mod domain;
pub mod store;

mod error;

pub use config::Config;
pub use error::{AppError, AppResult};
pub use domain::{Money, MoneyError, DomainError, TimeRange, TimeRangeOption};
pub use domain::{Wishlist, WishlistItem};
