//! Domain module
//!
//! Core domain types: wishlists, money and time windows.

pub mod error;
pub mod money;
pub mod time_range;
pub mod wishlist;

pub use error::DomainError;
pub use money::{Money, MoneyError};
pub use time_range::{resolve_window, TimeRange, TimeRangeOption};
pub use wishlist::{Wishlist, WishlistItem};
