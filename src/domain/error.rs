//! Domain Error Types
//!
//! Pure domain errors that don't depend on infrastructure.

use chrono::{DateTime, Utc};
use thiserror::Error;

use super::MoneyError;

/// Domain-specific errors
///
/// These errors represent malformed wishlist data or query parameters.
/// They are independent of the web/infrastructure layer.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// Time range whose start lies after its end
    #[error("Invalid time range: start {start} is after end {end}")]
    InvalidTimeRange {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },

    /// Unknown time range selector
    #[error("Unknown time range option: {0}")]
    UnknownRangeOption(String),

    /// Wishlist item with a zero quantity
    #[error("Item {item_id} in wishlist {wishlist_id} has zero quantity")]
    InvalidQuantity {
        wishlist_id: String,
        item_id: String,
    },

    /// Two items sharing one id inside a wishlist
    #[error("Duplicate item {item_id} in wishlist {wishlist_id}")]
    DuplicateItem {
        wishlist_id: String,
        item_id: String,
    },

    /// Invalid monetary value
    #[error(transparent)]
    Money(#[from] MoneyError),
}

impl DomainError {
    /// Create an invalid time range error
    pub fn invalid_time_range(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self::InvalidTimeRange { start, end }
    }
}
