//! Wishlist records
//!
//! Wishlists and their line items as supplied by the wishlist store.
//! Analytics treat these as immutable inputs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::{DomainError, Money};

/// One line item inside a wishlist
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WishlistItem {
    pub id: String,
    pub quantity: u32,
    pub product_id: String,
    pub product_variant_id: String,
    pub price: Money,
    pub added_at: DateTime<Utc>,
    pub last_modified: DateTime<Utc>,
}

impl WishlistItem {
    /// Create an item added (and last modified) at `added_at`
    pub fn new(
        id: impl Into<String>,
        product_id: impl Into<String>,
        product_variant_id: impl Into<String>,
        quantity: u32,
        price: Money,
        added_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            quantity,
            product_id: product_id.into(),
            product_variant_id: product_variant_id.into(),
            price,
            added_at,
            last_modified: added_at,
        }
    }

    /// price × quantity
    pub fn line_value(&self) -> Money {
        self.price.times(self.quantity)
    }
}

/// A user-owned collection of items
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wishlist {
    pub id: String,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
    pub last_modified: DateTime<Utc>,
    #[serde(default)]
    pub items: Vec<WishlistItem>,
}

impl Wishlist {
    /// Create an empty wishlist created (and last modified) at `created_at`
    pub fn new(id: impl Into<String>, user_id: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            user_id: user_id.into(),
            created_at,
            last_modified: created_at,
            items: Vec::new(),
        }
    }

    pub fn with_item(mut self, item: WishlistItem) -> Self {
        self.items.push(item);
        self
    }

    /// Sum of line values over all items
    pub fn total_value(&self) -> Money {
        self.items.iter().map(WishlistItem::line_value).sum()
    }

    /// Sum of line values, failing if any line or the total overflows
    pub fn checked_total_value(&self) -> Result<Money, DomainError> {
        self.items.iter().try_fold(Money::zero(), |total, item| {
            let line = item.price.checked_times(item.quantity)?;
            Ok(total.checked_add(&line)?)
        })
    }

    /// Check item-level invariants.
    ///
    /// # Errors
    /// - `DomainError::InvalidQuantity` for an item with quantity 0
    /// - `DomainError::DuplicateItem` for two items sharing an id
    /// - `DomainError::Money` if a line value or the total overflows
    pub fn validate(&self) -> Result<(), DomainError> {
        let mut seen = HashSet::with_capacity(self.items.len());
        for item in &self.items {
            if item.quantity == 0 {
                return Err(DomainError::InvalidQuantity {
                    wishlist_id: self.id.clone(),
                    item_id: item.id.clone(),
                });
            }
            if !seen.insert(item.id.as_str()) {
                return Err(DomainError::DuplicateItem {
                    wishlist_id: self.id.clone(),
                    item_id: item.id.clone(),
                });
            }
        }
        self.checked_total_value()?;
        Ok(())
    }
}
