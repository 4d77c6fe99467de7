//! Wishlist Repository
//!
//! Holds the wishlist collection behind a shared lock.
//! Cloning the repository shares the same underlying data.

use std::collections::HashSet;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::{DomainError, Money, Wishlist};

use super::StoreError;

/// Shared in-memory wishlist collection
#[derive(Debug, Clone, Default)]
pub struct WishlistRepository {
    wishlists: Arc<RwLock<Vec<Wishlist>>>,
}

impl WishlistRepository {
    /// Create a repository from validated wishlists.
    ///
    /// # Errors
    /// - `StoreError::Invalid` if any wishlist breaks an item invariant
    /// - `StoreError::DuplicateWishlist` if two wishlists share an id
    /// - `StoreError::Invalid` if the value of the whole collection overflows
    pub fn new(mut wishlists: Vec<Wishlist>) -> Result<Self, StoreError> {
        {
            let mut ids = HashSet::with_capacity(wishlists.len());
            let mut collection_value = Money::zero();
            for wishlist in &wishlists {
                wishlist.validate()?;
                if !ids.insert(wishlist.id.as_str()) {
                    return Err(StoreError::DuplicateWishlist(wishlist.id.clone()));
                }
                // Every product, variant and user total is bounded by this sum.
                collection_value = collection_value
                    .checked_add(&wishlist.checked_total_value()?)
                    .map_err(DomainError::from)?;
            }
        }

        wishlists.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));

        Ok(Self {
            wishlists: Arc::new(RwLock::new(wishlists)),
        })
    }

    /// All wishlists, oldest first (ties by id)
    pub async fn list(&self) -> Vec<Wishlist> {
        self.wishlists.read().await.clone()
    }

    /// Copy of the current collection for analytics
    pub async fn snapshot(&self) -> Vec<Wishlist> {
        self.list().await
    }

    pub async fn len(&self) -> usize {
        self.wishlists.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.wishlists.read().await.is_empty()
    }

    /// Find a wishlist by id
    pub async fn get(&self, wishlist_id: &str) -> Option<Wishlist> {
        self.wishlists
            .read()
            .await
            .iter()
            .find(|wishlist| wishlist.id == wishlist_id)
            .cloned()
    }

    /// Remove a wishlist and return it
    pub async fn delete(&self, wishlist_id: &str) -> Result<Wishlist, StoreError> {
        let mut wishlists = self.wishlists.write().await;
        let position = wishlists
            .iter()
            .position(|wishlist| wishlist.id == wishlist_id)
            .ok_or_else(|| StoreError::NotFound(wishlist_id.to_string()))?;

        let removed = wishlists.remove(position);

        tracing::info!(
            wishlist_id = %removed.id,
            user_id = %removed.user_id,
            items = removed.items.len(),
            "Wishlist deleted"
        );

        Ok(removed)
    }
}
