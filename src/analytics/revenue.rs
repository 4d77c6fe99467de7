//! Revenue rollups
//!
//! Total revenue potential and the per-user value ranking.
//! Neither rollup is time filtered.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::domain::{Money, Wishlist};

/// Total wishlist value owned by one user
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserValue {
    pub user_id: String,
    pub total_value: Money,
}

/// Sum of price × quantity over every item of every wishlist
pub fn total_revenue_potential(wishlists: &[Wishlist]) -> Money {
    wishlists.iter().map(Wishlist::total_value).sum()
}

/// Rank users by the summed value of all their wishlists.
///
/// Ordered by `total_value` descending, ties by `user_id` ascending.
/// Users whose wishlists are all empty are ranked with a zero value.
/// The full ranking is returned; truncation is left to the caller.
pub fn top_users(wishlists: &[Wishlist]) -> Vec<UserValue> {
    let mut per_user: BTreeMap<&str, Money> = BTreeMap::new();
    for wishlist in wishlists {
        let total = per_user.entry(wishlist.user_id.as_str()).or_default();
        *total = *total + wishlist.total_value();
    }

    let mut ranking: Vec<UserValue> = per_user
        .into_iter()
        .map(|(user_id, total_value)| UserValue {
            user_id: user_id.to_string(),
            total_value,
        })
        .collect();
    ranking.sort_by(|a, b| b.total_value.cmp(&a.total_value));
    ranking
}
