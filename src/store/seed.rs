//! Seed data
//!
//! Built-in sample wishlists and loading wishlists from a JSON file.

use std::path::Path;

use chrono::{DateTime, TimeZone, Utc};
use rust_decimal::Decimal;

use crate::domain::{Money, Wishlist, WishlistItem};

use super::StoreError;

/// Load wishlists from a JSON array on disk
pub fn load_from_file(path: impl AsRef<Path>) -> Result<Vec<Wishlist>, StoreError> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path).map_err(|source| StoreError::SeedIo {
        path: path.to_path_buf(),
        source,
    })?;

    let wishlists: Vec<Wishlist> = serde_json::from_str(&raw)?;
    for wishlist in &wishlists {
        wishlist.validate()?;
    }

    tracing::info!(path = %path.display(), count = wishlists.len(), "Loaded seed wishlists");

    Ok(wishlists)
}

fn midnight(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .unwrap_or_default()
}

fn price(cents: i64) -> Money {
    Money::new(Decimal::new(cents, 2)).unwrap_or_default()
}

/// Three sample wishlists used when no seed file is configured
pub fn sample_wishlists() -> Vec<Wishlist> {
    let feb_1 = midnight(2024, 2, 1);
    let feb_15 = midnight(2024, 2, 15);
    let mar_1 = midnight(2024, 3, 1);

    vec![
        Wishlist::new("1", "user_1", feb_1)
            .with_item(WishlistItem::new("1", "prod_1", "var_1", 2, price(9999), feb_1))
            .with_item(WishlistItem::new("2", "prod_2", "var_2", 1, price(14999), feb_1)),
        Wishlist::new("2", "user_2", feb_15)
            .with_item(WishlistItem::new("3", "prod_1", "var_1", 1, price(9999), feb_15))
            .with_item(WishlistItem::new("4", "prod_3", "var_3", 3, price(19999), feb_15)),
        Wishlist::new("3", "user_3", mar_1)
            .with_item(WishlistItem::new("5", "prod_1", "var_2", 1, price(12999), mar_1))
            .with_item(WishlistItem::new("6", "prod_2", "var_2", 2, price(14999), mar_1)),
    ]
}
