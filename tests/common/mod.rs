//! Common test utilities

#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use rust_decimal::Decimal;
use wishlist_admin::domain::{Money, Wishlist, WishlistItem};

pub fn midnight(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap()
}

pub fn money(value: Decimal) -> Money {
    Money::new(value).unwrap()
}

/// The three-wishlist reference fixture
pub fn reference_wishlists() -> Vec<Wishlist> {
    let feb_1 = midnight(2024, 2, 1);
    let feb_15 = midnight(2024, 2, 15);
    let mar_1 = midnight(2024, 3, 1);

    vec![
        Wishlist::new("1", "user_1", feb_1)
            .with_item(WishlistItem::new("1", "prod_1", "var_1", 2, money(Decimal::new(9999, 2)), feb_1))
            .with_item(WishlistItem::new("2", "prod_2", "var_2", 1, money(Decimal::new(14999, 2)), feb_1)),
        Wishlist::new("2", "user_2", feb_15)
            .with_item(WishlistItem::new("3", "prod_1", "var_1", 1, money(Decimal::new(9999, 2)), feb_15))
            .with_item(WishlistItem::new("4", "prod_3", "var_3", 3, money(Decimal::new(19999, 2)), feb_15)),
        Wishlist::new("3", "user_3", mar_1)
            .with_item(WishlistItem::new("5", "prod_1", "var_2", 1, money(Decimal::new(12999, 2)), mar_1))
            .with_item(WishlistItem::new("6", "prod_2", "var_2", 2, money(Decimal::new(14999, 2)), mar_1)),
    ]
}

/// Wishlists where the most popular product and variant have the largest ids
pub fn popularity_fixture() -> Vec<Wishlist> {
    let feb_1 = midnight(2024, 2, 1);
    let feb_2 = midnight(2024, 2, 2);
    let one = money(Decimal::ONE);

    vec![
        Wishlist::new("1", "user_1", feb_1)
            .with_item(WishlistItem::new("1", "prod_z", "var_z", 1, one, feb_1))
            .with_item(WishlistItem::new("2", "prod_a", "var_a", 10, one, feb_1)),
        Wishlist::new("2", "user_2", feb_2)
            .with_item(WishlistItem::new("3", "prod_z", "var_z", 1, one, feb_2))
            .with_item(WishlistItem::new("4", "prod_z", "var_a", 1, one, feb_2)),
    ]
}
