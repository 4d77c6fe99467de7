//! Product statistics
//!
//! Folds a batch of wishlists into per-product, per-variant and per-day
//! statistics. Recomputed from scratch on every call.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap, HashSet};

use crate::domain::{Money, TimeRange, Wishlist, WishlistItem};

/// Aggregated statistics for one product
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductStats {
    pub product_id: String,
    /// Distinct wishlists holding at least one item of this product
    pub total_wishlists: usize,
    pub total_quantity: u64,
    pub total_value: Money,
    /// Ordered by `total_wishlists` descending, then `variant_id` ascending
    pub variants: Vec<VariantStats>,
    /// One point per calendar day of the active window
    pub trend: Vec<TrendPoint>,
}

/// Aggregated statistics for one product variant
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VariantStats {
    pub variant_id: String,
    pub total_wishlists: usize,
    pub total_quantity: u64,
    pub total_value: Money,
}

/// Number of items of a product added on one day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub count: u32,
}

/// Running totals for a product or a variant
#[derive(Debug, Default)]
struct Bucket<'a> {
    wishlists: HashSet<&'a str>,
    total_quantity: u64,
    total_value: Money,
}

impl<'a> Bucket<'a> {
    fn add(&mut self, wishlist_id: &'a str, item: &WishlistItem) {
        self.wishlists.insert(wishlist_id);
        self.total_quantity += u64::from(item.quantity);
        self.total_value = self.total_value + item.line_value();
    }
}

#[derive(Debug, Default)]
struct ProductBucket<'a> {
    totals: Bucket<'a>,
    variants: BTreeMap<&'a str, Bucket<'a>>,
    daily_counts: HashMap<NaiveDate, u32>,
}

/// Aggregate wishlists into product statistics.
///
/// With a `range`, only wishlists created inside it contribute and the trend
/// covers every day of the range. Without one, every wishlist contributes and
/// the trend runs from the earliest `created_at` up to `now`.
///
/// Products are ordered by `total_wishlists` descending; ties are broken by
/// `product_id` ascending.
pub fn aggregate_product_stats(
    wishlists: &[Wishlist],
    range: Option<&TimeRange>,
    now: DateTime<Utc>,
) -> Vec<ProductStats> {
    let mut products: BTreeMap<&str, ProductBucket<'_>> = BTreeMap::new();
    let mut considered = 0usize;

    let retained = wishlists
        .iter()
        .filter(|wishlist| range.map_or(true, |r| r.contains(wishlist.created_at)));

    for wishlist in retained {
        considered += 1;
        for item in &wishlist.items {
            let product = products.entry(item.product_id.as_str()).or_default();
            product.totals.add(&wishlist.id, item);
            product
                .variants
                .entry(item.product_variant_id.as_str())
                .or_default()
                .add(&wishlist.id, item);
            *product
                .daily_counts
                .entry(item.added_at.date_naive())
                .or_insert(0) += 1;
        }
    }

    let axis = trend_axis(wishlists, range, now);

    let mut stats: Vec<ProductStats> = products
        .into_iter()
        .map(|(product_id, bucket)| materialize(product_id, bucket, &axis))
        .collect();
    // Stable sort over id-ordered input keeps ties in ascending id order.
    stats.sort_by(|a, b| b.total_wishlists.cmp(&a.total_wishlists));

    tracing::debug!(
        wishlists = wishlists.len(),
        considered = considered,
        products = stats.len(),
        trend_days = axis.len(),
        "Aggregated product statistics"
    );

    stats
}

fn materialize(product_id: &str, bucket: ProductBucket<'_>, axis: &[NaiveDate]) -> ProductStats {
    let mut variants: Vec<VariantStats> = bucket
        .variants
        .into_iter()
        .map(|(variant_id, variant)| VariantStats {
            variant_id: variant_id.to_string(),
            total_wishlists: variant.wishlists.len(),
            total_quantity: variant.total_quantity,
            total_value: variant.total_value,
        })
        .collect();
    variants.sort_by(|a, b| b.total_wishlists.cmp(&a.total_wishlists));

    let trend = axis
        .iter()
        .map(|date| TrendPoint {
            date: *date,
            count: bucket.daily_counts.get(date).copied().unwrap_or(0),
        })
        .collect();

    ProductStats {
        product_id: product_id.to_string(),
        total_wishlists: bucket.totals.wishlists.len(),
        total_quantity: bucket.totals.total_quantity,
        total_value: bucket.totals.total_value,
        variants,
        trend,
    }
}

/// Calendar days (UTC) covered by the trend series.
///
/// - With a range: every day from `range.start` to `range.end`, inclusive.
/// - Without: from the earliest `created_at` in `wishlists` to `now`.
///   An empty batch yields the single day of `now`; an earliest
///   `created_at` after `now` yields that single day.
pub fn trend_axis(
    wishlists: &[Wishlist],
    range: Option<&TimeRange>,
    now: DateTime<Utc>,
) -> Vec<NaiveDate> {
    let (first, last) = match range {
        Some(range) => (range.start().date_naive(), range.end().date_naive()),
        None => {
            let today = now.date_naive();
            let first = wishlists
                .iter()
                .map(|wishlist| wishlist.created_at.date_naive())
                .min()
                .unwrap_or(today);
            (first, today.max(first))
        }
    };

    first.iter_days().take_while(|day| *day <= last).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use rust_decimal_macros::dec;

    fn day(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    fn price(value: rust_decimal::Decimal) -> Money {
        Money::new(value).unwrap()
    }

    fn wishlist(id: &str, created: DateTime<Utc>) -> Wishlist {
        Wishlist::new(id, format!("user_{id}"), created)
    }

    #[test]
    fn test_empty_input_yields_no_products() {
        let now = day(2024, 3, 10);
        assert!(aggregate_product_stats(&[], None, now).is_empty());
    }

    #[test]
    fn test_empty_input_axis_is_today() {
        let now = day(2024, 3, 10) + Duration::hours(13);
        assert_eq!(trend_axis(&[], None, now), vec![now.date_naive()]);
    }

    #[test]
    fn test_axis_without_range_runs_to_now() {
        let wishlists = [wishlist("1", day(2024, 3, 8)), wishlist("2", day(2024, 3, 9))];
        let axis = trend_axis(&wishlists, None, day(2024, 3, 10));
        let expected: Vec<NaiveDate> = (8..=10)
            .map(|d| NaiveDate::from_ymd_opt(2024, 3, d).unwrap())
            .collect();
        assert_eq!(axis, expected);
    }

    #[test]
    fn test_axis_with_future_data_is_single_day() {
        let wishlists = [wishlist("1", day(2024, 4, 1))];
        let axis = trend_axis(&wishlists, None, day(2024, 3, 10));
        assert_eq!(axis, vec![NaiveDate::from_ymd_opt(2024, 4, 1).unwrap()]);
    }

    #[test]
    fn test_axis_with_range_covers_partial_days() {
        let range = TimeRange::new(
            day(2024, 2, 1) + Duration::hours(18),
            day(2024, 2, 3) + Duration::hours(6),
        )
        .unwrap();
        let axis = trend_axis(&[], Some(&range), day(2030, 1, 1));
        assert_eq!(axis.len(), 3);
        assert_eq!(axis[0], NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
        assert_eq!(axis[2], NaiveDate::from_ymd_opt(2024, 2, 3).unwrap());
    }

    #[test]
    fn test_wishlist_counted_once_per_product() {
        let created = day(2024, 2, 1);
        let wishlists = [wishlist("1", created)
            .with_item(WishlistItem::new("a", "prod_1", "var_1", 1, price(dec!(10)), created))
            .with_item(WishlistItem::new("b", "prod_1", "var_2", 2, price(dec!(20)), created))
            .with_item(WishlistItem::new("c", "prod_1", "var_1", 3, price(dec!(10)), created))];

        let stats = aggregate_product_stats(&wishlists, None, created);
        assert_eq!(stats.len(), 1);
        let product = &stats[0];
        assert_eq!(product.total_wishlists, 1);
        assert_eq!(product.total_quantity, 6);
        assert_eq!(product.total_value.value(), dec!(80));

        let var_1 = product.variants.iter().find(|v| v.variant_id == "var_1").unwrap();
        assert_eq!(var_1.total_wishlists, 1);
        assert_eq!(var_1.total_quantity, 4);
    }

    #[test]
    fn test_trend_counts_items_not_quantity() {
        let created = day(2024, 2, 1);
        let wishlists = [
            wishlist("1", created)
                .with_item(WishlistItem::new("a", "prod_1", "var_1", 5, price(dec!(1)), created)),
            wishlist("2", created).with_item(WishlistItem::new(
                "b",
                "prod_1",
                "var_1",
                1,
                price(dec!(1)),
                day(2024, 2, 2),
            )),
        ];

        let stats = aggregate_product_stats(&wishlists, None, day(2024, 2, 3));
        let counts: Vec<u32> = stats[0].trend.iter().map(|p| p.count).collect();
        assert_eq!(counts, vec![1, 1, 0]);
    }

    #[test]
    fn test_ties_break_by_ascending_id() {
        let created = day(2024, 2, 1);
        let wishlists = [wishlist("1", created)
            .with_item(WishlistItem::new("a", "prod_b", "var_z", 1, price(dec!(1)), created))
            .with_item(WishlistItem::new("b", "prod_a", "var_y", 1, price(dec!(1)), created))
            .with_item(WishlistItem::new("c", "prod_b", "var_x", 1, price(dec!(1)), created))];

        let stats = aggregate_product_stats(&wishlists, None, created);
        let ids: Vec<&str> = stats.iter().map(|s| s.product_id.as_str()).collect();
        assert_eq!(ids, vec!["prod_a", "prod_b"]);

        let variants: Vec<&str> = stats[1].variants.iter().map(|v| v.variant_id.as_str()).collect();
        assert_eq!(variants, vec!["var_x", "var_z"]);
    }

    #[test]
    fn test_ordered_by_wishlist_count_before_id() {
        let created = day(2024, 2, 1);
        let wishlists = [
            wishlist("1", created)
                .with_item(WishlistItem::new("a", "prod_z", "var_z", 1, price(dec!(1)), created))
                .with_item(WishlistItem::new("b", "prod_z", "var_a", 5, price(dec!(1)), created)),
            wishlist("2", created)
                .with_item(WishlistItem::new("c", "prod_z", "var_z", 1, price(dec!(1)), created))
                .with_item(WishlistItem::new("d", "prod_a", "var_a", 9, price(dec!(1)), created)),
        ];

        let stats = aggregate_product_stats(&wishlists, None, created);
        let ids: Vec<&str> = stats.iter().map(|s| s.product_id.as_str()).collect();
        assert_eq!(ids, vec!["prod_z", "prod_a"]);
        assert_eq!(stats[0].total_wishlists, 2);
        assert_eq!(stats[1].total_wishlists, 1);

        // Quantity does not affect the order, only distinct wishlists do.
        let variants: Vec<(&str, usize)> = stats[0]
            .variants
            .iter()
            .map(|v| (v.variant_id.as_str(), v.total_wishlists))
            .collect();
        assert_eq!(variants, vec![("var_z", 2), ("var_a", 1)]);
    }

    #[test]
    fn test_range_filters_by_created_at() {
        let inside = day(2024, 2, 10);
        let outside = day(2024, 1, 10);
        let wishlists = [
            wishlist("1", inside)
                .with_item(WishlistItem::new("a", "prod_1", "var_1", 1, price(dec!(1)), inside)),
            wishlist("2", outside)
                .with_item(WishlistItem::new("b", "prod_2", "var_1", 1, price(dec!(1)), outside)),
        ];
        let range = TimeRange::new(day(2024, 2, 1), day(2024, 2, 28)).unwrap();

        let stats = aggregate_product_stats(&wishlists, Some(&range), day(2024, 3, 1));
        assert_eq!(stats.len(), 1);
        assert_eq!(stats[0].product_id, "prod_1");
        assert_eq!(stats[0].trend.len(), 28);
    }
}
