//! Load Testing Tool
//!
//! Generates random wishlists and times the analytics over them.
//! Run with: cargo run --bin load_test --release -- --wishlists 5000

use std::time::Instant;

use chrono::{Duration, Utc};
use rand::Rng;
use rust_decimal::Decimal;

use wishlist_admin::analytics;
use wishlist_admin::domain::{resolve_window, Money, TimeRangeOption, Wishlist, WishlistItem};

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let wishlist_count: usize = args
        .iter()
        .position(|a| a == "--wishlists")
        .and_then(|i| args.get(i + 1))
        .and_then(|s| s.parse().ok())
        .unwrap_or(1000);

    println!("Load Test - Generating {} wishlists", wishlist_count);

    let now = Utc::now();
    let mut rng = rand::thread_rng();
    let mut item_count = 0usize;

    let wishlists: Vec<Wishlist> = (0..wishlist_count)
        .map(|i| -> anyhow::Result<Wishlist> {
            let created_at = now - Duration::minutes(rng.gen_range(0..180 * 24 * 60));
            let mut wishlist = Wishlist::new(
                i.to_string(),
                format!("user_{}", rng.gen_range(0..wishlist_count / 4 + 1)),
                created_at,
            );
            for j in 0..rng.gen_range(1..=8) {
                let price = Money::new(Decimal::new(rng.gen_range(100..100_000), 2))?;
                let added_at = created_at + Duration::minutes(rng.gen_range(0..7 * 24 * 60));
                wishlist = wishlist.with_item(WishlistItem::new(
                    format!("{}-{}", i, j),
                    format!("prod_{}", rng.gen_range(0..200)),
                    format!("var_{}", rng.gen_range(0..5)),
                    rng.gen_range(1..=5),
                    price,
                    added_at,
                ));
                item_count += 1;
            }
            Ok(wishlist)
        })
        .collect::<anyhow::Result<_>>()?;

    println!("Generated {} items", item_count);

    for option in TimeRangeOption::ALL {
        let window = resolve_window(option, now);
        let start = Instant::now();
        let stats = analytics::aggregate_product_stats(&wishlists, window.as_ref(), now);
        let elapsed = start.elapsed();
        println!(
            "aggregate [{:>3}]: {} products in {:.2}ms",
            option.as_str(),
            stats.len(),
            elapsed.as_secs_f64() * 1000.0
        );
    }

    let start = Instant::now();
    let revenue = analytics::total_revenue_potential(&wishlists);
    let users = analytics::top_users(&wishlists);
    let elapsed = start.elapsed();

    println!("\n=== Load Test Results ===");
    println!("Wishlists: {}", wishlist_count);
    println!("Items: {}", item_count);
    println!("Revenue potential: {}", revenue);
    println!("Ranked users: {}", users.len());
    println!("Rollups time: {:.2}ms", elapsed.as_secs_f64() * 1000.0);

    Ok(())
}
