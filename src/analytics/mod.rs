//! Analytics module
//!
//! Pure functions over an in-memory batch of wishlists.

mod product_stats;
mod revenue;

pub use product_stats::{
    aggregate_product_stats, trend_axis, ProductStats, TrendPoint, VariantStats,
};
pub use revenue::{top_users, total_revenue_potential, UserValue};
