//! API Routes
//!
//! HTTP endpoint definitions.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::analytics::{self, ProductStats, UserValue};
use crate::domain::{resolve_window, Money, TimeRange, TimeRangeOption, Wishlist};
use crate::error::{AppError, AppResult};

use super::AppState;

/// Upper bound for the `limit` query parameter of the summary
const MAX_TOP_USERS: usize = 100;

// =========================================================================
// Request/Response types
// =========================================================================

#[derive(Debug, Serialize, Deserialize)]
pub struct WishlistSummary {
    pub id: String,
    pub user_id: String,
    pub item_count: usize,
    pub total_value: Money,
    pub created_at: DateTime<Utc>,
    pub last_modified: DateTime<Utc>,
}

impl From<&Wishlist> for WishlistSummary {
    fn from(wishlist: &Wishlist) -> Self {
        Self {
            id: wishlist.id.clone(),
            user_id: wishlist.user_id.clone(),
            item_count: wishlist.items.len(),
            total_value: wishlist.total_value(),
            created_at: wishlist.created_at,
            last_modified: wishlist.last_modified,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ProductStatsQuery {
    /// "7d", "30d", "90d" or "all"
    #[serde(default)]
    pub range: Option<String>,
    /// Explicit window start; requires `end` and overrides `range`
    #[serde(default)]
    pub start: Option<DateTime<Utc>>,
    #[serde(default)]
    pub end: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize)]
pub struct ProductStatsResponse {
    /// Selector used, `None` when an explicit window was given
    pub range: Option<TimeRangeOption>,
    pub window: Option<TimeRange>,
    /// Days covered by every product's trend, present even with no products
    pub trend_days: Vec<NaiveDate>,
    pub products: Vec<ProductStats>,
}

#[derive(Debug, Deserialize)]
pub struct SummaryQuery {
    #[serde(default)]
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub total_revenue_potential: Money,
    pub total_wishlists: usize,
    pub top_users: Vec<UserValue>,
}

// =========================================================================
// API Router
// =========================================================================

/// Create the API router
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/wishlists", get(list_wishlists))
        .route(
            "/wishlists/:wishlist_id",
            get(get_wishlist).delete(delete_wishlist),
        )
        .route("/analytics/products", get(get_product_stats))
        .route("/analytics/summary", get(get_summary))
}

// =========================================================================
// GET /wishlists
// =========================================================================

/// List all wishlists with item counts and values
async fn list_wishlists(State(state): State<AppState>) -> Json<Vec<WishlistSummary>> {
    let wishlists = state.repository.list().await;
    Json(wishlists.iter().map(WishlistSummary::from).collect())
}

// =========================================================================
// GET /wishlists/:wishlist_id
// =========================================================================

/// Get a wishlist with all its items
async fn get_wishlist(
    State(state): State<AppState>,
    Path(wishlist_id): Path<String>,
) -> AppResult<Json<Wishlist>> {
    let wishlist = state.repository.get(&wishlist_id).await;
    wishlist
        .map(Json)
        .ok_or(AppError::WishlistNotFound(wishlist_id))
}

// =========================================================================
// DELETE /wishlists/:wishlist_id
// =========================================================================

/// Delete a wishlist
async fn delete_wishlist(
    State(state): State<AppState>,
    Path(wishlist_id): Path<String>,
) -> AppResult<StatusCode> {
    state.repository.delete(&wishlist_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// =========================================================================
// GET /analytics/products
// =========================================================================

/// Per-product statistics for the selected window
async fn get_product_stats(
    State(state): State<AppState>,
    Query(query): Query<ProductStatsQuery>,
) -> AppResult<Json<ProductStatsResponse>> {
    let now = state.clock.now();
    let (range, window) = select_window(&query, now)?;

    let wishlists = state.repository.snapshot().await;
    let products = analytics::aggregate_product_stats(&wishlists, window.as_ref(), now);
    let trend_days = analytics::trend_axis(&wishlists, window.as_ref(), now);

    Ok(Json(ProductStatsResponse {
        range,
        window,
        trend_days,
        products,
    }))
}

/// Resolve the query into a selector and a concrete window
fn select_window(
    query: &ProductStatsQuery,
    now: DateTime<Utc>,
) -> AppResult<(Option<TimeRangeOption>, Option<TimeRange>)> {
    match (query.start, query.end) {
        (Some(start), Some(end)) => Ok((None, Some(TimeRange::new(start, end)?))),
        (None, None) => {
            let option = match query.range.as_deref() {
                Some(raw) => raw.parse::<TimeRangeOption>()?,
                None => TimeRangeOption::default(),
            };
            Ok((Some(option), resolve_window(option, now)))
        }
        _ => Err(AppError::InvalidRequest(
            "start and end must be given together".to_string(),
        )),
    }
}

// =========================================================================
// GET /analytics/summary
// =========================================================================

/// Revenue potential and the top users by wishlist value
async fn get_summary(
    State(state): State<AppState>,
    Query(query): Query<SummaryQuery>,
) -> Json<SummaryResponse> {
    let limit = query
        .limit
        .unwrap_or(state.top_users_limit)
        .min(MAX_TOP_USERS);

    let wishlists = state.repository.snapshot().await;
    let mut top_users = analytics::top_users(&wishlists);
    top_users.truncate(limit);

    Json(SummaryResponse {
        total_revenue_potential: analytics::total_revenue_potential(&wishlists),
        total_wishlists: wishlists.len(),
        top_users,
    })
}
