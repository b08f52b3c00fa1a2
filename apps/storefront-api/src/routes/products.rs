//! # Catalog Routes
//!
//! Read-only views over the product list.
//!
//! ## Available Routes
//! - `GET /products?category=&q=&limit=` - Browse or search
//! - `GET /products/featured` - Discounted or highly rated products
//! - `GET /products/{id}` - Single product with reviews
//! - `GET /categories` - Category tabs with product counts

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;
use spirit_core::catalog::CategorySummary;
use spirit_core::validation::validate_search_query;
use spirit_core::{Category, Product};
use tracing::debug;

use crate::error::ApiError;
use crate::state::AppState;

/// Default number of products per listing.
const DEFAULT_LIMIT: usize = 50;

/// Hard cap on `limit`.
const MAX_LIMIT: usize = 100;

#[derive(Debug, Default, Deserialize)]
pub struct ProductQuery {
    pub category: Option<String>,
    pub q: Option<String>,
    pub limit: Option<usize>,
}

/// Lists products, optionally filtered by category and search text.
///
/// An unrecognised category yields an empty list rather than an error,
/// matching the storefront's category tabs.
pub async fn list_products(
    State(state): State<AppState>,
    Query(params): Query<ProductQuery>,
) -> Result<Json<Vec<Product>>, ApiError> {
    let limit = params.limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT);
    let query = validate_search_query(params.q.as_deref().unwrap_or(""))?;

    let category = match params.category.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(raw) => match raw.parse::<Category>() {
            Ok(category) => Some(category),
            Err(_) => {
                debug!(category = raw, "Unknown category requested");
                return Ok(Json(Vec::new()));
            }
        },
    };

    let products: Vec<Product> = state
        .catalog
        .search(&query, usize::MAX)
        .into_iter()
        .filter(|p| category.map_or(true, |c| p.category == c))
        .take(limit)
        .cloned()
        .collect();

    debug!(?category, query = %query, count = products.len(), "Listed products");
    Ok(Json(products))
}

pub async fn featured_products(State(state): State<AppState>) -> Json<Vec<Product>> {
    Json(state.catalog.featured_products().into_iter().cloned().collect())
}

pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<Product>, ApiError> {
    state
        .catalog
        .product_by_id(id)
        .cloned()
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Product", id))
}

pub async fn list_categories(State(state): State<AppState>) -> Json<Vec<CategorySummary>> {
    Json(state.catalog.category_summaries())
}
