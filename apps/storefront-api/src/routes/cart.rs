//! # Cart Routes
//!
//! HTTP commands for the cart drawer.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐                        │
//! │  │  POST    │────►│ In Cart  │────►│  DELETE  │                        │
//! │  │  /carts  │     │          │     │ /carts/id│                        │
//! │  └──────────┘     └──────────┘     └──────────┘                        │
//! │                        │                                                │
//! │                   add_item                                              │
//! │                   update_item / increment / decrement                   │
//! │                   remove_item                                           │
//! │                        │                                                │
//! │                        ▼                                                │
//! │                   clear_cart ──────────► (back to empty)                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every successful command answers with the full [`CartResponse`], so the
//! drawer never has to recompute totals itself.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use spirit_core::{Cart, CoreResult};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::{AppState, CartResponse};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddItemRequest {
    pub product_id: u32,
}

#[derive(Debug, Deserialize)]
pub struct UpdateQuantityRequest {
    pub quantity: i64,
}

/// Runs a cart mutation and snapshots the result under the same lock.
fn mutate<F>(state: &AppState, cart_id: Uuid, f: F) -> Result<Json<CartResponse>, ApiError>
where
    F: FnOnce(&mut Cart) -> CoreResult<()>,
{
    let pricing = state.pricing;
    state
        .carts
        .with_cart_mut(cart_id, |cart| -> CoreResult<CartResponse> {
            f(cart)?;
            Ok(CartResponse::new(cart_id, cart, &pricing))
        })
        .ok_or_else(|| ApiError::not_found("Cart", cart_id))?
        .map(Json)
        .map_err(|e| {
            warn!(cart_id = %cart_id, error = %e, "Cart command rejected");
            ApiError::from(e)
        })
}

pub async fn create_cart(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<CartResponse>), ApiError> {
    let cart_id = state.carts.create().ok_or_else(|| {
        warn!("Cart session limit reached");
        ApiError::cart("Too many open carts, try again later")
    })?;

    let response = CartResponse::new(cart_id, &Cart::new(), &state.pricing);
    Ok((StatusCode::CREATED, Json(response)))
}

pub async fn get_cart(
    State(state): State<AppState>,
    Path(cart_id): Path<Uuid>,
) -> Result<Json<CartResponse>, ApiError> {
    debug!(cart_id = %cart_id, "get_cart");
    state
        .carts
        .with_cart(cart_id, |cart| CartResponse::new(cart_id, cart, &state.pricing))
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Cart", cart_id))
}

pub async fn delete_cart(
    State(state): State<AppState>,
    Path(cart_id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    if state.carts.remove(cart_id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::not_found("Cart", cart_id))
    }
}

/// Adds one unit of a catalog product.
///
/// ## Behavior
/// - Unknown product: 404, cart unchanged
/// - Out-of-stock product: 409, cart unchanged
/// - Already in cart: quantity + 1
pub async fn add_item(
    State(state): State<AppState>,
    Path(cart_id): Path<Uuid>,
    Json(request): Json<AddItemRequest>,
) -> Result<Json<CartResponse>, ApiError> {
    debug!(cart_id = %cart_id, product_id = request.product_id, "add_item");

    let product = state.catalog.require(request.product_id)?;

    mutate(&state, cart_id, |cart| cart.add_to_cart(product))
}

pub async fn update_item(
    State(state): State<AppState>,
    Path((cart_id, product_id)): Path<(Uuid, u32)>,
    Json(request): Json<UpdateQuantityRequest>,
) -> Result<Json<CartResponse>, ApiError> {
    debug!(cart_id = %cart_id, product_id, quantity = request.quantity, "update_item");
    mutate(&state, cart_id, |cart| {
        cart.update_quantity(product_id, request.quantity)
    })
}

pub async fn increment_item(
    State(state): State<AppState>,
    Path((cart_id, product_id)): Path<(Uuid, u32)>,
) -> Result<Json<CartResponse>, ApiError> {
    debug!(cart_id = %cart_id, product_id, "increment_item");
    mutate(&state, cart_id, |cart| cart.increment(product_id))
}

/// Never drops below one; use `remove_item` to take a line out.
pub async fn decrement_item(
    State(state): State<AppState>,
    Path((cart_id, product_id)): Path<(Uuid, u32)>,
) -> Result<Json<CartResponse>, ApiError> {
    debug!(cart_id = %cart_id, product_id, "decrement_item");
    mutate(&state, cart_id, |cart| cart.decrement(product_id))
}

/// Removing a product that is not in the cart is a no-op.
pub async fn remove_item(
    State(state): State<AppState>,
    Path((cart_id, product_id)): Path<(Uuid, u32)>,
) -> Result<Json<CartResponse>, ApiError> {
    mutate(&state, cart_id, |cart| {
        let removed = cart.remove_from_cart(product_id);
        debug!(cart_id = %cart_id, product_id, removed, "remove_item");
        Ok(())
    })
}

pub async fn clear_cart(
    State(state): State<AppState>,
    Path(cart_id): Path<Uuid>,
) -> Result<Json<CartResponse>, ApiError> {
    debug!(cart_id = %cart_id, "clear_cart");
    mutate(&state, cart_id, |cart| {
        cart.clear();
        Ok(())
    })
}
