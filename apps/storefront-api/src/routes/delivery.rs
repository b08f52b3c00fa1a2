//! # Delivery Routes
//!
//! `GET /delivery/{postal_code}` backs the pincode checker.

use axum::extract::{Path, State};
use axum::Json;
use spirit_core::delivery::{check_postal_code, DeliveryCheck};
use tracing::debug;

use crate::error::ApiError;
use crate::state::AppState;

pub async fn check_delivery(
    State(state): State<AppState>,
    Path(postal_code): Path<String>,
) -> Result<Json<DeliveryCheck>, ApiError> {
    // Simulated lookup latency; suspends this request only.
    if let Some(delay) = state.config.delivery_delay() {
        tokio::time::sleep(delay).await;
    }

    let check = check_postal_code(&postal_code)?;
    debug!(
        postal_code = %postal_code.trim(),
        available = check.available,
        area = ?check.area,
        "Delivery check"
    );

    Ok(Json(check))
}
