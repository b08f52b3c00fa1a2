//! # Age Gate Route
//!
//! `POST /age-gate` with `{ "birthDate": "YYYY-MM-DD" }`.
//!
//! The check is stateless: a passing response is not remembered, the client
//! decides whether to keep the gate closed.

use axum::extract::State;
use axum::Json;
use chrono::Local;
use serde::{Deserialize, Serialize};
use spirit_core::age_gate::{check_age, parse_birth_date};
use tracing::{debug, warn};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgeGateRequest {
    #[serde(default)]
    pub birth_date: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgeGateResponse {
    pub allowed: bool,
    pub age: u32,
}

pub async fn verify_age(
    State(state): State<AppState>,
    Json(request): Json<AgeGateRequest>,
) -> Result<Json<AgeGateResponse>, ApiError> {
    let birth = parse_birth_date(request.birth_date.as_deref().unwrap_or(""))?;
    let today = Local::now().date_naive();
    let minimum = state.config.age_gate.minimum_age;

    let age = check_age(birth, today, minimum).map_err(|e| {
        warn!(error = %e, "Age gate refused entry");
        ApiError::from(e)
    })?;

    debug!(age, "Age gate passed");
    Ok(Json(AgeGateResponse { allowed: true, age }))
}
