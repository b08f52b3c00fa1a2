//! # API Error Type
//!
//! Unified error type for HTTP handlers.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Storefront                         │
//! │                                                                         │
//! │  Handler ── Result<Json<T>, ApiError>                                   │
//! │     │                                                                   │
//! │     ├── CoreError::ProductNotFound ─────► 404 NOT_FOUND                 │
//! │     ├── ValidationError ────────────────► 400 VALIDATION_ERROR          │
//! │     ├── CoreError::ProductUnavailable ──► 409 UNAVAILABLE               │
//! │     ├── CoreError::CartTooLarge ────────► 422 CART_ERROR                │
//! │     ├── AgeGateError::Underage ─────────► 403 AGE_GATE_BLOCKED          │
//! │     └── anything unexpected ────────────► 500 INTERNAL                  │
//! │                                                                         │
//! │  Body is always: { "code": "NOT_FOUND", "message": "Product not ..." } │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use spirit_core::age_gate::AgeGateError;
use spirit_core::{CoreError, ValidationError};

/// API error returned from handlers.
///
/// ## Serialization
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Product not found: 42"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Resource not found (404)
    NotFound,

    /// Input validation failed (400)
    ValidationError,

    /// Product is out of stock (409)
    Unavailable,

    /// Cart limit or state violation (422)
    CartError,

    /// Visitor is under the minimum age (403)
    AgeGateBlocked,

    /// Internal server error (500)
    Internal,
}

impl ErrorCode {
    pub fn status(self) -> StatusCode {
        match self {
            ErrorCode::NotFound => StatusCode::NOT_FOUND,
            ErrorCode::ValidationError => StatusCode::BAD_REQUEST,
            ErrorCode::Unavailable => StatusCode::CONFLICT,
            ErrorCode::CartError => StatusCode::UNPROCESSABLE_ENTITY,
            ErrorCode::AgeGateBlocked => StatusCode::FORBIDDEN,
            ErrorCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: impl std::fmt::Display) -> Self {
        ApiError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }

    /// Creates a cart error.
    pub fn cart(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::CartError, message)
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ProductNotFound(id) => ApiError::not_found("Product", id),
            CoreError::NotInCart(_) => ApiError::new(ErrorCode::NotFound, err.to_string()),
            CoreError::ProductUnavailable { .. } => {
                ApiError::new(ErrorCode::Unavailable, err.to_string())
            }
            CoreError::CartTooLarge { .. } | CoreError::QuantityTooLarge { .. } => {
                ApiError::cart(err.to_string())
            }
            CoreError::Validation(e) => e.into(),
            CoreError::InvalidCatalog { .. } => {
                // The catalog is checked at startup, so this is a server fault
                tracing::error!("Catalog error reached a handler: {}", err);
                ApiError::internal("Catalog is misconfigured")
            }
        }
    }
}

/// Converts validation errors to API errors.
impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}

impl From<AgeGateError> for ApiError {
    fn from(err: AgeGateError) -> Self {
        match err {
            AgeGateError::MissingBirthDate => ApiError::validation(err.to_string()),
            AgeGateError::Underage { .. } => ApiError::new(ErrorCode::AgeGateBlocked, err.to_string()),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}: {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.code.status(), Json(self)).into_response()
    }
}
