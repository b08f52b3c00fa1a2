//! # Error Types
//!
//! Domain-specific error types for spirit-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  spirit-core errors (this file)                                        │
//! │  ├── CoreError        - Catalog and cart rule violations               │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  age_gate::AgeGateError - Gate refusals (user-facing messages)         │
//! │                                                                         │
//! │  storefront-api errors (separate crate)                                │
//! │  └── ApiError         - What the UI sees (serialized)                  │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → UI                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! "Not found" for plain lookups is an `Option::None`, never an error.
//! `ProductNotFound` comes from `Catalog::require`, used when an id must
//! resolve as part of a larger operation (adding to a cart by id).

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// No product with this id in the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(u32),

    /// Product is out of stock and cannot be added to a cart.
    ///
    /// ## User Workflow
    /// ```text
    /// Click "Add to Cart" on an out-of-stock bottle
    ///      │
    ///      ▼
    /// ProductUnavailable { id: 9, name: "Haywards 5000" }
    ///      │
    ///      ▼
    /// UI shows: "Haywards 5000 is currently unavailable"
    /// ```
    #[error("{name} is currently unavailable")]
    ProductUnavailable { id: u32, name: String },

    /// The cart has no entry for this product.
    #[error("Product {0} is not in the cart")]
    NotInCart(u32),

    /// Cart has exceeded maximum allowed distinct products.
    #[error("Cart cannot have more than {max} items")]
    CartTooLarge { max: usize },

    /// Item quantity exceeds maximum allowed.
    #[error("Quantity {requested} exceeds maximum allowed ({max})")]
    QuantityTooLarge { requested: i64, max: i64 },

    /// Catalog data failed validation at load time.
    #[error("Invalid catalog entry {id}: {source}")]
    InvalidCatalog {
        id: u32,
        #[source]
        source: ValidationError,
    },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g. malformed pincode or date).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Duplicate value (e.g. duplicate product id).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
