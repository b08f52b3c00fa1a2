//! # Validation Module
//!
//! Input validation utilities for Neon Spirit Shoppe.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Storefront UI                                                │
//! │  ├── Disables "Check" while the pincode box is blank                   │
//! │  └── Clamps the cart "-" button at 1                                   │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: storefront-api (Rust)                                        │
//! │  ├── Type validation (deserialization)                                 │
//! │  └── THIS MODULE: Business rule validation                             │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Catalog load                                                 │
//! │  └── validate_product on every static entry                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use spirit_core::validation::{validate_postal_code, validate_quantity};
//!
//! validate_quantity(5).unwrap();
//! assert!(validate_postal_code("110023").is_ok());
//! assert!(validate_postal_code("11-023").is_err());
//! ```

use crate::error::ValidationError;
use crate::types::Product;
use crate::{MAX_CART_ITEMS, MAX_ITEM_QUANTITY};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Number of digits in an Indian pincode.
pub const POSTAL_CODE_LENGTH: usize = 6;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product display name.
///
/// ## Rules
/// - Must not be empty
/// - At most 200 characters
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > 200 {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: 200,
        });
    }

    Ok(())
}

/// Validates a search query.
///
/// ## Rules
/// - Can be empty (returns the first page of the catalog)
/// - Maximum 100 characters
///
/// ## Returns
/// The trimmed query string.
pub fn validate_search_query(query: &str) -> ValidationResult<String> {
    let query = query.trim();

    if query.chars().count() > 100 {
        return Err(ValidationError::TooLong {
            field: "query".to_string(),
            max: 100,
        });
    }

    Ok(query.to_string())
}

/// Validates a delivery pincode.
///
/// ## Rules
/// - Must not be blank
/// - Exactly six ASCII digits after trimming
///
/// ## Returns
/// The trimmed pincode.
///
/// ## Example
/// ```rust
/// use spirit_core::validation::validate_postal_code;
///
/// assert_eq!(validate_postal_code(" 560001 ").unwrap(), "560001");
/// assert!(validate_postal_code("").is_err());
/// assert!(validate_postal_code("5600").is_err());
/// ```
pub fn validate_postal_code(code: &str) -> ValidationResult<&str> {
    let code = code.trim();

    if code.is_empty() {
        return Err(ValidationError::Required {
            field: "pincode".to_string(),
        });
    }

    if code.len() != POSTAL_CODE_LENGTH || !code.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::InvalidFormat {
            field: "pincode".to_string(),
            reason: format!("must be exactly {} digits", POSTAL_CODE_LENGTH),
        });
    }

    Ok(code)
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a cart quantity.
///
/// ## Rules
/// - Must be positive (> 0); removal goes through `remove_from_cart`
/// - Must not exceed MAX_ITEM_QUANTITY
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Cart drawer: edit quantity                                             │
/// │                                                                         │
/// │  User types quantity: 5                                                │
/// │       │                                                                 │
/// │       ▼                                                                 │
/// │  validate_quantity(5) ← THIS FUNCTION                                  │
/// │       │                                                                 │
/// │       ├── qty <= 0?  → Error: "quantity must be positive"              │
/// │       │                                                                 │
/// │       ├── qty > 99?  → Error: "quantity must be between 1 and 99"      │
/// │       │                                                                 │
/// │       └── OK → Proceed with update_quantity                            │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if qty > MAX_ITEM_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_ITEM_QUANTITY,
        });
    }

    Ok(())
}

/// Validates a unit price in whole rupees. Free bottles are not a thing.
pub fn validate_price(rupees: i64) -> ValidationResult<()> {
    if rupees <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "price".to_string(),
        });
    }

    Ok(())
}

/// Validates an average rating in tenths (0 to 50).
pub fn validate_rating_tenths(tenths: u8) -> ValidationResult<()> {
    if tenths > 50 {
        return Err(ValidationError::OutOfRange {
            field: "rating".to_string(),
            min: 0,
            max: 50,
        });
    }

    Ok(())
}

/// Validates a review's star count (1 to 5).
pub fn validate_review_rating(stars: u8) -> ValidationResult<()> {
    if !(1..=5).contains(&stars) {
        return Err(ValidationError::OutOfRange {
            field: "review rating".to_string(),
            min: 1,
            max: 5,
        });
    }

    Ok(())
}

/// Validates a tax rate in basis points.
///
/// ## Rules
/// - Must be between 0 and 10000 (0% to 100%)
pub fn validate_tax_rate_bps(bps: u32) -> ValidationResult<()> {
    if bps > 10000 {
        return Err(ValidationError::OutOfRange {
            field: "tax_rate".to_string(),
            min: 0,
            max: 10000,
        });
    }

    Ok(())
}

// =============================================================================
// Composite Validators
// =============================================================================

/// Validates advertised discount data.
///
/// ## Rules
/// - Discount, when present, is 1-99%
/// - A discount needs an original price strictly above the current price
pub fn validate_discount(product: &Product) -> ValidationResult<()> {
    let Some(discount) = product.discount else {
        return Ok(());
    };

    if !(1..=99).contains(&discount) {
        return Err(ValidationError::OutOfRange {
            field: "discount".to_string(),
            min: 1,
            max: 99,
        });
    }

    match product.original_price {
        Some(original) if original > product.price => Ok(()),
        Some(_) => Err(ValidationError::InvalidFormat {
            field: "originalPrice".to_string(),
            reason: "must exceed the discounted price".to_string(),
        }),
        None => Err(ValidationError::Required {
            field: "originalPrice".to_string(),
        }),
    }
}

/// Validates a whole catalog entry, reviews included.
pub fn validate_product(product: &Product) -> ValidationResult<()> {
    validate_product_name(&product.name)?;
    validate_price(product.price)?;
    validate_rating_tenths(product.rating_tenths)?;
    validate_discount(product)?;

    for review in &product.reviews {
        validate_review_rating(review.rating)?;
    }

    Ok(())
}

// =============================================================================
// Collection Validators
// =============================================================================

/// Validates that one more distinct product fits in the cart.
pub fn validate_cart_size(current_items: usize) -> ValidationResult<()> {
    if current_items >= MAX_CART_ITEMS {
        return Err(ValidationError::OutOfRange {
            field: "cart items".to_string(),
            min: 0,
            max: MAX_CART_ITEMS as i64,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
