//! # spirit-core: Pure Business Logic for Neon Spirit Shoppe
//!
//! This crate holds every rule the storefront enforces, as pure functions
//! with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Neon Spirit Shoppe Architecture                     │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Storefront UI                                │   │
//! │  │   Age gate ──► Catalog ──► Cart drawer ──► Pincode checker      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ HTTP / JSON                            │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    storefront-api (axum)                        │   │
//! │  │    /products, /carts, /delivery, /age-gate                      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ spirit-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌──────────┐ ┌─────────┐ │   │
//! │  │   │ catalog │ │  cart   │ │ pricing │ │ delivery │ │age_gate │ │   │
//! │  │   └─────────┘ └─────────┘ └─────────┘ └──────────┘ └─────────┘ │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO CLOCK • NO NETWORK • PURE FUNCTIONS               │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Review, Category, CartEntry, ...)
//! - [`money`] - Money type in integer paise
//! - [`catalog`] - The read-only product list and its queries
//! - [`cart`] - Session cart store
//! - [`pricing`] - Subtotal, GST, delivery fee, total
//! - [`delivery`] - Pincode → serviceable area
//! - [`age_gate`] - 21+ entry check
//! - [`validation`] - Input validation
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use spirit_core::{cart::Cart, catalog::Catalog, pricing::PricingPolicy};
//!
//! let catalog = Catalog::builtin().unwrap();
//! let mut cart = Cart::new();
//! cart.add_to_cart(catalog.product_by_id(1).unwrap()).unwrap(); // Old Monk ₹850
//!
//! let totals = PricingPolicy::default().quote_cart(&cart);
//! assert_eq!(totals.tax.to_string(), "₹153.00");
//! assert_eq!(totals.total.to_string(), "₹1053.00");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod age_gate;
pub mod cart;
pub mod catalog;
pub mod delivery;
pub mod error;
pub mod money;
pub mod pricing;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::Cart;
pub use catalog::Catalog;
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use pricing::{PriceBreakdown, PricingPolicy};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum distinct products in a single cart.
pub const MAX_CART_ITEMS: usize = 50;

/// Maximum quantity of a single product in a cart.
///
/// ## Business Reason
/// Delivery partners carry a bounded load; 99 covers any party order.
pub const MAX_ITEM_QUANTITY: i64 = 99;

/// Minimum rating, in tenths of a star, for a product to be featured (4.2).
pub const FEATURED_MIN_RATING_TENTHS: u8 = 42;
