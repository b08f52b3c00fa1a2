//! # Domain Types
//!
//! Core domain types used throughout Neon Spirit Shoppe.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │    CartEntry    │   │ ServiceableArea │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (u32)       │   │  product (snap) │   │  prefix "110"   │       │
//! │  │  price (₹)      │   │  quantity ≥ 1   │   │  area           │       │
//! │  │  category       │   └─────────────────┘   │  eta_range      │       │
//! │  │  reviews[]  ──┐ │                         └─────────────────┘       │
//! │  └───────────────┼─┘                                                   │
//! │                  ▼                                                      │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │     Review      │   │    Category     │   │    TaxRate      │       │
//! │  │  rating 1-5     │   │  Rum / Vodka    │   │  bps (u32)      │       │
//! │  │  date           │   │  Beer / Trad.   │   │  1800 = 18%     │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::ValidationError;
use crate::money::Money;

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 1800 bps = 18% (GST on the storefront)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Creates a tax rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Zero tax rate.
    #[inline]
    pub const fn zero() -> Self {
        TaxRate(0)
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        TaxRate::zero()
    }
}

// =============================================================================
// Category
// =============================================================================

/// The fixed set of product categories.
///
/// Declaration order is the order categories are listed in the storefront.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Rum,
    Vodka,
    Beer,
    Traditional,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 4] = [
        Category::Rum,
        Category::Vodka,
        Category::Beer,
        Category::Traditional,
    ];

    /// Lowercase identifier used in URLs and JSON.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Category::Rum => "rum",
            Category::Vodka => "vodka",
            Category::Beer => "beer",
            Category::Traditional => "traditional",
        }
    }

    /// Title-case label for headings.
    pub const fn label(&self) -> &'static str {
        match self {
            Category::Rum => "Rum",
            Category::Vodka => "Vodka",
            Category::Beer => "Beer",
            Category::Traditional => "Traditional",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ValidationError;

    /// Parses exactly the lowercase identifiers; no aliases.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| ValidationError::InvalidFormat {
                field: "category".to_string(),
                reason: format!("unknown category '{}'", s),
            })
    }
}

// =============================================================================
// Review
// =============================================================================

/// A customer review, owned by its product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: u32,
    /// Display name of the reviewer.
    pub author: String,
    /// Star rating, 1 to 5.
    pub rating: u8,
    pub comment: String,
    #[ts(as = "String")]
    pub date: NaiveDate,
}

// =============================================================================
// Product
// =============================================================================

/// A bottle (or can) in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier.
    pub id: u32,

    /// Display name.
    pub name: String,

    pub brand: String,

    /// Unit price in whole rupees.
    pub price: i64,

    pub category: Category,

    /// Alcohol-content label, e.g. "42.8%".
    pub alcohol: String,

    /// Volume label, e.g. "750ml".
    pub volume: String,

    pub description: String,

    /// Average rating in tenths of a star (45 = 4.5).
    ///
    /// Stored as an integer so the featured threshold is an exact comparison.
    pub rating_tenths: u8,

    /// Whether the product can currently be added to a cart.
    pub availability: bool,

    /// Discount in whole percent, if the product is on offer.
    pub discount: Option<u8>,

    /// Pre-discount unit price in whole rupees.
    pub original_price: Option<i64>,

    pub reviews: Vec<Review>,
}

impl Product {
    /// Returns the unit price as Money.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_rupees(self.price)
    }
}

// =============================================================================
// Cart Entry
// =============================================================================

/// A line in the cart.
///
/// Holds a snapshot of the product as it was when first added, so the cart
/// keeps displaying consistent data even if the catalog is swapped out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartEntry {
    pub product: Product,
    /// Always ≥ 1.
    pub quantity: i64,
}

impl CartEntry {
    /// Unit price × quantity.
    pub fn line_total(&self) -> Money {
        self.product.unit_price().multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Serviceable Area
// =============================================================================

/// A delivery zone keyed by the first three digits of a pincode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceableArea {
    /// Three-character pincode prefix.
    pub prefix: &'static str,
    pub area: &'static str,
    /// Free-text delivery window, e.g. "30-45 mins".
    pub eta_range: &'static str,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tax_rate_from_bps() {
        let rate = TaxRate::from_bps(1800);
        assert_eq!(rate.bps(), 1800);
    }

    #[test]
    fn test_category_round_trip_names() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>().unwrap(), category);
        }
        assert!("Rum".parse::<Category>().is_err());
        assert!("whisky".parse::<Category>().is_err());
    }

    #[test]
    fn test_category_serializes_lowercase() {
        let json = serde_json::to_string(&Category::Traditional).unwrap();
        assert_eq!(json, "\"traditional\"");
    }

    #[test]
    fn test_product_json_shape() {
        let product = Product {
            id: 1,
            name: "Old Monk".to_string(),
            brand: "Old Monk".to_string(),
            price: 850,
            category: Category::Rum,
            alcohol: "42.8%".to_string(),
            volume: "750ml".to_string(),
            description: String::new(),
            rating_tenths: 48,
            availability: true,
            discount: Some(15),
            original_price: Some(1000),
            reviews: vec![],
        };

        let value = serde_json::to_value(&product).unwrap();
        assert_eq!(value["originalPrice"], 1000);
        assert_eq!(value["ratingTenths"], 48);
        assert_eq!(value["category"], "rum");
        assert_eq!(product.unit_price(), Money::from_rupees(850));
    }
}
