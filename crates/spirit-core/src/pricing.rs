//! # Pricing
//!
//! Derives the cart drawer's totals. Pure: no state, no side effects.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Subtotal      Σ price × quantity                        ₹2000.00       │
//! │  GST (18%)     subtotal × 1800 bps, half-up at paise      ₹360.00       │
//! │  Delivery      ₹0 if subtotal > ₹2000, else ₹50            ₹50.00       │
//! │  ────────────────────────────────────────────────────────────────       │
//! │  Total         subtotal + tax + delivery                 ₹2410.00       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The free-delivery comparison is strict: a subtotal of exactly ₹2000 still
//! pays the fee.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::cart::Cart;
use crate::money::Money;
use crate::types::{CartEntry, TaxRate};

/// GST applied to the storefront, in basis points.
pub const DEFAULT_TAX_RATE_BPS: u32 = 1800;

/// Subtotal (whole rupees) that must be exceeded for free delivery.
pub const DEFAULT_FREE_DELIVERY_THRESHOLD: i64 = 2000;

/// Flat delivery fee in whole rupees.
pub const DEFAULT_DELIVERY_FEE: i64 = 50;

/// The knobs behind the totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingPolicy {
    pub tax_rate: TaxRate,
    /// Delivery is free only when the subtotal is strictly greater.
    pub free_delivery_threshold: Money,
    pub delivery_fee: Money,
}

impl Default for PricingPolicy {
    fn default() -> Self {
        PricingPolicy {
            tax_rate: TaxRate::from_bps(DEFAULT_TAX_RATE_BPS),
            free_delivery_threshold: Money::from_rupees(DEFAULT_FREE_DELIVERY_THRESHOLD),
            delivery_fee: Money::from_rupees(DEFAULT_DELIVERY_FEE),
        }
    }
}

impl PricingPolicy {
    /// Fee charged on a given subtotal.
    pub fn delivery_fee_for(&self, subtotal: Money) -> Money {
        if subtotal > self.free_delivery_threshold {
            Money::zero()
        } else {
            self.delivery_fee
        }
    }

    /// Prices a set of cart lines.
    pub fn quote(&self, entries: &[CartEntry]) -> PriceBreakdown {
        let subtotal: Money = entries.iter().map(CartEntry::line_total).sum();
        let tax = subtotal.calculate_tax(self.tax_rate);
        let delivery_fee = self.delivery_fee_for(subtotal);

        PriceBreakdown {
            subtotal,
            tax,
            delivery_fee,
            total: subtotal + tax + delivery_fee,
        }
    }

    /// Prices a whole cart.
    ///
    /// ## Example
    /// ```rust
    /// use spirit_core::{cart::Cart, pricing::PricingPolicy};
    ///
    /// let totals = PricingPolicy::default().quote_cart(&Cart::new());
    /// assert_eq!(totals.total.to_string(), "₹50.00");
    /// ```
    pub fn quote_cart(&self, cart: &Cart) -> PriceBreakdown {
        self.quote(cart.entries())
    }
}

/// Derived totals for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PriceBreakdown {
    pub subtotal: Money,
    pub tax: Money,
    pub delivery_fee: Money,
    pub total: Money,
}

// =============================================================================
// Unit Tests
// =============================================================================
