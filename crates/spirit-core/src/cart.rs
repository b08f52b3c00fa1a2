//! # Cart
//!
//! The session-scoped shopping cart.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  UI Action               Operation               Cart Change            │
//! │  ─────────               ─────────               ───────────            │
//! │                                                                         │
//! │  "Add to Cart" ────────► add_to_cart() ────────► push or qty + 1       │
//! │                                                                         │
//! │  "+" button ───────────► increment() ──────────► qty + 1               │
//! │                                                                         │
//! │  "-" button ───────────► decrement() ──────────► max(1, qty - 1)       │
//! │                                                                         │
//! │  Quantity edit ────────► update_quantity() ────► qty = n  (n ≥ 1)      │
//! │                                                                         │
//! │  Trash icon ───────────► remove_from_cart() ───► entry dropped         │
//! │                                                                         │
//! │  Cart badge ───────────► item_count() ─────────► (read only)           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - At most one entry per product id (adding again increases quantity)
//! - 1 ≤ quantity ≤ MAX_ITEM_QUANTITY for every entry
//! - At most MAX_CART_ITEMS distinct entries
//! - A failed operation leaves the cart exactly as it was

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::types::{CartEntry, Product};
use crate::validation::{validate_cart_size, validate_quantity};
use crate::{MAX_CART_ITEMS, MAX_ITEM_QUANTITY};

/// An ordered collection of cart entries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    entries: Vec<CartEntry>,
}

impl Cart {
    /// Creates an empty cart.
    pub fn new() -> Self {
        Cart::default()
    }

    /// Adds one unit of a product.
    ///
    /// ## Behavior
    /// - Unavailable product: rejected, cart unchanged
    /// - Product already in cart: quantity + 1
    /// - Otherwise: appended with quantity 1
    ///
    /// ## Example
    /// ```rust
    /// use spirit_core::{cart::Cart, catalog::Catalog};
    ///
    /// let catalog = Catalog::builtin().unwrap();
    /// let old_monk = catalog.product_by_id(1).unwrap();
    ///
    /// let mut cart = Cart::new();
    /// cart.add_to_cart(old_monk).unwrap();
    /// cart.add_to_cart(old_monk).unwrap();
    ///
    /// assert_eq!(cart.line_count(), 1);
    /// assert_eq!(cart.item_count(), 2);
    /// ```
    pub fn add_to_cart(&mut self, product: &Product) -> CoreResult<()> {
        if !product.availability {
            warn!(product_id = product.id, "Rejected add of unavailable product");
            return Err(CoreError::ProductUnavailable {
                id: product.id,
                name: product.name.clone(),
            });
        }

        if let Some(entry) = self.entry_mut(product.id) {
            let new_qty = entry.quantity + 1;
            if new_qty > MAX_ITEM_QUANTITY {
                return Err(CoreError::QuantityTooLarge {
                    requested: new_qty,
                    max: MAX_ITEM_QUANTITY,
                });
            }
            entry.quantity = new_qty;
            debug!(product_id = product.id, quantity = new_qty, "Increased cart quantity");
            return Ok(());
        }

        validate_cart_size(self.entries.len())
            .map_err(|_| CoreError::CartTooLarge { max: MAX_CART_ITEMS })?;

        self.entries.push(CartEntry {
            product: product.clone(),
            quantity: 1,
        });
        debug!(product_id = product.id, "Added product to cart");
        Ok(())
    }

    /// Sets the quantity of an existing entry.
    ///
    /// ## Behavior
    /// - Quantity < 1: rejected (use `remove_from_cart` to drop a line)
    /// - Quantity > MAX_ITEM_QUANTITY: rejected
    /// - Product not in cart: `NotInCart`
    pub fn update_quantity(&mut self, product_id: u32, quantity: i64) -> CoreResult<()> {
        validate_quantity(quantity)?;

        let entry = self
            .entry_mut(product_id)
            .ok_or(CoreError::NotInCart(product_id))?;
        entry.quantity = quantity;
        Ok(())
    }

    /// The cart drawer's "+" button.
    pub fn increment(&mut self, product_id: u32) -> CoreResult<()> {
        let current = self.quantity_of(product_id).ok_or(CoreError::NotInCart(product_id))?;
        if current >= MAX_ITEM_QUANTITY {
            return Err(CoreError::QuantityTooLarge {
                requested: current + 1,
                max: MAX_ITEM_QUANTITY,
            });
        }
        self.update_quantity(product_id, current + 1)
    }

    /// The cart drawer's "-" button. Stops at 1; never removes the entry.
    pub fn decrement(&mut self, product_id: u32) -> CoreResult<()> {
        let current = self.quantity_of(product_id).ok_or(CoreError::NotInCart(product_id))?;
        self.update_quantity(product_id, (current - 1).max(1))
    }

    /// Removes the entry for a product.
    ///
    /// ## Returns
    /// `true` if an entry was removed. An absent id is a no-op.
    pub fn remove_from_cart(&mut self, product_id: u32) -> bool {
        let initial_len = self.entries.len();
        self.entries.retain(|e| e.product.id != product_id);
        self.entries.len() != initial_len
    }

    /// Empties the cart.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    /// Quantity of one product, if present.
    pub fn quantity_of(&self, product_id: u32) -> Option<i64> {
        self.entries
            .iter()
            .find(|e| e.product.id == product_id)
            .map(|e| e.quantity)
    }

    /// Total units across all entries (the header cart badge).
    pub fn item_count(&self) -> i64 {
        self.entries.iter().map(|e| e.quantity).sum()
    }

    /// Number of distinct products.
    pub fn line_count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn entry_mut(&mut self, product_id: u32) -> Option<&mut CartEntry> {
        self.entries.iter_mut().find(|e| e.product.id == product_id)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::error::ValidationError;
    use crate::types::Category;

    fn test_product(id: u32, price: i64) -> Product {
        Product {
            id,
            name: format!("Product {}", id),
            brand: "Test".to_string(),
            price,
            category: Category::Rum,
            alcohol: "40%".to_string(),
            volume: "750ml".to_string(),
            description: String::new(),
            rating_tenths: 40,
            availability: true,
            discount: None,
            original_price: None,
            reviews: vec![],
        }
    }

    #[test]
    fn test_add_same_product_twice_yields_one_entry() {
        let mut cart = Cart::new();
        let product = test_product(1, 1000);

        cart.add_to_cart(&product).unwrap();
        cart.add_to_cart(&product).unwrap();

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.quantity_of(1), Some(2));
    }

    #[test]
    fn test_add_unavailable_product_leaves_cart_unchanged() {
        let catalog = Catalog::builtin().unwrap();
        let mut cart = Cart::new();
        cart.add_to_cart(catalog.product_by_id(1).unwrap()).unwrap();
        let before = cart.clone();

        let haywards = catalog.product_by_id(9).unwrap();
        let err = cart.add_to_cart(haywards).unwrap_err();

        assert!(matches!(err, CoreError::ProductUnavailable { id: 9, .. }));
        assert_eq!(cart, before);
    }

    #[test]
    fn test_entries_keep_insertion_order() {
        let mut cart = Cart::new();
        cart.add_to_cart(&test_product(3, 100)).unwrap();
        cart.add_to_cart(&test_product(1, 100)).unwrap();
        cart.add_to_cart(&test_product(3, 100)).unwrap();

        let ids: Vec<u32> = cart.entries().iter().map(|e| e.product.id).collect();
        assert_eq!(ids, vec![3, 1]);
    }

    #[test]
    fn test_update_quantity() {
        let mut cart = Cart::new();
        cart.add_to_cart(&test_product(1, 100)).unwrap();

        cart.update_quantity(1, 7).unwrap();
        assert_eq!(cart.quantity_of(1), Some(7));
    }

    #[test]
    fn test_update_quantity_rejects_non_positive() {
        let mut cart = Cart::new();
        cart.add_to_cart(&test_product(1, 100)).unwrap();

        for bad in [0, -1] {
            let err = cart.update_quantity(1, bad).unwrap_err();
            assert!(matches!(
                err,
                CoreError::Validation(ValidationError::MustBePositive { .. })
            ));
        }
        assert_eq!(cart.quantity_of(1), Some(1));
    }

    #[test]
    fn test_update_quantity_rejects_above_cap() {
        let mut cart = Cart::new();
        cart.add_to_cart(&test_product(1, 100)).unwrap();

        assert!(cart.update_quantity(1, MAX_ITEM_QUANTITY + 1).is_err());
        assert_eq!(cart.quantity_of(1), Some(1));
    }

    #[test]
    fn test_update_quantity_missing_product() {
        let mut cart = Cart::new();
        assert!(matches!(
            cart.update_quantity(42, 2),
            Err(CoreError::NotInCart(42))
        ));
    }

    #[test]
    fn test_decrement_clamps_at_one() {
        let mut cart = Cart::new();
        cart.add_to_cart(&test_product(1, 100)).unwrap();
        cart.increment(1).unwrap();
        assert_eq!(cart.quantity_of(1), Some(2));

        cart.decrement(1).unwrap();
        cart.decrement(1).unwrap();
        assert_eq!(cart.quantity_of(1), Some(1));
        assert_eq!(cart.line_count(), 1);
    }

    #[test]
    fn test_increment_stops_at_cap() {
        let mut cart = Cart::new();
        cart.add_to_cart(&test_product(1, 100)).unwrap();
        cart.update_quantity(1, MAX_ITEM_QUANTITY).unwrap();

        assert!(matches!(
            cart.increment(1),
            Err(CoreError::QuantityTooLarge { .. })
        ));
        assert!(cart.add_to_cart(&test_product(1, 100)).is_err());
        assert_eq!(cart.quantity_of(1), Some(MAX_ITEM_QUANTITY));
    }

    #[test]
    fn test_remove_nonexistent_is_noop() {
        let mut cart = Cart::new();
        cart.add_to_cart(&test_product(1, 100)).unwrap();
        let before = cart.clone();

        assert!(!cart.remove_from_cart(99));
        assert_eq!(cart, before);

        assert!(cart.remove_from_cart(1));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_item_count_sums_quantities() {
        let mut cart = Cart::new();
        cart.add_to_cart(&test_product(1, 100)).unwrap();
        cart.add_to_cart(&test_product(2, 100)).unwrap();
        cart.update_quantity(2, 4).unwrap();

        assert_eq!(cart.item_count(), 5);
        assert_eq!(cart.line_count(), 2);

        cart.clear();
        assert_eq!(cart.item_count(), 0);
    }

    #[test]
    fn test_cart_size_cap() {
        let mut cart = Cart::new();
        for id in 0..MAX_CART_ITEMS as u32 {
            cart.add_to_cart(&test_product(id + 1, 100)).unwrap();
        }

        let err = cart
            .add_to_cart(&test_product(MAX_CART_ITEMS as u32 + 1, 100))
            .unwrap_err();
        assert!(matches!(err, CoreError::CartTooLarge { .. }));
        assert_eq!(cart.line_count(), MAX_CART_ITEMS);
    }
}
