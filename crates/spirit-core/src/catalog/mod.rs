//! # Catalog
//!
//! The read-only product list and every query the storefront runs against it.
//!
//! ## Queries
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Storefront section        Query                                        │
//! │  ─────────────────         ─────                                        │
//! │  "Featured Offers"   ───►  featured_products()                          │
//! │  Rum / Vodka / Beer  ───►  products_by_category(c)                      │
//! │  Product page        ───►  product_by_id(id)                            │
//! │  Header search box   ───►  search(q, limit)                             │
//! │  "Premium Categories"───►  category_summaries()                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All queries are linear scans in catalog order. With a dozen products there
//! is nothing to index or cache.

mod seed;

use std::collections::HashSet;

use serde::Serialize;
use ts_rs::TS;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::types::{Category, Product};
use crate::validation::validate_product;
use crate::FEATURED_MIN_RATING_TENTHS;

pub use seed::seed_products;

/// Product count for one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CategorySummary {
    pub category: Category,
    pub label: String,
    pub count: usize,
}

/// An immutable, validated product list.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Builds a catalog, validating every product.
    ///
    /// ## Errors
    /// - `InvalidCatalog` wrapping the first rule a product breaks
    /// - `InvalidCatalog` with `Duplicate` when two products share an id
    pub fn new(products: Vec<Product>) -> CoreResult<Self> {
        let mut seen = HashSet::with_capacity(products.len());

        for product in &products {
            validate_product(product).map_err(|source| CoreError::InvalidCatalog {
                id: product.id,
                source,
            })?;

            if !seen.insert(product.id) {
                return Err(CoreError::InvalidCatalog {
                    id: product.id,
                    source: ValidationError::Duplicate {
                        field: "id".to_string(),
                        value: product.id.to_string(),
                    },
                });
            }
        }

        Ok(Catalog { products })
    }

    /// The storefront's built-in catalog.
    ///
    /// ## Example
    /// ```rust
    /// use spirit_core::catalog::Catalog;
    ///
    /// let catalog = Catalog::builtin().unwrap();
    /// assert_eq!(catalog.len(), 11);
    /// ```
    pub fn builtin() -> CoreResult<Self> {
        Catalog::new(seed_products())
    }

    /// All products in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Products in one category, catalog order preserved.
    pub fn products_by_category(&self, category: Category) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.category == category)
            .collect()
    }

    /// Looks a product up by id.
    pub fn product_by_id(&self, id: u32) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Like [`product_by_id`](Self::product_by_id), for operations that
    /// cannot continue without the product.
    pub fn require(&self, id: u32) -> CoreResult<&Product> {
        self.product_by_id(id).ok_or(CoreError::ProductNotFound(id))
    }

    /// Products promoted on the home page.
    ///
    /// A product is featured if it carries a discount OR its rating is at
    /// least 4.2 stars. Recomputed on every call.
    pub fn featured_products(&self) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.discount.is_some() || p.rating_tenths >= FEATURED_MIN_RATING_TENTHS)
            .collect()
    }

    /// Case-insensitive substring search over name, brand and category.
    ///
    /// ## Behavior
    /// - Empty (or blank) query returns the first `limit` products
    /// - Results keep catalog order; there is no relevance ranking
    pub fn search(&self, query: &str, limit: usize) -> Vec<&Product> {
        let needle = query.trim().to_lowercase();

        self.products
            .iter()
            .filter(|p| {
                needle.is_empty()
                    || p.name.to_lowercase().contains(&needle)
                    || p.brand.to_lowercase().contains(&needle)
                    || p.category.as_str().contains(&needle)
            })
            .take(limit)
            .collect()
    }

    /// One summary per category, in category display order.
    pub fn category_summaries(&self) -> Vec<CategorySummary> {
        Category::ALL
            .into_iter()
            .map(|category| CategorySummary {
                category,
                label: category.label().to_string(),
                count: self.products.iter().filter(|p| p.category == category).count(),
            })
            .collect()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
