//! # State Module
//!
//! Shared application state handed to every axum handler.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────┐  ┌──────────────┐  ┌──────────────────┐              │
//! │  │   Catalog    │  │ CartSessions │  │ StorefrontConfig │              │
//! │  │              │  │              │  │                  │              │
//! │  │  Arc, read   │  │  Arc<Mutex<  │  │  Arc, read only  │              │
//! │  │  only        │  │  HashMap>>   │  │  + PricingPolicy │              │
//! │  └──────────────┘  └──────────────┘  └──────────────────┘              │
//! │                                                                         │
//! │  Cloning AppState is cheap: every field is shared.                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod cart;

use std::sync::Arc;

use spirit_core::{Catalog, CoreResult, PricingPolicy};

use crate::config::StorefrontConfig;

pub use cart::{CartResponse, CartSessions};

#[derive(Debug, Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub carts: CartSessions,
    pub pricing: PricingPolicy,
    pub config: Arc<StorefrontConfig>,
}

impl AppState {
    pub fn new(catalog: Catalog, config: StorefrontConfig) -> Self {
        AppState {
            catalog: Arc::new(catalog),
            carts: CartSessions::new(config.carts.max_sessions, config.cart_idle_timeout()),
            pricing: config.pricing_policy(),
            config: Arc::new(config),
        }
    }

    /// State backed by the built-in product list.
    pub fn with_builtin_catalog(config: StorefrontConfig) -> CoreResult<Self> {
        Ok(AppState::new(Catalog::builtin()?, config))
    }
}
