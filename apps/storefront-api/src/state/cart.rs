//! # Cart Sessions
//!
//! One in-memory [`Cart`] per visitor, keyed by an opaque UUID.
//!
//! ## Thread Safety
//! Every session lives behind a single `Arc<Mutex<HashMap>>`. Handlers run
//! concurrently, but each cart mutation is a short, synchronous critical
//! section, so one lock is enough.
//!
//! ## Session Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  POST /carts ──────────► create() ──────► sessions.insert(id, Cart)     │
//! │                                                                         │
//! │  POST /carts/{id}/items ► with_cart_mut() ► cart.add_to_cart(product)   │
//! │                                                                         │
//! │  GET /carts/{id} ──────► with_cart() ─────► (read only)                 │
//! │                                                                         │
//! │  DELETE /carts/{id} ───► remove() ────────► sessions.remove(id)         │
//! │                                                                         │
//! │  Any access refreshes the cart. One left idle for `idle_timeout` is     │
//! │  dropped, so abandoned carts do not hold session slots forever.         │
//! │                                                                         │
//! │  Nothing is persisted: a restart empties every cart.                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use serde::Serialize;
use spirit_core::{Cart, CartEntry, PriceBreakdown, PricingPolicy};
use tokio::time::Instant;
use tracing::debug;
use uuid::Uuid;

/// Cart as returned by every `/carts` endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub cart_id: Uuid,
    pub items: Vec<CartEntry>,
    /// Sum of quantities (the header badge)
    pub item_count: i64,
    pub totals: PriceBreakdown,
}

impl CartResponse {
    pub fn new(cart_id: Uuid, cart: &Cart, pricing: &PricingPolicy) -> Self {
        CartResponse {
            cart_id,
            items: cart.entries().to_vec(),
            item_count: cart.item_count(),
            totals: pricing.quote_cart(cart),
        }
    }
}

/// A cart plus the last time any request touched it.
#[derive(Debug)]
struct Session {
    cart: Cart,
    last_touched: Instant,
}

impl Session {
    fn is_idle(&self, now: Instant, idle_timeout: Duration) -> bool {
        now.saturating_duration_since(self.last_touched) >= idle_timeout
    }
}

/// Open carts, shared across handlers.
#[derive(Debug, Clone)]
pub struct CartSessions {
    sessions: Arc<Mutex<HashMap<Uuid, Session>>>,
    max_sessions: usize,
    idle_timeout: Duration,
}

impl CartSessions {
    pub fn new(max_sessions: usize, idle_timeout: Duration) -> Self {
        CartSessions {
            sessions: Arc::new(Mutex::new(HashMap::new())),
            max_sessions,
            idle_timeout,
        }
    }

    // A panic mid-mutation leaves the map itself intact, so a poisoned lock
    // is still safe to use.
    fn lock(&self) -> MutexGuard<'_, HashMap<Uuid, Session>> {
        self.sessions.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn evict_idle(&self, sessions: &mut HashMap<Uuid, Session>) {
        let now = Instant::now();
        let before = sessions.len();
        sessions.retain(|_, s| !s.is_idle(now, self.idle_timeout));

        let evicted = before - sessions.len();
        if evicted > 0 {
            debug!(evicted, open = sessions.len(), "Evicted idle carts");
        }
    }

    /// Live session for `id`, refreshed. An idle one is dropped instead.
    fn touch<'a>(&self, sessions: &'a mut HashMap<Uuid, Session>, id: Uuid) -> Option<&'a mut Session> {
        let now = Instant::now();
        if sessions.get(&id)?.is_idle(now, self.idle_timeout) {
            sessions.remove(&id);
            debug!(cart_id = %id, "Cart expired");
            return None;
        }

        let session = sessions.get_mut(&id)?;
        session.last_touched = now;
        Some(session)
    }

    /// Opens an empty cart.
    ///
    /// Idle carts are evicted first when the session limit is reached.
    /// `None` only if every open cart is still in use.
    pub fn create(&self) -> Option<Uuid> {
        let mut sessions = self.lock();
        if sessions.len() >= self.max_sessions {
            self.evict_idle(&mut sessions);
            if sessions.len() >= self.max_sessions {
                return None;
            }
        }

        let id = Uuid::new_v4();
        sessions.insert(
            id,
            Session {
                cart: Cart::new(),
                last_touched: Instant::now(),
            },
        );
        debug!(cart_id = %id, open = sessions.len(), "Cart created");
        Some(id)
    }

    /// Executes a function with read access to a cart.
    pub fn with_cart<F, R>(&self, id: Uuid, f: F) -> Option<R>
    where
        F: FnOnce(&Cart) -> R,
    {
        let mut sessions = self.lock();
        self.touch(&mut sessions, id).map(|s| f(&s.cart))
    }

    /// Executes a function with write access to a cart.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// sessions.with_cart_mut(id, |cart| cart.add_to_cart(&product))?;
    /// ```
    pub fn with_cart_mut<F, R>(&self, id: Uuid, f: F) -> Option<R>
    where
        F: FnOnce(&mut Cart) -> R,
    {
        let mut sessions = self.lock();
        self.touch(&mut sessions, id).map(|s| f(&mut s.cart))
    }

    /// Drops a cart. Returns whether it existed.
    pub fn remove(&self, id: Uuid) -> bool {
        let removed = self.lock().remove(&id).is_some();
        if removed {
            debug!(cart_id = %id, "Cart discarded");
        }
        removed
    }

    /// Number of carts that have not gone idle.
    pub fn len(&self) -> usize {
        let mut sessions = self.lock();
        self.evict_idle(&mut sessions);
        sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
