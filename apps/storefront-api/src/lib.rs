//! # Storefront API
//!
//! HTTP service exposing the Neon Spirit Shoppe catalog, session carts,
//! delivery lookup and age gate.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Storefront API Server                            │
//! │                                                                         │
//! │  Browser ───► HTTP (8080) ───► routes ───► spirit-core                  │
//! │                                   │                                     │
//! │                                   ▼                                     │
//! │                             CartSessions                                │
//! │                             (in memory)                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The binary in `main.rs` only wires configuration, logging and shutdown
//! around [`routes::create_router`]; everything else lives here so the
//! router can be driven in-process by tests.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

pub use config::{ConfigError, StorefrontConfig};
pub use error::{ApiError, ErrorCode};
pub use routes::create_router;
pub use state::AppState;
