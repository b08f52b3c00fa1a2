//! # Storefront API Server
//!
//! Entry point: logging, configuration, catalog load, then serve until
//! Ctrl+C or SIGTERM.

use anyhow::Context;
use storefront_api::{create_router, AppState, StorefrontConfig};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing; RUST_LOG overrides the default filter
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,storefront_api=debug")),
        )
        .with_target(true)
        .init();

    info!("Starting Neon Spirit Shoppe storefront API...");

    // Load configuration
    let config = StorefrontConfig::load(None).context("Failed to load configuration")?;
    let addr = config.socket_addr()?;
    info!(
        %addr,
        tax_rate_bps = config.pricing.tax_rate_bps,
        free_delivery_threshold = config.pricing.free_delivery_threshold,
        delivery_delay_ms = config.delivery.simulated_delay_ms,
        minimum_age = config.age_gate.minimum_age,
        "Configuration loaded"
    );

    // Load and validate the catalog once
    let state = AppState::with_builtin_catalog(config).context("Built-in catalog is invalid")?;
    info!(products = state.catalog.len(), "Catalog loaded");

    let app = create_router(state);

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!(%addr, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler.
///
/// If a signal handler cannot be installed, that branch simply never fires.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(?e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::warn!(?e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, starting graceful shutdown...");
}
