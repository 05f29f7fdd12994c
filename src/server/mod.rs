//! Server module: shared state, router construction, and the serve loop

pub mod router;

pub use router::build_router;

use crate::config::ServerConfig;
use crate::core::store::ResourceStore;
use crate::entities::dish::Dish;
use crate::entities::order::Order;
use crate::storage::InMemoryStore;
use anyhow::Result;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;

/// Shared application state: one injected store per resource
///
/// The stores are trait objects so a persistent backend can replace the
/// in-memory default without touching the handlers.
#[derive(Clone)]
pub struct AppState {
    pub dishes: Arc<dyn ResourceStore<Dish>>,
    pub orders: Arc<dyn ResourceStore<Order>>,
}

impl AppState {
    /// State backed by fresh in-memory stores
    pub fn in_memory() -> Self {
        Self {
            dishes: Arc::new(InMemoryStore::new()),
            orders: Arc::new(InMemoryStore::new()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::in_memory()
    }
}

/// Serve the application with graceful shutdown
///
/// Binds to the configured address, serves requests, and handles SIGTERM
/// and Ctrl+C for graceful shutdown.
pub async fn serve(config: &ServerConfig, state: AppState) -> Result<()> {
    let app = build_router(state);
    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr).await?;

    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, initiating graceful shutdown...");
        },
    }
}
