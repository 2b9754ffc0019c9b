pub mod response;

use crate::config::Config;
use crate::features::{self, FeatureState};
use crate::middleware;
use axum::{extract::State, response::IntoResponse, routing::get, Json, Router};
use serde_json::json;
use std::{future::IntoFuture, net::SocketAddr, sync::Arc, time::Duration};
use tokio::{signal, sync::Notify};
use tower_http::compression::CompressionLayer;
use tracing::{info, warn};

/// Bind the configured address and serve until a shutdown signal arrives
///
/// After the signal, in-flight requests get `shutdown_timeout_secs` to finish
/// before the server stops waiting for them.
pub async fn serve(config: Config) -> anyhow::Result<()> {
    let state = FeatureState::from_config(&config)?;
    let app = create_router(state, &config);

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Server listening on {}", addr);

    let signalled = Arc::new(Notify::new());
    let notifier = signalled.clone();
    let drain_limit = Duration::from_secs(config.server.shutdown_timeout_secs);

    let server = axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown_signal().await;
            notifier.notify_one();
        })
        .into_future();

    tokio::select! {
        result = server => result?,
        _ = async {
            signalled.notified().await;
            tokio::time::sleep(drain_limit).await;
        } => {
            warn!(
                "Connections still open after {} seconds, shutting down anyway",
                drain_limit.as_secs()
            );
        },
    }

    info!("Server shut down gracefully");
    Ok(())
}

/// Create the application router with all routes and middleware
pub fn create_router(state: FeatureState, config: &Config) -> Router {
    let health_routes = Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .with_state(state.clone());

    Router::new()
        .merge(health_routes)
        .merge(features::router(state))
        // Apply layers from innermost to outermost
        .layer(CompressionLayer::new())
        .layer(middleware::tracing_layer())
        .layer(middleware::cors_layer(&config.cors))
}

async fn root() -> impl IntoResponse {
    Json(json!({
        "name": "ECOLOGIC Middleware API",
        "version": env!("CARGO_PKG_VERSION"),
        "status": "running"
    }))
}

async fn health(State(state): State<FeatureState>) -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "erp_configured": state.erp.is_configured(),
    }))
}

/// Resolves on Ctrl+C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, draining connections");
        },
        _ = terminate => {
            info!("Received terminate signal, draining connections");
        },
    }
}
