//! HTTP server setup
//!
//! Builds the CORS layer from configuration, binds the listener and serves
//! the router until Ctrl+C or SIGTERM.

use std::sync::Arc;

use axum::http::HeaderValue;
use mood_common::config::CorsConfig;
use mood_common::{Error, PolarityScorer, Result};
use tokio::signal;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tracing::{error, info};

use crate::config::ServerConfig;
use crate::{build_router, AppState};

/// Translate the configured origin list into a CORS layer
///
/// Methods and headers are always unrestricted. Credentials are not
/// allowed since they cannot be combined with a wildcard origin.
pub fn cors_layer(config: &CorsConfig) -> Result<CorsLayer> {
    let origin = if config.allows_any_origin() {
        AllowOrigin::any()
    } else {
        let origins = config
            .allowed_origins
            .iter()
            .map(|o| {
                HeaderValue::from_str(o)
                    .map_err(|_| Error::Config(format!("Invalid CORS origin: {:?}", o)))
            })
            .collect::<Result<Vec<_>>>()?;
        AllowOrigin::list(origins)
    };

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(Any)
        .allow_headers(Any))
}

/// Run HTTP API server
///
/// **Arguments:**
/// - `config`: Resolved server configuration
/// - `scorer`: Polarity engine used for every request
pub async fn run(config: ServerConfig, scorer: Arc<dyn PolarityScorer>) -> Result<()> {
    let cors = cors_layer(&config.cors)?;

    let state = AppState::new(config.policy, scorer).with_scoring_timeout(config.scoring_timeout);
    let app = build_router(state, cors);

    info!(
        "Classifier policy: happy > {}, {} < {}, otherwise neutral",
        config.policy.positive_threshold,
        mood_common::Mood::from(config.policy.negative_mood),
        config.policy.negative_threshold
    );

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await.map_err(|e| {
        error!("Failed to bind to {}: {}", config.bind_addr, e);
        e
    })?;

    info!("mood-api listening on http://{}", config.bind_addr);
    info!("Health check: http://{}/health", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        },
        _ = terminate => {
            info!("Received terminate signal, shutting down");
        },
    }
}
