//! msbot-nexon - Cached MapleStory character profile lookups
//!
//! HTTP entry point for the profile service.

use std::net::SocketAddr;
use std::time::Duration;

use tokio::signal;
use tokio::task::JoinHandle;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use msbot_nexon::api::create_router;
use msbot_nexon::{spawn_flush_task, spawn_sweep_task, AppState, Config};

/// Main entry point for the profile service.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load and validate configuration from environment variables
/// 3. Build the MapleScouter and Nexon clients over one shared cache
/// 4. Start background sweep and flush tasks when caching is enabled
/// 5. Create Axum router with all endpoints
/// 6. Start HTTP server on configured port
/// 7. Handle graceful shutdown on SIGINT/SIGTERM
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "msbot_nexon=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting msbot-nexon profile service");

    let config = Config::from_env()?;
    info!(
        "Configuration loaded: region={}, cache_enabled={}, ttl={}ms, max_size={}, port={}",
        config.region,
        config.cache.enabled,
        config.cache.ttl_ms,
        config.cache.max_size,
        config.server_port
    );
    if config.scouter.api_key.is_empty() {
        warn!("SCOUTER_API_KEY is empty, upstream requests may be rejected");
    }
    if config.nexon.api_key.is_empty() {
        warn!("NEXON_API_KEY is empty, Nexon Open API requests will be rejected");
    }

    let state = AppState::from_config(&config)?;

    let mut background = Vec::new();
    let cache = state.profiles.cache().clone();
    if cache.is_enabled() {
        background.push(spawn_sweep_task(
            cache.clone(),
            Duration::from_secs(config.cache.sweep_interval),
        ));
        background.push(spawn_flush_task(
            cache,
            Duration::from_secs(config.cache.flush_interval),
        ));
        info!("Background sweep and flush tasks started");
    } else {
        info!("Profile cache disabled, every lookup goes upstream");
    }

    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(background))
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
///
/// On shutdown signal, aborts the background tasks and allows graceful shutdown.
async fn shutdown_signal(background: Vec<JoinHandle<()>>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }

    for handle in background {
        handle.abort();
    }
    warn!("Background tasks aborted");
}
