//! minibank entry point.
//!
//! Loads configuration, seeds the demo users and serves the API and the
//! HTML pages until Ctrl-C.

use minibank::api::routes::create_router;
use minibank::infrastructure::{AppConfig, AppDependencies, seed_demo_data};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,minibank=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting minibank...");

    // Load configuration
    let config = match AppConfig::from_env() {
        Ok(config) => {
            tracing::info!(
                "Configuration loaded: host={}, port={}, session_ttl={}m",
                config.app_host,
                config.app_port,
                config.session_ttl_minutes
            );
            config
        }
        Err(error) => {
            tracing::warn!("Failed to load configuration from environment: {error}");
            tracing::info!("Using default configuration");
            AppConfig::default()
        }
    };

    let bind_address = config.bind_address();

    let dependencies = AppDependencies::in_memory(config);
    seed_demo_data(&dependencies);
    tracing::info!("Demo data seeded (in-memory mode)");

    let app = create_router(dependencies).layer(TraceLayer::new_for_http());

    let listener = TcpListener::bind(&bind_address).await?;
    tracing::info!("minibank started on http://{bind_address}");
    tracing::info!("Available endpoints:");
    tracing::info!("  POST /api/login      - Log in (JSON)");
    tracing::info!("  POST /api/logout     - Log out");
    tracing::info!("  GET  /api/me         - Current user");
    tracing::info!("  GET  /api/accounts   - List accounts");
    tracing::info!("  POST /api/transfer   - Transfer money");
    tracing::info!("  GET  /api/transfers  - Transfer history");
    tracing::info!("  GET  /               - Web UI");
    tracing::info!("  GET  /health         - Health check");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("minibank stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install Ctrl-C handler: {error}");
        return;
    }
    tracing::info!("Shutdown signal received");
}
