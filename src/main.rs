//! Driver Registry API - Main Entry Point

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use driver_registry::domain::gateways::DriverRepository;
use driver_registry::infrastructure::driven_adapters::config::{AppConfig, LogFormat, StorageBackend};
use driver_registry::infrastructure::driven_adapters::database::create_pool;
use driver_registry::infrastructure::driven_adapters::driver_repository::{
    InMemoryDriverRepository, PostgresDriverRepository,
};
use driver_registry::infrastructure::driving_adapters::api_rest::{build_router, AppState};

fn init_tracing(format: LogFormat) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "driver_registry=debug,tower_http=debug".into());
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
    tracing::info!("Shutdown signal received");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = AppConfig::load()?;
    init_tracing(config.logging.format);
    tracing::info!("Configuration loaded successfully");

    // Create repository
    let driver_repository: Arc<dyn DriverRepository> = match config.database.backend {
        StorageBackend::Postgres => {
            let pool = create_pool(&config.database).await?;
            tracing::info!("Database connection pool created");
            Arc::new(PostgresDriverRepository::new(pool))
        }
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory driver storage; data is lost on restart");
            Arc::new(InMemoryDriverRepository::new())
        }
    };

    // Build router
    let app_state = AppState::new(driver_repository, config.drivers.null_policy());
    let app = build_router(app_state);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
