// src/main.rs

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;

use dramalog::application::{build_cors_layer, build_router, AppState};
use dramalog::config::AppConfig;
use dramalog::db::{
    create_connection_pool, get_connection, initialize_database, verify_database_integrity,
};
use dramalog::integrations::{MetadataProvider, TmdbClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // 1. CONFIGURATION
    let config = AppConfig::from_env().context("Failed to load configuration")?;
    log::info!("Loaded configuration ({}:{})", config.host, config.port);

    // 2. DATABASE
    let pool = Arc::new(
        create_connection_pool(&config.database_path).context("Failed to open database")?,
    );
    {
        let conn = get_connection(&pool)?;
        initialize_database(&conn).context("Failed to initialize schema")?;
        verify_database_integrity(&conn).context("Database integrity check failed")?;
    }
    log::info!("Database ready at {}", config.database_path.display());

    // 3. METADATA PROVIDER
    let metadata: Arc<dyn MetadataProvider> =
        Arc::new(TmdbClient::new(&config.tmdb).context("Failed to create TMDB client")?);

    // 4. SERVICES AND EVENT WIRING
    let state = AppState::initialize(pool, metadata, config.tmdb.language.clone())
        .context("Failed to initialize application state")?;

    // 5. HTTP SERVER
    let cors = build_cors_layer(&config.cors_origins)?;
    let app = build_router(state, cors);

    let addr = SocketAddr::new(
        config.host.parse().context("Invalid HOST address")?,
        config.port,
    );
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;
    log::info!("Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    log::info!("Server stopped");
    Ok(())
}

/// Resolves on Ctrl-C
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
