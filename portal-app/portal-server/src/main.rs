use std::net::SocketAddr;
use std::sync::Arc;

use tracing::{error, info};

use portal_api::{build_router, AppState};
use portal_infrastructure::InMemoryContactRepository;
use portal_shared::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration (.env included)
    let config = match AppConfig::load() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Initialize telemetry
    let _guard = portal_shared::telemetry::init_telemetry(&config.telemetry);

    info!("Contact portal server starting...");

    // Contact records live in memory for the lifetime of the process
    let contacts = Arc::new(InMemoryContactRepository::new());
    let state = AppState::new(contacts);

    // Build router
    let app = match build_router(state, &config.server) {
        Ok(router) => router,
        Err(e) => {
            error!("Invalid allowed origin {:?}: {}", config.server.allowed_origin, e);
            std::process::exit(1);
        }
    };

    // Bind address
    let host: std::net::IpAddr = config.server.host.parse()?;
    let addr = SocketAddr::from((host, config.server.port));
    info!("Listening on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        // Without a signal handler, keep serving until the process is killed.
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
