use radiocalio_api::{AppState, Config, Database, ENDPOINTS, app};
use std::{net::SocketAddr, process::ExitCode};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .compact()
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    // A database that fails to open does not stop the server; every request
    // that touches storage reports the failure instead.
    let db = match Database::open(&config.database_path) {
        Ok(db) => db,
        Err(e) => {
            error!(path = %config.database_path.display(), "Error opening database: {}", e);
            Database::detached()
        }
    };

    let app = app(AppState::new(db.clone()), &config.static_dir);

    let addr = SocketAddr::new(config.host, config.port);
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(%addr, "Failed to bind: {}", e);
            return ExitCode::FAILURE;
        }
    };

    info!("Server running on http://{}", addr);
    info!("Available endpoints:");
    for (method, path, description) in ENDPOINTS {
        info!("  {:<5} {:<22} - {}", method, path, description);
    }

    let served = axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await;

    if let Err(e) = served {
        error!("Server error: {}", e);
    }

    match db.close() {
        Ok(()) => info!("Database connection closed"),
        Err(e) => error!("Error closing database: {}", e),
    }

    ExitCode::SUCCESS
}

/// Waits for SIGINT (Ctrl+C), or SIGTERM on unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
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
                error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received SIGINT, shutting down"),
        () = terminate => info!("Received SIGTERM, shutting down"),
    }
}
