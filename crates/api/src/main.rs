use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use roster_api::config::ServerConfig;
use roster_api::router::build_app_router;
use roster_api::service::EmployeeService;
use roster_api::state::AppState;
use roster_upstream::EmployeeApi;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "roster_api=debug,roster_upstream=debug,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    // --- Upstream client ---
    let upstream = EmployeeApi::with_timeout(
        &config.upstream.base_url,
        Duration::from_secs(config.upstream.timeout_secs),
    )
    .expect("Failed to build upstream HTTP client");
    tracing::info!(
        base_url = %config.upstream.base_url,
        cache_ttl_secs = ?config.upstream.cache_ttl.map(|ttl| ttl.as_secs()),
        "Upstream employee API configured"
    );

    // --- App state ---
    let state = AppState {
        employees: Arc::new(EmployeeService::new(upstream, config.upstream.cache_ttl)),
    };

    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(config.shutdown_timeout_secs))
        .await
        .expect("Server error");

    tracing::info!("Graceful shutdown complete");
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix). Once a signal
/// arrives, in-flight requests get `drain_secs` to finish before the
/// process exits regardless.
async fn shutdown_signal(drain_secs: u64) {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }

    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_secs(drain_secs)).await;
        tracing::warn!(drain_secs, "Shutdown drain period elapsed, forcing exit");
        std::process::exit(1);
    });
}
