use std::sync::Arc;

use metrics_exporter_prometheus::PrometheusBuilder;
use tokio::signal;
use tracing::info;

use calcfmt_core::StaticCatalog;
use calcfmt_http::config::ServerConfig;
use calcfmt_http::{AppState, app};

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    // Configure logging from `CALCFMT_LOG_LEVEL` (or fallback to `RUST_LOG`, default `info`).
    let log_env = std::env::var("CALCFMT_LOG_LEVEL")
        .or_else(|_| std::env::var("RUST_LOG"))
        .unwrap_or_else(|_| "info".to_string());
    let env_filter = tracing_subscriber::EnvFilter::try_new(log_env.clone())
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .compact()
        .with_ansi(false)
        .with_target(false)
        .with_env_filter(env_filter)
        .init();
    tracing::info!(%log_env, "calcfmt_http: log filter");

    let builder = PrometheusBuilder::new();
    let handle = builder.install_recorder()?;

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(%e, "invalid HOST/PORT configuration; aborting startup");
            std::process::exit(1);
        }
    };

    let state = Arc::new(AppState {
        catalog: Arc::new(StaticCatalog::seeded()),
        metrics: handle.clone(),
    });
    let app = app(state);

    let addr = config.socket_addr();
    info!(%addr, "starting HTTP server");

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!("Failed to bind to address {addr}: {e}");
            std::process::exit(1);
        }
    };

    let server = axum::serve(listener, app.into_make_service());
    if let Err(e) = server
        .with_graceful_shutdown(async {
            signal::ctrl_c()
                .await
                .expect("failed to install ctrl+c handler");
        })
        .await
    {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }

    Ok(())
}
