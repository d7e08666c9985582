//! HTTP surface of the calcfmt service.
//!
//! Routes:
//! - `GET /` greeting
//! - `GET /health`, `GET /metrics`, `GET /schemas` operational endpoints
//! - `POST /sum-numbers`, `POST /calculate/average` numeric folds
//! - `POST /calculate/bmi` BMI assessment
//! - `POST /format/brazilian-cellphone` cellphone formatting
//! - `GET /products/{id}` catalog lookup

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::routing::{get, post};
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::timeout::TimeoutLayer;

use calcfmt_core::ProductCatalog;

pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod schemas;

/// Shared read-only state behind every handler.
pub struct AppState {
    pub catalog: Arc<dyn ProductCatalog>,
    pub metrics: PrometheusHandle,
}

/// Request bodies are tiny JSON documents; anything bigger is garbage.
const MAX_BODY_BYTES: usize = 64 * 1024;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Builds the full router around `state`.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::greeting))
        .route("/health", get(handlers::health))
        .route("/metrics", get(handlers::metrics_endpoint))
        .route("/schemas", get(handlers::schemas))
        .route("/sum-numbers", post(handlers::sum_numbers))
        .route("/calculate/average", post(handlers::calculate_average))
        .route("/calculate/bmi", post(handlers::calculate_bmi))
        .route(
            "/format/brazilian-cellphone",
            post(handlers::format_brazilian_cellphone),
        )
        .route("/products/{id}", get(handlers::get_product))
        .fallback(handlers::not_found)
        .layer(axum::middleware::from_fn(middleware::track_requests))
        .layer(TimeoutLayer::new(REQUEST_TIMEOUT))
        .layer(axum::extract::DefaultBodyLimit::max(MAX_BODY_BYTES))
        .with_state(state)
}
