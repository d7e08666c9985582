//! Endpoint handlers: thin glue between validated bodies and the core.

use std::sync::Arc;

use axum::Json;
use axum::debug_handler;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use schemars::schema_for;
use tracing::debug;

use calcfmt_core::{Issues, Product, aggregate, bmi, cellphone};

use crate::AppState;
use crate::error::ApiError;
use crate::extract::ApiJson;
use crate::schemas::{
    AverageResponse, BmiBody, BmiResponse, CellphoneBody, CellphoneResponse, NumbersBody,
    SumResponse,
};

#[debug_handler]
pub async fn greeting() -> &'static str {
    "🔥 Hello World! :)"
}

/// Fallback for unmounted paths, so even a wrong URL gets the envelope.
#[debug_handler]
pub async fn not_found(method: axum::http::Method, uri: axum::http::Uri) -> ApiError {
    ApiError::RouteNotFound {
        method: method.to_string(),
        path: uri.path().to_owned(),
    }
}

#[debug_handler]
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

#[debug_handler]
pub async fn metrics_endpoint(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let body = state.metrics.render();
    ([("content-type", "text/plain; version=0.0.4")], body)
}

/// JSON Schemas of the calculation and formatting routes, keyed by path.
#[debug_handler]
pub async fn schemas() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "/sum-numbers": {
            "request": schema_for!(NumbersBody),
            "response": schema_for!(SumResponse),
        },
        "/calculate/average": {
            "request": schema_for!(NumbersBody),
            "response": schema_for!(AverageResponse),
        },
        "/calculate/bmi": {
            "request": schema_for!(BmiBody),
            "response": schema_for!(BmiResponse),
        },
        "/format/brazilian-cellphone": {
            "request": schema_for!(CellphoneBody),
            "response": schema_for!(CellphoneResponse),
        },
        "/products/{id}": {
            "response": schema_for!(Product),
        },
    }))
}

#[debug_handler]
pub async fn sum_numbers(ApiJson(body): ApiJson<NumbersBody>) -> Json<SumResponse> {
    Json(SumResponse {
        sum: aggregate::sum(&body.numbers),
    })
}

#[debug_handler]
pub async fn calculate_average(
    ApiJson(body): ApiJson<NumbersBody>,
) -> Result<Json<AverageResponse>, ApiError> {
    match aggregate::average(&body.numbers) {
        Some(average) => Ok(Json(AverageResponse { average })),
        None => Err(Issues::single("numbers", "Expected at least one number.").into()),
    }
}

#[debug_handler]
pub async fn calculate_bmi(ApiJson(body): ApiJson<BmiBody>) -> Result<Json<BmiResponse>, ApiError> {
    let measurements = body.validate()?;
    let report = bmi::assess(measurements.weight_kg, measurements.height_cm);
    Ok(Json(BmiResponse {
        bmi: report.bmi,
        result: report.category,
    }))
}

#[debug_handler]
pub async fn format_brazilian_cellphone(
    ApiJson(body): ApiJson<CellphoneBody>,
) -> Result<Json<CellphoneResponse>, ApiError> {
    let formatted = cellphone::format_brazilian(&body.cellphone)
        .map_err(|e| Issues::single("cellphone", e.to_string()))?;
    Ok(Json(CellphoneResponse {
        formatted_cellphone: formatted,
    }))
}

#[debug_handler]
pub async fn get_product(
    State(state): State<Arc<AppState>>,
    Path(raw_id): Path<String>,
) -> Result<Json<Product>, ApiError> {
    let id: i64 = raw_id
        .parse()
        .map_err(|_| Issues::single("id", "Expected an integer product ID."))?;
    let product = state
        .catalog
        .find(id)
        .ok_or(ApiError::ProductNotFound(id))?;
    debug!(product_id = id, name = %product.name, "product found");
    Ok(Json(product))
}
