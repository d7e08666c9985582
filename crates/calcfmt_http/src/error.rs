//! One error envelope for every non-success response.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

use calcfmt_core::Issues;

/// Failures a handler can surface to a client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Input failed boundary validation; per-field detail attached.
    #[error("validation failed")]
    Validation(Issues),
    /// The body or a parameter could not be decoded at all.
    #[error("bad request: {0}")]
    Malformed(String),
    #[error("no product with id {0}")]
    ProductNotFound(i64),
    /// Nothing is mounted at the requested path.
    #[error("route {method}:{path} not found")]
    RouteNotFound { method: String, path: String },
    #[error("internal error: {0}")]
    Internal(String),
}

/// Wire shape shared by every failure. `message` and `issues` never appear
/// together: validation failures carry `issues`, everything else `message`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    pub status_code: u16,
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issues: Option<Issues>,
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::Malformed(_) => StatusCode::BAD_REQUEST,
            ApiError::ProductNotFound(_) | ApiError::RouteNotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<Issues> for ApiError {
    fn from(issues: Issues) -> Self {
        ApiError::Validation(issues)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (error, message, issues) = match self {
            ApiError::Validation(issues) => ("Bad Request", None, Some(issues)),
            ApiError::Malformed(detail) => ("Bad Request", Some(detail), None),
            ApiError::ProductNotFound(id) => (
                "Product Not Found",
                Some(format!("No product found with ID {id}")),
                None,
            ),
            ApiError::RouteNotFound { method, path } => (
                "Not Found",
                Some(format!("Route {method}:{path} not found")),
                None,
            ),
            ApiError::Internal(detail) => ("Internal Server Error", Some(detail), None),
        };
        let body = ErrorBody {
            status_code: status.as_u16(),
            error: error.to_owned(),
            message,
            issues,
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn validation_envelope_carries_issues_without_message() {
        let err = ApiError::Validation(Issues::single("weight", "out of range"));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = ErrorBody {
            status_code: 400,
            error: "Bad Request".into(),
            message: None,
            issues: Some(Issues::single("weight", "out of range")),
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({
                "statusCode": 400,
                "error": "Bad Request",
                "issues": {"weight": ["out of range"]},
            })
        );
    }

    #[test]
    fn not_found_envelope_names_the_missing_id() {
        let response = ApiError::ProductNotFound(999).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn message_envelopes_skip_the_issues_field() {
        let body = ErrorBody {
            status_code: 404,
            error: "Product Not Found".into(),
            message: Some("No product found with ID 999".into()),
            issues: None,
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({
                "statusCode": 404,
                "error": "Product Not Found",
                "message": "No product found with ID 999",
            })
        );
    }
}
