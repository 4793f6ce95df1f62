//! Response Envelope
//!
//! Every route answers with the same JSON contract: successes carry
//! `{data, success: true, message?, timestamp}`, failures carry
//! `{success: false, message, errors?, timestamp}`. Paginated lists add
//! the slice bookkeeping beside `data`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::Utc;
use serde::Serialize;
use serde_json::json;

fn with_data<T: Serialize>(status: StatusCode, data: T, message: Option<&str>) -> Response {
    let data = match serde_json::to_value(data) {
        Ok(value) => value,
        Err(e) => {
            tracing::error!("Failed to serialize response payload: {e}");
            return internal_error();
        }
    };
    let mut body = json!({
        "data": data,
        "success": true,
        "timestamp": Utc::now(),
    });
    if let Some(message) = message {
        body["message"] = json!(message);
    }
    (status, Json(body)).into_response()
}

/// 200 success envelope.
pub fn success<T: Serialize>(data: T) -> Response {
    with_data(StatusCode::OK, data, None)
}

/// 201 success envelope with a message.
pub fn created<T: Serialize>(data: T, message: &str) -> Response {
    with_data(StatusCode::CREATED, data, Some(message))
}

/// 200 paginated envelope.
pub fn paginated<T: Serialize>(
    items: &[T],
    page: usize,
    limit: usize,
    total: usize,
    has_more: bool,
) -> Response {
    let data = match serde_json::to_value(items) {
        Ok(value) => value,
        Err(e) => {
            tracing::error!("Failed to serialize page payload: {e}");
            return internal_error();
        }
    };
    let body = json!({
        "data": data,
        "page": page,
        "limit": limit,
        "total": total,
        "hasMore": has_more,
        "success": true,
        "timestamp": Utc::now(),
    });
    Json(body).into_response()
}

/// Failure envelope with the given status and message.
pub fn failure(status: StatusCode, message: &str) -> Response {
    let body = json!({
        "success": false,
        "message": message,
        "timestamp": Utc::now(),
    });
    (status, Json(body)).into_response()
}

/// 400 failure envelope carrying the collected validation messages.
pub fn validation_failure(errors: Vec<String>) -> Response {
    let body = json!({
        "success": false,
        "message": "Validation failed",
        "errors": errors,
        "timestamp": Utc::now(),
    });
    (StatusCode::BAD_REQUEST, Json(body)).into_response()
}

/// Generic 500 with no internal detail.
pub fn internal_error() -> Response {
    failure(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
}
