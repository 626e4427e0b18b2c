//! `{code, data, msg}` response builders shared by every API handler.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use gframe_ui::net::types::Envelope;

/// HTTP 200 with `code: 0` and `data`.
pub fn ok(data: serde_json::Value) -> Response {
    Json(Envelope::success(data)).into_response()
}

/// `status` with an error envelope carrying `code` and `msg`.
pub fn fail(status: StatusCode, code: i64, msg: &str) -> Response {
    (status, Json(Envelope::failure(code, msg))).into_response()
}
