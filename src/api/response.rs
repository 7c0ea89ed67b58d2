// API response utility functions module

use crate::http::build_json_response;
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};
use serde::Serialize;

use super::types::ApiError;

/// Build pretty-printed JSON response (2-space indent, non-ASCII kept literal)
pub fn json_response<T: Serialize>(status: StatusCode, body: &T, is_head: bool) -> Response<Full<Bytes>> {
    match serde_json::to_string_pretty(body) {
        Ok(json) => build_json_response(status, json, is_head),
        Err(e) => {
            logger::log_error(&format!("Failed to serialize response: {e}"));
            build_json_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                r#"{"error":"Internal server error"}"#.to_string(),
                is_head,
            )
        }
    }
}

/// 404 for an `/api/` path with no registered endpoint
pub fn endpoint_not_found(path: &str, is_head: bool) -> Response<Full<Bytes>> {
    json_response(
        StatusCode::NOT_FOUND,
        &ApiError {
            error: "API endpoint not found",
            path,
        },
        is_head,
    )
}
