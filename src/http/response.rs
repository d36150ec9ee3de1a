//! Response construction.
//!
//! # Responsibilities
//! - Answer CORS preflight with static headers
//! - Wrap relayed upstream JSON with the permissive-origin header
//! - Render `{"error": ...}` bodies for failures
//!
//! # Design Decisions
//! - Header values are static; nothing from the request is reflected back
//! - Upstream status codes are never copied onto the response

use axum::{
    body::Body,
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};

const ANY_ORIGIN: &str = "*";
const ALLOWED_METHODS: &str = "POST";
const ALLOWED_HEADERS: &str = "Content-Type";

/// 200 with an empty body and the preflight headers.
pub fn preflight() -> Response {
    let mut response = Response::new(Body::empty());
    let headers = response.headers_mut();
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static(ANY_ORIGIN),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static(ALLOWED_METHODS),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(ALLOWED_HEADERS),
    );
    response
}

/// 200 carrying the upstream's JSON verbatim.
pub fn relayed(data: Value) -> Response {
    with_any_origin(Json(data).into_response())
}

/// Fixed-shape error body.
pub fn error(status: StatusCode, message: &str, any_origin: bool) -> Response {
    let response = (status, Json(json!({ "error": message }))).into_response();
    if any_origin {
        with_any_origin(response)
    } else {
        response
    }
}

fn with_any_origin(mut response: Response) -> Response {
    response
        .headers_mut()
        .insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static(ANY_ORIGIN));
    response
}
