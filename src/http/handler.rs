//! The relay handler: dispatch on method, inject the secret, forward.

use std::time::Instant;

use axum::{
    body::Body,
    extract::State,
    http::{Method, Request},
    response::{IntoResponse, Response},
};
use serde_json::Value;

use crate::error::RelayError;
use crate::http::request::request_id;
use crate::http::response;
use crate::http::server::AppState;
use crate::observability::metrics;
use crate::relay::{build_payload, decode_json};

/// Entry point for every path.
pub async fn relay_handler(State(state): State<AppState>, request: Request<Body>) -> Response {
    let start_time = Instant::now();
    let method = request.method().clone();
    let request_id = request_id(request.headers()).to_string();

    let response = match method {
        Method::OPTIONS => response::preflight(),
        Method::POST => match relay(&state, request).await {
            Ok(data) => response::relayed(data),
            Err(e) => {
                log_failure(&request_id, &e);
                e.into_response()
            }
        },
        _ => {
            let e = RelayError::MethodNotAllowed(method.clone());
            log_failure(&request_id, &e);
            e.into_response()
        }
    };

    tracing::debug!(
        request_id = %request_id,
        method = %method,
        status = response.status().as_u16(),
        elapsed_ms = start_time.elapsed().as_millis() as u64,
        "Request handled"
    );
    metrics::record_request(&method, response.status().as_u16(), start_time);

    response
}

/// Read the body, inject the secret, forward upstream.
async fn relay(state: &AppState, request: Request<Body>) -> Result<Value, RelayError> {
    let bytes = axum::body::to_bytes(request.into_body(), state.max_body_size)
        .await
        .map_err(RelayError::BodyRead)?;
    let body = decode_json(&bytes).map_err(RelayError::InvalidJson)?;

    let payload = build_payload(body, &state.token);

    state.upstream.forward(&payload).await.map_err(|e| {
        metrics::record_upstream_failure(e.kind());
        RelayError::from(e)
    })
}

fn log_failure(request_id: &str, error: &RelayError) {
    match error {
        RelayError::Upstream(_) => {
            tracing::error!(request_id = %request_id, error = %error, "Upstream relay failed");
        }
        _ => {
            tracing::warn!(request_id = %request_id, error = %error, "Rejected request");
        }
    }
}
