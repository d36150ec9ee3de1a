//! Request-level errors and their fixed HTTP mapping.

use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::http::response;
use crate::relay::UpstreamError;

/// Every way a relayed request can fail.
///
/// The `Display` text is for logs. Callers only ever see
/// [`RelayError::public_message`].
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("method {0} not allowed")]
    MethodNotAllowed(Method),

    #[error("failed to read request body: {0}")]
    BodyRead(#[source] axum::Error),

    #[error("request body is not valid JSON: {0}")]
    InvalidJson(#[source] serde_json::Error),

    #[error("upstream request failed: {0}")]
    Upstream(#[from] UpstreamError),
}

impl RelayError {
    pub fn status(&self) -> StatusCode {
        match self {
            RelayError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            RelayError::BodyRead(_) | RelayError::InvalidJson(_) => StatusCode::BAD_REQUEST,
            RelayError::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }

    /// Message placed in the `{"error": ...}` body.
    pub fn public_message(&self) -> &'static str {
        match self {
            RelayError::MethodNotAllowed(_) => "Method not allowed",
            RelayError::BodyRead(_) | RelayError::InvalidJson(_) => "Invalid JSON",
            RelayError::Upstream(_) => "Failed to reach VibeLive API",
        }
    }

    /// Whether browsers may read the error body cross-origin.
    /// The 405 path never carried the header.
    pub fn allows_any_origin(&self) -> bool {
        !matches!(self, RelayError::MethodNotAllowed(_))
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        response::error(self.status(), self.public_message(), self.allows_any_origin())
    }
}
