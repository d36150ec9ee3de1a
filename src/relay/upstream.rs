//! Client for the upstream API.

use std::time::{Duration, Instant};

use reqwest::{header, Client};
use serde_json::Value;
use thiserror::Error;

use crate::config::UpstreamConfig;
use crate::relay::json::decode_json;
use crate::relay::payload::ForwardedPayload;

/// Failure talking to the upstream API.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// Request could not be sent, or the response did not arrive in full.
    #[error("transport error: {0}")]
    Transport(#[source] reqwest::Error),

    /// The full response body arrived but is not JSON.
    #[error("invalid response body: {0}")]
    Decode(#[source] serde_json::Error),
}

impl UpstreamError {
    /// Short label for logs and metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            UpstreamError::Transport(_) => "transport",
            UpstreamError::Decode(_) => "decode",
        }
    }
}

/// Sends forwarded payloads to the configured upstream endpoint.
///
/// Built once at startup and shared; `reqwest::Client` pools connections
/// internally.
pub struct UpstreamClient {
    http_client: Client,
    url: String,
}

impl UpstreamClient {
    pub fn new(config: &UpstreamConfig) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder();

        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        if let Some(secs) = config.connect_timeout_secs {
            builder = builder.connect_timeout(Duration::from_secs(secs));
        }
        if !config.system_proxy {
            builder = builder.no_proxy();
        }

        Ok(Self {
            http_client: builder.build()?,
            url: config.url.clone(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// POST the payload once and parse the reply as JSON.
    ///
    /// The upstream status code is not inspected; any JSON body is a success.
    pub async fn forward(&self, payload: &ForwardedPayload) -> Result<Value, UpstreamError> {
        let started = Instant::now();

        let response = self
            .http_client
            .post(&self.url)
            .header(header::CONTENT_TYPE, "application/json")
            .json(payload)
            .send()
            .await
            .map_err(UpstreamError::Transport)?;

        tracing::debug!(
            status = %response.status(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Upstream responded"
        );

        let body = response.bytes().await.map_err(UpstreamError::Transport)?;
        decode_json(&body).map_err(UpstreamError::Decode)
    }
}
