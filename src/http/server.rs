//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the relay handler on every path
//! - Wire up middleware (request ID, tracing)
//! - Build the shared upstream client
//! - Serve until the shutdown broadcast fires

use std::sync::Arc;

use axum::{routing::any, Router};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::config::{RelayConfig, SecretToken};
use crate::http::handler::relay_handler;
use crate::http::request::{UuidRequestId, X_REQUEST_ID};
use crate::relay::UpstreamClient;

/// Application state injected into handlers. Read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub upstream: Arc<UpstreamClient>,
    pub token: SecretToken,
    pub max_body_size: usize,
}

/// HTTP server for the relay.
pub struct HttpServer {
    router: Router,
}

/// Error building the server.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("no secret token configured")]
    MissingToken,

    #[error("failed to build upstream client: {0}")]
    Client(#[from] reqwest::Error),
}

impl HttpServer {
    /// Create a new HTTP server from a validated configuration.
    pub fn new(config: RelayConfig) -> Result<Self, ServerError> {
        let token = config.token.ok_or(ServerError::MissingToken)?;
        let upstream = Arc::new(UpstreamClient::new(&config.upstream)?);

        tracing::info!(upstream = %upstream.url(), "Upstream client ready");

        let state = AppState {
            upstream,
            token,
            max_body_size: config.security.max_body_size,
        };

        let router = Self::build_router(state);
        Ok(Self { router })
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(state: AppState) -> Router {
        Router::new()
            .route("/{*path}", any(relay_handler))
            .route("/", any(relay_handler))
            .with_state(state)
            .layer(PropagateRequestIdLayer::new(X_REQUEST_ID.clone()))
            .layer(TraceLayer::new_for_http())
            .layer(SetRequestIdLayer::new(X_REQUEST_ID.clone(), UuidRequestId))
    }

    /// A clone of the fully layered router, for in-process use.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server, accepting connections on the given listener until
    /// `shutdown` fires. In-flight requests are drained before returning.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("HTTP server draining");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
