//! Shared utilities for integration testing.
#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
    routing::post,
    Router,
};
use tokio::net::TcpListener;
use vibelive_relay::config::{RelayConfig, SecretToken};
use vibelive_relay::HttpServer;

pub const TEST_TOKEN: &str = "S3CRET";

/// A request the mock upstream received.
#[derive(Debug, Clone)]
pub struct Captured {
    pub content_type: Option<String>,
    pub body: Bytes,
}

#[derive(Clone)]
struct MockState {
    status: StatusCode,
    reply: &'static str,
    delay: Duration,
    captured: Arc<Mutex<Vec<Captured>>>,
}

/// Start a mock upstream on an ephemeral port that answers every POST with
/// `status` and `reply`, recording what it received.
pub async fn start_mock_upstream(
    status: u16,
    reply: &'static str,
) -> (SocketAddr, Arc<Mutex<Vec<Captured>>>) {
    start_delayed_upstream(status, reply, Duration::ZERO).await
}

/// Like [`start_mock_upstream`], but waits `delay` before answering.
pub async fn start_delayed_upstream(
    status: u16,
    reply: &'static str,
    delay: Duration,
) -> (SocketAddr, Arc<Mutex<Vec<Captured>>>) {
    let captured = Arc::new(Mutex::new(Vec::new()));
    let state = MockState {
        status: StatusCode::from_u16(status).unwrap(),
        reply,
        delay,
        captured: captured.clone(),
    };

    let app = Router::new()
        .route("/authorize", post(mock_authorize))
        .with_state(state);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    (addr, captured)
}

async fn mock_authorize(
    State(state): State<MockState>,
    headers: HeaderMap,
    body: Bytes,
) -> (StatusCode, &'static str) {
    state.captured.lock().unwrap().push(Captured {
        content_type: headers
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        body,
    });
    if !state.delay.is_zero() {
        tokio::time::sleep(state.delay).await;
    }
    (state.status, state.reply)
}

/// An address nothing is listening on.
pub async fn unreachable_addr() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    addr
}

/// Relay configuration pointed at `upstream`, bypassing any system proxy.
pub fn relay_config(upstream: SocketAddr) -> RelayConfig {
    let mut config = RelayConfig::default();
    config.upstream.url = format!("http://{}/authorize", upstream);
    config.upstream.system_proxy = false;
    config.upstream.timeout_secs = Some(5);
    config.token = Some(SecretToken::new(TEST_TOKEN));
    config
}

/// Layered relay router pointed at `upstream`.
pub fn relay_router(upstream: SocketAddr) -> Router {
    HttpServer::new(relay_config(upstream)).unwrap().router()
}
