//! VibeLive token relay.
//!
//! Keeps `CONTEXT_AUTH_TOKEN` out of the public client: the browser POSTs its
//! usual body here, the relay adds the token and forwards to the upstream API.
//!
//! ```text
//!     Browser                 RELAY                          Upstream API
//!        │  POST {userId}       │                                 │
//!        ├─────────────────────▶│ + contextAuthToken              │
//!        │                      ├────────────────────────────────▶│
//!        │                      │◀────────────────────────────────┤
//!        │◀─────────────────────┤ JSON + Access-Control-Allow-*   │
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use vibelive_relay::config::load_config;
use vibelive_relay::lifecycle::{signals, Shutdown};
use vibelive_relay::observability::{logging, metrics};
use vibelive_relay::HttpServer;

#[derive(Parser)]
#[command(name = "vibelive-relay")]
#[command(about = "Injects the VibeLive context token and relays requests upstream", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override listener.bind_address.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = load_config(cli.config.as_deref())?;
    if let Some(bind) = cli.bind {
        config.listener.bind_address = bind;
    }

    logging::init_logging(&config.observability)?;

    tracing::info!("vibelive-relay v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        upstream = %config.upstream.url,
        upstream_timeout_secs = ?config.upstream.timeout_secs,
        max_body_size = config.security.max_body_size,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let bind_address = config.listener.bind_address.clone();
    let server = HttpServer::new(config)?;

    let listener = TcpListener::bind(&bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    signals::spawn_signal_listener(shutdown);

    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
