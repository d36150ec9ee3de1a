//! VibeLive token relay library.
//!
//! Accepts a POST, injects a server-held secret into the JSON body, forwards it
//! to the upstream API and hands the JSON reply back with permissive CORS
//! headers.

pub mod config;
pub mod error;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod relay;

pub use config::RelayConfig;
pub use error::RelayError;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
