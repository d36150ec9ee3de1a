//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize, read CONTEXT_AUTH_TOKEN)
//!     → validation.rs (semantic checks)
//!     → RelayConfig (validated, immutable)
//!     → handed to HttpServer at startup
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded
//! - All fields have defaults to allow minimal configs
//! - The secret never lives in the file

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError, TOKEN_ENV_VAR};
pub use schema::{
    ListenerConfig, LogFormat, ObservabilityConfig, RelayConfig, SecretToken, SecurityConfig,
    UpstreamConfig,
};
