//! Token relay subsystem.
//!
//! # Data Flow
//! ```text
//! parsed request body
//!     → payload.rs (copy fields, inject secret)
//!     → upstream.rs (single POST, parse JSON reply)
//!     → back to the HTTP handler
//! ```
//!
//! # Design Decisions
//! - No retries: one upstream attempt per inbound request
//! - Transport and decode failures stay distinct here; the HTTP layer
//!   collapses them into one response

pub mod json;
pub mod payload;
pub mod upstream;

pub use json::decode_json;
pub use payload::{build_payload, ForwardedPayload, TOKEN_FIELD};
pub use upstream::{UpstreamClient, UpstreamError};
