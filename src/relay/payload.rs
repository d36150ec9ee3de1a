//! Forwarded payload construction.

use serde_json::{Map, Value};

use crate::config::SecretToken;

/// Field the secret is injected under.
pub const TOKEN_FIELD: &str = "contextAuthToken";

/// Body sent to the upstream API.
pub type ForwardedPayload = Map<String, Value>;

/// Copy every field of `body`, then set the token field.
///
/// The token is written last so a caller-supplied `contextAuthToken` can never
/// survive. An existing key keeps its position; a new one is appended.
///
/// Keys are forwarded in the order the caller sent them. Object spread would
/// hoist integer-like keys (`"2"`) ahead of the rest in ascending order; that
/// reordering is not reproduced, so `{"b":1,"2":0}` is forwarded as written.
///
/// Non-object bodies are spread like object literals would spread them:
/// arrays by index, strings by character, other scalars contribute nothing.
pub fn build_payload(body: Value, token: &SecretToken) -> ForwardedPayload {
    let mut payload = spread(body);
    payload.insert(TOKEN_FIELD.to_string(), Value::String(token.expose().to_string()));
    payload
}

fn spread(body: Value) -> ForwardedPayload {
    match body {
        Value::Object(map) => map,
        Value::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(i, v)| (i.to_string(), v))
            .collect(),
        Value::String(s) => s
            .chars()
            .enumerate()
            .map(|(i, c)| (i.to_string(), Value::String(c.to_string())))
            .collect(),
        Value::Null | Value::Bool(_) | Value::Number(_) => Map::new(),
    }
}
