//! JSON body decoding shared by the inbound and upstream sides.

use serde_json::Value;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Parse a UTF-8 JSON body, ignoring one leading byte order mark.
pub fn decode_json(bytes: &[u8]) -> Result<Value, serde_json::Error> {
    serde_json::from_slice(bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes))
}
