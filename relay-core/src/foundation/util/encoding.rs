//! Hex helpers shared by the identifier types and log formatting.

use crate::foundation::RelayError;

/// Strips an optional `0x`/`0X` prefix and surrounding whitespace.
pub fn strip_hex_prefix(s: &str) -> &str {
    let trimmed = s.trim();
    trimmed.strip_prefix("0x").or_else(|| trimmed.strip_prefix("0X")).unwrap_or(trimmed)
}

/// Decodes hex (with or without `0x`) to a fixed-size array.
pub fn decode_hex_array<const N: usize>(s: &str) -> Result<[u8; N], RelayError> {
    let bytes = hex::decode(strip_hex_prefix(s))?;
    let len = bytes.len();
    bytes.try_into().map_err(|_| RelayError::EncodingError(format!("hex length mismatch: expected {} bytes, got {}", N, len)))
}

/// Short hex for logs (first 8 chars).
pub fn encode_hex_short(bytes: &[u8]) -> String {
    let full = hex::encode(bytes);
    if full.len() > 8 {
        format!("{}...", &full[..8])
    } else {
        full
    }
}
