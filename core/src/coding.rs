//! coding.rs
//! URL-safe base64 (RFC 4648 section 5) without padding.
//!
//! - Alphabet `A-Z a-z 0-9 - _`.
//! - Output never carries `=`; input carrying `=` is rejected.
//! - Non-zero bits left over in the last symbol are rejected, so every
//!   byte string has exactly one accepted encoding.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;

use crate::types::CodecError;

/// `enc_url_safe(&[0x01, 0x02]) == "AQI"`
#[inline]
pub fn enc_url_safe(data: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(data)
}

/// Errors with `CodecError::InvalidEncoding` on bad alphabet, padding,
/// impossible length or residual bits.
pub fn dec_url_safe(s: &str) -> Result<Vec<u8>, CodecError> {
    Ok(URL_SAFE_NO_PAD.decode(s)?)
}
