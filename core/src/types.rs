//! types.rs
//! Unified error for conversion, framing, hashing and base64.
//!
//! - One enum so `?` flows across module seams without mapping.
//! - Messages are stable and carry the offending values for logs.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// Negative value where non-negative is required, zero width, bad modulus.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Value does not fit in the requested fixed width.
    #[error("overflow: {0}")]
    Overflow(String),

    /// Hash family does not implement the requested bit length.
    #[error("unsupported {family} variant: {bits} bits")]
    UnsupportedVariant { family: &'static str, bits: usize },

    /// Dynamic input outside the three frameable shapes.
    #[error("unsupported input type: {0}")]
    UnsupportedType(String),

    /// Malformed URL-safe base64.
    #[error("invalid encoding: {0}")]
    InvalidEncoding(String),

    /// Buffer ends before the frame it announces.
    #[error("truncated frame: need {needed} bytes, have {available}")]
    Truncated { needed: usize, available: usize },

    /// Frame bytes present but not canonical.
    #[error("malformed frame: {0}")]
    Malformed(String),
}

impl From<base64::DecodeError> for CodecError {
    fn from(e: base64::DecodeError) -> Self {
        CodecError::InvalidEncoding(e.to_string())
    }
}

impl From<std::str::Utf8Error> for CodecError {
    fn from(e: std::str::Utf8Error) -> Self {
        CodecError::Malformed(format!("payload is not UTF-8: {}", e))
    }
}
