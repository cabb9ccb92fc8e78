//! framing/decode.rs
//! Strict parsing of length-prefixed frames.
//!
//! Only the canonical encoding produced by `framing::encode` is accepted:
//! - sign byte is exactly `0x00` or `0x01`
//! - magnitude is non-empty with no leading zero byte (except zero itself)
//! - negative zero is rejected
//!
//! All views borrow from the caller's buffer; nothing is copied until a
//! `BigInt` or `String` is materialized.

use num_bigint::{BigInt, Sign};
use tracing::debug;

use crate::constants::{SIGN_NEGATIVE, SIGN_NON_NEGATIVE};
use crate::framing::types::FrameView;
use crate::types::CodecError;

/// Read the big-endian length prefix at the start of `wire`.
///
/// # Errors
/// - `InvalidArgument` for a zero width.
/// - `Truncated` if `wire` is shorter than the prefix.
/// - `Overflow` if the announced length does not fit in `usize`.
pub fn read_length_prefix(wire: &[u8], length_prefix_bytes: usize) -> Result<usize, CodecError> {
    if length_prefix_bytes == 0 {
        return Err(CodecError::InvalidArgument(
            "length_prefix_bytes must be positive".into(),
        ));
    }
    if wire.len() < length_prefix_bytes {
        return Err(CodecError::Truncated {
            needed: length_prefix_bytes,
            available: wire.len(),
        });
    }

    wire[..length_prefix_bytes]
        .iter()
        .try_fold(0usize, |acc, &b| {
            acc.checked_mul(256)?.checked_add(usize::from(b))
        })
        .ok_or_else(|| {
            CodecError::Overflow(format!(
                "{}-byte length prefix exceeds usize",
                length_prefix_bytes
            ))
        })
}

/// Split `[ LEN ][ payload ][ rest.. ]` into payload and rest.
pub fn decode_framed_bytes(
    wire: &[u8],
    length_prefix_bytes: usize,
) -> Result<FrameView<'_>, CodecError> {
    let len = read_length_prefix(wire, length_prefix_bytes)?;
    let body = &wire[length_prefix_bytes..];
    if body.len() < len {
        return Err(truncated(wire, length_prefix_bytes, len));
    }

    let (payload, rest) = body.split_at(len);
    Ok(FrameView { payload, rest })
}

/// Decode `[ LEN(magnitude) ][ sign ][ magnitude ][ rest.. ]`.
pub fn decode_framed_bigint(
    wire: &[u8],
    length_prefix_bytes: usize,
) -> Result<(BigInt, &[u8]), CodecError> {
    let len = read_length_prefix(wire, length_prefix_bytes)?;
    let body = &wire[length_prefix_bytes..];
    // sign byte + magnitude
    if body.is_empty() || body.len() - 1 < len {
        return Err(truncated(wire, length_prefix_bytes, len.saturating_add(1)));
    }

    let sign = match body[0] {
        SIGN_NON_NEGATIVE => Sign::Plus,
        SIGN_NEGATIVE => Sign::Minus,
        other => {
            debug!(sign = other, "decode_framed_bigint: bad sign byte");
            return Err(CodecError::Malformed(format!(
                "sign byte must be 0 or 1, got {}",
                other
            )));
        }
    };

    let (magnitude, rest) = body[1..].split_at(len);
    match magnitude {
        [] => {
            return Err(CodecError::Malformed("empty magnitude".into()));
        }
        [0] if sign == Sign::Minus => {
            return Err(CodecError::Malformed("negative zero".into()));
        }
        [0, _, ..] => {
            return Err(CodecError::Malformed(
                "magnitude has a leading zero byte".into(),
            ));
        }
        _ => {}
    }

    Ok((BigInt::from_bytes_be(sign, magnitude), rest))
}

/// Decode a UTF-8 string frame.
pub fn decode_framed_string(
    wire: &[u8],
    length_prefix_bytes: usize,
) -> Result<(String, &[u8]), CodecError> {
    let view = decode_framed_bytes(wire, length_prefix_bytes)?;
    let s = std::str::from_utf8(view.payload)?;
    Ok((s.to_owned(), view.rest))
}

fn truncated(wire: &[u8], length_prefix_bytes: usize, body_len: usize) -> CodecError {
    CodecError::Truncated {
        needed: length_prefix_bytes.saturating_add(body_len),
        available: wire.len(),
    }
}

/// Cursor over consecutive frames sharing one prefix width.
///
/// The caller knows the frame sequence (e.g. `bytes, bigint, string`) and
/// pulls each frame with the matching `next_*` call.
#[derive(Debug, Clone)]
pub struct FrameReader<'a> {
    wire: &'a [u8],
    length_prefix_bytes: usize,
}

impl<'a> FrameReader<'a> {
    /// Errors with `InvalidArgument` for a zero width.
    pub fn new(wire: &'a [u8], length_prefix_bytes: usize) -> Result<Self, CodecError> {
        if length_prefix_bytes == 0 {
            return Err(CodecError::InvalidArgument(
                "length_prefix_bytes must be positive".into(),
            ));
        }
        Ok(Self {
            wire,
            length_prefix_bytes,
        })
    }

    pub fn next_bytes(&mut self) -> Result<&'a [u8], CodecError> {
        let view = decode_framed_bytes(self.wire, self.length_prefix_bytes)?;
        self.wire = view.rest;
        Ok(view.payload)
    }

    pub fn next_bigint(&mut self) -> Result<BigInt, CodecError> {
        let (value, rest) = decode_framed_bigint(self.wire, self.length_prefix_bytes)?;
        self.wire = rest;
        Ok(value)
    }

    /// Borrowed UTF-8 view of the next frame.
    pub fn next_str(&mut self) -> Result<&'a str, CodecError> {
        let view = decode_framed_bytes(self.wire, self.length_prefix_bytes)?;
        let s = std::str::from_utf8(view.payload)?;
        self.wire = view.rest;
        Ok(s)
    }

    pub fn next_string(&mut self) -> Result<String, CodecError> {
        self.next_str().map(str::to_owned)
    }

    /// Unread bytes.
    pub fn remaining(&self) -> &'a [u8] {
        self.wire
    }

    pub fn is_empty(&self) -> bool {
        self.wire.is_empty()
    }

    /// Fails with `Malformed` if unread bytes are left.
    pub fn finish(self) -> Result<(), CodecError> {
        if self.wire.is_empty() {
            Ok(())
        } else {
            Err(CodecError::Malformed(format!(
                "{} trailing byte(s) after last frame",
                self.wire.len()
            )))
        }
    }
}
