//! framing/encode.rs
//! Length-prefixed frame constructors.
//!
//! Design notes:
//! - The prefix always counts the bytes of the payload that directly
//!   follows it. For big integers that is the magnitude only; the sign byte
//!   sits between prefix and magnitude and is not counted.
//! - A payload whose length does not fit the prefix width is an `Overflow`,
//!   never a truncated prefix.

use num_bigint::BigInt;
use num_traits::Signed;
use tracing::{debug, trace};

use crate::bytes::{concat_bytes, magnitude_bytes, usize_to_bytes};
use crate::constants::{SIGN_NEGATIVE, SIGN_NON_NEGATIVE};
use crate::framing::types::FrameInput;
use crate::types::CodecError;

/// Frame raw bytes: `[ LEN(data) ][ data ]`.
///
/// `framed_bytes_from_slice(&[0xAA, 0xBB], 2) == [0x00, 0x02, 0xAA, 0xBB]`
pub fn framed_bytes_from_slice(
    data: &[u8],
    length_prefix_bytes: usize,
) -> Result<Vec<u8>, CodecError> {
    let prefix = usize_to_bytes(data.len(), length_prefix_bytes)?;
    Ok(concat_bytes(&[prefix.as_slice(), data]))
}

/// Frame a signed big integer: `[ LEN(magnitude) ][ sign ][ magnitude ]`.
///
/// `sign` is `0x01` for negative values, `0x00` otherwise. Zero encodes as
/// a one-byte magnitude `[0x00]`.
///
/// `framed_bytes_from_bigint(-258, 1) == [0x02, 0x01, 0x01, 0x02]`
pub fn framed_bytes_from_bigint(
    value: &BigInt,
    length_prefix_bytes: usize,
) -> Result<Vec<u8>, CodecError> {
    let sign = sign_byte(value);
    let magnitude = magnitude_bytes(value.magnitude());
    let prefix = usize_to_bytes(magnitude.len(), length_prefix_bytes)?;
    Ok(concat_bytes(&[prefix.as_slice(), &[sign], magnitude.as_slice()]))
}

/// Frame the UTF-8 bytes of `s`: `[ LEN(utf8) ][ utf8 ]`.
#[inline]
pub fn framed_bytes_from_str(s: &str, length_prefix_bytes: usize) -> Result<Vec<u8>, CodecError> {
    framed_bytes_from_slice(s.as_bytes(), length_prefix_bytes)
}

/// Frame any of the three accepted shapes.
pub fn framed_bytes(input: &FrameInput, length_prefix_bytes: usize) -> Result<Vec<u8>, CodecError> {
    trace!(kind = input.kind(), length_prefix_bytes, "framing input");
    let out = match input {
        FrameInput::Bytes(data) => framed_bytes_from_slice(data, length_prefix_bytes),
        FrameInput::BigInt(value) => framed_bytes_from_bigint(value, length_prefix_bytes),
        FrameInput::Str(s) => framed_bytes_from_str(s, length_prefix_bytes),
    };
    if let Err(e) = &out {
        debug!(kind = input.kind(), length_prefix_bytes, error = %e, "framing failed");
    }
    out
}

#[inline]
fn sign_byte(value: &BigInt) -> u8 {
    if value.is_negative() {
        SIGN_NEGATIVE
    } else {
        SIGN_NON_NEGATIVE
    }
}

/// Appends consecutive frames of one prefix width into a single buffer.
///
/// Equivalent to concatenating the outputs of the `framed_bytes_*`
/// functions, without the intermediate allocations.
#[derive(Debug, Clone)]
pub struct FrameWriter {
    length_prefix_bytes: usize,
    buf: Vec<u8>,
}

impl FrameWriter {
    /// Errors with `InvalidArgument` for a zero width.
    pub fn new(length_prefix_bytes: usize) -> Result<Self, CodecError> {
        if length_prefix_bytes == 0 {
            return Err(CodecError::InvalidArgument(
                "length_prefix_bytes must be positive".into(),
            ));
        }
        Ok(Self {
            length_prefix_bytes,
            buf: Vec::new(),
        })
    }

    pub fn length_prefix_bytes(&self) -> usize {
        self.length_prefix_bytes
    }

    /// Encoded length so far.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn push_bytes(&mut self, data: &[u8]) -> Result<&mut Self, CodecError> {
        let prefix = usize_to_bytes(data.len(), self.length_prefix_bytes)?;
        self.buf.reserve(prefix.len() + data.len());
        self.buf.extend_from_slice(&prefix);
        self.buf.extend_from_slice(data);
        Ok(self)
    }

    pub fn push_bigint(&mut self, value: &BigInt) -> Result<&mut Self, CodecError> {
        let magnitude = magnitude_bytes(value.magnitude());
        let prefix = usize_to_bytes(magnitude.len(), self.length_prefix_bytes)?;
        self.buf.reserve(prefix.len() + 1 + magnitude.len());
        self.buf.extend_from_slice(&prefix);
        self.buf.push(sign_byte(value));
        self.buf.extend_from_slice(&magnitude);
        Ok(self)
    }

    pub fn push_str(&mut self, s: &str) -> Result<&mut Self, CodecError> {
        self.push_bytes(s.as_bytes())
    }

    pub fn push(&mut self, input: &FrameInput) -> Result<&mut Self, CodecError> {
        match input {
            FrameInput::Bytes(data) => self.push_bytes(data),
            FrameInput::BigInt(value) => self.push_bigint(value),
            FrameInput::Str(s) => self.push_str(s),
        }
    }

    /// Consume the writer and return the encoded frames.
    pub fn finish(self) -> Vec<u8> {
        self.buf
    }
}
