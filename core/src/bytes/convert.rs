//! bytes/convert.rs
//! Integer <-> big-endian byte conversion.
//!
//! Design notes:
//! - `bytes_to_bigint` is unsigned: the high bit of the first byte is magnitude, not sign.
//! - `bigint_to_byte_array(0)` is `[0x00]`, never empty. Framing depends on it:
//!   every integer frame carries at least one magnitude byte.
//! - Fixed-width encoders refuse to truncate; a value that needs more than
//!   `byte_len` bytes is an `Overflow`.

use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{Signed, Zero};
use tracing::trace;

use crate::types::CodecError;

/// Interpret `bytes` as an unsigned big-endian magnitude. Empty input is zero.
#[inline]
pub fn bytes_to_bigint(bytes: &[u8]) -> BigInt {
    BigInt::from_bytes_be(Sign::Plus, bytes)
}

/// Serialize a non-negative big integer to its minimal big-endian form.
///
/// # Returns
/// - `[0x00]` for zero.
/// - The magnitude bytes, without a leading zero, for positive values.
///
/// # Errors
/// - `CodecError::InvalidArgument` for negative values. This function never
///   encodes a sign; signed values go through `framed_bytes_from_bigint`.
pub fn bigint_to_byte_array(value: &BigInt) -> Result<Vec<u8>, CodecError> {
    if value.is_negative() {
        return Err(CodecError::InvalidArgument(format!(
            "bigint_to_byte_array only supports non-negative values, got {}",
            value
        )));
    }
    Ok(magnitude_bytes(value.magnitude()))
}

/// Minimal big-endian bytes of an unsigned magnitude, `[0x00]` for zero.
#[inline]
pub(crate) fn magnitude_bytes(magnitude: &BigUint) -> Vec<u8> {
    if magnitude.is_zero() {
        return vec![0];
    }
    magnitude.to_bytes_be()
}

/// Encode a non-negative integer into exactly `byte_len` big-endian bytes.
///
/// `int_to_bytes(258, 2) == [0x01, 0x02]`
///
/// # Errors
/// - `InvalidArgument` if `byte_len == 0` or `i < 0` (checked in that order).
/// - `Overflow` if `i >= 2^(8 * byte_len)`.
pub fn int_to_bytes(i: i64, byte_len: usize) -> Result<Vec<u8>, CodecError> {
    if byte_len == 0 {
        return Err(CodecError::InvalidArgument(
            "int_to_bytes: byte_len must be positive".into(),
        ));
    }
    let value = u64::try_from(i).map_err(|_| {
        CodecError::InvalidArgument(format!(
            "int_to_bytes only supports non-negative integers, got {}",
            i
        ))
    })?;
    encode_fixed_width(value, byte_len)
}

/// `int_to_bytes` for payload lengths, without a signed round-trip.
pub fn usize_to_bytes(len: usize, byte_len: usize) -> Result<Vec<u8>, CodecError> {
    if byte_len == 0 {
        return Err(CodecError::InvalidArgument(
            "usize_to_bytes: byte_len must be positive".into(),
        ));
    }
    let value = u64::try_from(len)
        .map_err(|_| CodecError::Overflow(format!("length {} exceeds 64 bits", len)))?;
    encode_fixed_width(value, byte_len)
}

fn encode_fixed_width(value: u64, byte_len: usize) -> Result<Vec<u8>, CodecError> {
    // Widths of 8 bytes or more hold every u64.
    if byte_len < 8 && value >> (8 * byte_len) != 0 {
        trace!(value, byte_len, "fixed-width encode overflow");
        return Err(CodecError::Overflow(format!(
            "{} does not fit in {} byte(s)",
            value, byte_len
        )));
    }

    let be = value.to_be_bytes();
    let mut out = vec![0u8; byte_len];
    if byte_len >= be.len() {
        out[byte_len - be.len()..].copy_from_slice(&be);
    } else {
        out.copy_from_slice(&be[be.len() - byte_len..]);
    }
    Ok(out)
}

/// Concatenate byte slices in argument order into one fresh buffer.
pub fn concat_bytes(parts: &[&[u8]]) -> Vec<u8> {
    let total = parts.iter().map(|p| p.len()).sum();
    let mut out = Vec::with_capacity(total);
    for part in parts {
        out.extend_from_slice(part);
    }
    out
}
