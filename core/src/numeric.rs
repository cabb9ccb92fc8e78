//! numeric.rs
//! Arbitrary-precision helpers: true modulo and three-way comparison.

use std::cmp::Ordering;

use num_bigint::BigInt;
use num_traits::Signed;
use tracing::debug;

use crate::types::CodecError;

/// Summary: `x mod n` with the result always in `[0, n)`.
///
/// `%` on `BigInt` truncates toward zero, so the remainder carries the sign
/// of `x`; a negative remainder is shifted up by `n`.
/// `big_mod_pos(-1, 5) == 4`.
///
/// Errors:
/// - `n <= 0` returns `CodecError::InvalidArgument`.
pub fn big_mod_pos(x: &BigInt, n: &BigInt) -> Result<BigInt, CodecError> {
    if !n.is_positive() {
        debug!(modulus = %n, "big_mod_pos: rejecting non-positive modulus");
        return Err(CodecError::InvalidArgument(format!(
            "modulus must be positive, got {}",
            n
        )));
    }

    let r = x % n;
    if r.is_negative() {
        Ok(r + n)
    } else {
        Ok(r)
    }
}

/// Three-way comparison of two big integers.
#[inline]
pub fn big_cmp(a: &BigInt, b: &BigInt) -> Ordering {
    a.cmp(b)
}

/// Integer form of an `Ordering`: -1, 0 or 1.
#[inline]
pub const fn ordering_to_i8(ord: Ordering) -> i8 {
    match ord {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    }
}

