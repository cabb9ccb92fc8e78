//! constants.rs
//! Wire constants shared by the conversion, framing and hash modules.

/// Sign byte written after the length prefix of a non-negative big integer frame.
pub const SIGN_NON_NEGATIVE: u8 = 0x00;
/// Sign byte written after the length prefix of a negative big integer frame.
pub const SIGN_NEGATIVE: u8 = 0x01;

/// Defaults when no width is configured (4-byte prefix, lengths up to 4 GiB).
pub const DEFAULT_LENGTH_PREFIX_BYTES: usize = 4;
/// Widest prefix `FrameConfig::validate` accepts. The free functions take any width.
pub const MAX_LENGTH_PREFIX_BYTES: usize = 8;

/// Supported digest sizes per hash family (in bits).
pub mod hash_bits {
    pub const SHA2: &[usize] = &[256, 384, 512];
    pub const SHA3: &[usize] = &[224, 256, 384, 512];
    /// Security level of SHAKE / cSHAKE, not the output length.
    pub const SHAKE: &[usize] = &[128, 256];
}
