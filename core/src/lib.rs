//! framekit
//!
//! Big-endian integer/byte conversion, length-prefixed framing, and thin
//! hash / base64 helpers. Pure and stateless: every call depends only on
//! its arguments and is safe to run from any thread.

#![forbid(unsafe_code)]

// Shared and top level
pub mod config;
pub mod constants;
pub mod types;

// Numeric + byte/frame core
pub mod bytes;
pub mod framing;
pub mod numeric;

// Collaborators
pub mod coding;
pub mod crypto;

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::bytes::{bigint_to_byte_array, bytes_to_bigint, concat_bytes, int_to_bytes};
    pub use crate::coding::{dec_url_safe, enc_url_safe};
    pub use crate::config::FrameConfig;
    pub use crate::framing::{
        framed_bytes, framed_bytes_from_bigint, framed_bytes_from_slice, framed_bytes_from_str,
        FrameInput, FrameReader, FrameWriter,
    };
    pub use crate::numeric::{big_cmp, big_mod_pos};
    pub use crate::types::CodecError;
}
