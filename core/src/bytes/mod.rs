//! bytes/mod.rs
//! Big-endian conversions between integers and byte sequences.
//!
//! Responsibilities:
//! - Unsigned big-endian import of arbitrary-length byte strings
//! - Minimal magnitude export of non-negative big integers
//! - Fixed-width, overflow-checked integer encoding
//! - Concatenation
//!
//! Non-responsibilities:
//! - Sign handling (see `framing`)

pub mod convert;

pub use convert::*;
