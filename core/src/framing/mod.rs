//! Length-prefixed framing.
//!
//! Responsibilities:
//! - Define the closed set of frameable inputs
//! - Encode frames into the canonical byte layout
//! - Decode frames with strict validation
//!
//! Non-responsibilities:
//! - Hashing
//! - Text encodings other than UTF-8
//! - IO

pub mod types;
pub mod encode;
pub mod decode;

pub use types::{FrameInput, FrameView};
pub use encode::*;
pub use decode::*;
