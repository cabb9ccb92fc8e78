//! config.rs
//! Framing configuration.
//!
//! Summary: a single knob today, the length prefix width. Hosts usually
//! load it once (e.g. from JSON) and frame everything through it so every
//! call site agrees on the wire width.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_LENGTH_PREFIX_BYTES, MAX_LENGTH_PREFIX_BYTES};
use crate::framing::{framed_bytes, FrameInput, FrameReader, FrameWriter};
use crate::types::CodecError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FrameConfig {
    /// Bytes reserved for each frame's big-endian length prefix.
    pub length_prefix_bytes: usize,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            length_prefix_bytes: DEFAULT_LENGTH_PREFIX_BYTES,
        }
    }
}

impl FrameConfig {
    pub fn new(length_prefix_bytes: usize) -> Result<Self, CodecError> {
        let cfg = Self { length_prefix_bytes };
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse and validate a JSON document such as `{"length_prefix_bytes": 2}`.
    /// Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, CodecError> {
        let cfg: Self = serde_json::from_str(json)
            .map_err(|e| CodecError::InvalidArgument(format!("frame config: {}", e)))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Width must be in `1..=MAX_LENGTH_PREFIX_BYTES`.
    pub fn validate(&self) -> Result<(), CodecError> {
        if (1..=MAX_LENGTH_PREFIX_BYTES).contains(&self.length_prefix_bytes) {
            Ok(())
        } else {
            Err(CodecError::InvalidArgument(format!(
                "length_prefix_bytes must be in 1..={}, got {}",
                MAX_LENGTH_PREFIX_BYTES, self.length_prefix_bytes
            )))
        }
    }

    /// Largest payload length the prefix can announce.
    pub fn max_payload_len(&self) -> u64 {
        if self.length_prefix_bytes >= 8 {
            u64::MAX
        } else {
            (1u64 << (8 * self.length_prefix_bytes)) - 1
        }
    }

    pub fn frame(&self, input: &FrameInput) -> Result<Vec<u8>, CodecError> {
        framed_bytes(input, self.length_prefix_bytes)
    }

    pub fn writer(&self) -> Result<FrameWriter, CodecError> {
        FrameWriter::new(self.length_prefix_bytes)
    }

    pub fn reader<'a>(&self, wire: &'a [u8]) -> Result<FrameReader<'a>, CodecError> {
        FrameReader::new(wire, self.length_prefix_bytes)
    }
}
