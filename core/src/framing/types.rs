//! framing/types.rs
//! Frame input shapes and borrowed decode views.

use num_bigint::BigInt;
use serde_json::Value;

use crate::types::CodecError;

/// The three frameable shapes.
///
/// Wire layouts (`LEN` is `length_prefix_bytes` wide, big-endian):
///
/// ```text
/// Bytes  : [ LEN(payload) ][ payload ]
/// BigInt : [ LEN(magnitude) ][ sign (1) ][ magnitude ]
/// Str    : [ LEN(utf8) ][ utf8 ]
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameInput {
    Bytes(Vec<u8>),
    BigInt(BigInt),
    Str(String),
}

impl FrameInput {
    /// Short name for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            FrameInput::Bytes(_) => "bytes",
            FrameInput::BigInt(_) => "bigint",
            FrameInput::Str(_) => "string",
        }
    }

    /// Classify an untyped JSON value.
    ///
    /// - string                          -> `Str`
    /// - integer number                  -> `BigInt`
    /// - array of integers in `0..=255`  -> `Bytes`
    /// - `{"bigint": "<decimal>"}`       -> `BigInt` (any size)
    ///
    /// Everything else (null, bool, float, other objects, arrays holding
    /// non-byte values) is `CodecError::UnsupportedType`.
    pub fn from_json(value: &Value) -> Result<Self, CodecError> {
        match value {
            Value::String(s) => Ok(FrameInput::Str(s.clone())),

            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Ok(FrameInput::BigInt(BigInt::from(i)))
                } else if let Some(u) = n.as_u64() {
                    Ok(FrameInput::BigInt(BigInt::from(u)))
                } else {
                    Err(CodecError::UnsupportedType(format!(
                        "non-integer number {}",
                        n
                    )))
                }
            }

            Value::Array(items) => items
                .iter()
                .map(|item| {
                    item.as_u64()
                        .and_then(|b| u8::try_from(b).ok())
                        .ok_or_else(|| {
                            CodecError::UnsupportedType(format!(
                                "array element {} is not a byte",
                                item
                            ))
                        })
                })
                .collect::<Result<Vec<u8>, _>>()
                .map(FrameInput::Bytes),

            Value::Object(map) => match (map.len(), map.get("bigint")) {
                (1, Some(Value::String(digits))) => digits
                    .parse::<BigInt>()
                    .map(FrameInput::BigInt)
                    .map_err(|e| {
                        CodecError::InvalidArgument(format!(
                            "bad decimal bigint {:?}: {}",
                            digits, e
                        ))
                    }),
                _ => Err(CodecError::UnsupportedType(
                    "object other than {\"bigint\": \"<decimal>\"}".into(),
                )),
            },

            Value::Null => Err(CodecError::UnsupportedType("null".into())),
            Value::Bool(_) => Err(CodecError::UnsupportedType("bool".into())),
        }
    }
}

impl From<Vec<u8>> for FrameInput {
    fn from(v: Vec<u8>) -> Self {
        FrameInput::Bytes(v)
    }
}

impl From<&[u8]> for FrameInput {
    fn from(v: &[u8]) -> Self {
        FrameInput::Bytes(v.to_vec())
    }
}

impl From<BigInt> for FrameInput {
    fn from(v: BigInt) -> Self {
        FrameInput::BigInt(v)
    }
}

impl From<i64> for FrameInput {
    fn from(v: i64) -> Self {
        FrameInput::BigInt(BigInt::from(v))
    }
}

impl From<u64> for FrameInput {
    fn from(v: u64) -> Self {
        FrameInput::BigInt(BigInt::from(v))
    }
}

impl From<String> for FrameInput {
    fn from(v: String) -> Self {
        FrameInput::Str(v)
    }
}

impl From<&str> for FrameInput {
    fn from(v: &str) -> Self {
        FrameInput::Str(v.to_owned())
    }
}

/// One decoded raw frame, borrowed from the wire buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameView<'a> {
    /// Payload bytes (exactly the announced length).
    pub payload: &'a [u8],
    /// Bytes after this frame.
    pub rest: &'a [u8],
}
