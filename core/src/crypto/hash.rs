//! crypto/hash.rs
//! One-shot SHA-2, SHA-3, SHAKE and cSHAKE over byte slices.
//!
//! Design:
//! - Fixed-output families select the digest by bit length.
//! - XOF families take a security level (128 / 256) and an output length in
//!   bits, which must be a multiple of 8.
//! - cSHAKE with an empty function name and customization is SHAKE
//!   (NIST SP 800-185 section 3.3); that case is routed to SHAKE directly.

use digest::{Digest, ExtendableOutput, Update, XofReader};
use sha2::{Sha256, Sha384, Sha512};
use sha3::{
    CShake128, CShake128Core, CShake256, CShake256Core, Sha3_224, Sha3_256, Sha3_384, Sha3_512,
    Shake128, Shake256,
};
use tracing::debug;

use crate::constants::hash_bits;
use crate::types::CodecError;

/// Hash selection for the `hash` dispatcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HashAlg {
    Sha2 { bits: usize },
    Sha3 { bits: usize },
    Shake { bits: usize, output_bits: usize },
    CShake {
        bits: usize,
        output_bits: usize,
        function_name: Vec<u8>,
        customization: Vec<u8>,
    },
}

impl HashAlg {
    /// Digest length in bytes.
    pub fn output_len(&self) -> usize {
        match self {
            HashAlg::Sha2 { bits } | HashAlg::Sha3 { bits } => bits / 8,
            HashAlg::Shake { output_bits, .. } | HashAlg::CShake { output_bits, .. } => {
                output_bits / 8
            }
        }
    }

    /// True when the bit lengths name an implemented variant.
    pub fn is_supported(&self) -> bool {
        match self {
            HashAlg::Sha2 { bits } => hash_bits::SHA2.contains(bits),
            HashAlg::Sha3 { bits } => hash_bits::SHA3.contains(bits),
            HashAlg::Shake { bits, output_bits } | HashAlg::CShake { bits, output_bits, .. } => {
                hash_bits::SHAKE.contains(bits) && output_bits % 8 == 0
            }
        }
    }
}

/// Hash `data` with the selected algorithm.
pub fn hash(data: &[u8], alg: &HashAlg) -> Result<Vec<u8>, CodecError> {
    match alg {
        HashAlg::Sha2 { bits } => sha2_hash(data, *bits),
        HashAlg::Sha3 { bits } => sha3_hash(data, *bits),
        HashAlg::Shake { bits, output_bits } => shake_hash(data, *bits, *output_bits),
        HashAlg::CShake {
            bits,
            output_bits,
            function_name,
            customization,
        } => cshake_hash(data, *bits, *output_bits, function_name, customization),
    }
}

/// SHA-256, SHA-384 or SHA-512.
pub fn sha2_hash(data: &[u8], bits: usize) -> Result<Vec<u8>, CodecError> {
    match bits {
        256 => Ok(Sha256::digest(data).to_vec()),
        384 => Ok(Sha384::digest(data).to_vec()),
        512 => Ok(Sha512::digest(data).to_vec()),
        _ => Err(unsupported("SHA-2", bits)),
    }
}

/// SHA3-224, SHA3-256, SHA3-384 or SHA3-512.
pub fn sha3_hash(data: &[u8], bits: usize) -> Result<Vec<u8>, CodecError> {
    match bits {
        224 => Ok(Sha3_224::digest(data).to_vec()),
        256 => Ok(Sha3_256::digest(data).to_vec()),
        384 => Ok(Sha3_384::digest(data).to_vec()),
        512 => Ok(Sha3_512::digest(data).to_vec()),
        _ => Err(unsupported("SHA-3", bits)),
    }
}

/// SHAKE128 / SHAKE256 squeezed to `output_bits`.
pub fn shake_hash(data: &[u8], bits: usize, output_bits: usize) -> Result<Vec<u8>, CodecError> {
    let out_len = xof_output_len(output_bits)?;
    match bits {
        128 => Ok(squeeze(Shake128::default(), data, out_len)),
        256 => Ok(squeeze(Shake256::default(), data, out_len)),
        _ => Err(unsupported("SHAKE", bits)),
    }
}

/// cSHAKE128 / cSHAKE256 with function name `N` and customization `S`.
pub fn cshake_hash(
    data: &[u8],
    bits: usize,
    output_bits: usize,
    function_name: &[u8],
    customization: &[u8],
) -> Result<Vec<u8>, CodecError> {
    let out_len = xof_output_len(output_bits)?;
    let plain = function_name.is_empty() && customization.is_empty();
    match (bits, plain) {
        (128, true) => Ok(squeeze(Shake128::default(), data, out_len)),
        (256, true) => Ok(squeeze(Shake256::default(), data, out_len)),
        (128, false) => {
            let core = CShake128Core::new_with_function_name(function_name, customization);
            Ok(squeeze(CShake128::from_core(core), data, out_len))
        }
        (256, false) => {
            let core = CShake256Core::new_with_function_name(function_name, customization);
            Ok(squeeze(CShake256::from_core(core), data, out_len))
        }
        _ => Err(unsupported("cSHAKE", bits)),
    }
}

fn xof_output_len(output_bits: usize) -> Result<usize, CodecError> {
    if output_bits % 8 != 0 {
        return Err(CodecError::InvalidArgument(format!(
            "output length must be a multiple of 8 bits, got {}",
            output_bits
        )));
    }
    Ok(output_bits / 8)
}

fn squeeze<H: Update + ExtendableOutput>(mut hasher: H, data: &[u8], out_len: usize) -> Vec<u8> {
    hasher.update(data);
    let mut out = vec![0u8; out_len];
    hasher.finalize_xof().read(&mut out);
    out
}

fn unsupported(family: &'static str, bits: usize) -> CodecError {
    debug!(family, bits, "unsupported hash variant");
    CodecError::UnsupportedVariant { family, bits }
}
