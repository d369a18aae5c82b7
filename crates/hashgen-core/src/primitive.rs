//! Hash primitive seam.
//!
//! The deriver treats the hash function as an opaque collaborator: bytes in,
//! fixed-length digest bytes out. [`probe`] obtains one and runs a
//! known-answer self test so a broken environment fails once at startup
//! instead of on every keystroke.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256, Sha512};

use crate::encoding::SHORT_LEN;
use crate::error::{HashgenError, Result};

/// Message used for the known-answer self test (FIPS 180 "abc" vector).
const SELF_TEST_MESSAGE: &[u8] = b"abc";

/// A deterministic, fixed-length, one-way hash function.
pub trait HashPrimitive: Send + Sync {
    /// Short lowercase algorithm name (e.g. "sha256").
    fn name(&self) -> &'static str;

    /// Digest length in bytes.
    fn digest_len(&self) -> usize;

    /// Hash `data` and return exactly `digest_len()` bytes.
    fn hash(&self, data: &[u8]) -> Vec<u8>;
}

/// SHA-256, the reference primitive.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha256Primitive;

impl HashPrimitive for Sha256Primitive {
    fn name(&self) -> &'static str {
        "sha256"
    }

    fn digest_len(&self) -> usize {
        32
    }

    fn hash(&self, data: &[u8]) -> Vec<u8> {
        Sha256::digest(data).to_vec()
    }
}

/// SHA-512.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha512Primitive;

impl HashPrimitive for Sha512Primitive {
    fn name(&self) -> &'static str {
        "sha512"
    }

    fn digest_len(&self) -> usize {
        64
    }

    fn hash(&self, data: &[u8]) -> Vec<u8> {
        Sha512::digest(data).to_vec()
    }
}

/// Selectable hash algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    #[default]
    Sha256,
    Sha512,
}

impl Algorithm {
    /// Lowercase name as accepted by [`FromStr`].
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sha256 => "sha256",
            Self::Sha512 => "sha512",
        }
    }

    /// Construct the primitive without running the self test.
    pub fn primitive(&self) -> Arc<dyn HashPrimitive> {
        match self {
            Self::Sha256 => Arc::new(Sha256Primitive),
            Self::Sha512 => Arc::new(Sha512Primitive),
        }
    }

    /// Expected hex digest of the self test message.
    pub fn known_answer(&self) -> &'static str {
        match self {
            Self::Sha256 => "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad",
            Self::Sha512 => concat!(
                "ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a",
                "2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f"
            ),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = HashgenError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().replace('-', "").as_str() {
            "sha256" => Ok(Self::Sha256),
            "sha512" => Ok(Self::Sha512),
            _ => Err(HashgenError::UnknownAlgorithm(s.to_string())),
        }
    }
}

/// Obtain the primitive for `algorithm` and verify it against its known answer.
///
/// # Errors
///
/// Returns [`HashgenError::PrimitiveUnavailable`] if the self test fails.
pub fn probe(algorithm: Algorithm) -> Result<Arc<dyn HashPrimitive>> {
    let primitive = algorithm.primitive();
    verify(primitive.as_ref(), algorithm.known_answer())?;
    tracing::debug!(algorithm = %algorithm, "hash primitive self test passed");
    Ok(primitive)
}

/// Run the known-answer self test against an arbitrary primitive.
///
/// The digest must match `expected_hex`, have the advertised length, and be
/// long enough to source the short alphanumeric output.
pub fn verify(primitive: &dyn HashPrimitive, expected_hex: &str) -> Result<()> {
    let digest = primitive.hash(SELF_TEST_MESSAGE);

    if digest.len() != primitive.digest_len() {
        return Err(HashgenError::PrimitiveUnavailable(format!(
            "{} returned {} bytes, expected {}",
            primitive.name(),
            digest.len(),
            primitive.digest_len()
        )));
    }

    if digest.len() < SHORT_LEN {
        return Err(HashgenError::PrimitiveUnavailable(format!(
            "{} digest is {} bytes; at least {} required",
            primitive.name(),
            digest.len(),
            SHORT_LEN
        )));
    }

    if hex::encode(&digest) != expected_hex {
        return Err(HashgenError::PrimitiveUnavailable(format!(
            "{} failed its known-answer self test",
            primitive.name()
        )));
    }

    Ok(())
}
