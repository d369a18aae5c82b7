//! The digest deriver.
//!
//! Turns a (passphrase, salt) pair into three display strings:
//!
//! - **full_hex**: hex of `H(passphrase|salt)`
//! - **encoded_trimmed**: unpadded base-64 of the same digest, first 24 chars
//! - **short_alnum**: 16 chars from `H(passphrase|salt|16)` mapped mod 62
//!
//! The triple is either fully populated or fully empty.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use crate::canonical::DerivationInput;
use crate::encoding::{full_hex, short_alnum, trimmed_base64, ENCODED_LEN, SHORT_LEN};
use crate::primitive::{HashPrimitive, Sha256Primitive};

/// The three derived outputs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Digests {
    pub full_hex: String,
    pub encoded_trimmed: String,
    pub short_alnum: String,
}

impl Digests {
    /// The "no input" triple.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.full_hex.is_empty()
    }
}

/// Deterministic deriver over a shared hash primitive.
#[derive(Clone)]
pub struct Deriver {
    primitive: Arc<dyn HashPrimitive>,
}

impl Deriver {
    pub fn new(primitive: Arc<dyn HashPrimitive>) -> Self {
        Self { primitive }
    }

    /// Deriver over the reference SHA-256 primitive.
    pub fn sha256() -> Self {
        Self::new(Arc::new(Sha256Primitive))
    }

    pub fn algorithm(&self) -> &'static str {
        self.primitive.name()
    }

    /// Derive the output triple. Both fields empty yields [`Digests::empty`]
    /// without hashing anything.
    pub fn derive(&self, input: &DerivationInput) -> Digests {
        if input.is_empty() {
            tracing::trace!("empty input; skipping derivation");
            return Digests::empty();
        }

        let canonical = input.canonical();
        let primary = self.primitive.hash(canonical.as_bytes());
        let secondary = self.primitive.hash(input.short_source().as_bytes());

        tracing::debug!(
            algorithm = self.primitive.name(),
            input_len = canonical.len(),
            "derived digests"
        );

        Digests {
            full_hex: full_hex(&primary),
            encoded_trimmed: trimmed_base64(&primary, ENCODED_LEN),
            short_alnum: short_alnum(&secondary, SHORT_LEN),
        }
    }

    /// Convenience wrapper over [`Deriver::derive`].
    pub fn derive_pair(&self, passphrase: &str, salt: &str) -> Digests {
        self.derive(&DerivationInput::new(passphrase, salt))
    }
}

impl fmt::Debug for Deriver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Deriver")
            .field("algorithm", &self.primitive.name())
            .finish()
    }
}

impl Default for Deriver {
    fn default() -> Self {
        Self::sha256()
    }
}
