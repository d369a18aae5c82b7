//! Canonical input construction.
//!
//! The passphrase and salt are joined with a single `|` and no escaping, so
//! `("a|b", "c")` and `("a", "b|c")` produce the same canonical input. Changing
//! the join would change every derived output, so it is kept as-is.

use std::fmt;

use zeroize::Zeroizing;

/// Separator placed between passphrase and salt.
pub const SEPARATOR: char = '|';

/// Suffix appended to the canonical input to source the short output.
pub const SHORT_SUFFIX: &str = "|16";

/// A (passphrase, salt) pair. Both may be empty.
///
/// Contents are wiped from memory on drop.
#[derive(Clone, Default)]
pub struct DerivationInput {
    passphrase: Zeroizing<String>,
    salt: Zeroizing<String>,
}

impl DerivationInput {
    pub fn new(passphrase: impl Into<String>, salt: impl Into<String>) -> Self {
        Self {
            passphrase: Zeroizing::new(passphrase.into()),
            salt: Zeroizing::new(salt.into()),
        }
    }

    pub fn passphrase(&self) -> &str {
        &self.passphrase
    }

    pub fn salt(&self) -> &str {
        &self.salt
    }

    /// True only when both fields are empty (the "no input" state).
    pub fn is_empty(&self) -> bool {
        self.passphrase.is_empty() && self.salt.is_empty()
    }

    /// `passphrase|salt`.
    pub fn canonical(&self) -> Zeroizing<String> {
        self.join("")
    }

    /// `passphrase|salt|16`, hashed to source the short alphanumeric output.
    pub fn short_source(&self) -> Zeroizing<String> {
        self.join(SHORT_SUFFIX)
    }

    /// `passphrase|salt` followed by `suffix`, in a buffer allocated once at
    /// its final size so no unwiped copy is left behind by a reallocation.
    fn join(&self, suffix: &str) -> Zeroizing<String> {
        let len = self.passphrase.len() + SEPARATOR.len_utf8() + self.salt.len() + suffix.len();
        let mut out = Zeroizing::new(String::with_capacity(len));
        out.push_str(&self.passphrase);
        out.push(SEPARATOR);
        out.push_str(&self.salt);
        out.push_str(suffix);
        out
    }
}

impl fmt::Debug for DerivationInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DerivationInput")
            .field("passphrase_len", &self.passphrase.len())
            .field("salt_len", &self.salt.len())
            .finish()
    }
}
