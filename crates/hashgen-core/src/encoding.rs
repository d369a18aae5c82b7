//! Display encodings for digests.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// Alphabet for the short output: lowercase, then uppercase, then digits.
pub const ALNUM_ALPHABET: &[u8; 62] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Length of the trimmed base-64 output.
pub const ENCODED_LEN: usize = 24;

/// Length of the short alphanumeric output.
pub const SHORT_LEN: usize = 16;

/// Lowercase hex, two characters per byte.
pub fn full_hex(digest: &[u8]) -> String {
    hex::encode(digest)
}

/// Standard base-64 with trailing `=` stripped, then cut to `len` characters.
pub fn trimmed_base64(digest: &[u8], len: usize) -> String {
    let encoded = STANDARD.encode(digest);
    let stripped = encoded.trim_end_matches('=');
    // base-64 output is ASCII, so byte slicing is char slicing
    stripped[..stripped.len().min(len)].to_string()
}

/// Map the first `len` bytes to [`ALNUM_ALPHABET`] by `byte % 62`.
pub fn short_alnum(digest: &[u8], len: usize) -> String {
    digest
        .iter()
        .take(len)
        .map(|byte| ALNUM_ALPHABET[(*byte as usize) % ALNUM_ALPHABET.len()] as char)
        .collect()
}
