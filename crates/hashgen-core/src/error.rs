//! Error types for hashgen core operations.
//!
//! Derivation itself is total over the string domain, so the only failures
//! here concern obtaining a working hash primitive. The CLI layer maps these
//! to user-facing messages and exit codes.

use thiserror::Error;

/// Result type alias for hashgen operations.
pub type Result<T> = std::result::Result<T, HashgenError>;

/// Core error type for hashgen operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HashgenError {
    /// The hashing capability cannot be obtained or failed its self test
    #[error("Hash primitive unavailable: {0}")]
    PrimitiveUnavailable(String),

    /// Algorithm name not recognized
    #[error("Unknown algorithm: {0} (use sha256 or sha512)")]
    UnknownAlgorithm(String),
}
