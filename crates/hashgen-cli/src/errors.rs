//! CLI error types for structured error handling.
//!
//! Typed errors map to specific exit codes so scripts can tell a missing
//! config apart from an unusable hash primitive.

use std::fmt;

use hashgen_core::HashgenError;

/// CLI-specific errors with associated exit codes.
#[derive(Debug)]
pub enum CliError {
    /// Resource not found (explicit config file)
    NotFound { message: String, hint: String },

    /// Invalid user input
    InvalidInput(String),

    /// Hashing cannot be performed in this environment
    PrimitiveUnavailable(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::NotFound { message, hint } => {
                write!(f, "{}\n{}", message, hint)
            }
            CliError::InvalidInput(message) => write!(f, "{}", message),
            CliError::PrimitiveUnavailable(message) => {
                write!(f, "Hashing unavailable: {}", message)
            }
        }
    }
}

impl std::error::Error for CliError {}

impl From<HashgenError> for CliError {
    fn from(err: HashgenError) -> Self {
        match err {
            HashgenError::PrimitiveUnavailable(message) => CliError::PrimitiveUnavailable(message),
            HashgenError::UnknownAlgorithm(_) => CliError::InvalidInput(err.to_string()),
        }
    }
}

impl CliError {
    /// Create a NotFound error with message and hint.
    pub fn not_found(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::NotFound {
            message: message.into(),
            hint: hint.into(),
        }
    }

    /// Create an InvalidInput error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        CliError::InvalidInput(message.into())
    }

    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        use super::constants::exit_codes;
        match self {
            CliError::NotFound { .. } => exit_codes::NOT_FOUND,
            CliError::InvalidInput(_) => exit_codes::INVALID_INPUT,
            CliError::PrimitiveUnavailable(_) => exit_codes::PRIMITIVE_UNAVAILABLE,
        }
    }
}

/// Resolve the exit code for an error chain, defaulting to 1.
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<CliError>())
        .map(CliError::exit_code)
        .unwrap_or(1)
}
