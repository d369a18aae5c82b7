//! Constants used throughout the CLI.

/// Exit codes for the CLI.
///
/// These follow common Unix conventions:
/// - 0: Success
/// - 1: General error (used by anyhow for unhandled errors)
/// - 2: Misuse of shell command (reserved by shells)
/// - 3+: Application-specific errors
pub mod exit_codes {
    /// Resource not found (explicit config file).
    pub const NOT_FOUND: i32 = 3;

    /// Invalid user input or arguments.
    pub const INVALID_INPUT: i32 = 4;

    /// Hash primitive unavailable or failed its self test.
    pub const PRIMITIVE_UNAVAILABLE: i32 = 5;
}

/// Output labels, in display order.
pub mod labels {
    pub const ALNUM: &str = "16-character (alnum)";
    pub const BASE64: &str = "24-character (Base64, trimmed)";
    pub const HEX: &str = "Full digest (hex)";
}

/// Placeholder shown for empty outputs in pretty mode.
pub const PLACEHOLDER: &str = "\u{2014}";
