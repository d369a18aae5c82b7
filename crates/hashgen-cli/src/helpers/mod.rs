//! Input helper functions for the CLI.

mod input;

pub use input::{parse_watch_line, read_passphrase, read_salt, InputSource};
