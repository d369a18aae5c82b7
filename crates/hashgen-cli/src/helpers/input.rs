//! Passphrase and salt acquisition.

use std::io::BufRead;

use dialoguer::{Input, Password};
use zeroize::Zeroizing;

/// Where interactive input may come from.
#[derive(Debug, Clone, Copy)]
pub struct InputSource {
    /// Read the passphrase from the first stdin line
    pub stdin: bool,
    /// Prompts are allowed (TTY and no `--no-input`)
    pub interactive: bool,
    /// Echo the passphrase while typing
    pub reveal: bool,
}

/// Resolve the passphrase: `--stdin`, then flag/env, then prompt.
///
/// With no source available the passphrase is empty, which is a valid input.
pub fn read_passphrase(
    provided: Option<&str>,
    source: InputSource,
) -> anyhow::Result<Zeroizing<String>> {
    if source.stdin {
        let stdin = std::io::stdin();
        return read_first_line(&mut stdin.lock());
    }
    if let Some(value) = provided {
        return Ok(Zeroizing::new(value.to_string()));
    }
    if !source.interactive {
        return Ok(Zeroizing::new(String::new()));
    }

    let value = if source.reveal {
        Input::<String>::new()
            .with_prompt("Passphrase")
            .allow_empty(true)
            .interact_text()
    } else {
        Password::new()
            .with_prompt("Passphrase")
            .allow_empty_password(true)
            .interact()
    }
    .map_err(|e| anyhow::anyhow!("Failed to read passphrase: {}", e))?;
    Ok(Zeroizing::new(value))
}

/// Resolve the salt: flag/env, then an optional prompt.
pub fn read_salt(provided: Option<&str>, interactive: bool) -> anyhow::Result<Zeroizing<String>> {
    if let Some(value) = provided {
        return Ok(Zeroizing::new(value.to_string()));
    }
    if !interactive {
        return Ok(Zeroizing::new(String::new()));
    }
    let value = Input::<String>::new()
        .with_prompt("Salt (optional)")
        .allow_empty(true)
        .interact_text()
        .map_err(|e| anyhow::anyhow!("Failed to read salt: {}", e))?;
    Ok(Zeroizing::new(value))
}

/// Read one line, without its line terminator.
pub fn read_first_line(reader: &mut impl BufRead) -> anyhow::Result<Zeroizing<String>> {
    let mut line = Zeroizing::new(String::new());
    reader
        .read_line(&mut line)
        .map_err(|e| anyhow::anyhow!("Failed to read stdin: {}", e))?;
    let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed_len);
    Ok(line)
}

/// Split a `watch` edit line into (passphrase, salt) at the first tab.
pub fn parse_watch_line(line: &str) -> (&str, &str) {
    let line = line.trim_end_matches(['\n', '\r']);
    match line.split_once('\t') {
        Some((passphrase, salt)) => (passphrase, salt),
        None => (line, ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn non_interactive() -> InputSource {
        InputSource {
            stdin: false,
            interactive: false,
            reveal: false,
        }
    }

    #[test]
    fn test_provided_passphrase_wins() {
        let value = read_passphrase(Some("hello"), non_interactive()).unwrap();
        assert_eq!(value.as_str(), "hello");
    }

    #[test]
    fn test_missing_passphrase_without_tty_is_empty() {
        let value = read_passphrase(None, non_interactive()).unwrap();
        assert!(value.is_empty());
    }

    #[test]
    fn test_missing_salt_without_tty_is_empty() {
        assert!(read_salt(None, false).unwrap().is_empty());
        assert_eq!(read_salt(Some("pepper"), false).unwrap().as_str(), "pepper");
    }

    #[test]
    fn test_read_first_line_strips_terminator() {
        let mut cursor = Cursor::new("secret\r\nsecond line\n");
        assert_eq!(read_first_line(&mut cursor).unwrap().as_str(), "secret");
    }

    #[test]
    fn test_read_first_line_keeps_inner_whitespace() {
        let mut cursor = Cursor::new("  spaced out  \n");
        assert_eq!(
            read_first_line(&mut cursor).unwrap().as_str(),
            "  spaced out  "
        );
    }

    #[test]
    fn test_read_first_line_empty_input() {
        let mut cursor = Cursor::new("");
        assert!(read_first_line(&mut cursor).unwrap().is_empty());
    }

    #[test]
    fn test_parse_watch_line() {
        assert_eq!(parse_watch_line("hello\tworld\n"), ("hello", "world"));
        assert_eq!(parse_watch_line("hello"), ("hello", ""));
        assert_eq!(parse_watch_line("\tsalt"), ("", "salt"));
        assert_eq!(parse_watch_line("a\tb\tc"), ("a", "b\tc"));
        assert_eq!(parse_watch_line(""), ("", ""));
    }
}
