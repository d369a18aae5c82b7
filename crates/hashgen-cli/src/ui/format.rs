//! String formatting utilities for UI rendering.

use crate::constants::PLACEHOLDER;

/// Truncate a string to max length, adding ellipsis if needed.
pub fn truncate(s: &str, max_len: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_len {
        return s.to_string();
    }
    if max_len <= 3 {
        return s.chars().take(max_len).collect();
    }
    let truncated: String = s.chars().take(max_len - 3).collect();
    format!("{}...", truncated)
}

/// Hide a secret behind one mask symbol per character.
pub fn mask(secret: &str, unicode: bool) -> String {
    let symbol = if unicode { "\u{2022}" } else { "*" };
    symbol.repeat(secret.chars().count())
}

/// Show `value`, or the placeholder when empty.
pub fn or_placeholder(value: &str) -> &str {
    if value.is_empty() {
        PLACEHOLDER
    } else {
        value
    }
}

/// Sanitize a string for single-line output (replace newlines with spaces).
pub fn single_line(s: &str) -> String {
    s.replace('\n', " ").replace('\r', "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short() {
        assert_eq!(truncate("hello", 10), "hello");
    }

    #[test]
    fn test_truncate_long() {
        assert_eq!(truncate("hello world", 8), "hello...");
    }

    #[test]
    fn test_truncate_very_short_max() {
        assert_eq!(truncate("hello", 2), "he");
    }

    #[test]
    fn test_mask_counts_chars_not_bytes() {
        assert_eq!(mask("pä", false), "**");
        assert_eq!(mask("abc", true), "\u{2022}\u{2022}\u{2022}");
        assert_eq!(mask("", true), "");
    }

    #[test]
    fn test_or_placeholder() {
        assert_eq!(or_placeholder(""), "\u{2014}");
        assert_eq!(or_placeholder("abc"), "abc");
    }

    #[test]
    fn test_single_line() {
        assert_eq!(single_line("hello\nworld"), "hello world");
        assert_eq!(single_line("a\r\nb"), "a b");
    }
}
