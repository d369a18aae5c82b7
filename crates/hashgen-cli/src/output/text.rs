//! Text and table output formatting for digests.

use hashgen_core::{Digests, Transition};

use crate::cli::Field;
use crate::constants::labels;
use crate::ui::format::or_placeholder;
use crate::ui::{kv, table, Column, UiContext};

/// Border and padding overhead of the two-column pretty table.
const TABLE_OVERHEAD: usize = 7;

/// Select a single output value.
pub fn field_value(digests: &Digests, field: Field) -> &str {
    match field {
        Field::Alnum => &digests.short_alnum,
        Field::Base64 => &digests.encoded_trimmed,
        Field::Hex => &digests.full_hex,
    }
}

/// Render the triple.
///
/// Pretty mode: a table (or stacked lines when the terminal is too narrow),
/// with a placeholder for empty values.
/// Plain mode: `alnum=`, `base64=`, `hex=` lines.
pub fn render_digests(ctx: &UiContext, digests: &Digests) -> String {
    let rows = [
        (labels::ALNUM, "alnum", digests.short_alnum.as_str()),
        (labels::BASE64, "base64", digests.encoded_trimmed.as_str()),
        (labels::HEX, "hex", digests.full_hex.as_str()),
    ];

    if !ctx.mode.is_pretty() {
        return rows
            .iter()
            .map(|(_, key, value)| kv(ctx, key, value))
            .collect::<Vec<_>>()
            .join("\n");
    }

    let label_width = rows.iter().map(|(label, _, _)| label.len()).max().unwrap_or(0);
    let value_width = digests.full_hex.len().max(1);
    if label_width + value_width + TABLE_OVERHEAD > ctx.width {
        return rows
            .iter()
            .map(|(label, _, value)| kv(ctx, label, or_placeholder(value)))
            .collect::<Vec<_>>()
            .join("\n");
    }

    let columns = [Column::new("Output"), Column::new("Value")];
    let table_rows: Vec<Vec<String>> = rows
        .iter()
        .map(|(label, _, value)| vec![label.to_string(), or_placeholder(value).to_string()])
        .collect();
    table(ctx, &columns, &table_rows)
}

/// Render one `watch` event.
///
/// Pretty mode: state line followed by the digests.
/// Plain mode: a single space-separated `key=value` line.
pub fn render_watch_event(
    ctx: &UiContext,
    generation: u64,
    transition: Transition,
    digests: &Digests,
) -> String {
    if ctx.mode.is_pretty() {
        let state = kv(ctx, "State", &format!("{} (#{})", transition.as_str(), generation));
        format!("{}\n{}", state, render_digests(ctx, digests))
    } else {
        let mut parts = vec![
            kv(ctx, "generation", &generation.to_string()),
            kv(ctx, "state", transition.as_str()),
        ];
        parts.push(render_digests(ctx, digests).replace('\n', " "));
        parts.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::OutputMode;
    use hashgen_core::Deriver;

    fn ctx(mode: OutputMode, width: usize) -> UiContext {
        UiContext {
            is_tty: mode == OutputMode::Pretty,
            color: false,
            unicode: false,
            width,
            mode,
        }
    }

    #[test]
    fn test_field_value() {
        let digests = Deriver::sha256().derive_pair("hello", "world");
        assert_eq!(field_value(&digests, Field::Alnum), "Ex7d5HIImkWgH12w");
        assert_eq!(
            field_value(&digests, Field::Base64),
            "VaPbYxSoiuf5e9vJEz4hXzLu"
        );
        assert_eq!(field_value(&digests, Field::Hex).len(), 64);
    }

    #[test]
    fn test_plain_rendering() {
        let digests = Deriver::sha256().derive_pair("hello", "world");
        let out = render_digests(&ctx(OutputMode::Plain, 80), &digests);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "alnum=Ex7d5HIImkWgH12w");
        assert_eq!(lines[1], "base64=VaPbYxSoiuf5e9vJEz4hXzLu");
        assert!(lines[2].starts_with("hex=55a3db63"));
    }

    #[test]
    fn test_plain_empty_has_blank_values() {
        let out = render_digests(&ctx(OutputMode::Plain, 80), &Digests::empty());
        assert_eq!(out, "alnum=\nbase64=\nhex=");
    }

    #[test]
    fn test_pretty_wide_uses_table() {
        let digests = Deriver::sha256().derive_pair("hello", "world");
        let out = render_digests(&ctx(OutputMode::Pretty, 200), &digests);
        assert!(out.contains("Output"));
        assert!(out.contains(&digests.full_hex));
    }

    #[test]
    fn test_pretty_narrow_stacks_lines() {
        let digests = Deriver::sha256().derive_pair("hello", "world");
        let out = render_digests(&ctx(OutputMode::Pretty, 60), &digests);
        assert!(!out.contains("Output"));
        assert!(out.contains(&format!("{}: {}", labels::HEX, digests.full_hex)));
    }

    #[test]
    fn test_pretty_empty_shows_placeholder() {
        let out = render_digests(&ctx(OutputMode::Pretty, 200), &Digests::empty());
        assert!(out.contains("\u{2014}"));
    }

    #[test]
    fn test_watch_event_plain_is_one_line() {
        let digests = Deriver::sha256().derive_pair("a", "");
        let out = render_watch_event(&ctx(OutputMode::Plain, 80), 2, Transition::Recomputed, &digests);
        assert_eq!(out.lines().count(), 1);
        assert!(out.starts_with("generation=2 state=recomputed alnum="));
    }
}
