//! Output mode routing logic.

/// Output mode determines how results are formatted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Machine-readable JSON output only
    Json,
    /// Plain `key=value` text, stable for scripts
    #[default]
    Plain,
    /// Table with labels and colors (TTY only)
    Pretty,
}

impl OutputMode {
    /// Resolve output mode from flags and environment.
    ///
    /// Routing rules:
    /// 1. `--json` overrides everything (and rejects `--format`)
    /// 2. `--format plain` forces plain
    /// 3. `TERM=dumb` forces plain
    /// 4. Pretty only when stdout is TTY
    /// 5. Default to plain for non-TTY
    pub fn resolve(
        json_flag: bool,
        format_flag: Option<&str>,
        is_tty: bool,
        term_is_dumb: bool,
    ) -> anyhow::Result<Self> {
        if let Some(fmt) = format_flag {
            if fmt != "table" && fmt != "plain" {
                return Err(anyhow::anyhow!(
                    "Unsupported format: {} (use table or plain)",
                    fmt
                ));
            }
        }

        if json_flag {
            return Ok(Self::Json);
        }

        if format_flag == Some("plain") || term_is_dumb {
            return Ok(Self::Plain);
        }

        if is_tty {
            Ok(Self::Pretty)
        } else {
            Ok(Self::Plain)
        }
    }

    /// Check if this mode should output JSON.
    pub fn is_json(&self) -> bool {
        matches!(self, Self::Json)
    }

    /// Check if this mode should output pretty (human) format.
    pub fn is_pretty(&self) -> bool {
        matches!(self, Self::Pretty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_wins() {
        let mode = OutputMode::resolve(true, None, true, false).unwrap();
        assert_eq!(mode, OutputMode::Json);
    }

    #[test]
    fn test_plain_forces() {
        let mode = OutputMode::resolve(false, Some("plain"), true, false).unwrap();
        assert_eq!(mode, OutputMode::Plain);
    }

    #[test]
    fn test_term_dumb_forces_plain() {
        let mode = OutputMode::resolve(false, None, true, true).unwrap();
        assert_eq!(mode, OutputMode::Plain);
    }

    #[test]
    fn test_tty_gets_pretty() {
        let mode = OutputMode::resolve(false, Some("table"), true, false).unwrap();
        assert_eq!(mode, OutputMode::Pretty);
    }

    #[test]
    fn test_non_tty_gets_plain() {
        let mode = OutputMode::resolve(false, Some("table"), false, false).unwrap();
        assert_eq!(mode, OutputMode::Plain);
    }

    #[test]
    fn test_unknown_format_rejected() {
        let err = OutputMode::resolve(false, Some("yaml"), true, false).unwrap_err();
        assert!(err.to_string().contains("Unsupported format: yaml"));
    }
}
