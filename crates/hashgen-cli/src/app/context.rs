//! Application context for the hashgen CLI.
//!
//! Combines CLI arguments with the lazily-loaded config and hands out UI
//! contexts and derivers to command handlers.

use once_cell::unsync::OnceCell;

use std::sync::Arc;

use hashgen_core::{probe, Algorithm, Deriver, HashPrimitive};

use crate::cli::Cli;
use crate::config::HashgenConfig;
use crate::errors::CliError;
use crate::ui::UiContext;

use super::resolver::{load_config, resolve_config_path, ConfigSource};

/// Application context that bundles CLI args with configuration.
pub struct AppContext<'a> {
    cli: &'a Cli,
    config: OnceCell<HashgenConfig>,
}

impl<'a> AppContext<'a> {
    /// Create a new application context from CLI arguments.
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            config: OnceCell::new(),
        }
    }

    /// Check if quiet mode is enabled.
    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// Where the config file lives (or would live).
    pub fn config_source(&self) -> anyhow::Result<ConfigSource> {
        resolve_config_path(self.cli)
    }

    /// Get the configuration, loading it lazily if needed.
    pub fn config(&self) -> anyhow::Result<&HashgenConfig> {
        self.config
            .get_or_try_init(|| load_config(&resolve_config_path(self.cli)?))
    }

    /// Build a UI context. `format` falls back to the configured default.
    pub fn ui_context(&self, json: bool, format: Option<&str>) -> anyhow::Result<UiContext> {
        let configured = match format {
            Some(_) => None,
            None if json => None,
            None => self.config()?.output.format.clone(),
        };
        UiContext::from_env(
            json,
            format.or(configured.as_deref()),
            self.cli.no_color,
            self.cli.ascii,
        )
    }

    /// UI context for error reporting; never fails.
    pub fn fallback_ui_context(&self) -> UiContext {
        UiContext::fallback(self.cli.no_color, self.cli.ascii)
    }

    /// Resolve the algorithm from an override or the config.
    pub fn algorithm(&self, requested: Option<&str>) -> anyhow::Result<Algorithm> {
        match requested {
            Some(name) => Ok(name.parse::<Algorithm>().map_err(CliError::from)?),
            None => Ok(self.config()?.hash.algorithm),
        }
    }

    /// Obtain a self-tested deriver. Fails once, up front, if hashing is
    /// unavailable.
    pub fn deriver(&self, requested: Option<&str>) -> anyhow::Result<Deriver> {
        self.deriver_with(requested, probe)
    }

    /// [`AppContext::deriver`] with the probe supplied by the caller.
    pub fn deriver_with<F>(&self, requested: Option<&str>, probe_fn: F) -> anyhow::Result<Deriver>
    where
        F: FnOnce(Algorithm) -> hashgen_core::Result<Arc<dyn HashPrimitive>>,
    {
        let algorithm = self.algorithm(requested)?;
        let primitive = probe_fn(algorithm).map_err(CliError::from)?;
        tracing::info!(algorithm = %algorithm, "hash primitive ready");
        Ok(Deriver::new(primitive))
    }
}
