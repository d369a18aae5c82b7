//! Config path resolution.

use std::path::{Path, PathBuf};

use crate::cli::Cli;
use crate::config::{default_config_path, read_config, HashgenConfig};
use crate::errors::CliError;

/// Where the config path came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// `--config` / `HASHGEN_CONFIG`
    Explicit(PathBuf),
    /// XDG default location
    Default(PathBuf),
}

impl ConfigSource {
    pub fn path(&self) -> &Path {
        match self {
            Self::Explicit(path) | Self::Default(path) => path,
        }
    }
}

pub fn resolve_config_path(cli: &Cli) -> anyhow::Result<ConfigSource> {
    if let Some(value) = cli.config.as_deref() {
        if !value.trim().is_empty() {
            return Ok(ConfigSource::Explicit(PathBuf::from(value)));
        }
    }
    Ok(ConfigSource::Default(default_config_path()?))
}

/// Load the config. A missing default file yields defaults; a missing
/// explicit file is an error.
pub fn load_config(source: &ConfigSource) -> anyhow::Result<HashgenConfig> {
    let path = source.path();
    if !path.exists() {
        return match source {
            ConfigSource::Explicit(_) => Err(CliError::not_found(
                missing_config_message(path),
                "Hint: Run `hashgen init` or drop --config to use defaults.",
            )
            .into()),
            ConfigSource::Default(_) => {
                tracing::debug!(path = %path.display(), "no config file; using defaults");
                Ok(HashgenConfig::default())
            }
        };
    }
    tracing::debug!(path = %path.display(), "loading config");
    read_config(path)
}

pub fn missing_config_message(config_path: &Path) -> String {
    format!("No config found at {}", config_path.display())
}
