use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use hashgen_core::Algorithm;

/// On-disk configuration. Never holds passphrase or salt.
#[derive(Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct HashgenConfig {
    #[serde(default)]
    pub hash: HashSection,
    #[serde(default)]
    pub output: OutputSection,
}

#[derive(Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct HashSection {
    #[serde(default)]
    pub algorithm: Algorithm,
}

#[derive(Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutputSection {
    /// Default output format ("table" or "plain")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    /// Echo the passphrase at the prompt by default
    #[serde(default)]
    pub reveal: bool,
}

impl HashgenConfig {
    pub fn new(algorithm: Algorithm, format: Option<String>) -> Self {
        Self {
            hash: HashSection { algorithm },
            output: OutputSection {
                format,
                reveal: false,
            },
        }
    }
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_config_dir()?.join("config.toml"))
}

pub fn read_config(path: &Path) -> anyhow::Result<HashgenConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
}

pub fn write_config(path: &Path, config: &HashgenConfig) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            anyhow::anyhow!(
                "Failed to create config directory {}: {}",
                parent.display(),
                e
            )
        })?;
    }
    let contents =
        toml::to_string_pretty(config).map_err(|e| anyhow::anyhow!("TOML error: {}", e))?;
    std::fs::write(path, contents)
        .map_err(|e| anyhow::anyhow!("Failed to write config {}: {}", path.display(), e))?;
    Ok(())
}

pub fn xdg_config_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_CONFIG_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("hashgen"));
        }
    }
    Ok(home_dir()?.join(".config").join("hashgen"))
}

fn home_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .map_err(|_| anyhow::anyhow!("HOME is not set; cannot resolve default paths"))?;
    Ok(PathBuf::from(home))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_write_then_read() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let config = HashgenConfig::new(Algorithm::Sha512, Some("plain".to_string()));

        write_config(&path, &config).unwrap();
        let loaded = read_config(&path).unwrap();

        assert_eq!(loaded, config);
        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.contains("algorithm = \"sha512\""));
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "").unwrap();

        let loaded = read_config(&path).unwrap();
        assert_eq!(loaded.hash.algorithm, Algorithm::Sha256);
        assert_eq!(loaded.output.format, None);
        assert!(!loaded.output.reveal);
    }

    #[test]
    fn test_unknown_algorithm_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[hash]\nalgorithm = \"md5\"\n").unwrap();

        let err = read_config(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config"));
    }

    #[test]
    fn test_missing_file_errors() {
        let dir = tempdir().unwrap();
        let err = read_config(&dir.path().join("missing.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config"));
    }
}
