//! Configuration module

use crate::error::CliError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// Analysis configuration
    #[serde(default)]
    pub analysis: AnalysisConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Review history configuration
    #[serde(default)]
    pub store: StoreConfig,
}

/// Analysis-related configuration
///
/// Unset fields fall back to the library defaults.
#[derive(Debug, Deserialize, Serialize, Default)]
#[serde(deny_unknown_fields)]
pub struct AnalysisConfig {
    /// Built-in lexicon code
    pub lexicon: Option<String>,

    /// External lexicon file, relative paths resolve against the config file
    pub lexicon_file: Option<PathBuf>,

    pub positive_threshold: Option<f64>,

    pub negative_threshold: Option<f64>,
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: String,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "text".to_string(),
            pretty_json: true,
        }
    }
}

/// Review history configuration
#[derive(Debug, Deserialize, Serialize, Default)]
#[serde(deny_unknown_fields)]
pub struct StoreConfig {
    /// JSON Lines file that analyzed reviews are appended to
    pub path: Option<PathBuf>,
}

impl CliConfig {
    /// Load a configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let mut config: CliConfig = toml::from_str(&content)
            .map_err(|e| CliError::ConfigError(format!("{}: {e}", path.display())))?;

        if config.analysis.lexicon.is_some() && config.analysis.lexicon_file.is_some() {
            return Err(CliError::ConfigError(format!(
                "{}: set either analysis.lexicon or analysis.lexicon_file, not both",
                path.display()
            ))
            .into());
        }

        if let Some(base) = path.parent() {
            config.analysis.lexicon_file = config
                .analysis
                .lexicon_file
                .take()
                .map(|file| resolve_relative(base, file));
            config.store.path = config
                .store
                .path
                .take()
                .map(|file| resolve_relative(base, file));
        }

        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }
}

fn resolve_relative(base: &Path, file: PathBuf) -> PathBuf {
    if file.is_relative() {
        base.join(file)
    } else {
        file
    }
}
