//! Configuration API for sentiment analysis

use crate::api::Error;
use crate::domain::{Thresholds, DEFAULT_ALPHA};
use std::path::{Path, PathBuf};

/// Default configuration constants
pub mod defaults {
    /// Built-in lexicon used when none is configured
    pub const LEXICON: &str = "en";

    /// Compound score above which a review is Positive
    pub const POSITIVE_THRESHOLD: f64 = 0.1;

    /// Compound score below which a review is Negative
    pub const NEGATIVE_THRESHOLD: f64 = -0.1;

    /// Smoothing constant of the compound normalization
    pub const ALPHA: f64 = crate::domain::DEFAULT_ALPHA;
}

/// Where the lexicon table comes from
#[derive(Debug, Clone, PartialEq)]
pub enum LexiconSource {
    /// Table embedded in the crate, by code
    BuiltIn(String),
    /// External TOML file
    File(PathBuf),
}

impl Default for LexiconSource {
    fn default() -> Self {
        LexiconSource::BuiltIn(defaults::LEXICON.to_string())
    }
}

impl LexiconSource {
    pub fn display_name(&self) -> String {
        match self {
            LexiconSource::BuiltIn(code) => format!("Built-in: {code}"),
            LexiconSource::File(path) => format!("External: {}", path.display()),
        }
    }
}

/// Analysis configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub(crate) lexicon: LexiconSource,
    pub(crate) thresholds: Thresholds,
    pub(crate) alpha: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            lexicon: LexiconSource::default(),
            thresholds: Thresholds::default(),
            alpha: DEFAULT_ALPHA,
        }
    }
}

impl Config {
    /// Create a configuration builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    pub fn lexicon(&self) -> &LexiconSource {
        &self.lexicon
    }

    pub fn thresholds(&self) -> Thresholds {
        self.thresholds
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Validate the configuration
    pub(crate) fn validate(&self) -> Result<(), Error> {
        if let LexiconSource::BuiltIn(code) = &self.lexicon {
            if code.trim().is_empty() {
                return Err(Error::Configuration("lexicon code must not be empty".into()));
            }
        }

        self.thresholds
            .validate()
            .map_err(|e| Error::Configuration(e.to_string()))?;

        if !self.alpha.is_finite() || self.alpha <= 0.0 {
            return Err(Error::Configuration(format!(
                "alpha must be a positive finite number, got {}",
                self.alpha
            )));
        }

        Ok(())
    }
}

/// Fluent builder for configuration
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    lexicon: Option<LexiconSource>,
    positive: Option<f64>,
    negative: Option<f64>,
    alpha: Option<f64>,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a built-in lexicon by code
    pub fn lexicon(mut self, code: impl Into<String>) -> Self {
        self.lexicon = Some(LexiconSource::BuiltIn(code.into()));
        self
    }

    /// Use an external lexicon table
    pub fn lexicon_file(mut self, path: impl AsRef<Path>) -> Self {
        self.lexicon = Some(LexiconSource::File(path.as_ref().to_path_buf()));
        self
    }

    /// Set both label thresholds
    pub fn thresholds(mut self, positive: f64, negative: f64) -> Self {
        self.positive = Some(positive);
        self.negative = Some(negative);
        self
    }

    pub fn positive_threshold(mut self, positive: f64) -> Self {
        self.positive = Some(positive);
        self
    }

    pub fn negative_threshold(mut self, negative: f64) -> Self {
        self.negative = Some(negative);
        self
    }

    /// Set the compound smoothing constant
    pub fn alpha(mut self, alpha: f64) -> Self {
        self.alpha = Some(alpha);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config, Error> {
        let mut config = Config::default();

        if let Some(source) = self.lexicon {
            config.lexicon = source;
        }

        if let Some(positive) = self.positive {
            config.thresholds.positive = positive;
        }

        if let Some(negative) = self.negative {
            config.thresholds.negative = negative;
        }

        if let Some(alpha) = self.alpha {
            config.alpha = alpha;
        }

        config.validate()?;
        Ok(config)
    }
}
