use crate::domain::{
    error::DomainError,
    lexicon::config::{get_lexicon_config, LexiconConfig, RulesConfig},
    normalizer::Token,
};
use std::borrow::Cow;
use std::collections::{HashMap, HashSet};
use std::path::Path;

/// A scored lexicon key and its valence
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LexiconEntry<'a> {
    /// Lowercase token, idiom phrase, or emoticon
    pub token: &'a str,
    /// Signed intensity in [-4, 4]
    pub valence: f64,
}

/// Read-only word, idiom and modifier tables used for polarity scoring
///
/// A `Lexicon` is built once and never mutated afterwards, so it can be
/// shared between any number of threads behind an `Arc`.
#[derive(Debug, Clone)]
pub struct Lexicon {
    code: String,
    name: String,
    version: String,

    words: HashMap<String, f64>,
    idioms: HashMap<String, f64>,
    /// First token of every idiom, for a cheap miss at most positions
    idiom_heads: HashSet<String>,
    max_idiom_len: usize,
    emoticons: HashMap<String, f64>,

    negations: HashSet<String>,
    /// Intensifiers map above 1.0, dampeners below
    boosters: HashMap<String, f64>,
    contrasts: HashSet<String>,

    rules: RulesConfig,
}

fn normalize_key(key: &str) -> String {
    key.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

fn lowercase(token: &str) -> Cow<'_, str> {
    if token.chars().any(char::is_uppercase) {
        Cow::Owned(token.to_lowercase())
    } else {
        Cow::Borrowed(token)
    }
}

impl Lexicon {
    /// Load one of the built-in lexicons by code
    pub fn from_code(code: &str) -> Result<Self, DomainError> {
        let config = get_lexicon_config(code)?;
        Self::from_config(config)
    }

    /// Load a lexicon table from an external TOML file
    pub fn from_file(path: &Path) -> Result<Self, DomainError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            DomainError::ConfigurationError(format!(
                "Failed to read file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_toml_str(&content).map_err(|e| match e {
            DomainError::ConfigurationError(msg) => DomainError::ConfigurationError(format!(
                "{} (in '{}')",
                msg,
                path.display()
            )),
            other => other,
        })
    }

    /// Parse and validate a lexicon table from TOML source
    pub fn from_toml_str(content: &str) -> Result<Self, DomainError> {
        let config: LexiconConfig = toml::from_str(content)
            .map_err(|e| DomainError::ConfigurationError(format!("Failed to parse TOML: {e}")))?;
        Self::from_config(&config)
    }

    /// Build the lookup tables from a parsed configuration
    pub fn from_config(config: &LexiconConfig) -> Result<Self, DomainError> {
        config.validate()?;

        let words: HashMap<String, f64> = config
            .words
            .iter()
            .map(|(k, v)| (normalize_key(k), *v))
            .collect();

        let idioms: HashMap<String, f64> = config
            .idioms
            .iter()
            .map(|(k, v)| (normalize_key(k), *v))
            .collect();

        let idiom_heads = idioms
            .keys()
            .filter_map(|phrase| phrase.split(' ').next())
            .map(str::to_string)
            .collect();

        let max_idiom_len = idioms
            .keys()
            .map(|phrase| phrase.split(' ').count())
            .max()
            .unwrap_or(0);

        let emoticons = config
            .emoticons
            .iter()
            .map(|(k, v)| (k.trim().to_lowercase(), *v))
            .collect();

        let lowered = |list: &[String]| -> HashSet<String> {
            list.iter().map(|w| w.trim().to_lowercase()).collect()
        };

        let increment = config.rules.booster_increment;
        let mut boosters = HashMap::new();
        for word in &config.modifiers.intensifiers {
            boosters.insert(word.trim().to_lowercase(), 1.0 + increment);
        }
        for word in &config.modifiers.dampeners {
            boosters.insert(word.trim().to_lowercase(), 1.0 - increment);
        }

        let lexicon = Self {
            code: config.metadata.code.clone(),
            name: config.metadata.name.clone(),
            version: config.metadata.version.clone(),
            words,
            idioms,
            idiom_heads,
            max_idiom_len,
            emoticons,
            negations: lowered(&config.modifiers.negations),
            boosters,
            contrasts: lowered(&config.modifiers.contrasts),
            rules: config.rules.clone(),
        };

        log::debug!(
            "Loaded lexicon '{}' v{}: {} words, {} idioms, {} emoticons, {} negations, {} boosters",
            lexicon.code,
            lexicon.version,
            lexicon.words.len(),
            lexicon.idioms.len(),
            lexicon.emoticons.len(),
            lexicon.negations.len(),
            lexicon.boosters.len(),
        );

        Ok(lexicon)
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn rules(&self) -> &RulesConfig {
        &self.rules
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    pub fn idiom_count(&self) -> usize {
        self.idioms.len()
    }

    pub fn emoticon_count(&self) -> usize {
        self.emoticons.len()
    }

    pub fn modifier_count(&self) -> usize {
        self.negations.len() + self.boosters.len() + self.contrasts.len()
    }

    /// Look up a single token, emoticon, or space-separated idiom phrase
    pub fn lookup(&self, token_or_phrase: &str) -> Option<LexiconEntry<'_>> {
        let key = lowercase(token_or_phrase);
        let key = key.as_ref();

        self.words
            .get_key_value(key)
            .or_else(|| self.emoticons.get_key_value(key))
            .or_else(|| self.idioms.get_key_value(key))
            .map(|(token, valence)| LexiconEntry {
                token,
                valence: *valence,
            })
    }

    /// Longest idiom starting at `start`, with the number of tokens it spans
    pub fn match_idiom(&self, tokens: &[Token], start: usize) -> Option<(LexiconEntry<'_>, usize)> {
        let head = tokens.get(start)?;
        if self.max_idiom_len < 2 || !self.idiom_heads.contains(head.text.as_str()) {
            return None;
        }

        let longest = self.max_idiom_len.min(tokens.len() - start);
        (2..=longest).rev().find_map(|span| {
            let phrase = tokens[start..start + span]
                .iter()
                .map(|t| t.text.as_str())
                .collect::<Vec<_>>()
                .join(" ");
            self.idioms
                .get_key_value(phrase.as_str())
                .map(|(token, valence)| {
                    (
                        LexiconEntry {
                            token,
                            valence: *valence,
                        },
                        span,
                    )
                })
        })
    }

    pub fn is_emoticon(&self, surface: &str) -> bool {
        self.emoticons.contains_key(lowercase(surface).as_ref())
    }

    pub fn is_negation(&self, token: &str) -> bool {
        self.negations.contains(lowercase(token).as_ref())
    }

    /// Multiplier for an intensifier (> 1.0) or dampener (< 1.0)
    pub fn intensifier(&self, token: &str) -> Option<f64> {
        self.boosters.get(lowercase(token).as_ref()).copied()
    }

    pub fn is_contrast(&self, token: &str) -> bool {
        self.contrasts.contains(lowercase(token).as_ref())
    }
}
