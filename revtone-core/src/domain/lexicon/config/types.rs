use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Largest absolute valence a lexicon entry may carry
pub const MAX_VALENCE: f64 = 4.0;

/// Upper bound for every additive or multiplicative rule constant
pub const MAX_RULE_SCALE: f64 = 4.0;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LexiconConfig {
    pub metadata: MetadataConfig,
    #[serde(default)]
    pub rules: RulesConfig,
    #[serde(default)]
    pub words: HashMap<String, f64>,
    #[serde(default)]
    pub idioms: HashMap<String, f64>,
    #[serde(default)]
    pub emoticons: HashMap<String, f64>,
    #[serde(default)]
    pub modifiers: ModifierConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetadataConfig {
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub version: String,
}

/// Scoring constants shipped alongside the lexicon table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// How many preceding tokens a negation or intensifier reaches
    pub window: usize,
    /// Scale adjustment contributed by one intensifier (or dampener)
    pub booster_increment: f64,
    /// Per-distance falloff of a booster, indexed by distance - 1
    pub booster_decay: Vec<f64>,
    /// Multiplier applied to a negated valence
    pub negation_scalar: f64,
    /// Magnitude added to an ALL-CAPS hit in mixed-case text
    pub caps_increment: f64,
    pub exclamation_increment: f64,
    pub max_exclamations: usize,
    pub question_increment: f64,
    pub max_questions: usize,
    pub question_cap: f64,
    /// Scale for contributions before the first contrast word
    pub contrast_before: f64,
    /// Scale for contributions after the first contrast word
    pub contrast_after: f64,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            window: 3,
            booster_increment: 0.293,
            booster_decay: vec![1.0, 0.95, 0.9],
            negation_scalar: -0.74,
            caps_increment: 0.733,
            exclamation_increment: 0.292,
            max_exclamations: 4,
            question_increment: 0.18,
            max_questions: 3,
            question_cap: 0.96,
            contrast_before: 0.5,
            contrast_after: 1.5,
        }
    }
}

impl RulesConfig {
    /// Booster falloff for a modifier `distance` tokens before the hit.
    ///
    /// Distances past the end of the decay table reuse its last entry.
    pub fn decay(&self, distance: usize) -> f64 {
        if distance == 0 {
            return 1.0;
        }
        self.booster_decay
            .get(distance - 1)
            .or_else(|| self.booster_decay.last())
            .copied()
            .unwrap_or(1.0)
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        let invalid = |msg: String| Err(DomainError::InvalidLexicon(msg));

        if self.window == 0 {
            return invalid("rules.window must be at least 1".into());
        }
        if !(0.0..1.0).contains(&self.booster_increment) {
            return invalid(format!(
                "rules.booster_increment must be in [0, 1), got {}",
                self.booster_increment
            ));
        }
        if self.booster_decay.is_empty() {
            return invalid("rules.booster_decay must not be empty".into());
        }
        if let Some(d) = self
            .booster_decay
            .iter()
            .find(|d| !(**d > 0.0 && **d <= 1.0))
        {
            return invalid(format!("rules.booster_decay entries must be in (0, 1], got {d}"));
        }
        if !(-1.0..0.0).contains(&self.negation_scalar) {
            return invalid(format!(
                "rules.negation_scalar must be in [-1, 0), got {}",
                self.negation_scalar
            ));
        }

        let non_negative = [
            ("caps_increment", self.caps_increment),
            ("exclamation_increment", self.exclamation_increment),
            ("question_increment", self.question_increment),
            ("question_cap", self.question_cap),
            ("contrast_before", self.contrast_before),
            ("contrast_after", self.contrast_after),
        ];
        for (name, value) in non_negative {
            if !(0.0..=MAX_RULE_SCALE).contains(&value) {
                return invalid(format!(
                    "rules.{name} must be in [0, {MAX_RULE_SCALE}], got {value}"
                ));
            }
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModifierConfig {
    #[serde(default)]
    pub negations: Vec<String>,
    #[serde(default)]
    pub intensifiers: Vec<String>,
    #[serde(default)]
    pub dampeners: Vec<String>,
    #[serde(default)]
    pub contrasts: Vec<String>,
}

impl LexiconConfig {
    /// Check the table for entries that would make scoring meaningless
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.metadata.code.trim().is_empty() {
            return Err(DomainError::InvalidLexicon(
                "metadata.code must not be empty".into(),
            ));
        }
        if self.metadata.version.trim().is_empty() {
            return Err(DomainError::InvalidLexicon(format!(
                "metadata.version must not be empty for lexicon '{}'",
                self.metadata.code
            )));
        }

        self.rules.validate()?;

        for (table, entries) in [
            ("words", &self.words),
            ("idioms", &self.idioms),
            ("emoticons", &self.emoticons),
        ] {
            for (key, valence) in entries {
                if key.trim().is_empty() {
                    return Err(DomainError::InvalidLexicon(format!(
                        "{table} contains an empty key"
                    )));
                }
                if !valence.is_finite() || valence.abs() > MAX_VALENCE {
                    return Err(DomainError::InvalidLexicon(format!(
                        "{table}.{key}: valence {valence} outside [-{MAX_VALENCE}, {MAX_VALENCE}]"
                    )));
                }
            }
        }

        if let Some(word) = self.words.keys().find(|w| w.split_whitespace().count() != 1) {
            return Err(DomainError::InvalidLexicon(format!(
                "words entry '{word}' must be a single token (use [idioms] for phrases)"
            )));
        }

        if let Some(idiom) = self
            .idioms
            .keys()
            .find(|phrase| phrase.split_whitespace().count() < 2)
        {
            return Err(DomainError::InvalidLexicon(format!(
                "idiom '{idiom}' must contain at least two tokens"
            )));
        }

        let words: HashSet<String> = self.words.keys().map(|w| w.to_lowercase()).collect();
        let modifier_lists = [
            ("negations", &self.modifiers.negations),
            ("intensifiers", &self.modifiers.intensifiers),
            ("dampeners", &self.modifiers.dampeners),
            ("contrasts", &self.modifiers.contrasts),
        ];
        for (list, entries) in modifier_lists {
            if let Some(word) = entries.iter().find(|w| words.contains(&w.to_lowercase())) {
                return Err(DomainError::InvalidLexicon(format!(
                    "modifiers.{list} entry '{word}' is also a scored word"
                )));
            }
        }

        let intensifiers: HashSet<String> = self
            .modifiers
            .intensifiers
            .iter()
            .map(|w| w.to_lowercase())
            .collect();
        if let Some(word) = self
            .modifiers
            .dampeners
            .iter()
            .find(|w| intensifiers.contains(&w.to_lowercase()))
        {
            return Err(DomainError::InvalidLexicon(format!(
                "'{word}' is listed as both an intensifier and a dampener"
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal() -> LexiconConfig {
        toml::from_str(
            r#"
            [metadata]
            code = "test"
            name = "Test"
            version = "0.1"

            [words]
            good = 1.9
            bad = -2.5

            [idioms]
            "waste of money" = -2.5

            [modifiers]
            negations = ["not"]
            intensifiers = ["very"]
            dampeners = ["slightly"]
            contrasts = ["but"]
        "#,
        )
        .unwrap()
    }

    #[test]
    fn test_lexicon_config_deserialize() {
        let config = minimal();
        assert_eq!(config.metadata.code, "test");
        assert_eq!(config.words.len(), 2);
        assert_eq!(config.idioms["waste of money"], -2.5);
        assert_eq!(config.modifiers.negations, vec!["not"]);
        // Omitted [rules] falls back to the reference constants
        assert_eq!(config.rules, RulesConfig::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_rules_override() {
        let config: LexiconConfig = toml::from_str(
            r#"
            [metadata]
            code = "x"
            name = "X"
            version = "1"

            [rules]
            window = 5
        "#,
        )
        .unwrap();
        assert_eq!(config.rules.window, 5);
        assert_eq!(config.rules.negation_scalar, -0.74);
    }

    #[test]
    fn test_decay_past_table_end() {
        let rules = RulesConfig::default();
        assert_eq!(rules.decay(1), 1.0);
        assert_eq!(rules.decay(2), 0.95);
        assert_eq!(rules.decay(3), 0.9);
        assert_eq!(rules.decay(7), 0.9);
    }

    #[test]
    fn test_rejects_out_of_range_valence() {
        let mut config = minimal();
        config.words.insert("stellar".into(), 4.5);
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("stellar"));
    }

    #[test]
    fn test_rejects_single_token_idiom() {
        let mut config = minimal();
        config.idioms.insert("solo".into(), 1.0);
        assert!(matches!(
            config.validate(),
            Err(DomainError::InvalidLexicon(_))
        ));
    }

    #[test]
    fn test_rejects_modifier_that_is_also_a_word() {
        let mut config = minimal();
        config.modifiers.negations.push("Bad".into());
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("negations"));
    }

    #[test]
    fn test_rejects_empty_version() {
        let mut config = minimal();
        config.metadata.version = " ".into();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_positive_negation_scalar() {
        let mut config = minimal();
        config.rules.negation_scalar = 0.5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_zero_window() {
        let mut config = minimal();
        config.rules.window = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_oversized_rule_scales() {
        let mut config = minimal();
        config.rules.contrast_after = 1e308;
        assert!(config.validate().is_err());

        let mut config = minimal();
        config.rules.caps_increment = MAX_RULE_SCALE + 0.1;
        assert!(config.validate().is_err());

        let mut config = minimal();
        config.rules.contrast_after = MAX_RULE_SCALE;
        assert!(config.validate().is_ok());
    }
}
