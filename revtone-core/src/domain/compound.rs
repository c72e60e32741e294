//! Compound score normalization and labeling

use crate::domain::error::DomainError;
use crate::domain::result::{AnalysisResult, Intensity, Sentiment};
use crate::domain::scorer::ScoreAccumulator;

/// Default smoothing constant in `raw / sqrt(raw^2 + alpha)`
pub const DEFAULT_ALPHA: f64 = 15.0;

/// Label cut-offs on the compound score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    /// Compound strictly above this is Positive
    pub positive: f64,
    /// Compound strictly below this is Negative
    pub negative: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            positive: 0.1,
            negative: -0.1,
        }
    }
}

impl Thresholds {
    pub fn new(positive: f64, negative: f64) -> Result<Self, DomainError> {
        let thresholds = Self { positive, negative };
        thresholds.validate()?;
        Ok(thresholds)
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        let in_range = |v: f64| v.is_finite() && (-1.0..=1.0).contains(&v);
        if !in_range(self.positive) || !in_range(self.negative) {
            return Err(DomainError::ConfigurationError(format!(
                "thresholds must lie within [-1, 1], got positive={} negative={}",
                self.positive, self.negative
            )));
        }
        if self.negative > 0.0 || self.positive < 0.0 {
            return Err(DomainError::ConfigurationError(format!(
                "thresholds must satisfy negative <= 0 <= positive, got positive={} negative={}",
                self.positive, self.negative
            )));
        }
        Ok(())
    }

    pub fn classify(&self, compound: f64) -> Sentiment {
        if compound > self.positive {
            Sentiment::Positive
        } else if compound < self.negative {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }
}

/// Folds accumulated sums into a compound score and label
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompoundNormalizer {
    thresholds: Thresholds,
    alpha: f64,
}

impl Default for CompoundNormalizer {
    fn default() -> Self {
        Self {
            thresholds: Thresholds::default(),
            alpha: DEFAULT_ALPHA,
        }
    }
}

impl CompoundNormalizer {
    pub fn new(thresholds: Thresholds, alpha: f64) -> Self {
        Self { thresholds, alpha }
    }

    pub fn thresholds(&self) -> Thresholds {
        self.thresholds
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Map a raw signed sum into [-1, 1]
    pub fn compound(&self, raw: f64) -> f64 {
        if raw == 0.0 || raw.is_nan() {
            return 0.0;
        }
        if raw.is_infinite() {
            return raw.signum();
        }
        // hypot keeps raw^2 from overflowing for extreme sums
        (raw / raw.hypot(self.alpha.sqrt())).clamp(-1.0, 1.0)
    }

    pub fn normalize(&self, acc: &ScoreAccumulator) -> AnalysisResult {
        let mut raw = acc.positive_sum() + acc.negative_sum();
        if raw > 0.0 {
            raw += acc.emphasis();
        } else if raw < 0.0 {
            raw -= acc.emphasis();
        }

        let compound = self.compound(raw);

        AnalysisResult {
            label: self.thresholds.classify(compound),
            compound,
            positive_sum: acc.positive_sum(),
            negative_sum: acc.negative_sum(),
            neutral_sum: acc.neutral_sum(),
            intensity: Intensity {
                positive_count: acc.positive_hits(),
                negative_count: acc.negative_hits(),
                neutral_count: acc.zero_hits(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::lexicon::Lexicon;
    use crate::domain::normalizer::TextNormalizer;
    use crate::domain::scorer::PolarityScorer;

    fn analyze(text: &str) -> AnalysisResult {
        let lexicon = Lexicon::from_code("en").unwrap();
        let stream = TextNormalizer::new(&lexicon).normalize(text);
        let acc = PolarityScorer::new(&lexicon).score(&stream);
        CompoundNormalizer::default().normalize(&acc)
    }

    #[test]
    fn test_compound_formula() {
        let normalizer = CompoundNormalizer::default();
        assert_eq!(normalizer.compound(0.0), 0.0);
        let expected = 6.3 / (6.3f64 * 6.3 + 15.0).sqrt();
        assert!((normalizer.compound(6.3) - expected).abs() < 1e-12);
        assert!((normalizer.compound(-4.5) + 4.5 / (20.25f64 + 15.0).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_compound_stays_in_range_for_huge_sums() {
        let normalizer = CompoundNormalizer::default();
        let high = normalizer.compound(1e300);
        let low = normalizer.compound(-1e300);
        assert!(high <= 1.0 && high > 0.99);
        assert!(low >= -1.0 && low < -0.99);
    }

    #[test]
    fn test_non_finite_sums() {
        let normalizer = CompoundNormalizer::default();
        assert_eq!(normalizer.compound(f64::INFINITY), 1.0);
        assert_eq!(normalizer.compound(f64::NEG_INFINITY), -1.0);
        assert_eq!(normalizer.compound(f64::NAN), 0.0);
        assert_eq!(
            normalizer.thresholds.classify(normalizer.compound(f64::INFINITY)),
            Sentiment::Positive
        );
    }

    #[test]
    fn test_threshold_boundaries_are_neutral() {
        let t = Thresholds::default();
        assert_eq!(t.classify(0.1), Sentiment::Neutral);
        assert_eq!(t.classify(-0.1), Sentiment::Neutral);
        assert_eq!(t.classify(0.1000001), Sentiment::Positive);
        assert_eq!(t.classify(-0.1000001), Sentiment::Negative);
    }

    #[test]
    fn test_threshold_validation() {
        assert!(Thresholds::new(0.05, -0.05).is_ok());
        assert!(Thresholds::new(0.0, 0.0).is_ok());
        assert!(Thresholds::new(-0.2, -0.5).is_err());
        assert!(Thresholds::new(1.5, -0.1).is_err());
        assert!(Thresholds::new(f64::NAN, -0.1).is_err());
    }

    #[test]
    fn test_emphasis_follows_sign() {
        let calm = analyze("good");
        let excited = analyze("good!!!");
        assert!(excited.compound > calm.compound);

        let angry = analyze("bad!!!");
        assert!(angry.compound < analyze("bad").compound);
    }

    #[test]
    fn test_emphasis_alone_is_neutral() {
        let result = analyze("!!!");
        assert_eq!(result.compound, 0.0);
        assert_eq!(result.label, Sentiment::Neutral);
    }

    #[test]
    fn test_intensity_counts() {
        let result = analyze("good product, average battery, terrible screen");
        assert_eq!(result.intensity.positive_count, 1);
        assert_eq!(result.intensity.negative_count, 1);
        assert_eq!(result.intensity.neutral_count, 1);
        assert_eq!(result.neutral_sum, 2.0);
    }
}
