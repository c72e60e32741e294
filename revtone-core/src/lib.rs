//! Lexicon-based polarity scoring for product reviews
//!
//! Review text is normalized into tokens, each token is scored against an
//! immutable lexicon of signed valences (with negation, intensifier, contrast,
//! capitalization and punctuation rules), and the accumulated sums are folded
//! into a compound score in `[-1, 1]` with a discrete label.
//!
//! # Architecture
//!
//! - **Domain layer**: lexicon tables and the pure normalize → score →
//!   compound pipeline
//! - **API layer**: configuration, input sources and the shared
//!   [`SentimentAnalyzer`]
//!
//! # Example
//!
//! ```rust
//! use revtone_core::{Sentiment, SentimentAnalyzer};
//!
//! let analyzer = SentimentAnalyzer::new().unwrap();
//!
//! let result = analyzer.analyze("This product is great and works perfectly");
//! assert_eq!(result.label, Sentiment::Positive);
//! assert!(result.compound > 0.1);
//!
//! let result = analyzer.analyze("");
//! assert_eq!(result.label, Sentiment::Neutral);
//! assert_eq!(result.compound, 0.0);
//! ```

pub mod api;
pub mod domain;

pub use api::{Config, ConfigBuilder, Error, Input, LexiconSource, Result, SentimentAnalyzer};
pub use domain::{
    list_available_lexicons, AnalysisResult, DomainError, Intensity, Lexicon, Sentiment, Thresholds,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_exports() {
        let analyzer = SentimentAnalyzer::new().unwrap();
        let _result: AnalysisResult = analyzer.analyze("fine");
        let _thresholds = Thresholds::default();
        let _intensity = Intensity::default();
        assert!(list_available_lexicons().contains(&"en"));
    }
}
