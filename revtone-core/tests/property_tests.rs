//! Property tests for the analysis invariants

use proptest::prelude::*;
use revtone_core::{Sentiment, SentimentAnalyzer};
use std::sync::OnceLock;

fn analyzer() -> &'static SentimentAnalyzer {
    static ANALYZER: OnceLock<SentimentAnalyzer> = OnceLock::new();
    ANALYZER.get_or_init(|| SentimentAnalyzer::new().unwrap())
}

fn review_words() -> impl Strategy<Value = String> {
    let vocabulary = prop::sample::select(vec![
        "good", "GREAT", "not", "very", "slightly", "bad", "terrible", "but", "the",
        "product", "waste", "of", "money", ":)", ":(", "okay", "nothing", "special", "!", "??",
        "never", "AWFUL", "love", "average",
    ]);
    prop::collection::vec(vocabulary, 0..40).prop_map(|words| words.join(" "))
}

proptest! {
    #[test]
    fn compound_stays_in_range(text in any::<String>()) {
        let result = analyzer().analyze(&text);
        prop_assert!((-1.0..=1.0).contains(&result.compound));
        prop_assert!(result.compound.is_finite());
    }

    #[test]
    fn label_agrees_with_compound(text in review_words()) {
        let result = analyzer().analyze(&text);
        let expected = if result.compound > 0.1 {
            Sentiment::Positive
        } else if result.compound < -0.1 {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        };
        prop_assert_eq!(result.label, expected);
        prop_assert!((-1.0..=1.0).contains(&result.compound));
    }

    #[test]
    fn analysis_is_deterministic(text in review_words()) {
        let first = analyzer().analyze(&text);
        let second = analyzer().analyze(&text);
        let fresh = SentimentAnalyzer::new().unwrap().analyze(&text);
        prop_assert_eq!(first, second);
        prop_assert_eq!(first, fresh);
    }

    #[test]
    fn sums_have_expected_signs(text in review_words()) {
        let result = analyzer().analyze(&text);
        prop_assert!(result.positive_sum >= 0.0);
        prop_assert!(result.negative_sum <= 0.0);
        prop_assert!(result.neutral_sum >= 0.0);
        prop_assert_eq!(
            result.neutral_sum as usize,
            result.intensity.positive_count + result.intensity.negative_count
        );
    }
}
