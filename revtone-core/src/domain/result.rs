use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Discrete sentiment label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Negative => "Negative",
            Sentiment::Neutral => "Neutral",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sentiment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "positive" => Ok(Sentiment::Positive),
            "negative" => Ok(Sentiment::Negative),
            "neutral" => Ok(Sentiment::Neutral),
            other => Err(format!("unknown sentiment label: {other}")),
        }
    }
}

/// Per-category hit counts, suitable for charting
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Intensity {
    pub positive_count: usize,
    pub negative_count: usize,
    /// Hits on zero-valence entries such as "average"
    pub neutral_count: usize,
}

/// Outcome of analyzing one text
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    #[serde(rename = "sentiment")]
    pub label: Sentiment,
    /// Normalized score in [-1, 1]
    pub compound: f64,
    pub positive_sum: f64,
    pub negative_sum: f64,
    /// Number of hits with a nonzero lexicon valence
    pub neutral_sum: f64,
    pub intensity: Intensity,
}

impl AnalysisResult {
    /// Result for text with no scorable content
    pub fn neutral() -> Self {
        Self {
            label: Sentiment::Neutral,
            compound: 0.0,
            positive_sum: 0.0,
            negative_sum: 0.0,
            neutral_sum: 0.0,
            intensity: Intensity::default(),
        }
    }
}
