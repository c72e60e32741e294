//! JSON output formatter

use super::OutputFormatter;
use crate::input::Review;
use anyhow::Result;
use revtone_core::AnalysisResult;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - outputs reviews as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    reviews: Vec<ReviewData>,
    pretty: bool,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct ReviewData {
    /// The review text
    pub review: String,
    #[serde(flatten)]
    pub analysis: AnalysisResult,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            reviews: Vec::new(),
            pretty,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_review(&mut self, review: &Review, result: &AnalysisResult) -> Result<()> {
        self.reviews.push(ReviewData {
            review: review.text.clone(),
            analysis: *result,
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.reviews)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.reviews)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use revtone_core::{Sentiment, SentimentAnalyzer};

    fn render(reviews: &[&str], pretty: bool) -> String {
        let analyzer = SentimentAnalyzer::new().unwrap();
        let mut buffer = Vec::new();
        {
            let mut formatter = JsonFormatter::new(&mut buffer, pretty);
            for (i, text) in reviews.iter().enumerate() {
                let review = Review::new(format!("arg {}", i + 1), *text);
                let result = analyzer.analyze(text);
                formatter.format_review(&review, &result).unwrap();
            }
            formatter.finish().unwrap();
        }
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_json_fields() {
        let output = render(&["This product is great and works perfectly"], true);
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        let first = &value[0];
        assert_eq!(first["review"], "This product is great and works perfectly");
        assert_eq!(first["sentiment"], "Positive");
        assert!(first["compound"].as_f64().unwrap() > 0.1);
        assert!(first["positive_sum"].as_f64().unwrap() > 0.0);
        assert!(first["intensity"]["positive_count"].as_u64().unwrap() >= 2);
    }

    #[test]
    fn test_compact_is_single_line() {
        let output = render(&["good", "bad"], false);
        assert_eq!(output.lines().count(), 1);

        let parsed: Vec<ReviewData> = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[1].analysis.label, Sentiment::Negative);
    }

    #[test]
    fn test_empty_batch_is_empty_array() {
        let mut buffer = Vec::new();
        JsonFormatter::new(&mut buffer, true).finish().unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap().trim(), "[]");
    }
}
