//! Markdown output formatter

use super::{preview, OutputFormatter};
use crate::input::Review;
use anyhow::Result;
use revtone_core::{AnalysisResult, Sentiment};
use std::io::Write;

/// Markdown formatter - outputs reviews as a table with totals
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    review_count: usize,
    positive: usize,
    negative: usize,
    neutral: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            review_count: 0,
            positive: 0,
            negative: 0,
            neutral: 0,
        }
    }
}

fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_review(&mut self, review: &Review, result: &AnalysisResult) -> Result<()> {
        if self.review_count == 0 {
            writeln!(self.writer, "| # | Sentiment | Compound | Review |")?;
            writeln!(self.writer, "|---|-----------|----------|--------|")?;
        }

        self.review_count += 1;
        match result.label {
            Sentiment::Positive => self.positive += 1,
            Sentiment::Negative => self.negative += 1,
            Sentiment::Neutral => self.neutral += 1,
        }

        writeln!(
            self.writer,
            "| {} | {} | {:+.3} | {} |",
            self.review_count,
            result.label,
            result.compound,
            escape_cell(&preview(&review.text))
        )?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(
            self.writer,
            "*Total reviews: {} (positive: {}, negative: {}, neutral: {})*",
            self.review_count, self.positive, self.negative, self.neutral
        )?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use revtone_core::SentimentAnalyzer;

    #[test]
    fn test_table_and_totals() {
        let analyzer = SentimentAnalyzer::new().unwrap();
        let mut buffer = Vec::new();
        {
            let mut formatter = MarkdownFormatter::new(&mut buffer);
            for text in ["great | cheap", "awful", "the box"] {
                let review = Review::new("arg", text);
                formatter
                    .format_review(&review, &analyzer.analyze(text))
                    .unwrap();
            }
            formatter.finish().unwrap();
        }

        let output = String::from_utf8(buffer).unwrap();
        assert!(output.starts_with("| # | Sentiment | Compound | Review |"));
        assert!(output.contains("| 1 | Positive |"));
        assert!(output.contains("great \\| cheap"));
        assert!(output.contains("| 2 | Negative |"));
        assert!(output.contains("*Total reviews: 3 (positive: 1, negative: 1, neutral: 1)*"));
    }
}
