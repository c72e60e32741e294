//! Output formatting module

use crate::input::Review;
use anyhow::Result;
use revtone_core::AnalysisResult;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output a single analyzed review
    fn format_review(&mut self, review: &Review, result: &AnalysisResult) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

const PREVIEW_CHARS: usize = 60;

/// Single-line preview of a review, cut at a character boundary
pub(crate) fn preview(text: &str) -> String {
    let flat = text.split_whitespace().collect::<Vec<_>>().join(" ");
    match flat.char_indices().nth(PREVIEW_CHARS) {
        Some((idx, _)) => format!("{}...", &flat[..idx]),
        None => flat,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_flattens_whitespace() {
        assert_eq!(preview("great\n\tvalue  here"), "great value here");
    }

    #[test]
    fn test_preview_truncates_on_char_boundary() {
        let text = "é".repeat(PREVIEW_CHARS + 5);
        let out = preview(&text);
        assert!(out.ends_with("..."));
        assert_eq!(out.chars().count(), PREVIEW_CHARS + 3);
    }
}
