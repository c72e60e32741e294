//! Plain text output formatter

use super::{preview, OutputFormatter};
use crate::input::Review;
use anyhow::Result;
use revtone_core::AnalysisResult;
use std::io::Write;

/// Plain text formatter - outputs one line per review
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_review(&mut self, review: &Review, result: &AnalysisResult) -> Result<()> {
        writeln!(
            self.writer,
            "{:<8}  (compound {:+.3})  {}",
            result.label.as_str(),
            result.compound,
            preview(&review.text)
        )?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
