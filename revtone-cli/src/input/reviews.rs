//! Gathering reviews from arguments, files and stdin

use super::{resolve_patterns, FileReader};
use crate::error::CliError;
use anyhow::Result;
use std::io::Read;

/// One review and where it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Review {
    /// Human-readable origin, e.g. `arg 1`, `stdin` or `data.txt:3`
    pub source: String,
    pub text: String,
}

impl Review {
    pub fn new(source: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            text: text.into(),
        }
    }
}

/// Collects reviews from the sources given on the command line
#[derive(Debug, Default)]
pub struct ReviewCollector {
    texts: Vec<String>,
    patterns: Vec<String>,
    per_line: bool,
}

impl ReviewCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn texts(mut self, texts: &[String]) -> Self {
        self.texts = texts.to_vec();
        self
    }

    pub fn patterns(mut self, patterns: &[String]) -> Self {
        self.patterns = patterns.to_vec();
        self
    }

    /// Treat every non-empty line of an input file as its own review
    pub fn per_line(mut self, per_line: bool) -> Self {
        self.per_line = per_line;
        self
    }

    /// Collect reviews, reading `stdin` only when no other source was given
    pub fn collect(&self, stdin: impl Read) -> Result<Vec<Review>> {
        let mut reviews = Vec::new();

        for (i, text) in self.texts.iter().enumerate() {
            reviews.push(Review::new(format!("arg {}", i + 1), text.clone()));
        }

        if !self.patterns.is_empty() {
            for path in resolve_patterns(&self.patterns)? {
                let content = FileReader::read_text(&path)?;
                let name = path.display().to_string();
                self.push_content(&mut reviews, &name, &content)?;
            }
        }

        if self.texts.is_empty() && self.patterns.is_empty() {
            let content = FileReader::read_all(stdin, "stdin")?;
            self.push_content(&mut reviews, "stdin", &content)?;
        }

        for review in &reviews {
            if review.text.trim().is_empty() {
                return Err(CliError::NoReview(review.source.clone()).into());
            }
        }

        log::debug!("collected {} review(s)", reviews.len());
        Ok(reviews)
    }

    fn push_content(&self, reviews: &mut Vec<Review>, source: &str, content: &str) -> Result<()> {
        if !self.per_line {
            reviews.push(Review::new(source, content.trim_end()));
            return Ok(());
        }

        let before = reviews.len();
        for (n, line) in content.lines().enumerate() {
            if !line.trim().is_empty() {
                reviews.push(Review::new(format!("{source}:{}", n + 1), line.trim()));
            }
        }

        if reviews.len() == before {
            return Err(CliError::NoReview(source.to_string()).into());
        }
        Ok(())
    }
}
