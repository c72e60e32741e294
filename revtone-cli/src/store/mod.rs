//! Review history persistence
//!
//! Each analyzed review can be appended to a JSON Lines file, one record per
//! line, so a batch never rewrites earlier history.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use revtone_core::Sentiment;
use serde::{Deserialize, Serialize};
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// One stored review
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewRecord {
    pub review: String,
    pub sentiment: Sentiment,
    /// Serialized as RFC 3339 in UTC
    pub timestamp: DateTime<Utc>,
}

impl ReviewRecord {
    /// Record stamped with the current time
    pub fn now(review: impl Into<String>, sentiment: Sentiment) -> Self {
        Self {
            review: review.into(),
            sentiment,
            timestamp: Utc::now(),
        }
    }
}

/// Append-only sink for review records
pub trait ReviewStore {
    fn save(&mut self, records: &[ReviewRecord]) -> Result<()>;
}

/// JSON Lines file store
#[derive(Debug, Clone)]
pub struct JsonlStore {
    path: PathBuf,
}

impl JsonlStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every record back, failing on the first malformed line
    pub fn read_all(&self) -> Result<Vec<ReviewRecord>> {
        let file = File::open(&self.path)
            .with_context(|| format!("Failed to open store: {}", self.path.display()))?;

        let mut records = Vec::new();
        for (n, line) in BufReader::new(file).lines().enumerate() {
            let line = line
                .with_context(|| format!("Failed to read store: {}", self.path.display()))?;
            if line.trim().is_empty() {
                continue;
            }
            let record = serde_json::from_str(&line).with_context(|| {
                format!("Malformed record at {}:{}", self.path.display(), n + 1)
            })?;
            records.push(record);
        }
        Ok(records)
    }
}

impl ReviewStore for JsonlStore {
    fn save(&mut self, records: &[ReviewRecord]) -> Result<()> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("Failed to open store: {}", self.path.display()))?;

        let mut writer = BufWriter::new(file);
        for record in records {
            serde_json::to_writer(&mut writer, record)?;
            writeln!(writer)?;
        }
        writer
            .flush()
            .with_context(|| format!("Failed to write store: {}", self.path.display()))?;

        log::info!(
            "stored {} review(s) in {}",
            records.len(),
            self.path.display()
        );
        Ok(())
    }
}

/// In-memory store
impl ReviewStore for Vec<ReviewRecord> {
    fn save(&mut self, records: &[ReviewRecord]) -> Result<()> {
        self.extend_from_slice(records);
        Ok(())
    }
}
