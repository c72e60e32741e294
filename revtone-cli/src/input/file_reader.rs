//! File reading utilities

use anyhow::{Context, Result};
use std::fs;
use std::io::Read;
use std::path::Path;

/// Reads review text, replacing invalid UTF-8 instead of failing
pub struct FileReader;

impl FileReader {
    /// Read a file as text
    pub fn read_text(path: &Path) -> Result<String> {
        let bytes =
            fs::read(path).with_context(|| format!("Failed to read file: {}", path.display()))?;

        Ok(Self::decode(bytes, &path.display().to_string()))
    }

    /// Read everything from a reader (usually stdin) as text
    pub fn read_all(mut reader: impl Read, source: &str) -> Result<String> {
        let mut bytes = Vec::new();
        reader
            .read_to_end(&mut bytes)
            .with_context(|| format!("Failed to read from {source}"))?;

        Ok(Self::decode(bytes, source))
    }

    fn decode(bytes: Vec<u8>, source: &str) -> String {
        match String::from_utf8(bytes) {
            Ok(text) => text,
            Err(e) => {
                log::warn!("{source} is not valid UTF-8; decoding lossily");
                String::from_utf8_lossy(e.as_bytes()).into_owned()
            }
        }
    }
}
