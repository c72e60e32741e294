//! Input abstraction for review text

use std::io::Read;
use std::path::{Path, PathBuf};

/// Review text from one of several sources
pub enum Input {
    /// Direct text input
    Text(String),
    /// File path input
    File(PathBuf),
    /// Raw bytes input
    Bytes(Vec<u8>),
    /// Reader input (boxed for object safety)
    Reader(Box<dyn Read + Send + Sync>),
}

impl std::fmt::Debug for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Input::Text(text) => f
                .debug_struct("Input::Text")
                .field("length", &text.len())
                .finish(),
            Input::File(path) => f.debug_struct("Input::File").field("path", path).finish(),
            Input::Bytes(bytes) => f
                .debug_struct("Input::Bytes")
                .field("length", &bytes.len())
                .finish(),
            Input::Reader(_) => f.debug_struct("Input::Reader").finish(),
        }
    }
}

impl Input {
    /// Create input from text
    pub fn from_text(text: impl Into<String>) -> Self {
        Input::Text(text.into())
    }

    /// Create input from file path
    pub fn from_file(path: impl AsRef<Path>) -> Self {
        Input::File(path.as_ref().to_path_buf())
    }

    /// Create input from bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Input::Bytes(bytes)
    }

    /// Create input from reader
    pub fn from_reader(reader: impl Read + Send + Sync + 'static) -> Self {
        Input::Reader(Box::new(reader))
    }

    pub(crate) fn into_bytes(self) -> Result<Vec<u8>, crate::api::Error> {
        match self {
            Input::Text(text) => Ok(text.into_bytes()),
            Input::Bytes(bytes) => Ok(bytes),
            Input::File(path) if path.is_dir() => Err(crate::api::Error::InvalidInput(format!(
                "{} is a directory, not a review file",
                path.display()
            ))),
            Input::File(path) => std::fs::read(&path).map_err(|e| {
                crate::api::Error::Infrastructure(format!(
                    "Failed to read file {}: {}",
                    path.display(),
                    e
                ))
            }),
            Input::Reader(mut reader) => {
                let mut buffer = Vec::new();
                reader.read_to_end(&mut buffer).map_err(|e| {
                    crate::api::Error::Infrastructure(format!("Failed to read from reader: {}", e))
                })?;
                Ok(buffer)
            }
        }
    }

    /// Get text content from input
    ///
    /// Invalid UTF-8 is replaced rather than rejected, so ill-formed
    /// reviews still score (usually as neutral).
    pub(crate) fn into_text(self) -> Result<String, crate::api::Error> {
        let bytes = self.into_bytes()?;
        Ok(match String::from_utf8(bytes) {
            Ok(text) => text,
            Err(e) => {
                log::warn!("Input is not valid UTF-8, decoding lossily: {e}");
                String::from_utf8_lossy(e.as_bytes()).into_owned()
            }
        })
    }
}
