//! Public analysis API for revtone-core
//!
//! This module wires the text normalizer, polarity scorer and compound
//! normalizer behind a single [`SentimentAnalyzer`] that is shared across
//! threads for the lifetime of the process.

mod analyzer;
mod config;
mod error;
mod input;


pub use analyzer::SentimentAnalyzer;
pub use config::{defaults, Config, ConfigBuilder, LexiconSource};
pub use error::{Error, Result};
pub use input::Input;
