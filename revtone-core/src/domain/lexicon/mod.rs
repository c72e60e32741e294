//! Lexicon store: word valences, idioms, emoticons and modifier tables
//!
//! Tables are described in TOML. The built-in English table is embedded at
//! compile time; external tables can be loaded with [`Lexicon::from_file`].

pub mod config;
mod store;

pub use config::{list_available_lexicons, LexiconConfig, RulesConfig};
pub use store::{Lexicon, LexiconEntry};
