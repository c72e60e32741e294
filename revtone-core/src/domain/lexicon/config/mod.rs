//! Lexicon table configuration (TOML schema and embedded tables)

pub mod loader;
pub mod types;

pub use loader::{get_lexicon_config, list_available_lexicons};
pub use types::{LexiconConfig, MetadataConfig, ModifierConfig, RulesConfig};
