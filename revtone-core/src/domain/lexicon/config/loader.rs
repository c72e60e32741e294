use super::types::LexiconConfig;
use crate::domain::error::DomainError;
use std::collections::HashMap;
use std::sync::OnceLock;

type ConfigTable = Result<HashMap<String, LexiconConfig>, DomainError>;

static LEXICON_CONFIGS: OnceLock<ConfigTable> = OnceLock::new();

macro_rules! embed_lexicon_config {
    ($code:expr, $path:expr) => {
        ($code, include_str!($path))
    };
}

fn load_embedded_configs() -> ConfigTable {
    let mut configs = HashMap::new();

    let embedded_configs = [embed_lexicon_config!(
        "en",
        "../../../../configs/lexicons/english.toml"
    )];

    for (code, toml_content) in embedded_configs {
        let config: LexiconConfig = toml::from_str(toml_content).map_err(|e| {
            DomainError::ConfigurationError(format!("Failed to parse {code} lexicon: {e}"))
        })?;

        if config.metadata.code != code {
            return Err(DomainError::ConfigurationError(format!(
                "Lexicon code mismatch: expected {}, got {}",
                code, config.metadata.code
            )));
        }

        config.validate()?;
        configs.insert(code.to_string(), config);
    }

    Ok(configs)
}

fn embedded_configs() -> Result<&'static HashMap<String, LexiconConfig>, DomainError> {
    LEXICON_CONFIGS
        .get_or_init(load_embedded_configs)
        .as_ref()
        .map_err(Clone::clone)
}

pub fn get_lexicon_config(code: &str) -> Result<&'static LexiconConfig, DomainError> {
    embedded_configs()?
        .get(code)
        .ok_or_else(|| DomainError::UnsupportedLexicon(code.to_string()))
}

pub fn list_available_lexicons() -> Vec<&'static str> {
    let mut codes: Vec<&'static str> = embedded_configs()
        .map(|configs| configs.keys().map(|s| s.as_str()).collect())
        .unwrap_or_default();
    codes.sort_unstable();
    codes
}
