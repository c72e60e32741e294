//! Main sentiment analyzer implementation

use std::io::Read;
use std::sync::Arc;

use crate::api::{Config, Error, Input, LexiconSource};
use crate::domain::{
    AnalysisResult, CompoundNormalizer, DomainError, Lexicon, PolarityScorer, TextNormalizer,
};

/// Scores review text against an immutable lexicon
///
/// The analyzer holds no per-request state. One instance can serve any
/// number of threads concurrently; clone it to share the same lexicon.
#[derive(Debug, Clone)]
pub struct SentimentAnalyzer {
    lexicon: Arc<Lexicon>,
    normalizer: CompoundNormalizer,
    config: Config,
}

impl SentimentAnalyzer {
    /// Create an analyzer with the default configuration and built-in lexicon
    pub fn new() -> Result<Self, Error> {
        Self::with_config(Config::default())
    }

    /// Create an analyzer with a custom configuration
    pub fn with_config(config: Config) -> Result<Self, Error> {
        config.validate()?;
        let lexicon = Self::load_lexicon(config.lexicon())?;
        Ok(Self::from_parts(Arc::new(lexicon), config))
    }

    /// Create an analyzer for a specific built-in lexicon
    pub fn with_lexicon(code: impl Into<String>) -> Result<Self, Error> {
        let config = Config::builder().lexicon(code).build()?;
        Self::with_config(config)
    }

    /// Create an analyzer around an already loaded lexicon
    pub fn with_shared_lexicon(lexicon: Arc<Lexicon>, config: Config) -> Result<Self, Error> {
        config.validate()?;
        Ok(Self::from_parts(lexicon, config))
    }

    fn from_parts(lexicon: Arc<Lexicon>, config: Config) -> Self {
        let normalizer = CompoundNormalizer::new(config.thresholds(), config.alpha());
        Self {
            lexicon,
            normalizer,
            config,
        }
    }

    fn load_lexicon(source: &LexiconSource) -> Result<Lexicon, Error> {
        let loaded = match source {
            LexiconSource::BuiltIn(code) => Lexicon::from_code(code),
            LexiconSource::File(path) => Lexicon::from_file(path),
        };

        loaded.map_err(|e| match e {
            DomainError::UnsupportedLexicon(code) => Error::Configuration(format!(
                "unknown lexicon '{code}' (available: {})",
                crate::domain::list_available_lexicons().join(", ")
            )),
            DomainError::InvalidLexicon(msg) => Error::InvalidLexicon(msg),
            other => Error::Domain(other),
        })
    }

    /// Analyze one review
    ///
    /// Never fails: text without scorable tokens comes back Neutral with a
    /// compound score of zero.
    pub fn analyze(&self, text: &str) -> AnalysisResult {
        let lexicon = self.lexicon.as_ref();
        let stream = TextNormalizer::new(lexicon).normalize(text);
        if stream.is_empty() {
            return AnalysisResult::neutral();
        }

        let acc = PolarityScorer::new(lexicon).score(&stream);
        let result = self.normalizer.normalize(&acc);

        log::trace!(
            "analyzed {} bytes -> {} ({:+.4})",
            text.len(),
            result.label,
            result.compound
        );

        result
    }

    /// Read and analyze one review from any input source
    pub fn analyze_input(&self, input: Input) -> Result<AnalysisResult, Error> {
        let text = input.into_text()?;
        Ok(self.analyze(&text))
    }

    /// Read and analyze one review from a reader stream
    pub fn analyze_stream<R: Read + Send + Sync + 'static>(
        &self,
        reader: R,
    ) -> Result<AnalysisResult, Error> {
        self.analyze_input(Input::from_reader(reader))
    }

    pub fn lexicon(&self) -> &Arc<Lexicon> {
        &self.lexicon
    }

    /// Get the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}
