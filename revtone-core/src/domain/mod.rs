//! Scoring domain: lexicon tables and the normalize → score → compound pipeline
//!
//! Everything in this layer is pure. The only shared state is an immutable
//! [`Lexicon`], and each analysis builds and discards its own
//! [`ScoreAccumulator`].

pub mod compound;
pub mod error;
pub mod lexicon;
pub mod normalizer;
pub mod result;
pub mod scorer;

pub use compound::{CompoundNormalizer, Thresholds, DEFAULT_ALPHA};
pub use error::DomainError;
pub use lexicon::{list_available_lexicons, Lexicon, LexiconConfig, LexiconEntry, RulesConfig};
pub use normalizer::{TextNormalizer, Token, TokenStream};
pub use result::{AnalysisResult, Intensity, Sentiment};
pub use scorer::{Contribution, Modifier, PolarityScorer, ScoreAccumulator, TokenClass};
