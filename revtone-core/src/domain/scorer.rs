//! Polarity scoring over a token stream
//!
//! Each position is classified once by table lookup. Negations and
//! intensifiers become pending modifiers that apply to the next lexicon hit
//! inside the rule window; everything else either scores or is skipped.

use crate::domain::lexicon::{Lexicon, RulesConfig};
use crate::domain::normalizer::{Token, TokenStream};

/// Role of the token (or phrase) found at one position
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TokenClass {
    /// Multi-token lexicon phrase covering `span` tokens
    Idiom { valence: f64, span: usize },
    /// Single lexicon word or emoticon
    Word { valence: f64 },
    Negation,
    /// Intensifier (`scale > 1.0`) or dampener (`scale < 1.0`)
    Intensifier { scale: f64 },
    Contrast,
    Plain,
}

/// A negation or intensifier waiting for the next lexicon hit
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Modifier {
    Negation { position: usize },
    Intensifier { position: usize, scale: f64 },
}

impl Modifier {
    pub fn position(&self) -> usize {
        match self {
            Modifier::Negation { position } | Modifier::Intensifier { position, .. } => *position,
        }
    }
}

/// Signed valence contributed by one lexicon hit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contribution {
    pub position: usize,
    pub valence: f64,
}

/// Request-scoped scoring state
#[derive(Debug, Clone, Default)]
pub struct ScoreAccumulator {
    contributions: Vec<Contribution>,
    positive_sum: f64,
    negative_sum: f64,
    neutral_sum: f64,
    zero_hits: usize,
    pending: Vec<Modifier>,
    contrast_at: Option<usize>,
    emphasis: f64,
}

impl ScoreAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contributions(&self) -> &[Contribution] {
        &self.contributions
    }

    pub fn positive_sum(&self) -> f64 {
        self.positive_sum
    }

    pub fn negative_sum(&self) -> f64 {
        self.negative_sum
    }

    /// Unit count of hits whose lexicon valence was nonzero
    pub fn neutral_sum(&self) -> f64 {
        self.neutral_sum
    }

    /// Hits on zero-valence entries
    pub fn zero_hits(&self) -> usize {
        self.zero_hits
    }

    pub fn positive_hits(&self) -> usize {
        self.contributions.iter().filter(|c| c.valence > 0.0).count()
    }

    pub fn negative_hits(&self) -> usize {
        self.contributions.iter().filter(|c| c.valence < 0.0).count()
    }

    /// Punctuation emphasis to add in the direction of the raw sum
    pub fn emphasis(&self) -> f64 {
        self.emphasis
    }

    pub fn pending(&self) -> &[Modifier] {
        &self.pending
    }

    pub fn is_empty(&self) -> bool {
        self.contributions.is_empty() && self.zero_hits == 0
    }

    fn push_modifier(&mut self, modifier: Modifier) {
        self.pending.push(modifier);
    }

    /// Drop modifiers that can no longer reach `position`
    fn expire(&mut self, position: usize, window: usize) {
        self.pending.retain(|m| position - m.position() <= window);
    }

    fn mark_contrast(&mut self, position: usize) {
        self.contrast_at.get_or_insert(position);
    }

    fn add(&mut self, position: usize, base: f64, valence: f64) {
        if base == 0.0 {
            self.zero_hits += 1;
            return;
        }
        self.neutral_sum += 1.0;
        self.contributions.push(Contribution { position, valence });
        self.tally(valence);
    }

    fn tally(&mut self, valence: f64) {
        if valence > 0.0 {
            self.positive_sum += valence;
        } else if valence < 0.0 {
            self.negative_sum += valence;
        }
    }

    /// Reweight contributions around the first contrast word
    fn apply_contrast(&mut self, before: f64, after: f64) {
        let Some(pivot) = self.contrast_at else {
            return;
        };

        self.positive_sum = 0.0;
        self.negative_sum = 0.0;
        for i in 0..self.contributions.len() {
            let c = &mut self.contributions[i];
            if c.position < pivot {
                c.valence *= before;
            } else if c.position > pivot {
                c.valence *= after;
            }
            let valence = c.valence;
            self.tally(valence);
        }
    }
}

/// Walks a token stream and accumulates signed lexicon contributions
pub struct PolarityScorer<'a> {
    lexicon: &'a Lexicon,
}

impl<'a> PolarityScorer<'a> {
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self { lexicon }
    }

    /// Resolve the role of the token at `position`
    ///
    /// Idioms are preferred over single-token entries, and lexicon entries
    /// over modifier words.
    pub fn classify(&self, tokens: &[Token], position: usize) -> TokenClass {
        if let Some((entry, span)) = self.lexicon.match_idiom(tokens, position) {
            return TokenClass::Idiom {
                valence: entry.valence,
                span,
            };
        }

        let Some(token) = tokens.get(position) else {
            return TokenClass::Plain;
        };
        let text = token.text.as_str();

        if let Some(entry) = self.lexicon.lookup(text) {
            TokenClass::Word {
                valence: entry.valence,
            }
        } else if self.lexicon.is_negation(text) {
            TokenClass::Negation
        } else if let Some(scale) = self.lexicon.intensifier(text) {
            TokenClass::Intensifier { scale }
        } else if self.lexicon.is_contrast(text) {
            TokenClass::Contrast
        } else {
            TokenClass::Plain
        }
    }

    pub fn score(&self, stream: &TokenStream) -> ScoreAccumulator {
        let rules = self.lexicon.rules();
        let cap_differential = stream.is_cap_differential();
        let mut acc = ScoreAccumulator::new();

        let mut position = 0;
        while position < stream.len() {
            acc.expire(position, rules.window);

            let mut span = 1;
            match self.classify(stream, position) {
                TokenClass::Idiom { valence, span: s } => {
                    span = s;
                    let shouted = stream[position..position + s].iter().all(|t| t.all_caps);
                    self.hit(&mut acc, position, valence, shouted && cap_differential);
                }
                TokenClass::Word { valence } => {
                    let shouted = stream[position].all_caps;
                    self.hit(&mut acc, position, valence, shouted && cap_differential);
                }
                TokenClass::Negation => acc.push_modifier(Modifier::Negation { position }),
                TokenClass::Intensifier { scale } => {
                    acc.push_modifier(Modifier::Intensifier { position, scale })
                }
                TokenClass::Contrast => acc.mark_contrast(position),
                TokenClass::Plain => {}
            }
            position += span;
        }

        acc.apply_contrast(rules.contrast_before, rules.contrast_after);
        acc.emphasis = punctuation_emphasis(stream, rules);

        log::trace!(
            "scored {} tokens: {} hits, pos={:.3} neg={:.3} emphasis={:.3}",
            stream.len(),
            acc.contributions.len(),
            acc.positive_sum,
            acc.negative_sum,
            acc.emphasis
        );

        acc
    }

    fn hit(&self, acc: &mut ScoreAccumulator, position: usize, base: f64, emphasized: bool) {
        let valence = modified_valence(self.lexicon.rules(), position, base, emphasized, acc.pending());
        acc.add(position, base, valence);
        acc.pending.clear();
    }
}

/// Apply caps emphasis, in-window intensifiers and the nearest negation
fn modified_valence(
    rules: &RulesConfig,
    position: usize,
    base: f64,
    emphasized: bool,
    pending: &[Modifier],
) -> f64 {
    if base == 0.0 {
        return 0.0;
    }

    let mut valence = base;
    if emphasized {
        valence += base.signum() * rules.caps_increment;
    }

    let mut negated = false;
    for modifier in pending {
        let distance = position - modifier.position();
        if distance == 0 || distance > rules.window {
            continue;
        }
        match *modifier {
            Modifier::Intensifier { scale, .. } => {
                valence *= 1.0 + (scale - 1.0) * rules.decay(distance);
            }
            Modifier::Negation { .. } => negated = true,
        }
    }

    // Negation damps as well as flips; stacked negations apply once
    if negated {
        valence *= rules.negation_scalar;
    }

    valence
}

fn punctuation_emphasis(stream: &TokenStream, rules: &RulesConfig) -> f64 {
    let exclamation =
        stream.exclamations().min(rules.max_exclamations) as f64 * rules.exclamation_increment;

    let questions = stream.questions();
    let question = if questions <= 1 {
        0.0
    } else if questions <= rules.max_questions {
        questions as f64 * rules.question_increment
    } else {
        rules.question_cap
    };

    exclamation + question
}
