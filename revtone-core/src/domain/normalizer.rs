//! Text normalization: raw review text to an ordered token stream

use crate::domain::lexicon::Lexicon;
use std::ops::Deref;

/// A normalized token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Lowercased text used for lexicon lookups
    pub text: String,
    /// Whether every letter of the surface form was uppercase
    pub all_caps: bool,
}

impl Token {
    /// Build a token from its surface form as it appeared in the text
    pub fn from_surface(surface: &str) -> Self {
        let mut letters = surface.chars().filter(|c| c.is_alphabetic()).peekable();
        let all_caps = letters.peek().is_some() && letters.all(char::is_uppercase);

        let text = surface
            .chars()
            .map(|c| if c == '\u{2019}' { '\'' } else { c })
            .collect::<String>()
            .to_lowercase();

        Self { text, all_caps }
    }

    fn has_letters(&self) -> bool {
        self.text.chars().any(char::is_alphabetic)
    }
}

/// Ordered tokens of one input plus the punctuation that was stripped
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TokenStream {
    tokens: Vec<Token>,
    exclamations: usize,
    questions: usize,
}

impl TokenStream {
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn exclamations(&self) -> usize {
        self.exclamations
    }

    pub fn questions(&self) -> usize {
        self.questions
    }

    /// True when some, but not all, letter-bearing tokens are ALL-CAPS
    pub fn is_cap_differential(&self) -> bool {
        let mut worded = 0;
        let mut shouted = 0;
        for token in self.tokens.iter().filter(|t| t.has_letters()) {
            worded += 1;
            if token.all_caps {
                shouted += 1;
            }
        }
        shouted > 0 && shouted < worded
    }
}

impl Deref for TokenStream {
    type Target = [Token];

    fn deref(&self) -> &Self::Target {
        &self.tokens
    }
}

/// Splits review text into tokens, keeping lexicon emoticons intact
pub struct TextNormalizer<'a> {
    lexicon: &'a Lexicon,
}

impl<'a> TextNormalizer<'a> {
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self { lexicon }
    }

    /// Normalize text into a token stream
    ///
    /// Never fails: empty or punctuation-only input yields an empty stream.
    pub fn normalize(&self, text: &str) -> TokenStream {
        let mut tokens = Vec::new();

        for chunk in text.split_whitespace() {
            if let Some(emoticon) = self.emoticon(chunk) {
                tokens.push(Token {
                    text: emoticon.to_lowercase(),
                    all_caps: false,
                });
                continue;
            }
            split_words(chunk, &mut tokens);
        }

        TokenStream {
            tokens,
            exclamations: text.chars().filter(|&c| c == '!').count(),
            questions: text.chars().filter(|&c| c == '?').count(),
        }
    }

    /// The emoticon a chunk spells, ignoring sentence punctuation after it
    ///
    /// `!` and `?` are counted over the whole text, so stripping them here
    /// loses no emphasis.
    fn emoticon<'t>(&self, chunk: &'t str) -> Option<&'t str> {
        if self.lexicon.is_emoticon(chunk) {
            return Some(chunk);
        }
        let trimmed = chunk.trim_end_matches(TRAILING_PUNCTUATION);
        (trimmed.len() < chunk.len() && self.lexicon.is_emoticon(trimmed)).then_some(trimmed)
    }
}

const TRAILING_PUNCTUATION: [char; 4] = ['!', '?', '.', ','];

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn is_apostrophe(c: char) -> bool {
    c == '\'' || c == '\u{2019}'
}

/// Split a whitespace-free chunk on non-word characters
///
/// An apostrophe between two alphanumerics belongs to the word, so
/// contractions such as "don't" stay whole.
fn split_words(chunk: &str, out: &mut Vec<Token>) {
    let chars: Vec<char> = chunk.chars().collect();
    let mut current = String::new();

    for (i, &ch) in chars.iter().enumerate() {
        let inner_apostrophe = is_apostrophe(ch)
            && i > 0
            && i + 1 < chars.len()
            && chars[i - 1].is_alphanumeric()
            && chars[i + 1].is_alphanumeric();

        if is_word_char(ch) || inner_apostrophe {
            current.push(ch);
        } else if !current.is_empty() {
            out.push(Token::from_surface(&current));
            current.clear();
        }
    }

    if !current.is_empty() {
        out.push(Token::from_surface(&current));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lexicon() -> Lexicon {
        Lexicon::from_code("en").unwrap()
    }

    fn texts(stream: &TokenStream) -> Vec<&str> {
        stream.iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn test_splits_on_punctuation_and_lowercases() {
        let lexicon = lexicon();
        let stream = TextNormalizer::new(&lexicon).normalize("This is a terrible, awful product.");
        assert_eq!(
            texts(&stream),
            vec!["this", "is", "a", "terrible", "awful", "product"]
        );
    }

    #[test]
    fn test_empty_input() {
        let lexicon = lexicon();
        let normalizer = TextNormalizer::new(&lexicon);
        assert!(normalizer.normalize("").is_empty());
        assert!(normalizer.normalize("   \n\t ").is_empty());
        assert!(normalizer.normalize("... --- ,,,").is_empty());
    }

    #[test]
    fn test_contractions_stay_whole() {
        let lexicon = lexicon();
        let stream = TextNormalizer::new(&lexicon).normalize("I don't like it'");
        assert_eq!(texts(&stream), vec!["i", "don't", "like", "it"]);

        let curly = TextNormalizer::new(&lexicon).normalize("isn\u{2019}t");
        assert_eq!(texts(&curly), vec!["isn't"]);
    }

    #[test]
    fn test_all_caps_flag() {
        let lexicon = lexicon();
        let stream = TextNormalizer::new(&lexicon).normalize("GREAT product, Really 123");
        let flags: Vec<bool> = stream.iter().map(|t| t.all_caps).collect();
        assert_eq!(flags, vec![true, false, false, false]);
        assert!(stream.is_cap_differential());
    }

    #[test]
    fn test_all_caps_sequence_is_not_differential() {
        let lexicon = lexicon();
        let stream = TextNormalizer::new(&lexicon).normalize("GREAT PRODUCT");
        assert!(stream.iter().all(|t| t.all_caps));
        assert!(!stream.is_cap_differential());
    }

    #[test]
    fn test_emoticons_are_atomic() {
        let lexicon = lexicon();
        let stream = TextNormalizer::new(&lexicon).normalize("love it :) but :D sad :(");
        assert_eq!(
            texts(&stream),
            vec!["love", "it", ":)", "but", ":d", "sad", ":("]
        );
    }

    #[test]
    fn test_emoticon_before_sentence_punctuation() {
        let lexicon = lexicon();
        let stream = TextNormalizer::new(&lexicon).normalize("arrived today :)! meh :(. fine <3,");
        assert_eq!(
            texts(&stream),
            vec!["arrived", "today", ":)", "meh", ":(", "fine", "<3"]
        );
        assert_eq!(stream.exclamations(), 1);
    }

    #[test]
    fn test_unknown_symbol_chunks_are_split() {
        let lexicon = lexicon();
        let stream = TextNormalizer::new(&lexicon).normalize("(nice)");
        assert_eq!(texts(&stream), vec!["nice"]);
    }

    #[test]
    fn test_counts_emphasis_punctuation() {
        let lexicon = lexicon();
        let stream = TextNormalizer::new(&lexicon).normalize("Really?? Great!!!");
        assert_eq!(stream.exclamations(), 3);
        assert_eq!(stream.questions(), 2);
    }
}
