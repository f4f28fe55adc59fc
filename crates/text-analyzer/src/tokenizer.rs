//! Sentence tokenizer
//!
//! Splits text into word and punctuation tokens. Negative contractions are
//! split so the negation marker becomes its own token ("don't" -> "do", "n't").

use regex::Regex;
use std::sync::LazyLock;

static TOKEN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\w+(?:['’]\w+)*|[^\w\s]").expect("token pattern is valid"));

/// Token produced by the [`Tokenizer`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Surface text as it appears in the sentence
    pub text: String,
    /// Lowercased form used for lexicon lookups
    pub lower: String,
    /// Whether the token is a single punctuation character
    pub is_punct: bool,
}

impl Token {
    fn new(text: &str) -> Self {
        let is_punct = !text.chars().any(|c| c.is_alphanumeric() || c == '_');
        Self {
            text: text.to_string(),
            lower: text.to_lowercase(),
            is_punct,
        }
    }

    /// Word token whose first character is uppercase
    pub fn is_capitalized(&self) -> bool {
        !self.is_punct && self.text.chars().next().is_some_and(char::is_uppercase)
    }

    /// Sentence-final punctuation
    pub fn ends_sentence(&self) -> bool {
        matches!(self.text.as_str(), "." | "!" | "?")
    }
}

/// Word / punctuation tokenizer
#[derive(Debug, Clone, Default)]
pub struct Tokenizer;

impl Tokenizer {
    /// Create a new tokenizer
    pub fn new() -> Self {
        Self
    }

    /// Tokenize text
    pub fn tokenize(&self, text: &str) -> Vec<Token> {
        let mut tokens = Vec::new();

        for m in TOKEN_REGEX.find_iter(text) {
            let word = m.as_str();
            match split_negative_contraction(word) {
                Some((stem, marker)) => {
                    tokens.push(Token::new(stem));
                    tokens.push(Token::new(marker));
                }
                None => tokens.push(Token::new(word)),
            }
        }

        tokens
    }
}

/// Split "don't" / "cannot" style words into a stem and a negation marker.
fn split_negative_contraction(word: &str) -> Option<(&str, &str)> {
    if word.eq_ignore_ascii_case("cannot") {
        return Some(word.split_at(3));
    }

    ["n't", "n’t"].into_iter().find_map(|suffix| {
        let split = word.len().checked_sub(suffix.len()).filter(|&s| s > 0)?;
        (word.is_char_boundary(split) && word[split..].eq_ignore_ascii_case(suffix))
            .then(|| word.split_at(split))
    })
}
