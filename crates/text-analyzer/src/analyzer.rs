//! Lexicon-based sentence analyzer

use crate::config::AnalyzerConfig;
use crate::lexicon::Lexicon;
use crate::tokenizer::{Token, Tokenizer};
use crate::{AnalyzerError, SentenceAnalysis, SentenceAnalyzer};
use std::collections::HashSet;
use tracing::{debug, info};

/// Capitalized span recognized as an entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    /// Surface text, possessive suffix removed
    pub text: String,
    /// Index of the first token belonging to the mention (honorific included)
    pub anchor: usize,
    /// Whether the span refers to a person
    pub is_person: bool,
}

/// Deterministic analyzer backed by word lists
#[derive(Debug, Clone)]
pub struct LexiconAnalyzer {
    config: AnalyzerConfig,
    tokenizer: Tokenizer,
    lexicon: Lexicon,
}

impl LexiconAnalyzer {
    /// Create a new analyzer with configuration
    pub fn new(config: AnalyzerConfig) -> Self {
        info!(
            "Creating lexicon analyzer: negation_window={}, max_sentence_chars={}",
            config.negation_window, config.max_sentence_chars
        );
        Self {
            lexicon: Lexicon::new(&config),
            tokenizer: Tokenizer::new(),
            config,
        }
    }

    /// Active configuration
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Find capitalized entity spans in token order
    pub fn entities(&self, tokens: &[Token]) -> Vec<Entity> {
        let mut entities = Vec::new();
        let mut sentence_start = true;
        let mut honorific: Option<usize> = None;
        let mut i = 0;

        while i < tokens.len() {
            let token = &tokens[i];

            if token.is_capitalized() && self.lexicon.is_honorific(&token.lower) {
                honorific = Some(i);
                sentence_start = false;
                i += 1;
                // "Dr." keeps its period without closing the sentence
                if tokens.get(i).is_some_and(|t| t.text == ".") {
                    i += 1;
                }
                continue;
            }

            if token.is_capitalized() {
                let mut end = i;
                while end < tokens.len()
                    && tokens[end].is_capitalized()
                    && !self.lexicon.is_honorific(&tokens[end].lower)
                {
                    end += 1;
                }

                let mut start = i;
                let opener = sentence_start || token.lower == "i";
                if honorific.is_none() && opener && self.lexicon.is_sentence_opener(&token.lower) {
                    start += 1;
                }

                if start < end {
                    let first = strip_possessive(&tokens[start].lower);
                    let text = tokens[start..end]
                        .iter()
                        .map(|t| strip_possessive(&t.text))
                        .collect::<Vec<_>>()
                        .join(" ");
                    entities.push(Entity {
                        text,
                        anchor: honorific.unwrap_or(start),
                        is_person: honorific.is_some() || self.lexicon.is_given_name(first),
                    });
                }

                honorific = None;
                sentence_start = false;
                i = end;
                continue;
            }

            sentence_start = token.ends_sentence();
            honorific = None;
            i += 1;
        }

        entities
    }

    /// Mark tokens falling inside a negation scope.
    ///
    /// A scope opens after each trigger and lasts `negation_window` tokens,
    /// closing early at clause punctuation or a terminator word.
    fn negation_scope(&self, tokens: &[Token]) -> Vec<bool> {
        let mut in_scope = vec![false; tokens.len()];
        let mut scope_end: Option<usize> = None;

        for (i, token) in tokens.iter().enumerate() {
            if self.lexicon.is_negation(&token.lower) {
                scope_end = Some(i.saturating_add(self.config.negation_window));
                continue;
            }

            if let Some(end) = scope_end {
                let clause_break = token.is_punct
                    && is_clause_break(&token.text)
                    && !after_honorific(tokens, i, &self.lexicon);
                let closes =
                    i > end || clause_break || self.lexicon.is_scope_terminator(&token.lower);
                if closes {
                    scope_end = None;
                } else {
                    in_scope[i] = true;
                }
            }
        }

        in_scope
    }
}

impl Default for LexiconAnalyzer {
    fn default() -> Self {
        Self::new(AnalyzerConfig::default())
    }
}

impl SentenceAnalyzer for LexiconAnalyzer {
    fn analyze(&self, sentence: &str) -> Result<SentenceAnalysis, AnalyzerError> {
        let length = sentence.chars().count();
        if length > self.config.max_sentence_chars {
            return Err(AnalyzerError::TextTooLong {
                length,
                max: self.config.max_sentence_chars,
            });
        }

        let tokens = self.tokenizer.tokenize(sentence);
        let entities = self.entities(&tokens);
        let in_scope = self.negation_scope(&tokens);

        let count = |matches: fn(&Lexicon, &str) -> bool| {
            tokens.iter().filter(|t| matches(&self.lexicon, &t.lower)).count()
        };
        let positive_word_count = count(Lexicon::is_positive);
        let negative_word_count = count(Lexicon::is_negative);
        let negation_words = count(Lexicon::is_negation);
        let negated_entities = entities.iter().filter(|e| in_scope[e.anchor]).count();
        let named_persons = entities
            .iter()
            .filter(|e| e.is_person)
            .map(|e| e.text.as_str())
            .collect::<HashSet<_>>()
            .len();

        debug!(
            "Analyzed sentence: tokens={}, entities={}, negations={}",
            tokens.len(),
            entities.len(),
            negation_words
        );

        Ok(SentenceAnalysis {
            positive_word_count,
            negative_word_count,
            negation_words,
            negated_entities,
            named_persons,
        })
    }
}

fn strip_possessive(word: &str) -> &str {
    word.strip_suffix("'s")
        .or_else(|| word.strip_suffix("’s"))
        .unwrap_or(word)
}

fn is_clause_break(text: &str) -> bool {
    matches!(text, "," | ";" | ":" | "." | "!" | "?")
}

fn after_honorific(tokens: &[Token], i: usize, lexicon: &Lexicon) -> bool {
    tokens[i].text == "."
        && i > 0
        && tokens[i - 1].is_capitalized()
        && lexicon.is_honorific(&tokens[i - 1].lower)
}
