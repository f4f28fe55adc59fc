//! Analyzer configuration

use serde::{Deserialize, Serialize};

/// Lexicon analyzer configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Number of tokens after a negation trigger that stay in its scope
    pub negation_window: usize,

    /// Sentences longer than this (in characters) are rejected
    pub max_sentence_chars: usize,

    /// Words added to the built-in positive lexicon
    pub extra_positive_words: Vec<String>,

    /// Words added to the built-in negative lexicon
    pub extra_negative_words: Vec<String>,

    /// Given names added to the built-in person gazetteer
    pub extra_given_names: Vec<String>,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            negation_window: 6,
            max_sentence_chars: 1_000_000,
            extra_positive_words: Vec::new(),
            extra_negative_words: Vec::new(),
            extra_given_names: Vec::new(),
        }
    }
}

impl AnalyzerConfig {
    /// Create strict config (narrow negation scope)
    pub fn strict() -> Self {
        Self {
            negation_window: 3,
            ..Default::default()
        }
    }

    /// Create lenient config (wide negation scope)
    pub fn lenient() -> Self {
        Self {
            negation_window: 12,
            ..Default::default()
        }
    }
}
