//! Sentence Analyzer
//!
//! Per-sentence linguistic analysis used by the feature pipeline:
//! - Positive / negative opinion word counts
//! - Negation trigger words and entities under their scope
//! - Named person mentions

pub mod analyzer;
pub mod config;
pub mod lexicon;
pub mod tokenizer;

pub use analyzer::LexiconAnalyzer;
pub use config::AnalyzerConfig;
pub use tokenizer::{Token, Tokenizer};

use serde::{Deserialize, Serialize};
use std::sync::{Arc, OnceLock};
use thiserror::Error;
use tracing::info;

/// Analyzer error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalyzerError {
    #[error("Text of length {length} exceeds maximum of {max} characters")]
    TextTooLong { length: usize, max: usize },

    #[error("Analysis failed: {0}")]
    Failed(String),
}

/// Result of analyzing one sentence
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentenceAnalysis {
    /// Opinion words with positive polarity
    pub positive_word_count: usize,
    /// Opinion words with negative polarity
    pub negative_word_count: usize,
    /// Negation trigger tokens ("not", "n't", "never", ...)
    pub negation_words: usize,
    /// Entities falling under the scope of a negation trigger
    pub negated_entities: usize,
    /// Distinct named person mentions
    pub named_persons: usize,
}

/// A component that turns one sentence into a [`SentenceAnalysis`].
///
/// Implementations must be deterministic for the pipeline's idempotence
/// guarantees to hold. `Send + Sync` lets a single instance be shared by
/// concurrent hosts once constructed.
pub trait SentenceAnalyzer: Send + Sync {
    fn analyze(&self, sentence: &str) -> Result<SentenceAnalysis, AnalyzerError>;
}

impl<A: SentenceAnalyzer + ?Sized> SentenceAnalyzer for Arc<A> {
    fn analyze(&self, sentence: &str) -> Result<SentenceAnalysis, AnalyzerError> {
        (**self).analyze(sentence)
    }
}

impl<A: SentenceAnalyzer + ?Sized> SentenceAnalyzer for &A {
    fn analyze(&self, sentence: &str) -> Result<SentenceAnalysis, AnalyzerError> {
        (**self).analyze(sentence)
    }
}

// Built on first use, then shared read-only for the rest of the process.
static SHARED_ANALYZER: OnceLock<Arc<LexiconAnalyzer>> = OnceLock::new();

/// Process-wide analyzer with the default configuration.
///
/// Initialization runs at most once, even when first called from several
/// threads at the same time.
pub fn shared_analyzer() -> Arc<LexiconAnalyzer> {
    SHARED_ANALYZER
        .get_or_init(|| {
            info!("Initializing shared lexicon analyzer");
            Arc::new(LexiconAnalyzer::new(AnalyzerConfig::default()))
        })
        .clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_shared_analyzer_is_initialized_once() {
        let handles: Vec<_> = (0..8).map(|_| thread::spawn(shared_analyzer)).collect();
        let analyzers: Vec<_> = handles
            .into_iter()
            .map(|h| h.join().expect("thread panicked"))
            .collect();

        let first = shared_analyzer();
        for analyzer in &analyzers {
            assert!(Arc::ptr_eq(&first, analyzer));
        }
    }

    #[test]
    fn test_arc_forwards_to_inner_analyzer() {
        let analyzer = Arc::new(LexiconAnalyzer::default());
        let direct = analyzer.as_ref().analyze("I love this movie").unwrap();
        let forwarded = SentenceAnalyzer::analyze(&analyzer, "I love this movie").unwrap();
        assert_eq!(direct, forwarded);
    }
}
