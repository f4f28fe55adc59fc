//! Feature Extraction Error Types

use text_analyzer::AnalyzerError;
use thiserror::Error;

/// Errors during feature extraction
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FeatureError {
    /// Task type outside the supported set
    #[error("Unknown task type: {0}")]
    UnsupportedTask(String),

    /// Column referenced by name does not exist
    #[error("Column not found: {0}")]
    MissingColumn(String),

    /// Column name appears twice in the dataset header
    #[error("Duplicate column: {0}")]
    DuplicateColumn(String),

    /// Nothing left to read sentences from after removing target columns
    #[error("No text column left after removing target columns")]
    NoTextColumn,

    /// Cell holding a non-text value where a sentence is required
    #[error("Row {row}, column {column}: expected text, found {found}")]
    NonTextCell {
        row: usize,
        column: String,
        found: &'static str,
    },

    /// Row width does not match the dataset header
    #[error("Row {row} has {actual} values, expected {expected}")]
    RowWidth {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// Analyzer failure; aborts the whole extraction
    #[error("Analyzer failed on row {row}: {source}")]
    Analyzer {
        row: usize,
        #[source]
        source: AnalyzerError,
    },
}
