//! Validation Error Types

use text_features::TaskType;
use thiserror::Error;

/// Problems found while checking a dataset against a task type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Target column to drop is not in the dataset
    #[error("Target column not found: {0}")]
    MissingTargetColumn(String),

    /// Column the task reads text from is absent
    #[error("{task} requires column {column}")]
    MissingTextColumn { task: TaskType, column: String },

    /// All columns are targets
    #[error("No text column left after removing target columns")]
    NoTextColumn,

    /// Classification datasets read only the first remaining column
    #[error("Only {used} is read; ignoring columns {ignored:?}")]
    IgnoredColumns { used: String, ignored: Vec<String> },

    /// Cell that should hold text holds something else
    #[error("Row {row}, column {column}: expected text, found {found}")]
    NonTextCell {
        row: usize,
        column: String,
        found: &'static str,
    },

    /// Text cell with no content
    #[error("Row {row}, column {column}: empty text")]
    EmptyText { row: usize, column: String },

    /// Text longer than the analyzer accepts
    #[error("Row {row}, column {column}: {length} characters exceeds {max}")]
    TextTooLong {
        row: usize,
        column: String,
        length: usize,
        max: usize,
    },
}
