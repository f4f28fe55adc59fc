//! Dataset Validator for Task Shape Checking

use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use text_features::{ExtractionConfig, TargetColumns, TaskType, TextDataset};
use tracing::{debug, warn};

/// Validation configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Treat empty text cells as errors instead of warnings
    pub reject_empty_text: bool,
    /// Longest text accepted, in characters
    pub max_text_chars: Option<usize>,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            reject_empty_text: false,
            max_text_chars: Some(1_000_000),
        }
    }
}

/// Result of validation
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    /// Whether the dataset can be extracted
    pub valid: bool,
    /// Problems that would make extraction fail
    pub errors: Vec<ValidationError>,
    /// Problems that extraction tolerates
    pub warnings: Vec<ValidationError>,
    /// Number of rows inspected
    pub rows_checked: usize,
}

impl ValidationResult {
    fn from_findings(
        errors: Vec<ValidationError>,
        warnings: Vec<ValidationError>,
        rows_checked: usize,
    ) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
            warnings,
            rows_checked,
        }
    }
}

/// Dataset validator
pub struct Validator {
    config: ValidationConfig,
}

impl Validator {
    /// Create a new validator with given config
    pub fn new(config: ValidationConfig) -> Self {
        Self { config }
    }

    /// Check that `dataset` has the shape `task_type` expects.
    ///
    /// Collects every problem instead of stopping at the first one.
    pub fn validate(
        &self,
        dataset: &TextDataset,
        target_columns: &TargetColumns,
        task_type: TaskType,
        extraction: &ExtractionConfig,
    ) -> ValidationResult {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();

        for target in target_columns.names() {
            if dataset.column_index(target).is_none() {
                errors.push(ValidationError::MissingTargetColumn(target.clone()));
            }
        }

        let remaining: Vec<&String> = dataset
            .columns()
            .iter()
            .filter(|c| !target_columns.contains(c))
            .collect();

        let text_columns: Vec<String> = if task_type.is_single_text_column() {
            match remaining.split_first() {
                Some((first, rest)) => {
                    if !rest.is_empty() {
                        warnings.push(ValidationError::IgnoredColumns {
                            used: first.to_string(),
                            ignored: rest.iter().map(|c| c.to_string()).collect(),
                        });
                    }
                    vec![first.to_string()]
                }
                None => {
                    errors.push(ValidationError::NoTextColumn);
                    Vec::new()
                }
            }
        } else {
            let question = extraction.resolve_question_column(dataset).to_string();
            let mut found = Vec::new();
            for column in [extraction.context_column.clone(), question] {
                if remaining.iter().any(|c| **c == column) {
                    found.push(column);
                } else {
                    errors.push(ValidationError::MissingTextColumn {
                        task: task_type,
                        column,
                    });
                }
            }
            found
        };

        for column in &text_columns {
            self.check_cells(dataset, column, &mut errors, &mut warnings);
        }

        for problem in &warnings {
            warn!("{}", problem);
        }
        debug!(
            "Validated {} rows: {} errors, {} warnings",
            dataset.len(),
            errors.len(),
            warnings.len()
        );

        ValidationResult::from_findings(errors, warnings, dataset.len())
    }

    fn check_cells(
        &self,
        dataset: &TextDataset,
        column: &str,
        errors: &mut Vec<ValidationError>,
        warnings: &mut Vec<ValidationError>,
    ) {
        for row in 0..dataset.len() {
            let Some(cell) = dataset.get(row, column) else {
                continue;
            };

            let Some(text) = cell.as_text() else {
                errors.push(ValidationError::NonTextCell {
                    row,
                    column: column.to_string(),
                    found: cell.kind(),
                });
                continue;
            };

            if text.trim().is_empty() {
                let problem = ValidationError::EmptyText {
                    row,
                    column: column.to_string(),
                };
                if self.config.reject_empty_text {
                    errors.push(problem);
                } else {
                    warnings.push(problem);
                }
            }

            if let Some(max) = self.config.max_text_chars {
                let length = text.chars().count();
                if length > max {
                    errors.push(ValidationError::TextTooLong {
                        row,
                        column: column.to_string(),
                        length,
                        max,
                    });
                }
            }
        }
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new(ValidationConfig::default())
    }
}
