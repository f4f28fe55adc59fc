//! Text Feature Engine
//!
//! Turns text datasets into tabular, human-interpretable features for
//! explainability and error-analysis tooling.
//!
//! Classification rows yield 6 counts per sentence. Question answering rows
//! yield 6 counts for the context, 6 for the question and the question type.

mod dataset;
mod error;
mod features;
mod question;
mod task;

pub use dataset::{CellValue, QaRecord, SentenceRecord, TargetColumns, TextDataset};
pub use error::FeatureError;
pub use features::{
    ExtractionConfig, FeatureExtractor, FeatureTable, FeatureValue, FeatureVector, SentenceType,
};
pub use question::{classify_question_type, QuestionType};
pub use task::{columns, FeatureSchema, TaskType, BASE_FEATURE_NAMES, QUESTION_TYPE_FEATURE};

pub use text_analyzer::{shared_analyzer, AnalyzerError, SentenceAnalysis, SentenceAnalyzer};

/// Extract features with the process-wide shared analyzer.
///
/// `task_type` is a canonical task name such as `"text_classification"`;
/// any other name fails with [`FeatureError::UnsupportedTask`] before the
/// dataset is touched.
pub fn extract_features(
    dataset: &TextDataset,
    target_columns: impl Into<TargetColumns>,
    task_type: &str,
) -> Result<(Vec<FeatureVector>, FeatureSchema), FeatureError> {
    let task_type: TaskType = task_type.parse()?;
    FeatureExtractor::new(shared_analyzer())
        .extract(dataset, target_columns, task_type)
        .map(FeatureTable::into_parts)
}
