//! Task types and the feature schema each one produces

use crate::FeatureError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Per-sentence feature names, in vector order
pub const BASE_FEATURE_NAMES: [&str; 6] = [
    "positive_words",
    "negative_words",
    "negation_words",
    "negated_entities",
    "named_persons",
    "sentence_length",
];

/// Trailing feature of question answering vectors
pub const QUESTION_TYPE_FEATURE: &str = "question_type";

/// Column names of question answering datasets
pub mod columns {
    /// Passage the question is asked about
    pub const CONTEXT: &str = "context";
    /// Question text, as stored by most QA datasets
    pub const QUESTIONS: &str = "questions";
    /// Singular spelling accepted as a fallback
    pub const QUESTION: &str = "question";
}

/// Kind of text-modeling problem
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskType {
    /// Single-label classification of one text column
    TextClassification,
    /// Multilabel classification of one text column
    MultilabelTextClassification,
    /// Context / question pairs
    QuestionAnswering,
}

impl TaskType {
    /// Canonical name
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskType::TextClassification => "text_classification",
            TaskType::MultilabelTextClassification => "multilabel_text_classification",
            TaskType::QuestionAnswering => "question_answering",
        }
    }

    /// Tasks that read a single text column
    pub fn is_single_text_column(&self) -> bool {
        matches!(
            self,
            TaskType::TextClassification | TaskType::MultilabelTextClassification
        )
    }
}

impl fmt::Display for TaskType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskType {
    type Err = FeatureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text_classification" => Ok(TaskType::TextClassification),
            "multilabel_text_classification" => Ok(TaskType::MultilabelTextClassification),
            "question_answering" => Ok(TaskType::QuestionAnswering),
            other => Err(FeatureError::UnsupportedTask(other.to_string())),
        }
    }
}

/// Ordered feature names. Value `i` of every vector is named `names()[i]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureSchema(Vec<String>);

impl FeatureSchema {
    /// Schema produced for a task type
    pub fn for_task(task_type: TaskType) -> Self {
        match task_type {
            TaskType::TextClassification | TaskType::MultilabelTextClassification => {
                Self(BASE_FEATURE_NAMES.iter().map(|n| n.to_string()).collect())
            }
            TaskType::QuestionAnswering => {
                let prefixes = [columns::CONTEXT, columns::QUESTION];
                let mut names: Vec<String> = prefixes
                    .iter()
                    .flat_map(|prefix| {
                        BASE_FEATURE_NAMES
                            .iter()
                            .map(move |name| format!("{prefix}_{name}"))
                    })
                    .collect();
                names.push(QUESTION_TYPE_FEATURE.to_string());
                Self(names)
            }
        }
    }

    pub fn names(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Position of a feature in every vector of this schema
    pub fn position(&self, name: &str) -> Option<usize> {
        self.0.iter().position(|n| n == name)
    }

    pub fn into_names(self) -> Vec<String> {
        self.0
    }
}
