//! Tabular text dataset
//!
//! Rows are kept in insertion order; every row holds exactly one value per
//! column. Before analysis the orchestrator converts the table into typed
//! records ([`SentenceRecord`] or [`QaRecord`]) so that a dataset whose shape
//! does not fit the task fails before any sentence is analyzed.

use crate::FeatureError;
use serde::{Deserialize, Serialize};

/// Single cell value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
}

impl CellValue {
    /// Text content, if this is a text cell
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Name of the value kind, for error messages
    pub fn kind(&self) -> &'static str {
        match self {
            CellValue::Null => "null",
            CellValue::Bool(_) => "bool",
            CellValue::Integer(_) => "integer",
            CellValue::Float(_) => "float",
            CellValue::Text(_) => "text",
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Integer(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Float(value)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        CellValue::Bool(value)
    }
}

/// Label column(s) excluded from feature extraction
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "TargetColumnsRepr")]
pub struct TargetColumns(Vec<String>);

// Accepts either `"label"` or `["label_a", "label_b"]` in config files.
#[derive(Deserialize)]
#[serde(untagged)]
enum TargetColumnsRepr {
    One(String),
    Many(Vec<String>),
}

impl From<TargetColumnsRepr> for TargetColumns {
    fn from(repr: TargetColumnsRepr) -> Self {
        match repr {
            TargetColumnsRepr::One(name) => TargetColumns(vec![name]),
            TargetColumnsRepr::Many(names) => TargetColumns(names),
        }
    }
}

impl TargetColumns {
    pub fn names(&self) -> &[String] {
        &self.0
    }

    pub fn contains(&self, column: &str) -> bool {
        self.0.iter().any(|c| c == column)
    }
}

impl From<&str> for TargetColumns {
    fn from(name: &str) -> Self {
        TargetColumns(vec![name.to_string()])
    }
}

impl From<String> for TargetColumns {
    fn from(name: String) -> Self {
        TargetColumns(vec![name])
    }
}

impl From<Vec<String>> for TargetColumns {
    fn from(names: Vec<String>) -> Self {
        TargetColumns(names)
    }
}

impl From<&[&str]> for TargetColumns {
    fn from(names: &[&str]) -> Self {
        TargetColumns(names.iter().map(|n| n.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for TargetColumns {
    fn from(names: [&str; N]) -> Self {
        TargetColumns(names.iter().map(|n| n.to_string()).collect())
    }
}

/// Classification row: one sentence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SentenceRecord<'a> {
    pub sentence: &'a str,
}

/// Question answering row: a context passage and a question about it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QaRecord<'a> {
    pub context: &'a str,
    pub question: &'a str,
}

/// Ordered rows of named columns
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "RawDataset")]
pub struct TextDataset {
    columns: Vec<String>,
    rows: Vec<Vec<CellValue>>,
}

// Deserialized form, checked through `from_rows` before use.
#[derive(Deserialize)]
struct RawDataset {
    columns: Vec<String>,
    #[serde(default)]
    rows: Vec<Vec<CellValue>>,
}

impl TryFrom<RawDataset> for TextDataset {
    type Error = FeatureError;

    fn try_from(raw: RawDataset) -> Result<Self, Self::Error> {
        Self::from_rows(raw.columns, raw.rows)
    }
}

impl TextDataset {
    /// Create an empty dataset with the given header
    pub fn new<S: Into<String>>(
        columns: impl IntoIterator<Item = S>,
    ) -> Result<Self, FeatureError> {
        let mut names: Vec<String> = Vec::new();
        for column in columns {
            let column = column.into();
            if names.contains(&column) {
                return Err(FeatureError::DuplicateColumn(column));
            }
            names.push(column);
        }
        Ok(Self {
            columns: names,
            rows: Vec::new(),
        })
    }

    /// Create a dataset and fill it with rows
    pub fn from_rows<S: Into<String>>(
        columns: impl IntoIterator<Item = S>,
        rows: impl IntoIterator<Item = Vec<CellValue>>,
    ) -> Result<Self, FeatureError> {
        let mut dataset = Self::new(columns)?;
        for row in rows {
            dataset.push_row(row)?;
        }
        Ok(dataset)
    }

    /// Append a row; its width must match the header
    pub fn push_row(&mut self, row: Vec<CellValue>) -> Result<(), FeatureError> {
        if row.len() != self.columns.len() {
            return Err(FeatureError::RowWidth {
                row: self.rows.len(),
                expected: self.columns.len(),
                actual: row.len(),
            });
        }
        self.rows.push(row);
        Ok(())
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<CellValue>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of a column in the header
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Cell at a row / column name
    pub fn get(&self, row: usize, column: &str) -> Option<&CellValue> {
        let index = self.column_index(column)?;
        self.rows.get(row)?.get(index)
    }

    /// Copy of the dataset without the given columns.
    ///
    /// Fails if any of them does not exist; the dataset itself is untouched.
    pub fn drop_columns(&self, targets: &TargetColumns) -> Result<TextDataset, FeatureError> {
        if let Some(missing) = targets.names().iter().find(|t| self.column_index(t).is_none()) {
            return Err(FeatureError::MissingColumn(missing.clone()));
        }

        let keep: Vec<usize> = (0..self.columns.len())
            .filter(|&i| !targets.contains(&self.columns[i]))
            .collect();

        Ok(TextDataset {
            columns: keep.iter().map(|&i| self.columns[i].clone()).collect(),
            rows: self
                .rows
                .iter()
                .map(|row| keep.iter().map(|&i| row[i].clone()).collect())
                .collect(),
        })
    }

    /// Read the first column as sentences
    pub fn sentence_records(&self) -> Result<Vec<SentenceRecord<'_>>, FeatureError> {
        let column = self.columns.first().ok_or(FeatureError::NoTextColumn)?;
        (0..self.rows.len())
            .map(|row| {
                Ok(SentenceRecord {
                    sentence: self.text_at(row, 0, column)?,
                })
            })
            .collect()
    }

    /// Read the context and question columns as QA pairs
    pub fn qa_records(
        &self,
        context_column: &str,
        question_column: &str,
    ) -> Result<Vec<QaRecord<'_>>, FeatureError> {
        let context = self
            .column_index(context_column)
            .ok_or_else(|| FeatureError::MissingColumn(context_column.to_string()))?;
        let question = self
            .column_index(question_column)
            .ok_or_else(|| FeatureError::MissingColumn(question_column.to_string()))?;

        (0..self.rows.len())
            .map(|row| {
                Ok(QaRecord {
                    context: self.text_at(row, context, context_column)?,
                    question: self.text_at(row, question, question_column)?,
                })
            })
            .collect()
    }

    fn text_at(&self, row: usize, index: usize, column: &str) -> Result<&str, FeatureError> {
        let cell = &self.rows[row][index];
        cell.as_text().ok_or_else(|| FeatureError::NonTextCell {
            row,
            column: column.to_string(),
            found: cell.kind(),
        })
    }
}
