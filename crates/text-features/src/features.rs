//! Feature Vector Assembly

use crate::dataset::{TargetColumns, TextDataset};
use crate::question::{classify_question_type, QuestionType};
use crate::task::{columns, FeatureSchema, TaskType};
use crate::FeatureError;
use serde::{Deserialize, Serialize};
use text_analyzer::{AnalyzerError, SentenceAnalyzer};
use tracing::{debug, info};

/// One value of a feature vector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FeatureValue {
    /// Word, entity or character count
    Count(usize),
    /// Categorical question type
    Label(QuestionType),
}

impl FeatureValue {
    pub fn as_count(&self) -> Option<usize> {
        match self {
            FeatureValue::Count(n) => Some(*n),
            FeatureValue::Label(_) => None,
        }
    }

    pub fn as_label(&self) -> Option<QuestionType> {
        match self {
            FeatureValue::Label(label) => Some(*label),
            FeatureValue::Count(_) => None,
        }
    }
}

/// Feature values of one example, positionally aligned with its schema
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureVector(Vec<FeatureValue>);

impl FeatureVector {
    pub fn values(&self) -> &[FeatureValue] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<FeatureValue> {
        self.0.get(index).copied()
    }

    /// Count at a position, `None` for labels or out of range
    pub fn count(&self, index: usize) -> Option<usize> {
        self.get(index).and_then(|v| v.as_count())
    }

    /// Trailing question type of question answering vectors
    pub fn question_type(&self) -> Option<QuestionType> {
        self.0.last().and_then(|v| v.as_label())
    }
}

/// Extracted feature vectors together with their schema
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureTable {
    pub feature_names: FeatureSchema,
    pub features: Vec<FeatureVector>,
}

impl FeatureTable {
    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// All values of a named feature, in row order
    pub fn column(&self, name: &str) -> Option<Vec<FeatureValue>> {
        let index = self.feature_names.position(name)?;
        self.features.iter().map(|row| row.get(index)).collect()
    }

    /// `(feature_vectors, feature_names)`
    pub fn into_parts(self) -> (Vec<FeatureVector>, FeatureSchema) {
        (self.features, self.feature_names)
    }
}

/// Role of a sentence within its example
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentenceType {
    /// Plain text: classification input or QA context
    Plain,
    /// QA question; gets a trailing question type
    Question,
}

/// Extraction settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Column holding the QA context passage
    pub context_column: String,
    /// Column holding the QA question; `None` tries "questions" then "question"
    pub question_column: Option<String>,
    /// Log progress every N rows (0 disables)
    pub progress_interval: usize,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            context_column: columns::CONTEXT.to_string(),
            question_column: None,
            progress_interval: 100,
        }
    }
}

impl ExtractionConfig {
    /// Question column to read from a dataset
    pub fn resolve_question_column<'a>(&'a self, dataset: &'a TextDataset) -> &'a str {
        match &self.question_column {
            Some(column) => column.as_str(),
            None => [columns::QUESTIONS, columns::QUESTION]
                .into_iter()
                .find(|c| dataset.column_index(c).is_some())
                .unwrap_or(columns::QUESTIONS),
        }
    }
}

/// Feature extractor that turns text rows into feature vectors
pub struct FeatureExtractor<A> {
    analyzer: A,
    config: ExtractionConfig,
}

impl<A: SentenceAnalyzer> FeatureExtractor<A> {
    /// Create an extractor around an analyzer
    pub fn new(analyzer: A) -> Self {
        Self::with_config(analyzer, ExtractionConfig::default())
    }

    /// Create an extractor with explicit settings
    pub fn with_config(analyzer: A, config: ExtractionConfig) -> Self {
        Self { analyzer, config }
    }

    pub fn config(&self) -> &ExtractionConfig {
        &self.config
    }

    /// Extract one feature vector per row of `dataset`.
    ///
    /// Target columns are removed first. The first analyzer failure aborts
    /// the call and no vectors are returned.
    pub fn extract(
        &self,
        dataset: &TextDataset,
        target_columns: impl Into<TargetColumns>,
        task_type: TaskType,
    ) -> Result<FeatureTable, FeatureError> {
        let feature_names = FeatureSchema::for_task(task_type);
        let target_columns = target_columns.into();
        let text_features = dataset.drop_columns(&target_columns)?;

        info!(
            "Extracting {} features: task={}, rows={}",
            feature_names.len(),
            task_type,
            text_features.len()
        );

        let mut features = Vec::with_capacity(text_features.len());

        match task_type {
            TaskType::TextClassification | TaskType::MultilabelTextClassification => {
                let records = text_features.sentence_records()?;
                for (row, record) in records.iter().enumerate() {
                    let mut values = Vec::with_capacity(feature_names.len());
                    self.add_sentence_features(record.sentence, SentenceType::Plain, &mut values)
                        .map_err(|source| FeatureError::Analyzer { row, source })?;
                    features.push(FeatureVector(values));
                    self.report_progress(row, records.len());
                }
            }
            TaskType::QuestionAnswering => {
                let question_column = self.config.resolve_question_column(&text_features);
                let records =
                    text_features.qa_records(&self.config.context_column, question_column)?;
                for (row, record) in records.iter().enumerate() {
                    let mut values = Vec::with_capacity(feature_names.len());
                    self.add_sentence_features(record.context, SentenceType::Plain, &mut values)
                        .and_then(|_| {
                            self.add_sentence_features(
                                record.question,
                                SentenceType::Question,
                                &mut values,
                            )
                        })
                        .map_err(|source| FeatureError::Analyzer { row, source })?;
                    features.push(FeatureVector(values));
                    self.report_progress(row, records.len());
                }
            }
        }

        info!("Extracted {} feature vectors", features.len());

        Ok(FeatureTable {
            feature_names,
            features,
        })
    }

    /// Analyze one sentence and append its values.
    ///
    /// Appends positive, negative, negation words, negated entities, named
    /// persons and character length; questions also get their type.
    fn add_sentence_features(
        &self,
        sentence: &str,
        sentence_type: SentenceType,
        values: &mut Vec<FeatureValue>,
    ) -> Result<(), AnalyzerError> {
        let analysis = self.analyzer.analyze(sentence)?;

        values.extend([
            FeatureValue::Count(analysis.positive_word_count),
            FeatureValue::Count(analysis.negative_word_count),
            FeatureValue::Count(analysis.negation_words),
            FeatureValue::Count(analysis.negated_entities),
            FeatureValue::Count(analysis.named_persons),
            FeatureValue::Count(sentence.chars().count()),
        ]);

        if sentence_type == SentenceType::Question {
            values.push(FeatureValue::Label(classify_question_type(sentence)));
        }

        Ok(())
    }

    fn report_progress(&self, row: usize, total: usize) {
        let interval = self.config.progress_interval;
        if interval > 0 && (row + 1) % interval == 0 {
            debug!("Processed {}/{} rows", row + 1, total);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::CellValue;
    use proptest::prelude::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use text_analyzer::{LexiconAnalyzer, SentenceAnalysis};

    /// Deterministic analyzer: counts words, fails on "boom"
    #[derive(Default)]
    struct WordCountAnalyzer {
        calls: AtomicUsize,
    }

    impl SentenceAnalyzer for WordCountAnalyzer {
        fn analyze(&self, sentence: &str) -> Result<SentenceAnalysis, AnalyzerError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if sentence.contains("boom") {
                return Err(AnalyzerError::Failed("boom".into()));
            }
            let words = sentence.split_whitespace().count();
            Ok(SentenceAnalysis {
                positive_word_count: words,
                negative_word_count: 0,
                negation_words: 1,
                negated_entities: 2,
                named_persons: 3,
            })
        }
    }

    fn classification_dataset(texts: &[&str]) -> TextDataset {
        TextDataset::from_rows(
            ["text", "label"],
            texts
                .iter()
                .enumerate()
                .map(|(i, t)| vec![CellValue::from(*t), CellValue::from(i as i64)]),
        )
        .unwrap()
    }

    fn qa_dataset(pairs: &[(&str, &str)]) -> TextDataset {
        TextDataset::from_rows(
            ["context", "questions", "answers"],
            pairs.iter().map(|(c, q)| {
                vec![CellValue::from(*c), CellValue::from(*q), CellValue::from("a")]
            }),
        )
        .unwrap()
    }

    #[test]
    fn test_single_sentence_classification() {
        let extractor = FeatureExtractor::new(LexiconAnalyzer::default());
        let dataset = TextDataset::from_rows(
            ["text", "label"],
            vec![vec!["I love this movie".into(), 1i64.into()]],
        )
        .unwrap();

        let table = extractor
            .extract(&dataset, "label", TaskType::TextClassification)
            .unwrap();

        assert_eq!(
            table.feature_names.names(),
            [
                "positive_words",
                "negative_words",
                "negation_words",
                "negated_entities",
                "named_persons",
                "sentence_length"
            ]
        );
        assert_eq!(table.len(), 1);
        let row = &table.features[0];
        assert_eq!(row.len(), 6);
        assert_eq!(row.count(0), Some(1));
        assert_eq!(row.count(5), Some("I love this movie".len()));
    }

    #[test]
    fn test_multilabel_drops_all_targets() {
        let dataset = TextDataset::from_rows(
            ["label_a", "text", "label_b"],
            vec![vec![0i64.into(), "one two".into(), 1i64.into()]],
        )
        .unwrap();
        let extractor = FeatureExtractor::new(WordCountAnalyzer::default());

        let table = extractor
            .extract(&dataset, ["label_a", "label_b"], TaskType::MultilabelTextClassification)
            .unwrap();

        assert_eq!(table.features[0].count(0), Some(2));
        assert_eq!(table.features[0].count(5), Some(7));
    }

    #[test]
    fn test_question_answering_vectors() {
        let extractor = FeatureExtractor::new(WordCountAnalyzer::default());
        let dataset = qa_dataset(&[
            ("The sky is blue.", "What color is the sky?"),
            ("It rained all day.", "How many days did it rain?"),
        ]);

        let table = extractor
            .extract(&dataset, "answers", TaskType::QuestionAnswering)
            .unwrap();

        assert_eq!(table.feature_names.len(), 13);
        for row in &table.features {
            assert_eq!(row.len(), 13);
        }
        let first = &table.features[0];
        assert_eq!(first.count(0), Some(4));
        assert_eq!(first.count(5), Some("The sky is blue.".len()));
        assert_eq!(first.count(6), Some(5));
        assert_eq!(first.count(11), Some("What color is the sky?".len()));
        assert_eq!(first.question_type(), Some(QuestionType::What));
        assert_eq!(table.features[1].question_type(), Some(QuestionType::Number));
        assert_eq!(extractor.analyzer.calls.load(Ordering::SeqCst), 4);
    }

    #[test]
    fn test_question_column_singular_fallback() {
        let dataset = TextDataset::from_rows(
            ["context", "question", "answers"],
            vec![vec!["ctx".into(), "Why now?".into(), "a".into()]],
        )
        .unwrap();
        let extractor = FeatureExtractor::new(WordCountAnalyzer::default());
        let table = extractor
            .extract(&dataset, "answers", TaskType::QuestionAnswering)
            .unwrap();
        assert_eq!(table.features[0].question_type(), Some(QuestionType::Why));
    }

    #[test]
    fn test_missing_question_column() {
        let dataset = TextDataset::from_rows(
            ["context", "answers"],
            vec![vec!["ctx".into(), "a".into()]],
        )
        .unwrap();
        let extractor = FeatureExtractor::new(WordCountAnalyzer::default());
        let err = extractor
            .extract(&dataset, "answers", TaskType::QuestionAnswering)
            .unwrap_err();
        assert_eq!(err, FeatureError::MissingColumn("questions".into()));
        assert_eq!(extractor.analyzer.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_empty_dataset_keeps_schema() {
        let extractor = FeatureExtractor::new(WordCountAnalyzer::default());
        let table = extractor
            .extract(&qa_dataset(&[]), "answers", TaskType::QuestionAnswering)
            .unwrap();
        assert!(table.is_empty());
        assert_eq!(table.feature_names.len(), 13);
    }

    #[test]
    fn test_analyzer_failure_aborts_batch() {
        let extractor = FeatureExtractor::new(WordCountAnalyzer::default());
        let dataset = classification_dataset(&["fine", "boom goes the row", "never reached"]);

        let err = extractor
            .extract(&dataset, "label", TaskType::TextClassification)
            .unwrap_err();

        assert_eq!(
            err,
            FeatureError::Analyzer {
                row: 1,
                source: AnalyzerError::Failed("boom".into())
            }
        );
        assert_eq!(extractor.analyzer.calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_missing_target_column() {
        let extractor = FeatureExtractor::new(WordCountAnalyzer::default());
        let err = extractor
            .extract(&classification_dataset(&["x"]), "target", TaskType::TextClassification)
            .unwrap_err();
        assert_eq!(err, FeatureError::MissingColumn("target".into()));
    }

    #[test]
    fn test_input_dataset_is_not_mutated() {
        let extractor = FeatureExtractor::new(WordCountAnalyzer::default());
        let dataset = classification_dataset(&["a b", "c"]);
        let before = dataset.clone();
        extractor
            .extract(&dataset, "label", TaskType::TextClassification)
            .unwrap();
        assert_eq!(dataset, before);
    }

    #[test]
    fn test_column_lookup() {
        let extractor = FeatureExtractor::new(WordCountAnalyzer::default());
        let table = extractor
            .extract(&classification_dataset(&["a b", "c"]), "label", TaskType::TextClassification)
            .unwrap();
        assert_eq!(
            table.column("sentence_length"),
            Some(vec![FeatureValue::Count(3), FeatureValue::Count(1)])
        );
        assert_eq!(table.column("missing"), None);
    }

    #[test]
    fn test_table_serializes_counts_and_labels() {
        let extractor = FeatureExtractor::new(WordCountAnalyzer::default());
        let table = extractor
            .extract(&qa_dataset(&[("c", "Who won?")]), "answers", TaskType::QuestionAnswering)
            .unwrap();
        let json = serde_json::to_value(&table).unwrap();
        assert_eq!(json["feature_names"][12], "question_type");
        assert_eq!(json["features"][0][5], 1);
        assert_eq!(json["features"][0][12], "WHO");
    }

    fn texts_strategy() -> impl Strategy<Value = Vec<String>> {
        prop::collection::vec("[a-z ]{0,30}", 0..20)
    }

    fn pairs_strategy() -> impl Strategy<Value = Vec<(String, String)>> {
        prop::collection::vec(("[A-Za-z ,.]{0,40}", "[A-Za-z ?]{0,40}"), 0..10)
    }

    fn borrow_pairs(pairs: &[(String, String)]) -> Vec<(&str, &str)> {
        pairs.iter().map(|(c, q)| (c.as_str(), q.as_str())).collect()
    }

    proptest! {
        #[test]
        fn prop_one_vector_per_row_in_order(texts in texts_strategy()) {
            let refs: Vec<&str> = texts.iter().map(String::as_str).collect();
            let extractor = FeatureExtractor::new(WordCountAnalyzer::default());
            let table = extractor
                .extract(&classification_dataset(&refs), "label", TaskType::TextClassification)
                .unwrap();

            prop_assert_eq!(table.len(), texts.len());
            for (row, text) in table.features.iter().zip(&texts) {
                prop_assert_eq!(row.len(), table.feature_names.len());
                prop_assert_eq!(row.count(5), Some(text.chars().count()));
                prop_assert_eq!(row.count(0), Some(text.split_whitespace().count()));
            }
        }

        #[test]
        fn prop_question_answering_rows_align_with_pairs(pairs in pairs_strategy()) {
            let dataset = qa_dataset(&borrow_pairs(&pairs));
            let extractor = FeatureExtractor::new(WordCountAnalyzer::default());
            let table = extractor
                .extract(&dataset, "answers", TaskType::QuestionAnswering)
                .unwrap();

            prop_assert_eq!(table.feature_names.len(), 13);
            prop_assert_eq!(table.len(), pairs.len());
            for (row, (context, question)) in table.features.iter().zip(&pairs) {
                prop_assert_eq!(row.len(), 13);
                prop_assert_eq!(row.count(0), Some(context.split_whitespace().count()));
                prop_assert_eq!(row.count(5), Some(context.chars().count()));
                prop_assert_eq!(row.count(6), Some(question.split_whitespace().count()));
                prop_assert_eq!(row.count(11), Some(question.chars().count()));
                prop_assert_eq!(row.question_type(), Some(classify_question_type(question)));
            }
        }

        #[test]
        fn prop_extraction_is_idempotent(pairs in pairs_strategy()) {
            let dataset = qa_dataset(&borrow_pairs(&pairs));
            let extractor = FeatureExtractor::new(LexiconAnalyzer::default());

            let first = extractor.extract(&dataset, "answers", TaskType::QuestionAnswering);
            let second = extractor.extract(&dataset, "answers", TaskType::QuestionAnswering);
            prop_assert_eq!(first.unwrap(), second.unwrap());
        }
    }
}
