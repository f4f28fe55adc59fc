//! Text Feature Extraction CLI
//!
//! Loads a JSON Lines dataset, optionally validates it against the task
//! type, extracts interpretable features and writes them as JSON.

pub mod io;

use anyhow::{bail, Context};
use data_validator::{ValidationConfig, Validator};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use text_analyzer::{AnalyzerConfig, LexiconAnalyzer};
use text_features::{ExtractionConfig, FeatureExtractor, FeatureTable, TargetColumns, TaskType};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Environment variable prefix, e.g. `TEXTFEAT_TASK_TYPE`
pub const ENV_PREFIX: &str = "TEXTFEAT";

/// Pipeline configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// JSON Lines dataset to read
    pub input: Option<PathBuf>,
    /// Where to write the feature table; stdout when unset
    pub output: Option<PathBuf>,
    /// Label column(s) to exclude
    pub target_columns: TargetColumns,
    /// Canonical task name
    pub task_type: String,
    /// Validate the dataset shape before extracting
    pub validate: bool,
    /// Default log filter when `RUST_LOG` is unset
    pub log_level: String,
    /// Emit logs as JSON
    pub log_json: bool,
    pub extraction: ExtractionConfig,
    pub analyzer: AnalyzerConfig,
    pub validation: ValidationConfig,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            input: None,
            output: None,
            target_columns: TargetColumns::from("label"),
            task_type: TaskType::TextClassification.to_string(),
            validate: true,
            log_level: "info".to_string(),
            log_json: false,
            extraction: ExtractionConfig::default(),
            analyzer: AnalyzerConfig::default(),
            validation: ValidationConfig::default(),
        }
    }
}

/// Load configuration from an optional TOML file, overridden by
/// `TEXTFEAT_*` environment variables (`__` separates nested keys).
pub fn load_config(path: Option<&Path>) -> Result<PipelineConfig, config::ConfigError> {
    let mut builder = config::Config::builder();
    if let Some(path) = path {
        builder = builder.add_source(config::File::from(path));
    }
    let settings = builder
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}

/// Initialize logging to stderr so stdout stays free for the feature table
pub fn init_logging(level: &str, json: bool) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(level))?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr);

    let result = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    result.map_err(|e| anyhow::anyhow!("Failed to set tracing subscriber: {e}"))
}

/// Run extraction for a configuration and return the feature table
pub fn extract(config: &PipelineConfig) -> anyhow::Result<FeatureTable> {
    let task_type: TaskType = config.task_type.parse()?;
    let input = config
        .input
        .as_deref()
        .context("no input dataset configured")?;

    let file = File::open(input).with_context(|| format!("opening {}", input.display()))?;
    let dataset = io::read_jsonl(BufReader::new(file))
        .with_context(|| format!("reading {}", input.display()))?;
    info!("Loaded {} rows from {}", dataset.len(), input.display());

    if config.validate {
        let result = Validator::new(config.validation.clone()).validate(
            &dataset,
            &config.target_columns,
            task_type,
            &config.extraction,
        );
        if !result.valid {
            for problem in &result.errors {
                error!("{}", problem);
            }
            bail!("dataset failed validation with {} errors", result.errors.len());
        }
    }

    // Built up front and injected; the extractor never initializes it lazily.
    let analyzer = LexiconAnalyzer::new(config.analyzer.clone());
    let extractor = FeatureExtractor::with_config(analyzer, config.extraction.clone());
    let table = extractor.extract(&dataset, config.target_columns.clone(), task_type)?;

    Ok(table)
}

/// Extract and write the feature table to the configured output
pub fn run(config: &PipelineConfig) -> anyhow::Result<()> {
    let table = extract(config)?;

    match &config.output {
        Some(path) => {
            let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
            io::write_table(&table, std::io::BufWriter::new(file))?;
            info!("Wrote {} feature vectors to {}", table.len(), path.display());
        }
        None => io::write_table(&table, std::io::stdout().lock())?,
    }

    Ok(())
}
