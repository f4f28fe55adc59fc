//! Text Feature Extraction - Main Entry Point
//!
//! Usage: `textfeat [config.toml]`. Every setting can also come from
//! `TEXTFEAT_*` environment variables.

use std::path::PathBuf;
use text_features_cli::{init_logging, load_config, run};
use tracing::info;

fn main() -> anyhow::Result<()> {
    let config_path = std::env::args_os().nth(1).map(PathBuf::from);
    let config = load_config(config_path.as_deref())?;

    init_logging(&config.log_level, config.log_json)?;

    info!("=== Text Features v{} ===", env!("CARGO_PKG_VERSION"));
    info!("Task: {}, targets: {:?}", config.task_type, config.target_columns.names());

    run(&config)
}
