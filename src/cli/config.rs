use std::path::PathBuf;

use clap::Parser;
use serde::{Deserialize, Serialize};

use crate::report::table::DEFAULT_NAME_WIDTH;

// ============================================================================
// CLI Argument Parsing (clap derive)
// ============================================================================

pub const USAGE_HINT: &str = "You must provide the path to the feature test results.\n\n\
Example: trendy-cucumber ./feature-results.json";

#[derive(Parser, Debug)]
#[command(
    name = "trendy-cucumber",
    version,
    about = "Pass/fail statistics for cucumber JSON test results"
)]
pub struct Cli {
    /// Path to the cucumber JSON results file
    pub input: Option<PathBuf>,

    /// Also export both tables as CSV files
    #[arg(short, long)]
    pub export: bool,

    /// Directory for exported CSV files (default: current directory)
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Path to config file (default: trendy-cucumber.yaml in current dir)
    #[arg(long)]
    pub config: Option<String>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

// ============================================================================
// Config File Model (optional YAML)
// ============================================================================

pub const DEFAULT_CONFIG_PATH: &str = "trendy-cucumber.yaml";
pub const HIGH_LEVEL_CSV: &str = "high_level_metrics.csv";
pub const FEATURE_CSV: &str = "feature_metrics.csv";

/// Optional YAML config file: `trendy-cucumber.yaml`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub report: ReportConfig,
    #[serde(default)]
    pub export: ExportConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReportConfig {
    /// Characters of a feature name shown in the per-feature table
    #[serde(default = "default_name_width")]
    pub name_width: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            name_width: DEFAULT_NAME_WIDTH,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExportConfig {
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    #[serde(default = "default_high_level_file")]
    pub high_level_file: String,

    #[serde(default = "default_feature_file")]
    pub feature_file: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            high_level_file: default_high_level_file(),
            feature_file: default_feature_file(),
        }
    }
}

// Serde default helpers
fn default_name_width() -> usize { DEFAULT_NAME_WIDTH }
fn default_output_dir() -> PathBuf { PathBuf::from(".") }
fn default_high_level_file() -> String { HIGH_LEVEL_CSV.to_string() }
fn default_feature_file() -> String { FEATURE_CSV.to_string() }

// ============================================================================
// Config File Loading
// ============================================================================

/// Load config from a YAML file. Returns defaults if file is missing or malformed.
pub fn load_config(path: Option<&str>) -> AppConfig {
    let config_path = path.unwrap_or(DEFAULT_CONFIG_PATH);
    match std::fs::read_to_string(config_path) {
        Ok(content) => serde_yaml::from_str(&content).unwrap_or_else(|e| {
            tracing::warn!(path = config_path, error = %e, "malformed config, using defaults");
            AppConfig::default()
        }),
        Err(_) => AppConfig::default(),
    }
}

// ============================================================================
// Resolved run options (CLI > config > defaults)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct RunOptions {
    pub input: PathBuf,
    pub export: bool,
    pub name_width: usize,
    pub high_level_csv: PathBuf,
    pub feature_csv: PathBuf,
}

/// Merge parsed arguments with the config file.
pub fn build_run_options(cli: &Cli, config: &AppConfig) -> Option<RunOptions> {
    let input = cli.input.clone()?;
    let output_dir = cli
        .output_dir
        .clone()
        .unwrap_or_else(|| config.export.output_dir.clone());

    Some(RunOptions {
        input,
        export: cli.export,
        name_width: config.report.name_width,
        high_level_csv: output_dir.join(&config.export.high_level_file),
        feature_csv: output_dir.join(&config.export.feature_file),
    })
}
