use std::path::Path;

use crate::cli::config::RunOptions;
use crate::cucumber::cucumber_model::Feature;
use crate::cucumber::load_results;
use crate::error::ReportError;
use crate::metrics::aggregator::{extract_feature_metrics, extract_high_level_metrics};
use crate::report::console::format_table;
use crate::report::csv::write_csv;
use crate::report::table::{Table, feature_table, high_level_table};

// ============================================================================
// Pipeline: parse -> aggregate -> render -> export
// ============================================================================

/// Both rendered views of one run.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricsReport {
    pub high_level: Table,
    pub features: Table,
}

/// Aggregate parsed results into both tables.
pub fn build_report(features: &[Feature], name_width: usize) -> MetricsReport {
    let high_level = extract_high_level_metrics(features);
    let feature_metrics = extract_feature_metrics(features);

    MetricsReport {
        high_level: high_level_table(&high_level),
        features: feature_table(&feature_metrics, name_width),
    }
}

/// Console text for both tables, global view first.
pub fn format_report(report: &MetricsReport) -> String {
    format!(
        "{}\n{}",
        format_table(&report.high_level),
        format_table(&report.features)
    )
}

/// Write both tables as CSV. Each file is attempted regardless of the other;
/// failures are logged and returned.
pub fn export_report(
    report: &MetricsReport,
    high_level_path: &Path,
    feature_path: &Path,
) -> Vec<ReportError> {
    [
        (&report.high_level, high_level_path),
        (&report.features, feature_path),
    ]
    .into_iter()
    .filter_map(|(table, path)| write_csv(table, path).err())
    .inspect(|e| tracing::error!(error = %e, "csv export failed"))
    .collect()
}

// ============================================================================
// report command
// ============================================================================

/// Run the full pipeline and print both tables to stdout.
///
/// Returns the export failures, if any. A read or parse failure aborts
/// before anything is printed.
pub fn cmd_report(options: &RunOptions) -> Result<Vec<ReportError>, ReportError> {
    let features = load_results(&options.input)?;
    let report = build_report(&features, options.name_width);

    println!("{}", format_report(&report));

    if !options.export {
        return Ok(Vec::new());
    }

    Ok(export_report(
        &report,
        &options.high_level_csv,
        &options.feature_csv,
    ))
}
