pub mod cucumber_model;
pub mod evaluator;

use std::path::Path;

use crate::cucumber::cucumber_model::Feature;
use crate::error::ReportError;

/// Parse a cucumber JSON document (an array of features).
pub fn parse_results(json: &str, path: &Path) -> Result<Vec<Feature>, ReportError> {
    serde_json::from_str(json).map_err(|source| ReportError::InputParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Read and parse a cucumber JSON results file.
pub fn load_results(path: &Path) -> Result<Vec<Feature>, ReportError> {
    let content = std::fs::read_to_string(path).map_err(|source| ReportError::InputRead {
        path: path.to_path_buf(),
        source,
    })?;

    let features = parse_results(&content, path)?;
    tracing::info!(path = %path.display(), features = features.len(), "loaded results");
    Ok(features)
}
