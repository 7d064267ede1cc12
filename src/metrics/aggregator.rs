use crate::cucumber::cucumber_model::Feature;
use crate::cucumber::evaluator::evaluate;
use crate::metrics::metrics_model::{FeatureMetrics, HighLevelMetrics};

// ============================================================================
// Metric extraction
// ============================================================================

/// Count features and scenarios across the whole run.
///
/// A feature without `elements` is counted as empty and is neither passing
/// nor failing. A feature whose elements hold no scenario passes: nothing
/// in it failed.
pub fn extract_high_level_metrics(features: &[Feature]) -> HighLevelMetrics {
    let mut metrics = HighLevelMetrics::default();

    for feature in features {
        if feature.is_empty() {
            metrics.features.record_empty();
            continue;
        }

        let mut has_failing_scenario = false;
        for passed in feature.elements.iter().flatten().filter_map(evaluate) {
            metrics.scenarios.record(passed);
            has_failing_scenario |= !passed;
        }

        metrics.features.record(!has_failing_scenario);
    }

    tracing::debug!(
        features = metrics.features.total(),
        empty = metrics.features.empty,
        scenarios = metrics.scenarios.total,
        "extracted high level metrics"
    );

    metrics
}

/// One record per input feature, in input order. Empty features keep zero
/// counts.
pub fn extract_feature_metrics(features: &[Feature]) -> Vec<FeatureMetrics> {
    features
        .iter()
        .map(|feature| {
            let mut metrics = FeatureMetrics::new(&feature.name, &feature.uri);
            for passed in feature.elements.iter().flatten().filter_map(evaluate) {
                metrics.record(passed);
            }
            metrics
        })
        .collect()
}
