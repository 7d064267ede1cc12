// ============================================================================
// Aggregate counts
// ============================================================================

/// Pass/fail counter. [`Tally::record`] keeps `total == passing + failing`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub total: usize,
    pub passing: usize,
    pub failing: usize,
}

impl Tally {
    pub fn record(&mut self, passed: bool) {
        self.total += 1;
        if passed {
            self.passing += 1;
        } else {
            self.failing += 1;
        }
    }

    /// Field-wise sum of two tallies.
    pub fn merge(self, other: Tally) -> Tally {
        Tally {
            total: self.total + other.total,
            passing: self.passing + other.passing,
            failing: self.failing + other.failing,
        }
    }
}

/// Run-wide summary: features and scenarios counted independently.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HighLevelMetrics {
    pub features: FeatureTally,
    pub scenarios: Tally,
}

/// Feature counts. Features with elements are judged passing or failing in
/// `counts`; features without an `elements` array only raise `empty`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FeatureTally {
    pub counts: Tally,

    /// Features without an `elements` array
    pub empty: usize,
}

impl FeatureTally {
    pub fn record(&mut self, passed: bool) {
        self.counts.record(passed);
    }

    pub fn record_empty(&mut self) {
        self.empty += 1;
    }

    /// Every feature seen, empty ones included.
    pub fn total(&self) -> usize {
        self.counts.total + self.empty
    }

    /// Project onto a plain [`Tally`] for display. `total` includes empty
    /// features, so it may exceed `passing + failing`.
    pub fn as_tally(&self) -> Tally {
        Tally {
            total: self.total(),
            ..self.counts
        }
    }
}

/// Scenario counts for one feature.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeatureMetrics {
    pub name: String,
    pub uri: String,
    pub scenarios: Tally,
}

impl FeatureMetrics {
    pub fn new(name: &str, uri: &str) -> Self {
        Self {
            name: name.to_string(),
            uri: uri.to_string(),
            scenarios: Tally::default(),
        }
    }

    pub fn record(&mut self, passed: bool) {
        self.scenarios.record(passed);
    }
}

/// Scenario counts summed across every feature. Denominator of the
/// per-feature percentages.
pub fn grand_totals(metrics: &[FeatureMetrics]) -> Tally {
    metrics
        .iter()
        .fold(Tally::default(), |acc, m| acc.merge(m.scenarios))
}
