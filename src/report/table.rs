use std::fmt;

use crate::metrics::metrics_model::{FeatureMetrics, HighLevelMetrics, Tally, grand_totals};
use crate::report::percent::percent;

// ============================================================================
// Table model — shared by the console renderer and the CSV exporter
// ============================================================================

/// Default number of characters of a feature name shown in the per-feature
/// table.
pub const DEFAULT_NAME_WIDTH: usize = 30;

pub const HIGH_LEVEL_HEADER: [&str; 6] = ["", "Passed", "%Passed", "Failed", "%Failed", "Total"];

pub const FEATURE_HEADER: [&str; 7] = [
    "Feature Name",
    "Scenarios Passed",
    "%Scenarios Passed",
    "Scenarios Failed",
    "%Scenarios Failed",
    "Total",
    "%Total",
];

/// A single table cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    Count(usize),
    Text(String),
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Count(n) => write!(f, "{}", n),
            Cell::Text(s) => f.write_str(s),
        }
    }
}

impl From<usize> for Cell {
    fn from(n: usize) -> Self {
        Cell::Count(n)
    }
}

impl From<String> for Cell {
    fn from(s: String) -> Self {
        Cell::Text(s)
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Cell::Text(s.to_string())
    }
}

/// A table row. When `label` is set it occupies the first column and
/// `cells` fill the remaining ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub label: Option<String>,
    pub cells: Vec<Cell>,
}

impl Row {
    pub fn labelled(label: impl Into<String>, cells: Vec<Cell>) -> Self {
        Self {
            label: Some(label.into()),
            cells,
        }
    }

    pub fn plain(cells: Vec<Cell>) -> Self {
        Self { label: None, cells }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub header: Vec<String>,
    pub rows: Vec<Row>,
}

impl Table {
    pub fn new(header: &[&str]) -> Self {
        Self {
            header: header.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn push(&mut self, row: Row) {
        self.rows.push(row);
    }
}

// ============================================================================
// Projections
// ============================================================================

/// `[passing, %passing, failing, %failing, total]` against the tally's own total.
fn printable_row(tally: &Tally) -> Vec<Cell> {
    vec![
        tally.passing.into(),
        percent(tally.passing, tally.total).into(),
        tally.failing.into(),
        percent(tally.failing, tally.total).into(),
        tally.total.into(),
    ]
}

/// Run-wide view: one row for features, one for scenarios.
pub fn high_level_table(metrics: &HighLevelMetrics) -> Table {
    let mut table = Table::new(&HIGH_LEVEL_HEADER);
    table.push(Row::labelled("Features", printable_row(&metrics.features.as_tally())));
    table.push(Row::labelled("Scenarios", printable_row(&metrics.scenarios)));
    table
}

/// Per-feature view. Every percentage is taken against the grand total of
/// scenarios, not the feature's own total. The closing totals row always
/// shows `100%`.
pub fn feature_table(metrics: &[FeatureMetrics], name_width: usize) -> Table {
    let grand = grand_totals(metrics);
    let mut table = Table::new(&FEATURE_HEADER);

    for feature in metrics {
        let counts = &feature.scenarios;
        table.push(Row::labelled(
            truncate_name(&feature.name, name_width),
            vec![
                counts.passing.into(),
                percent(counts.passing, grand.total).into(),
                counts.failing.into(),
                percent(counts.failing, grand.total).into(),
                counts.total.into(),
                percent(counts.total, grand.total).into(),
            ],
        ));
    }

    table.push(Row::labelled(
        "",
        vec![
            grand.passing.into(),
            percent(grand.passing, grand.total).into(),
            grand.failing.into(),
            percent(grand.failing, grand.total).into(),
            grand.total.into(),
            "100%".into(),
        ],
    ));

    table
}

/// First `width` characters of `name`.
pub fn truncate_name(name: &str, width: usize) -> String {
    name.chars().take(width).collect()
}
