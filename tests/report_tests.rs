use trendy_cucumber::metrics::metrics_model::{FeatureMetrics, FeatureTally, HighLevelMetrics, Tally};
use trendy_cucumber::report::console::format_table;
use trendy_cucumber::report::percent::percent;
use trendy_cucumber::report::table::{
    Cell, DEFAULT_NAME_WIDTH, FEATURE_HEADER, HIGH_LEVEL_HEADER, Row, Table, feature_table,
    high_level_table, truncate_name,
};

// ============================================================================
// Helper builders
// ============================================================================

fn feature_metrics(name: &str, passing: usize, failing: usize) -> FeatureMetrics {
    FeatureMetrics {
        name: name.to_string(),
        uri: format!("features/{}.feature", name),
        scenarios: Tally {
            total: passing + failing,
            passing,
            failing,
        },
    }
}

fn texts(cells: &[Cell]) -> Vec<String> {
    cells.iter().map(|c| c.to_string()).collect()
}

// ============================================================================
// 1. Percent formatting
// ============================================================================

#[test]
fn percent_zero_denominator() {
    assert_eq!(percent(0, 0), "0%");
    assert_eq!(percent(7, 0), "0%");
}

#[test]
fn percent_two_decimals() {
    assert_eq!(percent(1, 4), "25.00%");
    assert_eq!(percent(1, 3), "33.33%");
    assert_eq!(percent(2, 3), "66.67%");
    assert_eq!(percent(3, 3), "100.00%");
    assert_eq!(percent(0, 5), "0.00%");
}

#[test]
fn percent_rounds_exact_ties_up() {
    assert_eq!(percent(1, 800), "0.13%");
    assert_eq!(percent(9, 800), "1.13%");
    assert_eq!(percent(1, 8), "12.50%");
    assert_eq!(percent(1, 1600), "0.06%");
}

// ============================================================================
// 2. High-level table
// ============================================================================

#[test]
fn high_level_table_shape() {
    let metrics = HighLevelMetrics {
        features: FeatureTally {
            counts: Tally {
                total: 2,
                passing: 1,
                failing: 1,
            },
            empty: 1,
        },
        scenarios: Tally {
            total: 4,
            passing: 3,
            failing: 1,
        },
    };
    let table = high_level_table(&metrics);

    assert_eq!(table.header, HIGH_LEVEL_HEADER.map(String::from).to_vec());
    assert_eq!(table.rows.len(), 2);

    assert_eq!(table.rows[0].label.as_deref(), Some("Features"));
    assert_eq!(
        texts(&table.rows[0].cells),
        ["1", "33.33%", "1", "33.33%", "3"]
    );

    assert_eq!(table.rows[1].label.as_deref(), Some("Scenarios"));
    assert_eq!(
        texts(&table.rows[1].cells),
        ["3", "75.00%", "1", "25.00%", "4"]
    );
}

#[test]
fn high_level_table_no_data() {
    let table = high_level_table(&HighLevelMetrics::default());
    assert_eq!(texts(&table.rows[0].cells), ["0", "0%", "0", "0%", "0"]);
}

// ============================================================================
// 3. Per-feature table
// ============================================================================

#[test]
fn feature_table_uses_grand_total() {
    let metrics = vec![feature_metrics("A", 1, 0), feature_metrics("B", 0, 1)];
    let table = feature_table(&metrics, DEFAULT_NAME_WIDTH);

    assert_eq!(table.header, FEATURE_HEADER.map(String::from).to_vec());
    assert_eq!(table.rows.len(), 3);

    assert_eq!(table.rows[0].label.as_deref(), Some("A"));
    assert_eq!(
        texts(&table.rows[0].cells),
        ["1", "50.00%", "0", "0.00%", "1", "50.00%"]
    );
    assert_eq!(
        texts(&table.rows[1].cells),
        ["0", "0.00%", "1", "50.00%", "1", "50.00%"]
    );

    let totals = &table.rows[2];
    assert_eq!(totals.label.as_deref(), Some(""));
    assert_eq!(texts(&totals.cells), ["1", "50.00%", "1", "50.00%", "2", "100%"]);
}

#[test]
fn feature_table_totals_row_hardcodes_100_percent() {
    let table = feature_table(&[feature_metrics("Empty", 0, 0)], DEFAULT_NAME_WIDTH);
    let totals = table.rows.last().unwrap();
    assert_eq!(texts(&totals.cells), ["0", "0%", "0", "0%", "0", "100%"]);
    assert_eq!(totals.cells[5], Cell::Text("100%".into()));
}

#[test]
fn feature_table_with_no_features_has_totals_only() {
    let table = feature_table(&[], DEFAULT_NAME_WIDTH);
    assert_eq!(table.rows.len(), 1);
}

#[test]
fn feature_name_truncated_to_30_chars() {
    let long = "A feature name that is definitely longer than thirty characters";
    let metrics = vec![feature_metrics(long, 1, 0)];
    let table = feature_table(&metrics, DEFAULT_NAME_WIDTH);

    let label = table.rows[0].label.clone().unwrap();
    assert_eq!(label.chars().count(), 30);
    assert_eq!(label, "A feature name that is definit");
    // Source record is untouched.
    assert_eq!(metrics[0].name, long);
}

#[test]
fn truncate_respects_multibyte_characters() {
    assert_eq!(truncate_name("Größenänderung", 4), "Größ");
    assert_eq!(truncate_name("short", 30), "short");
}

#[test]
fn feature_table_custom_name_width() {
    let table = feature_table(&[feature_metrics("Checkout", 1, 0)], 5);
    assert_eq!(table.rows[0].label.as_deref(), Some("Check"));
}

// ============================================================================
// 4. Console rendering
// ============================================================================

#[test]
fn console_table_layout() {
    let mut table = Table::new(&["", "Count"]);
    table.push(Row::labelled("Rows", vec![Cell::Count(12)]));
    table.push(Row::plain(vec![Cell::from("x"), Cell::from("y")]));

    let expected = "\
┌──────┬───────┐
│      │ Count │
├──────┼───────┤
│ Rows │ 12    │
│ x    │ y     │
└──────┴───────┘
";
    assert_eq!(format_table(&table), expected);
}

#[test]
fn console_table_contains_all_values() {
    let metrics = vec![feature_metrics("Login", 2, 1), feature_metrics("Search", 1, 0)];
    let output = format_table(&feature_table(&metrics, DEFAULT_NAME_WIDTH));

    assert!(output.contains("Feature Name"));
    assert!(output.contains("%Scenarios Failed"));
    assert!(output.contains("Login"));
    assert!(output.contains("Search"));
    assert!(output.contains("100%"));
    assert!(output.contains("75.00%"));

    // Every line has the same display width.
    let widths: Vec<usize> = output.lines().map(|l| l.chars().count()).collect();
    assert!(widths.windows(2).all(|w| w[0] == w[1]));
}
