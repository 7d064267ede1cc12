use crate::report::table::Table;

// ============================================================================
// Console reporter — boxed terminal tables
// ============================================================================

/// Render a table with box-drawing borders.
///
/// Produces output like:
/// ```text
/// ┌───────────┬────────┬─────────┬────────┬─────────┬───────┐
/// │           │ Passed │ %Passed │ Failed │ %Failed │ Total │
/// ├───────────┼────────┼─────────┼────────┼─────────┼───────┤
/// │ Features  │ 1      │ 50.00%  │ 1      │ 50.00%  │ 2     │
/// │ Scenarios │ 1      │ 50.00%  │ 1      │ 50.00%  │ 2     │
/// └───────────┴────────┴─────────┴────────┴─────────┴───────┘
/// ```
pub fn format_table(table: &Table) -> String {
    let lines: Vec<Vec<String>> = table
        .rows
        .iter()
        .map(|row| {
            row.label
                .iter()
                .cloned()
                .chain(row.cells.iter().map(|c| c.to_string()))
                .collect()
        })
        .collect();

    let columns = lines
        .iter()
        .map(Vec::len)
        .chain(std::iter::once(table.header.len()))
        .max()
        .unwrap_or(0);

    let mut widths = vec![0usize; columns];
    for line in std::iter::once(&table.header).chain(lines.iter()) {
        for (i, value) in line.iter().enumerate() {
            widths[i] = widths[i].max(value.chars().count());
        }
    }

    let mut out = String::new();
    out.push_str(&rule(&widths, '┌', '┬', '┐'));
    out.push_str(&content_line(&table.header, &widths));
    out.push_str(&rule(&widths, '├', '┼', '┤'));
    for line in &lines {
        out.push_str(&content_line(line, &widths));
    }
    out.push_str(&rule(&widths, '└', '┴', '┘'));
    out
}

fn rule(widths: &[usize], left: char, mid: char, right: char) -> String {
    let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
    format!("{}{}{}\n", left, segments.join(mid.to_string().as_str()), right)
}

fn content_line(values: &[String], widths: &[usize]) -> String {
    let cells: Vec<String> = widths
        .iter()
        .enumerate()
        .map(|(i, width)| {
            let value = values.get(i).map(String::as_str).unwrap_or("");
            let pad = width - value.chars().count();
            format!(" {}{} ", value, " ".repeat(pad))
        })
        .collect();
    format!("│{}│\n", cells.join("│"))
}
