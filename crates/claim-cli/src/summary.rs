//! Terminal tables for `claimprep` output.

use std::collections::{BTreeMap, BTreeSet};

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use claim_cli::pipeline::PrepareOutcome;
use claim_eval::ClassificationMetrics;

pub fn print_summary(outcome: &PrepareOutcome) {
    println!("{}", dataset_table(outcome));
    println!("{}", balance_table(&outcome.balance_before, &outcome.balance_after));
    println!("{}", metrics_table(&outcome.metrics));
    for path in &outcome.written {
        println!("Wrote {}", path.display());
    }
}

fn dataset_table(outcome: &PrepareOutcome) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Item"), header_cell("Value")]);
    apply_table_style(&mut table);
    table.add_row(vec![
        Cell::new("Dataset"),
        Cell::new(outcome.data_path.display()),
    ]);
    table.add_row(vec![Cell::new("Raw rows"), count_cell(outcome.raw_rows)]);
    table.add_row(vec![Cell::new("Raw columns"), count_cell(outcome.raw_columns)]);
    table.add_row(vec![
        Cell::new("Feature columns"),
        count_cell(outcome.feature_columns),
    ]);
    table.add_row(vec![Cell::new("Train rows"), count_cell(outcome.train_rows)]);
    table.add_row(vec![Cell::new("Test rows"), count_cell(outcome.test_rows)]);
    table.add_row(vec![
        Cell::new("Sampler"),
        Cell::new(format!("{} ({})", outcome.sampler, outcome.strategy)),
    ]);
    table.add_row(vec![Cell::new("Scaler"), Cell::new(&outcome.scaler)]);
    table
}

fn balance_table(before: &BTreeMap<i64, usize>, after: &BTreeMap<i64, usize>) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Class"),
        header_cell("Before"),
        header_cell("After"),
        header_cell("Added"),
    ]);
    apply_summary_table_style(&mut table);

    let labels: BTreeSet<i64> = before.keys().chain(after.keys()).copied().collect();
    for label in labels {
        let was = before.get(&label).copied().unwrap_or(0);
        let now = after.get(&label).copied().unwrap_or(0);
        let added = now.saturating_sub(was);
        let added_cell = if added > 0 {
            Cell::new(format!("+{added}"))
                .fg(Color::Green)
                .add_attribute(Attribute::Bold)
        } else {
            dim_cell("-")
        };
        table.add_row(vec![
            Cell::new(label),
            count_cell(was),
            count_cell(now),
            added_cell,
        ]);
    }
    for index in 1..=3 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    table
}

fn metrics_table(metrics: &ClassificationMetrics) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell(&format!("Baseline ({})", metrics.model)),
        header_cell("Value"),
    ]);
    apply_summary_table_style(&mut table);
    let rows = [
        ("Accuracy", metrics.accuracy),
        ("Precision", metrics.precision),
        ("Recall", metrics.recall),
        ("F1", metrics.f1_score),
        ("ROC AUC", metrics.roc_auc),
        ("False negative rate", metrics.false_negative_rate),
    ];
    for (name, value) in rows {
        table.add_row(vec![Cell::new(name), metric_cell(value)]);
    }
    align_column(&mut table, 1, CellAlignment::Right);
    table
}

/// Two-column table of registered names with their descriptions.
pub fn registry_table(title: &str, entries: &[(String, String)]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell(title), header_cell("Description")]);
    apply_table_style(&mut table);
    for (name, description) in entries {
        table.add_row(vec![
            Cell::new(name).add_attribute(Attribute::Bold),
            Cell::new(description),
        ]);
    }
    table
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn count_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count)
    } else {
        dim_cell(count)
    }
}

fn metric_cell(value: f64) -> Cell {
    if value.is_nan() {
        dim_cell("n/a")
    } else {
        Cell::new(format!("{value:.4}"))
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
