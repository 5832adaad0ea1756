use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use mdr_cli::pipeline::TableShape;
use mdr_model::{MissingField, MissingKind};

use crate::types::CompareResult;

/// Report rows shown in the terminal; the export always has all of them.
const PREVIEW_ROWS: usize = 50;

pub fn print_summary(result: &CompareResult) {
    println!("Build: {}", result.build.display());
    println!("Repository: {}", result.repository.display());
    println!(
        "Scope: volume \"{}\", libraries {}",
        result.config.volume_marker,
        if result.config.allowed_libraries.is_empty() {
            "all".to_string()
        } else {
            result
                .config
                .allowed_libraries
                .iter()
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(", ")
        }
    );
    if let Some(path) = &result.report {
        println!("Report: {}", path.display());
    }

    let stats = &result.comparison.stats;
    let mut table = Table::new();
    table.set_header(vec![header_cell("Stage"), header_cell("Count")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![Cell::new("Build rows"), Cell::new(stats.build_rows)]);
    table.add_row(vec![
        Cell::new("Repository rows"),
        Cell::new(stats.repository_rows),
    ]);
    table.add_row(vec![
        Cell::new("Repository rows in scope"),
        Cell::new(stats.repository_in_scope),
    ]);
    table.add_row(vec![
        Cell::new("Unmatched build forms"),
        count_cell(stats.unmatched_forms, Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Unmatched build items"),
        count_cell(stats.unmatched_items, Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Form instances"),
        Cell::new(stats.form_instances),
    ]);
    table.add_row(vec![
        Cell::new("Required items"),
        Cell::new(stats.required_pairs),
    ]);
    table.add_row(vec![
        Cell::new("Missing (Mandatory)").add_attribute(Attribute::Bold),
        count_cell(
            result.comparison.count_kind(MissingKind::Mandatory),
            Color::Red,
        ),
    ]);
    table.add_row(vec![
        Cell::new("Missing (Optionally Required)").add_attribute(Attribute::Bold),
        count_cell(
            result.comparison.count_kind(MissingKind::OptionallyRequired),
            Color::Yellow,
        ),
    ]);
    println!("{table}");

    if result.comparison.is_clean() {
        println!("No missing items found.");
        return;
    }
    print_missing_table(&result.comparison.rows);
}

fn print_missing_table(rows: &[MissingField]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Form Name"),
        header_cell("Item"),
        header_cell("Type"),
        header_cell("Context"),
    ]);
    apply_report_table_style(&mut table);
    for row in rows.iter().take(PREVIEW_ROWS) {
        table.add_row(vec![
            Cell::new(&row.form_name)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(&row.item_name),
            kind_cell(row.kind),
            match &row.context {
                Some(context) => Cell::new(context),
                None => dim_cell("-"),
            },
        ]);
    }
    println!();
    println!("Missing items:");
    println!("{table}");
    if rows.len() > PREVIEW_ROWS {
        println!(
            "... and {} more (see the exported report)",
            rows.len() - PREVIEW_ROWS
        );
    }
}

pub fn print_check(shapes: &[TableShape]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Table"),
        header_cell("File"),
        header_cell("Sheet"),
        header_cell("Rows"),
        header_cell("Columns"),
        header_cell("Status"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    align_column(&mut table, 5, CellAlignment::Center);
    for shape in shapes {
        table.add_row(vec![
            Cell::new(shape.label).add_attribute(Attribute::Bold),
            Cell::new(shape.path.display()),
            match shape.sheet {
                Some(sheet) => Cell::new(sheet),
                None => dim_cell("-"),
            },
            Cell::new(shape.rows),
            Cell::new(shape.columns),
            Cell::new("✓")
                .fg(Color::Green)
                .add_attribute(Attribute::Bold),
        ]);
    }
    println!("{table}");
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_report_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(160);
    if table.column_count() >= 4 {
        table.set_constraints(vec![
            ColumnConstraint::UpperBoundary(Width::Fixed(16)),
            ColumnConstraint::UpperBoundary(Width::Fixed(20)),
            ColumnConstraint::LowerBoundary(Width::Fixed(11)),
            ColumnConstraint::UpperBoundary(Width::Percentage(60)),
        ]);
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn kind_cell(kind: MissingKind) -> Cell {
    match kind {
        MissingKind::Mandatory => Cell::new(kind.as_str()).fg(Color::Red),
        MissingKind::OptionallyRequired => Cell::new(kind.as_str()).fg(Color::Yellow),
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
