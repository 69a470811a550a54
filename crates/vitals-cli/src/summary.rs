use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::types::NormalizeSummary;

pub fn print_summary(summary: &NormalizeSummary) {
    println!("Input: {}", summary.input.display());
    match &summary.output {
        Some(path) => println!("Output: {}", path.display()),
        None => println!("Output: (dry run)"),
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Rows read"),
        header_cell("Rows written"),
        header_cell("Empty"),
        header_cell("Errors"),
    ]);
    apply_table_style(&mut table);
    for index in 0..4 {
        if let Some(column) = table.column_mut(index) {
            column.set_cell_alignment(CellAlignment::Right);
        }
    }
    table.add_row(vec![
        Cell::new(summary.rows_read),
        Cell::new(summary.rows_written),
        dim_if_zero(summary.empty_rows, Color::Yellow),
        dim_if_zero(summary.issues.len(), Color::Red),
    ]);
    println!("{table}");
    if !summary.issues.is_empty() {
        let mut issue_table = Table::new();
        issue_table.set_header(vec![header_cell("Row"), header_cell("Problem")]);
        apply_table_style(&mut issue_table);
        for issue in &summary.issues {
            issue_table.add_row(vec![
                Cell::new(issue.row).fg(Color::Red),
                Cell::new(&issue.message),
            ]);
        }
        println!();
        println!("Skipped rows:");
        println!("{issue_table}");
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_if_zero(value: usize, color: Color) -> Cell {
    if value > 0 {
        Cell::new(value).fg(color).add_attribute(Attribute::Bold)
    } else {
        Cell::new(value).fg(Color::DarkGrey)
    }
}
