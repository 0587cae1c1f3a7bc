//! Console rendering of run summaries and rejection tables.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use roster_model::{CandidateRecord, Rejection};
use roster_validate::RejectionReporter;
use serde_json::Value;

use crate::types::ProcessResult;

/// Print the run summary: paths, then a one-row counts table.
pub fn print_summary(result: &ProcessResult) {
    println!("Input: {}", result.input.display());
    if let Some(path) = &result.output {
        println!("Output: {}", path.display());
    }
    if let Some(path) = &result.rejection_report {
        println!("Rejection report: {}", path.display());
    }
    if result.dry_run {
        println!("Dry run: no files written");
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Records"),
        header_cell("Valid"),
        header_cell("Rejected"),
    ]);
    apply_table_style(&mut table);
    for index in 0..3 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    table.add_row(vec![
        Cell::new(result.total),
        count_cell(result.valid, Color::Green),
        count_cell(result.rejections.len(), Color::Red),
    ]);
    println!("{table}");
}

/// Reporting collaborator that renders the rejection list as a console
/// table, one row per rejection: the original record and the reason.
#[derive(Debug, Default)]
pub struct ConsoleReporter;

impl RejectionReporter for ConsoleReporter {
    fn report(&mut self, rejections: &[Rejection]) {
        if rejections.is_empty() {
            return;
        }
        let mut table = Table::new();
        table.set_header(vec![header_cell("Record"), header_cell("Rejection reason")]);
        apply_table_style(&mut table);
        for rejection in rejections {
            table.add_row(vec![
                Cell::new(compact_record(&rejection.record)),
                Cell::new(rejection.message()).fg(Color::Red),
            ]);
        }
        println!("Rejected records:");
        println!("{table}");
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
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

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        Cell::new(count).fg(Color::DarkGrey)
    }
}

/// Single-line JSON rendering of the original record payload.
fn compact_record(record: &CandidateRecord) -> String {
    Value::Object(record.clone()).to_string()
}
