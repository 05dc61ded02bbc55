use std::path::Path;

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use blueprint_cli::types::{CoversheetSummary, ExportSummary, PhenotipsSummary, RunSummary};

pub fn print_summary(summary: &RunSummary, json: bool) -> serde_json::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(summary)?);
        return Ok(());
    }
    match summary {
        RunSummary::Export(export) => print_export(export),
        RunSummary::Phenotips(phenotips) => print_phenotips(phenotips),
        RunSummary::Coversheet(coversheet) => print_coversheet(coversheet),
    }
    Ok(())
}

fn print_export(summary: &ExportSummary) {
    println!("Input: {}", summary.input.display());
    println!("Output: {}", summary.output.display());
    let mut table = new_table(vec!["Schema", "Rows"]);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![
        Cell::new(summary.schema.label()),
        count_cell(summary.rows, Color::Green),
    ]);
    println!("{table}");
}

fn print_phenotips(summary: &PhenotipsSummary) {
    println!("Sendaway list: {}", summary.input.display());
    let mut table = new_table(vec!["Candidates", "Skipped", "Written", "Not found"]);
    for index in 0..4 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    table.add_row(vec![
        Cell::new(summary.candidates),
        dim_cell(summary.skipped),
        count_cell(summary.written.len(), Color::Green),
        count_cell(summary.not_found.len(), Color::Yellow),
    ]);
    println!("{table}");

    if !summary.written.is_empty() {
        println!("Written:");
        for path in &summary.written {
            println!("- {}", file_label(path));
        }
    }
    if !summary.not_found.is_empty() {
        eprintln!("Not found in phenotips export:");
        for pru in &summary.not_found {
            eprintln!("- {pru}");
        }
    }
}

fn print_coversheet(summary: &CoversheetSummary) {
    println!("Reports: {}", summary.report_dir.display());
    let mut table = new_table(vec!["Report", "PRU", "Family", "Patients", "Output"]);
    align_column(&mut table, 3, CellAlignment::Right);
    for outcome in &summary.reports {
        table.add_row(vec![
            Cell::new(file_label(&outcome.report)),
            Cell::new(&outcome.pru).fg(Color::Blue),
            Cell::new(&outcome.family),
            Cell::new(outcome.patients),
            Cell::new(outcome.output.display()),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        dim_cell("-"),
        Cell::new(summary.reports.iter().map(|r| r.patients).sum::<usize>())
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
    ]);
    println!("{table}");
}

fn new_table(headers: Vec<&str>) -> Table {
    let mut table = Table::new();
    table.set_header(headers.into_iter().map(header_cell).collect::<Vec<_>>());
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
    table
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map_or_else(|| path.display().to_string(), |name| name.to_string_lossy().into_owned())
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
