use sheetfix_core::{CellValue, Dataset};

const MAX_CELL_WIDTH: usize = 24;
const ELLIPSIS: char = '…';

/// Renders a dataset as a plain text table, one line per row.
pub fn render_table(dataset: &Dataset) -> String {
    let header: Vec<String> = dataset.columns().iter().map(|c| clip(c)).collect();
    let body: Vec<Vec<String>> = dataset
        .rows()
        .iter()
        .map(|row| row.iter().map(display_cell).collect())
        .collect();

    let mut widths: Vec<usize> = header.iter().map(|cell| cell.chars().count()).collect();
    for row in &body {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_line(&mut out, &header, &widths);
    let rule: Vec<String> = widths.iter().map(|width| "-".repeat(*width)).collect();
    push_line(&mut out, &rule, &widths);
    for row in &body {
        push_line(&mut out, row, &widths);
    }
    out
}

fn display_cell(cell: &CellValue) -> String {
    match cell {
        CellValue::Empty => String::new(),
        other => clip(&other.to_text()),
    }
}

fn clip(value: &str) -> String {
    let value = value.replace(['\n', '\r', '\t'], " ");
    if value.chars().count() <= MAX_CELL_WIDTH {
        return value;
    }
    let mut clipped: String = value.chars().take(MAX_CELL_WIDTH - 1).collect();
    clipped.push(ELLIPSIS);
    clipped
}

fn push_line(out: &mut String, cells: &[String], widths: &[usize]) {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join("  ");
    out.push_str(line.trim_end());
    out.push('\n');
}
