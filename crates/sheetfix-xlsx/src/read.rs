use crate::error::{Result, XlsxError};
use calamine::{open_workbook_from_rs, Data, Range, Reader, Xlsx};
use sheetfix_core::{CellValue, Dataset};
use std::io::Cursor;

pub fn list_sheets(bytes: &[u8]) -> Result<Vec<String>> {
    let workbook = open(bytes)?;
    Ok(workbook.sheet_names())
}

/// Decodes one sheet of an in-memory `.xlsx` workbook.
///
/// The first row of the used range is the header. Blank header cells get
/// `Unnamed: N` names, `N` being the zero based column offset.
pub fn read_dataset(bytes: &[u8], sheet: &str) -> Result<Dataset> {
    let mut workbook = open(bytes)?;
    let available = workbook.sheet_names();
    if !available.iter().any(|name| name == sheet) {
        return Err(XlsxError::SheetNotFound {
            sheet: sheet.to_string(),
            available,
        });
    }

    let range = workbook
        .worksheet_range(sheet)
        .map_err(|source| XlsxError::Read {
            sheet: sheet.to_string(),
            source,
        })?;
    Ok(range_to_dataset(&range))
}

fn open(bytes: &[u8]) -> Result<Xlsx<Cursor<&[u8]>>> {
    open_workbook_from_rs(Cursor::new(bytes)).map_err(XlsxError::Open)
}

fn range_to_dataset(range: &Range<Data>) -> Dataset {
    let mut rows = range.rows();
    let Some(header) = rows.next() else {
        return Dataset::default();
    };

    let columns = header.iter().enumerate().map(|(index, cell)| {
        let name = cell_value(cell).to_text();
        if name.is_empty() {
            format!("Unnamed: {index}")
        } else {
            name
        }
    });
    let mut dataset = Dataset::new(columns);
    for row in rows {
        dataset.push_row(row.iter().map(cell_value).collect());
    }
    dataset
}

fn cell_value(cell: &Data) -> CellValue {
    match cell {
        Data::Empty => CellValue::Empty,
        Data::String(value) => CellValue::String(value.clone()),
        Data::Int(value) => CellValue::Int(*value),
        Data::Float(value) => CellValue::Float(*value),
        Data::Bool(value) => CellValue::Bool(*value),
        Data::DateTime(value) => CellValue::DateTime(value.as_f64()),
        Data::DateTimeIso(value) | Data::DurationIso(value) => CellValue::String(value.clone()),
        Data::Error(err) => CellValue::Error(err.to_string()),
    }
}
