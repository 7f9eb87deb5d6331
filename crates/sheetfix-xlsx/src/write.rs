use crate::error::{Result, XlsxError};
use rust_xlsxwriter::{Format, Workbook, Worksheet};
use sheetfix_core::{CellValue, Dataset};

const DATE_FORMAT: &str = "yyyy-mm-dd hh:mm:ss";

/// Encodes `dataset` as a single sheet workbook and returns the file bytes.
pub fn write_dataset(dataset: &Dataset, sheet: &str) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(sheet)?;

    let header = Format::new().set_bold();
    for (col, name) in dataset.columns().iter().enumerate() {
        worksheet.write_string_with_format(0, column_number(col)?, name, &header)?;
    }

    let date = Format::new().set_num_format(DATE_FORMAT);
    for (index, cells) in dataset.rows().iter().enumerate() {
        let row = row_number(index + 1)?;
        for (col, cell) in cells.iter().enumerate() {
            write_cell(worksheet, row, column_number(col)?, cell, &date)?;
        }
    }

    Ok(workbook.save_to_buffer()?)
}

fn write_cell(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    cell: &CellValue,
    date: &Format,
) -> Result<()> {
    match cell {
        CellValue::Empty => {}
        CellValue::String(value) | CellValue::Error(value) => {
            worksheet.write_string(row, col, value)?;
        }
        // Excel stores every number as a double.
        CellValue::Int(value) => {
            worksheet.write_number(row, col, *value as f64)?;
        }
        CellValue::Float(value) if value.is_finite() => {
            worksheet.write_number(row, col, *value)?;
        }
        CellValue::Float(_) => {
            worksheet.write_string(row, col, cell.to_text())?;
        }
        CellValue::Bool(value) => {
            worksheet.write_boolean(row, col, *value)?;
        }
        CellValue::DateTime(value) => {
            worksheet.write_number_with_format(row, col, *value, date)?;
        }
    }
    Ok(())
}

fn row_number(index: usize) -> Result<u32> {
    u32::try_from(index).map_err(|_| XlsxError::TooLarge(format!("row {index}")))
}

fn column_number(index: usize) -> Result<u16> {
    u16::try_from(index).map_err(|_| XlsxError::TooLarge(format!("column {index}")))
}
