use crate::domain::CellValue;
use crate::error::CoreError;

const COUNTRY_CODE: &str = "91";
const PREFIXED_LEN: usize = 12;

/// Cleans a mobile number given as text.
///
/// Apostrophes and spaces are removed after trimming. A value containing a
/// decimal point is read as a float and truncated, which undoes numeric
/// storage such as `98765.0`. A result of 12 characters (not bytes) starting with `91` loses
/// that prefix. Anything else passes through without further checks.
pub fn clean_mobile(value: &str) -> Result<String, CoreError> {
    let cleaned: String = value
        .trim()
        .chars()
        .filter(|ch| *ch != '\'' && *ch != ' ')
        .collect();

    let cleaned = if cleaned.contains('.') {
        truncate_decimal(&cleaned)?
    } else {
        cleaned
    };

    if cleaned.chars().count() == PREFIXED_LEN && cleaned.starts_with(COUNTRY_CODE) {
        return Ok(cleaned[COUNTRY_CODE.len()..].to_string());
    }
    Ok(cleaned)
}

pub fn clean_mobile_cell(cell: &CellValue) -> Result<Option<String>, CoreError> {
    match cell {
        CellValue::Empty => Ok(None),
        other => clean_mobile(&other.to_text()).map(Some),
    }
}

fn truncate_decimal(value: &str) -> Result<String, CoreError> {
    let invalid = || CoreError::InvalidMobile {
        value: value.to_string(),
    };
    let parsed: f64 = value.parse().map_err(|_| invalid())?;
    if !parsed.is_finite() {
        return Err(invalid());
    }
    let truncated = format!("{:.0}", parsed.trunc());
    if truncated == "-0" {
        return Ok("0".to_string());
    }
    Ok(truncated)
}
