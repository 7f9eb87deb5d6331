use crate::dataset::Dataset;
use crate::domain::{clean_mobile_cell, clean_name_cell, derive_email, CellValue};
use crate::error::CoreError;

pub const NAME_COLUMN: &str = "NAME OF INSURED";
pub const MOBILE_COLUMN: &str = "MOBILE NO.";
pub const EMAIL_COLUMN: &str = "EMAIL ID";

/// Sheet row of the first data row; the header occupies row 1.
const FIRST_DATA_ROW: usize = 2;

/// The three derived values for one row. `None` marks a blank cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedRecord {
    pub name: Option<String>,
    pub mobile: Option<String>,
    pub email: Option<String>,
}

pub fn normalize_record(
    name: &CellValue,
    mobile: &CellValue,
) -> Result<NormalizedRecord, CoreError> {
    let name = clean_name_cell(name);
    let mobile = clean_mobile_cell(mobile)?;
    let email = name.as_deref().map(derive_email);
    Ok(NormalizedRecord {
        name,
        mobile,
        email,
    })
}

/// Returns a copy of `dataset` with the name and mobile columns cleaned and
/// an `EMAIL ID` column derived from the cleaned name.
///
/// Row count, row order and every other column are kept as they are. The
/// first row that fails to clean aborts the whole run.
pub fn normalize(dataset: &Dataset) -> Result<Dataset, CoreError> {
    let name_index = dataset.require_column(NAME_COLUMN)?;
    let mobile_index = dataset.require_column(MOBILE_COLUMN)?;

    let mut output = dataset.clone();
    let email_index = output.ensure_column(EMAIL_COLUMN);

    for (offset, row) in output.rows_mut().iter_mut().enumerate() {
        let record = normalize_record(&row[name_index], &row[mobile_index]).map_err(|source| {
            CoreError::Row {
                row: offset + FIRST_DATA_ROW,
                source: Box::new(source),
            }
        })?;
        row[name_index] = record.name.into();
        row[mobile_index] = record.mobile.into();
        row[email_index] = record.email.into();
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::{normalize, normalize_record, EMAIL_COLUMN, MOBILE_COLUMN, NAME_COLUMN};
    use crate::dataset::Dataset;
    use crate::domain::CellValue;
    use crate::error::CoreError;

    #[test]
    fn normalize_record_derives_email_from_cleaned_name() {
        let record =
            normalize_record(&"Jane Q. Public".into(), &CellValue::Float(919812345678.0)).unwrap();
        assert_eq!(record.name.as_deref(), Some("JaneQPublic"));
        assert_eq!(record.mobile.as_deref(), Some("9812345678"));
        assert_eq!(record.email.as_deref(), Some("JaneQPublic@yahoo.com"));
    }

    #[test]
    fn normalize_record_keeps_blank_name_blank() {
        let record = normalize_record(&CellValue::Empty, &CellValue::Empty).unwrap();
        assert_eq!(record.name, None);
        assert_eq!(record.mobile, None);
        assert_eq!(record.email, None);
    }

    #[test]
    fn normalize_requires_both_columns() {
        let dataset = Dataset::new([NAME_COLUMN]);
        assert_eq!(
            normalize(&dataset),
            Err(CoreError::MissingColumn(MOBILE_COLUMN.to_string()))
        );

        let dataset = Dataset::new([MOBILE_COLUMN]);
        assert_eq!(
            normalize(&dataset),
            Err(CoreError::MissingColumn(NAME_COLUMN.to_string()))
        );
    }

    #[test]
    fn normalize_reports_sheet_row_of_bad_mobile() {
        let mut dataset = Dataset::new([NAME_COLUMN, MOBILE_COLUMN]);
        dataset.push_row(vec!["Ada".into(), "9876543210".into()]);
        dataset.push_row(vec!["Grace".into(), "12.34.56".into()]);

        let err = normalize(&dataset).unwrap_err();
        match err {
            CoreError::Row { row, source } => {
                assert_eq!(row, 3);
                assert!(matches!(*source, CoreError::InvalidMobile { .. }));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn normalize_overwrites_existing_email_column_in_place() {
        let mut dataset = Dataset::new([EMAIL_COLUMN, NAME_COLUMN, MOBILE_COLUMN]);
        dataset.push_row(vec!["old@example.com".into(), "Ada L".into(), "1".into()]);

        let output = normalize(&dataset).unwrap();
        assert_eq!(output.columns(), dataset.columns());
        assert_eq!(
            output.get(0, EMAIL_COLUMN),
            Some(&CellValue::from("AdaL@yahoo.com"))
        );
    }

    #[test]
    fn normalize_leaves_input_untouched() {
        let mut dataset = Dataset::new([NAME_COLUMN, MOBILE_COLUMN]);
        dataset.push_row(vec!["Ada L".into(), "91 98765 43210".into()]);
        let before = dataset.clone();

        let _ = normalize(&dataset).unwrap();
        assert_eq!(dataset, before);
    }
}
