use sheetfix_core::{
    normalize, CellValue, CoreError, Dataset, EMAIL_COLUMN, MOBILE_COLUMN, NAME_COLUMN,
};

fn renewal_sheet() -> Dataset {
    let mut dataset = Dataset::new(["POLICY NO", NAME_COLUMN, MOBILE_COLUMN, "PREMIUM"]);
    dataset.push_row(vec![
        "P-001".into(),
        "John O'Brien 123".into(),
        "919876543210".into(),
        CellValue::Float(1520.5),
    ]);
    dataset.push_row(vec![
        "P-002".into(),
        CellValue::Empty,
        CellValue::Empty,
        CellValue::Int(900),
    ]);
    dataset.push_row(vec![
        "P-003".into(),
        "  Meera   Nair ".into(),
        CellValue::Float(919123456789.0),
        CellValue::Empty,
    ]);
    dataset.push_row(vec![
        "P-004".into(),
        "!!!".into(),
        "'98765 4321".into(),
        CellValue::Bool(true),
    ]);
    dataset
}

#[test]
fn row_count_and_order_are_preserved() {
    let input = renewal_sheet();
    let output = normalize(&input).expect("normalize");

    assert_eq!(output.len(), input.len());
    let policies: Vec<_> = (0..output.len())
        .map(|row| output.get(row, "POLICY NO").cloned())
        .collect();
    let expected: Vec<_> = (0..input.len())
        .map(|row| input.get(row, "POLICY NO").cloned())
        .collect();
    assert_eq!(policies, expected);
}

#[test]
fn untouched_columns_are_identical() {
    let input = renewal_sheet();
    let output = normalize(&input).expect("normalize");

    for column in ["POLICY NO", "PREMIUM"] {
        for row in 0..input.len() {
            assert_eq!(output.get(row, column), input.get(row, column));
        }
    }
}

#[test]
fn targeted_columns_are_rewritten() {
    let output = normalize(&renewal_sheet()).expect("normalize");

    assert_eq!(
        output.columns(),
        ["POLICY NO", NAME_COLUMN, MOBILE_COLUMN, "PREMIUM", EMAIL_COLUMN]
    );

    assert_eq!(output.get(0, NAME_COLUMN), Some(&CellValue::from("JohnOBrien123")));
    assert_eq!(output.get(0, MOBILE_COLUMN), Some(&CellValue::from("9876543210")));
    assert_eq!(
        output.get(0, EMAIL_COLUMN),
        Some(&CellValue::from("JohnOBrien123@yahoo.com"))
    );

    assert_eq!(output.get(1, NAME_COLUMN), Some(&CellValue::Empty));
    assert_eq!(output.get(1, MOBILE_COLUMN), Some(&CellValue::Empty));
    assert_eq!(output.get(1, EMAIL_COLUMN), Some(&CellValue::Empty));

    assert_eq!(output.get(2, NAME_COLUMN), Some(&CellValue::from("MeeraNair")));
    assert_eq!(output.get(2, MOBILE_COLUMN), Some(&CellValue::from("9123456789")));

    assert_eq!(output.get(3, NAME_COLUMN), Some(&CellValue::from("")));
    assert_eq!(output.get(3, MOBILE_COLUMN), Some(&CellValue::from("987654321")));
    assert_eq!(output.get(3, EMAIL_COLUMN), Some(&CellValue::from("@yahoo.com")));
}

#[test]
fn cleaning_is_idempotent() {
    let once = normalize(&renewal_sheet()).expect("first pass");
    let twice = normalize(&once).expect("second pass");

    for column in [NAME_COLUMN, MOBILE_COLUMN, EMAIL_COLUMN] {
        for row in 0..once.len() {
            assert_eq!(twice.get(row, column), once.get(row, column), "{column}");
        }
    }
    assert_eq!(twice.columns(), once.columns());
}

#[test]
fn missing_column_fails_before_any_row() {
    let mut dataset = Dataset::new(["NAME", MOBILE_COLUMN]);
    dataset.push_row(vec!["Ada".into(), "1.2.3".into()]);

    let err = normalize(&dataset).unwrap_err();
    assert_eq!(err, CoreError::MissingColumn(NAME_COLUMN.to_string()));
    assert!(err.is_schema());
}

#[test]
fn empty_sheet_gains_email_header_only() {
    let dataset = Dataset::new([NAME_COLUMN, MOBILE_COLUMN]);
    let output = normalize(&dataset).expect("normalize");
    assert!(output.is_empty());
    assert_eq!(output.columns(), [NAME_COLUMN, MOBILE_COLUMN, EMAIL_COLUMN]);
}
