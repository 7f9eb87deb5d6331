use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("missing column: {0}")]
    MissingColumn(String),
    #[error("invalid mobile number: {value:?}")]
    InvalidMobile { value: String },
    #[error("row {row}: {source}")]
    Row {
        row: usize,
        #[source]
        source: Box<CoreError>,
    },
}

impl CoreError {
    /// True when the error describes the shape of the sheet rather than a value in it.
    pub fn is_schema(&self) -> bool {
        matches!(self, CoreError::MissingColumn(_))
    }
}
