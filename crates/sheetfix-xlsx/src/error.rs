use thiserror::Error;

#[derive(Debug, Error)]
pub enum XlsxError {
    #[error("failed to open workbook: {0}")]
    Open(#[source] calamine::XlsxError),
    #[error("failed to read sheet {sheet:?}: {source}")]
    Read {
        sheet: String,
        #[source]
        source: calamine::XlsxError,
    },
    #[error("sheet {sheet:?} not found (available: {})", .available.join(", "))]
    SheetNotFound {
        sheet: String,
        available: Vec<String>,
    },
    #[error("failed to write workbook: {0}")]
    Write(#[from] rust_xlsxwriter::XlsxError),
    #[error("sheet too large: {0}")]
    TooLarge(String),
}

impl XlsxError {
    pub fn is_schema(&self) -> bool {
        matches!(self, XlsxError::SheetNotFound { .. })
    }
}

pub type Result<T> = std::result::Result<T, XlsxError>;
