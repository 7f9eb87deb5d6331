pub mod error;
pub mod read;
pub mod write;

pub use error::{Result, XlsxError};
pub use read::{list_sheets, read_dataset};
pub use write::write_dataset;
