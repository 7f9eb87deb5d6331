use crate::error::not_found;
use anyhow::{Context as _, Result};
use serde::Serialize;
use sheetfix_config::{validate_sheet_name, AppConfig};
use sheetfix_core::Dataset;
use sheetfix_xlsx::read_dataset;
use std::fs;
use std::io::{self, ErrorKind, Write};
use std::path::Path;
use tracing::debug;

pub mod completions;
pub mod preview;
pub mod process;

pub struct Context<'a> {
    pub json: bool,
    pub config: &'a AppConfig,
}

impl Context<'_> {
    /// `--sheet` when given, otherwise the configured sheet.
    pub fn sheet(&self, flag: Option<&str>) -> Result<String> {
        match flag {
            Some(raw) => Ok(validate_sheet_name(raw)?),
            None => Ok(self.config.sheet.clone()),
        }
    }
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}

pub fn load_sheet(path: &Path, sheet: &str) -> Result<Dataset> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            return Err(not_found(format!("input file {}", path.display())));
        }
        Err(err) => {
            return Err(err).with_context(|| format!("read workbook {}", path.display()));
        }
    };
    debug!(path = %path.display(), size_bytes = bytes.len(), "workbook read");

    let dataset = read_dataset(&bytes, sheet)
        .with_context(|| format!("decode workbook {}", path.display()))?;
    debug!(
        sheet,
        rows = dataset.len(),
        columns = dataset.columns().len(),
        "sheet decoded"
    );
    Ok(dataset)
}
