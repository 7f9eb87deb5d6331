use anyhow::Error;
use sheetfix_config::ConfigError;
use sheetfix_core::{CoreError, MOBILE_COLUMN, NAME_COLUMN};
use sheetfix_xlsx::XlsxError;
use std::process::ExitCode;
use thiserror::Error as ThisError;

pub const EXIT_FAILURE: u8 = 1;
pub const EXIT_NOT_FOUND: u8 = 2;
pub const EXIT_INVALID_INPUT: u8 = 3;

#[derive(Debug, ThisError)]
pub enum CliError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("not found: {0}")]
    NotFound(String),
}

pub fn invalid_input(message: impl Into<String>) -> Error {
    CliError::InvalidInput(message.into()).into()
}

pub fn not_found(message: impl Into<String>) -> Error {
    CliError::NotFound(message.into()).into()
}

pub fn report_error(err: &Error, verbose: bool) {
    if verbose {
        eprintln!("error: {:#}", err);
    } else {
        eprintln!("error: {}", err);
    }
    if let Some(hint) = schema_hint(err) {
        eprintln!("hint: {}", hint);
    }
}

/// Points at the expected layout when a workbook is missing the sheet or columns.
pub fn schema_hint(err: &Error) -> Option<String> {
    for cause in err.chain() {
        if let Some(XlsxError::SheetNotFound { sheet, .. }) = cause.downcast_ref::<XlsxError>() {
            return Some(format!(
                "make sure the file contains a sheet named '{sheet}' (or pass --sheet)"
            ));
        }
        if let Some(core_err) = cause.downcast_ref::<CoreError>() {
            if core_err.is_schema() {
                return Some(format!(
                    "make sure the sheet has the columns '{NAME_COLUMN}' and '{MOBILE_COLUMN}'"
                ));
            }
        }
    }
    None
}

pub fn exit_code_for(err: &Error) -> ExitCode {
    ExitCode::from(exit_status(err))
}

fn exit_status(err: &Error) -> u8 {
    for cause in err.chain() {
        if let Some(cli_err) = cause.downcast_ref::<CliError>() {
            return match cli_err {
                CliError::InvalidInput(_) => EXIT_INVALID_INPUT,
                CliError::NotFound(_) => EXIT_NOT_FOUND,
            };
        }
        if let Some(xlsx_err) = cause.downcast_ref::<XlsxError>() {
            return xlsx_exit_code(xlsx_err);
        }
        if let Some(config_err) = cause.downcast_ref::<ConfigError>() {
            return config_exit_code(config_err);
        }
        if let Some(_core_err) = cause.downcast_ref::<CoreError>() {
            return EXIT_INVALID_INPUT;
        }
    }
    EXIT_FAILURE
}

fn xlsx_exit_code(err: &XlsxError) -> u8 {
    match err {
        XlsxError::Open(_) | XlsxError::Read { .. } | XlsxError::SheetNotFound { .. } => {
            EXIT_INVALID_INPUT
        }
        XlsxError::Write(_) | XlsxError::TooLarge(_) => EXIT_FAILURE,
    }
}

fn config_exit_code(err: &ConfigError) -> u8 {
    match err {
        ConfigError::MissingHomeDir => EXIT_FAILURE,
        ConfigError::InvalidConfigPath(_)
        | ConfigError::MissingConfigFile(_)
        | ConfigError::InvalidSheetName(_)
        | ConfigError::InvalidPreviewRows(_)
        | ConfigError::Read { .. }
        | ConfigError::Parse { .. } => EXIT_INVALID_INPUT,
    }
}
