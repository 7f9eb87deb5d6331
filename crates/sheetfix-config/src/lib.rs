use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

const APP_DIR: &str = "sheetfix";
const CONFIG_FILENAME: &str = "config.toml";

pub const DEFAULT_SHEET: &str = "TINY RENEWAL";
pub const DEFAULT_OUTPUT_SHEET: &str = "Sheet1";
pub const DEFAULT_PREVIEW_ROWS: usize = 5;
pub const MAX_PREVIEW_ROWS: usize = 1000;

/// Excel refuses sheet names longer than this.
const MAX_SHEET_NAME_LEN: usize = 31;
const FORBIDDEN_SHEET_CHARS: [char; 7] = ['[', ']', ':', '*', '?', '/', '\\'];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub sheet: String,
    pub output_sheet: String,
    pub preview_rows: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            sheet: DEFAULT_SHEET.to_string(),
            output_sheet: DEFAULT_OUTPUT_SHEET.to_string(),
            preview_rows: DEFAULT_PREVIEW_ROWS,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing home directory")]
    MissingHomeDir,
    #[error("invalid config path: {0}")]
    InvalidConfigPath(PathBuf),
    #[error("config file not found: {0}")]
    MissingConfigFile(PathBuf),
    #[error("invalid sheet name: {0:?}")]
    InvalidSheetName(String),
    #[error("invalid preview_rows value: {0}")]
    InvalidPreviewRows(usize),
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    sheet: Option<String>,
    output_sheet: Option<String>,
    preview_rows: Option<usize>,
}

pub fn load(config_path: Option<PathBuf>) -> Result<AppConfig> {
    let required = config_path.is_some();
    let path = match resolve_config_path(config_path) {
        Ok(path) => path,
        Err(ConfigError::MissingHomeDir) if !required => return Ok(AppConfig::default()),
        Err(ConfigError::InvalidConfigPath(_)) if !required => return Ok(AppConfig::default()),
        Err(err) => return Err(err),
    };
    match load_at_path(&path, required)? {
        Some(config) => Ok(config),
        None => Ok(AppConfig::default()),
    }
}

pub fn resolve_config_path(custom: Option<PathBuf>) -> Result<PathBuf> {
    match custom {
        Some(path) => {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::InvalidConfigPath(path));
            }
            Ok(path)
        }
        None => {
            let base = if let Some(dir) = env::var_os("XDG_CONFIG_HOME") {
                let path = PathBuf::from(dir);
                if path.as_os_str().is_empty() {
                    return Err(ConfigError::InvalidConfigPath(path));
                }
                path
            } else {
                let home = dirs::home_dir().ok_or(ConfigError::MissingHomeDir)?;
                home.join(".config")
            };
            Ok(base.join(APP_DIR).join(CONFIG_FILENAME))
        }
    }
}

/// Checks a worksheet name against the rules Excel enforces.
pub fn validate_sheet_name(name: &str) -> Result<String> {
    let trimmed = name.trim();
    let too_long = trimmed.chars().count() > MAX_SHEET_NAME_LEN;
    let forbidden = trimmed.contains(FORBIDDEN_SHEET_CHARS);
    let quoted = trimmed.starts_with('\'') || trimmed.ends_with('\'');
    if trimmed.is_empty() || too_long || forbidden || quoted {
        return Err(ConfigError::InvalidSheetName(name.to_string()));
    }
    Ok(trimmed.to_string())
}

pub fn validate_preview_rows(rows: usize) -> Result<usize> {
    if rows == 0 || rows > MAX_PREVIEW_ROWS {
        return Err(ConfigError::InvalidPreviewRows(rows));
    }
    Ok(rows)
}

fn load_at_path(path: &Path, required: bool) -> Result<Option<AppConfig>> {
    if !path.exists() {
        if required {
            return Err(ConfigError::MissingConfigFile(path.to_path_buf()));
        }
        return Ok(None);
    }

    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let parsed: ConfigFile = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(merge_config(parsed)?))
}

fn merge_config(parsed: ConfigFile) -> Result<AppConfig> {
    let mut config = AppConfig::default();

    if let Some(sheet) = parsed.sheet {
        config.sheet = validate_sheet_name(&sheet)?;
    }

    if let Some(output_sheet) = parsed.output_sheet {
        config.output_sheet = validate_sheet_name(&output_sheet)?;
    }

    if let Some(rows) = parsed.preview_rows {
        config.preview_rows = validate_preview_rows(rows)?;
    }

    Ok(config)
}
