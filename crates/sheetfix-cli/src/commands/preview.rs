use crate::commands::{load_sheet, print_json, Context};
use crate::util::render_table;
use anyhow::{Context as _, Result};
use clap::Args;
use serde::Serialize;
use sheetfix_config::validate_preview_rows;
use sheetfix_core::{normalize, Dataset};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct PreviewArgs {
    pub file: PathBuf,
    #[arg(long)]
    pub sheet: Option<String>,
    #[arg(long)]
    pub rows: Option<usize>,
}

#[derive(Debug, Serialize)]
struct PreviewReport {
    sheet: String,
    total_rows: usize,
    original: Dataset,
    processed: Dataset,
}

pub fn preview(ctx: &Context<'_>, args: PreviewArgs) -> Result<()> {
    let sheet = ctx.sheet(args.sheet.as_deref())?;
    let rows = match args.rows {
        Some(rows) => validate_preview_rows(rows)?,
        None => ctx.config.preview_rows,
    };

    let original = load_sheet(&args.file, &sheet)?;
    let processed = normalize(&original).with_context(|| format!("normalize sheet {sheet:?}"))?;

    let report = PreviewReport {
        sheet,
        total_rows: original.len(),
        original: original.head(rows),
        processed: processed.head(rows),
    };

    if ctx.json {
        return print_json(&report);
    }

    println!("sheet: {} ({} rows)", report.sheet, report.total_rows);
    println!();
    println!("First {} rows of original data:", report.original.len());
    print!("{}", render_table(&report.original));
    println!();
    println!("First {} rows of processed data:", report.processed.len());
    print!("{}", render_table(&report.processed));
    Ok(())
}
