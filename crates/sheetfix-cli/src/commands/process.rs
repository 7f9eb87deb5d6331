use crate::commands::{load_sheet, print_json, Context};
use crate::error::invalid_input;
use anyhow::{Context as _, Result};
use clap::Args;
use serde::Serialize;
use sheetfix_core::{normalize, output_file_name};
use sheetfix_xlsx::write_dataset;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::info;

const STDOUT_TARGET: &str = "-";

#[derive(Debug, Args)]
pub struct ProcessArgs {
    pub file: PathBuf,
    #[arg(long)]
    pub sheet: Option<String>,
    /// Output path, `-` for stdout. Defaults to `<name>_updated.xlsx`
    #[arg(long)]
    pub out: Option<PathBuf>,
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Debug, Serialize)]
struct ProcessReport {
    input: String,
    output: String,
    sheet: String,
    rows: usize,
    size_bytes: usize,
    dry_run: bool,
}

enum Target {
    Stdout,
    File(PathBuf),
}

pub fn process(ctx: &Context<'_>, args: ProcessArgs) -> Result<()> {
    let sheet = ctx.sheet(args.sheet.as_deref())?;
    let target = resolve_target(&args.file, args.out.as_deref())?;
    if ctx.json && matches!(target, Target::Stdout) {
        return Err(invalid_input("--json cannot be combined with --out -"));
    }

    let original = load_sheet(&args.file, &sheet)?;
    let processed = normalize(&original).with_context(|| format!("normalize sheet {sheet:?}"))?;
    let encoded = write_dataset(&processed, &ctx.config.output_sheet)
        .with_context(|| "encode workbook")?;

    if !args.dry_run {
        match &target {
            Target::Stdout => {
                let mut stdout = io::stdout().lock();
                stdout.write_all(&encoded).with_context(|| "write workbook to stdout")?;
                stdout.flush()?;
            }
            Target::File(path) => {
                fs::write(path, &encoded)
                    .with_context(|| format!("write workbook {}", path.display()))?;
            }
        }
    }

    let output = match &target {
        Target::Stdout => STDOUT_TARGET.to_string(),
        Target::File(path) => path.display().to_string(),
    };
    info!(
        rows = processed.len(),
        output = %output,
        dry_run = args.dry_run,
        "workbook processed"
    );

    if ctx.json {
        return print_json(&ProcessReport {
            input: args.file.display().to_string(),
            output,
            sheet,
            rows: processed.len(),
            size_bytes: encoded.len(),
            dry_run: args.dry_run,
        });
    }

    match target {
        Target::Stdout => {}
        Target::File(_) if args.dry_run => {
            println!("Would write {} rows to {}", processed.len(), output);
        }
        Target::File(_) => {
            println!("Wrote {} rows to {}", processed.len(), output);
        }
    }
    Ok(())
}

fn resolve_target(input: &Path, out: Option<&Path>) -> Result<Target> {
    let path = match out {
        Some(path) if path.as_os_str() == STDOUT_TARGET => return Ok(Target::Stdout),
        Some(path) => path.to_path_buf(),
        None => PathBuf::from(output_file_name(input)),
    };
    if same_file(input, &path) {
        return Err(invalid_input(format!(
            "output would overwrite the input file {}",
            input.display()
        )));
    }
    Ok(Target::File(path))
}

fn same_file(a: &Path, b: &Path) -> bool {
    if a == b {
        return true;
    }
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
