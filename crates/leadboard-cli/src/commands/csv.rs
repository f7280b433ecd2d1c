use crate::commands::{print_json, Context};
use anyhow::{Context as _, Result};
use clap::{Args, Subcommand};
use leadboard_core::time::now_utc;
use leadboard_csv::{export_filename, import_leads, read_import, write_export};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Subcommand)]
pub enum ImportCommand {
    Csv(ImportCsvArgs),
}

#[derive(Debug, Args)]
pub struct ImportCsvArgs {
    pub file: PathBuf,
}

#[derive(Debug, Subcommand)]
pub enum ExportCommand {
    Csv(ExportCsvArgs),
}

#[derive(Debug, Args)]
pub struct ExportCsvArgs {
    /// Defaults to leads_<date>.csv in the current directory
    #[arg(long)]
    pub out: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct ExportReport {
    format: String,
    count: usize,
    output: String,
}

pub fn import_csv(ctx: &Context<'_>, args: ImportCsvArgs) -> Result<()> {
    let extension = args
        .file
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());
    if extension.as_deref() != Some("csv") {
        return Err(crate::error::invalid_input("import file must have a .csv extension"));
    }

    let parsed = read_import(&args.file)
        .with_context(|| format!("read csv file {}", args.file.display()))?;
    let report = import_leads(ctx.store, now_utc(), parsed);

    if ctx.json {
        print_json(&report)?;
    } else {
        println!(
            "imported {} leads ({} skipped, {} failed)",
            report.created, report.skipped, report.failed
        );
        for warning in &report.warnings {
            eprintln!("warning: {warning}");
        }
    }
    Ok(())
}

pub fn export_csv(ctx: &Context<'_>, args: ExportCsvArgs) -> Result<()> {
    let leads = ctx.store.list()?;
    let out = args
        .out
        .unwrap_or_else(|| PathBuf::from(export_filename(now_utc())));
    write_export(&out, &leads).with_context(|| format!("write csv file {}", out.display()))?;

    let report = ExportReport {
        format: "csv".to_string(),
        count: leads.len(),
        output: out.display().to_string(),
    };
    if ctx.json {
        print_json(&report)?;
    } else {
        println!("exported {} leads to {}", report.count, report.output);
    }
    Ok(())
}
