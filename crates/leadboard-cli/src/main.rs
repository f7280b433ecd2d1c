mod commands;
mod error;
mod util;

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::debug;

use crate::commands::{csv, interactions, leads, serve, Context};
use crate::error::{exit_code_for, report_error};
use leadboard_config::{self as config, AppConfig, FaultPolicyKind, StorageBackend};
use leadboard_store::{paths, FaultPolicy, LeadStore, StoreOptions};

#[derive(Debug, Parser)]
#[command(name = "leadboard", version, about = "leadboard CLI")]
struct Cli {
    #[arg(long, global = true)]
    db_path: Option<PathBuf>,
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Keep leads in process memory instead of the database
    #[arg(long, global = true, conflicts_with = "db_path")]
    memory: bool,
    #[arg(long, global = true)]
    json: bool,
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    List(leads::ListArgs),
    Show(leads::ShowArgs),
    #[command(name = "add-lead")]
    AddLead(leads::AddLeadArgs),
    #[command(name = "edit-lead")]
    EditLead(leads::EditLeadArgs),
    Delete(leads::DeleteArgs),
    #[command(name = "add-interaction")]
    AddInteraction(interactions::AddInteractionArgs),
    #[command(subcommand)]
    Import(csv::ImportCommand),
    #[command(subcommand)]
    Export(csv::ExportCommand),
    /// Run the HTTP API
    Serve(serve::ServeArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let verbose = cli.verbose;
    let default_level = match (&cli.command, verbose) {
        (_, true) => "debug",
        (Command::Serve(_), false) => "info",
        _ => "warn",
    };
    init_logging(default_level);
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err, verbose);
            exit_code_for(&err)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let Cli {
        db_path,
        config: config_path,
        memory,
        json,
        verbose,
        command,
    } = cli;

    let app_config = config::load(config_path.clone()).with_context(|| "load config")?;
    if verbose {
        match config::resolve_config_path(config_path) {
            Ok(path) => {
                if path.exists() {
                    debug!(path = %path.display(), "config resolved");
                } else {
                    debug!(path = %path.display(), "config missing, using defaults");
                }
            }
            Err(err) => {
                debug!(error = %err, "config unavailable");
            }
        }
    }

    let store = Arc::new(open_store(&app_config, db_path, memory)?);
    let ctx = Context {
        store: &store,
        json,
        config: &app_config,
    };

    match command {
        Command::List(args) => leads::list_leads(&ctx, args),
        Command::Show(args) => leads::show_lead(&ctx, args),
        Command::AddLead(args) => leads::add_lead(&ctx, args),
        Command::EditLead(args) => leads::edit_lead(&ctx, args),
        Command::Delete(args) => leads::delete_lead(&ctx, args),
        Command::AddInteraction(args) => interactions::add_interaction(&ctx, args),
        Command::Import(cmd) => match cmd {
            csv::ImportCommand::Csv(args) => csv::import_csv(&ctx, args),
        },
        Command::Export(cmd) => match cmd {
            csv::ExportCommand::Csv(args) => csv::export_csv(&ctx, args),
        },
        Command::Serve(args) => serve::serve(&ctx, args),
    }
}

fn open_store(app_config: &AppConfig, db_path: Option<PathBuf>, memory: bool) -> Result<LeadStore> {
    let storage = &app_config.storage;
    let options = StoreOptions {
        seed: storage.seed_sample_data,
        faults: match storage.fault_policy {
            FaultPolicyKind::Strict => FaultPolicy::Strict,
            FaultPolicyKind::Lenient => FaultPolicy::Lenient,
        },
    };

    let backend = if memory {
        StorageBackend::Memory
    } else if db_path.is_some() {
        StorageBackend::Sqlite
    } else {
        storage.backend
    };

    match backend {
        StorageBackend::Memory => {
            debug!("using in-memory lead storage");
            Ok(LeadStore::new(
                leadboard_store::backend::MemoryBackend::new(),
                options,
            ))
        }
        StorageBackend::Sqlite => {
            let db_path = paths::resolve_db_path(db_path.or_else(|| storage.path.clone()))
                .with_context(|| "resolve database path")?;
            debug!(path = %db_path.display(), "database path resolved");
            LeadStore::open(&db_path, options)
                .with_context(|| format!("open database {}", db_path.display()))
        }
    }
}

fn init_logging(default_level: &str) {
    use tracing_subscriber::{fmt, EnvFilter};
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
