use anyhow::Result;
use leadboard_config::AppConfig;
use leadboard_store::LeadStore;
use serde::Serialize;
use std::io::{self, Write};
use std::sync::Arc;

pub mod csv;
pub mod interactions;
pub mod leads;
pub mod serve;

pub struct Context<'a> {
    pub store: &'a Arc<LeadStore>,
    pub json: bool,
    pub config: &'a AppConfig,
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}
