use crate::commands::Context;
use anyhow::{Context as _, Result};
use clap::Args;
use leadboard_config::parse_bind;
use std::sync::Arc;

#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Address to listen on, overriding the config file
    #[arg(long)]
    pub bind: Option<String>,
}

pub fn serve(ctx: &Context<'_>, args: ServeArgs) -> Result<()> {
    let addr = match args.bind {
        Some(raw) => parse_bind(&raw)?,
        None => ctx.config.server.bind,
    };
    let store = Arc::clone(ctx.store);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .with_context(|| "start async runtime")?;
    runtime
        .block_on(leadboard_server::serve(addr, store))
        .with_context(|| format!("serve on {addr}"))
}
