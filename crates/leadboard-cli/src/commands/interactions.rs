use crate::commands::{print_json, Context};
use crate::error::not_found;
use crate::util::{parse_interaction_kind, parse_lead_id};
use anyhow::Result;
use clap::Args;
use leadboard_core::time::{now_utc, parse_local_timestamp};
use leadboard_core::InteractionNew;

#[derive(Debug, Args)]
pub struct AddInteractionArgs {
    pub id: String,
    #[arg(long, default_value = "other")]
    pub kind: String,
    #[arg(long)]
    pub description: String,
    /// Local time, YYYY-MM-DD or YYYY-MM-DD HH:MM (defaults to now)
    #[arg(long)]
    pub when: Option<String>,
}

pub fn add_interaction(ctx: &Context<'_>, args: AddInteractionArgs) -> Result<()> {
    let id = parse_lead_id(&args.id)?;
    let kind = parse_interaction_kind(&args.kind)?;
    let timestamp = match args.when {
        Some(value) => Some(parse_local_timestamp(&value)?),
        None => None,
    };

    let lead = ctx
        .store
        .add_interaction(
            now_utc(),
            id,
            InteractionNew {
                timestamp,
                kind,
                description: args.description,
            },
        )?
        .ok_or_else(|| not_found("lead not found"))?;

    if ctx.json {
        print_json(&lead)?;
    } else {
        println!(
            "logged {} for {} ({} total)",
            kind,
            lead.name,
            lead.interaction_history.len()
        );
    }
    Ok(())
}
