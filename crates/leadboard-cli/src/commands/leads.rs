use crate::commands::{print_json, Context};
use crate::error::{invalid_input, not_found};
use crate::util::{parse_lead_id, parse_status, truncate};
use anyhow::Result;
use clap::Args;
use leadboard_core::time::{format_local_datetime, now_utc};
use leadboard_core::{LeadFilter, LeadNew, LeadStatus, LeadUpdate};

#[derive(Debug, Args)]
pub struct ListArgs {
    #[arg(long)]
    pub status: Option<String>,
    /// Case-insensitive match on name, email or phone
    #[arg(long, short)]
    pub query: Option<String>,
}

#[derive(Debug, Args)]
pub struct ShowArgs {
    pub id: String,
}

#[derive(Debug, Args)]
pub struct AddLeadArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub phone: String,
    #[arg(long)]
    pub status: Option<String>,
    #[arg(long)]
    pub notes: Option<String>,
}

#[derive(Debug, Args)]
pub struct EditLeadArgs {
    pub id: String,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
    #[arg(long)]
    pub status: Option<String>,
    #[arg(long)]
    pub notes: Option<String>,
}

#[derive(Debug, Args)]
pub struct DeleteArgs {
    pub id: String,
}

pub fn list_leads(ctx: &Context<'_>, args: ListArgs) -> Result<()> {
    let mut filter = LeadFilter::new();
    if let Some(raw) = args.status {
        filter = filter.with_status(parse_status(&raw)?);
    }
    if let Some(text) = args.query {
        filter = filter.with_query(&text);
    }
    let leads = ctx.store.search(&filter)?;

    if ctx.json {
        return print_json(&leads);
    }

    if leads.is_empty() {
        println!("no leads");
        return Ok(());
    }
    for lead in &leads {
        println!(
            "{}  {:<12} {:<24} {}",
            lead.id,
            lead.status.label(),
            truncate(&lead.name, 24),
            lead.email
        );
    }
    Ok(())
}

pub fn show_lead(ctx: &Context<'_>, args: ShowArgs) -> Result<()> {
    let id = parse_lead_id(&args.id)?;
    let lead = ctx
        .store
        .get(id)?
        .ok_or_else(|| not_found("lead not found"))?;

    if ctx.json {
        return print_json(&lead);
    }

    println!("{} {}", lead.id, lead.name);
    println!("status: {}", lead.status.label());
    println!("email: {}", lead.email);
    println!("phone: {}", lead.phone);
    println!("registered: {}", format_local_datetime(lead.registered_at));
    if !lead.notes.is_empty() {
        println!("notes: {}", lead.notes);
    }
    if lead.interaction_history.is_empty() {
        println!("interactions: none");
    } else {
        println!("interactions:");
        // newest first
        for interaction in lead.interaction_history.iter().rev() {
            println!(
                "  {} [{}] {}",
                format_local_datetime(interaction.timestamp),
                interaction.kind,
                interaction.description
            );
        }
    }
    Ok(())
}

pub fn add_lead(ctx: &Context<'_>, args: AddLeadArgs) -> Result<()> {
    let status = match args.status {
        Some(raw) => parse_status(&raw)?,
        None => LeadStatus::New,
    };
    let lead = ctx.store.create(
        now_utc(),
        LeadNew {
            name: args.name,
            email: args.email,
            phone: args.phone,
            status,
            notes: args.notes.unwrap_or_default(),
            interaction_history: Vec::new(),
        },
    )?;

    if ctx.json {
        print_json(&lead)?;
    } else {
        println!("created {} {}", lead.id, lead.name);
    }
    Ok(())
}

pub fn edit_lead(ctx: &Context<'_>, args: EditLeadArgs) -> Result<()> {
    let id = parse_lead_id(&args.id)?;
    let update = LeadUpdate {
        name: args.name,
        email: args.email,
        phone: args.phone,
        status: match args.status {
            Some(raw) => Some(parse_status(&raw)?),
            None => None,
        },
        notes: args.notes,
        interaction_history: None,
    };

    if update.is_empty() {
        return Err(invalid_input("no updates provided"));
    }

    let lead = ctx
        .store
        .update(id, update)?
        .ok_or_else(|| not_found("lead not found"))?;
    if ctx.json {
        print_json(&lead)?;
    } else {
        println!("updated {} {}", lead.id, lead.name);
    }
    Ok(())
}

pub fn delete_lead(ctx: &Context<'_>, args: DeleteArgs) -> Result<()> {
    let id = parse_lead_id(&args.id)?;
    if !ctx.store.delete(id)? {
        return Err(not_found("lead not found"));
    }
    if ctx.json {
        print_json(&serde_json::json!({ "success": true }))?;
    } else {
        println!("deleted {}", id);
    }
    Ok(())
}
