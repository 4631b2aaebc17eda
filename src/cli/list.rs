//! `lareqa list` and `lareqa show` commands
//!
//! Browse the knowledge base.
//!
//! # Usage
//! ```bash
//! lareqa list
//! lareqa list --language es
//! lareqa list --category Technology --format json
//! lareqa show 8
//! ```

use anyhow::Result;
use clap::Args;

use super::utils::{print_entry, print_entry_table};
use super::CliContext;
use crate::core::kb::{KnowledgeBase, KnowledgeBaseBackend};

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only entries in this language
    #[arg(short, long)]
    pub language: Option<String>,

    /// Only entries in this category
    #[arg(short = 'C', long)]
    pub category: Option<String>,

    /// Output format (pretty, json)
    #[arg(short, long, default_value = "pretty")]
    pub format: String,

    /// List entries of a running web interface
    #[arg(long, env = "LAREQA_SERVER_URL")]
    pub server: Option<String>,
}

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Entry id
    pub id: u64,

    /// Output format (pretty, json)
    #[arg(short, long, default_value = "pretty")]
    pub format: String,

    /// Look the entry up on a running web interface
    #[arg(long, env = "LAREQA_SERVER_URL")]
    pub server: Option<String>,
}

pub async fn run_list(args: ListArgs, ctx: &CliContext) -> Result<()> {
    let kb = KnowledgeBase::from_args(
        args.server.as_deref(),
        false,
        ctx.data_file.clone(),
        &ctx.config,
    )?;
    let entries = kb
        .entries(args.language.as_deref(), args.category.as_deref())
        .await?;

    if args.format == "json" {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    if entries.is_empty() {
        println!("No entries found.");
        return Ok(());
    }

    print_entry_table(&entries);
    println!("\n{} entr{}", entries.len(), if entries.len() == 1 { "y" } else { "ies" });

    Ok(())
}

pub async fn run_show(args: ShowArgs, ctx: &CliContext) -> Result<()> {
    let kb = KnowledgeBase::from_args(
        args.server.as_deref(),
        false,
        ctx.data_file.clone(),
        &ctx.config,
    )?;

    let entry = kb
        .entries(None, None)
        .await?
        .into_iter()
        .find(|e| e.id == args.id)
        .ok_or_else(|| anyhow::anyhow!("Entry not found: {}", args.id))?;

    match args.format.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&entry)?),
        _ => print_entry(&entry),
    }

    Ok(())
}
