//! `lareqa save` and `lareqa load` commands
//!
//! # Usage
//! ```bash
//! lareqa save backup.json                # write the current knowledge base
//! lareqa load backup.json                # check a file and summarize it
//! lareqa load backup.json --replace      # make it the active knowledge base
//! ```

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Args;
use colored::Colorize;

use super::utils::require_data_file;
use super::CliContext;
use crate::core::error::QaError;
use crate::core::kb::{KnowledgeBase, KnowledgeBaseBackend};
use crate::core::store::KnowledgeStore;

#[derive(Args, Debug)]
pub struct SaveArgs {
    /// Target file (default: core.default_save_file)
    pub file: Option<PathBuf>,

    /// Save the knowledge base of a running web interface
    #[arg(long, env = "LAREQA_SERVER_URL")]
    pub server: Option<String>,
}

#[derive(Args, Debug)]
pub struct LoadArgs {
    /// File to load
    pub file: PathBuf,

    /// Overwrite the active knowledge base file with the loaded entries
    #[arg(long)]
    pub replace: bool,
}

pub async fn run_save(args: SaveArgs, ctx: &CliContext) -> Result<()> {
    let kb = KnowledgeBase::from_args(
        args.server.as_deref(),
        false,
        ctx.data_file.clone(),
        &ctx.config,
    )?;

    let entries = kb.entries(None, None).await?;
    let file = args
        .file
        .unwrap_or_else(|| ctx.config.core.default_save_file.clone());

    let store = KnowledgeStore::from_entries(entries);
    store.save(&file)?;

    println!(
        "\n{} Knowledge base saved to {} ({} entries)",
        "✓".green(),
        file.display(),
        store.len()
    );
    Ok(())
}

pub fn run_load(args: LoadArgs, ctx: &CliContext) -> Result<()> {
    let mut store = KnowledgeStore::new();

    let count = match store.load(&args.file) {
        Ok(count) => count,
        Err(QaError::NotFound(path)) => {
            bail!("{} File {} not found!", "✗".red(), path.display())
        }
        Err(e) => return Err(e.into()),
    };

    println!(
        "\n{} Knowledge base loaded from {} ({} entries)",
        "✓".green(),
        args.file.display(),
        count
    );

    if args.replace {
        let target = require_data_file(ctx.data_file.as_deref())?;
        store.save(&target)?;
        println!("   Active knowledge base replaced: {}", target.display());
    } else {
        let stats = store.statistics();
        let langs: Vec<String> = stats
            .languages
            .iter()
            .map(|(l, n)| format!("{} ({})", l, n))
            .collect();
        println!("   Languages: {}", langs.join(", "));
        println!("   Use --replace to make it the active knowledge base.");
    }

    Ok(())
}
