//! `lareqa add` command
//!
//! Adds a Q&A pair and writes the knowledge base file.
//!
//! # Usage
//! ```bash
//! lareqa add -l en -q "What is computer vision?" -a "Computer vision is..."
//! lareqa add -l pt -q "O que é IA?" -a "..." --category AI
//! lareqa add -l en -q "..." -a "..." --server http://localhost:5000
//! ```

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use tracing::warn;

use super::utils::require_data_file;
use super::CliContext;
use crate::core::entry::{is_supported_language, NewEntry};
use crate::core::kb::{KnowledgeBase, KnowledgeBaseBackend, LocalKb};

#[derive(Args, Debug)]
pub struct AddArgs {
    /// Language code (e.g., en, es, fr)
    #[arg(short, long)]
    pub language: String,

    /// Question text
    #[arg(short, long)]
    pub question: String,

    /// Answer text
    #[arg(short, long)]
    pub answer: String,

    /// Category
    #[arg(short = 'C', long, default_value = "General")]
    pub category: String,

    /// Reject languages outside languages.supported
    #[arg(long)]
    pub strict: bool,

    /// Add through a running web interface
    #[arg(long, env = "LAREQA_SERVER_URL")]
    pub server: Option<String>,

    /// Use the server configured in remote.url
    #[arg(long)]
    pub remote: bool,
}

pub async fn run(args: AddArgs, ctx: &CliContext) -> Result<()> {
    let supported = &ctx.config.languages.supported;
    let new = NewEntry::new(&args.language, &args.question, &args.answer)
        .with_category(&args.category);

    let new = if args.strict {
        new.validate_for(supported)?
    } else {
        let new = new.validate()?;
        if !is_supported_language(&new.language, supported) {
            warn!(language = %new.language, "language not in supported list");
            eprintln!(
                "{} '{}' is not a supported language ({}); adding anyway",
                "warning:".yellow().bold(),
                new.language,
                supported.join(", ")
            );
        }
        new
    };

    let kb = if args.server.is_some() || args.remote {
        KnowledgeBase::from_args(args.server.as_deref(), args.remote, None, &ctx.config)?
    } else {
        let path = require_data_file(ctx.data_file.as_deref())?;
        KnowledgeBase::Local(LocalKb::open(path)?)
    };

    let entry = kb.add_entry(new).await?;

    println!(
        "\n{} Successfully added new Q&A pair (ID: {}) to knowledge base!",
        "✓".green(),
        entry.id
    );
    println!("   Language: {}", entry.language);
    println!("   Question: {}", entry.question);
    match &kb {
        KnowledgeBase::Local(local) => {
            if let Some(path) = local.path() {
                println!("   Saved to: {}", path.display());
            }
        }
        KnowledgeBase::Remote(remote) => println!("   Server:   {}", remote.name()),
    }

    Ok(())
}
