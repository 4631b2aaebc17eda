//! `lareqa ask` command
//!
//! Ranks the knowledge base against a question.
//!
//! # Usage
//! ```bash
//! lareqa ask "What is artificial intelligence?"
//! lareqa ask "aprendizaje automático" --top-k 5
//! lareqa ask "neural network" --format json
//! lareqa ask "datos ciencia" --server http://localhost:5000
//! ```

use anyhow::Result;
use clap::Args;

use super::utils::print_answers;
use super::CliContext;
use crate::core::kb::{KnowledgeBase, KnowledgeBaseBackend};
use crate::core::search::SearchResult;

#[derive(Args, Debug)]
pub struct AskArgs {
    /// The question, in any language
    pub question: String,

    /// Number of answers to return (default: search.cli_top_k)
    #[arg(short = 'k', long)]
    pub top_k: Option<usize>,

    /// Output format (pretty, json, compact)
    #[arg(short, long, default_value = "pretty")]
    pub format: String,

    /// Ask a running web interface instead of the local knowledge base
    #[arg(long, env = "LAREQA_SERVER_URL")]
    pub server: Option<String>,

    /// Use the server configured in remote.url
    #[arg(long)]
    pub remote: bool,
}

pub async fn run(args: AskArgs, ctx: &CliContext) -> Result<()> {
    let question = args.question.trim();
    if question.is_empty() {
        anyhow::bail!("Please enter a question");
    }

    let kb = KnowledgeBase::from_args(
        args.server.as_deref(),
        args.remote,
        ctx.data_file.clone(),
        &ctx.config,
    )?;

    let top_k = args.top_k.unwrap_or(ctx.config.search.cli_top_k);
    let results = kb.search(question, top_k).await?;

    match args.format.as_str() {
        "json" => print_json(&results)?,
        "compact" => print_compact(&results),
        _ => print_answers(question, &results),
    }

    Ok(())
}

fn print_compact(results: &[SearchResult]) {
    for r in results {
        println!(
            "{}\t{}\t{:.3}\t{}",
            r.entry.id, r.entry.language, r.similarity_score, r.entry.question
        );
    }
}

fn print_json(results: &[SearchResult]) -> Result<()> {
    let json = serde_json::to_string_pretty(results)?;
    println!("{}", json);
    Ok(())
}
