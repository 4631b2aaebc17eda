//! `lareqa demo` command
//!
//! Scripted walkthrough on a fresh copy of the sample data: statistics,
//! a handful of cross-lingual queries, adding an entry, saving.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use super::utils::{print_answers, print_header, print_stats, rule};
use super::CliContext;
use crate::core::entry::NewEntry;
use crate::core::store::KnowledgeStore;

/// Queries mixing English, Spanish and French vocabulary
pub const DEMO_QUESTIONS: &[&str] = &[
    "What is artificial intelligence?",
    "machine learning benefits",
    "neural network",
    "datos ciencia",
    "apprentissage",
];

#[derive(Args, Debug)]
pub struct DemoArgs {
    /// Where to save the resulting knowledge base (default: core.default_save_file)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Skip the save step
    #[arg(long)]
    pub no_save: bool,
}

pub fn run(args: DemoArgs, ctx: &CliContext) -> Result<()> {
    println!("\n{}", rule());
    println!("{}", "MULTILINGUAL QUESTION ANSWERING SYSTEM".bold());
    println!("{}", rule());

    let mut store = KnowledgeStore::with_sample_data();
    let top_k = ctx.config.search.cli_top_k;

    print_stats(&store.statistics());

    print_header("DEMONSTRATION: Cross-lingual Question Answering");
    for question in DEMO_QUESTIONS {
        print_answers(question, &store.search_answers(question, top_k));
    }

    print_header("DEMONSTRATION: Adding New Knowledge");
    let entry = store.add(
        NewEntry::new(
            "en",
            "What is computer vision?",
            "Computer vision is a field of artificial intelligence that trains computers to interpret and understand the visual world. Using digital images and deep learning models, machines can accurately identify and classify objects.",
        )
        .with_category("Technology"),
    )?;
    println!(
        "\n{} Successfully added new Q&A pair (ID: {}) to knowledge base!",
        "✓".green(),
        entry.id
    );

    let question = "computer vision";
    print_answers(question, &store.search_answers(question, top_k));

    if !args.no_save {
        let output = args
            .output
            .unwrap_or_else(|| ctx.config.core.default_save_file.clone());
        print_header("SAVING KNOWLEDGE BASE");
        store.save(&output)?;
        println!("\n{} Knowledge base saved to {}", "✓".green(), output.display());
    }

    print_header("DEMONSTRATION COMPLETE");
    Ok(())
}
