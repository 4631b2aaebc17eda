//! `lareqa interactive` command
//!
//! Prompt loop over an in-memory copy of the knowledge base. Changes stay
//! in memory until `save`.

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Args;
use colored::Colorize;
use console::{style, Term};
use dialoguer::{theme::ColorfulTheme, Input};

use super::utils::{print_answers, print_stats, rule};
use super::CliContext;
use crate::core::entry::NewEntry;
use crate::core::store::KnowledgeStore;

#[derive(Args, Debug)]
pub struct InteractiveArgs {
    /// Start from the built-in samples even if a data file exists
    #[arg(long)]
    pub sample: bool,
}

/// What a line typed at the prompt asks for
#[derive(Debug, PartialEq, Eq)]
pub enum Command<'a> {
    Skip,
    Quit,
    Stats,
    Save,
    Add,
    Ask(&'a str),
}

impl<'a> Command<'a> {
    pub fn parse(input: &'a str) -> Self {
        let input = input.trim();
        if input.is_empty() {
            return Command::Skip;
        }

        match input.to_lowercase().as_str() {
            "quit" | "exit" => Command::Quit,
            "stats" => Command::Stats,
            "save" => Command::Save,
            "add" => Command::Add,
            _ => Command::Ask(input),
        }
    }
}

pub fn run(args: InteractiveArgs, ctx: &CliContext) -> Result<()> {
    if !Term::stdout().features().is_attended() {
        bail!("Interactive mode needs a terminal. Use 'lareqa ask' for scripted queries.");
    }

    let mut store = match (&ctx.data_file, args.sample) {
        (Some(path), false) => KnowledgeStore::open_or_seed(path)?,
        _ => KnowledgeStore::with_sample_data(),
    };

    print_stats(&store.statistics());
    print_banner();

    let theme = ColorfulTheme::default();
    loop {
        let line = match Input::<String>::with_theme(&theme)
            .with_prompt("Your question")
            .allow_empty(true)
            .interact_text()
        {
            Ok(line) => line,
            Err(_) => {
                println!("\n\nExiting...");
                break;
            }
        };

        let result = match Command::parse(&line) {
            Command::Skip => Ok(()),
            Command::Quit => {
                println!("\nThank you for using the Multilingual QA System!");
                break;
            }
            Command::Stats => {
                print_stats(&store.statistics());
                Ok(())
            }
            Command::Save => save(&store, &theme, ctx),
            Command::Add => add(&mut store, &theme),
            Command::Ask(question) => {
                let results = store.search_answers(question, ctx.config.search.cli_top_k);
                print_answers(question, &results);
                Ok(())
            }
        };

        if let Err(e) = result {
            println!("\n{} {}", "Error:".red(), e);
        }
    }

    Ok(())
}

fn print_banner() {
    println!("\n{}", rule());
    println!("{}", style("INTERACTIVE MODE - Multilingual Question Answering").bold().cyan());
    println!("{}", rule());
    println!("\nYou can now ask questions in any language!");
    println!("Type 'stats' to view statistics");
    println!("Type 'add' to add a new Q&A pair");
    println!("Type 'save' to save knowledge base");
    println!("Type 'quit' or 'exit' to exit");
    println!("{}\n", rule());
}

fn save(store: &KnowledgeStore, theme: &ColorfulTheme, ctx: &CliContext) -> Result<()> {
    let default = ctx.config.core.default_save_file.display().to_string();
    let filename: String = Input::with_theme(theme)
        .with_prompt("Enter filename")
        .default(default)
        .interact_text()?;

    let path = PathBuf::from(filename.trim());
    store.save(&path)?;
    println!("\n{} Knowledge base saved to {}", "✓".green(), path.display());
    Ok(())
}

fn add(store: &mut KnowledgeStore, theme: &ColorfulTheme) -> Result<()> {
    println!("\nAdd new Q&A pair:");
    let language: String = Input::with_theme(theme)
        .with_prompt("Language code (e.g., en, es, fr)")
        .interact_text()?;
    let question: String = Input::with_theme(theme)
        .with_prompt("Question")
        .interact_text()?;
    let answer: String = Input::with_theme(theme)
        .with_prompt("Answer")
        .interact_text()?;
    let category: String = Input::with_theme(theme)
        .with_prompt("Category")
        .default("General".to_string())
        .interact_text()?;

    let entry = store.add(NewEntry::new(language, question, answer).with_category(category))?;
    println!(
        "\n{} Successfully added new Q&A pair (ID: {}) to knowledge base!",
        "✓".green(),
        entry.id
    );
    Ok(())
}
