//! CLI utility functions
//!
//! Output helpers shared across commands.

use anyhow::{bail, Result};
use colored::Colorize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::config::LAREQA_DIR;
use crate::core::entry::QaEntry;
use crate::core::search::{has_relevant_answer, SearchResult};
use crate::core::store::KbStats;

pub const RULE_WIDTH: usize = 80;

pub fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

/// Section header framed by rules
pub fn print_header(title: &str) {
    println!("\n{}", rule());
    println!("{}", title.bold());
    println!("{}", rule());
}

/// Print ranked answers the way `ask` and the demo show them
pub fn print_answers(query: &str, results: &[SearchResult]) {
    println!("\n{}", rule());
    println!("Query: {}", query.bold());
    println!("{}", rule());

    if !has_relevant_answer(results) {
        println!("\nNo relevant answers found. Please try a different question.");
        return;
    }

    println!("\nTop {} relevant answers:\n", results.len());
    for (i, result) in results.iter().enumerate() {
        let entry = &result.entry;
        println!("\n{}", format!("--- Result {} ---", i + 1).cyan());
        println!("Language: {}", entry.language);
        println!("Similarity Score: {:.3}", result.similarity_score);
        println!("Question: {}", entry.question);
        println!("Answer: {}", entry.answer);
        println!("Category: {}", entry.category);
    }
}

#[derive(Tabled)]
struct CountRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Entries")]
    count: usize,
}

fn count_table(counts: &std::collections::BTreeMap<String, usize>) -> String {
    let rows = counts.iter().map(|(name, count)| CountRow {
        name: name.clone(),
        count: *count,
    });
    Table::new(rows).with(Style::rounded()).to_string()
}

/// Print total, language and category distributions
pub fn print_stats(stats: &KbStats) {
    print_header("KNOWLEDGE BASE STATISTICS");
    println!("\nTotal Entries: {}", stats.total_entries);

    println!("\nLanguage Distribution:");
    println!("{}", count_table(&stats.languages));

    println!("\nCategory Distribution:");
    println!("{}", count_table(&stats.categories));
    println!("{}\n", rule());
}

#[derive(Tabled)]
struct EntryRow {
    #[tabled(rename = "ID")]
    id: u64,
    #[tabled(rename = "Lang")]
    language: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Question")]
    question: String,
}

pub fn print_entry_table(entries: &[QaEntry]) {
    let rows = entries.iter().map(|e| EntryRow {
        id: e.id,
        language: e.language.clone(),
        category: e.category.clone(),
        question: truncate(&e.question, 60),
    });
    println!("{}", Table::new(rows).with(Style::rounded()));
}

pub fn print_entry(entry: &QaEntry) {
    println!("{}", "─".repeat(RULE_WIDTH));
    println!("ID:       {}", entry.id);
    println!("Language: {}", entry.language);
    println!("Category: {}", entry.category);
    println!("{}", "─".repeat(RULE_WIDTH));
    println!("Q: {}", entry.question.bold());
    println!("\nA: {}", entry.answer);
    println!("{}", "─".repeat(RULE_WIDTH));
}

/// Cut to `max` chars, appending "..." when shortened
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(max).collect();
    cut.push_str("...");
    cut
}

/// The data file, or an error telling the user how to get one
pub fn require_data_file(data_file: Option<&std::path::Path>) -> Result<std::path::PathBuf> {
    match data_file {
        Some(p) => Ok(p.to_path_buf()),
        None => bail!(
            "No knowledge base file. Run 'lareqa init' to create {}/, or pass --data <FILE>.",
            LAREQA_DIR
        ),
    }
}
