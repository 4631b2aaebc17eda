//! CLI module - Command definitions and handlers

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::Config;

pub mod add;
pub mod ask;
pub mod config;
pub mod demo;
pub mod init;
pub mod interactive;
pub mod list;
pub mod persist;
pub mod serve;
pub mod stats;
pub mod utils;

/// lareqa - Cross-lingual question answering
///
/// Ask in any language, get ranked answers from a small multilingual knowledge base.
#[derive(Parser, Debug)]
#[command(name = "lareqa")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file path
    #[arg(short, long, global = true, env = "LAREQA_CONFIG")]
    pub config: Option<PathBuf>,

    /// Knowledge base JSON file (overrides config and .lareqa/)
    #[arg(short, long, global = true, env = "LAREQA_DATA")]
    pub data: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new lareqa repository
    Init(init::InitArgs),

    /// Ask a question
    Ask(ask::AskArgs),

    /// Add a new Q&A pair
    Add(add::AddArgs),

    /// Show knowledge base statistics
    Stats(stats::StatsArgs),

    /// List Q&A pairs
    List(list::ListArgs),

    /// Show a Q&A pair by id
    Show(list::ShowArgs),

    /// Save the knowledge base to a JSON file
    Save(persist::SaveArgs),

    /// Load a knowledge base from a JSON file
    Load(persist::LoadArgs),

    /// Run the scripted demonstration
    Demo(demo::DemoArgs),

    /// Interactive question prompt
    Interactive(interactive::InteractiveArgs),

    /// Start the web interface
    Serve(serve::ServeArgs),

    /// Get or set configuration
    Config(config::ConfigArgs),
}

/// Settings shared by every command
#[derive(Debug, Clone)]
pub struct CliContext {
    pub config: Config,
    /// `--data`, falling back to the config's data file
    pub data_file: Option<PathBuf>,
}

impl CliContext {
    /// Load config (explicit path or default locations) and resolve the data file
    pub fn load(config_path: Option<&std::path::Path>, data: Option<PathBuf>) -> Result<Self> {
        let config = Config::load_with(config_path)?;
        let data_file = data.or_else(|| config.data_file());
        Ok(Self { config, data_file })
    }
}
