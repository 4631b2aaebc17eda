//! `lareqa init` command
//!
//! Initializes a new lareqa repository.
//!
//! # Usage
//! ```bash
//! lareqa init                    # Initialize in current directory
//! lareqa init /path/to/project   # Initialize in specific path
//! lareqa init --global           # Initialize global ~/.lareqa
//! lareqa init --empty            # Start without the sample entries
//! ```

use anyhow::{bail, Result};
use clap::Args;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{Config, DATA_FILE, LAREQA_DIR};
use crate::core::store::KnowledgeStore;

#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path to initialize (default: current directory)
    pub path: Option<PathBuf>,

    /// Initialize global config (~/.lareqa)
    #[arg(long)]
    pub global: bool,

    /// Force re-initialization (overwrites config and knowledge base)
    #[arg(short, long)]
    pub force: bool,

    /// Create an empty knowledge base instead of the samples
    #[arg(long)]
    pub empty: bool,
}

pub fn run(args: InitArgs) -> Result<()> {
    // 1. Determine target path
    let base_path = if args.global {
        directories::UserDirs::new()
            .map(|u| u.home_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from("."))
    } else {
        args.path.clone().unwrap_or_else(|| PathBuf::from("."))
    };

    let lareqa_dir = base_path.join(LAREQA_DIR);

    // 2. Check if already initialized
    if is_lareqa_repo(&base_path) && !args.force {
        bail!(
            "Directory {} is already a lareqa repository. Use --force to reinitialize.",
            base_path.display()
        );
    }

    println!("🚀 Initializing lareqa in: {}", base_path.display());

    // 3. Create .lareqa/ and the config file
    fs::create_dir_all(&lareqa_dir)?;
    let config_path = lareqa_dir.join("config.toml");
    Config::default().save_to(&config_path)?;

    // 4. Seed the knowledge base
    let data_path = lareqa_dir.join(DATA_FILE);
    let store = if args.empty {
        KnowledgeStore::new()
    } else {
        KnowledgeStore::with_sample_data()
    };
    store.save(&data_path)?;

    println!("\n✅ Initialized lareqa repository");
    println!("   Config: {}", config_path.display());
    println!("   Knowledge base: {} ({} entries)", data_path.display(), store.len());
    println!("\nNext steps:");
    println!("  lareqa ask \"What is artificial intelligence?\"");
    println!("  lareqa add -l en -q \"Your question\" -a \"Your answer\"");
    println!("  lareqa serve");

    Ok(())
}

/// Check if a directory is already a lareqa repository
fn is_lareqa_repo(path: &Path) -> bool {
    path.join(LAREQA_DIR).exists()
}
