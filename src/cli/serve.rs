//! Serve command - Start the web interface

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use super::CliContext;
use crate::core::store::KnowledgeStore;
use crate::web::{self, AppState};

/// Start the HTTP interface
#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Bind address (default: server.host)
    #[arg(long)]
    pub host: Option<String>,

    /// HTTP port (default: server.port)
    #[arg(short, long)]
    pub port: Option<u16>,

    /// File rewritten after each add (default: the data file, else server.save_file)
    #[arg(long)]
    pub save_file: Option<PathBuf>,
}

pub async fn run(args: ServeArgs, ctx: &CliContext) -> Result<()> {
    let config = &ctx.config;

    let store = match &ctx.data_file {
        Some(path) => KnowledgeStore::open_or_seed(path)?,
        None => KnowledgeStore::with_sample_data(),
    };

    let save_file = args
        .save_file
        .or_else(|| ctx.data_file.clone())
        .unwrap_or_else(|| config.server.save_file.clone());

    let host = args.host.unwrap_or_else(|| config.server.host.clone());
    let port = args.port.unwrap_or(config.server.port);

    eprintln!("🌐 Starting web interface ({} entries)", store.len());
    eprintln!("📍 Access the interface at: http://localhost:{}", port);
    eprintln!("💾 New entries are saved to: {}", save_file.display());
    eprintln!("⚡ Press Ctrl+C to stop the server");

    let state = AppState::new(store, config, save_file);
    web::serve(state, &host, port).await
}
