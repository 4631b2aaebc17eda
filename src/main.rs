//! lareqa CLI - Entry point
//!
//! Usage: lareqa <command> [options]

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use lareqa::cli::{Cli, CliContext, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize tracing; RUST_LOG wins over --verbose
    let default_level = if cli.verbose { "lareqa=debug,tower_http=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let command = match cli.command {
        // Commands that manage config themselves
        Commands::Init(args) => return lareqa::cli::init::run(args),
        Commands::Config(args) => {
            return lareqa::cli::config::run(args, cli.config.as_deref())
        }
        command => command,
    };

    let ctx = CliContext::load(cli.config.as_deref(), cli.data)?;
    tracing::debug!(data_file = ?ctx.data_file, "resolved knowledge base");

    match command {
        Commands::Ask(args) => lareqa::cli::ask::run(args, &ctx).await,
        Commands::Add(args) => lareqa::cli::add::run(args, &ctx).await,
        Commands::Stats(args) => lareqa::cli::stats::execute(args, &ctx).await,
        Commands::List(args) => lareqa::cli::list::run_list(args, &ctx).await,
        Commands::Show(args) => lareqa::cli::list::run_show(args, &ctx).await,
        Commands::Save(args) => lareqa::cli::persist::run_save(args, &ctx).await,
        Commands::Load(args) => lareqa::cli::persist::run_load(args, &ctx),
        Commands::Demo(args) => lareqa::cli::demo::run(args, &ctx),
        Commands::Interactive(args) => lareqa::cli::interactive::run(args, &ctx),
        Commands::Serve(args) => lareqa::cli::serve::run(args, &ctx).await,
        Commands::Init(_) | Commands::Config(_) => Ok(()),
    }
}
