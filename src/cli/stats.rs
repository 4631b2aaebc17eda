//! Stats command - Show knowledge base statistics

use clap::Args;

use super::utils::print_stats;
use super::CliContext;
use crate::core::kb::{KnowledgeBase, KnowledgeBaseBackend};

/// Stats command arguments
#[derive(Args, Debug)]
pub struct StatsArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Read statistics from a running web interface
    #[arg(long, env = "LAREQA_SERVER_URL")]
    pub server: Option<String>,
}

/// Execute stats command
pub async fn execute(args: StatsArgs, ctx: &CliContext) -> anyhow::Result<()> {
    let kb = KnowledgeBase::from_args(
        args.server.as_deref(),
        false,
        ctx.data_file.clone(),
        &ctx.config,
    )?;
    let stats = kb.stats().await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    print_stats(&stats);

    match (&kb, &ctx.data_file) {
        (KnowledgeBase::Local(_), Some(path)) => {
            println!("📁 Knowledge base: {}", path.display())
        }
        (KnowledgeBase::Local(_), None) => println!("📁 Knowledge base: built-in sample data"),
        (KnowledgeBase::Remote(remote), _) => {
            let health = remote.client().health().await?;
            println!(
                "🌐 Server: {} (v{}, {}, up {}s)",
                remote.name(),
                health.version,
                health.status,
                health.uptime_secs
            );
        }
    }

    Ok(())
}
