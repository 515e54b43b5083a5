use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cmd;

#[derive(Parser)]
#[command(name = "reviewgenie")]
#[command(version, about = "AI-powered performance review assistant")]
pub struct Cli {
    /// Path to reviewgenie.toml. Defaults to the working directory.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the scripted end-to-end review demo
    Demo {
        /// Skip all simulated delays
        #[arg(long)]
        fast: bool,
    },
    /// Drive the review workflow interactively
    Run {
        /// Stage to start from (overrides config)
        #[arg(long)]
        stage: Option<String>,
    },
    /// Create a review cycle and print its timeline
    Cycle {
        /// Cycle name
        #[arg(short, long, default_value = "Q4 2024 Performance Review")]
        name: String,

        /// Analysis period in days
        #[arg(long)]
        period_days: Option<u32>,

        /// Days between analysis end and review due date
        #[arg(long)]
        trigger_days: Option<u32>,
    },
    /// Render the demo review draft to a markdown file
    Export {
        /// Output path
        #[arg(short, long, default_value = "review.md")]
        output: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => reviewgenie::config::GenieConfig::load(path)?,
        None => reviewgenie::config::GenieConfig::load_or_default()?,
    };

    match &cli.command {
        Commands::Demo { fast } => cmd::cmd_demo(&config, *fast).await?,
        Commands::Run { stage } => cmd::cmd_run(&config, stage.as_deref()).await?,
        Commands::Cycle {
            name,
            period_days,
            trigger_days,
        } => cmd::cmd_cycle(&config, name, *period_days, *trigger_days)?,
        Commands::Export { output } => cmd::cmd_export(output)?,
    }

    Ok(())
}
