//! Roster CLI
//!
//! Command-line interface for the Roster person record search service.

use clap::Parser;
use roster_cli::{Cli, Commands};
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let filter = EnvFilter::builder()
        .with_default_directive(log_level.into())
        .from_env_lossy();

    // Logs go to stderr so JSON output on stdout stays clean.
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    // Execute command
    match cli.command {
        Commands::Search(cmd) => {
            cmd.execute()?;
        }
        Commands::Serve(cmd) => {
            cmd.execute().await?;
        }
        Commands::Find(cmd) => {
            cmd.execute().await?;
        }
    }

    Ok(())
}
