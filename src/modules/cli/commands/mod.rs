//! CLI commands

mod find;
mod search;
mod serve;

pub use find::FindCommand;
pub use search::SearchCommand;
pub use serve::ServeCommand;

use clap::{Parser, Subcommand};

/// Roster - in-memory person record search
#[derive(Parser, Debug)]
#[command(name = "roster")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search a dataset file and print matching records as JSON
    Search(SearchCommand),

    /// Start the search server
    Serve(ServeCommand),

    /// Query a running search server
    Find(FindCommand),
}
