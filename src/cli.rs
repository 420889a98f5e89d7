use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Conference standings, tiebreaks and seeding scenarios")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Start the HTTP server
    Serve {
        /// Port number (optional, defaults to 3000)
        #[arg(short, long, default_value_t = 3000)]
        port: u16,
        /// SQLite database path (overrides DATABASE_PATH)
        #[arg(short, long)]
        database: Option<String>,
    },
    /// Load a season snapshot JSON file into the store, replacing that sport
    Import {
        /// Snapshot file
        snapshot: PathBuf,
        #[arg(short, long)]
        database: Option<String>,
    },
    /// Print the season report for one sport as JSON
    Analyze {
        /// Sport key, e.g. womens-tennis
        sport: String,
        /// Read from a snapshot file instead of the store
        #[arg(short, long, conflicts_with = "database")]
        snapshot: Option<PathBuf>,
        #[arg(short, long)]
        database: Option<String>,
        /// Seed line for high-significance key matches
        #[arg(short, long)]
        top_seeds: Option<usize>,
    },
}
