use anyhow::Result;

use conference_seeding::cli::Command;
use conference_seeding::{handle_analyze, handle_import, handle_serve, interpret};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(&command)
}

fn execute_command(command: &Command) -> Result<()> {
    match command {
        Command::Serve { port, database } => handle_serve(*port, database.as_deref()),
        Command::Import { snapshot, database } => handle_import(snapshot, database.as_deref()),
        Command::Analyze {
            sport,
            snapshot,
            database,
            top_seeds,
        } => handle_analyze(sport, snapshot.as_deref(), database.as_deref(), *top_seeds),
    }
}
