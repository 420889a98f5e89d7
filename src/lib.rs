pub mod api;
pub mod cli;
pub mod config;
pub mod database;
pub mod domain;
pub mod services;
pub mod standings;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use std::path::Path;

use crate::cli::Command;
use crate::config::settings::AppConfig;
use crate::services::analysis::AnalysisService;
use crate::services::import::ImportService;
use crate::services::server::ServerService;

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_serve(port: u16, database: Option<&str>) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::new().with_overrides(database, None);
        let service = ServerService::new(port, config);
        service.run().await
    })
}

pub fn handle_import(snapshot: &Path, database: Option<&str>) -> Result<()> {
    let config = AppConfig::new().with_overrides(database, None);
    let service = ImportService::new(config);
    service.run(snapshot).map(|_| ())
}

pub fn handle_analyze(
    sport: &str,
    snapshot: Option<&Path>,
    database: Option<&str>,
    top_seeds: Option<usize>,
) -> Result<()> {
    let config = AppConfig::new().with_overrides(database, top_seeds);
    let service = AnalysisService::new(config);
    service.run(sport, snapshot)
}
