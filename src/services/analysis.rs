use anyhow::{anyhow, bail, Context, Result};
use log::info;
use std::path::Path;

use crate::api::models::SeasonReport;
use crate::config::settings::AppConfig;
use crate::database;
use crate::domain::SeasonSnapshot;
use crate::standings;

pub struct AnalysisService {
    config: AppConfig,
}

impl AnalysisService {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Prints the season report for `sport` as JSON on stdout
    pub fn run(&self, sport: &str, snapshot_path: Option<&Path>) -> Result<()> {
        let report = self.report(sport, snapshot_path)?;
        let json = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
        println!("{}", json);
        Ok(())
    }

    pub fn report(&self, sport: &str, snapshot_path: Option<&Path>) -> Result<SeasonReport> {
        let snapshot = match snapshot_path {
            Some(path) => Self::snapshot_from_file(sport, path)?,
            None => self.snapshot_from_store(sport)?,
        };

        let analysis = standings::analyze(&snapshot, &self.config.seeding);
        info!(
            "Analysis of {}: {} teams ranked, {} key matches, {} rejected records",
            sport,
            analysis.standings.len(),
            analysis.key_matches.len(),
            analysis.rejections.len()
        );
        Ok(SeasonReport::from(&analysis))
    }

    fn snapshot_from_file(sport: &str, path: &Path) -> Result<SeasonSnapshot> {
        let snapshot = SeasonSnapshot::from_json_file(path)?;
        if snapshot.sport != sport {
            bail!(
                "Snapshot {} is for '{}', not '{}'",
                path.display(),
                snapshot.sport,
                sport
            );
        }
        Ok(snapshot)
    }

    fn snapshot_from_store(&self, sport: &str) -> Result<SeasonSnapshot> {
        let pool = database::create_pool(&self.config.store.database_path)?;
        let mut conn = database::get_connection(&pool)?;

        database::load_snapshot(&mut conn, sport)?.ok_or_else(|| {
            anyhow!(
                "No data for '{}' in {}",
                sport,
                self.config.store.database_path
            )
        })
    }
}
