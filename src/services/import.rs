use anyhow::Result;
use log::info;
use std::path::Path;

use crate::config::settings::AppConfig;
use crate::database::{self, ImportSummary};
use crate::domain::{SeasonData, SeasonSnapshot};

pub struct ImportService {
    config: AppConfig,
}

impl ImportService {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn run(&self, snapshot_path: &Path) -> Result<ImportSummary> {
        info!("=== Importing {} ===", snapshot_path.display());

        let snapshot = SeasonSnapshot::from_json_file(snapshot_path)?;

        // Rows are stored as given; only report what analysis will reject
        let (_, rejections) = SeasonData::from_snapshot(&snapshot);
        if !rejections.is_empty() {
            info!("  → {} records will be rejected at analysis time", rejections.len());
        }

        let pool = database::create_pool(&self.config.store.database_path)?;
        let mut conn = database::get_connection(&pool)?;
        let summary = database::import_snapshot(&mut conn, &snapshot)?;

        info!("=== Import Complete ===");
        Ok(summary)
    }
}
