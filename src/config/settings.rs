use crate::standings::TiebreakCriterion;

pub const DEFAULT_DATABASE_PATH: &str = "conference_seeding.db";

#[derive(Debug, Clone)]
pub struct SeedingSettings {
    /// Seeds at or above this line make a key match high significance
    pub top_seed_cutoff: usize,
    pub flag_adjacent_ranges: bool,
    pub tiebreak_chain: Vec<TiebreakCriterion>,
}

impl Default for SeedingSettings {
    fn default() -> Self {
        Self {
            top_seed_cutoff: 4,
            flag_adjacent_ranges: true,
            tiebreak_chain: TiebreakCriterion::standard_chain(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct StoreSettings {
    pub database_path: String,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            database_path: std::env::var("DATABASE_PATH")
                .unwrap_or_else(|_| DEFAULT_DATABASE_PATH.to_string()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub seeding: SeedingSettings,
    pub store: StoreSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            seeding: SeedingSettings::default(),
            store: StoreSettings::default(),
        }
    }

    /// Command-line overrides win over environment and defaults
    pub fn with_overrides(mut self, database: Option<&str>, top_seeds: Option<usize>) -> Self {
        if let Some(path) = database {
            self.store.database_path = path.to_string();
        }
        if let Some(cutoff) = top_seeds {
            self.seeding.top_seed_cutoff = cutoff;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides() {
        let config = AppConfig::new().with_overrides(Some("season.db"), Some(8));

        assert_eq!(config.store.database_path, "season.db");
        assert_eq!(config.seeding.top_seed_cutoff, 8);
        assert!(config.seeding.flag_adjacent_ranges);
    }

    #[test]
    fn test_no_overrides_keeps_defaults() {
        let config = AppConfig::new().with_overrides(None, None);

        assert_eq!(config.seeding.top_seed_cutoff, 4);
        assert_eq!(config.seeding.tiebreak_chain, TiebreakCriterion::standard_chain());
    }
}
