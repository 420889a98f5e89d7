pub mod aggregator;
pub mod head_to_head;
pub mod key_matches;
pub mod scenario;
pub mod seeding;
pub mod tiebreak;

use std::collections::HashMap;

use log::{debug, info};

pub use aggregator::aggregate_standings;
pub use head_to_head::{HeadToHeadIndex, HeadToHeadRecord};
pub use key_matches::identify_key_matches;
pub use scenario::{project_all, project_scenario};
pub use seeding::calculate_seeding_ranges;
pub use tiebreak::{Placement, TiebreakCriterion, TiebreakResolver};

use crate::config::settings::SeedingSettings;
use crate::domain::{
    KeyMatch, RankedStanding, Rejection, ScenarioRecord, SeasonData, SeasonSnapshot, SeedingRange,
    TeamId,
};

/// Every derived output of one end-to-end pass over a snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeasonAnalysis {
    pub sport: String,
    pub standings: Vec<RankedStanding>,
    pub scenarios: Vec<ScenarioRecord>,
    pub seeding_ranges: Vec<SeedingRange>,
    pub key_matches: Vec<KeyMatch>,
    pub head_to_head: HeadToHeadIndex,
    pub rejections: Vec<Rejection>,
}

/// Validates the snapshot and runs the whole pipeline on what survives
pub fn analyze(snapshot: &SeasonSnapshot, settings: &SeedingSettings) -> SeasonAnalysis {
    let (season, rejections) = SeasonData::from_snapshot(snapshot);
    let mut analysis = analyze_season(&season, settings);
    analysis.rejections = rejections;
    analysis
}

/// aggregate -> head-to-head -> rank -> project -> seed -> classify
pub fn analyze_season(season: &SeasonData, settings: &SeedingSettings) -> SeasonAnalysis {
    info!("Analyzing {} ({} teams)", season.sport, season.pool.len());

    let entries = aggregate_standings(&season.pool, &season.results, &season.rankings);
    let head_to_head = HeadToHeadIndex::build(&season.pool, &season.results);
    let resolver = TiebreakResolver::with_chain(&head_to_head, settings.tiebreak_chain.clone());

    debug!("Tiebreak chain: {:?}", resolver.chain());

    let standings = resolver.standings(&entries);

    // Hypothetical tables must share the pool order the standings were sorted with
    let mut scenarios = project_all(&entries, &season.fixtures);
    let mut seeding_ranges = calculate_seeding_ranges(&entries, &scenarios, &resolver);
    let key_matches = identify_key_matches(&season.fixtures, &seeding_ranges, settings);

    let positions: HashMap<&TeamId, usize> = standings
        .iter()
        .map(|s| (&s.entry.team.id, s.rank_position))
        .collect();
    let position = |id: &TeamId| positions.get(id).copied().unwrap_or(usize::MAX);
    scenarios.sort_by_key(|scenario| position(&scenario.team.id));
    seeding_ranges.sort_by_key(|range| position(&range.team.id));

    SeasonAnalysis {
        sport: season.sport.clone(),
        standings,
        scenarios,
        seeding_ranges,
        key_matches,
        head_to_head,
        rejections: Vec::new(),
    }
}
