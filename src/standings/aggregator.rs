use std::collections::HashMap;

use log::info;

use crate::domain::{MatchResult, RankMap, Record, StandingsEntry, Team, TeamId};

/// Folds decided results into one entry per pool team, in pool order.
///
/// Entries are rebuilt from scratch on every call. Undecided results are
/// skipped, and games against non-pool opponents only touch the pool side.
pub fn aggregate_standings(
    pool: &[Team],
    results: &[MatchResult],
    rankings: &RankMap,
) -> Vec<StandingsEntry> {
    let mut records: HashMap<&TeamId, Record> =
        pool.iter().map(|team| (&team.id, Record::default())).collect();

    let mut counted = 0;
    for result in results {
        let (Some(winner), Some(loser)) = (result.winner.as_ref(), result.loser()) else {
            continue;
        };
        if let Some(record) = records.get_mut(winner) {
            record.record_win(result.is_conference);
        }
        if let Some(record) = records.get_mut(loser) {
            record.record_loss(result.is_conference);
        }
        counted += 1;
    }
    info!("Aggregated {} results for {} teams", counted, pool.len());

    pool.iter()
        .map(|team| {
            let record = records.get(&team.id).copied().unwrap_or_default();
            StandingsEntry::new(team.clone(), record, rankings.get(&team.id).copied())
        })
        .collect()
}
