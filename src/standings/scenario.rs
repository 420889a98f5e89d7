use log::debug;

use crate::domain::{Record, ScenarioRecord, ScheduledMatch, StandingsEntry, TeamId};

/// Best and worst final records for one team, looking only at its own
/// remaining matches. Opponents are not resolved jointly.
pub fn project_scenario(entry: &StandingsEntry, remaining: Vec<ScheduledMatch>) -> ScenarioRecord {
    let current = entry.record;
    let total = remaining.len() as u32;
    let conference = remaining.iter().filter(|m| m.is_conference).count() as u32;

    let best_case = Record {
        wins: current.wins + total,
        conf_wins: current.conf_wins + conference,
        ..current
    };
    let worst_case = Record {
        losses: current.losses + total,
        conf_losses: current.conf_losses + conference,
        ..current
    };

    ScenarioRecord {
        team: entry.team.clone(),
        current,
        best_case,
        worst_case,
        possible_records: possible_records(current, conference, total - conference),
        remaining,
    }
}

/// Projects every entry, keeping the order of `standings`
pub fn project_all(standings: &[StandingsEntry], fixtures: &[ScheduledMatch]) -> Vec<ScenarioRecord> {
    standings
        .iter()
        .map(|entry| {
            let remaining = remaining_for(&entry.team.id, fixtures);
            debug!("{} has {} matches remaining", entry.team.id, remaining.len());
            project_scenario(entry, remaining)
        })
        .collect()
}

/// Fixtures involving `team`, ordered by date (stable for same-day fixtures)
pub fn remaining_for(team: &TeamId, fixtures: &[ScheduledMatch]) -> Vec<ScheduledMatch> {
    let mut remaining: Vec<ScheduledMatch> = fixtures
        .iter()
        .filter(|fixture| fixture.involves(team))
        .cloned()
        .collect();
    remaining.sort_by_key(|fixture| fixture.date);
    remaining
}

// Every (conference wins, non-conference wins) split, ordered by conference
// win%, then overall win%, best first.
fn possible_records(current: Record, conference: u32, non_conference: u32) -> Vec<Record> {
    let splits = (conference as usize + 1).saturating_mul(non_conference as usize + 1);
    let mut records = Vec::with_capacity(splits);
    for conf_won in (0..=conference).rev() {
        for other_won in (0..=non_conference).rev() {
            let conf_lost = conference - conf_won;
            let other_lost = non_conference - other_won;
            records.push(Record {
                wins: current.wins + conf_won + other_won,
                losses: current.losses + conf_lost + other_lost,
                conf_wins: current.conf_wins + conf_won,
                conf_losses: current.conf_losses + conf_lost,
            });
        }
    }
    records.sort_by(|a, b| b.cmp_conf_pct(a).then_with(|| b.cmp_win_pct(a)));
    records
}
