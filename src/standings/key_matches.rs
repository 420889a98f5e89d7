use std::collections::HashMap;

use log::info;

use crate::config::settings::SeedingSettings;
use crate::domain::{KeyMatch, ScheduledMatch, SeedPosition, SeedingRange, Significance, TeamId};

/// Flags remaining conference fixtures between teams whose seeding ranges
/// overlap (or touch, if configured). High significance when both teams can
/// still finish inside the top-seed cutoff.
///
/// Ordered by significance, then date, then team ids.
pub fn identify_key_matches(
    fixtures: &[ScheduledMatch],
    ranges: &[SeedingRange],
    settings: &SeedingSettings,
) -> Vec<KeyMatch> {
    let by_team: HashMap<&TeamId, &SeedingRange> =
        ranges.iter().map(|range| (&range.team.id, range)).collect();

    let mut key_matches: Vec<KeyMatch> = fixtures
        .iter()
        .filter(|fixture| fixture.is_conference)
        .filter_map(|fixture| {
            let a = by_team.get(&fixture.home_team)?;
            let b = by_team.get(&fixture.away_team)?;
            classify(fixture, a, b, settings)
        })
        .collect();

    key_matches.sort_by(|x, y| {
        x.significance
            .cmp(&y.significance)
            .then_with(|| x.date.cmp(&y.date))
            .then_with(|| x.team_a.cmp(&y.team_a))
            .then_with(|| x.team_b.cmp(&y.team_b))
    });
    info!("Identified {} key matches", key_matches.len());
    key_matches
}

fn classify(
    fixture: &ScheduledMatch,
    a: &SeedingRange,
    b: &SeedingRange,
    settings: &SeedingSettings,
) -> Option<KeyMatch> {
    let contested = a.overlaps(b) || (settings.flag_adjacent_ranges && a.is_adjacent_to(b));
    if !contested {
        return None;
    }

    let cutoff = settings.top_seed_cutoff;
    let significance = if a.best_case_seed <= cutoff && b.best_case_seed <= cutoff {
        Significance::High
    } else {
        Significance::Medium
    };

    Some(KeyMatch {
        team_a: fixture.home_team.clone(),
        team_b: fixture.away_team.clone(),
        date: fixture.date,
        location: fixture.location.clone(),
        team_a_record: a.current,
        team_b_record: b.current,
        significance,
        reason: describe_stakes(a, b, significance, cutoff),
    })
}

fn describe_stakes(
    a: &SeedingRange,
    b: &SeedingRange,
    significance: Significance,
    cutoff: SeedPosition,
) -> String {
    let low = a.best_case_seed.max(b.best_case_seed);
    let high = a.worst_case_seed.min(b.worst_case_seed);
    let at_stake = if low < high {
        format!("seeds #{}-#{} at stake", low, high)
    } else if low == high {
        format!("seed #{} at stake", low)
    } else {
        format!("the #{}/#{} seed boundary at stake", high, low)
    };

    let matchup = format!("{} {} and {} {}", a.team.name, span(a), b.team.name, span(b));
    match significance {
        Significance::High if straddles(a, cutoff) || straddles(b, cutoff) => format!(
            "{} can both finish in the top {}, with the #{}/#{} cutoff and {}",
            matchup,
            cutoff,
            cutoff,
            cutoff + 1,
            at_stake
        ),
        Significance::High => format!(
            "{} can both finish in the top {}, {}",
            matchup, cutoff, at_stake
        ),
        Significance::Medium => format!("{} are contending, {}", matchup, at_stake),
    }
}

fn span(range: &SeedingRange) -> String {
    if range.best_case_seed == range.worst_case_seed {
        format!("(#{})", range.best_case_seed)
    } else {
        format!("(#{}-#{})", range.best_case_seed, range.worst_case_seed)
    }
}

fn straddles(range: &SeedingRange, cutoff: SeedPosition) -> bool {
    range.contains(cutoff) && range.contains(cutoff + 1)
}
