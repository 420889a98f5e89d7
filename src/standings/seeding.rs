use std::collections::HashMap;

use log::debug;

use super::tiebreak::TiebreakResolver;
use crate::domain::{Record, ScenarioRecord, SeedingRange, StandingsEntry, TeamId};

/// Bounds every team's final seed.
///
/// Best case: the team at its best projected record against every other team
/// at its worst. Worst case: the reverse. This is the widest defensible
/// interval, not a joint-optimal bound; no single season outcome has to
/// realise both ends at once.
///
/// `standings` must be in pool order, the same order the current table was
/// ranked from, since it is the input-order fallback of the tiebreak chain.
/// Ranges come back in that order.
pub fn calculate_seeding_ranges(
    standings: &[StandingsEntry],
    scenarios: &[ScenarioRecord],
    resolver: &TiebreakResolver<'_>,
) -> Vec<SeedingRange> {
    let by_team: HashMap<&TeamId, &ScenarioRecord> = scenarios
        .iter()
        .map(|scenario| (&scenario.team.id, scenario))
        .collect();

    let projections: Vec<(Record, Record)> = standings
        .iter()
        .map(|entry| match by_team.get(&entry.team.id) {
            Some(scenario) => (scenario.best_case, scenario.worst_case),
            None => (entry.record, entry.record),
        })
        .collect();

    standings
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let favourable = hypothetical(standings, &projections, index, Outlook::Favourable);
            let unfavourable = hypothetical(standings, &projections, index, Outlook::Unfavourable);

            let best = resolver.position_of(&favourable, index);
            let worst = resolver.position_of(&unfavourable, index);
            if best > worst {
                // Tie groups differ in size between the two hypotheticals, so
                // head-to-head can apply in one and not the other
                debug!(
                    "{}: favourable seed {} below unfavourable seed {}, widening",
                    entry.team.id, best, worst
                );
            }

            SeedingRange {
                team: entry.team.clone(),
                current: entry.record,
                best_case_seed: best.min(worst),
                worst_case_seed: best.max(worst),
            }
        })
        .collect()
}

#[derive(Clone, Copy)]
enum Outlook {
    Favourable,
    Unfavourable,
}

fn hypothetical(
    standings: &[StandingsEntry],
    projections: &[(Record, Record)],
    focus: usize,
    outlook: Outlook,
) -> Vec<StandingsEntry> {
    standings
        .iter()
        .zip(projections)
        .enumerate()
        .map(|(index, (entry, &(best, worst)))| {
            let record = match (index == focus, outlook) {
                (true, Outlook::Favourable) | (false, Outlook::Unfavourable) => best,
                (true, Outlook::Unfavourable) | (false, Outlook::Favourable) => worst,
            };
            entry.with_record(record)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{MatchResult, ScheduledMatch, Team};
    use crate::standings::head_to_head::HeadToHeadIndex;
    use crate::standings::scenario::project_all;
    use chrono::NaiveDate;

    fn entry(id: &str, record: Record, rank: Option<u32>) -> StandingsEntry {
        StandingsEntry::new(Team::new(id, id.to_uppercase()), record, rank)
    }

    fn fixture(home: &str, away: &str, day: u32) -> ScheduledMatch {
        ScheduledMatch {
            home_team: home.into(),
            away_team: away.into(),
            date: NaiveDate::from_ymd_opt(2025, 4, day).unwrap(),
            location: None,
            is_conference: true,
        }
    }

    fn seeds(ranges: &[SeedingRange]) -> Vec<(usize, usize)> {
        ranges
            .iter()
            .map(|r| (r.best_case_seed, r.worst_case_seed))
            .collect()
    }

    #[test]
    fn test_no_remaining_games_fixes_seeds() {
        let standings = vec![
            entry("a", Record::new(8, 1, 6, 0), None),
            entry("b", Record::new(7, 2, 6, 1), None),
        ];
        let scenarios = project_all(&standings, &[]);
        let index = HeadToHeadIndex::default();
        let resolver = TiebreakResolver::new(&index);

        let ranges = calculate_seeding_ranges(&standings, &scenarios, &resolver);

        assert_eq!(seeds(&ranges), vec![(1, 1), (2, 2)]);
    }

    #[test]
    fn test_remaining_games_widen_ranges() {
        let standings = vec![
            entry("a", Record::new(5, 1, 5, 1), None),
            entry("b", Record::new(4, 2, 4, 2), None),
            entry("c", Record::new(1, 5, 1, 5), None),
        ];
        let fixtures = vec![fixture("a", "b", 1), fixture("b", "c", 2)];
        let scenarios = project_all(&standings, &fixtures);
        let index = HeadToHeadIndex::default();
        let resolver = TiebreakResolver::new(&index);

        let ranges = calculate_seeding_ranges(&standings, &scenarios, &resolver);

        // a: best 6-1 (.857) stays first; worst 5-2 (.714) vs b's best 6-2 (.750)
        // b: best 6-2 (.750) vs a's worst 5-2 (.714) climbs to first
        // c: best 2-5 (.286) never catches b's worst 4-4
        assert_eq!(seeds(&ranges), vec![(1, 2), (1, 2), (3, 3)]);
    }

    #[test]
    fn test_ranges_are_ordered_and_bounded() {
        let standings: Vec<StandingsEntry> = (0..6u32)
            .map(|i| entry(&format!("t{i}"), Record::new(6 - i, i, 6 - i, i), None))
            .collect();
        let fixtures = vec![
            fixture("t0", "t5", 1),
            fixture("t1", "t2", 2),
            fixture("t3", "t4", 3),
            fixture("t2", "t5", 4),
        ];
        let scenarios = project_all(&standings, &fixtures);
        let index = HeadToHeadIndex::default();
        let resolver = TiebreakResolver::new(&index);

        for range in calculate_seeding_ranges(&standings, &scenarios, &resolver) {
            assert!(range.best_case_seed >= 1);
            assert!(range.best_case_seed <= range.worst_case_seed);
            assert!(range.worst_case_seed <= standings.len());
        }
    }

    #[test]
    fn test_pool_order_settles_hypothetical_ties() {
        // b leads today, but a is listed first: when a's best case meets b's
        // worst case at 2-1 with no meeting and no ranking, a goes first
        let standings = vec![
            entry("a", Record::new(1, 1, 1, 1), None),
            entry("b", Record::new(2, 0, 2, 0), None),
        ];
        let fixtures = vec![fixture("a", "x", 1), fixture("b", "x", 2)];
        let scenarios = project_all(&standings, &fixtures);
        let index = HeadToHeadIndex::default();
        let resolver = TiebreakResolver::new(&index);

        let ranges = calculate_seeding_ranges(&standings, &scenarios, &resolver);

        assert_eq!(seeds(&ranges), vec![(1, 2), (1, 2)]);
    }

    #[test]
    fn test_tie_group_size_change_is_widened() {
        // t and u are level with no games left, and u beat t. v can only
        // reach their percentage in its best case, which turns the two-way
        // tie into a three-way one where the external ranking puts t first.
        let standings = vec![
            entry("u", Record::new(2, 1, 2, 1), Some(5)),
            entry("t", Record::new(2, 1, 2, 1), Some(1)),
            entry("v", Record::new(1, 1, 1, 1), Some(9)),
        ];
        let pool: Vec<Team> = standings.iter().map(|e| e.team.clone()).collect();
        let meeting = MatchResult {
            home_team: "u".into(),
            away_team: "t".into(),
            date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
            winner: Some("u".into()),
            is_conference: true,
        };
        let index = HeadToHeadIndex::build(&pool, &[meeting]);
        let resolver = TiebreakResolver::new(&index);
        // v: best 2-1 in conference (.667), worst 1-2
        let scenarios = project_all(&standings, &[fixture("v", "w", 1)]);

        let ranges = calculate_seeding_ranges(&standings, &scenarios, &resolver);

        // t: favourable view has v at 1-2 so t/u is a pair and u wins head-to-head (2nd);
        // unfavourable view has all three level, ranking puts t first (1st)
        assert_eq!(ranges[1].team.id, TeamId::new("t"));
        assert_eq!((ranges[1].best_case_seed, ranges[1].worst_case_seed), (1, 2));
    }
}
