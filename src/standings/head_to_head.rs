use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::{MatchResult, Team, TeamId};

pub type TeamPair = (TeamId, TeamId);

/// Season-to-date head-to-head between two pool teams.
///
/// On repeat meetings the most recent result overwrites the earlier ones;
/// meetings on the same date resolve in input order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeadToHeadRecord {
    pub winner: TeamId,
    pub date: NaiveDate,
    pub meetings: u32,
    /// Winner of the most recent conference meeting, if they met in conference
    pub conference_winner: Option<TeamId>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeadToHeadIndex {
    records: HashMap<TeamPair, HeadToHeadRecord>,
}

impl HeadToHeadIndex {
    pub fn build(pool: &[Team], results: &[MatchResult]) -> Self {
        let pool_ids: HashSet<&TeamId> = pool.iter().map(|team| &team.id).collect();

        let mut meetings: Vec<&MatchResult> = results
            .iter()
            .filter(|r| pool_ids.contains(&r.home_team) && pool_ids.contains(&r.away_team))
            .filter(|r| r.loser().is_some())
            .collect();
        meetings.sort_by_key(|r| r.date);

        let mut records: HashMap<TeamPair, HeadToHeadRecord> = HashMap::new();
        for meeting in meetings {
            let Some(winner) = meeting.winner.clone() else {
                continue;
            };
            let key = pair_key(&meeting.home_team, &meeting.away_team);
            let conference_winner = meeting.is_conference.then(|| winner.clone());

            records
                .entry(key)
                .and_modify(|record| {
                    record.winner = winner.clone();
                    record.date = meeting.date;
                    record.meetings += 1;
                    if conference_winner.is_some() {
                        record.conference_winner = conference_winner.clone();
                    }
                })
                .or_insert_with(|| HeadToHeadRecord {
                    winner: winner.clone(),
                    date: meeting.date,
                    meetings: 1,
                    conference_winner: conference_winner.clone(),
                });
        }

        Self { records }
    }

    pub fn get(&self, a: &TeamId, b: &TeamId) -> Option<&HeadToHeadRecord> {
        self.records.get(&pair_key(a, b))
    }

    pub fn winner(&self, a: &TeamId, b: &TeamId) -> Option<&TeamId> {
        self.get(a, b).map(|record| &record.winner)
    }

    pub fn conference_winner(&self, a: &TeamId, b: &TeamId) -> Option<&TeamId> {
        self.get(a, b).and_then(|record| record.conference_winner.as_ref())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All pairs, sorted by team ids
    pub fn entries(&self) -> Vec<(&TeamPair, &HeadToHeadRecord)> {
        let mut entries: Vec<_> = self.records.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }
}

fn pair_key(a: &TeamId, b: &TeamId) -> TeamPair {
    if a <= b {
        (a.clone(), b.clone())
    } else {
        (b.clone(), a.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meeting(home: &str, away: &str, winner: &str, day: u32, conference: bool) -> MatchResult {
        MatchResult {
            home_team: home.into(),
            away_team: away.into(),
            date: NaiveDate::from_ymd_opt(2025, 3, day).unwrap(),
            winner: Some(winner.into()),
            is_conference: conference,
        }
    }

    fn pool() -> Vec<Team> {
        vec![Team::new("a", "A"), Team::new("b", "B")]
    }

    #[test]
    fn test_pair_is_unordered() {
        let index = HeadToHeadIndex::build(&pool(), &[meeting("a", "b", "b", 1, true)]);

        let a = TeamId::new("a");
        let b = TeamId::new("b");
        assert_eq!(index.winner(&a, &b), Some(&b));
        assert_eq!(index.winner(&b, &a), Some(&b));
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn test_most_recent_meeting_wins() {
        // Input order is deliberately not chronological
        let results = vec![
            meeting("a", "b", "a", 20, true),
            meeting("b", "a", "b", 5, true),
        ];
        let index = HeadToHeadIndex::build(&pool(), &results);

        let record = index.get(&TeamId::new("a"), &TeamId::new("b")).unwrap();
        assert_eq!(record.winner, TeamId::new("a"));
        assert_eq!(record.meetings, 2);
        assert_eq!(record.date, NaiveDate::from_ymd_opt(2025, 3, 20).unwrap());
    }

    #[test]
    fn test_same_day_meetings_use_input_order() {
        let results = vec![
            meeting("a", "b", "a", 9, true),
            meeting("a", "b", "b", 9, true),
        ];
        let index = HeadToHeadIndex::build(&pool(), &results);

        assert_eq!(index.winner(&"a".into(), &"b".into()), Some(&TeamId::new("b")));
    }

    #[test]
    fn test_conference_winner_ignores_later_non_conference_meeting() {
        let results = vec![
            meeting("a", "b", "a", 1, true),
            meeting("a", "b", "b", 15, false),
        ];
        let index = HeadToHeadIndex::build(&pool(), &results);

        let a = TeamId::new("a");
        let b = TeamId::new("b");
        assert_eq!(index.winner(&a, &b), Some(&b));
        assert_eq!(index.conference_winner(&a, &b), Some(&a));
    }

    #[test]
    fn test_non_pool_meetings_are_ignored() {
        let results = vec![meeting("a", "z", "a", 1, false)];
        let index = HeadToHeadIndex::build(&pool(), &results);

        assert!(index.is_empty());
    }
}
