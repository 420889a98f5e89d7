use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub type SeedPosition = usize;
pub type RankMap = HashMap<TeamId, u32>;

/// Team identifier, used as the map key throughout the engine
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeamId(pub String);

impl TeamId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TeamId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
}

impl Team {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: TeamId::new(id),
            name: name.into(),
        }
    }
}

/// Completed match as reported by the results provider.
/// `winner` is `None` for postponed or voided games.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub home_team: TeamId,
    pub away_team: TeamId,
    pub date: NaiveDate,
    pub winner: Option<TeamId>,
    pub is_conference: bool,
}

impl MatchResult {
    pub fn loser(&self) -> Option<&TeamId> {
        let winner = self.winner.as_ref()?;
        if *winner == self.home_team {
            Some(&self.away_team)
        } else if *winner == self.away_team {
            Some(&self.home_team)
        } else {
            None
        }
    }

    pub fn label(&self) -> String {
        format!("result {} vs {} on {}", self.home_team, self.away_team, self.date)
    }
}

/// Fixture that has not been played yet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledMatch {
    pub home_team: TeamId,
    pub away_team: TeamId,
    pub date: NaiveDate,
    #[serde(default)]
    pub location: Option<String>,
    pub is_conference: bool,
}

impl ScheduledMatch {
    pub fn involves(&self, team: &TeamId) -> bool {
        self.home_team == *team || self.away_team == *team
    }

    pub fn label(&self) -> String {
        format!("fixture {} vs {} on {}", self.home_team, self.away_team, self.date)
    }
}

/// Externally supplied poll position (e.g. ITA rank)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalRanking {
    pub team: TeamId,
    pub rank: Option<u32>,
}

/// Win/loss tallies, overall and in conference
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Record {
    pub wins: u32,
    pub losses: u32,
    pub conf_wins: u32,
    pub conf_losses: u32,
}

impl Record {
    pub fn new(wins: u32, losses: u32, conf_wins: u32, conf_losses: u32) -> Self {
        Self {
            wins,
            losses,
            conf_wins,
            conf_losses,
        }
    }

    pub fn games(&self) -> u32 {
        self.wins + self.losses
    }

    pub fn conf_games(&self) -> u32 {
        self.conf_wins + self.conf_losses
    }

    pub fn win_pct(&self) -> f64 {
        percentage(self.wins, self.losses)
    }

    pub fn conf_win_pct(&self) -> f64 {
        percentage(self.conf_wins, self.conf_losses)
    }

    /// Exact comparison of conference win percentage, no float rounding
    pub fn cmp_conf_pct(&self, other: &Record) -> Ordering {
        compare_fractions(
            (self.conf_wins, self.conf_games()),
            (other.conf_wins, other.conf_games()),
        )
    }

    pub fn cmp_win_pct(&self, other: &Record) -> Ordering {
        compare_fractions((self.wins, self.games()), (other.wins, other.games()))
    }

    pub fn record_win(&mut self, conference: bool) {
        self.wins += 1;
        if conference {
            self.conf_wins += 1;
        }
    }

    pub fn record_loss(&mut self, conference: bool) {
        self.losses += 1;
        if conference {
            self.conf_losses += 1;
        }
    }

    /// "W-L"
    pub fn summary(&self) -> String {
        format!("{}-{}", self.wins, self.losses)
    }

    pub fn conf_summary(&self) -> String {
        format!("{}-{}", self.conf_wins, self.conf_losses)
    }
}

fn percentage(wins: u32, losses: u32) -> f64 {
    let games = wins + losses;
    if games == 0 {
        0.0
    } else {
        f64::from(wins) / f64::from(games)
    }
}

// (wins, games) pairs; zero games counts as 0%
fn compare_fractions(a: (u32, u32), b: (u32, u32)) -> Ordering {
    let (a_num, a_den) = if a.1 == 0 { (0, 1) } else { a };
    let (b_num, b_den) = if b.1 == 0 { (0, 1) } else { b };
    (u64::from(a_num) * u64::from(b_den)).cmp(&(u64::from(b_num) * u64::from(a_den)))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandingsEntry {
    pub team: Team,
    pub record: Record,
    pub external_rank: Option<u32>,
}

impl StandingsEntry {
    pub fn new(team: Team, record: Record, external_rank: Option<u32>) -> Self {
        Self {
            team,
            record,
            external_rank,
        }
    }

    pub fn win_pct(&self) -> f64 {
        self.record.win_pct()
    }

    pub fn conf_win_pct(&self) -> f64 {
        self.record.conf_win_pct()
    }

    /// Same team and ranking, hypothetical record
    pub fn with_record(&self, record: Record) -> Self {
        Self {
            team: self.team.clone(),
            record,
            external_rank: self.external_rank,
        }
    }
}

/// A standings entry with its position after the tiebreak chain
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedStanding {
    pub rank_position: SeedPosition,
    pub entry: StandingsEntry,
    pub tiebreaker: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenarioRecord {
    pub team: Team,
    pub current: Record,
    pub best_case: Record,
    pub worst_case: Record,
    pub remaining: Vec<ScheduledMatch>,
    /// Every final record reachable from the team's own remaining matches,
    /// best first
    pub possible_records: Vec<Record>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedingRange {
    pub team: Team,
    pub current: Record,
    pub best_case_seed: SeedPosition,
    pub worst_case_seed: SeedPosition,
}

impl SeedingRange {
    pub fn contains(&self, seed: SeedPosition) -> bool {
        self.best_case_seed <= seed && seed <= self.worst_case_seed
    }

    pub fn overlaps(&self, other: &SeedingRange) -> bool {
        self.best_case_seed <= other.worst_case_seed && other.best_case_seed <= self.worst_case_seed
    }

    pub fn is_adjacent_to(&self, other: &SeedingRange) -> bool {
        self.worst_case_seed + 1 == other.best_case_seed
            || other.worst_case_seed + 1 == self.best_case_seed
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Significance {
    High,
    Medium,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyMatch {
    pub team_a: TeamId,
    pub team_b: TeamId,
    pub date: NaiveDate,
    pub location: Option<String>,
    pub team_a_record: Record,
    pub team_b_record: Record,
    pub significance: Significance,
    pub reason: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_games_is_zero_percent() {
        let record = Record::default();
        assert_eq!(record.win_pct(), 0.0);
        assert_eq!(record.conf_win_pct(), 0.0);
    }

    #[test]
    fn test_conference_percentage_is_independent() {
        let record = Record::new(8, 1, 2, 1);
        assert!((record.win_pct() - 8.0 / 9.0).abs() < 1e-9);
        assert!((record.conf_win_pct() - 2.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_exact_percentage_comparison() {
        // 2-1 and 4-2 are both .667 and must compare equal
        let a = Record::new(2, 1, 2, 1);
        let b = Record::new(4, 2, 4, 2);
        assert_eq!(a.cmp_conf_pct(&b), Ordering::Equal);
        assert_eq!(a.cmp_win_pct(&b), Ordering::Equal);

        let c = Record::new(6, 0, 6, 0);
        assert_eq!(c.cmp_conf_pct(&a), Ordering::Greater);
        assert_eq!(Record::default().cmp_conf_pct(&Record::new(0, 3, 0, 3)), Ordering::Equal);
    }

    #[test]
    fn test_loser_of_result() {
        let result = MatchResult {
            home_team: "a".into(),
            away_team: "b".into(),
            date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
            winner: Some("b".into()),
            is_conference: true,
        };
        assert_eq!(result.loser(), Some(&TeamId::new("a")));
    }

    #[test]
    fn test_range_overlap_and_adjacency() {
        let range = |best, worst| SeedingRange {
            team: Team::new("x", "X"),
            current: Record::default(),
            best_case_seed: best,
            worst_case_seed: worst,
        };
        assert!(range(1, 3).overlaps(&range(3, 5)));
        assert!(!range(1, 2).overlaps(&range(3, 5)));
        assert!(range(1, 2).is_adjacent_to(&range(3, 5)));
        assert!(!range(1, 2).is_adjacent_to(&range(4, 5)));
        assert!(range(2, 4).contains(3));
    }
}
