use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use super::models::{ExternalRanking, MatchResult, RankMap, ScheduledMatch, Team, TeamId};
use super::rejection::{Rejection, RejectionReason};

/// Everything the results/fixtures provider hands over for one competition.
///
/// `teams` is the ranking pool, and its order is the final stable fallback of
/// the tiebreak chain. `opponents` lists known teams outside the pool (e.g.
/// non-conference opponents) whose games still count toward overall records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonSnapshot {
    pub sport: String,
    pub teams: Vec<Team>,
    #[serde(default)]
    pub opponents: Vec<Team>,
    #[serde(default)]
    pub results: Vec<MatchResult>,
    #[serde(default)]
    pub fixtures: Vec<ScheduledMatch>,
    #[serde(default)]
    pub rankings: Vec<ExternalRanking>,
}

impl SeasonSnapshot {
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read snapshot file {}", path.display()))?;
        let snapshot: SeasonSnapshot = serde_json::from_str(&json).with_context(|| {
            format!(
                "Failed to parse snapshot from {}. First 200 chars: {}",
                path.display(),
                json.chars().take(200).collect::<String>()
            )
        })?;

        info!(
            "Loaded snapshot for {}: {} teams, {} results, {} fixtures",
            snapshot.sport,
            snapshot.teams.len(),
            snapshot.results.len(),
            snapshot.fixtures.len()
        );
        Ok(snapshot)
    }
}

/// A snapshot that passed the ingestion boundary: every team reference is
/// known, every result has a winner who actually played.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeasonData {
    pub sport: String,
    pub pool: Vec<Team>,
    pub results: Vec<MatchResult>,
    pub fixtures: Vec<ScheduledMatch>,
    pub rankings: RankMap,
}

impl SeasonData {
    pub fn from_snapshot(snapshot: &SeasonSnapshot) -> (Self, Vec<Rejection>) {
        let mut validator = Validator::default();

        let pool = validator.register_pool(&snapshot.teams);
        validator.register_opponents(&snapshot.opponents);
        let results = validator.accept_results(&snapshot.results);
        let fixtures = validator.accept_fixtures(&snapshot.fixtures);
        let rankings = validator.accept_rankings(&snapshot.rankings);

        for rejection in &validator.rejections {
            warn!("{}", rejection);
        }

        let season = Self {
            sport: snapshot.sport.clone(),
            pool,
            results,
            fixtures,
            rankings,
        };
        (season, validator.rejections)
    }
}

#[derive(Default)]
struct Validator {
    pool: HashSet<TeamId>,
    known: HashSet<TeamId>,
    rejections: Vec<Rejection>,
}

impl Validator {
    fn register_pool(&mut self, teams: &[Team]) -> Vec<Team> {
        let mut pool = Vec::with_capacity(teams.len());
        for team in teams {
            if self.known.insert(team.id.clone()) {
                self.pool.insert(team.id.clone());
                pool.push(team.clone());
            } else {
                self.reject(format!("team {}", team.id), duplicate(&team.id));
            }
        }
        pool
    }

    fn register_opponents(&mut self, opponents: &[Team]) {
        for team in opponents {
            if !self.known.insert(team.id.clone()) {
                self.reject(format!("opponent {}", team.id), duplicate(&team.id));
            }
        }
    }

    fn accept_results(&mut self, results: &[MatchResult]) -> Vec<MatchResult> {
        let mut accepted = Vec::with_capacity(results.len());
        for result in results {
            if let Err(reason) =
                self.check_participants(&result.home_team, &result.away_team, result.is_conference)
            {
                self.reject(result.label(), reason);
                continue;
            }

            match &result.winner {
                None => debug!("Skipping undecided {}", result.label()),
                Some(winner) if result.loser().is_none() => {
                    let reason = RejectionReason::WinnerNotParticipant {
                        winner: winner.clone(),
                    };
                    self.reject(result.label(), reason);
                }
                Some(_) => accepted.push(result.clone()),
            }
        }
        accepted
    }

    fn accept_fixtures(&mut self, fixtures: &[ScheduledMatch]) -> Vec<ScheduledMatch> {
        let mut accepted = Vec::with_capacity(fixtures.len());
        for fixture in fixtures {
            match self.check_participants(
                &fixture.home_team,
                &fixture.away_team,
                fixture.is_conference,
            ) {
                Ok(()) => accepted.push(fixture.clone()),
                Err(reason) => self.reject(fixture.label(), reason),
            }
        }
        accepted
    }

    // Duplicate rankings: the last one wins
    fn accept_rankings(&mut self, rankings: &[ExternalRanking]) -> RankMap {
        let mut ranks = RankMap::new();
        for ranking in rankings {
            if !self.known.contains(&ranking.team) {
                let reason = RejectionReason::UnknownTeam {
                    team: ranking.team.clone(),
                };
                self.reject(format!("ranking for {}", ranking.team), reason);
                continue;
            }
            if !self.pool.contains(&ranking.team) {
                continue;
            }
            match ranking.rank {
                Some(rank) => {
                    ranks.insert(ranking.team.clone(), rank);
                }
                None => {
                    ranks.remove(&ranking.team);
                }
            }
        }
        ranks
    }

    fn check_participants(
        &self,
        home: &TeamId,
        away: &TeamId,
        is_conference: bool,
    ) -> Result<(), RejectionReason> {
        for team in [home, away] {
            if !self.known.contains(team) {
                return Err(RejectionReason::UnknownTeam { team: team.clone() });
            }
        }
        if home == away {
            return Err(RejectionReason::SelfMatch);
        }

        let home_in_pool = self.pool.contains(home);
        let away_in_pool = self.pool.contains(away);
        if !home_in_pool && !away_in_pool {
            return Err(RejectionReason::NoPoolTeam);
        }
        if is_conference {
            if !home_in_pool {
                return Err(RejectionReason::ConferenceOutsidePool { team: home.clone() });
            }
            if !away_in_pool {
                return Err(RejectionReason::ConferenceOutsidePool { team: away.clone() });
            }
        }
        Ok(())
    }

    fn reject(&mut self, record: String, reason: RejectionReason) {
        self.rejections.push(Rejection::new(record, reason));
    }
}

fn duplicate(team: &TeamId) -> RejectionReason {
    RejectionReason::DuplicateTeam { team: team.clone() }
}
