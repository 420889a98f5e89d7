use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::{
    KeyMatch, RankedStanding, Record, Rejection, RejectionReason, ScenarioRecord, ScheduledMatch,
    SeedingRange, Significance, TeamId,
};
use crate::standings::{HeadToHeadIndex, SeasonAnalysis};

#[derive(Debug, Clone, Serialize)]
pub struct RecordView {
    pub wins: u32,
    pub losses: u32,
    pub conf_wins: u32,
    pub conf_losses: u32,
    pub win_pct: f64,
    pub conf_win_pct: f64,
    pub summary: String,
    pub conf_summary: String,
}

impl From<Record> for RecordView {
    fn from(record: Record) -> Self {
        Self {
            wins: record.wins,
            losses: record.losses,
            conf_wins: record.conf_wins,
            conf_losses: record.conf_losses,
            win_pct: record.win_pct(),
            conf_win_pct: record.conf_win_pct(),
            summary: record.summary(),
            conf_summary: record.conf_summary(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct StandingRow {
    pub rank_position: usize,
    pub team: TeamId,
    pub name: String,
    pub wins: u32,
    pub losses: u32,
    pub conf_wins: u32,
    pub conf_losses: u32,
    pub win_pct: f64,
    pub conf_win_pct: f64,
    pub external_rank: Option<u32>,
    pub tiebreaker: Option<String>,
}

impl From<&RankedStanding> for StandingRow {
    fn from(standing: &RankedStanding) -> Self {
        let entry = &standing.entry;
        Self {
            rank_position: standing.rank_position,
            team: entry.team.id.clone(),
            name: entry.team.name.clone(),
            wins: entry.record.wins,
            losses: entry.record.losses,
            conf_wins: entry.record.conf_wins,
            conf_losses: entry.record.conf_losses,
            win_pct: entry.win_pct(),
            conf_win_pct: entry.conf_win_pct(),
            external_rank: entry.external_rank,
            tiebreaker: standing.tiebreaker.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ScenarioRow {
    pub team: TeamId,
    pub name: String,
    pub current_record: RecordView,
    pub best_case_record: RecordView,
    pub worst_case_record: RecordView,
    pub remaining_matches: Vec<ScheduledMatch>,
    pub possible_records: Vec<RecordView>,
}

impl From<&ScenarioRecord> for ScenarioRow {
    fn from(scenario: &ScenarioRecord) -> Self {
        Self {
            team: scenario.team.id.clone(),
            name: scenario.team.name.clone(),
            current_record: scenario.current.into(),
            best_case_record: scenario.best_case.into(),
            worst_case_record: scenario.worst_case.into(),
            remaining_matches: scenario.remaining.clone(),
            possible_records: scenario
                .possible_records
                .iter()
                .copied()
                .map(RecordView::from)
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SeedingRow {
    pub team: TeamId,
    pub name: String,
    pub current_record: RecordView,
    pub best_case_seed: usize,
    pub worst_case_seed: usize,
}

impl From<&SeedingRange> for SeedingRow {
    fn from(range: &SeedingRange) -> Self {
        Self {
            team: range.team.id.clone(),
            name: range.team.name.clone(),
            current_record: range.current.into(),
            best_case_seed: range.best_case_seed,
            worst_case_seed: range.worst_case_seed,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct KeyMatchRow {
    pub team_a: TeamId,
    pub team_b: TeamId,
    pub date: NaiveDate,
    pub location: Option<String>,
    pub team_a_record: RecordView,
    pub team_b_record: RecordView,
    pub significance: Significance,
    pub reason: String,
}

impl From<&KeyMatch> for KeyMatchRow {
    fn from(key: &KeyMatch) -> Self {
        Self {
            team_a: key.team_a.clone(),
            team_b: key.team_b.clone(),
            date: key.date,
            location: key.location.clone(),
            team_a_record: key.team_a_record.into(),
            team_b_record: key.team_b_record.into(),
            significance: key.significance,
            reason: key.reason.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HeadToHeadRow {
    pub team_a: TeamId,
    pub team_b: TeamId,
    pub winner: TeamId,
    pub date: NaiveDate,
    pub meetings: u32,
    pub conference_winner: Option<TeamId>,
}

fn head_to_head_rows(index: &HeadToHeadIndex) -> Vec<HeadToHeadRow> {
    index
        .entries()
        .into_iter()
        .map(|((a, b), record)| HeadToHeadRow {
            team_a: a.clone(),
            team_b: b.clone(),
            winner: record.winner.clone(),
            date: record.date,
            meetings: record.meetings,
            conference_winner: record.conference_winner.clone(),
        })
        .collect()
}

#[derive(Debug, Clone, Serialize)]
pub struct RejectionRow {
    pub record: String,
    pub reason: RejectionReason,
    pub message: String,
}

impl From<&Rejection> for RejectionRow {
    fn from(rejection: &Rejection) -> Self {
        Self {
            record: rejection.record.clone(),
            reason: rejection.reason.clone(),
            message: rejection.reason.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SportListResponse {
    pub sports: Vec<String>,
}

/// Full season analysis as served over HTTP and printed by `analyze`
#[derive(Debug, Clone, Serialize)]
pub struct SeasonReport {
    pub sport: String,
    pub standings: Vec<StandingRow>,
    pub scenarios: Vec<ScenarioRow>,
    pub seeding_ranges: Vec<SeedingRow>,
    pub key_matches: Vec<KeyMatchRow>,
    pub head_to_head: Vec<HeadToHeadRow>,
    pub rejections: Vec<RejectionRow>,
}

impl From<&SeasonAnalysis> for SeasonReport {
    fn from(analysis: &SeasonAnalysis) -> Self {
        Self {
            sport: analysis.sport.clone(),
            standings: analysis.standings.iter().map(StandingRow::from).collect(),
            scenarios: analysis.scenarios.iter().map(ScenarioRow::from).collect(),
            seeding_ranges: analysis.seeding_ranges.iter().map(SeedingRow::from).collect(),
            key_matches: analysis.key_matches.iter().map(KeyMatchRow::from).collect(),
            head_to_head: head_to_head_rows(&analysis.head_to_head),
            rejections: analysis.rejections.iter().map(RejectionRow::from).collect(),
        }
    }
}
