//! Deterministic tiebreak chain.
//!
//! Teams are ordered by the first criterion of the chain; every run of teams
//! still level is then ordered by the next criterion, and so on. The chain
//! always ends with [`TiebreakCriterion::InputOrder`], so the result is a
//! strict total order for any input.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::head_to_head::HeadToHeadIndex;
use crate::domain::{RankedStanding, SeedPosition, StandingsEntry};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TiebreakCriterion {
    /// Conference win percentage, descending
    ConferenceWinPct,
    /// Winner of the pair's conference meeting. Only for two-team ties.
    HeadToHead,
    /// External ranking ascending, unranked teams last
    ExternalRank,
    /// Position in the input
    InputOrder,
}

impl TiebreakCriterion {
    pub fn standard_chain() -> Vec<Self> {
        vec![
            TiebreakCriterion::ConferenceWinPct,
            TiebreakCriterion::HeadToHead,
            TiebreakCriterion::ExternalRank,
            TiebreakCriterion::InputOrder,
        ]
    }

    /// Head-to-head is skipped for three-or-more-way ties, which fall
    /// through to the next criterion
    pub fn applies_to(&self, tied_teams: usize) -> bool {
        match self {
            TiebreakCriterion::HeadToHead => tied_teams == 2,
            _ => true,
        }
    }

    pub fn describe(&self) -> &'static str {
        match self {
            TiebreakCriterion::ConferenceWinPct => "conference win percentage",
            TiebreakCriterion::HeadToHead => "head-to-head result",
            TiebreakCriterion::ExternalRank => "external ranking",
            TiebreakCriterion::InputOrder => "listing order",
        }
    }
}

/// Where a team landed and which criterion put it below the team above
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub index: usize,
    pub separated_by: Option<TiebreakCriterion>,
}

pub struct TiebreakResolver<'a> {
    head_to_head: &'a HeadToHeadIndex,
    chain: Vec<TiebreakCriterion>,
}

impl<'a> TiebreakResolver<'a> {
    pub fn new(head_to_head: &'a HeadToHeadIndex) -> Self {
        Self::with_chain(head_to_head, TiebreakCriterion::standard_chain())
    }

    /// Custom criteria order. Duplicates are dropped and input order is
    /// forced to be the last criterion.
    pub fn with_chain(head_to_head: &'a HeadToHeadIndex, criteria: Vec<TiebreakCriterion>) -> Self {
        let mut chain: Vec<TiebreakCriterion> = Vec::with_capacity(criteria.len() + 1);
        for criterion in criteria {
            if criterion != TiebreakCriterion::InputOrder && !chain.contains(&criterion) {
                chain.push(criterion);
            }
        }
        chain.push(TiebreakCriterion::InputOrder);
        Self { head_to_head, chain }
    }

    pub fn chain(&self) -> &[TiebreakCriterion] {
        &self.chain
    }

    /// Compares two teams as an isolated two-team tie. `a_index` and
    /// `b_index` are their input positions.
    pub fn compare_pair(
        &self,
        a: &StandingsEntry,
        a_index: usize,
        b: &StandingsEntry,
        b_index: usize,
    ) -> Ordering {
        self.chain
            .iter()
            .filter(|criterion| criterion.applies_to(2))
            .map(|criterion| self.compare_by(*criterion, (a, a_index), (b, b_index)))
            .find(|ordering| ordering.is_ne())
            .unwrap_or(Ordering::Equal)
    }

    /// Orders `entries` from first to last. Input order is the slice order.
    pub fn rank(&self, entries: &[StandingsEntry]) -> Vec<Placement> {
        let all: Vec<usize> = (0..entries.len()).collect();
        self.resolve(entries, all, &self.chain)
    }

    /// 1-indexed position of `entries[index]` after ranking
    pub fn position_of(&self, entries: &[StandingsEntry], index: usize) -> SeedPosition {
        self.rank(entries)
            .iter()
            .position(|placement| placement.index == index)
            .map_or(entries.len(), |position| position + 1)
    }

    /// Full standings table with positions and tiebreak explanations
    pub fn standings(&self, entries: &[StandingsEntry]) -> Vec<RankedStanding> {
        let placements = self.rank(entries);
        placements
            .iter()
            .enumerate()
            .map(|(position, placement)| {
                let entry = &entries[placement.index];
                RankedStanding {
                    rank_position: position + 1,
                    entry: entry.clone(),
                    tiebreaker: self.explain(placement, entry),
                }
            })
            .collect()
    }

    fn explain(&self, placement: &Placement, entry: &StandingsEntry) -> Option<String> {
        let criterion = placement.separated_by?;
        let primary = self.chain.first().copied();
        if primary == Some(criterion) && criterion != TiebreakCriterion::InputOrder {
            return None;
        }

        let detail = match criterion {
            TiebreakCriterion::ExternalRank => match entry.external_rank {
                Some(rank) => format!(" (#{})", rank),
                None => " (unranked)".to_string(),
            },
            _ => String::new(),
        };
        let tied_on = match primary {
            Some(first) if first != criterion => first.describe(),
            _ => "every criterion",
        };
        Some(format!(
            "Tied on {}. Separated by {}{}",
            tied_on,
            criterion.describe(),
            detail
        ))
    }

    fn resolve(
        &self,
        entries: &[StandingsEntry],
        mut group: Vec<usize>,
        criteria: &[TiebreakCriterion],
    ) -> Vec<Placement> {
        let Some((criterion, rest)) = criteria.split_first() else {
            // The chain ends with input order, which never leaves two teams level
            debug_assert!(group.len() <= 1, "tiebreak chain exhausted");
            return group.into_iter().map(leading).collect();
        };
        if group.len() <= 1 {
            return group.into_iter().map(leading).collect();
        }
        if !criterion.applies_to(group.len()) {
            return self.resolve(entries, group, rest);
        }

        let compare = |a: usize, b: usize| {
            self.compare_by(*criterion, (&entries[a], a), (&entries[b], b))
        };
        group.sort_by(|&a, &b| compare(a, b));

        let mut placements = Vec::with_capacity(group.len());
        let mut run: Vec<usize> = Vec::new();
        for index in group {
            let starts_new_run = run.last().is_some_and(|&last| compare(last, index).is_ne());
            if starts_new_run {
                self.place_run(entries, std::mem::take(&mut run), *criterion, rest, &mut placements);
            }
            run.push(index);
        }
        self.place_run(entries, run, *criterion, rest, &mut placements);
        placements
    }

    fn place_run(
        &self,
        entries: &[StandingsEntry],
        run: Vec<usize>,
        criterion: TiebreakCriterion,
        rest: &[TiebreakCriterion],
        placements: &mut Vec<Placement>,
    ) {
        let is_first_run = placements.is_empty();
        let mut placed = self.resolve(entries, run, rest);
        if !is_first_run {
            if let Some(first) = placed.first_mut() {
                first.separated_by = Some(criterion);
            }
        }
        placements.extend(placed);
    }

    fn compare_by(
        &self,
        criterion: TiebreakCriterion,
        (a, a_index): (&StandingsEntry, usize),
        (b, b_index): (&StandingsEntry, usize),
    ) -> Ordering {
        match criterion {
            TiebreakCriterion::ConferenceWinPct => b.record.cmp_conf_pct(&a.record),
            TiebreakCriterion::HeadToHead => {
                match self.head_to_head.conference_winner(&a.team.id, &b.team.id) {
                    Some(winner) if *winner == a.team.id => Ordering::Less,
                    Some(winner) if *winner == b.team.id => Ordering::Greater,
                    _ => Ordering::Equal,
                }
            }
            TiebreakCriterion::ExternalRank => compare_ranks(a.external_rank, b.external_rank),
            TiebreakCriterion::InputOrder => a_index.cmp(&b_index),
        }
    }
}

fn leading(index: usize) -> Placement {
    Placement {
        index,
        separated_by: None,
    }
}

// Nulls last
fn compare_ranks(a: Option<u32>, b: Option<u32>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
