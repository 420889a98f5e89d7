use serde::Serialize;
use thiserror::Error;

use super::models::TeamId;

/// Why a single input record was left out of the computation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RejectionReason {
    #[error("unknown team '{team}'")]
    UnknownTeam { team: TeamId },
    #[error("team is listed against itself")]
    SelfMatch,
    #[error("winner '{winner}' did not play in this match")]
    WinnerNotParticipant { winner: TeamId },
    #[error("conference match involves non-pool team '{team}'")]
    ConferenceOutsidePool { team: TeamId },
    #[error("no pool team involved")]
    NoPoolTeam,
    #[error("duplicate team '{team}'")]
    DuplicateTeam { team: TeamId },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[error("rejected {record}: {reason}")]
pub struct Rejection {
    pub record: String,
    pub reason: RejectionReason,
}

impl Rejection {
    pub fn new(record: impl Into<String>, reason: RejectionReason) -> Self {
        Self {
            record: record.into(),
            reason,
        }
    }
}
