//! Error kinds shared by the rules engine and the match orchestrator.

use crate::core::{Color, Position};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 盤面ルール違反
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RulesError {
    /// The placement does not bracket any opponent run.
    #[error("{color} cannot play {position}: the move captures nothing")]
    InvalidMove { position: Position, color: Color },
}

/// Why a color was removed from the match. Every variant is fatal for that
/// color's participation, never for the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Error)]
pub enum DisqualifyReason {
    #[error("exceeded the move deadline")]
    Timeout,
    #[error("played an illegal move")]
    IllegalMove,
    #[error("passed while legal moves existed")]
    IllegalPass,
    /// The worker died or the move source went away. Handled like `Timeout`.
    #[error("agent terminated abnormally")]
    AgentCrash,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot parse move `{0}`: expected a1..h8 or `pass`")]
pub struct ParseMoveError(pub String);
