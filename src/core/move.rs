use super::types::{Position, BOARD_SIZE};
use crate::error::ParseMoveError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 指し手: 着手またはパス
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    Place(Position),
    /// Only legal when the mover has no placement available.
    Pass,
}

impl Move {
    pub fn position(&self) -> Option<Position> {
        match self {
            Move::Place(pos) => Some(*pos),
            Move::Pass => None,
        }
    }

    pub fn is_pass(&self) -> bool {
        matches!(self, Move::Pass)
    }
}

impl From<Position> for Move {
    fn from(pos: Position) -> Self {
        Move::Place(pos)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Move::Place(pos) => write!(f, "{}", pos),
            Move::Pass => write!(f, "pass"),
        }
    }
}

impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().to_lowercase();
        if trimmed == "pass" {
            return Ok(Move::Pass);
        }

        let bytes = trimmed.as_bytes();
        if bytes.len() != 2 {
            return Err(ParseMoveError(s.to_string()));
        }
        let col = bytes[0].wrapping_sub(b'a') as usize;
        let row = bytes[1].wrapping_sub(b'1') as usize;
        if col >= BOARD_SIZE || row >= BOARD_SIZE {
            return Err(ParseMoveError(s.to_string()));
        }
        Ok(Move::Place(Position::new(row, col)))
    }
}
