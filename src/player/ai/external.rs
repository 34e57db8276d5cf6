//! Adapter for foreign move generators.
//!
//! The generator sees the board as an 8x8 `i32` grid (0 empty, 1 black,
//! 2 white), the mover's code and the seconds it may spend, and answers with
//! a packed move: `row = code & 63`, `col = (code >> 6) & 63`. A negative
//! code means pass. How the generator is loaded is up to the caller.

use crate::core::{Board, Color, Move, Position, BOARD_SIZE};
use crate::player::MoveEngine;
use std::time::Duration;

pub type Grid = [[i32; BOARD_SIZE]; BOARD_SIZE];

/// `(grid, color_code, seconds) -> packed move`
pub type FindMove = dyn Fn(&Grid, i32, f64) -> i32 + Send + Sync;

pub struct ExternalEngine {
    name: String,
    find_move: Box<FindMove>,
    time_limit: Duration,
}

impl ExternalEngine {
    pub fn new<F>(name: &str, time_limit: Duration, find_move: F) -> Self
    where
        F: Fn(&Grid, i32, f64) -> i32 + Send + Sync + 'static,
    {
        Self {
            name: name.to_string(),
            find_move: Box::new(find_move),
            time_limit,
        }
    }
}

pub fn color_code(color: Color) -> i32 {
    match color {
        Color::Black => 1,
        Color::White => 2,
    }
}

pub fn encode_move(pos: Position) -> i32 {
    (pos.row as i32) | ((pos.col as i32) << 6)
}

/// Decoded coordinates are not range-checked here; the orchestrator rejects
/// anything outside the legal set.
pub fn decode_move(code: i32) -> Move {
    if code < 0 {
        return Move::Pass;
    }
    Move::Place(Position {
        row: (code & 63) as usize,
        col: ((code >> 6) & 63) as usize,
    })
}

impl MoveEngine for ExternalEngine {
    fn choose_move(&self, board: &Board, color: Color) -> Move {
        let grid = board.to_codes();
        let code = (self.find_move)(&grid, color_code(color), self.time_limit.as_secs_f64());
        decode_move(code)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_packing() {
        let pos = Position::new(2, 5);
        assert_eq!(decode_move(encode_move(pos)), Move::Place(pos));
        assert_eq!(decode_move(-1), Move::Pass);
    }

    #[test]
    fn test_generator_sees_grid_and_color() {
        let engine = ExternalEngine::new("ext", Duration::from_secs(2), |grid, color, secs| {
            assert_eq!(grid[3][3], 2);
            assert_eq!(color, 1);
            assert!((secs - 2.0).abs() < 1e-9);
            encode_move(Position::new(2, 3))
        });
        assert_eq!(
            engine.choose_move(&Board::new(), Color::Black),
            Move::Place(Position::new(2, 3))
        );
    }

    #[test]
    fn test_out_of_range_code_is_not_clamped() {
        // row 9 は盤外のまま返す
        let mv = decode_move(9);
        assert_eq!(mv.position().map(|p| p.is_on_board()), Some(false));
    }
}
