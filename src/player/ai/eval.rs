//! # Evaluation Module
//!
//! Static evaluation of a board snapshot. The score is always from Black's
//! perspective (positive = Black advantage, negative = White advantage) and
//! depends on nothing but the board.
//!
//! ## Scoring Strategy
//! Six terms, each normalised to roughly ±100, combined with fixed weights:
//! 1. **Piece differential**: share of disks held by the leader.
//! 2. **Corner occupancy**: ±25 per owned corner.
//! 3. **Corner adjacency**: disks next to an *empty* corner are liabilities.
//! 4. **Mobility**: share of legal moves held by the more mobile side.
//! 5. **Frontier**: share of frontier disks, penalised.
//! 6. **Disk squares**: static per-cell table from `pst`.

use super::config::EvaluationConfig;
use crate::core::{Board, Cell, Color, Position};
use crate::logic::{legal_moves, DIRECTIONS};
use crate::player::ai::pst::get_pst_value;

const CORNERS: [(usize, usize); 4] = [(0, 0), (0, 7), (7, 0), (7, 7)];

// 角ごとの隣接マス (C, X, C)
const CORNER_NEIGHBOURS: [[(usize, usize); 3]; 4] = [
    [(0, 1), (1, 1), (1, 0)],
    [(0, 6), (1, 6), (1, 7)],
    [(6, 0), (6, 1), (7, 1)],
    [(7, 6), (6, 6), (6, 7)],
];

/// Signed share of `black + white` held by whoever has more, ±100 at most.
fn share(black: usize, white: usize) -> f64 {
    let total = (black + white) as f64;
    if black > white {
        100.0 * black as f64 / total
    } else if black < white {
        -100.0 * white as f64 / total
    } else {
        0.0
    }
}

fn tally(board: &Board, cells: impl Iterator<Item = Position>) -> (usize, usize) {
    cells.fold((0, 0), |(b, w), pos| match board.get(pos) {
        Cell::Black => (b + 1, w),
        Cell::White => (b, w + 1),
        Cell::Empty => (b, w),
    })
}

pub fn piece_differential(board: &Board) -> f64 {
    share(board.count(Color::Black), board.count(Color::White))
}

pub fn corner_occupancy(board: &Board) -> f64 {
    let (b, w) = tally(board, CORNERS.iter().map(|&(r, c)| Position::new(r, c)));
    25.0 * b as f64 - 25.0 * w as f64
}

pub fn corner_adjacency(board: &Board) -> f64 {
    let mut exposed = Vec::new();
    for (i, &(r, c)) in CORNERS.iter().enumerate() {
        // 角が空いているときだけ
        if board.get(Position::new(r, c)).is_empty() {
            exposed.extend(CORNER_NEIGHBOURS[i].iter().map(|&(r, c)| Position::new(r, c)));
        }
    }
    let (b, w) = tally(board, exposed.into_iter());
    -12.5 * b as f64 + 12.5 * w as f64
}

pub fn mobility(board: &Board) -> f64 {
    share(
        legal_moves(board, Color::Black).len(),
        legal_moves(board, Color::White).len(),
    )
}

/// 空きマスに接している石 (frontier disk) か
fn is_frontier(board: &Board, pos: Position) -> bool {
    DIRECTIONS.iter().any(|&(dr, dc)| {
        pos.offset(dr, dc)
            .map(|n| board.get(n).is_empty())
            .unwrap_or(false)
    })
}

pub fn frontier(board: &Board) -> f64 {
    let (b, w) = tally(
        board,
        Position::all().filter(|&pos| !board.get(pos).is_empty() && is_frontier(board, pos)),
    );
    // frontier が多い側が不利
    -share(b, w)
}

pub fn disk_squares(board: &Board) -> f64 {
    Position::all()
        .filter_map(|pos| {
            board
                .get(pos)
                .occupant()
                .map(|color| color.sign() * get_pst_value(pos) as f64)
        })
        .sum()
}

/// Weighted sum of the six terms, Black-positive.
pub fn evaluate(board: &Board, weights: &EvaluationConfig) -> f64 {
    weights.piece * piece_differential(board)
        + weights.corner * corner_occupancy(board)
        + weights.corner_adjacency * corner_adjacency(board)
        + weights.mobility * mobility(board)
        + weights.frontier * frontier(board)
        + weights.disk_square * disk_squares(board)
}
