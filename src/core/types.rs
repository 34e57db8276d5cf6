use serde::{Deserialize, Serialize};
use std::fmt;

/// 盤面サイズ (8x8 固定)
pub const BOARD_SIZE: usize = 8;
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// 手番の色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Color {
    #[default]
    Black, // 先手
    White, // 後手
}

impl Color {
    pub fn opponent(self) -> Color {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    /// Sign of this color's contribution to a Black-positive score.
    pub fn sign(self) -> f64 {
        match self {
            Color::Black => 1.0,
            Color::White => -1.0,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Color::Black => write!(f, "Black"),
            Color::White => write!(f, "White"),
        }
    }
}

/// マスの状態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Black,
    White,
}

impl Cell {
    pub fn occupant(self) -> Option<Color> {
        match self {
            Cell::Empty => None,
            Cell::Black => Some(Color::Black),
            Cell::White => Some(Color::White),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

impl From<Color> for Cell {
    fn from(color: Color) -> Self {
        match color {
            Color::Black => Cell::Black,
            Color::White => Cell::White,
        }
    }
}

/// 盤面座標 (0-indexed, row-major)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// Panics when the coordinate lies outside the 8x8 grid.
    pub fn new(row: usize, col: usize) -> Self {
        assert!(
            row < BOARD_SIZE && col < BOARD_SIZE,
            "coordinate ({}, {}) is off the board",
            row,
            col
        );
        Position { row, col }
    }

    pub fn is_on_board(self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }

    /// Neighbour one step away in direction `(dr, dc)`, if still on the board.
    pub fn offset(self, dr: isize, dc: isize) -> Option<Position> {
        let row = self.row as isize + dr;
        let col = self.col as isize + dc;
        if (0..BOARD_SIZE as isize).contains(&row) && (0..BOARD_SIZE as isize).contains(&col) {
            Some(Position {
                row: row as usize,
                col: col as usize,
            })
        } else {
            None
        }
    }

    /// All 64 cells in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..CELL_COUNT).map(|i| Position {
            row: i / BOARD_SIZE,
            col: i % BOARD_SIZE,
        })
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // a1 .. h8 (列が文字, 行が数字)
        if !self.is_on_board() {
            return write!(f, "({}, {})", self.row, self.col);
        }
        let file = (b'a' + self.col as u8) as char;
        write!(f, "{}{}", file, self.row + 1)
    }
}
