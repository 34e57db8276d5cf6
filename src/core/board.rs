use super::types::{Cell, Color, Position, BOARD_SIZE, CELL_COUNT};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 盤面 (8x8)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Standard opening: White on d4/e5, Black on e4/d5.
    pub fn new() -> Self {
        let mut board = Self::empty();
        board.set(Position::new(3, 3), Cell::White);
        board.set(Position::new(3, 4), Cell::Black);
        board.set(Position::new(4, 3), Cell::Black);
        board.set(Position::new(4, 4), Cell::White);
        board
    }

    pub fn empty() -> Self {
        Board {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.row][pos.col]
    }

    /// Raw write. Outside of setup code, go through `logic::apply_move`.
    pub(crate) fn set(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.row][pos.col] = cell;
    }

    pub fn count(&self, color: Color) -> usize {
        let target = Cell::from(color);
        self.cells
            .iter()
            .flat_map(|row| row.iter())
            .filter(|&&c| c == target)
            .count()
    }

    pub fn total_count(&self) -> usize {
        self.cells
            .iter()
            .flat_map(|row| row.iter())
            .filter(|c| !c.is_empty())
            .count()
    }

    pub fn empty_count(&self) -> usize {
        CELL_COUNT - self.total_count()
    }

    pub fn is_full(&self) -> bool {
        self.total_count() == CELL_COUNT
    }

    pub fn rows(&self) -> &[[Cell; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    /// Integer grid for foreign move generators: 0 empty, 1 black, 2 white.
    pub fn to_codes(&self) -> [[i32; BOARD_SIZE]; BOARD_SIZE] {
        let mut codes = [[0; BOARD_SIZE]; BOARD_SIZE];
        for pos in Position::all() {
            codes[pos.row][pos.col] = match self.get(pos) {
                Cell::Empty => 0,
                Cell::Black => 1,
                Cell::White => 2,
            };
        }
        codes
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "  a b c d e f g h")?;
        for (r, row) in self.cells.iter().enumerate() {
            write!(f, "{}", r + 1)?;
            for cell in row {
                let c = match cell {
                    Cell::Empty => '-',
                    Cell::Black => '#',
                    Cell::White => '.',
                };
                write!(f, " {}", c)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
