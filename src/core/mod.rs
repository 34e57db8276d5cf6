pub mod board;
pub mod r#move;
pub mod setup;
pub mod types;

pub use board::Board;
pub use r#move::Move;
pub use setup::setup_from_strings;
pub use types::{Cell, Color, Position, BOARD_SIZE, CELL_COUNT};
