use crate::core::{Board, Color};
use crate::game::Outcome;

/// Read-only view handed to the display after every turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snapshot {
    pub board: Board,
    pub active: Color,
    pub black: usize,
    pub white: usize,
}

impl Snapshot {
    pub fn new(board: Board, active: Color) -> Self {
        Self {
            board,
            active,
            black: board.count(Color::Black),
            white: board.count(Color::White),
        }
    }
}

/// 描画側 (端末, GUI など) との境界
pub trait DisplaySink {
    fn update(&mut self, snapshot: &Snapshot);
    fn finished(&mut self, snapshot: &Snapshot, outcome: &Outcome);
}

/// Discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullDisplay;

impl DisplaySink for NullDisplay {
    fn update(&mut self, _snapshot: &Snapshot) {}
    fn finished(&mut self, _snapshot: &Snapshot, _outcome: &Outcome) {}
}

/// Writes the board through `log` (`#` black, `.` white).
#[derive(Debug, Default, Clone, Copy)]
pub struct LogDisplay;

impl DisplaySink for LogDisplay {
    fn update(&mut self, snapshot: &Snapshot) {
        log::debug!(
            "\n{}Black: {} disks, White: {} disks, {} to move",
            snapshot.board,
            snapshot.black,
            snapshot.white,
            snapshot.active
        );
    }

    fn finished(&mut self, snapshot: &Snapshot, outcome: &Outcome) {
        log::info!(
            "Results\n{}Black: {} disks, White: {} disks\n{}",
            snapshot.board,
            snapshot.black,
            snapshot.white,
            outcome
        );
    }
}
