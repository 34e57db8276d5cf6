use crate::core::{Board, Color, Move, Position};
use crate::player::MoveSource;
use std::sync::mpsc;

/// 人間プレイヤー: 外部の入力元から同期的に指し手を受け取る
pub struct HumanController {
    name: String,
    source: Box<dyn MoveSource>,
}

impl HumanController {
    pub fn new(name: &str, source: impl MoveSource + 'static) -> Self {
        Self {
            name: name.to_string(),
            source: Box::new(source),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn request_move(&mut self, board: &Board, color: Color, legal: &[Position]) -> Option<Move> {
        self.source.next_move(board, color, legal)
    }

    pub fn reject(&mut self, mv: Move) {
        self.source.rejected(mv);
    }
}

/// Moves pushed from another thread (UI loop, network task, tests).
pub struct ChannelSource {
    rx: mpsc::Receiver<Move>,
    rejected: Vec<Move>,
}

impl ChannelSource {
    pub fn new(rx: mpsc::Receiver<Move>) -> Self {
        Self {
            rx,
            rejected: Vec::new(),
        }
    }

    pub fn pair() -> (mpsc::Sender<Move>, Self) {
        let (tx, rx) = mpsc::channel();
        (tx, Self::new(rx))
    }

    pub fn rejected_moves(&self) -> &[Move] {
        &self.rejected
    }
}

impl MoveSource for ChannelSource {
    fn next_move(&mut self, _board: &Board, _color: Color, _legal: &[Position]) -> Option<Move> {
        // Block until the sender delivers a move
        self.rx.recv().ok()
    }

    fn rejected(&mut self, mv: Move) {
        log::warn!("rejected human move {}", mv);
        self.rejected.push(mv);
    }
}
