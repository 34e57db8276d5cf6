use crate::core::{Board, Color, Move, Position};

/// 自動プレイヤーの trait
///
/// Implementations run on a worker thread against their own copy of the
/// board, so they must not rely on shared mutable state.
pub trait MoveEngine: Send + Sync {
    /// Best move for `color` on `board`; `Move::Pass` only when nothing is legal.
    fn choose_move(&self, board: &Board, color: Color) -> Move;
    fn name(&self) -> &str;
}

/// 人間プレイヤーの入力元 (キーボード, GUI など外部)
pub trait MoveSource: Send {
    /// `None` when the input side has gone away for good.
    fn next_move(&mut self, board: &Board, color: Color, legal: &[Position]) -> Option<Move>;

    /// Called after a move was refused, before the next `next_move`.
    fn rejected(&mut self, _mv: Move) {}
}
