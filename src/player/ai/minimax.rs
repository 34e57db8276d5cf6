use super::evaluator::{Evaluator, HeuristicEvaluator};
use crate::core::{Board, Color, Move, Position};
use crate::logic::{legal_moves, play};
use crate::player::MoveEngine;

/// Fixed-depth, full-width minimax with no pruning and no clock.
///
/// Slow, but its value is the reference the alpha-beta searcher must match.
pub struct MinimaxAI<E: Evaluator = HeuristicEvaluator> {
    pub name: String,
    pub depth: usize,
    evaluator: E,
}

impl MinimaxAI<HeuristicEvaluator> {
    pub fn new(name: &str, depth: usize) -> Self {
        Self::with_evaluator(name, depth, HeuristicEvaluator::default())
    }
}

impl<E: Evaluator> MinimaxAI<E> {
    pub fn with_evaluator(name: &str, depth: usize, evaluator: E) -> Self {
        Self {
            name: name.to_string(),
            depth: depth.max(1),
            evaluator,
        }
    }

    fn minimax(&self, board: &Board, ply: usize, to_move: Color) -> f64 {
        if ply >= self.depth {
            return self.evaluator.evaluate(board);
        }

        let mut current = to_move;
        let mut moves = legal_moves(board, current);
        if moves.is_empty() {
            // パス
            current = current.opponent();
            moves = legal_moves(board, current);
            if moves.is_empty() {
                return self.evaluator.evaluate(board);
            }
        }

        let is_maximizing = current == Color::Black;
        let children = moves.into_iter().filter_map(|mv| play(board, mv, current).ok());

        if is_maximizing {
            let mut max_eval = f64::NEG_INFINITY;
            for next_board in children {
                let eval = self.minimax(&next_board, ply + 1, current.opponent());
                max_eval = max_eval.max(eval);
            }
            max_eval
        } else {
            let mut min_eval = f64::INFINITY;
            for next_board in children {
                let eval = self.minimax(&next_board, ply + 1, current.opponent());
                min_eval = min_eval.min(eval);
            }
            min_eval
        }
    }

    /// Best root move and its exact minimax value; `None` if `color` must pass.
    pub fn minimax_root(&self, board: &Board, color: Color) -> Option<(Position, f64)> {
        let maximizing = color == Color::Black;
        let mut best: Option<(Position, f64)> = None;

        for mv in legal_moves(board, color) {
            let Ok(next_board) = play(board, mv, color) else {
                continue;
            };
            // 1 手目は打ったので次は相手番
            let value = self.minimax(&next_board, 1, color.opponent());
            let better = match best {
                None => true,
                Some((_, v)) if maximizing => value > v,
                Some((_, v)) => value < v,
            };
            if better {
                best = Some((mv, value));
            }
        }

        best
    }
}

impl<E: Evaluator> MoveEngine for MinimaxAI<E> {
    fn choose_move(&self, board: &Board, color: Color) -> Move {
        self.minimax_root(board, color)
            .map_or(Move::Pass, |(mv, _)| Move::Place(mv))
    }

    fn name(&self) -> &str {
        &self.name
    }
}
