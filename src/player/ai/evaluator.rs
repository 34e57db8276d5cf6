//! Evaluator trait for board evaluation
//!
//! Defines a common interface for different evaluation strategies.

use super::config::{AIConfig, EvaluationConfig};
use super::eval;
use crate::core::{Board, Color};

/// Trait for evaluating board positions
pub trait Evaluator: Send + Sync {
    /// Evaluate the board from Black's perspective
    ///
    /// Returns:
    ///   - Positive score: Black advantage
    ///   - Negative score: White advantage
    ///   - Zero: Equal position
    fn evaluate(&self, board: &Board) -> f64;

    /// Get evaluator name for debugging
    fn name(&self) -> &str;
}

/// The six-term weighted heuristic from `eval`.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicEvaluator {
    weights: EvaluationConfig,
}

impl HeuristicEvaluator {
    pub fn new(weights: EvaluationConfig) -> Self {
        Self { weights }
    }

    pub fn from_config(config: &AIConfig) -> Self {
        Self::new(config.evaluation)
    }

    pub fn weights(&self) -> &EvaluationConfig {
        &self.weights
    }
}

impl Evaluator for HeuristicEvaluator {
    fn evaluate(&self, board: &Board) -> f64 {
        eval::evaluate(board, &self.weights)
    }

    fn name(&self) -> &str {
        "heuristic"
    }
}

/// Plain disk difference. Handy as a transparent baseline.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiskCountEvaluator;

impl Evaluator for DiskCountEvaluator {
    fn evaluate(&self, board: &Board) -> f64 {
        board.count(Color::Black) as f64 - board.count(Color::White) as f64
    }

    fn name(&self) -> &str {
        "disk-count"
    }
}
