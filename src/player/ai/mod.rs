pub mod alpha_beta;
pub mod config;
pub mod eval;
pub mod evaluator;
pub mod external;
pub mod minimax;
pub mod pst;
pub mod random;

pub use alpha_beta::{AlphaBetaAI, SearchReport};
pub use config::AIConfig;
pub use evaluator::{DiskCountEvaluator, Evaluator, HeuristicEvaluator};
pub use external::ExternalEngine;
pub use minimax::MinimaxAI;
pub use random::RandomAI;
