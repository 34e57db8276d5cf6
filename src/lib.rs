//! Two-player 8x8 Reversi engine with pluggable agents and a deadline-bound
//! turn orchestrator.

pub mod core;
pub mod display;
pub mod error;
pub mod game;
pub mod logic;
pub mod player;
pub mod selfplay;

#[cfg(test)]
mod logic_tests;

pub use crate::core::{Board, Cell, Color, Move, Position};
pub use crate::error::{DisqualifyReason, RulesError};
pub use crate::game::{Game, GameConfig, MatchState, Outcome, TurnPhase};
pub use crate::player::{Agent, MoveEngine, MoveSource};
