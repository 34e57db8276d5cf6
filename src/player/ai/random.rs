use crate::core::{Board, Color, Move};
use crate::logic::legal_moves;
use crate::player::MoveEngine;
use rand::seq::SliceRandom;

pub struct RandomAI {
    pub name: String,
}

impl RandomAI {
    pub fn new(name: &str) -> Self {
        RandomAI {
            name: name.to_string(),
        }
    }
}

impl MoveEngine for RandomAI {
    fn name(&self) -> &str {
        &self.name
    }

    fn choose_move(&self, board: &Board, color: Color) -> Move {
        let mut rng = rand::thread_rng();
        legal_moves(board, color)
            .choose(&mut rng)
            .map_or(Move::Pass, |&pos| Move::Place(pos))
    }
}
