use crate::core::Color;
use crate::display::NullDisplay;
use crate::game::{Game, GameConfig, Outcome};
use crate::player::ai::AIConfig;
use crate::player::{Agent, AlphaBetaAI, MinimaxAI, MoveEngine, RandomAI};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;

/// 自己対局に使うエンジンの種類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineKind {
    AlphaBeta,
    Minimax { depth: usize },
    Random,
}

impl EngineKind {
    pub fn build(&self, name: &str, ai_config: &AIConfig) -> Arc<dyn MoveEngine> {
        match *self {
            EngineKind::AlphaBeta => Arc::new(AlphaBetaAI::from_config(name, ai_config)),
            EngineKind::Minimax { depth } => Arc::new(MinimaxAI::new(name, depth)),
            EngineKind::Random => Arc::new(RandomAI::new(name)),
        }
    }
}

pub struct SelfPlayConfig {
    pub num_games: usize,
    pub engine_a: EngineKind,
    pub engine_b: EngineKind,
    pub ai_config: AIConfig,
}

impl Default for SelfPlayConfig {
    fn default() -> Self {
        Self {
            num_games: 2,
            engine_a: EngineKind::AlphaBeta,
            engine_b: EngineKind::Random,
            ai_config: AIConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameResult {
    pub black: String,
    pub white: String,
    pub outcome: Outcome,
    pub moves: usize,
    pub black_disks: usize,
    pub white_disks: usize,
    pub time_ms: u128,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SelfPlayStats {
    pub total_games: usize,
    pub a_wins: usize,
    pub b_wins: usize,
    pub draws: usize,
    pub disqualifications: usize,
    pub avg_moves: f64,
    pub avg_time_ms: f64,
    pub engine_a: String,
    pub engine_b: String,
    pub games: Vec<GameResult>,
}

impl SelfPlayStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// `a_color` is the color engine A held in this game.
    pub fn add_result(&mut self, result: GameResult, a_color: Color) {
        self.total_games += 1;
        match result.outcome.winner() {
            Some(color) if color == a_color => self.a_wins += 1,
            Some(_) => self.b_wins += 1,
            None => self.draws += 1,
        }
        if result.outcome.disqualification().is_some() {
            self.disqualifications += 1;
        }
        self.games.push(result);
        self.recalculate_averages();
    }

    fn recalculate_averages(&mut self) {
        if self.games.is_empty() {
            return;
        }
        let total_moves: usize = self.games.iter().map(|g| g.moves).sum();
        let total_time: u128 = self.games.iter().map(|g| g.time_ms).sum();
        self.avg_moves = total_moves as f64 / self.games.len() as f64;
        self.avg_time_ms = total_time as f64 / self.games.len() as f64;
    }
}

/// Plays `num_games` matches, swapping colors every game.
pub async fn run_selfplay(config: SelfPlayConfig) -> anyhow::Result<SelfPlayStats> {
    anyhow::ensure!(config.num_games > 0, "self-play needs at least one game");

    let mut stats = SelfPlayStats::new();
    stats.engine_a = format!("{:?}", config.engine_a);
    stats.engine_b = format!("{:?}", config.engine_b);
    let game_config = GameConfig::from_ai_config(&config.ai_config);

    for game_num in 1..=config.num_games {
        let start_time = Instant::now();

        // 偶数局目は色を入れ替える
        let a_color = if game_num % 2 == 1 {
            Color::Black
        } else {
            Color::White
        };
        let a = config.engine_a.build("A", &config.ai_config);
        let b = config.engine_b.build("B", &config.ai_config);
        let (black, white) = match a_color {
            Color::Black => (a, b),
            Color::White => (b, a),
        };
        let black_name = black.name().to_string();
        let white_name = white.name().to_string();

        let mut game = Game::new(
            Agent::Automated(black),
            Agent::Automated(white),
            game_config,
        );
        let outcome = game.play(&mut NullDisplay).await;

        let board = game.state().board();
        let result = GameResult {
            black: black_name,
            white: white_name,
            outcome,
            moves: game.state().history().len(),
            black_disks: board.count(Color::Black),
            white_disks: board.count(Color::White),
            time_ms: start_time.elapsed().as_millis(),
        };
        log::info!(
            "Game {}/{}: {} ({} moves, {:.1}s)",
            game_num,
            config.num_games,
            outcome,
            result.moves,
            start_time.elapsed().as_secs_f64()
        );
        stats.add_result(result, a_color);
    }

    Ok(stats)
}
