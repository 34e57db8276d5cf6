//! Turn orchestrator.
//!
//! Owns the live board and match state, asks the active agent for a move,
//! validates it against the legal set computed before asking, and applies
//! it. Automated agents run on a fresh worker thread per turn against a copy
//! of the board and race a wall-clock deadline; a late, crashed or illegal
//! answer disqualifies that color. Human agents are asked synchronously and
//! re-prompted on illegal input.

use crate::core::{Board, Color, Move, Position};
use crate::display::{DisplaySink, Snapshot};
use crate::error::DisqualifyReason;
use crate::logic::{apply_move, leader, legal_moves};
use crate::player::ai::AIConfig;
use crate::player::{Agent, HumanController, MoveEngine};

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::oneshot;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Wall-clock limit per automated turn.
    pub move_deadline: Duration,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            move_deadline: Duration::from_secs(10),
        }
    }
}

impl GameConfig {
    pub fn from_ai_config(config: &AIConfig) -> Self {
        Self {
            move_deadline: config.move_deadline(),
        }
    }
}

/// 対局結果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Pending,
    Winner(Color),
    Draw,
    /// `color` loses regardless of disk count.
    Disqualified {
        color: Color,
        reason: DisqualifyReason,
    },
}

impl Outcome {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::Pending)
    }

    pub fn winner(&self) -> Option<Color> {
        match self {
            Outcome::Winner(color) => Some(*color),
            Outcome::Disqualified { color, .. } => Some(color.opponent()),
            Outcome::Pending | Outcome::Draw => None,
        }
    }

    pub fn disqualification(&self) -> Option<(Color, DisqualifyReason)> {
        match self {
            Outcome::Disqualified { color, reason } => Some((*color, *reason)),
            _ => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Outcome::Pending => write!(f, "In progress"),
            Outcome::Winner(color) => write!(f, "{} wins", color),
            Outcome::Draw => write!(f, "Draw"),
            Outcome::Disqualified { color, reason } => write!(
                f,
                "{} wins ({} is disqualified: {})",
                color.opponent(),
                color,
                reason
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnPhase {
    AwaitingMove,
    Validating,
    Applying,
    Terminal,
}

/// Board, side to move, history and outcome. Only `Game` mutates it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchState {
    board: Board,
    active: Color,
    history: Vec<Move>,
    outcome: Outcome,
}

impl MatchState {
    fn new(board: Board, active: Color) -> Self {
        Self {
            board,
            active,
            history: Vec::new(),
            outcome: Outcome::Pending,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Color {
        self.active
    }

    pub fn history(&self) -> &[Move] {
        &self.history
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }
}

pub struct Game {
    state: MatchState,
    phase: TurnPhase,
    black: Agent,
    white: Agent,
    config: GameConfig,
}

impl Game {
    pub fn new(black: Agent, white: Agent, config: GameConfig) -> Self {
        Self::with_board(Board::new(), Color::Black, black, white, config)
    }

    /// Starts from an arbitrary position, e.g. a test scenario.
    pub fn with_board(
        board: Board,
        active: Color,
        black: Agent,
        white: Agent,
        config: GameConfig,
    ) -> Self {
        Game {
            state: MatchState::new(board, active),
            phase: TurnPhase::AwaitingMove,
            black,
            white,
            config,
        }
    }

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(self.state.board, self.state.active)
    }

    /// Plays turns until the match is decided.
    pub async fn play(&mut self, display: &mut dyn DisplaySink) -> Outcome {
        display.update(&self.snapshot());
        while !self.state.outcome.is_terminal() {
            self.play_turn().await;
            display.update(&self.snapshot());
        }
        display.finished(&self.snapshot(), &self.state.outcome);
        self.state.outcome
    }

    /// One turn: a forced pass, an applied move, or a terminal transition.
    pub async fn play_turn(&mut self) {
        if self.state.outcome.is_terminal() {
            return;
        }

        let active = self.state.active;
        let turn = self.state.history.len() + 1;
        info!("#{}: {}'s turn", turn, active);

        if self.state.board.is_full() {
            self.finish_by_count();
            return;
        }

        // 合法手はエージェントに聞く前に確定させる
        let legal = legal_moves(&self.state.board, active);
        if legal.is_empty() {
            info!("{} passes", active);
            let opponent_passed = self.state.history.last().is_some_and(Move::is_pass);
            self.state.history.push(Move::Pass);
            if opponent_passed {
                self.finish_by_count();
            } else {
                self.state.active = active.opponent();
            }
            return;
        }

        self.phase = TurnPhase::AwaitingMove;
        let board = self.state.board;
        let deadline = self.config.move_deadline;

        let chosen = match self.agent_mut(active) {
            Agent::Human(human) => match request_human_move(human, &board, active, &legal) {
                Some(pos) => Ok(pos),
                None => Err(DisqualifyReason::AgentCrash),
            },
            Agent::Automated(engine) => {
                let engine = Arc::clone(engine);
                match compute_with_deadline(engine, board, active, deadline).await {
                    Ok(mv) => validate_automated(mv, &legal),
                    Err(reason) => Err(reason),
                }
            }
        };
        self.phase = TurnPhase::Validating;

        let pos = match chosen {
            Ok(pos) => pos,
            Err(reason) => {
                self.disqualify(active, reason);
                return;
            }
        };

        self.phase = TurnPhase::Applying;
        match apply_move(&mut self.state.board, pos, active) {
            Ok(flipped) => {
                info!("{} moves {} ({} flipped)", active, pos, flipped);
                debug!(
                    "Black: {} disks, White: {} disks",
                    self.state.board.count(Color::Black),
                    self.state.board.count(Color::White)
                );
                self.state.history.push(Move::Place(pos));
                self.state.active = active.opponent();
                self.phase = TurnPhase::AwaitingMove;
            }
            Err(e) => {
                warn!("validated move failed to apply: {}", e);
                self.disqualify(active, DisqualifyReason::IllegalMove);
            }
        }
    }

    fn agent_mut(&mut self, color: Color) -> &mut Agent {
        match color {
            Color::Black => &mut self.black,
            Color::White => &mut self.white,
        }
    }

    fn disqualify(&mut self, color: Color, reason: DisqualifyReason) {
        warn!("{} is disqualified: {}", color, reason);
        self.conclude(Outcome::Disqualified { color, reason });
    }

    fn finish_by_count(&mut self) {
        let outcome = match leader(&self.state.board) {
            Some(color) => Outcome::Winner(color),
            None => Outcome::Draw,
        };
        self.conclude(outcome);
    }

    fn conclude(&mut self, outcome: Outcome) {
        debug_assert!(!self.state.outcome.is_terminal(), "outcome decided twice");
        info!("{}", outcome);
        self.state.outcome = outcome;
        self.phase = TurnPhase::Terminal;
    }
}

/// Asks until the human supplies a legal placement. `None` if the input
/// source is gone.
fn request_human_move(
    human: &mut HumanController,
    board: &Board,
    color: Color,
    legal: &[Position],
) -> Option<Position> {
    loop {
        let mv = human.request_move(board, color, legal)?;
        match mv {
            Move::Place(pos) if legal.contains(&pos) => return Some(pos),
            _ => {
                info!("{} tried {}, which is not legal; asking again", color, mv);
                human.reject(mv);
            }
        }
    }
}

fn validate_automated(mv: Move, legal: &[Position]) -> Result<Position, DisqualifyReason> {
    match mv {
        Move::Place(pos) if legal.contains(&pos) => Ok(pos),
        Move::Place(_) => Err(DisqualifyReason::IllegalMove),
        // Only reachable with legal moves available
        Move::Pass => Err(DisqualifyReason::IllegalPass),
    }
}

/// Runs the engine on its own thread and waits for the answer or the deadline.
///
/// The deadline wins ties. A worker that misses it is detached and its late
/// answer falls on a closed channel.
async fn compute_with_deadline(
    engine: Arc<dyn MoveEngine>,
    board: Board,
    color: Color,
    deadline: Duration,
) -> Result<Move, DisqualifyReason> {
    let (tx, rx) = oneshot::channel();
    let worker = format!("agent-{}", color);

    let spawned = std::thread::Builder::new()
        .name(worker.clone())
        .spawn(move || {
            let mv = engine.choose_move(&board, color);
            // 締め切り後なら受信側はもういない
            let _ = tx.send(mv);
        });
    if let Err(e) = spawned {
        warn!("could not start worker for {}: {}", color, e);
        return Err(DisqualifyReason::AgentCrash);
    }

    tokio::select! {
        biased;
        _ = tokio::time::sleep(deadline) => {
            // スレッドは止められないので切り離すだけ
            warn!(
                "worker thread {} missed its {}ms deadline and is abandoned",
                worker,
                deadline.as_millis()
            );
            Err(DisqualifyReason::Timeout)
        }
        answer = rx => answer.map_err(|_| DisqualifyReason::AgentCrash),
    }
}
