pub mod ai;
pub mod controller;
pub mod human;

use std::sync::Arc;

pub use ai::{AlphaBetaAI, ExternalEngine, MinimaxAI, RandomAI};
pub use controller::{MoveEngine, MoveSource};
pub use human::{ChannelSource, HumanController};

/// 対局者: 人間 (同期, 時間制限なし) か自動 (別スレッド, 時間制限あり)
pub enum Agent {
    Human(HumanController),
    Automated(Arc<dyn MoveEngine>),
}

impl Agent {
    pub fn human(name: &str, source: impl MoveSource + 'static) -> Self {
        Agent::Human(HumanController::new(name, source))
    }

    pub fn automated(engine: impl MoveEngine + 'static) -> Self {
        Agent::Automated(Arc::new(engine))
    }

    pub fn name(&self) -> &str {
        match self {
            Agent::Human(h) => h.name(),
            Agent::Automated(e) => e.name(),
        }
    }

    pub fn is_human(&self) -> bool {
        matches!(self, Agent::Human(_))
    }
}
