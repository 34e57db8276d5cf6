use anyhow::Context;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub const CONFIG_PATH: &str = "ai_config.json";

static CONFIG: Lazy<AIConfig> = Lazy::new(AIConfig::load_or_default);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AIConfig {
    pub version: String,
    pub evaluation: EvaluationConfig,
    pub search: SearchConfig,
    pub timing: TimingConfig,
}

/// 評価関数の重み
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluationConfig {
    pub piece: f64,
    pub corner: f64,
    pub corner_adjacency: f64,
    pub mobility: f64,
    pub frontier: f64,
    pub disk_square: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Subtracted from the move deadline to get the search's own budget.
    pub safety_margin_ms: u64,
    pub max_depth: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Wall-clock limit per automated turn, enforced by the orchestrator.
    pub move_deadline_ms: u64,
}

impl Default for AIConfig {
    fn default() -> Self {
        AIConfig {
            version: "1.0".to_string(),
            evaluation: EvaluationConfig::default(),
            search: SearchConfig::default(),
            timing: TimingConfig::default(),
        }
    }
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        // 角と角周りを石数より重く見る
        EvaluationConfig {
            piece: 10.0,
            corner: 801.724,
            corner_adjacency: 382.026,
            mobility: 78.922,
            frontier: 74.396,
            disk_square: 10.0,
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            safety_margin_ms: 1000,
            max_depth: None,
        }
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        TimingConfig {
            move_deadline_ms: 10_000,
        }
    }
}

impl AIConfig {
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(CONFIG_PATH)
    }

    pub fn load_from(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let config_str = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let config: AIConfig = serde_json::from_str(&config_str)
            .with_context(|| format!("parsing {}", path.display()))?;
        Ok(config)
    }

    pub fn load_or_default() -> Self {
        match Self::load() {
            Ok(config) => config,
            Err(e) => {
                log::debug!("using default AI config: {:#}", e);
                Self::default()
            }
        }
    }

    /// Process-wide config, read from `ai_config.json` on first access.
    pub fn get() -> &'static AIConfig {
        &CONFIG
    }

    pub fn move_deadline(&self) -> Duration {
        Duration::from_millis(self.timing.move_deadline_ms)
    }

    /// Private search budget, always strictly below the move deadline.
    pub fn search_budget(&self) -> Duration {
        let margin = self.search.safety_margin_ms.max(1);
        Duration::from_millis(self.timing.move_deadline_ms.saturating_sub(margin))
    }
}
