use othello_arena::display::LogDisplay;
use othello_arena::player::ai::AIConfig;
use othello_arena::player::{Agent, AlphaBetaAI, RandomAI};
use othello_arena::selfplay::{run_selfplay, SelfPlayConfig};
use othello_arena::{Game, GameConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let ai_config = AIConfig::get().clone();
    log::info!(
        "move deadline {}ms, search budget {}ms",
        ai_config.move_deadline().as_millis(),
        ai_config.search_budget().as_millis()
    );

    // 展示対局: 探索 AI (黒) vs ランダム (白)
    let mut game = Game::new(
        Agent::automated(AlphaBetaAI::from_config("AlphaBeta", &ai_config)),
        Agent::automated(RandomAI::new("Random")),
        GameConfig::from_ai_config(&ai_config),
    );
    let outcome = game.play(&mut LogDisplay).await;
    println!("{}", outcome);

    let stats = run_selfplay(SelfPlayConfig {
        ai_config,
        ..SelfPlayConfig::default()
    })
    .await?;
    println!("{}", serde_json::to_string_pretty(&stats)?);

    Ok(())
}
