use super::config::AIConfig;
use super::evaluator::{Evaluator, HeuristicEvaluator};
use super::pst::get_pst_value;
use crate::core::{Board, Color, Move, Position};
use crate::logic::{legal_moves, play};
use crate::player::MoveEngine;

use std::time::{Duration, Instant};

const INF: f64 = f64::INFINITY;

/// Result of the deepest fully completed iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchReport {
    pub best_move: Position,
    pub score: f64,
    pub depth: usize,
    pub nodes: u64,
    pub elapsed: Duration,
}

/// Time-boxed iterative-deepening alpha-beta searcher.
///
/// Black maximises, White minimises. The budget is checked at every node; a
/// layer interrupted by the budget is thrown away and the answer from the
/// previous completed layer is returned.
pub struct AlphaBetaAI<E: Evaluator = HeuristicEvaluator> {
    name: String,
    evaluator: E,
    time_limit: Duration,
    max_depth: Option<usize>,
}

/// 探索木のノード (1 手の計算中だけ存在する)
struct SearchNode {
    board: Board,
    depth: usize,
    mover: Color,
}

struct SearchContext<'a, E: Evaluator> {
    evaluator: &'a E,
    start: Instant,
    budget: Duration,
    check_time: bool,
    nodes: u64,
}

impl<E: Evaluator> SearchContext<'_, E> {
    fn out_of_time(&self) -> bool {
        self.check_time && self.start.elapsed() >= self.budget
    }
}

impl AlphaBetaAI<HeuristicEvaluator> {
    pub fn new(name: &str, time_limit: Duration) -> Self {
        Self::with_evaluator(name, HeuristicEvaluator::default(), time_limit)
    }

    pub fn from_config(name: &str, config: &AIConfig) -> Self {
        let mut ai = Self::with_evaluator(
            name,
            HeuristicEvaluator::from_config(config),
            config.search_budget(),
        );
        ai.max_depth = config.search.max_depth.map(|d| d.max(1));
        ai
    }
}

impl<E: Evaluator> AlphaBetaAI<E> {
    pub fn with_evaluator(name: &str, evaluator: E, time_limit: Duration) -> Self {
        Self {
            name: name.to_string(),
            evaluator,
            time_limit,
            max_depth: None,
        }
    }

    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth.max(1));
        self
    }

    pub fn time_limit(&self) -> Duration {
        self.time_limit
    }

    // --- Search Root (Iterative Deepening) ---

    /// `None` when `color` has no legal move (the caller should pass).
    pub fn analyze(&self, board: &Board, color: Color) -> Option<SearchReport> {
        if legal_moves(board, color).is_empty() {
            return None;
        }

        let start = Instant::now();
        // 残りの空きマス数より深くは読めない
        let max_plies = board.empty_count();
        // 最低でも 1 手は読む
        let limit = self.max_depth.map_or(max_plies, |d| d.clamp(1, max_plies));

        let mut ctx = SearchContext {
            evaluator: &self.evaluator,
            start,
            budget: self.time_limit,
            check_time: false,
            nodes: 0,
        };
        let mut best: Option<SearchReport> = None;

        for depth in 1..=limit {
            // depth 1 is always completed so there is a legal candidate
            ctx.check_time = depth > 1;
            if ctx.out_of_time() {
                break;
            }

            let pv = best.map(|r| r.best_move);
            match Self::search_root(&mut ctx, board, color, depth, pv) {
                Some((mv, score)) => {
                    best = Some(SearchReport {
                        best_move: mv,
                        score,
                        depth,
                        nodes: ctx.nodes,
                        elapsed: start.elapsed(),
                    });
                    log::debug!(
                        "{}: searched {} plies and got {} ({:.1})",
                        self.name,
                        depth,
                        mv,
                        score
                    );
                }
                // Interrupted: discard the partial layer
                None => break,
            }
        }

        best
    }

    /// Full alpha-beta to exactly `depth` plies with no time limit.
    pub fn search_at_depth(&self, board: &Board, color: Color, depth: usize) -> Option<(Position, f64)> {
        let mut ctx = SearchContext {
            evaluator: &self.evaluator,
            start: Instant::now(),
            budget: Duration::MAX,
            check_time: false,
            nodes: 0,
        };
        Self::search_root(&mut ctx, board, color, depth, None)
    }

    fn search_root(
        ctx: &mut SearchContext<'_, E>,
        board: &Board,
        color: Color,
        depth: usize,
        pv: Option<Position>,
    ) -> Option<(Position, f64)> {
        let mut moves = legal_moves(board, color);
        order_moves(&mut moves, pv);

        let maximizing = color == Color::Black;
        let mut alpha = -INF;
        let mut beta = INF;
        let mut best: Option<(Position, f64)> = None;

        for mv in moves {
            // legal_moves only yields capturing cells
            let Ok(next) = play(board, mv, color) else {
                continue;
            };
            let child = SearchNode {
                board: next,
                depth: 1,
                mover: color.opponent(),
            };
            let score = Self::alpha_beta(ctx, &child, depth, alpha, beta)?;

            let improves = match best {
                None => true,
                Some((_, s)) if maximizing => score > s,
                Some((_, s)) => score < s,
            };
            if improves {
                best = Some((mv, score));
            }
            if maximizing {
                alpha = alpha.max(score);
            } else {
                beta = beta.min(score);
            }
        }

        best
    }

    // --- Alpha-Beta Search ---
    // Returns None once the budget is exhausted.
    fn alpha_beta(
        ctx: &mut SearchContext<'_, E>,
        node: &SearchNode,
        max_depth: usize,
        mut alpha: f64,
        mut beta: f64,
    ) -> Option<f64> {
        if ctx.out_of_time() {
            return None;
        }
        ctx.nodes += 1;

        if node.depth >= max_depth {
            return Some(ctx.evaluator.evaluate(&node.board));
        }

        let mut mover = node.mover;
        let mut moves = legal_moves(&node.board, mover);
        if moves.is_empty() {
            // 強制パス: 相手が打てるなら相手番で続行, どちらも打てなければ終局
            mover = mover.opponent();
            moves = legal_moves(&node.board, mover);
            if moves.is_empty() {
                return Some(ctx.evaluator.evaluate(&node.board));
            }
        }
        order_moves(&mut moves, None);

        let maximizing = mover == Color::Black;
        let mut best = if maximizing { -INF } else { INF };

        for mv in moves {
            let Ok(next) = play(&node.board, mv, mover) else {
                continue;
            };
            let child = SearchNode {
                board: next,
                depth: node.depth + 1,
                mover: mover.opponent(),
            };
            let score = Self::alpha_beta(ctx, &child, max_depth, alpha, beta)?;

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(score);
            } else {
                best = best.min(score);
                beta = beta.min(score);
            }
            if alpha >= beta {
                break; // cutoff
            }
        }

        Some(best)
    }
}

/// Previous best move first, then by disk-square value (corners early).
fn order_moves(moves: &mut [Position], pv: Option<Position>) {
    moves.sort_by_key(|&mv| {
        let pv_rank = if Some(mv) == pv { 0 } else { 1 };
        (pv_rank, -get_pst_value(mv))
    });
}

impl<E: Evaluator> MoveEngine for AlphaBetaAI<E> {
    fn choose_move(&self, board: &Board, color: Color) -> Move {
        match self.analyze(board, color) {
            Some(report) => {
                log::info!(
                    "{} ({}) plays {} at depth {} ({} nodes, {:.1}, {}ms)",
                    self.name,
                    color,
                    report.best_move,
                    report.depth,
                    report.nodes,
                    report.score,
                    report.elapsed.as_millis()
                );
                Move::Place(report.best_move)
            }
            None => Move::Pass,
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::setup_from_strings;
    use crate::logic::apply_move;
    use crate::player::ai::evaluator::DiskCountEvaluator;
    use crate::player::ai::minimax::MinimaxAI;
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;
    use rand::SeedableRng;

    fn midgame(seed: u64, plies: usize) -> (Board, Color) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut board = Board::new();
        let mut color = Color::Black;
        for _ in 0..plies {
            let moves = legal_moves(&board, color);
            if let Some(&pos) = moves.choose(&mut rng) {
                apply_move(&mut board, pos, color).unwrap();
            }
            color = color.opponent();
        }
        if legal_moves(&board, color).is_empty() {
            color = color.opponent();
        }
        (board, color)
    }

    #[test]
    fn test_pruning_matches_full_minimax() {
        for seed in 0..6 {
            let (board, color) = midgame(seed, 12);
            if legal_moves(&board, color).is_empty() {
                continue;
            }
            for depth in 1..=3 {
                let ab = AlphaBetaAI::new("ab", Duration::from_secs(60));
                let mm = MinimaxAI::new("mm", depth);
                let (_, ab_score) = ab.search_at_depth(&board, color, depth).unwrap();
                let (_, mm_score) = mm.minimax_root(&board, color).unwrap();
                assert!(
                    (ab_score - mm_score).abs() < 1e-6,
                    "seed {} depth {}: {} vs {}",
                    seed,
                    depth,
                    ab_score,
                    mm_score
                );
            }
        }
    }

    #[test]
    fn test_pruning_matches_minimax_with_disk_count() {
        let (board, color) = midgame(42, 20);
        for depth in 1..=4 {
            let ab = AlphaBetaAI::with_evaluator("ab", DiskCountEvaluator, Duration::from_secs(60));
            let mm = MinimaxAI::with_evaluator("mm", depth, DiskCountEvaluator);
            let (_, a) = ab.search_at_depth(&board, color, depth).unwrap();
            let (_, m) = mm.minimax_root(&board, color).unwrap();
            assert_eq!(a, m);
        }
    }

    #[test]
    fn test_deepening_returns_deepest_completed_layer() {
        let (board, color) = midgame(7, 10);
        let ai = AlphaBetaAI::new("ab", Duration::from_secs(60)).with_max_depth(3);
        let report = ai.analyze(&board, color).unwrap();
        assert_eq!(report.depth, 3);

        let (_, direct) = ai.search_at_depth(&board, color, 3).unwrap();
        assert!((report.score - direct).abs() < 1e-6);
        assert!(legal_moves(&board, color).contains(&report.best_move));
    }

    #[test]
    fn test_zero_depth_config_still_places() {
        let mut config = AIConfig::default();
        config.search.max_depth = Some(0);
        let board = Board::new();

        let ai = AlphaBetaAI::from_config("ab", &config);
        match ai.choose_move(&board, Color::Black) {
            Move::Place(pos) => assert!(legal_moves(&board, Color::Black).contains(&pos)),
            Move::Pass => panic!("passed with legal moves available"),
        }
        assert_eq!(ai.analyze(&board, Color::Black).unwrap().depth, 1);

        let built = AlphaBetaAI::new("ab", Duration::from_secs(5)).with_max_depth(0);
        assert_eq!(built.analyze(&board, Color::Black).unwrap().depth, 1);
        assert_eq!(built.time_limit(), Duration::from_secs(5));
    }

    #[test]
    fn test_from_config_uses_search_budget() {
        let config = AIConfig::default();
        let ai = AlphaBetaAI::from_config("ab", &config);
        assert_eq!(ai.time_limit(), config.search_budget());
    }

    #[test]
    fn test_zero_budget_still_returns_depth_one() {
        let (board, color) = midgame(3, 16);
        let ai = AlphaBetaAI::new("ab", Duration::ZERO);
        let report = ai.analyze(&board, color).unwrap();
        assert_eq!(report.depth, 1);

        let (_, d1) = ai.search_at_depth(&board, color, 1).unwrap();
        assert!((report.score - d1).abs() < 1e-6);
    }

    #[test]
    fn test_interrupted_layer_is_discarded() {
        let (board, color) = midgame(11, 8);
        let ai = AlphaBetaAI::new("ab", Duration::from_millis(30));
        let report = ai.analyze(&board, color).unwrap();

        // 返った手は完了した深さの探索結果と一致する
        let (_, full) = ai.search_at_depth(&board, color, report.depth).unwrap();
        assert!((report.score - full).abs() < 1e-6);
        assert!(legal_moves(&board, color).contains(&report.best_move));
    }

    #[test]
    fn test_depth_capped_by_empty_cells() {
        // 空きマス 2 つだけ
        let board = setup_from_strings(&[
            "- B B B B B B B",
            "B B B B B B B B",
            "B B B B B B B B",
            "B B B B B B B B",
            "B B B B B B B B",
            "W W W W W W W W",
            "W W W W W W W W",
            "W W W W W W W -",
        ]);
        let ai = AlphaBetaAI::new("ab", Duration::from_secs(60));
        let report = ai.analyze(&board, Color::White).unwrap();
        assert!(report.depth <= 2);
        assert_eq!(report.best_move, Position::new(0, 0));
    }

    #[test]
    fn test_pass_when_no_legal_move() {
        let board = setup_from_strings(&[
            "B - - - - - - -",
            "- - - - - - - -",
            "- - - - - - - -",
            "- - - - - - - -",
            "- - - - - - - -",
            "- - - - - - - -",
            "- - - - - - - -",
            "- - - - - - - W",
        ]);
        let ai = AlphaBetaAI::new("ab", Duration::from_secs(1));
        assert!(ai.analyze(&board, Color::Black).is_none());
        assert_eq!(ai.choose_move(&board, Color::Black), Move::Pass);
    }

    #[test]
    fn test_prefers_corner() {
        // 白の (0,0) 角取りが可能
        let board = setup_from_strings(&[
            "- B B B B W - -",
            "- - - - - - - -",
            "- - - - - - - -",
            "- - - B W - - -",
            "- - - W B - - -",
            "- - - - - - - -",
            "- - - - - - - -",
            "- - - - - - - -",
        ]);
        let ai = AlphaBetaAI::new("ab", Duration::from_secs(5)).with_max_depth(2);
        assert_eq!(
            ai.choose_move(&board, Color::White),
            Move::Place(Position::new(0, 0))
        );
    }

    #[test]
    fn test_search_does_not_touch_input_board() {
        let (board, color) = midgame(5, 14);
        let before = board;
        let ai = AlphaBetaAI::new("ab", Duration::from_millis(50));
        let _ = ai.choose_move(&board, color);
        assert_eq!(board, before);
    }
}
