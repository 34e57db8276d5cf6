#[cfg(test)]
mod tests {
    use crate::core::{setup_from_strings, Board, Cell, Color, Position, CELL_COUNT};
    use crate::error::RulesError;
    use crate::logic::{apply_move, is_terminal, leader, legal_moves, play, would_capture};
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;
    use rand::SeedableRng;

    /// Random legal playout, yielding every (board, mover) pair on the way.
    fn random_positions(seed: u64) -> Vec<(Board, Color)> {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut board = Board::new();
        let mut color = Color::Black;
        let mut seen = Vec::new();

        while !is_terminal(&board) {
            seen.push((board, color));
            let moves = legal_moves(&board, color);
            if let Some(&pos) = moves.choose(&mut rng) {
                apply_move(&mut board, pos, color).unwrap();
            }
            color = color.opponent();
        }
        seen.push((board, color));
        seen
    }

    #[test]
    fn test_opening_capture() {
        let mut board = Board::new();
        let pos = Position::new(2, 3);
        assert!(legal_moves(&board, Color::Black).contains(&pos));

        let flipped = apply_move(&mut board, pos, Color::Black).unwrap();
        assert_eq!(flipped, 1);
        assert_eq!(board.get(Position::new(3, 3)), Cell::Black);
        assert_eq!(board.count(Color::Black), 4);
        assert_eq!(board.count(Color::White), 1);
    }

    #[test]
    fn test_opening_legal_moves() {
        let board = Board::new();
        let black = legal_moves(&board, Color::Black);
        assert_eq!(
            black,
            vec![
                Position::new(2, 3),
                Position::new(3, 2),
                Position::new(4, 5),
                Position::new(5, 4),
            ]
        );
        let white = legal_moves(&board, Color::White);
        assert_eq!(white.len(), 4);
        assert!(white.contains(&Position::new(2, 4)));
    }

    #[test]
    fn test_invalid_move_leaves_board_untouched() {
        let mut board = Board::new();
        let before = board;

        // 占有済みのマス
        let err = apply_move(&mut board, Position::new(3, 3), Color::Black).unwrap_err();
        assert_eq!(
            err,
            RulesError::InvalidMove {
                position: Position::new(3, 3),
                color: Color::Black
            }
        );
        // 何も挟めない空きマス
        assert!(apply_move(&mut board, Position::new(0, 0), Color::Black).is_err());
        assert_eq!(board, before);
    }

    #[test]
    fn test_multi_direction_flip() {
        let mut board = setup_from_strings(&[
            "B - - B - - B -",
            "- W - W - W - -",
            "- - W W W - - -",
            "B W W - W W B -",
            "- - W W W - - -",
            "- W - W - W - -",
            "B - - B - - B -",
            "- - - - - - - -",
        ]);
        let flipped = apply_move(&mut board, Position::new(3, 3), Color::Black).unwrap();
        assert_eq!(flipped, 16);
        assert_eq!(board.count(Color::White), 0);
        assert_eq!(board.count(Color::Black), 25);
    }

    #[test]
    fn test_run_to_edge_is_not_a_capture() {
        // 端まで白が続き, 黒で閉じていない
        let board = setup_from_strings(&[
            "- W W W W W W W",
            "- - - - - - - -",
            "- - - - - - - -",
            "- - - - - - - -",
            "- - - - - - - -",
            "- - - - - - - -",
            "- - - - - - - -",
            "- - - - - - - -",
        ]);
        assert!(!would_capture(&board, Position::new(0, 0), Color::Black));
        assert!(legal_moves(&board, Color::Black).is_empty());
    }

    #[test]
    fn test_partial_capture_only_flips_bracketed_direction() {
        let mut board = setup_from_strings(&[
            "- W B - - - - -",
            "W - - - - - - -",
            "W - - - - - - -",
            "- - - - - - - -",
            "- - - - - - - -",
            "- - - - - - - -",
            "- - - - - - - -",
            "- - - - - - - -",
        ]);
        apply_move(&mut board, Position::new(0, 0), Color::Black).unwrap();
        assert_eq!(board.get(Position::new(0, 1)), Cell::Black);
        // 下方向は黒で閉じていないので返らない
        assert_eq!(board.get(Position::new(1, 0)), Cell::White);
        assert_eq!(board.get(Position::new(2, 0)), Cell::White);
    }

    #[test]
    fn test_legal_moves_always_flip_and_others_fail() {
        for seed in 0..8 {
            for (board, color) in random_positions(seed) {
                let legal = legal_moves(&board, color);
                for pos in Position::all() {
                    let mut next = board;
                    let result = apply_move(&mut next, pos, color);
                    if legal.contains(&pos) {
                        assert!(result.unwrap() >= 1, "legal move {} flipped nothing", pos);
                    } else {
                        assert!(result.is_err());
                        assert_eq!(next, board);
                    }
                }
            }
        }
    }

    #[test]
    fn test_apply_is_deterministic_and_conserves_disks() {
        for seed in 100..106 {
            for (board, color) in random_positions(seed) {
                for pos in legal_moves(&board, color) {
                    let a = play(&board, pos, color).unwrap();
                    let b = play(&board, pos, color).unwrap();
                    assert_eq!(a, b);
                    assert_eq!(a.total_count(), board.total_count() + 1);

                    // 置いたマス以外は色が変わるだけ
                    for cell in Position::all().filter(|&p| p != pos) {
                        assert_eq!(a.get(cell).is_empty(), board.get(cell).is_empty());
                    }
                    assert!(a.total_count() <= CELL_COUNT);
                }
            }
        }
    }

    #[test]
    fn test_double_pass_board_is_terminal() {
        let tied = setup_from_strings(&[
            "B - - - - - - -",
            "- - - - - - - -",
            "- - - - - - - -",
            "- - - - - - - -",
            "- - - - - - - -",
            "- - - - - - - -",
            "- - - - - - - -",
            "- - - - - - - W",
        ]);
        assert!(is_terminal(&tied));
        assert_eq!(leader(&tied), None);

        let black_ahead = setup_from_strings(&[
            "B B - - - - - -",
            "- - - - - - - -",
            "- - - - - - - -",
            "- - - - - - - -",
            "- - - - - - - -",
            "- - - - - - - -",
            "- - - - - - - -",
            "- - - - - - - W",
        ]);
        assert!(is_terminal(&black_ahead));
        assert_eq!(leader(&black_ahead), Some(Color::Black));
    }

    #[test]
    fn test_random_playouts_end_terminal() {
        for seed in 200..210 {
            let positions = random_positions(seed);
            let (last, _) = positions.last().unwrap();
            assert!(is_terminal(last));
            // 石数は単調非減少
            for pair in positions.windows(2) {
                assert!(pair[1].0.total_count() >= pair[0].0.total_count());
            }
        }
    }
}
