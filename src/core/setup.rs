use crate::core::{Board, Cell, Position, BOARD_SIZE};

/// 文字列配列から盤面を初期化する
///
/// Each row holds eight whitespace-separated tokens: `B` (or `#`) for Black,
/// `W` (or `O`) for White, `-` for an empty cell.
/// Panics on malformed input; this is meant for fixed scenario tables.
pub fn setup_from_strings(setup: &[&str]) -> Board {
    assert_eq!(setup.len(), BOARD_SIZE, "expected {} rows", BOARD_SIZE);
    let mut board = Board::empty();

    for (row, line) in setup.iter().enumerate() {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        assert_eq!(tokens.len(), BOARD_SIZE, "row {} needs {} cells", row, BOARD_SIZE);

        for (col, token) in tokens.into_iter().enumerate() {
            let cell = match token {
                "B" | "#" => Cell::Black,
                "W" | "O" => Cell::White,
                "-" => Cell::Empty,
                other => panic!("unknown cell token `{}` at row {}", other, row),
            };
            board.set(Position::new(row, col), cell);
        }
    }
    board
}
