use crate::core::{Board, Cell, Color, Position};
use crate::error::RulesError;

/// 8 方向 (N, NE, E, SE, S, SW, W, NW)
pub const DIRECTIONS: [(isize, isize); 8] = [
    (-1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
];

/// Length of the opponent run starting next to `from` in direction `(dr, dc)`
/// that is closed off by a `color` disk. Zero when nothing is bracketed.
fn bracketed_run(board: &Board, from: Position, dr: isize, dc: isize, color: Color) -> usize {
    let own = Cell::from(color);
    let opponent = Cell::from(color.opponent());
    let mut run = 0;
    let mut cur = from;

    while let Some(next) = cur.offset(dr, dc) {
        let cell = board.get(next);
        if cell == opponent {
            run += 1;
            cur = next;
        } else if cell == own {
            return run;
        } else {
            return 0;
        }
    }
    // 盤外に出た
    0
}

/// 着手可能か (空きマスで, 少なくとも 1 方向を挟める)
pub fn would_capture(board: &Board, pos: Position, color: Color) -> bool {
    board.get(pos).is_empty()
        && DIRECTIONS
            .iter()
            .any(|&(dr, dc)| bracketed_run(board, pos, dr, dc, color) > 0)
}

/// 合法手生成 (row-major 順)
pub fn legal_moves(board: &Board, color: Color) -> Vec<Position> {
    Position::all()
        .filter(|&pos| would_capture(board, pos, color))
        .collect()
}

pub fn has_legal_move(board: &Board, color: Color) -> bool {
    Position::all().any(|pos| would_capture(board, pos, color))
}

/// Places `color` at `pos` and flips every bracketed run.
///
/// Returns the number of flipped disks. The board is left untouched on error.
pub fn apply_move(board: &mut Board, pos: Position, color: Color) -> Result<usize, RulesError> {
    if !would_capture(board, pos, color) {
        return Err(RulesError::InvalidMove {
            position: pos,
            color,
        });
    }

    // 挟める長さは置く前に全方向ぶん確定させる
    let runs: Vec<(isize, isize, usize)> = DIRECTIONS
        .iter()
        .map(|&(dr, dc)| (dr, dc, bracketed_run(board, pos, dr, dc, color)))
        .filter(|&(_, _, run)| run > 0)
        .collect();

    let own = Cell::from(color);
    board.set(pos, own);

    let mut flipped = 0;
    for (dr, dc, run) in runs {
        let mut cur = pos;
        for _ in 0..run {
            // run was measured on-board, so every step exists
            if let Some(next) = cur.offset(dr, dc) {
                board.set(next, own);
                cur = next;
                flipped += 1;
            }
        }
    }
    Ok(flipped)
}

/// Copy-on-branch variant of `apply_move`.
pub fn play(board: &Board, pos: Position, color: Color) -> Result<Board, RulesError> {
    let mut next = *board;
    apply_move(&mut next, pos, color)?;
    Ok(next)
}

/// 終局判定: 盤が埋まったか, 両者とも打てない
pub fn is_terminal(board: &Board) -> bool {
    board.is_full() || (!has_legal_move(board, Color::Black) && !has_legal_move(board, Color::White))
}

/// Disk-count winner; `None` on a tie.
pub fn leader(board: &Board) -> Option<Color> {
    let black = board.count(Color::Black);
    let white = board.count(Color::White);
    match black.cmp(&white) {
        std::cmp::Ordering::Greater => Some(Color::Black),
        std::cmp::Ordering::Less => Some(Color::White),
        std::cmp::Ordering::Equal => None,
    }
}
