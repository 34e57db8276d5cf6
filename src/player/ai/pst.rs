use crate::core::{Position, BOARD_SIZE};

// Disk-square table, indexed [row][col].
// Corners are prized, the X/C squares next to them are liabilities,
// edges sit in between. Symmetric under both mirrors and the transpose.
const DISK_SQUARES: [[i32; BOARD_SIZE]; BOARD_SIZE] = [
    [20, -3, 11, 8, 8, 11, -3, 20],
    [-3, -7, -4, 1, 1, -4, -7, -3],
    [11, -4, 2, 2, 2, 2, -4, 11],
    [8, 1, 2, -3, -3, 2, 1, 8],
    [8, 1, 2, -3, -3, 2, 1, 8],
    [11, -4, 2, 2, 2, 2, -4, 11],
    [-3, -7, -4, 1, 1, -4, -7, -3],
    [20, -3, 11, 8, 8, 11, -3, 20],
];

pub fn get_pst_value(pos: Position) -> i32 {
    DISK_SQUARES[pos.row][pos.col]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_symmetry() {
        for pos in Position::all() {
            let mirrored = Position::new(BOARD_SIZE - 1 - pos.row, BOARD_SIZE - 1 - pos.col);
            let transposed = Position::new(pos.col, pos.row);
            assert_eq!(get_pst_value(pos), get_pst_value(mirrored));
            assert_eq!(get_pst_value(pos), get_pst_value(transposed));
        }
    }

    #[test]
    fn test_corners_dominate() {
        let corner = get_pst_value(Position::new(0, 0));
        assert!(Position::all().all(|p| get_pst_value(p) <= corner));
        assert!(get_pst_value(Position::new(1, 1)) < 0);
    }
}
