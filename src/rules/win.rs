//! Win condition checking
//!
//! A player wins by holding any complete row, column, or diagonal. The
//! check always runs right after a placement and only for the player who
//! just moved, so two simultaneous winning lines cannot occur.

use crate::board::{Board, Player, Pos};

/// The eight winning lines as (row, col) triples
const LINES: [[(u8, u8); 3]; 8] = [
    // Rows
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    // Columns
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    // Diagonals
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// Find the winning line for the given player, if one exists.
///
/// Returns the three positions of the first complete line found. Order of
/// inspection does not matter for correctness: any single complete line
/// wins immediately upon completion.
pub fn find_line(board: &Board, player: Player) -> Option<[Pos; 3]> {
    let mark = player.mark();

    for line in LINES {
        let positions = line.map(|(row, col)| Pos::new(row, col));
        if positions.iter().all(|&pos| board.get(pos) == mark) {
            return Some(positions);
        }
    }
    None
}

/// Check if the given player holds a complete line
#[inline]
pub fn has_line(board: &Board, player: Player) -> bool {
    find_line(board, player).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place_all(board: &mut Board, player: Player, positions: &[(u8, u8)]) {
        for &(row, col) in positions {
            board.set(Pos::new(row, col), player.mark());
        }
    }

    #[test]
    fn test_row_win() {
        let mut board = Board::new();
        place_all(&mut board, Player::X, &[(0, 0), (0, 1), (0, 2)]);
        assert!(has_line(&board, Player::X));
        assert!(!has_line(&board, Player::O));
    }

    #[test]
    fn test_column_win() {
        let mut board = Board::new();
        place_all(&mut board, Player::O, &[(0, 1), (1, 1), (2, 1)]);
        assert!(has_line(&board, Player::O));
    }

    #[test]
    fn test_main_diagonal_win() {
        let mut board = Board::new();
        place_all(&mut board, Player::X, &[(0, 0), (1, 1), (2, 2)]);
        assert!(has_line(&board, Player::X));
    }

    #[test]
    fn test_anti_diagonal_win() {
        let mut board = Board::new();
        place_all(&mut board, Player::O, &[(0, 2), (1, 1), (2, 0)]);
        assert!(has_line(&board, Player::O));
    }

    #[test]
    fn test_two_in_a_row_is_not_a_win() {
        let mut board = Board::new();
        place_all(&mut board, Player::X, &[(0, 0), (0, 1)]);
        assert!(!has_line(&board, Player::X));
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let mut board = Board::new();
        place_all(&mut board, Player::X, &[(0, 0), (0, 2)]);
        place_all(&mut board, Player::O, &[(0, 1)]);
        assert!(!has_line(&board, Player::X));
        assert!(!has_line(&board, Player::O));
    }

    #[test]
    fn test_empty_board_has_no_winner() {
        let board = Board::new();
        assert!(!has_line(&board, Player::X));
        assert!(!has_line(&board, Player::O));
    }

    #[test]
    fn test_find_line_returns_positions() {
        let mut board = Board::new();
        place_all(&mut board, Player::X, &[(2, 0), (2, 1), (2, 2)]);

        let line = find_line(&board, Player::X).unwrap();
        assert_eq!(line, [Pos::new(2, 0), Pos::new(2, 1), Pos::new(2, 2)]);
    }

    #[test]
    fn test_full_board_without_line() {
        // X O X / X O O / O X X
        let mut board = Board::new();
        place_all(
            &mut board,
            Player::X,
            &[(0, 0), (0, 2), (1, 0), (2, 1), (2, 2)],
        );
        place_all(&mut board, Player::O, &[(0, 1), (1, 1), (1, 2), (2, 0)]);

        assert!(board.is_full());
        assert!(!has_line(&board, Player::X));
        assert!(!has_line(&board, Player::O));
    }
}
