use super::*;

#[test]
fn test_player_opponent() {
    assert_eq!(Player::X.opponent(), Player::O);
    assert_eq!(Player::O.opponent(), Player::X);
}

#[test]
fn test_cell_owner() {
    assert_eq!(Cell::Empty.owner(), None);
    assert_eq!(Cell::Mark(Player::X).owner(), Some(Player::X));
    assert_eq!(Cell::Mark(Player::O).owner(), Some(Player::O));
    assert!(Cell::Empty.is_empty());
    assert!(!Player::X.mark().is_empty());
}

#[test]
fn test_pos_conversion() {
    let pos = Pos::new(1, 1); // Center
    assert_eq!(pos.to_index(), 4);

    let pos2 = Pos::from_index(4);
    assert_eq!(pos2.row, 1);
    assert_eq!(pos2.col, 1);
}

#[test]
fn test_pos_corner_indices() {
    assert_eq!(Pos::new(0, 0).to_index(), 0);
    assert_eq!(Pos::new(0, 2).to_index(), 2);
    assert_eq!(Pos::new(2, 0).to_index(), 6);
    assert_eq!(Pos::new(2, 2).to_index(), 8);
}

#[test]
fn test_pos_validity() {
    assert!(Pos::is_valid(0, 0));
    assert!(Pos::is_valid(2, 2));
    assert!(!Pos::is_valid(-1, 0));
    assert!(!Pos::is_valid(0, -1));
    assert!(!Pos::is_valid(3, 0));
    assert!(!Pos::is_valid(0, 3));
}

#[test]
fn test_pos_from_coords() {
    assert_eq!(Pos::from_coords(2, 1), Some(Pos::new(2, 1)));
    assert_eq!(Pos::from_coords(3, 0), None);
    assert_eq!(Pos::from_coords(0, -2), None);
}

#[test]
fn test_board_constants() {
    assert_eq!(BOARD_SIZE, 3);
    assert_eq!(TOTAL_CELLS, 9);
}

#[test]
fn test_board_set_get() {
    let mut board = Board::new();
    let pos = Pos::new(0, 2);
    assert_eq!(board.get(pos), Cell::Empty);

    board.set(pos, Player::X.mark());
    assert_eq!(board.get(pos), Cell::Mark(Player::X));
    assert!(!board.is_empty_at(pos));

    // set overwrites unconditionally
    board.set(pos, Player::O.mark());
    assert_eq!(board.get(pos), Cell::Mark(Player::O));
}

#[test]
fn test_board_clear() {
    let mut board = Board::new();
    board.set(Pos::new(0, 0), Player::X.mark());
    board.set(Pos::new(2, 2), Player::O.mark());

    board.clear();
    assert!(board.cells().iter().all(|cell| cell.is_empty()));
}

#[test]
fn test_board_is_full() {
    let mut board = Board::new();
    assert!(!board.is_full());

    for idx in 0..TOTAL_CELLS {
        let player = if idx % 2 == 0 { Player::X } else { Player::O };
        board.set(Pos::from_index(idx), player.mark());
    }
    assert!(board.is_full());
}

#[test]
fn test_mark_count() {
    let mut board = Board::new();
    assert_eq!(board.mark_count(Player::X), 0);

    board.set(Pos::new(0, 0), Player::X.mark());
    board.set(Pos::new(1, 1), Player::X.mark());
    board.set(Pos::new(2, 2), Player::O.mark());

    assert_eq!(board.mark_count(Player::X), 2);
    assert_eq!(board.mark_count(Player::O), 1);
}
