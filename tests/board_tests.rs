use battleship_solo::{Board, BoardError, Cell, BOARD_SIZE};

#[test]
fn test_new_board_is_unguessed() {
    let board = Board::new();
    assert!(board.is_pristine());
    assert!(board
        .cells()
        .iter()
        .flatten()
        .all(|&cell| cell == Cell::Unguessed));
}

#[test]
fn test_record_hit_and_miss() {
    let mut board = Board::new();
    assert_eq!(board.record(1, 2, true).unwrap(), Cell::Hit);
    assert_eq!(board.record(3, 0, false).unwrap(), Cell::Miss);

    assert_eq!(board.cell(1, 2).unwrap(), Cell::Hit);
    assert_eq!(board.cell(3, 0).unwrap(), Cell::Miss);
    assert_eq!(board.cell(0, 0).unwrap(), Cell::Unguessed);
    assert_eq!(board.guessed_count(), 2);
    assert_eq!(board.cells()[1][2], Cell::Hit);
}

#[test]
fn test_repeat_record_is_rejected() {
    let mut board = Board::new();
    board.record(2, 2, false).unwrap();
    assert_eq!(board.record(2, 2, true).unwrap_err(), BoardError::AlreadyGuessed);
    assert_eq!(board.cell(2, 2).unwrap(), Cell::Miss);
    assert_eq!(board.guessed_count(), 1);
}

#[test]
fn test_out_of_bounds() {
    let mut board = Board::new();
    let n = BOARD_SIZE as usize;
    assert!(matches!(
        board.record(n, 0, true),
        Err(BoardError::BitBoardError(_))
    ));
    assert!(board.cell(0, n).is_err());
    assert!(board.is_pristine());
}
