//! Board tests

use blockfall::core::{Board, BoardParseError};
use blockfall::types::{Cell, ShapeKind};

#[test]
fn test_board_new_empty() {
    let board = Board::new(10, 20);
    assert_eq!(board.width(), 10);
    assert_eq!(board.height(), 20);
    assert_eq!(board.row_count(), 20);

    for y in 0..20 {
        for x in 0..10 {
            assert_eq!(board.get(x, y), Some(Cell::Empty), "({}, {})", x, y);
        }
    }
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::new(10, 20);

    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);
    assert_eq!(board.get(10, 0), None);
    assert_eq!(board.get(0, 20), None);
}

#[test]
fn test_board_set_and_get() {
    let mut board = Board::new(10, 20);

    assert!(board.set(5, 10, Cell::Block(ShapeKind::T)));
    assert_eq!(board.get(5, 10), Some(Cell::Block(ShapeKind::T)));
    assert_eq!(board.shape_at(5, 10), Some(ShapeKind::T));

    assert!(board.set(5, 10, Cell::Empty));
    assert_eq!(board.get(5, 10), Some(Cell::Empty));
    assert_eq!(board.shape_at(5, 10), None);
}

#[test]
fn test_board_set_out_of_bounds() {
    let mut board = Board::new(10, 20);

    assert!(!board.set(-1, 0, Cell::Block(ShapeKind::T)));
    assert!(!board.set(0, -1, Cell::Block(ShapeKind::T)));
    assert!(!board.set(10, 0, Cell::Block(ShapeKind::T)));
    assert!(!board.set(0, 20, Cell::Block(ShapeKind::T)));
    assert_eq!(board.filled_count(), 0);
}

#[test]
fn test_row_full_detection() {
    let mut board = Board::new(4, 4);
    for x in 0..3 {
        board.set(x, 3, Cell::Block(ShapeKind::L));
    }
    assert!(!board.is_row_full(3));

    board.set(3, 3, Cell::Block(ShapeKind::J));
    assert!(board.is_row_full(3));
    assert!(!board.is_row_full(2));
    assert!(!board.is_row_full(99));
}

#[test]
fn test_delete_row_shifts_lower_rows_up() {
    let mut board = Board::parse(
        "
        . . .
        t . .
        . s .
        . . z
        ",
    )
    .unwrap();

    assert!(board.delete_row(1));
    assert_eq!(board.row_count(), 3);
    assert_eq!(board.height(), 4);
    assert_eq!(board.row(1), Some(&[Cell::Empty, Cell::Block(ShapeKind::S), Cell::Empty][..]));

    board.insert_empty_row_top();
    assert_eq!(board.to_string(), ". . .\n. . .\n. s .\n. . z\n");
}

#[test]
fn test_clear_and_reset() {
    let mut board = Board::new(3, 3);
    board.set(1, 1, Cell::Block(ShapeKind::O));

    board.clear();
    assert_eq!(board.filled_count(), 0);
    assert_eq!(board.row_count(), 3);

    board.reset(5, 2);
    assert_eq!(board.width(), 5);
    assert_eq!(board.height(), 2);
    assert_eq!(board.cells().len(), 10);
}

#[test]
fn test_parse_accepts_zero_as_empty() {
    let board = Board::parse("0 0 i\ni i i\n").unwrap();
    assert_eq!(board.get(0, 0), Some(Cell::Empty));
    assert!(board.is_row_full(1));
}

#[test]
fn test_parse_errors() {
    assert_eq!(Board::parse(""), Err(BoardParseError::Empty));
    assert_eq!(
        Board::parse(". q ."),
        Err(BoardParseError::UnknownCell {
            row: 0,
            column: 1,
            found: 'q'
        })
    );
}
