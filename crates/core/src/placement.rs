//! Placement module - collision testing and stamping pieces onto the board
//!
//! The active piece lives on the board as ordinary cells. Any change to it
//! goes through the same cycle: [`erase`] it, change the piece, test with
//! [`collides`], undo the change if needed, then [`commit`] it again.
//!
//! Bounds are asymmetric on purpose: a block may never sit on row 0 or above
//! (`row <= 0` always collides), while the anchor itself may.

use crate::board::Board;
use crate::shapes::Piece;
use crate::types::{Cell, Position};

/// Remove a stamped piece from the board
///
/// Cells outside the board are ignored.
pub fn erase(board: &mut Board, piece: &Piece) {
    for cell in piece.cells() {
        board.set(cell.x, cell.y, Cell::Empty);
    }
}

/// Stamp a piece onto the board
///
/// Cells outside the board are skipped rather than reported.
pub fn commit(board: &mut Board, piece: &Piece) {
    let block = Cell::Block(piece.kind);
    for cell in piece.cells() {
        board.set(cell.x, cell.y, block);
    }
}

/// Check whether a piece can not occupy its current position
///
/// The piece itself must not be stamped on the board when this is called.
pub fn collides(piece: &Piece, board: &Board) -> bool {
    collides_ignoring(piece, board, None)
}

/// Same as [`collides`], treating the cells of `stamped` as empty
///
/// This lets read-only callers test positions for the active piece while it
/// is still on the board.
pub fn collides_ignoring(piece: &Piece, board: &Board, stamped: Option<&Piece>) -> bool {
    let height = board.height() as i32;
    let width = board.width() as i32;
    let own = stamped.map(Piece::cells);
    let lookup = |x: i32, y: i32| -> Cell {
        match own {
            Some(cells) if cells.contains(&Position::new(x, y)) => Cell::Empty,
            _ => board.get(x, y).unwrap_or(Cell::Empty),
        }
    };

    let (x, y) = (piece.x, piece.y);
    if y < 0 || y >= height || x < 0 || x >= width || !lookup(x, y).is_empty() {
        return true;
    }

    piece.blocks().iter().any(|&(dx, dy)| {
        let (bx, by) = (x + dx, y + dy);
        by <= 0 || by >= height || bx < 0 || bx >= width || !lookup(bx, by).is_passable()
    })
}
