//! Ghost module - where the active piece would land if dropped now

use crate::board::Board;
use crate::placement::collides_ignoring;
use crate::shapes::Piece;
use crate::types::Position;

/// Landing anchor of a stamped piece
///
/// The piece's own cells are treated as empty, so neither the board nor the
/// piece is touched. If the piece cannot move down at all the landing anchor
/// is its current anchor.
pub fn project(board: &Board, active: &Piece) -> Position {
    let mut probe = *active;
    let floor = board.height() as i32;

    while probe.y < floor && !collides_ignoring(&probe, board, Some(active)) {
        probe.y += 1;
    }

    Position::new(active.x, (probe.y - 1).max(active.y))
}
