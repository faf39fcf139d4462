use std::fmt;

use crate::game_state::{GameState, SessionStatus};
use crate::sequencer::PieceSource;
use crate::shapes::{Blocks, Piece};
use crate::types::{Cell, Position, ShapeKind};

/// Display view of a piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceView {
    pub kind: ShapeKind,
    pub anchor: Position,
    pub blocks: Blocks,
}

impl From<&Piece> for PieceView {
    fn from(value: &Piece) -> Self {
        Self {
            kind: value.kind,
            anchor: value.anchor(),
            blocks: *value.blocks(),
        }
    }
}

impl PieceView {
    /// Absolute cells, anchor first
    pub fn cells(&self) -> [Position; 4] {
        let Position { x, y } = self.anchor;
        let [a, b, c] = self.blocks;
        [
            self.anchor,
            Position::new(x + a.0, y + a.1),
            Position::new(x + b.0, y + b.1),
            Position::new(x + c.0, y + c.1),
        ]
    }
}

/// Everything a display layer needs, copied out of the engine
///
/// `cells` already carries the ghost overlay: empty cells under the ghost
/// piece read as [`Cell::Ghost`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub width: usize,
    pub height: usize,
    pub cells: Vec<Cell>,
    pub active: Option<PieceView>,
    pub next: PieceView,
    pub ghost: Option<Position>,
    pub score: u32,
    pub status: SessionStatus,
    pub cleared_rows: Vec<usize>,
}

impl GameSnapshot {
    pub fn capture<S: PieceSource>(state: &GameState<S>) -> Self {
        let board = state.board();
        let active = state.active().map(PieceView::from);
        let ghost = state.ghost_landing();

        let mut snapshot = Self {
            width: board.width(),
            height: board.height(),
            cells: board.cells().to_vec(),
            active,
            next: PieceView::from(state.next()),
            ghost,
            score: state.score(),
            status: state.status(),
            cleared_rows: state.last_cleared().to_vec(),
        };

        if let (Some(view), Some(landing)) = (active, ghost) {
            let ghost_view = PieceView {
                anchor: landing,
                ..view
            };
            for pos in ghost_view.cells() {
                if let Some(cell) = snapshot.cell_mut(pos.x, pos.y) {
                    if cell.is_empty() {
                        *cell = Cell::Ghost;
                    }
                }
            }
        }

        snapshot
    }

    fn cell_mut(&mut self, x: i32, y: i32) -> Option<&mut Cell> {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return None;
        }
        self.cells.get_mut(y as usize * self.width + x as usize)
    }

    pub fn cell(&self, x: i32, y: i32) -> Option<Cell> {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return None;
        }
        self.cells.get(y as usize * self.width + x as usize).copied()
    }

    /// Paint the row positions of the last clear with [`Cell::Clearing`]
    ///
    /// `cells` already holds the compacted board, so this marks where rows
    /// were removed, overwriting whatever has moved down into those rows.
    pub fn mark_clearing(&mut self) {
        let rows = self.cleared_rows.clone();
        for y in rows {
            for x in 0..self.width as i32 {
                if let Some(cell) = self.cell_mut(x, y as i32) {
                    *cell = Cell::Clearing;
                }
            }
        }
    }

    pub fn playable(&self) -> bool {
        self.status == SessionStatus::Playing
    }
}

/// Same text form as the board, with overlays
impl fmt::Display for GameSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks_exact(self.width.max(1)) {
            for (x, cell) in row.iter().enumerate() {
                if x > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{}", cell.as_char())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequencer::Sequencer;

    #[test]
    fn test_snapshot_has_ghost_overlay() {
        let mut state = GameState::with_sequencer(Sequencer::starting_with(ShapeKind::O));
        state.reset(10, 20).unwrap();
        state.tick().unwrap();

        let snapshot = state.snapshot();
        assert_eq!(snapshot.ghost, Some(Position::new(5, 19)));
        assert_eq!(snapshot.cell(5, 19), Some(Cell::Ghost));
        assert_eq!(snapshot.cell(4, 18), Some(Cell::Ghost));
        assert_eq!(snapshot.cell(5, 2), Some(Cell::Block(ShapeKind::O)));
        // The engine's own board never sees the overlay
        assert_eq!(state.board().get(5, 19), Some(Cell::Empty));
    }

    #[test]
    fn test_mark_clearing() {
        let state = GameState::new();
        let mut snapshot = state.snapshot();
        snapshot.width = 2;
        snapshot.height = 2;
        snapshot.cells = vec![Cell::Empty; 4];
        snapshot.cleared_rows = vec![1];
        snapshot.mark_clearing();
        assert_eq!(
            snapshot.cells,
            vec![Cell::Empty, Cell::Empty, Cell::Clearing, Cell::Clearing]
        );
    }

    #[test]
    fn test_mark_clearing_paints_compacted_positions() {
        let mut board = crate::board::Board::new(10, 20);
        for x in (0..5).chain(9..10) {
            board.set(x, 19, Cell::Block(ShapeKind::Z));
        }
        board.set(0, 18, Cell::Block(ShapeKind::L));
        let mut state = GameState::with_sequencer(Sequencer::starting_with(ShapeKind::I));
        state.reset_with_board(board).unwrap();
        state.tick().unwrap();
        while state.active().is_some() {
            state.tick().unwrap();
        }

        let mut snapshot = state.snapshot();
        assert_eq!(snapshot.cleared_rows, vec![19]);
        // The L block has already dropped into the cleared row
        assert_eq!(snapshot.cell(0, 19), Some(Cell::Block(ShapeKind::L)));

        snapshot.mark_clearing();
        assert_eq!(snapshot.cell(0, 19), Some(Cell::Clearing));
        assert_eq!(snapshot.cell(9, 19), Some(Cell::Clearing));
        assert_eq!(snapshot.cell(0, 18), Some(Cell::Empty));
    }
}
