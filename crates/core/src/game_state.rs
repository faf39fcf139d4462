//! Game state module - the engine's state machine
//!
//! `GameState` owns the board, the active piece, the next piece and the
//! score. While a piece is falling its cells are stamped on the board, so
//! every command follows the same protocol: erase the piece, change it,
//! test for collision, undo the change if it collides, stamp it again.
//!
//! Piece phase:
//!
//! ```text
//! Empty --tick/spawn--> Falling --tick/lock--> Empty
//! ```
//!
//! The engine has no clock. Gravity happens when the driver calls
//! [`GameState::tick`].

use tracing::{debug, info, trace, warn};

use crate::board::Board;
use crate::error::{EngineError, EngineResult};
use crate::ghost;
use crate::line_clear::{self, ClearedRows};
use crate::placement::{collides, commit, erase};
use crate::sequencer::{PieceSource, Sequencer};
use crate::shapes::Piece;
use crate::snapshot::GameSnapshot;
use crate::types::{Position, KICK_OFFSETS, SPAWN_ROW};

/// Lifecycle of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionStatus {
    /// `reset` has not been called yet
    Uninitialized,
    Playing,
    /// A spawn topped out
    Over,
}

/// Whether a piece is currently falling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Empty,
    Falling,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState<S: PieceSource = Sequencer> {
    board: Board,
    active: Option<Piece>,
    next: Piece,
    sequencer: S,
    score: u32,
    status: SessionStatus,
    /// Rows removed by the latest lock; emptied by the next command.
    last_cleared: ClearedRows,
}

impl GameState<Sequencer> {
    /// Create an engine driven by the default cyclic sequencer
    pub fn new() -> Self {
        Self::with_sequencer(Sequencer::new())
    }
}

impl Default for GameState<Sequencer> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: PieceSource> GameState<S> {
    /// Create an engine drawing pieces from `sequencer`
    ///
    /// The next piece is drawn immediately. [`reset`](Self::reset) must be
    /// called before any command.
    pub fn with_sequencer(mut sequencer: S) -> Self {
        let next = Piece::new(sequencer.next_shape());
        Self {
            board: Board::default(),
            active: None,
            next,
            sequencer,
            score: 0,
            status: SessionStatus::Uninitialized,
            last_cleared: ClearedRows::new(),
        }
    }

    /// Start a session on an empty board of the given size
    pub fn reset(&mut self, width: usize, height: usize) -> EngineResult<()> {
        self.reset_with_board(Board::new(width, height))
    }

    /// Start a session on a prepared board
    ///
    /// The score and active piece are cleared. The sequencer and the pending
    /// next piece carry over.
    pub fn reset_with_board(&mut self, board: Board) -> EngineResult<()> {
        let (width, height) = (board.width(), board.height());
        if width == 0 || height <= SPAWN_ROW as usize {
            return Err(EngineError::InvalidDimensions { width, height });
        }

        self.board = board;
        self.active = None;
        self.score = 0;
        self.status = SessionStatus::Playing;
        self.last_cleared.clear();

        info!(width, height, next = ?self.next.kind, "session reset");
        Ok(())
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Option<&Piece> {
        self.active.as_ref()
    }

    pub fn next(&self) -> &Piece {
        &self.next
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status == SessionStatus::Over
    }

    pub fn phase(&self) -> Phase {
        match self.active {
            Some(_) => Phase::Falling,
            None => Phase::Empty,
        }
    }

    pub fn sequencer(&self) -> &S {
        &self.sequencer
    }

    /// Rows cleared by the most recent lock
    ///
    /// Empty again after any later command.
    pub fn last_cleared(&self) -> &[usize] {
        &self.last_cleared
    }

    /// Landing anchor of the active piece, if there is one
    pub fn ghost_landing(&self) -> Option<Position> {
        self.active
            .as_ref()
            .map(|piece| ghost::project(&self.board, piece))
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::capture(self)
    }

    fn begin_command(&mut self) -> EngineResult<()> {
        match self.status {
            SessionStatus::Uninitialized => Err(EngineError::Uninitialized),
            SessionStatus::Over => Err(EngineError::SessionOver),
            SessionStatus::Playing => {
                self.last_cleared.clear();
                Ok(())
            }
        }
    }

    /// Promote the next piece to active at the spawn position
    fn spawn(&mut self) -> EngineResult<()> {
        let upcoming = Piece::new(self.sequencer.next_shape());
        let mut piece = std::mem::replace(&mut self.next, upcoming);
        piece.x = (self.board.width() / 2) as i32;
        piece.y = SPAWN_ROW;

        if collides(&piece, &self.board) {
            self.status = SessionStatus::Over;
            warn!(kind = ?piece.kind, x = piece.x, y = piece.y, score = self.score, "top-out");
            return Err(EngineError::TopOut {
                x: piece.x,
                y: piece.y,
            });
        }

        commit(&mut self.board, &piece);
        self.active = Some(piece);
        debug!(kind = ?piece.kind, next = ?self.next.kind, "spawned");
        Ok(())
    }

    /// Advance one gravity step
    ///
    /// With no active piece this spawns one. Otherwise the piece moves down a
    /// row, or locks in place if it cannot, in which case full rows are
    /// cleared and reported.
    pub fn tick(&mut self) -> EngineResult<ClearedRows> {
        self.begin_command()?;

        let Some(mut piece) = self.active else {
            self.spawn()?;
            return Ok(ClearedRows::new());
        };

        erase(&mut self.board, &piece);
        piece.y += 1;

        if !collides(&piece, &self.board) {
            commit(&mut self.board, &piece);
            self.active = Some(piece);
            return Ok(ClearedRows::new());
        }

        piece.y -= 1;
        commit(&mut self.board, &piece);
        self.active = None;
        debug!(kind = ?piece.kind, x = piece.x, y = piece.y, "locked");

        let cleared = line_clear::clear(&mut self.board, &mut self.score);
        self.last_cleared = cleared.clone();
        Ok(cleared)
    }

    pub fn move_left(&mut self) -> EngineResult<()> {
        self.shift(-1)
    }

    pub fn move_right(&mut self) -> EngineResult<()> {
        self.shift(1)
    }

    /// Shift the active piece one column
    ///
    /// Pieces touching the wall column on that side do not move at all. A
    /// shift into occupied cells is reverted.
    fn shift(&mut self, dx: i32) -> EngineResult<()> {
        self.begin_command()?;

        let Some(mut piece) = self.active else {
            return Ok(());
        };

        let wall = if dx < 0 {
            0
        } else {
            self.board.width() as i32 - 1
        };
        let touches_wall = |column: i32| if dx < 0 { column <= wall } else { column >= wall };
        if piece.x == wall || piece.blocks().iter().any(|&(bx, _)| touches_wall(piece.x + bx)) {
            trace!(dx, "move rejected at wall");
            return Ok(());
        }

        erase(&mut self.board, &piece);
        piece.x += dx;
        if collides(&piece, &self.board) {
            piece.x -= dx;
            trace!(dx, "move rejected by collision");
        }
        commit(&mut self.board, &piece);
        self.active = Some(piece);
        Ok(())
    }

    /// Rotate the active piece once, trying wall kicks if needed
    ///
    /// Kicks shift the anchor column by each of [`KICK_OFFSETS`] in turn,
    /// measured from the original column. If none fits, the piece keeps its
    /// original orientation and column.
    pub fn rotate(&mut self) -> EngineResult<()> {
        self.begin_command()?;

        let Some(mut piece) = self.active else {
            return Ok(());
        };

        erase(&mut self.board, &piece);
        let origin = piece.x;
        piece.rotate();

        if collides(&piece, &self.board) {
            let board = &self.board;
            let kicked = KICK_OFFSETS.iter().any(|&offset| {
                piece.rotate_back();
                piece.x = origin + offset;
                piece.rotate();
                !collides(&piece, board)
            });

            if kicked {
                debug!(kind = ?piece.kind, offset = piece.x - origin, "wall kick");
            } else {
                piece.rotate_back();
                piece.x = origin;
                trace!(kind = ?piece.kind, "rotation rejected");
            }
        }

        commit(&mut self.board, &piece);
        self.active = Some(piece);
        Ok(())
    }
}
