//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the falling-block engine: piece shapes and rotation,
//! the board, collision and placement, line clearing, the ghost projection
//! and the state machine tying them together. It performs no I/O and keeps
//! no clock; a driver advances it with discrete calls.
//!
//! # Module Structure
//!
//! - [`shapes`]: the seven pieces and their rotation rules
//! - [`sequencer`]: which shape comes next (fixed cycle by default)
//! - [`board`]: the grid of committed cells
//! - [`placement`]: collision tests, stamping and erasing pieces
//! - [`line_clear`]: full-row removal, compaction and scoring
//! - [`ghost`]: landing position of the active piece
//! - [`game_state`]: spawn, gravity, moves, rotation and locking
//! - [`snapshot`]: a copied-out view for display layers
//!
//! # Example
//!
//! ```
//! use blockfall_core::GameState;
//!
//! let mut game = GameState::new();
//! game.reset(10, 20).unwrap();
//!
//! // The first tick spawns a piece, later ticks apply gravity
//! game.tick().unwrap();
//! game.move_left().unwrap();
//! game.rotate().unwrap();
//!
//! let ghost = game.ghost_landing().unwrap();
//! // The rotated S hangs one row below its anchor
//! assert_eq!(ghost.y, 18);
//! assert_eq!(game.score(), 0);
//! ```

pub mod board;
pub mod error;
pub mod game_state;
pub mod ghost;
pub mod line_clear;
pub mod placement;
pub mod sequencer;
pub mod shapes;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, BoardParseError};
pub use error::{EngineError, EngineResult};
pub use game_state::{GameState, Phase, SessionStatus};
pub use line_clear::ClearedRows;
pub use sequencer::{BagSequencer, PieceSource, Sequencer};
pub use shapes::Piece;
pub use snapshot::{GameSnapshot, PieceView};
