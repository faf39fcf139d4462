//! Command module - dispatch of driver commands onto the engine

use tracing::debug;

use crate::core::{ClearedRows, EngineResult, GameState, PieceSource};
use crate::types::Command;

/// Apply one driver command
///
/// Moves and rotations report an empty clear list; only locks clear rows.
pub fn apply<S: PieceSource>(state: &mut GameState<S>, command: Command) -> EngineResult<ClearedRows> {
    match command {
        Command::Tick => state.tick(),
        Command::MoveLeft => state.move_left().map(|()| ClearedRows::new()),
        Command::MoveRight => state.move_right().map(|()| ClearedRows::new()),
        Command::Rotate => state.rotate().map(|()| ClearedRows::new()),
        Command::HardDrop => hard_drop(state),
    }
}

/// Tick until the active piece locks
///
/// Returns the clear report of the locking tick. Does nothing when no piece
/// is falling.
pub fn hard_drop<S: PieceSource>(state: &mut GameState<S>) -> EngineResult<ClearedRows> {
    let mut ticks = 0u32;
    let mut cleared = ClearedRows::new();
    while state.active().is_some() {
        cleared = state.tick()?;
        ticks += 1;
    }
    debug!(ticks, rows = ?cleared.as_slice(), "hard drop");
    Ok(cleared)
}
