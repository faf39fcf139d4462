//! Replay module - apply a command list and report what happened

use tracing::info;

use crate::command::apply;
use crate::core::{ClearedRows, EngineError, EngineResult, GameState, PieceSource};
use crate::types::Command;

/// One applied command, as seen by a replay observer
#[derive(Debug, Clone, Copy)]
pub struct Step<'a> {
    pub index: usize,
    pub command: Command,
    pub cleared: &'a ClearedRows,
}

/// Outcome of a replay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReplaySummary {
    /// Commands applied, including the one that topped out
    pub applied: usize,
    pub lines_cleared: usize,
    pub score: u32,
    pub topped_out: bool,
}

/// Apply `commands` in order, calling `observer` after each one
///
/// A top-out stops the replay and is reported through
/// [`ReplaySummary::topped_out`]. Other engine errors are returned.
pub fn replay<S, F>(
    state: &mut GameState<S>,
    commands: &[Command],
    mut observer: F,
) -> EngineResult<ReplaySummary>
where
    S: PieceSource,
    F: FnMut(&GameState<S>, Step<'_>),
{
    let mut summary = ReplaySummary::default();

    for (index, &command) in commands.iter().enumerate() {
        let cleared = match apply(state, command) {
            Ok(cleared) => cleared,
            Err(EngineError::TopOut { x, y }) => {
                summary.applied += 1;
                summary.topped_out = true;
                info!(index, x, y, "replay stopped by top-out");
                break;
            }
            Err(err) => return Err(err),
        };

        summary.applied += 1;
        summary.lines_cleared += cleared.len();
        observer(
            &*state,
            Step {
                index,
                command,
                cleared: &cleared,
            },
        );
    }

    summary.score = state.score();
    Ok(summary)
}
