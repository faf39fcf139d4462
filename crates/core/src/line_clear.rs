//! Line clear module - full-row detection, compaction and scoring
//!
//! Rows are scanned from the bottom (`height - 1`) up to row 1. Row 0 is
//! never checked. Full rows are removed in the order they were found, each at
//! its original index, at most [`MAX_LINES_PER_CLEAR`] per lock. Empty rows
//! are then inserted at the top until the board has its full height again.
//!
//! Because the scan runs bottom-up, every removal happens below all rows still
//! waiting to be removed, so the original indices stay valid.

use arrayvec::ArrayVec;
use tracing::debug;

use crate::board::Board;
use crate::types::{LINE_SCORES, MAX_LINES_PER_CLEAR};

/// Original row indices removed by one lock, bottom row first
pub type ClearedRows = ArrayVec<usize, MAX_LINES_PER_CLEAR>;

/// Points for removing `lines` rows in one lock
///
/// 1 → 40, 2 → 100, 3 → 300, anything else → 1200.
pub fn line_score(lines: usize) -> u32 {
    match lines {
        0 => 0,
        1..=3 => LINE_SCORES[lines],
        _ => LINE_SCORES[MAX_LINES_PER_CLEAR],
    }
}

/// Indices of full rows, bottom-up, excluding row 0
pub fn full_rows(board: &Board) -> Vec<usize> {
    (1..board.height())
        .rev()
        .filter(|&y| board.is_row_full(y))
        .collect()
}

/// Remove full rows, compact the stack and add their score
///
/// Returns the original indices of the removed rows. With no full rows the
/// board and score are left untouched.
pub fn clear(board: &mut Board, score: &mut u32) -> ClearedRows {
    let full = full_rows(board);
    let mut cleared = ClearedRows::new();
    if full.is_empty() {
        return cleared;
    }

    for &y in full.iter().take(MAX_LINES_PER_CLEAR) {
        board.delete_row(y);
        cleared.push(y);
    }

    while board.row_count() < board.height() {
        board.insert_empty_row_top();
    }

    let points = line_score(cleared.len());
    *score = score.saturating_add(points);

    debug!(
        rows = ?cleared.as_slice(),
        left_full = full.len() - cleared.len(),
        points,
        "cleared lines"
    );

    cleared
}
