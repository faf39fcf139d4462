//! Shapes module - the piece catalog and its rotation rules
//!
//! A piece is an anchor cell plus three block offsets relative to it. The
//! anchor is always occupied and is not listed among the offsets.
//!
//! Rotation is pure and never looks at the board:
//! - `L` and `J` step through a fixed table of four offset triples
//! - `T`, `S`, `Z` and `I` turn every offset by `(dx, dy) -> (-dy, dx)`
//! - `O` does not rotate

use crate::types::{Position, ShapeKind};

/// Offset of a block relative to the piece anchor
pub type Offset = (i32, i32);

/// The three non-anchor blocks of a piece
pub type Blocks = [Offset; 3];

/// How a shape responds to a rotate request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationRule {
    /// Rotation leaves the offsets unchanged
    Fixed,
    /// Quarter turn applied algebraically to each offset
    QuarterTurn,
    /// Offsets are looked up by rotation cursor
    Table(&'static [Blocks; 4]),
}

/// Rotation table for the L piece
///
/// ```text
/// O B C      C          A      C B
/// A     =>   O   =>  C B O  =>   O
///            A B                 A
/// ```
const L_ROTATIONS: [Blocks; 4] = [
    [(0, 1), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (0, -1)],
    [(0, -1), (-1, 0), (-2, 0)],
    [(0, 1), (0, -1), (-1, -1)],
];

/// Rotation table for the J piece
const J_ROTATIONS: [Blocks; 4] = [
    [(0, 1), (-1, 0), (-2, 0)],
    [(1, 0), (0, 1), (0, 2)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, -1), (0, 1), (-1, 1)],
];

/// Spawn offsets for a shape
pub fn initial_blocks(kind: ShapeKind) -> Blocks {
    match kind {
        //   B
        // A O C
        ShapeKind::T => [(-1, 0), (0, -1), (1, 0)],
        //   A B
        // C O
        ShapeKind::S => [(0, -1), (1, -1), (-1, 0)],
        // A B
        //   O C
        ShapeKind::Z => [(-1, -1), (0, -1), (1, 0)],
        // C A
        // B O
        ShapeKind::O => [(0, -1), (-1, 0), (-1, -1)],
        ShapeKind::L => L_ROTATIONS[0],
        ShapeKind::J => J_ROTATIONS[0],
        // O A B C
        ShapeKind::I => [(1, 0), (2, 0), (3, 0)],
    }
}

/// Rotation rule for a shape
pub fn rotation_rule(kind: ShapeKind) -> RotationRule {
    match kind {
        ShapeKind::O => RotationRule::Fixed,
        ShapeKind::L => RotationRule::Table(&L_ROTATIONS),
        ShapeKind::J => RotationRule::Table(&J_ROTATIONS),
        ShapeKind::T | ShapeKind::S | ShapeKind::Z | ShapeKind::I => RotationRule::QuarterTurn,
    }
}

/// Apply one rotation to a set of offsets
///
/// Returns the new offsets and the new rotation cursor. The cursor is only
/// meaningful for table-driven shapes and wraps after four states.
pub fn rotate_blocks(kind: ShapeKind, blocks: Blocks, cursor: u8) -> (Blocks, u8) {
    match rotation_rule(kind) {
        RotationRule::Fixed => (blocks, cursor),
        RotationRule::QuarterTurn => (blocks.map(|(dx, dy)| (-dy, dx)), cursor),
        RotationRule::Table(table) => {
            let next = (cursor + 1) % 4;
            (table[next as usize], next)
        }
    }
}

/// A piece: shape, anchor and current block offsets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: ShapeKind,
    pub x: i32,
    pub y: i32,
    blocks: Blocks,
    cursor: u8,
}

impl Piece {
    /// Create a piece in its spawn orientation with the anchor at (0, 0)
    pub fn new(kind: ShapeKind) -> Self {
        Self {
            kind,
            x: 0,
            y: 0,
            blocks: initial_blocks(kind),
            cursor: 0,
        }
    }

    /// Create a piece in its spawn orientation at the given anchor
    pub fn at(kind: ShapeKind, x: i32, y: i32) -> Self {
        Self {
            x,
            y,
            ..Self::new(kind)
        }
    }

    pub fn anchor(&self) -> Position {
        Position::new(self.x, self.y)
    }

    pub fn blocks(&self) -> &Blocks {
        &self.blocks
    }

    /// Rotation cursor (always 0 for shapes without a table)
    pub fn rotation_cursor(&self) -> u8 {
        self.cursor
    }

    /// Rotate once in place
    pub fn rotate(&mut self) {
        let (blocks, cursor) = rotate_blocks(self.kind, self.blocks, self.cursor);
        self.blocks = blocks;
        self.cursor = cursor;
    }

    /// Undo one rotation
    ///
    /// Every rule cycles through four states, so three forward turns are the
    /// inverse of one.
    pub fn rotate_back(&mut self) {
        for _ in 0..3 {
            self.rotate();
        }
    }

    /// Absolute cells covered by the piece, anchor first
    pub fn cells(&self) -> [Position; 4] {
        let (x, y) = (self.x, self.y);
        let [a, b, c] = self.blocks;
        [
            Position::new(x, y),
            Position::new(x + a.0, y + a.1),
            Position::new(x + b.0, y + b.1),
            Position::new(x + c.0, y + c.1),
        ]
    }
}
