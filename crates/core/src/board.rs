//! Board module - manages the game grid
//!
//! The board is a `width x height` grid of [`Cell`] values stored as a flat
//! row-major vector. Row 0 is the top row.
//!
//! The board only stores cells. It performs no collision checks of its own;
//! callers validate coordinates through the placement module before writing.
//! `get`/`set` still refuse out-of-range coordinates instead of panicking.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::types::{Cell, ShapeKind};

/// Errors produced while reading a board from its text form
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardParseError {
    #[error("board text contains no rows")]
    Empty,

    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("row {row}, column {column}: unknown cell '{found}'")]
    UnknownCell {
        row: usize,
        column: usize,
        found: char,
    },
}

/// The game board
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    width: usize,
    height: usize,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::Empty; width * height],
        }
    }

    /// Build a board from rows of cells
    ///
    /// Every row must have the same length.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self, BoardParseError> {
        let width = rows.first().map(Vec::len).ok_or(BoardParseError::Empty)?;
        let height = rows.len();
        let mut cells = Vec::with_capacity(width * height);
        for (row, line) in rows.into_iter().enumerate() {
            if line.len() != width {
                return Err(BoardParseError::RaggedRow {
                    row,
                    expected: width,
                    found: line.len(),
                });
            }
            cells.extend(line);
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Parse the text form produced by `Display`
    ///
    /// Cells are single characters, optionally separated by whitespace.
    /// Blank lines are skipped.
    pub fn parse(text: &str) -> Result<Self, BoardParseError> {
        let mut rows = Vec::new();
        for line in text.lines().filter(|l| !l.trim().is_empty()) {
            let row = rows.len();
            let cells = line
                .chars()
                .filter(|c| !c.is_whitespace())
                .enumerate()
                .map(|(column, c)| {
                    Cell::from_char(c).ok_or(BoardParseError::UnknownCell {
                        row,
                        column,
                        found: c,
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            rows.push(cells);
        }
        Self::from_rows(rows)
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if !self.in_bounds(x, y) {
            return None;
        }
        Some((y as usize) * self.width + (x as usize))
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Session height of the board
    ///
    /// During a line clear the live row count can dip below this; see
    /// [`row_count`](Self::row_count).
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of rows currently stored
    pub fn row_count(&self) -> usize {
        if self.width == 0 {
            return 0;
        }
        self.cells.len() / self.width
    }

    /// Check whether (x, y) addresses a stored cell
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && (x as usize) < self.width && y >= 0 && (y as usize) < self.row_count()
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Shape stored at (x, y), if any
    pub fn shape_at(&self, x: i32, y: i32) -> Option<ShapeKind> {
        match self.get(x, y)? {
            Cell::Block(kind) => Some(kind),
            _ => None,
        }
    }

    /// Cells of row `y`
    pub fn row(&self, y: usize) -> Option<&[Cell]> {
        if y >= self.row_count() {
            return None;
        }
        let start = y * self.width;
        Some(&self.cells[start..start + self.width])
    }

    /// Iterate over rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        // chunks_exact panics on zero, and a zero-width board has no rows anyway
        self.cells.chunks_exact(self.width.max(1))
    }

    /// Check if a row contains no empty cell
    pub fn is_row_full(&self, y: usize) -> bool {
        self.row(y)
            .is_some_and(|row| row.iter().all(|cell| !cell.is_empty()))
    }

    /// Remove row `y`; rows below it move up one index
    ///
    /// The row count drops by one until a row is inserted again.
    pub fn delete_row(&mut self, y: usize) -> bool {
        if y >= self.row_count() {
            return false;
        }
        let start = y * self.width;
        self.cells.drain(start..start + self.width);
        true
    }

    /// Insert an empty row above row 0
    pub fn insert_empty_row_top(&mut self) {
        self.cells
            .splice(0..0, std::iter::repeat(Cell::Empty).take(self.width));
    }

    /// Number of non-empty cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Empty every cell, keeping the dimensions
    pub fn clear(&mut self) {
        self.cells.clear();
        self.cells.resize(self.width * self.height, Cell::Empty);
    }

    /// Replace the board with an empty one of the given dimensions
    pub fn reset(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
        self.clear();
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
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

impl FromStr for Board {
    type Err = BoardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
