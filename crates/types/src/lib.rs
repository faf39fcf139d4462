//! Core types module - shared data structures and constants
//!
//! This crate defines the fundamental values passed between the engine and
//! whatever drives it. Everything here is plain data with no dependencies.
//!
//! # Coordinates
//!
//! Boards are addressed as `(x, y)`: `x` is the column (left to right) and
//! `y` is the row, with row 0 at the top and rows increasing downward.
//!
//! # Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_WIDTH` | 10 | Columns used by the harness when none are given |
//! | `DEFAULT_HEIGHT` | 20 | Rows used by the harness when none are given |
//! | `SPAWN_ROW` | 2 | Anchor row of a freshly spawned piece |
//! | `KICK_OFFSETS` | -1, -2, +1, +2 | Column shifts tried when a rotation collides |
//! | `MAX_LINES_PER_CLEAR` | 4 | Rows removed by a single lock at most |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{Cell, Command, ShapeKind};
//!
//! let kind = ShapeKind::from_char('t').unwrap();
//! assert_eq!(kind, ShapeKind::T);
//! assert_eq!(Cell::Block(kind).as_char(), 't');
//!
//! assert_eq!(Command::from_str("left"), Some(Command::MoveLeft));
//! assert_eq!(Command::from_str("space"), Some(Command::HardDrop));
//! ```

/// Board width used when the caller does not choose one
pub const DEFAULT_WIDTH: usize = 10;

/// Board height used when the caller does not choose one
pub const DEFAULT_HEIGHT: usize = 20;

/// Row the anchor of a new piece is placed on
pub const SPAWN_ROW: i32 = 2;

/// Horizontal shifts attempted, in order, when a rotation collides
pub const KICK_OFFSETS: [i32; 4] = [-1, -2, 1, 2];

/// Maximum number of rows removed by one lock
pub const MAX_LINES_PER_CLEAR: usize = 4;

/// Points awarded per number of rows removed (index = rows)
///
/// Index 4 doubles as the fallback for any count the table does not list.
pub const LINE_SCORES: [u32; 5] = [0, 40, 100, 300, 1200];

/// Fixed order the cyclic sequencer walks through
pub const SHAPE_ORDER: [ShapeKind; 7] = [
    ShapeKind::T,
    ShapeKind::S,
    ShapeKind::Z,
    ShapeKind::O,
    ShapeKind::L,
    ShapeKind::J,
    ShapeKind::I,
];

/// Counter value a fresh cyclic sequencer starts from
pub const SEQUENCER_START: u64 = 1;

/// The seven piece shapes
///
/// Letters follow the usual naming: the square is `O`, the straight bar is `I`,
/// and `S`/`Z` and `J`/`L` are mirror pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    T,
    S,
    Z,
    O,
    L,
    J,
    I,
}

impl ShapeKind {
    /// All kinds, in sequencer order
    pub const ALL: [ShapeKind; 7] = SHAPE_ORDER;

    /// Parse a shape from its letter (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::ShapeKind;
    ///
    /// assert_eq!(ShapeKind::from_char('I'), Some(ShapeKind::I));
    /// assert_eq!(ShapeKind::from_char('q'), None);
    /// ```
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            't' => Some(ShapeKind::T),
            's' => Some(ShapeKind::S),
            'z' => Some(ShapeKind::Z),
            'o' => Some(ShapeKind::O),
            'l' => Some(ShapeKind::L),
            'j' => Some(ShapeKind::J),
            'i' => Some(ShapeKind::I),
            _ => None,
        }
    }

    /// Lowercase letter for this shape
    pub fn as_char(self) -> char {
        match self {
            ShapeKind::T => 't',
            ShapeKind::S => 's',
            ShapeKind::Z => 'z',
            ShapeKind::O => 'o',
            ShapeKind::L => 'l',
            ShapeKind::J => 'j',
            ShapeKind::I => 'i',
        }
    }
}

/// A single board cell
///
/// The board itself only ever holds `Empty` or `Block`. `Ghost` and
/// `Clearing` are overlay values that snapshots paint on top for display;
/// collision still lets a block land on a `Ghost` cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Block(ShapeKind),
    Ghost,
    Clearing,
}

impl Cell {
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// True for cells a falling block may move into
    pub fn is_passable(self) -> bool {
        matches!(self, Cell::Empty | Cell::Ghost)
    }

    /// Character used by the board text form
    pub fn as_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Block(kind) => kind.as_char(),
            Cell::Ghost => 'g',
            Cell::Clearing => '*',
        }
    }

    /// Parse a cell from the board text form
    ///
    /// Both `.` and `0` read as empty.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '.' | '0' => Some(Cell::Empty),
            'g' | 'G' => Some(Cell::Ghost),
            '*' => Some(Cell::Clearing),
            other => ShapeKind::from_char(other).map(Cell::Block),
        }
    }
}

/// A board coordinate or piece anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Commands an external driver can issue
///
/// `HardDrop` is not an engine primitive; drivers compose it from repeated
/// ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Advance the simulation by one gravity step
    Tick,
    /// Shift the active piece one column left
    MoveLeft,
    /// Shift the active piece one column right
    MoveRight,
    /// Rotate the active piece once
    Rotate,
    /// Tick until the active piece locks
    HardDrop,
}

impl Command {
    /// Parse a command from its name or harness key
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::Command;
    ///
    /// assert_eq!(Command::from_str("tick"), Some(Command::Tick));
    /// assert_eq!(Command::from_str("a"), Some(Command::MoveLeft));
    /// assert_eq!(Command::from_str("Rotate"), Some(Command::Rotate));
    /// assert_eq!(Command::from_str("jump"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "tick" | "down" | "s" => Some(Command::Tick),
            "left" | "moveleft" | "a" => Some(Command::MoveLeft),
            "right" | "moveright" | "d" => Some(Command::MoveRight),
            "rotate" | "r" | "up" => Some(Command::Rotate),
            "drop" | "harddrop" | "space" | "x" => Some(Command::HardDrop),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Command::Tick => "tick",
            Command::MoveLeft => "left",
            Command::MoveRight => "right",
            Command::Rotate => "rotate",
            Command::HardDrop => "drop",
        }
    }
}
