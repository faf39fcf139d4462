//! Error types for engine operations
//!
//! Only top-out ends a session. Rejected moves are not errors; they leave the
//! state unchanged and return `Ok`.

use thiserror::Error;

/// Errors returned by [`GameState`](crate::GameState) commands
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    /// A command was issued before `reset`
    #[error("engine used before reset()")]
    Uninitialized,

    /// `reset` was given a board that cannot hold a spawned piece
    #[error("invalid board dimensions {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    /// The spawn position was already blocked
    #[error("top-out: spawn position ({x}, {y}) is blocked, session over")]
    TopOut { x: i32, y: i32 },

    /// A command arrived after the session ended
    #[error("session is over; reset() to start a new one")]
    SessionOver,
}

impl EngineError {
    /// True for conditions that end the session
    pub fn is_session_end(&self) -> bool {
        matches!(self, EngineError::TopOut { .. } | EngineError::SessionOver)
    }
}

/// Result type alias for engine operations
pub type EngineResult<T> = Result<T, EngineError>;
