//! Error types for the game core and its front end.

use thiserror::Error;

use crate::constants::{CELLS, MAX_DEPTH};

/// Reasons a proposed move is rejected by [`crate::rules::validate_move`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// Coordinates outside the grid. Input parsing should have filtered
    /// these, so reaching the core points at a front-end defect.
    #[error("({row},{col}) is outside the board")]
    OutOfRange { row: usize, col: usize },

    /// Target cell already holds a disc.
    #[error("illegal move: ({row},{col}) is not empty")]
    Occupied { row: usize, col: usize },

    /// Placing here would not flank any opposing run.
    #[error("illegal move: ({row},{col}) captures nothing")]
    NoCapture { row: usize, col: usize },
}

impl MoveError {
    /// True for rule violations the player can retry after.
    pub fn is_illegal_move(&self) -> bool {
        matches!(self, MoveError::Occupied { .. } | MoveError::NoCapture { .. })
    }
}

/// Errors from parsing a typed `<row> <col>` move.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseMoveError {
    #[error("expected '<row> <col>', got '{0}'")]
    Format(String),

    #[error("'{0}' is not a number")]
    NotANumber(String),

    #[error("row and column must be in 0-7, got ({row},{col})")]
    OutOfRange { row: usize, col: usize },
}

/// Errors from parsing a board diagram.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardParseError {
    #[error("invalid cell character '{character}' at cell {position}")]
    InvalidCell { character: char, position: usize },

    #[error("expected {cells} cells, got {got}", cells = CELLS)]
    WrongLength { got: usize },
}

/// Errors from validating a [`crate::config::GameConfig`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("search depth must be between 1 and {max}, got {0}", max = MAX_DEPTH)]
    DepthOutOfRange(u32),
}
