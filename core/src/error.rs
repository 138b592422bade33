use core::fmt;
use thiserror::Error;

use crate::CellCount;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Coordinates out of bounds")]
    OutOfBounds,
    #[error("Too many mines, requested {requested} but only {available} cells are outside the start zone")]
    InfeasibleMineCount {
        requested: CellCount,
        available: CellCount,
    },
    #[error("Invalid transition: {0}")]
    InvalidTransition(Transition),
    #[error("Board needs at least one row and column, and a density between 0 and 1")]
    InvalidConfig,
    #[error("Mine layout does not match the board configuration")]
    InvalidLayout,
    #[error("Game already ended, no new moves are accepted")]
    AlreadyEnded,
}

/// Move that is not allowed in the current board lifecycle.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Transition {
    AlreadyGenerated,
    NotGenerated,
    FlagRevealed,
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::AlreadyGenerated => "board was already generated",
            Self::NotGenerated => "board has not been generated yet",
            Self::FlagRevealed => "cannot flag a revealed cell",
        })
    }
}

pub type Result<T> = core::result::Result<T, GameError>;
