use serde::{Deserialize, Serialize};

/// Ground truth for a single cell, fixed once the board is generated.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellState {
    Empty,
    Mine,
    /// Count of adjacent mines, always in `1..=8`.
    Numbered(u8),
}

impl CellState {
    pub const fn from_adjacent_mines(count: u8) -> Self {
        if count == 0 {
            Self::Empty
        } else {
            Self::Numbered(count)
        }
    }

    pub const fn is_mine(self) -> bool {
        matches!(self, Self::Mine)
    }

    /// Number shown once revealed, `None` for mines.
    pub const fn adjacent_mines(self) -> Option<u8> {
        match self {
            Self::Empty => Some(0),
            Self::Numbered(count) => Some(count),
            Self::Mine => None,
        }
    }
}

impl Default for CellState {
    fn default() -> Self {
        Self::Empty
    }
}

/// Player-visible state of a cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Visibility {
    Hidden,
    Flagged,
    Revealed(CellState),
}

impl Visibility {
    pub const fn is_unrevealed(self) -> bool {
        matches!(self, Self::Hidden | Self::Flagged)
    }

    pub const fn is_revealed(self) -> bool {
        matches!(self, Self::Revealed(_))
    }

    pub const fn is_exploded(self) -> bool {
        matches!(self, Self::Revealed(CellState::Mine))
    }
}

impl Default for Visibility {
    fn default() -> Self {
        Self::Hidden
    }
}
