#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use engine::*;
pub use error::*;
pub use generator::*;
pub use grid::*;
pub use tile::*;
pub use types::*;

mod engine;
mod error;
mod generator;
mod grid;
mod tile;
mod types;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardConfig {
    pub size: Coord2,
    pub mines: CellCount,
}

impl BoardConfig {
    pub const fn new_unchecked(size: Coord2, mines: CellCount) -> Self {
        Self { size, mines }
    }

    /// Derives the mine count as `floor(rows * cols * density)`.
    pub fn from_density(size: Coord2, density: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&density) {
            return Err(GameError::InvalidConfig);
        }
        let total_cells = Self::check_size(size)?;
        // truncation is floor for non-negative values
        let mines = (f64::from(total_cells) * density) as CellCount;
        Ok(Self::new_unchecked(size, mines.min(total_cells)))
    }

    pub fn with_mines(size: Coord2, mines: CellCount) -> Result<Self> {
        let total_cells = Self::check_size(size)?;
        if mines > total_cells {
            return Err(GameError::InvalidConfig);
        }
        Ok(Self::new_unchecked(size, mines))
    }

    fn check_size((rows, cols): Coord2) -> Result<CellCount> {
        if rows == 0 || cols == 0 {
            Err(GameError::InvalidConfig)
        } else {
            Ok(mult(rows, cols))
        }
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }

    pub const fn safe_cells(&self) -> CellCount {
        self.total_cells() - self.mines
    }
}
