use alloc::collections::BTreeSet;

use crate::*;
pub use fixed::*;
pub use random::*;

mod fixed;
mod random;

/// Decides where mines go. Implementations must keep the start zone clear.
pub trait MineGenerator {
    /// Returns a mine mask with exactly `config.mines` mines, none of them in
    /// [`start_zone`] of `start`.
    fn generate(self, config: BoardConfig, start: Coord2) -> Result<Grid<bool>>;
}

/// The start cell and its neighbors, which never hold a mine.
pub fn start_zone(size: Coord2, start: Coord2) -> BTreeSet<Coord2> {
    let mut zone: BTreeSet<Coord2> = NeighborIter::new(start, size).collect();
    zone.insert(start);
    zone
}

/// Fails when the mines cannot fit outside the start zone.
pub(crate) fn check_feasible(config: BoardConfig, zone: &BTreeSet<Coord2>) -> Result<CellCount> {
    let available = config.total_cells() - zone.len() as CellCount;
    if config.mines > available {
        log::warn!(
            "Cannot place {} mines, only {} cells outside the start zone",
            config.mines,
            available
        );
        Err(GameError::InfeasibleMineCount {
            requested: config.mines,
            available,
        })
    } else {
        Ok(available)
    }
}

/// Computes the truth grid from a mine mask.
pub fn number_cells(mines: &Grid<bool>) -> Grid<CellState> {
    Grid::from_fn(mines.size(), |coords| {
        if mines[coords] {
            CellState::Mine
        } else {
            let adjacent = mines
                .iter_neighbors(coords)
                .filter(|&pos| mines[pos])
                .count();
            CellState::from_adjacent_mines(adjacent as u8)
        }
    })
}
