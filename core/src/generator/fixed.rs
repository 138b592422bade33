use alloc::vec::Vec;

use super::*;

/// Places mines exactly where the caller says, after checking they form a legal board.
#[derive(Clone, Debug, PartialEq)]
pub struct FixedGenerator {
    mines: Vec<Coord2>,
}

impl FixedGenerator {
    pub fn new(mines: &[Coord2]) -> Self {
        Self {
            mines: mines.to_vec(),
        }
    }
}

impl MineGenerator for FixedGenerator {
    fn generate(self, config: BoardConfig, start: Coord2) -> Result<Grid<bool>> {
        let mut mask: Grid<bool> = Grid::new(config.size);
        let start = mask.validate_coords(start)?;
        let zone = start_zone(config.size, start);
        check_feasible(config, &zone)?;

        for coords in self.mines {
            let coords = mask.validate_coords(coords)?;
            if zone.contains(&coords) {
                log::warn!("Fixed mine at {:?} is inside the start zone", coords);
                return Err(GameError::InvalidLayout);
            }
            mask[coords] = true;
        }

        let placed = mask.iter().filter(|&(_, &is_mine)| is_mine).count();
        if placed != config.mines as usize {
            log::warn!(
                "Fixed layout has {} distinct mines, board expects {}",
                placed,
                config.mines
            );
            return Err(GameError::InvalidLayout);
        }

        Ok(mask)
    }
}
