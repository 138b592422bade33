use alloc::vec::Vec;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::index;

use super::*;

/// Uniformly random placement outside the start zone, reproducible from `seed`.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomGenerator {
    seed: u64,
}

impl RandomGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl MineGenerator for RandomGenerator {
    fn generate(self, config: BoardConfig, start: Coord2) -> Result<Grid<bool>> {
        let mut mines: Grid<bool> = Grid::new(config.size);
        let start = mines.validate_coords(start)?;
        let zone = start_zone(config.size, start);
        check_feasible(config, &zone)?;

        let candidates: Vec<Coord2> = mines
            .iter()
            .map(|(coords, _)| coords)
            .filter(|coords| !zone.contains(coords))
            .collect();

        // exact sampling of distinct cells, no retry loop
        let mut rng = SmallRng::seed_from_u64(self.seed);
        for i in index::sample(&mut rng, candidates.len(), config.mines as usize) {
            mines[candidates[i]] = true;
        }

        log::debug!(
            "Placed {} mines on {:?} board, start {:?}, seed {}",
            config.mines,
            config.size,
            start,
            self.seed
        );
        Ok(mines)
    }
}
