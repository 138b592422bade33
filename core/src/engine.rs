use alloc::collections::{BTreeSet, VecDeque};
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoardStatus {
    Ongoing,
    Won,
    Lost,
}

impl BoardStatus {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FlagOutcome {
    Flagged,
    Unflagged,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    NoChange,
    /// Number of cells opened by this move, flood fill included.
    Revealed(CellCount),
    HitMine,
    Won,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

/// A single game: hidden truth grid plus what the player has uncovered so far.
///
/// Lifecycle is `new` -> `generate` (once) -> any number of `reveal`/`flag` until
/// [`BoardEngine::status`] is no longer [`BoardStatus::Ongoing`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardEngine {
    config: BoardConfig,
    seed: u64,
    truth: Option<Grid<CellState>>,
    board: Grid<Visibility>,
    revealed_count: CellCount,
    flagged_count: CellCount,
}

impl BoardEngine {
    pub fn new(rows: Coord, cols: Coord, mine_density: f64) -> Result<Self> {
        Ok(Self::from_config(BoardConfig::from_density(
            (rows, cols),
            mine_density,
        )?))
    }

    pub fn from_config(config: BoardConfig) -> Self {
        Self {
            config,
            seed: 0,
            truth: None,
            board: Grid::new(config.size),
            revealed_count: 0,
            flagged_count: 0,
        }
    }

    /// Seed used by [`BoardEngine::generate`].
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn config(&self) -> BoardConfig {
        self.config
    }

    pub fn size(&self) -> Coord2 {
        self.config.size
    }

    pub fn total_mines(&self) -> CellCount {
        self.config.mines
    }

    pub fn revealed_count(&self) -> CellCount {
        self.revealed_count
    }

    pub fn flagged_count(&self) -> CellCount {
        self.flagged_count
    }

    pub fn mines_left(&self) -> i64 {
        i64::from(self.config.mines) - i64::from(self.flagged_count)
    }

    pub fn is_generated(&self) -> bool {
        self.truth.is_some()
    }

    pub fn is_finished(&self) -> bool {
        self.status().is_finished()
    }

    /// Places mines with the engine's seed, keeping `first_cell` and its neighbors clear.
    pub fn generate(&mut self, first_cell: Coord2) -> Result<()> {
        self.generate_with(first_cell, RandomGenerator::new(self.seed))
    }

    pub fn generate_with(
        &mut self,
        first_cell: Coord2,
        generator: impl MineGenerator,
    ) -> Result<()> {
        if self.truth.is_some() {
            return Err(GameError::InvalidTransition(Transition::AlreadyGenerated));
        }
        let first_cell = self.board.validate_coords(first_cell)?;

        let mines = generator.generate(self.config, first_cell)?;
        if mines.size() != self.config.size {
            return Err(GameError::InvalidLayout);
        }
        let truth = number_cells(&mines);
        debug_assert_eq!(
            truth.iter().filter(|(_, state)| state.is_mine()).count(),
            self.config.mines as usize
        );

        log::debug!(
            "Generated {:?} board with {} mines, first cell {:?}",
            self.config.size,
            self.config.mines,
            first_cell
        );
        self.truth = Some(truth);
        Ok(())
    }

    /// Player-visible state; never discloses what is under a hidden or flagged cell.
    pub fn state_at(&self, coords: Coord2) -> Result<Visibility> {
        let coords = self.board.validate_coords(coords)?;
        Ok(self.board[coords])
    }

    pub fn visible_grid(&self) -> &Grid<Visibility> {
        &self.board
    }

    /// The full truth grid, only available once the game is over.
    pub fn truth_grid(&self) -> Option<&Grid<CellState>> {
        if self.is_finished() {
            self.truth.as_ref()
        } else {
            None
        }
    }

    pub fn status(&self) -> BoardStatus {
        if self.truth.is_none() {
            BoardStatus::Ongoing
        } else if self.triggered_mine().is_some() {
            BoardStatus::Lost
        } else if self.revealed_count == self.config.safe_cells() {
            BoardStatus::Won
        } else {
            BoardStatus::Ongoing
        }
    }

    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.board
            .iter()
            .find(|(_, cell)| cell.is_exploded())
            .map(|(coords, _)| coords)
    }

    pub fn flag(&mut self, coords: Coord2) -> Result<FlagOutcome> {
        use Visibility::*;

        let coords = self.board.validate_coords(coords)?;
        self.check_generated()?;

        let (next, outcome) = match self.board[coords] {
            Hidden => (Flagged, FlagOutcome::Flagged),
            Flagged => (Hidden, FlagOutcome::Unflagged),
            Revealed(_) => return Err(GameError::InvalidTransition(Transition::FlagRevealed)),
        };
        self.check_not_finished()?;

        self.board[coords] = next;
        match outcome {
            FlagOutcome::Flagged => self.flagged_count += 1,
            FlagOutcome::Unflagged => self.flagged_count -= 1,
        }
        Ok(outcome)
    }

    /// Opens a cell; revealed cells are left alone, even once the game is over.
    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        let coords = self.board.validate_coords(coords)?;
        let Some(truth) = self.truth.as_ref() else {
            return Err(GameError::InvalidTransition(Transition::NotGenerated));
        };

        if self.board[coords].is_revealed() {
            return Ok(RevealOutcome::NoChange);
        }
        self.check_not_finished()?;

        let state = truth[coords];
        let opened = if state.is_mine() {
            log::debug!("Hit mine at {:?}", coords);
            Opened::single(&mut self.board, coords, state)
        } else {
            flood_reveal(truth, &mut self.board, coords)
        };
        self.revealed_count += opened.cells;
        self.flagged_count -= opened.flags;

        if state.is_mine() {
            Ok(RevealOutcome::HitMine)
        } else if self.status() == BoardStatus::Won {
            log::debug!("Board cleared after {} reveals", self.revealed_count);
            Ok(RevealOutcome::Won)
        } else {
            Ok(RevealOutcome::Revealed(opened.cells))
        }
    }

    fn check_generated(&self) -> Result<()> {
        if self.truth.is_none() {
            Err(GameError::InvalidTransition(Transition::NotGenerated))
        } else {
            Ok(())
        }
    }

    fn check_not_finished(&self) -> Result<()> {
        if self.is_finished() {
            Err(GameError::AlreadyEnded)
        } else {
            Ok(())
        }
    }
}

/// Cells opened by one reveal, and how many of them carried a flag.
#[derive(Copy, Clone, Debug, Default)]
struct Opened {
    cells: CellCount,
    flags: CellCount,
}

impl Opened {
    fn single(board: &mut Grid<Visibility>, coords: Coord2, state: CellState) -> Self {
        let mut opened = Self::default();
        opened.open(board, coords, state);
        opened
    }

    fn open(&mut self, board: &mut Grid<Visibility>, coords: Coord2, state: CellState) {
        if board[coords] == Visibility::Flagged {
            self.flags += 1;
        }
        board[coords] = Visibility::Revealed(state);
        self.cells += 1;
    }
}

/// Opens `start` and, through empty cells, the connected region around it.
///
/// Empty cells have no mine neighbor, so only their neighbors are queued and the frontier
/// stops at numbered cells, which are opened but not expanded.
fn flood_reveal(truth: &Grid<CellState>, board: &mut Grid<Visibility>, start: Coord2) -> Opened {
    let mut opened = Opened::default();
    let mut visited = BTreeSet::from([start]);
    let mut to_visit = VecDeque::from([start]);

    while let Some(coords) = to_visit.pop_front() {
        if board[coords].is_revealed() {
            continue;
        }

        let state = truth[coords];
        debug_assert!(!state.is_mine(), "flood fill reached mine at {coords:?}");
        opened.open(board, coords, state);
        log::trace!("Flood opened cell at {:?}: {:?}", coords, state);

        if state == CellState::Empty {
            let board = &*board;
            to_visit.extend(
                truth
                    .iter_neighbors(coords)
                    .filter(|&pos| !board[pos].is_revealed())
                    .filter(|&pos| visited.insert(pos)),
            );
        }
    }

    opened
}
