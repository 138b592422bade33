use minegrid_core::*;

const SIZES: [(Coord, Coord); 5] = [(3, 3), (5, 7), (9, 9), (16, 16), (16, 30)];
const DENSITIES: [f64; 4] = [0.0, 0.1, 0.15, 0.3];

fn generated(size: Coord2, density: f64, seed: u64, first_cell: Coord2) -> BoardEngine {
    let mut engine = BoardEngine::new(size.0, size.1, density)
        .unwrap()
        .with_seed(seed);
    engine.generate(first_cell).unwrap();
    engine
}

fn disclose(mut engine: BoardEngine) -> Grid<CellState> {
    // any mine ends the game and unlocks the truth grid
    let mine = (0..engine.size().0)
        .flat_map(|row| (0..engine.size().1).map(move |col| (row, col)))
        .find(|&coords| {
            let mut probe = engine.clone();
            probe.reveal(coords) == Ok(RevealOutcome::HitMine)
        });
    match mine {
        Some(coords) => {
            engine.reveal(coords).unwrap();
        }
        None => {
            for row in 0..engine.size().0 {
                for col in 0..engine.size().1 {
                    if !engine.is_finished() {
                        engine.reveal((row, col)).unwrap();
                    }
                }
            }
        }
    }
    engine.truth_grid().unwrap().clone()
}

#[test]
fn generation_places_floor_density_mines_outside_start_zone() {
    for size in SIZES {
        for density in DENSITIES {
            let expected = (f64::from(size.0) * f64::from(size.1) * density) as usize;
            let first_cell = (size.0 / 2, size.1 / 2);
            // the 3x3 board has no room outside a central start zone
            if size == (3, 3) && expected > 0 {
                continue;
            }

            for seed in 0..4 {
                let truth = disclose(generated(size, density, seed, first_cell));

                let mines = truth.iter().filter(|(_, state)| state.is_mine()).count();
                assert_eq!(mines, expected, "{size:?} at {density} with seed {seed}");
                assert!(!truth[first_cell].is_mine());
                for pos in truth.neighbors(first_cell).unwrap() {
                    assert!(!truth[pos].is_mine(), "mine next to first cell at {pos:?}");
                }
            }
        }
    }
}

#[test]
fn numbers_match_adjacent_mines() {
    let truth = disclose(generated((16, 16), 0.15, 5, (0, 0)));

    for (coords, state) in truth.iter() {
        if state.is_mine() {
            continue;
        }
        let adjacent = truth
            .neighbors(coords)
            .unwrap()
            .filter(|&pos| truth[pos].is_mine())
            .count() as u8;
        assert_eq!(state.adjacent_mines(), Some(adjacent), "at {coords:?}");
    }
}

#[test]
fn neighbor_counts_on_every_cell() {
    let grid: Grid<CellState> = Grid::new((6, 8));

    for (coords, _) in grid.iter() {
        let on_row_edge = coords.0 == 0 || coords.0 == 5;
        let on_col_edge = coords.1 == 0 || coords.1 == 7;
        let expected = match (on_row_edge, on_col_edge) {
            (true, true) => 3,
            (true, false) | (false, true) => 5,
            (false, false) => 8,
        };
        assert_eq!(grid.neighbors(coords).unwrap().count(), expected);
    }
    assert_eq!(grid.neighbors((6, 0)).unwrap_err(), GameError::OutOfBounds);
}

#[test]
fn revealed_count_tracks_grid_and_mines_stay_hidden() {
    for seed in 0..16 {
        let mut engine = generated((16, 16), 0.2, seed, (8, 8));

        engine.reveal((8, 8)).unwrap();

        let revealed = engine
            .visible_grid()
            .iter()
            .filter(|(_, cell)| cell.is_revealed())
            .count();
        assert_eq!(engine.revealed_count() as usize, revealed);
        assert_ne!(engine.status(), BoardStatus::Lost);
        assert!(engine.triggered_mine().is_none());
        assert!(matches!(
            engine.state_at((8, 8)),
            Ok(Visibility::Revealed(CellState::Empty))
        ));
    }
}

#[test]
fn mine_next_to_blank_region_is_never_opened() {
    let config = BoardConfig::with_mines((5, 5), 1).unwrap();
    let mut engine = BoardEngine::from_config(config);
    engine
        .generate_with((0, 0), FixedGenerator::new(&[(2, 2)]))
        .unwrap();

    // blank outer ring floods around the numbered ring, which fences off the mine
    assert_eq!(engine.reveal((0, 0)), Ok(RevealOutcome::Won));

    assert_eq!(engine.state_at((2, 2)), Ok(Visibility::Hidden));
    assert_eq!(engine.revealed_count(), 24);
}

#[test]
fn revealing_every_safe_cell_wins() {
    let config = BoardConfig::with_mines((3, 3), 1).unwrap();
    let mut engine = BoardEngine::from_config(config);
    engine
        .generate_with((0, 0), FixedGenerator::new(&[(2, 2)]))
        .unwrap();

    // numbered cells first so nothing floods
    for coords in [(1, 1), (1, 2), (2, 1)] {
        assert_eq!(engine.reveal(coords), Ok(RevealOutcome::Revealed(1)));
    }
    assert_eq!(engine.status(), BoardStatus::Ongoing);
    // the remaining five are one blank region
    assert_eq!(engine.reveal((0, 0)), Ok(RevealOutcome::Won));

    assert_eq!(engine.status(), BoardStatus::Won);
    assert_eq!(engine.revealed_count(), 8);
}

#[test]
fn revealing_a_mine_loses_without_opening_anything_else() {
    let config = BoardConfig::with_mines((6, 6), 2).unwrap();
    let mut engine = BoardEngine::from_config(config);
    engine
        .generate_with((0, 0), FixedGenerator::new(&[(5, 5), (3, 4)]))
        .unwrap();

    assert_eq!(engine.reveal((5, 5)), Ok(RevealOutcome::HitMine));

    assert_eq!(engine.status(), BoardStatus::Lost);
    assert_eq!(engine.revealed_count(), 1);
    assert_eq!(engine.state_at((3, 4)), Ok(Visibility::Hidden));
    assert_eq!(engine.state_at((5, 4)), Ok(Visibility::Hidden));
}

#[test]
fn corner_mines_number_center_two() {
    let config = BoardConfig::with_mines((3, 3), 2).unwrap();
    let mut engine = BoardEngine::from_config(config);
    engine
        .generate_with((0, 2), FixedGenerator::new(&[(0, 0), (2, 2)]))
        .unwrap();

    assert_eq!(engine.reveal((1, 1)), Ok(RevealOutcome::Revealed(1)));
    assert_eq!(
        engine.state_at((1, 1)),
        Ok(Visibility::Revealed(CellState::Numbered(2)))
    );

    let mask = Grid::from_fn((3, 3), |coords| coords == (0, 0) || coords == (2, 2));
    assert_eq!(number_cells(&mask)[(1, 1)], CellState::Numbered(2));
}
