use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;
use minegrid_core::{BoardEngine, BoardStatus, Coord, GameError};

use input::Command;

mod input;
mod render;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Number of rows
    #[arg(long, default_value_t = 9)]
    rows: Coord,

    /// Number of columns
    #[arg(long, default_value_t = 9)]
    cols: Coord,

    /// Share of cells holding a mine, between 0 and 1
    #[arg(short, long, default_value_t = 0.15)]
    density: f64,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let seed = args.seed.unwrap_or_else(rand::random);
    log::debug!("seed: {}", seed);

    let mut engine = BoardEngine::new(args.rows, args.cols, args.density)
        .context("Invalid board settings")?
        .with_seed(seed);

    let stdin = io::stdin();
    play(&mut engine, &mut stdin.lock().lines())?;

    println!("Thanks for playing!");
    Ok(())
}

fn play(
    engine: &mut BoardEngine,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> Result<()> {
    print!("{}", render::player_view(engine.visible_grid()));

    // the board is laid out around the first cell, so it is generated and opened in one step
    loop {
        let Some(line) = prompt(lines, "First cell <row> <col>: ")? else {
            return Ok(());
        };
        let first_cell = match input::parse_coords(&line) {
            Ok(coords) => coords,
            Err(err) => {
                println!("{err:#}");
                continue;
            }
        };
        match engine.generate(first_cell) {
            Ok(()) => {
                engine.reveal(first_cell)?;
                break;
            }
            Err(GameError::OutOfBounds) => println!("{}", GameError::OutOfBounds),
            Err(err) => return Err(err).context("Could not lay out the board"),
        }
    }

    while !engine.is_finished() {
        print!("{}", render::player_view(engine.visible_grid()));
        println!("Mines left: {}", engine.mines_left());

        let Some(line) = prompt(lines, "Move [r|f] <row> <col>, or q: ")? else {
            return Ok(());
        };
        let result = match input::parse_command(&line) {
            Ok(Command::Quit) => return Ok(()),
            Ok(Command::Reveal(coords)) => engine.reveal(coords).map(|outcome| {
                if !outcome.has_update() {
                    println!("Already revealed");
                }
            }),
            Ok(Command::Flag(coords)) => engine.flag(coords).map(|_| ()),
            Err(err) => {
                println!("{err:#}");
                continue;
            }
        };
        if let Err(err) = result {
            println!("{err}");
        }
    }

    match engine.status() {
        BoardStatus::Won => {
            print!("{}", render::player_view(engine.visible_grid()));
            println!("Congratulations, you won!");
        }
        BoardStatus::Lost => {
            println!("That was a mine, game over!");
            if let Some(truth) = engine.truth_grid() {
                print!("{}", render::full_view(truth));
            }
        }
        BoardStatus::Ongoing => {}
    }
    Ok(())
}

/// Reads one line, `None` on end of input.
fn prompt(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    message: &str,
) -> Result<Option<String>> {
    print!("{message}");
    io::stdout().flush()?;
    lines.next().transpose().context("Could not read input")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn script(input: &[&str]) -> impl Iterator<Item = io::Result<String>> {
        input
            .iter()
            .map(|line| Ok::<_, io::Error>(line.to_string()))
            .collect::<Vec<_>>()
            .into_iter()
    }

    #[test]
    fn mine_free_board_is_won_by_the_first_cell() {
        let mut engine = BoardEngine::new(4, 4, 0.0).unwrap();

        play(&mut engine, &mut script(&["0 0", "9 9", "2 3"])).unwrap();

        assert_eq!(engine.status(), BoardStatus::Won);
        assert_eq!(engine.revealed_count(), 16);
    }

    #[test]
    fn quit_and_bad_moves_keep_the_game_going() {
        let mut engine = BoardEngine::new(16, 16, 0.2).unwrap().with_seed(1);

        play(
            &mut engine,
            &mut script(&["8 8", "r 8 8", "x 1 1", "f 1 1", "f 99 1", "q"]),
        )
        .unwrap();

        assert!(engine.is_generated());
        assert_eq!(engine.status(), BoardStatus::Ongoing);
        assert!(engine.revealed_count() >= 9);
    }

    #[test]
    fn infeasible_board_is_an_error() {
        let mut engine = BoardEngine::new(3, 3, 0.5).unwrap();

        assert!(play(&mut engine, &mut script(&["2 2"])).is_err());
    }

    #[test]
    fn end_of_input_ends_the_session() {
        let mut engine = BoardEngine::new(9, 9, 0.15).unwrap();

        play(&mut engine, &mut script(&[])).unwrap();

        assert!(!engine.is_generated());
    }
}
