use anyhow::{Context, Result, bail};
use minegrid_core::{Coord, Coord2};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Reveal(Coord2),
    Flag(Coord2),
    Quit,
}

/// Parses `r <row> <col>`, `f <row> <col>` or `q`, with 1-based coordinates.
pub fn parse_command(line: &str) -> Result<Command> {
    let mut words = line.split_whitespace();
    let Some(action) = words.next() else {
        bail!("Expected a command: r <row> <col>, f <row> <col> or q");
    };

    let command = match action.to_ascii_lowercase().as_str() {
        "r" | "reveal" => Command::Reveal(parse_coords_from(&mut words)?),
        "f" | "flag" => Command::Flag(parse_coords_from(&mut words)?),
        "q" | "quit" => Command::Quit,
        other => bail!("Unknown command {other:?}, use r, f or q"),
    };

    if words.next().is_some() {
        bail!("Too many arguments");
    }
    Ok(command)
}

/// Parses `<row> <col>`, 1-based.
pub fn parse_coords(line: &str) -> Result<Coord2> {
    let mut words = line.split_whitespace();
    let coords = parse_coords_from(&mut words)?;
    if words.next().is_some() {
        bail!("Too many arguments");
    }
    Ok(coords)
}

fn parse_coords_from<'a>(words: &mut impl Iterator<Item = &'a str>) -> Result<Coord2> {
    let row = parse_axis(words.next(), "row")?;
    let col = parse_axis(words.next(), "col")?;
    Ok((row, col))
}

fn parse_axis(word: Option<&str>, name: &str) -> Result<Coord> {
    let word = word.with_context(|| format!("Missing {name}"))?;
    let value: Coord = word
        .parse()
        .with_context(|| format!("Invalid {name} {word:?}"))?;
    value
        .checked_sub(1)
        .with_context(|| format!("{name} starts at 1"))
}
