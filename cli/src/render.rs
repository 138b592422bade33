use std::fmt::Write;

use minegrid_core::{CellState, Coord2, Grid, Visibility};

const HIDDEN: char = '?';
const FLAG: char = '@';
const MINE: char = 'X';

fn state_char(state: CellState) -> char {
    match state {
        CellState::Empty => ' ',
        CellState::Mine => MINE,
        CellState::Numbered(count) => char::from(b'0' + count),
    }
}

fn visibility_char(cell: Visibility) -> char {
    match cell {
        Visibility::Hidden => HIDDEN,
        Visibility::Flagged => FLAG,
        Visibility::Revealed(state) => state_char(state),
    }
}

/// What the player sees: only revealed cells show their contents.
pub fn player_view(grid: &Grid<Visibility>) -> String {
    render(grid.size(), grid.rows().map(|row| row.copied().map(visibility_char)))
}

/// Every cell's contents, for the end of the game.
pub fn full_view(grid: &Grid<CellState>) -> String {
    render(grid.size(), grid.rows().map(|row| row.copied().map(state_char)))
}

/// Lays out a table with 1-based column headers and row labels.
fn render(
    (_, cols): Coord2,
    rows: impl Iterator<Item = impl Iterator<Item = char>>,
) -> String {
    let width = cols.to_string().len().max(1);
    let mut out = String::new();

    let header = (0..=cols).map(|col| format!("{col:>width$}"));
    let separator = "-".repeat((width + 3) * (usize::from(cols) + 1));

    let _ = writeln!(out, "{}", header.collect::<Vec<_>>().join(" | "));
    let _ = writeln!(out, "{separator}");
    for (index, row) in rows.enumerate() {
        let cells = row.map(|cell| format!("{cell:>width$}"));
        let _ = writeln!(
            out,
            "{:>width$} | {}",
            index + 1,
            cells.collect::<Vec<_>>().join(" | ")
        );
        let _ = writeln!(out, "{separator}");
    }
    out
}
