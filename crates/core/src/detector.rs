//! Match detection - maximal same-kind runs along rows and columns
//!
//! Rows are scanned left to right, columns bottom to top, independently.
//! A tile can therefore appear in at most one horizontal and at most one
//! vertical match per call; L and T shaped overlaps come back as two
//! separate matches rather than being merged.

use match_grid_types::{GridPosition, Match, MatchKind, Tile, MIN_MATCH_LEN};

use crate::grid::Grid;

/// Find every maximal run of at least [`MIN_MATCH_LEN`] same-kind matchable
/// tiles. Row matches for the whole board precede column matches in the
/// result. Never mutates the grid.
pub fn find_matches(grid: &Grid) -> Vec<Match> {
    let mut matches = Vec::new();

    for y in 0..grid.height() {
        let row = (0..grid.width()).map(move |x| GridPosition::new(x, y));
        scan_line(grid, row, MatchKind::Horizontal, &mut matches);
    }

    for x in 0..grid.width() {
        let column = (0..grid.height()).map(move |y| GridPosition::new(x, y));
        scan_line(grid, column, MatchKind::Vertical, &mut matches);
    }

    matches
}

/// Walk one line of cells tracking the current run; emit it on every run
/// break (kind change, empty or non-matchable cell, end of line).
fn scan_line(
    grid: &Grid,
    cells: impl Iterator<Item = GridPosition>,
    kind: MatchKind,
    out: &mut Vec<Match>,
) {
    let mut run: Vec<Tile> = Vec::new();

    for pos in cells {
        match grid.get(pos) {
            Some(tile) if tile.is_matchable() => {
                if run.last().is_some_and(|prev| prev.kind != tile.kind) {
                    flush_run(&mut run, kind, out);
                }
                run.push(tile);
            }
            _ => flush_run(&mut run, kind, out),
        }
    }

    flush_run(&mut run, kind, out);
}

fn flush_run(run: &mut Vec<Tile>, kind: MatchKind, out: &mut Vec<Match>) {
    if run.len() >= MIN_MATCH_LEN {
        out.push(Match::new(kind, std::mem::take(run)));
    } else {
        run.clear();
    }
}
