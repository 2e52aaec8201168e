//! Board validity checks - live matches and legal moves
//!
//! `has_possible_moves` probes each adjacent pair with a type-only
//! hypothetical swap: a read-only overlay maps the two probed positions to
//! their exchanged kinds while every other cell reads straight from the
//! grid, so no tile is touched. Each probe only scans the two participants'
//! row and column neighborhoods, keeping the whole check O(width * height).

use match_grid_types::{GridPosition, TileType, MIN_MATCH_LEN};

use crate::detector::find_matches;
use crate::grid::Grid;

/// Whether the board currently contains at least one match.
pub fn has_matches(grid: &Grid) -> bool {
    !find_matches(grid).is_empty()
}

/// Whether at least one single adjacent swap would create a match.
///
/// Every unordered pair of orthogonally adjacent occupied cells is probed
/// once (right and top neighbor per cell, row-major from the bottom-left).
/// Pairs of equal kind are skipped as non-informative.
pub fn has_possible_moves(grid: &Grid) -> bool {
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let a = GridPosition::new(x, y);
            let right = GridPosition::new(x + 1, y);
            let top = GridPosition::new(x, y + 1);
            if swap_creates_match(grid, a, right) || swap_creates_match(grid, a, top) {
                return true;
            }
        }
    }
    false
}

/// Probe one candidate swap without mutating the grid.
fn swap_creates_match(grid: &Grid, a: GridPosition, b: GridPosition) -> bool {
    let (Some(kind_a), Some(kind_b)) = (grid.kind_at(a), grid.kind_at(b)) else {
        return false;
    };
    if kind_a == kind_b {
        return false;
    }

    let swapped = |pos: GridPosition| -> Option<TileType> {
        if pos == a {
            Some(kind_b)
        } else if pos == b {
            Some(kind_a)
        } else {
            grid.kind_at(pos)
        }
    };

    in_run(grid, &swapped, a, kind_b) || in_run(grid, &swapped, b, kind_a)
}

/// Whether `pos`, holding `kind` under the overlay, sits in a row or column
/// run of at least [`MIN_MATCH_LEN`].
fn in_run(
    grid: &Grid,
    lookup: &impl Fn(GridPosition) -> Option<TileType>,
    pos: GridPosition,
    kind: TileType,
) -> bool {
    if !kind.is_matchable() {
        return false;
    }

    let count_dir = |dx: i32, dy: i32| -> usize {
        let mut n = 0;
        let mut cur = GridPosition::new(pos.x + dx, pos.y + dy);
        while grid.in_bounds(cur) && lookup(cur) == Some(kind) {
            n += 1;
            cur = GridPosition::new(cur.x + dx, cur.y + dy);
        }
        n
    };

    let horizontal = 1 + count_dir(-1, 0) + count_dir(1, 0);
    if horizontal >= MIN_MATCH_LEN {
        return true;
    }
    let vertical = 1 + count_dir(0, -1) + count_dir(0, 1);
    vertical >= MIN_MATCH_LEN
}
