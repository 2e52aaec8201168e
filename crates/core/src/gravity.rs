//! Gravity - per-column compaction toward the bottom row
//!
//! Pure reorder plus position update: no tiles are allocated, relative
//! order within a column is preserved, and vacated upper cells end up
//! empty. Tiles of the empty-marker kind do not survive compaction.

use match_grid_types::{GridPosition, TileMove, TileType};

use crate::grid::Grid;

/// Drop every tile as far down its column as it can go.
///
/// Returns the relocations performed (columns left to right, within a
/// column bottom-up) for presentation layers to animate. Applying gravity
/// to an already-settled grid returns no moves.
pub fn apply_gravity(grid: &mut Grid) -> Vec<TileMove> {
    let mut moves = Vec::new();

    for x in 0..grid.width() {
        let mut write_y = 0;
        for y in 0..grid.height() {
            let pos = GridPosition::new(x, y);
            let Some(tile) = grid.get(pos) else {
                continue;
            };
            if tile.kind == TileType::None {
                // Placeholder tiles mark holes; compaction consumes them.
                grid.take(pos);
                continue;
            }
            if y != write_y {
                let to = GridPosition::new(x, write_y);
                grid.take(pos);
                grid.place(to, tile);
                moves.push(TileMove {
                    id: tile.id,
                    kind: tile.kind,
                    from: pos,
                    to,
                });
            }
            write_y += 1;
        }
    }

    moves
}
