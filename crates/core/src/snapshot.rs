//! Detached read-only board views for presentation layers.

use match_grid_types::{GridPosition, Tile};

/// A copy of the board at one instant: `width x height` cells, flat
/// row-major from the bottom row, each empty or holding a tile whose id is
/// a stable key across snapshots.
#[derive(Debug, Clone, PartialEq)]
pub struct GridSnapshot {
    pub width: i32,
    pub height: i32,
    pub cells: Vec<Option<Tile>>,
}

impl GridSnapshot {
    pub fn empty() -> Self {
        Self {
            width: 0,
            height: 0,
            cells: Vec::new(),
        }
    }

    /// The tile at a position, if the position is in bounds and occupied.
    pub fn get(&self, pos: GridPosition) -> Option<Tile> {
        if pos.is_valid(self.width, self.height) {
            self.cells[(pos.y * self.width + pos.x) as usize]
        } else {
            None
        }
    }

    /// Count of occupied cells.
    pub fn tile_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }
}

impl Default for GridSnapshot {
    fn default() -> Self {
        Self::empty()
    }
}
