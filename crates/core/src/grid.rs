//! Grid module - owns the board cells
//!
//! The board is a `width x height` grid where each cell is either empty or
//! holds exactly one tile. Uses a flat vector for cache locality.
//! Coordinates: (x, y) with x ranging left to right and y ranging bottom to
//! top; row y = 0 is the gravity target.

use match_grid_types::{GridPosition, Tile, TileType};

/// The game board - dynamically sized, flat row-major storage.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    width: i32,
    height: i32,
    /// Flat array of cells, row-major order (y * width + x), y = 0 first.
    cells: Vec<Option<Tile>>,
}

impl Grid {
    /// Create a new empty grid.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is not positive.
    pub fn new(width: i32, height: i32) -> Self {
        assert!(width > 0 && height > 0, "grid dimensions must be positive");
        Self {
            width,
            height,
            cells: vec![None; (width * height) as usize],
        }
    }

    /// Calculate flat index from a position.
    /// Returns None if out of bounds.
    #[inline(always)]
    fn index(&self, pos: GridPosition) -> Option<usize> {
        if pos.is_valid(self.width, self.height) {
            Some((pos.y * self.width + pos.x) as usize)
        } else {
            None
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Whether a position lies on the board.
    pub fn in_bounds(&self, pos: GridPosition) -> bool {
        pos.is_valid(self.width, self.height)
    }

    /// Get the tile at a position.
    /// Returns None if the cell is empty or the position is out of bounds.
    pub fn get(&self, pos: GridPosition) -> Option<Tile> {
        self.index(pos).and_then(|idx| self.cells[idx])
    }

    /// Get the kind of the tile at a position, if any.
    pub fn kind_at(&self, pos: GridPosition) -> Option<TileType> {
        self.get(pos).map(|tile| tile.kind)
    }

    /// Place a tile at a position, updating the tile's `position` field to
    /// match the cell. Overwrites whatever the cell held.
    /// Returns false if out of bounds.
    pub fn place(&mut self, pos: GridPosition, mut tile: Tile) -> bool {
        match self.index(pos) {
            Some(idx) => {
                tile.position = pos;
                self.cells[idx] = Some(tile);
                true
            }
            None => false,
        }
    }

    /// Remove and return the tile at a position.
    pub fn take(&mut self, pos: GridPosition) -> Option<Tile> {
        self.index(pos).and_then(|idx| self.cells[idx].take())
    }

    /// Whether a position is on the board and holds no tile.
    pub fn is_empty(&self, pos: GridPosition) -> bool {
        matches!(self.index(pos), Some(idx) if self.cells[idx].is_none())
    }

    /// Whether a position is on the board and holds a tile.
    pub fn is_occupied(&self, pos: GridPosition) -> bool {
        self.get(pos).is_some()
    }

    /// Mutable access to the tile at a position, for in-place retyping.
    pub(crate) fn get_mut(&mut self, pos: GridPosition) -> Option<&mut Tile> {
        match self.index(pos) {
            Some(idx) => self.cells[idx].as_mut(),
            None => None,
        }
    }

    /// Empty every cell.
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
    }

    /// Flat read-only view of the cells, row-major from the bottom row.
    pub fn cells(&self) -> &[Option<Tile>] {
        &self.cells
    }

    /// Iterate all positions in fill order (row-major from the bottom row).
    pub fn positions(&self) -> impl Iterator<Item = GridPosition> {
        let (width, height) = (self.width, self.height);
        (0..height).flat_map(move |y| (0..width).map(move |x| GridPosition::new(x, y)))
    }

    /// Count of occupied cells.
    pub fn tile_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }
}
