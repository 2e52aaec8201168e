//! Grid manager - owns the board and orchestrates the simulation
//!
//! This module ties together the grid, tile generation, match detection,
//! gravity, and booster effects behind the engine's public mutation API.
//! Cascade resolution deliberately stays outside: the manager exposes
//! synchronous single-step primitives and callers loop
//! find_matches -> clear -> apply_gravity -> refill, re-deriving matches
//! from current state on every iteration.

use std::collections::HashSet;

use match_grid_types::{
    GridConfig, GridPosition, Match, MatchKind, Tile, TileMove, TileType, MAX_INIT_ATTEMPTS,
};

use crate::booster::effect_for;
use crate::detector;
use crate::gravity;
use crate::grid::Grid;
use crate::rng::{RandomTileSource, TileSource};
use crate::snapshot::GridSnapshot;
use crate::validator;

/// The tiles removed and the boosters left behind by one clear.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClearOutcome {
    /// Tiles removed from the grid, `is_matched` set, in clearing order.
    pub cleared: Vec<Tile>,
    /// Survivor tiles transformed (or synthesized) into boosters, still on
    /// the grid.
    pub boosters: Vec<Tile>,
}

/// Central simulation state: the grid plus its collaborators.
#[derive(Debug, Clone)]
pub struct GridManager<S: TileSource = RandomTileSource> {
    grid: Grid,
    source: S,
    min_tiles_for_booster: usize,
}

impl GridManager<RandomTileSource> {
    /// Create a manager with the default uniform random source.
    /// The grid starts empty; call [`initialize`](Self::initialize) or
    /// [`refill`](Self::refill) to populate it.
    pub fn new(config: GridConfig) -> Self {
        let seed = config.seed;
        Self::with_source(config, RandomTileSource::new(seed))
    }
}

impl<S: TileSource> GridManager<S> {
    /// Create a manager with a custom generation strategy.
    pub fn with_source(config: GridConfig, source: S) -> Self {
        Self {
            grid: Grid::new(config.width, config.height),
            source,
            min_tiles_for_booster: config.min_tiles_for_booster,
        }
    }

    pub fn width(&self) -> i32 {
        self.grid.width()
    }

    pub fn height(&self) -> i32 {
        self.grid.height()
    }

    pub fn min_tiles_for_booster(&self) -> usize {
        self.min_tiles_for_booster
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Generate a fresh board, retrying until it has no pre-made matches
    /// and at least one legal move.
    ///
    /// Bounded at [`MAX_INIT_ATTEMPTS`]; on exhaustion the last generated
    /// board stands even if invalid (possible only under pathological
    /// palettes). Every cell fill advances the generator, so retries
    /// diverge under a fixed seed. Returns the number of attempts used.
    pub fn initialize(&mut self, seed: u32) -> u32 {
        self.source.set_seed(seed);

        let mut attempts = 0;
        while attempts < MAX_INIT_ATTEMPTS {
            attempts += 1;
            self.grid.clear();
            self.refill();
            if !validator::has_matches(&self.grid) && validator::has_possible_moves(&self.grid) {
                break;
            }
        }
        attempts
    }

    /// Exchange the tiles at two positions and report whether the board now
    /// contains a match.
    ///
    /// Valid only for in-bounds, occupied, orthogonally adjacent positions;
    /// anything else is a mutation-free no-op returning false. The swap is
    /// never auto-reverted; callers undo a fruitless swap by swapping the
    /// same pair again, which restores the original state exactly.
    pub fn swap(&mut self, a: GridPosition, b: GridPosition) -> bool {
        if !a.is_adjacent(b) {
            return false;
        }
        let (Some(tile_a), Some(tile_b)) = (self.grid.get(a), self.grid.get(b)) else {
            return false;
        };

        self.grid.place(a, tile_b);
        self.grid.place(b, tile_a);

        validator::has_matches(&self.grid)
    }

    /// All maximal runs currently on the board.
    pub fn find_matches(&self) -> Vec<Match> {
        detector::find_matches(&self.grid)
    }

    pub fn has_matches(&self) -> bool {
        validator::has_matches(&self.grid)
    }

    /// Whether any single adjacent swap would create a match.
    pub fn has_any_moves(&self) -> bool {
        validator::has_possible_moves(&self.grid)
    }

    /// Read-only expansion query: the tiles a booster at `pos` would
    /// remove. Empty for out-of-bounds, empty, or non-booster positions.
    pub fn get_booster_affected_tiles(&self, pos: GridPosition) -> Vec<Tile> {
        let Some(tile) = self.grid.get(pos) else {
            return Vec::new();
        };
        match effect_for(tile.kind) {
            Some(effect) => effect.affected_tiles(&self.grid, tile),
            None => Vec::new(),
        }
    }

    /// Synthesize the activation match for the booster at `pos`, ready to
    /// feed through [`clear`](Self::clear) so activations and natural
    /// matches share one pipeline. `None` when `pos` holds no booster.
    pub fn booster_activation(&self, pos: GridPosition) -> Option<Match> {
        let affected = self.get_booster_affected_tiles(pos);
        if affected.is_empty() {
            return None;
        }
        Some(Match::new(MatchKind::BoosterActivation, affected))
    }

    /// Clear a batch of matches.
    ///
    /// Long natural matches leave a booster survivor behind; boosters swept
    /// into the clear expand their own affected set one level; survivors
    /// are never cleared, even when an expansion reaches them.
    pub fn clear(&mut self, matches: &[Match]) -> ClearOutcome {
        // Survivor candidates: the middle tile of each long natural match.
        let mut survivors: Vec<GridPosition> = Vec::new();
        for m in matches {
            if m.kind == MatchKind::BoosterActivation {
                continue;
            }
            if m.tiles.len() >= self.min_tiles_for_booster {
                let pos = m.tiles[m.tiles.len() / 2].position;
                if !survivors.contains(&pos) {
                    survivors.push(pos);
                }
            }
        }

        // Union of every matched position, survivors excluded, first-seen
        // order preserved.
        let mut seen: HashSet<GridPosition> = HashSet::new();
        let mut to_clear: Vec<GridPosition> = Vec::new();
        for m in matches {
            for tile in &m.tiles {
                if survivors.contains(&tile.position) {
                    continue;
                }
                if seen.insert(tile.position) {
                    to_clear.push(tile.position);
                }
            }
        }

        // Single-level chaining: boosters already slated for clearing pull
        // their affected tiles in; boosters swept in by that expansion are
        // cleared without expanding again.
        let base_len = to_clear.len();
        for i in 0..base_len {
            let pos = to_clear[i];
            let Some(tile) = self.grid.get(pos) else {
                continue;
            };
            let Some(effect) = effect_for(tile.kind) else {
                continue;
            };
            for hit in effect.affected_tiles(&self.grid, tile) {
                if seen.insert(hit.position) {
                    to_clear.push(hit.position);
                }
            }
        }

        // Survivors stay on the board no matter what the expansion swept.
        to_clear.retain(|pos| !survivors.contains(pos));

        let mut cleared = Vec::with_capacity(to_clear.len());
        for pos in &to_clear {
            if let Some(mut tile) = self.grid.take(*pos) {
                tile.is_matched = true;
                cleared.push(tile);
            }
        }

        // Transform survivors in place, preserving identity and position.
        let mut boosters = Vec::with_capacity(survivors.len());
        for pos in survivors {
            match self.grid.get_mut(pos) {
                Some(tile) => {
                    tile.kind = TileType::RowBooster;
                    tile.is_matched = false;
                    boosters.push(*tile);
                }
                None => {
                    // Survivor cell emptied out from under us; synthesize a
                    // fresh booster there rather than leave a hole.
                    let tile = self.source.make_tile(TileType::RowBooster, pos);
                    self.grid.place(pos, tile);
                    boosters.push(tile);
                }
            }
        }

        ClearOutcome { cleared, boosters }
    }

    /// Drop every tile as far down its column as it can go.
    pub fn apply_gravity(&mut self) -> Vec<TileMove> {
        gravity::apply_gravity(&mut self.grid)
    }

    /// Fill every empty cell with a freshly generated tile (row-major from
    /// the bottom row). Returns the spawned tiles. Run strictly after
    /// [`apply_gravity`](Self::apply_gravity) so new tiles land in the
    /// vacated upper cells.
    pub fn refill(&mut self) -> Vec<Tile> {
        let mut spawned = Vec::new();
        for y in 0..self.grid.height() {
            for x in 0..self.grid.width() {
                let pos = GridPosition::new(x, y);
                if self.grid.is_empty(pos) {
                    let tile = self.source.next_tile(pos);
                    self.grid.place(pos, tile);
                    spawned.push(tile);
                }
            }
        }
        spawned
    }

    /// Detached read-only copy of the board.
    pub fn snapshot(&self) -> GridSnapshot {
        let mut out = GridSnapshot::empty();
        self.snapshot_into(&mut out);
        out
    }

    /// Write the board into an existing snapshot, reusing its allocation.
    pub fn snapshot_into(&self, out: &mut GridSnapshot) {
        out.width = self.grid.width();
        out.height = self.grid.height();
        out.cells.clear();
        out.cells.extend_from_slice(self.grid.cells());
    }
}
