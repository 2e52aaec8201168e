//! Booster effects - area expansions for special tiles
//!
//! One dispatch table maps tile kinds to their effect. Both direct
//! activation queries and clear-time expansion route through [`effect_for`],
//! so an effect's reach is defined in exactly one place. New booster kinds
//! (column, area, color bomb) plug in as further `BoosterEffect`
//! implementations and table rows without touching callers.

use match_grid_types::{GridPosition, Tile, TileType};

use crate::grid::Grid;

/// An area effect attached to a booster tile kind.
pub trait BoosterEffect {
    /// Every tile removed when a booster of this kind fires at `origin`,
    /// the booster itself included. Read-only.
    fn affected_tiles(&self, grid: &Grid, origin: Tile) -> Vec<Tile>;
}

/// Clears the booster's entire row.
pub struct RowEffect;

impl BoosterEffect for RowEffect {
    fn affected_tiles(&self, grid: &Grid, origin: Tile) -> Vec<Tile> {
        (0..grid.width())
            .filter_map(|x| grid.get(GridPosition::new(x, origin.position.y)))
            .collect()
    }
}

static ROW_EFFECT: RowEffect = RowEffect;

/// The authoritative kind-to-effect table.
///
/// Returns `None` for non-booster kinds.
pub fn effect_for(kind: TileType) -> Option<&'static dyn BoosterEffect> {
    match kind {
        TileType::RowBooster => Some(&ROW_EFFECT),
        _ => None,
    }
}
