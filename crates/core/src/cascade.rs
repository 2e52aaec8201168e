//! Reference cascade driver.
//!
//! Cascade resolution belongs to the caller, not to the manager: each
//! iteration must re-derive matches from current state, and interactive
//! presentations interleave animation between the steps. This module ships
//! that caller loop in its canonical form for headless consumers, tests,
//! and benches.

use crate::manager::GridManager;
use crate::rng::TileSource;

/// What one full cascade resolved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CascadeStats {
    /// Clear/gravity/refill iterations performed.
    pub steps: u32,
    /// Total tiles removed across all steps.
    pub tiles_cleared: usize,
    /// Total booster tiles created across all steps.
    pub boosters_created: usize,
}

/// Run `find_matches -> clear -> apply_gravity -> refill` until the board
/// is quiet.
pub fn resolve<S: TileSource>(manager: &mut GridManager<S>) -> CascadeStats {
    let mut stats = CascadeStats::default();

    loop {
        let matches = manager.find_matches();
        if matches.is_empty() {
            break;
        }

        let outcome = manager.clear(&matches);
        stats.steps += 1;
        stats.tiles_cleared += outcome.cleared.len();
        stats.boosters_created += outcome.boosters.len();

        manager.apply_gravity();
        manager.refill();
    }

    stats
}
