//! Core simulation module - pure, deterministic, and testable
//!
//! This crate contains the whole grid simulation for a tile-matching puzzle
//! game: match detection, gravity, refill, swap validation, booster
//! transformation and expansion. It has **zero dependencies** on UI, input
//! handling, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical boards and cascades
//! - **Testable**: Every rule is exercised through plain synchronous calls
//! - **Portable**: Can run under any presentation (engine, terminal, headless)
//! - **Fast**: A clear/gravity/refill cycle on a small board is sub-millisecond
//!
//! # Module Structure
//!
//! - [`grid`]: bounds-checked board storage, row 0 at the bottom
//! - [`rng`]: seeded LCG, generation strategies ([`rng::TileSource`])
//! - [`detector`]: maximal same-kind run detection along rows and columns
//! - [`gravity`]: per-column compaction with move reporting
//! - [`validator`]: live-match and legal-move checks
//! - [`booster`]: special-tile area effects behind one dispatch table
//! - [`manager`]: orchestration - init with retry, swap, clear, refill
//! - [`cascade`]: the reference caller loop resolving cascades to quiescence
//! - [`snapshot`]: detached read-only board views
//!
//! # Game Rules
//!
//! - Runs of 3+ same-colored tiles along a row or column clear.
//! - Matches of 4+ (configurable) leave their middle tile behind,
//!   transformed into a row booster.
//! - A booster swept into a clear, or activated directly, removes its whole
//!   row; booster-triggers-booster chaining is resolved one level deep.
//! - Cleared columns compact downward and empty cells refill from the
//!   seeded generator; cascades repeat until the board is quiet.
//! - Generated boards never start with a match and always have a legal move
//!   (bounded retry with an accept-last fallback).
//!
//! # Example
//!
//! ```
//! use match_grid_core::{cascade, GridManager};
//! use match_grid_core::types::{GridConfig, GridPosition};
//!
//! // A fresh board: no pre-made matches, at least one legal move.
//! let mut engine = GridManager::new(GridConfig::default());
//! engine.initialize(12345);
//! assert!(engine.find_matches().is_empty());
//! assert!(engine.has_any_moves());
//!
//! // Attempt a swap; a fruitless one is undone by swapping back.
//! let a = GridPosition::new(0, 0);
//! let b = GridPosition::new(1, 0);
//! if !engine.swap(a, b) {
//!     engine.swap(a, b);
//! }
//!
//! // Resolve whatever the swap set off.
//! let stats = cascade::resolve(&mut engine);
//! assert!(engine.find_matches().is_empty());
//! # let _ = stats;
//! ```

pub mod booster;
pub mod cascade;
pub mod detector;
pub mod gravity;
pub mod grid;
pub mod manager;
pub mod rng;
pub mod snapshot;
pub mod validator;

pub use match_grid_types as types;

// Re-export commonly used types for convenience
pub use booster::{effect_for, BoosterEffect, RowEffect};
pub use cascade::{resolve, CascadeStats};
pub use detector::find_matches;
pub use gravity::apply_gravity;
pub use grid::Grid;
pub use manager::{ClearOutcome, GridManager};
pub use rng::{RandomTileSource, ScriptedTileSource, SimpleRng, TileSource};
pub use snapshot::GridSnapshot;
pub use validator::{has_matches, has_possible_moves};
