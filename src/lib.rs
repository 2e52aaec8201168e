//! Match-grid (workspace facade crate).
//!
//! This package keeps the public `match_grid::{core,types}` API stable while the
//! implementation lives in dedicated crates under `crates/`.

pub use match_grid_core as core;
pub use match_grid_types as types;
