//! Board state engine.
//!
//! - `Board`: occupancy, legality checks, enumeration, deep copy
//! - `Brick`: an orientation plus a head coordinate
//! - `Occupancy`: the packed per-cell bitmap behind legality checks
//!
//! The board is the single source of truth for geometry. Matches and
//! search agents only ever reach occupancy through it.

pub mod brick;
pub mod grid;
pub mod occupancy;

pub use brick::Brick;
pub use grid::Board;
pub use occupancy::Occupancy;
