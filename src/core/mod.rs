//! Core engine types: coordinates, orientation, configuration, errors, RNG.
//!
//! These are the small value types every other module builds on. None of
//! them own game state.

pub mod config;
pub mod coord;
pub mod error;
pub mod orientation;
pub mod rng;

pub use config::{BoardConfig, MatchConfig, DEFAULT_COLS, DEFAULT_ROWS};
pub use coord::Coord;
pub use error::{BricksError, PlacementFault, Result};
pub use orientation::Orientation;
pub use rng::GameRng;
