//! # rust-bricks
//!
//! Board engine for Bricks, a two-player domino tiling game. Players take
//! turns placing 2-cell bricks of a fixed orientation (one player horizontal,
//! the other vertical) on a small grid until one orientation can no longer be
//! placed.
//!
//! ## Design Principles
//!
//! 1. **Board is the source of truth**: occupancy, legality, enumeration and
//!    copying all live in `Board`. Nothing else touches cells.
//!
//! 2. **Value semantics for search**: `Board::board_copy` yields a fully
//!    independent board. Search explores copies and discards them; it never
//!    needs an undo log.
//!
//! 3. **Configuration over globals**: grid size is an immutable
//!    `BoardConfig` passed in at construction, so different sizes coexist.
//!
//! ## Architecture
//!
//! - **Match over Board**: `Match` validates through the board, commits, and
//!   counts turns. Win detection is evaluated lazily from the board.
//!
//! - **Deterministic enumeration**: legal placements are always listed in
//!   row-major order, which makes search reproducible.
//!
//! ## Modules
//!
//! - `core`: coordinates, orientation, configuration, errors, RNG
//! - `board`: occupancy bitmap, bricks, the board engine
//! - `rules`: match sequencing and win detection
//! - `search`: agents, minimax, self-play driver

pub mod board;
pub mod core;
pub mod rules;
pub mod search;

// Re-export commonly used types
pub use crate::core::{
    BoardConfig, BricksError, Coord, GameRng, MatchConfig, Orientation, PlacementFault, Result,
};

pub use crate::board::{Board, Brick, Occupancy};

pub use crate::rules::{Match, MatchStatus};

pub use crate::search::{
    play_match, Agent, FirstAgent, MatchRecord, MinimaxAgent, RandomAgent, SearchConfig,
    SearchStats,
};
