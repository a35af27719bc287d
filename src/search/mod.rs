//! Look-ahead search agents.
//!
//! ## Overview
//!
//! Agents choose placements by exploring hypothetical boards. They only ever
//! see a borrowed board and build their own copies from it, so the live
//! match is never perturbed by search.
//!
//! - `Agent`: the placement-choosing interface
//! - `MinimaxAgent`: alpha-beta negamax with a transposition table
//! - `RandomAgent`, `FirstAgent`: baselines
//! - `play_match`: drive a `Match` to completion with two agents
//!
//! ## Usage
//!
//! ```rust
//! use rust_bricks::rules::Match;
//! use rust_bricks::search::{play_match, MinimaxAgent, RandomAgent, SearchConfig};
//!
//! let mut game = Match::default();
//! let mut horizontal = MinimaxAgent::new(SearchConfig::default().with_max_depth(4));
//! let mut vertical = RandomAgent::new(42);
//!
//! let record = play_match(&mut game, &mut horizontal, &mut vertical).unwrap();
//! assert!(record.winner.is_some());
//! ```

pub mod agent;
pub mod config;
pub mod minimax;
pub mod self_play;
pub mod stats;

pub use agent::{Agent, FirstAgent, RandomAgent};
pub use config::SearchConfig;
pub use minimax::{mobility, MinimaxAgent, WIN_SCORE};
pub use self_play::{play_match, MatchRecord};
pub use stats::SearchStats;
