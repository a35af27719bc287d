//! Match rules: turn sequencing and win detection.
//!
//! A `Match` owns one `Board` and defines:
//! - How a placement attempt is validated and committed
//! - How turns are counted
//! - When the match is over and who won
//!
//! Legality itself is delegated to the board.

pub mod session;
pub mod status;

pub use session::{decided_winner, Match};
pub use status::MatchStatus;
