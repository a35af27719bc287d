//! Drive a match to completion with two agents.
//!
//! The driver plays the role the interactive front end plays for a human:
//! it asks whoever is to move for a placement, hands them a copy of the live
//! board, and commits the answer through the match so turn counting and win
//! detection stay in one place.

use tracing::debug;

use crate::board::Brick;
use crate::core::{Orientation, Result};
use crate::rules::Match;

use super::agent::Agent;

/// Outcome of a driven match.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchRecord {
    /// Winner as reported by `Match::winner`.
    pub winner: Option<Orientation>,

    /// Every committed placement, in order.
    pub placements: Vec<Brick>,

    /// Turn counter when play stopped.
    pub turns: u32,
}

/// Play `game` from its current state until `winner()` reports a result.
///
/// Agents alternate according to `Match::to_move`. An agent that proposes an
/// illegal placement aborts the match with `InvalidPlacement`; the match
/// itself is left as it was before that proposal.
pub fn play_match(
    game: &mut Match,
    horizontal: &mut dyn Agent,
    vertical: &mut dyn Agent,
) -> Result<MatchRecord> {
    let mut placements = Vec::new();

    while game.winner().is_none() {
        let orientation = game.to_move();
        let agent: &mut dyn Agent = match orientation {
            Orientation::Horizontal => &mut *horizontal,
            Orientation::Vertical => &mut *vertical,
        };

        let snapshot = game.board().board_copy();
        let Some(head) = agent.next_placement(&snapshot, orientation) else {
            break;
        };

        game.place_brick(orientation, head)?;
        placements.push(Brick::new(orientation, head));
    }

    let record = MatchRecord {
        winner: game.winner(),
        placements,
        turns: game.turn(),
    };
    debug!(winner = ?record.winner, turns = record.turns, "match finished");
    Ok(record)
}
