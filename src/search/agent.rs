//! Agent trait and the random baseline.

use crate::board::Board;
use crate::core::{Coord, GameRng, Orientation};

/// Something that picks a placement for one side.
///
/// Agents get a shared borrow of a board and explore on their own copies;
/// they never commit to the live match themselves.
pub trait Agent {
    /// Choose a head for a brick of `orientation`, or `None` if the
    /// orientation has no legal placement.
    fn next_placement(&mut self, board: &Board, orientation: Orientation) -> Option<Coord>;

    /// Display name.
    fn name(&self) -> &str;
}

/// Picks uniformly among legal placements.
#[derive(Clone, Debug)]
pub struct RandomAgent {
    rng: GameRng,
}

impl RandomAgent {
    /// Create an agent drawing from a stream seeded with `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }
}

impl Agent for RandomAgent {
    fn next_placement(&mut self, board: &Board, orientation: Orientation) -> Option<Coord> {
        let placements = board.available_placements(orientation);
        self.rng.choose(&placements).copied()
    }

    fn name(&self) -> &str {
        "Random"
    }
}

/// Always plays the first legal placement in row-major order.
///
/// Useful as a fully predictable opponent in tests.
#[derive(Clone, Copy, Debug, Default)]
pub struct FirstAgent;

impl Agent for FirstAgent {
    fn next_placement(&mut self, board: &Board, orientation: Orientation) -> Option<Coord> {
        board.placements(orientation).next()
    }

    fn name(&self) -> &str {
        "First"
    }
}
