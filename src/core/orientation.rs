//! Brick orientation, which doubles as player identity.
//!
//! There are exactly two orientations. "No winner yet" is not an
//! orientation; the match layer expresses it as `Option<Orientation>`.

use serde::{Deserialize, Serialize};

use super::config::BoardConfig;
use super::coord::Coord;

/// Orientation of a brick, and the player who places bricks that way.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Orientation {
    /// Covers the head and the cell to its right.
    Horizontal,
    /// Covers the head and the cell below it.
    Vertical,
}

impl Orientation {
    /// Both orientations, horizontal first.
    pub const ALL: [Orientation; 2] = [Orientation::Horizontal, Orientation::Vertical];

    /// The other orientation.
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }

    /// The second cell covered by a brick anchored at `head`.
    ///
    /// Does not check bounds; pair with [`Orientation::fits`].
    #[inline]
    #[must_use]
    pub const fn tail(self, head: Coord) -> Coord {
        match self {
            Orientation::Horizontal => head.right(),
            Orientation::Vertical => head.below(),
        }
    }

    /// Whether a brick anchored at `head` stays inside the grid.
    ///
    /// Horizontal needs `col + 1 < cols`, vertical needs `row + 1 < rows`.
    #[must_use]
    pub fn fits(self, config: &BoardConfig, head: Coord) -> bool {
        match self {
            Orientation::Horizontal => {
                head.row < config.rows() && head.col < config.cols().saturating_sub(1)
            }
            Orientation::Vertical => {
                head.row < config.rows().saturating_sub(1) && head.col < config.cols()
            }
        }
    }

    /// Number of heads that fit on an empty board of this size.
    #[must_use]
    pub fn max_placements(self, config: &BoardConfig) -> usize {
        match self {
            Orientation::Horizontal => config.rows() * (config.cols() - 1),
            Orientation::Vertical => (config.rows() - 1) * config.cols(),
        }
    }
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Orientation::Horizontal => write!(f, "horizontal"),
            Orientation::Vertical => write!(f, "vertical"),
        }
    }
}
