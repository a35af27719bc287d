//! Brick records.

use serde::{Deserialize, Serialize};

use crate::core::{BoardConfig, BricksError, Coord, Orientation, PlacementFault};

/// A placed (or proposed) brick: orientation plus head coordinate.
///
/// The head is the left cell of a horizontal brick and the top cell of a
/// vertical one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Brick {
    pub orientation: Orientation,
    pub head: Coord,
}

impl Brick {
    /// Create a brick record.
    #[must_use]
    pub const fn new(orientation: Orientation, head: Coord) -> Self {
        Self { orientation, head }
    }

    /// The second covered cell.
    #[must_use]
    pub const fn tail(&self) -> Coord {
        self.orientation.tail(self.head)
    }

    /// Both covered cells, head first.
    #[must_use]
    pub const fn cells(&self) -> [Coord; 2] {
        [self.head, self.tail()]
    }

    /// Whether the footprint stays on a grid of this size.
    #[must_use]
    pub fn fits(&self, config: &BoardConfig) -> bool {
        self.orientation.fits(config, self.head)
    }

    /// The error reported when this brick cannot be placed.
    pub(crate) fn rejected(self, fault: PlacementFault) -> BricksError {
        BricksError::InvalidPlacement {
            orientation: self.orientation,
            head: self.head,
            fault,
        }
    }
}

impl std::fmt::Display for Brick {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} brick at {}", self.orientation, self.head)
    }
}
