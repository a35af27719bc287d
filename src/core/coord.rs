//! Grid coordinates.
//!
//! A `Coord` addresses a single cell and doubles as the anchor ("head") of a
//! brick. Coordinates are zero-based with row 0 at the top and column 0 at
//! the left.
//!
//! ```
//! use rust_bricks::core::Coord;
//!
//! let head = Coord::new(1, 2);
//! assert_eq!(head.right(), Coord::new(1, 3));
//! assert_eq!(head.below(), Coord::new(2, 2));
//! ```

use serde::{Deserialize, Serialize};

/// A (row, col) grid coordinate.
///
/// Ordering is row-major: rows compare first, then columns. Sorting a list of
/// coordinates yields the same order the board scans in.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    /// Create a coordinate.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The cell immediately to the right.
    #[must_use]
    pub const fn right(self) -> Self {
        Self::new(self.row, self.col + 1)
    }

    /// The cell immediately below.
    #[must_use]
    pub const fn below(self) -> Self {
        Self::new(self.row + 1, self.col)
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
