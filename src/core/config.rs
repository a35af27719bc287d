//! Board and match configuration.
//!
//! Sizes are immutable values passed in at construction. Nothing in the
//! engine reads a process-wide board size, so independent matches and
//! searches can run on different grids side by side.
//!
//! - `BoardConfig`: validated grid dimensions
//! - `MatchConfig`: board dimensions plus which orientation moves first

use serde::{Deserialize, Serialize};

use super::coord::Coord;
use super::error::{BricksError, Result};
use super::orientation::Orientation;

/// Rows on the reference board.
pub const DEFAULT_ROWS: usize = 3;

/// Columns on the reference board.
pub const DEFAULT_COLS: usize = 5;

/// Grid dimensions.
///
/// Both dimensions are positive; the only way to obtain a `BoardConfig` is
/// through [`BoardConfig::new`] (or deserialization, which runs the same
/// check).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawBoardConfig")]
pub struct BoardConfig {
    rows: usize,
    cols: usize,
}

#[derive(Deserialize)]
struct RawBoardConfig {
    rows: usize,
    cols: usize,
}

impl TryFrom<RawBoardConfig> for BoardConfig {
    type Error = BricksError;

    fn try_from(raw: RawBoardConfig) -> Result<Self> {
        Self::new(raw.rows, raw.cols)
    }
}

impl BoardConfig {
    /// Create a validated configuration.
    ///
    /// Fails with [`BricksError::InvalidDimension`] if either dimension is
    /// zero or the cell count does not fit in a `usize`.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 || cols == 0 || rows.checked_mul(cols).is_none() {
            return Err(BricksError::InvalidDimension { rows, cols });
        }
        Ok(Self { rows, cols })
    }

    /// Number of rows.
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells.
    #[must_use]
    pub const fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    /// Whether `coord` addresses a cell on this grid.
    #[must_use]
    pub const fn contains(&self, coord: Coord) -> bool {
        coord.row < self.rows && coord.col < self.cols
    }

    /// Row-major cell index. Caller guarantees `contains(coord)`.
    #[inline]
    pub(crate) fn index(&self, coord: Coord) -> usize {
        debug_assert!(self.contains(coord), "{} outside {}", coord, self);
        coord.row * self.cols + coord.col
    }

    /// Inverse of `index`.
    #[inline]
    pub(crate) fn coord(&self, index: usize) -> Coord {
        Coord::new(index / self.cols, index % self.cols)
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
        }
    }
}

impl std::fmt::Display for BoardConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

/// Configuration for a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Grid dimensions for every board the match allocates.
    pub board: BoardConfig,

    /// Orientation that plays on turn 0.
    ///
    /// Only used to report whose turn it is; the engine itself accepts
    /// either orientation on any call.
    pub first_to_move: Orientation,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            board: BoardConfig::default(),
            first_to_move: Orientation::Horizontal,
        }
    }
}

impl MatchConfig {
    /// Create a config for the given board, horizontal moving first.
    pub fn new(board: BoardConfig) -> Self {
        Self {
            board,
            ..Self::default()
        }
    }

    /// Set the board dimensions.
    #[must_use]
    pub fn with_board(mut self, board: BoardConfig) -> Self {
        self.board = board;
        self
    }

    /// Set the orientation that moves first.
    #[must_use]
    pub fn with_first_to_move(mut self, orientation: Orientation) -> Self {
        self.first_to_move = orientation;
        self
    }
}
