//! Engine error types.
//!
//! Every failure is returned synchronously from the call that caused it.
//! A call that returns an error has not changed any state.

use super::coord::Coord;
use super::orientation::Orientation;

/// Why a proposed placement was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum PlacementFault {
    /// The brick footprint leaves the grid.
    #[error("brick footprint leaves the grid")]
    OutOfBounds,

    /// One of the footprint cells is already covered.
    #[error("cell {0} is already occupied")]
    Occupied(Coord),
}

/// Errors raised by the board and match engine.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BricksError {
    /// Board dimensions must both be positive with a representable cell count.
    #[error("invalid board dimensions {rows}x{cols}: rows and cols must be positive and their product must fit in usize")]
    InvalidDimension { rows: usize, cols: usize },

    /// A brick cannot go where it was asked to go.
    #[error("invalid {orientation} brick placement at {head}: {fault}")]
    InvalidPlacement {
        orientation: Orientation,
        head: Coord,
        fault: PlacementFault,
    },
}

/// Result alias for engine operations.
pub type Result<T> = std::result::Result<T, BricksError>;
