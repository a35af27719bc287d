//! Cell occupancy bitmap.
//!
//! One bit per cell, row-major, packed into `u64` words. The words live in a
//! `SmallVec` so grids up to 256 cells never touch the heap, which keeps
//! board copies cheap during search.

use smallvec::SmallVec;

use crate::core::{BoardConfig, Coord, PlacementFault, Result};

use super::brick::Brick;

const WORD_BITS: usize = u64::BITS as usize;

/// Occupied/free flag for every cell of a grid.
///
/// Two occupancies are equal only if they describe the same grid size and
/// the same set of occupied cells, so an `Occupancy` is usable as a search
/// table key.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Occupancy {
    config: BoardConfig,
    words: SmallVec<[u64; 4]>,
}

impl Occupancy {
    /// All cells free.
    #[must_use]
    pub fn empty(config: BoardConfig) -> Self {
        let word_count = config.cell_count().div_ceil(WORD_BITS);
        Self {
            config,
            words: SmallVec::from_elem(0, word_count),
        }
    }

    /// Rebuild occupancy from a set of bricks.
    ///
    /// Fails with `InvalidPlacement` if a brick leaves the grid or two
    /// bricks share a cell.
    pub fn from_bricks<I>(config: BoardConfig, bricks: I) -> Result<Self>
    where
        I: IntoIterator<Item = Brick>,
    {
        let mut occupancy = Self::empty(config);

        for brick in bricks {
            if !brick.fits(&config) {
                return Err(brick.rejected(PlacementFault::OutOfBounds));
            }
            for cell in brick.cells() {
                if occupancy.is_set(cell) {
                    return Err(brick.rejected(PlacementFault::Occupied(cell)));
                }
                occupancy.set(cell);
            }
        }

        Ok(occupancy)
    }

    /// Grid this bitmap covers.
    #[must_use]
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Whether `coord` is occupied. Cells off the grid report `false`.
    #[inline]
    #[must_use]
    pub fn is_set(&self, coord: Coord) -> bool {
        if !self.config.contains(coord) {
            return false;
        }
        let index = self.config.index(coord);
        self.words[index / WORD_BITS] & (1u64 << (index % WORD_BITS)) != 0
    }

    /// Mark a cell occupied. Caller guarantees the cell is on the grid.
    #[inline]
    pub(crate) fn set(&mut self, coord: Coord) {
        let index = self.config.index(coord);
        self.words[index / WORD_BITS] |= 1u64 << (index % WORD_BITS);
    }

    /// Number of occupied cells.
    #[must_use]
    pub fn count(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// True when no cell is occupied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }

    /// Occupied cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.config.cell_count())
            .filter(move |&i| self.words[i / WORD_BITS] & (1u64 << (i % WORD_BITS)) != 0)
            .map(move |i| self.config.coord(i))
    }

    /// Raw packed words, least significant bit = cell (0, 0).
    #[must_use]
    pub fn words(&self) -> &[u64] {
        &self.words
    }
}
