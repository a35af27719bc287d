//! The board: occupancy plus the placed-brick record.
//!
//! All legality logic lives here. `is_valid` and `place_brick_at` share one
//! check (`check_placement`), so the query path and the mutation path can
//! never disagree about what is legal.

use crate::core::{BoardConfig, Coord, Orientation, PlacementFault, Result};

use super::brick::Brick;
use super::occupancy::Occupancy;

/// Grid occupancy and the bricks that produced it.
///
/// Occupancy alone cannot recover brick boundaries, so bricks are stored
/// explicitly in placement order. The union of their cells is always exactly
/// the set of occupied cells.
///
/// `Board` has value semantics: [`Board::board_copy`] (and `Clone`) yield a
/// fully independent board that shares no mutable state with the original.
///
/// ## Example
///
/// ```
/// use rust_bricks::board::Board;
/// use rust_bricks::core::{Coord, Orientation};
///
/// let mut board = Board::new(3, 5).unwrap();
/// assert_eq!(board.available_placements(Orientation::Horizontal).len(), 12);
///
/// board.place_brick_at(Orientation::Horizontal, Coord::new(0, 0)).unwrap();
/// assert!(!board.is_valid(Orientation::Vertical, Coord::new(0, 0)));
/// assert_eq!(board.current_bricks(Orientation::Horizontal), vec![Coord::new(0, 0)]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    occupancy: Occupancy,
    bricks: Vec<Brick>,
}

impl Board {
    /// Create an empty board.
    ///
    /// Fails with `InvalidDimension` if either dimension is zero.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        Ok(Self::with_config(BoardConfig::new(rows, cols)?))
    }

    /// Create an empty board from an already validated configuration.
    #[must_use]
    pub fn with_config(config: BoardConfig) -> Self {
        Self {
            occupancy: Occupancy::empty(config),
            bricks: Vec::new(),
        }
    }

    /// Grid dimensions.
    #[must_use]
    pub fn config(&self) -> &BoardConfig {
        self.occupancy.config()
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.config().rows()
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.config().cols()
    }

    // === Legality ===

    /// Check a proposed placement and explain a rejection.
    ///
    /// Bounds are checked before occupancy, so a brick hanging off the grid
    /// is always reported as `OutOfBounds`.
    pub fn check_placement(
        &self,
        orientation: Orientation,
        head: Coord,
    ) -> std::result::Result<Brick, PlacementFault> {
        let brick = Brick::new(orientation, head);
        if !brick.fits(self.config()) {
            return Err(PlacementFault::OutOfBounds);
        }
        if let Some(cell) = brick.cells().into_iter().find(|&c| self.occupancy.is_set(c)) {
            return Err(PlacementFault::Occupied(cell));
        }
        Ok(brick)
    }

    /// Whether a brick of this orientation can go at `head`. Pure query.
    #[must_use]
    pub fn is_valid(&self, orientation: Orientation, head: Coord) -> bool {
        self.check_placement(orientation, head).is_ok()
    }

    // === Mutation ===

    /// Place a brick.
    ///
    /// Re-validates and fails with `InvalidPlacement` (leaving the board
    /// untouched) if the placement is illegal.
    pub fn place_brick_at(&mut self, orientation: Orientation, head: Coord) -> Result<()> {
        let brick = self
            .check_placement(orientation, head)
            .map_err(|fault| Brick::new(orientation, head).rejected(fault))?;
        self.commit(brick);
        Ok(())
    }

    /// Copy this board and place a brick on the copy.
    ///
    /// `self` is never modified, whether or not the placement succeeds.
    pub fn with_placement(&self, orientation: Orientation, head: Coord) -> Result<Board> {
        let mut next = self.board_copy();
        next.place_brick_at(orientation, head)?;
        Ok(next)
    }

    fn commit(&mut self, brick: Brick) {
        for cell in brick.cells() {
            self.occupancy.set(cell);
        }
        self.bricks.push(brick);
    }

    // === Enumeration ===

    /// Every legal head for `orientation`, lazily, in row-major order.
    pub fn placements(&self, orientation: Orientation) -> impl Iterator<Item = Coord> + '_ {
        let cols = self.cols();
        (0..self.rows())
            .flat_map(move |row| (0..cols).map(move |col| Coord::new(row, col)))
            .filter(move |&head| self.is_valid(orientation, head))
    }

    /// Every legal head for `orientation`, row-major.
    ///
    /// Empty when the orientation is blocked.
    #[must_use]
    pub fn available_placements(&self, orientation: Orientation) -> Vec<Coord> {
        self.placements(orientation).collect()
    }

    /// Whether at least one legal head exists. Stops at the first one found.
    #[must_use]
    pub fn has_placement(&self, orientation: Orientation) -> bool {
        self.placements(orientation).next().is_some()
    }

    /// Number of legal heads, without allocating.
    #[must_use]
    pub fn placement_count(&self, orientation: Orientation) -> usize {
        self.placements(orientation).count()
    }

    /// Every legal head paired with the board that results from playing it.
    ///
    /// Each yielded board is an independent copy; `self` is untouched.
    pub fn successors(&self, orientation: Orientation) -> impl Iterator<Item = (Coord, Board)> + '_ {
        self.placements(orientation).map(move |head| {
            let mut next = self.board_copy();
            next.commit(Brick::new(orientation, head));
            (head, next)
        })
    }

    /// Heads of placed bricks of this orientation, in placement order.
    #[must_use]
    pub fn current_bricks(&self, orientation: Orientation) -> Vec<Coord> {
        self.bricks
            .iter()
            .filter(|b| b.orientation == orientation)
            .map(|b| b.head)
            .collect()
    }

    /// All placed bricks in placement order.
    #[must_use]
    pub fn bricks(&self) -> &[Brick] {
        &self.bricks
    }

    // === Cells ===

    /// Whether `coord` is covered. Cells off the grid report `false`.
    #[must_use]
    pub fn is_occupied(&self, coord: Coord) -> bool {
        self.occupancy.is_set(coord)
    }

    /// The occupancy bitmap used for legality checks.
    #[must_use]
    pub fn occupancy(&self) -> &Occupancy {
        &self.occupancy
    }

    /// Number of uncovered cells.
    #[must_use]
    pub fn free_cells(&self) -> usize {
        self.config().cell_count() - self.occupancy.count()
    }

    /// Brick covering `coord`, if any.
    #[must_use]
    pub fn brick_at(&self, coord: Coord) -> Option<&Brick> {
        if !self.occupancy.is_set(coord) {
            return None;
        }
        self.bricks.iter().find(|b| b.cells().contains(&coord))
    }

    // === Copy ===

    /// Independent deep copy for hypothetical search.
    ///
    /// The copy owns its own occupancy words and brick list; placing on
    /// either board never affects the other.
    #[must_use]
    pub fn board_copy(&self) -> Board {
        Board {
            occupancy: self.occupancy.clone(),
            bricks: self.bricks.clone(),
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::with_config(BoardConfig::default())
    }
}

/// Text grid: `.` free, `-` horizontal brick cell, `|` vertical brick cell.
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let cols = self.cols();
        let mut cells = vec!['.'; self.config().cell_count()];

        for brick in &self.bricks {
            let mark = match brick.orientation {
                Orientation::Horizontal => '-',
                Orientation::Vertical => '|',
            };
            for cell in brick.cells() {
                cells[cell.row * cols + cell.col] = mark;
            }
        }

        for row in cells.chunks(cols) {
            let line: String = row.iter().collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
