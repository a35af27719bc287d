//! Turn sequencing and win detection over one board.

use tracing::debug;

use crate::board::Board;
use crate::core::{BoardConfig, Coord, GameRng, MatchConfig, Orientation, Result};

use super::status::MatchStatus;

/// Winner of the position on `board`, or `None` while both orientations can
/// still move.
///
/// Horizontal is checked first: if it is blocked, vertical wins, even when
/// vertical is blocked too. Otherwise a blocked vertical means horizontal
/// wins. Search agents score terminal positions with this same rule.
#[must_use]
pub fn decided_winner(board: &Board) -> Option<Orientation> {
    if !board.has_placement(Orientation::Horizontal) {
        return Some(Orientation::Vertical);
    }
    if !board.has_placement(Orientation::Vertical) {
        return Some(Orientation::Horizontal);
    }
    None
}

/// A match: one exclusively owned board plus a turn counter.
///
/// The caller chooses the orientation on every `place_brick` call. The
/// engine does not enforce alternation, since a search agent may need to try
/// both orientations from the same position; `to_move` reports whose turn it
/// nominally is.
///
/// ## Example
///
/// ```
/// use rust_bricks::core::{BoardConfig, Coord, MatchConfig, Orientation};
/// use rust_bricks::rules::{Match, MatchStatus};
///
/// let mut game = Match::new(MatchConfig::new(BoardConfig::new(1, 2).unwrap()));
/// game.place_brick(Orientation::Horizontal, Coord::new(0, 0)).unwrap();
///
/// assert_eq!(game.turn(), 1);
/// assert_eq!(game.status(), MatchStatus::VerticalWins);
/// ```
#[derive(Clone, Debug)]
pub struct Match {
    config: MatchConfig,
    board: Board,
    turn: u32,
}

impl Match {
    /// Create a fresh match.
    #[must_use]
    pub fn new(config: MatchConfig) -> Self {
        Self {
            config,
            board: Board::with_config(config.board),
            turn: 0,
        }
    }

    /// Create a fresh match on a `rows` × `cols` board, horizontal first.
    ///
    /// Fails with `InvalidDimension` if either dimension is zero.
    pub fn with_dimensions(rows: usize, cols: usize) -> Result<Self> {
        Ok(Self::new(MatchConfig::new(BoardConfig::new(rows, cols)?)))
    }

    /// Start over: new empty board, counter back to zero.
    pub fn reset(&mut self) {
        self.board = Board::with_config(self.config.board);
        self.turn = 0;
        debug!(board = %self.config.board, first = %self.config.first_to_move, "match reset");
    }

    /// Start over with a different orientation moving first.
    pub fn reset_with_first(&mut self, first_to_move: Orientation) {
        self.config.first_to_move = first_to_move;
        self.reset();
    }

    /// Start over with a coin flip deciding who moves first.
    ///
    /// Returns the orientation that moves first.
    pub fn reset_random(&mut self, rng: &mut GameRng) -> Orientation {
        let first = if rng.gen_bool(0.5) {
            Orientation::Vertical
        } else {
            Orientation::Horizontal
        };
        self.reset_with_first(first);
        first
    }

    /// Place a brick and advance the turn counter.
    ///
    /// Fails with `InvalidPlacement` if the brick is out of bounds or
    /// overlaps; in that case neither the board nor the counter changes.
    pub fn place_brick(&mut self, orientation: Orientation, head: Coord) -> Result<()> {
        if let Err(err) = self.board.place_brick_at(orientation, head) {
            debug!(%orientation, %head, turn = self.turn, error = %err, "placement rejected");
            return Err(err);
        }
        self.turn += 1;
        debug!(%orientation, %head, turn = self.turn, "brick placed");
        Ok(())
    }

    /// Whether `orientation` has at least one legal placement.
    #[must_use]
    pub fn are_placements_available(&self, orientation: Orientation) -> bool {
        self.board.has_placement(orientation)
    }

    /// Winning orientation, or `None` while both can still move.
    ///
    /// Checked in a fixed order: if horizontal is blocked, vertical wins;
    /// otherwise if vertical is blocked, horizontal wins. When both are
    /// blocked at once vertical is reported.
    #[must_use]
    pub fn winner(&self) -> Option<Orientation> {
        decided_winner(&self.board)
    }

    /// Current status, derived from `winner`.
    #[must_use]
    pub fn status(&self) -> MatchStatus {
        MatchStatus::from_winner(self.winner())
    }

    /// Check if the match has ended.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.winner().is_some()
    }

    /// Successful placements since the last reset.
    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Orientation whose turn it is, from counter parity and the starting
    /// orientation.
    #[must_use]
    pub fn to_move(&self) -> Orientation {
        if self.turn % 2 == 0 {
            self.config.first_to_move
        } else {
            self.config.first_to_move.opponent()
        }
    }

    /// The live board. Search agents should work on `board().board_copy()`.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }
}

impl Default for Match {
    fn default() -> Self {
        Self::new(MatchConfig::default())
    }
}
