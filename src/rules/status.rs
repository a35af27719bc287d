//! Match outcome.

use serde::{Deserialize, Serialize};

use crate::core::Orientation;

/// Where a match stands.
///
/// `InProgress` is the only non-terminal state. The two terminal states are
/// left only through a reset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchStatus {
    /// Both orientations can still place a brick.
    InProgress,
    /// The horizontal player won.
    HorizontalWins,
    /// The vertical player won.
    VerticalWins,
}

impl MatchStatus {
    /// Status for a winner as reported by `Match::winner`.
    #[must_use]
    pub const fn from_winner(winner: Option<Orientation>) -> Self {
        match winner {
            None => MatchStatus::InProgress,
            Some(Orientation::Horizontal) => MatchStatus::HorizontalWins,
            Some(Orientation::Vertical) => MatchStatus::VerticalWins,
        }
    }

    /// The winning orientation, if the match is over.
    #[must_use]
    pub const fn winner(self) -> Option<Orientation> {
        match self {
            MatchStatus::InProgress => None,
            MatchStatus::HorizontalWins => Some(Orientation::Horizontal),
            MatchStatus::VerticalWins => Some(Orientation::Vertical),
        }
    }

    /// Check if the match is over.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, MatchStatus::InProgress)
    }

    /// Check if an orientation won.
    #[must_use]
    pub fn is_winner(self, orientation: Orientation) -> bool {
        self.winner() == Some(orientation)
    }
}
