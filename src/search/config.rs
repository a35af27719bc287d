//! Minimax search configuration parameters.

use serde::{Deserialize, Serialize};

/// Minimax search configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Maximum search depth in plies (0 = unlimited).
    /// Positions at the depth limit are scored by mobility.
    pub max_depth: u32,

    /// Cache position scores keyed by occupancy and side to move.
    pub use_transposition: bool,

    /// Maximum entries kept in the transposition table.
    /// Once full, new positions are searched but not stored.
    pub max_table_entries: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_depth: 0,
            use_transposition: true,
            max_table_entries: 1 << 20,
        }
    }
}

impl SearchConfig {
    /// Set the maximum depth (0 = unlimited).
    #[must_use]
    pub fn with_max_depth(mut self, depth: u32) -> Self {
        self.max_depth = depth;
        self
    }

    /// Enable or disable the transposition table.
    #[must_use]
    pub fn with_transposition(mut self, enabled: bool) -> Self {
        self.use_transposition = enabled;
        self
    }

    /// Set the transposition table capacity.
    #[must_use]
    pub fn with_max_table_entries(mut self, entries: usize) -> Self {
        self.max_table_entries = entries;
        self
    }

    /// Depth budget for a root search; unlimited maps to `u32::MAX`.
    #[must_use]
    pub(crate) fn depth_budget(&self) -> u32 {
        if self.max_depth == 0 {
            u32::MAX
        } else {
            self.max_depth
        }
    }
}
