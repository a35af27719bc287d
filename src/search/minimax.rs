//! Alpha-beta minimax over board copies.
//!
//! Terminal positions are scored with the same rule `Match::winner` applies
//! (`decided_winner`): a blocked horizontal side loses even if vertical is
//! blocked too. Each node is expanded with `Board::successors`, so every
//! hypothetical position is its own board and the caller's board is never
//! touched.
//!
//! Scores are from the point of view of the side to move (negamax form).
//! `WIN_SCORE` marks a forced win; anything smaller came from the mobility
//! heuristic at the depth limit.

use std::time::Instant;

use rustc_hash::FxHashMap;
use tracing::{debug, trace};

use crate::board::{Board, Occupancy};
use crate::core::{Coord, Orientation};
use crate::rules::decided_winner;

use super::agent::Agent;
use super::config::SearchConfig;
use super::stats::SearchStats;

/// Score of a position the side to move wins by force.
pub const WIN_SCORE: i32 = 1_000_000;

/// Strictly outside every reachable score, so negation never overflows.
const INFINITY: i32 = WIN_SCORE + 1;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Bound {
    Exact,
    Lower,
    Upper,
}

#[derive(Clone, Copy, Debug)]
struct TableEntry {
    depth: u32,
    score: i32,
    bound: Bound,
}

/// Legality depends only on which cells are covered, so occupancy plus the
/// side to move identifies a position.
type TableKey = (Occupancy, Orientation);

/// Remaining depth below a node. An unlimited budget stays unlimited, so
/// table entries from an exhaustive search are reusable at any ply.
fn child_depth(depth: u32) -> u32 {
    if depth == u32::MAX {
        depth
    } else {
        depth - 1
    }
}

/// Mobility heuristic: own legal placements minus the opponent's.
#[must_use]
pub fn mobility(board: &Board, to_move: Orientation) -> i32 {
    board.placement_count(to_move) as i32 - board.placement_count(to_move.opponent()) as i32
}

/// Depth-limited alpha-beta agent with an optional transposition table.
///
/// Move ordering is the board's row-major enumeration and ties go to the
/// first placement found, so results are reproducible.
///
/// ## Example
///
/// ```
/// use rust_bricks::board::Board;
/// use rust_bricks::core::{Coord, Orientation};
/// use rust_bricks::search::{MinimaxAgent, SearchConfig, WIN_SCORE};
///
/// let board = Board::new(2, 3).unwrap();
/// let mut agent = MinimaxAgent::new(SearchConfig::default());
///
/// // The centre column is the only vertical move that blocks horizontal.
/// let (head, score) = agent.search(&board, Orientation::Vertical).unwrap();
/// assert_eq!(head, Coord::new(0, 1));
/// assert_eq!(score, WIN_SCORE);
/// ```
#[derive(Clone, Debug)]
pub struct MinimaxAgent {
    config: SearchConfig,
    table: FxHashMap<TableKey, TableEntry>,
    stats: SearchStats,
}

impl MinimaxAgent {
    /// Create an agent.
    #[must_use]
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            table: FxHashMap::default(),
            stats: SearchStats::default(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Statistics from the most recent search.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Best placement for `orientation` and its score.
    ///
    /// Returns `None` when the orientation has no legal placement.
    pub fn search(&mut self, board: &Board, orientation: Orientation) -> Option<(Coord, i32)> {
        let start = Instant::now();
        self.stats.reset();
        self.table.clear();
        self.stats.nodes += 1;

        let depth = self.config.depth_budget();
        let mut alpha = -INFINITY;
        let mut best: Option<(Coord, i32)> = None;

        for (head, child) in board.successors(orientation) {
            let score = -self.negamax(
                &child,
                orientation.opponent(),
                child_depth(depth),
                1,
                -INFINITY,
                -alpha,
            );
            trace!(%head, score, "root placement scored");

            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((head, score));
            }
            alpha = alpha.max(score);
        }

        self.stats.time_us = start.elapsed().as_micros() as u64;
        debug!(
            %orientation,
            best = ?best,
            nodes = self.stats.nodes,
            cutoffs = self.stats.cutoffs,
            table_hits = self.stats.table_hits,
            time_us = self.stats.time_us,
            "minimax search finished"
        );

        best
    }

    fn negamax(
        &mut self,
        board: &Board,
        to_move: Orientation,
        depth: u32,
        ply: u32,
        mut alpha: i32,
        mut beta: i32,
    ) -> i32 {
        self.stats.nodes += 1;
        self.stats.max_ply = self.stats.max_ply.max(ply);

        if let Some(winner) = decided_winner(board) {
            return if winner == to_move { WIN_SCORE } else { -WIN_SCORE };
        }
        if depth == 0 {
            return mobility(board, to_move);
        }

        let alpha_orig = alpha;
        let key = self
            .config
            .use_transposition
            .then(|| (board.occupancy().clone(), to_move));

        if let Some(entry) = key.as_ref().and_then(|k| self.table.get(k).copied()) {
            if entry.depth >= depth {
                self.stats.table_hits += 1;
                match entry.bound {
                    Bound::Exact => return entry.score,
                    Bound::Lower => alpha = alpha.max(entry.score),
                    Bound::Upper => beta = beta.min(entry.score),
                }
                if alpha >= beta {
                    return entry.score;
                }
            }
        }

        let mut best = -INFINITY;
        for (_, child) in board.successors(to_move) {
            let score = -self.negamax(
                &child,
                to_move.opponent(),
                child_depth(depth),
                ply + 1,
                -beta,
                -alpha,
            );
            best = best.max(score);
            alpha = alpha.max(score);
            if alpha >= beta {
                self.stats.cutoffs += 1;
                break;
            }
        }

        if let Some(key) = key {
            if self.table.len() < self.config.max_table_entries || self.table.contains_key(&key) {
                let bound = if best <= alpha_orig {
                    Bound::Upper
                } else if best >= beta {
                    Bound::Lower
                } else {
                    Bound::Exact
                };
                self.table.insert(key, TableEntry { depth, score: best, bound });
            }
        }

        best
    }
}

impl Default for MinimaxAgent {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

impl Agent for MinimaxAgent {
    fn next_placement(&mut self, board: &Board, orientation: Orientation) -> Option<Coord> {
        self.search(board, orientation).map(|(head, _)| head)
    }

    fn name(&self) -> &str {
        "Minimax"
    }
}
