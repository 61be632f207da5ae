//! Exhaustive depth-first backtracking search.
//!
//! A single board is shared by the whole recursion. Each legal move is
//! prepared, applied, explored and undone before the next sibling is tried,
//! so the board is back to its entry state whenever a call returns. Leaves
//! (no legal move, or no letters left) are compared against the best board,
//! which is deep-copied whenever a strictly higher score shows up.

use std::collections::HashSet;

use tracing::{debug, info, trace};

use crate::board::Board;
use crate::movegen::generate_moves;
use crate::moves::MoveError;
use crate::solver::{SearchEnv, SearchStats, Strategy};

/// Order in which sibling moves are explored.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CandidateOrder {
    /// Generation order: words sorted, `Right` before `Down`, row-major.
    #[default]
    Dictionary,
    /// Generation order shuffled by a generator seeded once per search.
    Shuffled { seed: u64 },
}

/// Search options. None of them change the best score found.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchConfig {
    /// Skip states whose score plus the value of every remaining letter
    /// cannot beat the best board.
    pub prune: bool,
    /// Skip grids that were already explored.
    pub memoize: bool,
    pub order: CandidateOrder,
}

pub struct Backtracking {
    config: SearchConfig,
    best: Option<Board>,
    stats: SearchStats,
    visited: HashSet<Board>,
    rng: fastrand::Rng,
}

impl Default for Backtracking {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

impl Backtracking {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            best: None,
            stats: SearchStats::default(),
            visited: HashSet::new(),
            rng: fastrand::Rng::with_seed(0),
        }
    }

    fn search(&mut self, board: &mut Board, env: &SearchEnv<'_>) -> Result<(), MoveError> {
        self.stats.nodes += 1;

        // Same grid from the same start means same score and pool.
        if self.config.memoize && !self.visited.insert(board.clone()) {
            self.stats.memo_hits += 1;
            return Ok(());
        }
        if self.config.prune && !self.can_improve(board) {
            self.stats.pruned += 1;
            return Ok(());
        }

        let mut moves = if board.has_remaining_letters() {
            generate_moves(board, env.dictionary, env.filter)
        } else {
            Vec::new()
        };
        if moves.is_empty() {
            self.stats.leaves += 1;
            self.record(board);
            return Ok(());
        }
        if let CandidateOrder::Shuffled { .. } = self.config.order {
            self.rng.shuffle(&mut moves);
        }

        for mut mv in moves {
            board.prepare(&mut mv)?;
            board.apply(&mv)?;
            trace!(event = "apply", mv = %mv, depth = board.depth(), score = board.score());
            let explored = self.search(board, env);
            board.undo(&mv)?;
            explored?;
        }
        Ok(())
    }

    fn can_improve(&self, board: &Board) -> bool {
        match &self.best {
            Some(best) => board.score().saturating_add(board.pool().points()) > best.score(),
            None => true,
        }
    }

    fn record(&mut self, board: &Board) {
        let better = match &self.best {
            Some(best) => board.score() > best.score(),
            None => true,
        };
        if better {
            self.stats.improvements += 1;
            debug!(event = "new_best", score = board.score(), depth = board.depth());
            self.best = Some(board.clone());
        }
    }
}

impl Strategy for Backtracking {
    fn explore(&mut self, board: &mut Board, env: &SearchEnv<'_>) -> Result<(), MoveError> {
        self.best = Some(board.clone());
        self.stats = SearchStats::default();
        self.visited.clear();
        if let CandidateOrder::Shuffled { seed } = self.config.order {
            self.rng = fastrand::Rng::with_seed(seed);
        }

        let depth = board.depth();
        self.search(board, env)?;
        debug_assert_eq!(board.depth(), depth, "search left moves applied");

        info!(
            event = "explore_end",
            nodes = self.stats.nodes,
            leaves = self.stats.leaves,
            best_score = self.best.as_ref().map_or(0, Board::score),
        );
        Ok(())
    }

    fn best(&self) -> Option<&Board> {
        self.best.as_ref()
    }

    fn stats(&self) -> SearchStats {
        self.stats
    }
}
