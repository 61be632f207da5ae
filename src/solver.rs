//! Solver scaffolding shared by every search strategy.
//!
//! A [`Solver`] owns the working board and borrows the dictionary and the
//! legality filter. The actual exploration is delegated to a [`Strategy`];
//! the solver only wraps it with optional tracing and picks the result.

use tracing::info;

use crate::board::Board;
use crate::dictionary::Dictionary;
use crate::moves::MoveError;
use crate::rules::LegalityFilter;

/// Everything a strategy consults but never mutates.
#[derive(Clone, Copy)]
pub struct SearchEnv<'a> {
    pub dictionary: &'a Dictionary,
    pub filter: &'a dyn LegalityFilter,
}

/// Counters collected during one exploration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Board states entered.
    pub nodes: u64,
    /// States with no legal move or no letters left.
    pub leaves: u64,
    /// Times a strictly better board was recorded.
    pub improvements: u64,
    /// States skipped because they could not beat the best score.
    pub pruned: u64,
    /// States skipped because the same grid was already explored.
    pub memo_hits: u64,
}

/// A way of exploring the space of move sequences.
///
/// `explore` may mutate `board` freely while it runs but must hand it back in
/// the state it received it. The best board found is kept by the strategy.
pub trait Strategy {
    fn explore(&mut self, board: &mut Board, env: &SearchEnv<'_>) -> Result<(), MoveError>;

    /// Best board recorded by the last exploration.
    fn best(&self) -> Option<&Board>;

    fn stats(&self) -> SearchStats {
        SearchStats::default()
    }
}

pub struct Solver<'a, S: Strategy> {
    board: Board,
    env: SearchEnv<'a>,
    strategy: S,
    trace: bool,
}

impl<'a, S: Strategy> Solver<'a, S> {
    pub fn new(
        board: Board,
        dictionary: &'a Dictionary,
        filter: &'a dyn LegalityFilter,
        strategy: S,
    ) -> Self {
        Self {
            board,
            env: SearchEnv { dictionary, filter },
            strategy,
            trace: false,
        }
    }

    /// Log the initial and final boards at `INFO`.
    pub fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn strategy(&self) -> &S {
        &self.strategy
    }

    /// Run the strategy on the held board and return the best board found,
    /// or a copy of the starting board when nothing scored higher.
    pub fn solve(&mut self) -> Result<Board, MoveError> {
        self.print(|| format!("Initial board:\n{}", self.board));
        let initial = self.board.clone();

        self.strategy.explore(&mut self.board, &self.env)?;

        let best = match self.strategy.best() {
            Some(best) if best.score() > initial.score() => best.clone(),
            _ => initial,
        };
        self.print(|| format!("Optimal solution:\n{best}"));
        Ok(best)
    }

    fn print(&self, message: impl FnOnce() -> String) {
        if self.trace {
            info!("{}", message());
        }
    }
}
