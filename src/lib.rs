//! Tileboard: exhaustive best-score search for a word-tile board puzzle.
//!
//! Given a pool of letters and a dictionary, the search finds the sequence of
//! word placements on a 15x15 board that scores the most points, each newly
//! placed letter scoring its flat point value.
//!
//! ## Modules
//!
//! - [`constants`] - Board dimensions and letter point values
//! - [`letters`] - Letter pool (remaining counts over A-Z)
//! - [`moves`] - Word placements and their undo records
//! - [`board`] - Grid, pool and score with prepare/apply/undo
//! - [`dictionary`] - Word list membership oracle
//! - [`rules`] - Legality filter for candidate moves
//! - [`movegen`] - Candidate move generation
//! - [`solver`] - Strategy trait and solver scaffolding
//! - [`backtrack`] - Exhaustive depth-first backtracking
//!
//! ## Example
//!
//! ```
//! use tileboard::backtrack::Backtracking;
//! use tileboard::board::Board;
//! use tileboard::dictionary::Dictionary;
//! use tileboard::rules::StandardRules;
//! use tileboard::solver::Solver;
//!
//! let dictionary = Dictionary::new(["CASA"]);
//! let rules = StandardRules::default();
//! let board = Board::new("C:1,A:2,S:1".parse().unwrap());
//!
//! let mut solver = Solver::new(board, &dictionary, &rules, Backtracking::default());
//! let best = solver.solve().unwrap();
//! assert_eq!(best.score(), 6);
//! ```

pub mod backtrack;
pub mod board;
pub mod constants;
pub mod dictionary;
pub mod letters;
pub mod movegen;
pub mod moves;
pub mod rules;
pub mod solver;
