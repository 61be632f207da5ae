//! Candidate move generation.
//!
//! Every dictionary word is tried at every anchor in both directions and kept
//! when the legality filter accepts it. The order is fixed (words sorted,
//! `Right` before `Down`, anchors row-major) so searches are reproducible.

use std::collections::HashSet;

use crate::board::Board;
use crate::constants::SIZE;
use crate::dictionary::Dictionary;
use crate::moves::{Direction, Move};
use crate::rules::LegalityFilter;

/// All distinct legal moves on `board`.
pub fn generate_moves(
    board: &Board,
    dictionary: &Dictionary,
    filter: &dyn LegalityFilter,
) -> Vec<Move> {
    let mut seen = HashSet::new();
    let mut moves = Vec::new();
    if !board.has_remaining_letters() {
        return moves;
    }

    for word in dictionary.words() {
        // A word longer than the board can never fit.
        if word.len() > SIZE {
            continue;
        }
        for direction in Direction::ALL {
            for y in 0..SIZE {
                for x in 0..SIZE {
                    let mv = Move::new(word, x, y, direction);
                    if !mv.fits() || !filter.is_legal(board, dictionary, &mv) {
                        continue;
                    }
                    if seen.insert(mv.clone()) {
                        moves.push(mv);
                    }
                }
            }
        }
    }
    moves
}
