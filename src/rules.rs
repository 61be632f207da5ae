//! Legality filter deciding whether a move may be applied.
//!
//! The search only sees the [`LegalityFilter`] trait. [`StandardRules`] is the
//! usual word-game rule set: the word and every crossing word it forms must be
//! in the dictionary, the letters must be available, and after the first move
//! new words have to connect to what is already on the board.

use crate::board::Board;
use crate::constants::MIN_WORD_LEN;
use crate::dictionary::Dictionary;
use crate::moves::Move;

/// Predicate over (board, move) pairs.
pub trait LegalityFilter {
    fn is_legal(&self, board: &Board, dictionary: &Dictionary, mv: &Move) -> bool;
}

impl<F> LegalityFilter for F
where
    F: Fn(&Board, &Dictionary, &Move) -> bool,
{
    fn is_legal(&self, board: &Board, dictionary: &Dictionary, mv: &Move) -> bool {
        self(board, dictionary, mv)
    }
}

/// Knobs for [`StandardRules`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RuleConfig {
    /// Shortest playable word.
    pub min_word_len: usize,
    /// Cell the first move must cover, if any.
    pub anchor: Option<(usize, usize)>,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            min_word_len: MIN_WORD_LEN,
            anchor: None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct StandardRules {
    config: RuleConfig,
}

impl StandardRules {
    pub fn new(config: RuleConfig) -> Self {
        Self { config }
    }
}

impl LegalityFilter for StandardRules {
    fn is_legal(&self, board: &Board, dictionary: &Dictionary, mv: &Move) -> bool {
        let word = mv.word();
        if word.len() < self.config.min_word_len.max(1) || !mv.fits() {
            return false;
        }
        if !dictionary.contains_bytes(word) {
            return false;
        }

        // The word must not be a fragment of a longer run.
        let (dx, dy) = mv.direction().step();
        let (x, y) = (mv.x() as isize, mv.y() as isize);
        let len = word.len() as isize;
        let (dx, dy) = (dx as isize, dy as isize);
        let before = (x - dx, y - dy);
        let after = (x + dx * len, y + dy * len);
        if board.cell_at(before).is_some() || board.cell_at(after).is_some() {
            return false;
        }

        let mut placed = Vec::with_capacity(word.len());
        let mut reuses = false;
        let mut touches = false;
        for (cx, cy, c) in mv.cells() {
            match board.cell(cx, cy) {
                Some(existing) if existing == c => reuses = true,
                Some(_) => return false,
                None => {
                    placed.push(c);
                    touches |= board.has_adjacent_letters(cx as isize, cy as isize);
                    let cross = board.word_through(cx, cy, mv.direction().perpendicular(), Some(c));
                    if cross.len() >= 2 && !dictionary.contains_bytes(&cross) {
                        return false;
                    }
                }
            }
        }
        if placed.is_empty() || !board.pool().can_supply(&placed) {
            return false;
        }

        if board.is_empty() {
            match self.config.anchor {
                Some(anchor) => mv.cells().any(|(cx, cy, _)| (cx, cy) == anchor),
                None => true,
            }
        } else {
            reuses || touches
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::CENTER;
    use crate::letters::LetterPool;
    use crate::moves::Direction;

    fn play(board: &mut Board, word: &str, x: usize, y: usize, dir: Direction) {
        let mut mv = Move::new(word, x, y, dir);
        board.prepare(&mut mv).unwrap();
        board.apply(&mv).unwrap();
    }

    fn dict() -> Dictionary {
        Dictionary::new(["CASA", "AS", "SAL", "CASAS", "LA"])
    }

    #[test]
    fn test_first_move_anywhere_without_anchor() {
        let board = Board::new(LetterPool::from_letters("CASA").unwrap());
        let rules = StandardRules::default();
        assert!(rules.is_legal(&board, &dict(), &Move::new("CASA", 0, 0, Direction::Right)));
        assert!(rules.is_legal(&board, &dict(), &Move::new("CASA", 14, 11, Direction::Down)));
        assert!(!rules.is_legal(&board, &dict(), &Move::new("CASA", 12, 0, Direction::Right)));
        assert!(!rules.is_legal(&board, &dict(), &Move::new("SACA", 0, 0, Direction::Right)));
    }

    #[test]
    fn test_anchor_on_empty_board() {
        let board = Board::new(LetterPool::from_letters("CASA").unwrap());
        let rules = StandardRules::new(RuleConfig {
            anchor: Some(CENTER),
            ..RuleConfig::default()
        });
        assert!(!rules.is_legal(&board, &dict(), &Move::new("CASA", 0, 0, Direction::Right)));
        assert!(rules.is_legal(&board, &dict(), &Move::new("CASA", 5, 7, Direction::Right)));
    }

    #[test]
    fn test_letters_must_be_available() {
        let board = Board::new(LetterPool::from_letters("CAS").unwrap());
        let rules = StandardRules::default();
        assert!(!rules.is_legal(&board, &dict(), &Move::new("CASA", 0, 0, Direction::Right)));
        assert!(rules.is_legal(&board, &dict(), &Move::new("AS", 0, 0, Direction::Right)));
    }

    #[test]
    fn test_later_moves_must_connect() {
        let mut board = Board::new(LetterPool::from_letters("CASASAL").unwrap());
        play(&mut board, "CASA", 3, 3, Direction::Right);
        let rules = StandardRules::default();
        // Detached.
        assert!(!rules.is_legal(&board, &dict(), &Move::new("LA", 10, 10, Direction::Right)));
        // Reuses the S of CASA.
        assert!(rules.is_legal(&board, &dict(), &Move::new("SAL", 5, 3, Direction::Down)));
        // Conflicts with an existing letter.
        assert!(!rules.is_legal(&board, &dict(), &Move::new("LA", 4, 3, Direction::Down)));
        // Nothing new placed.
        assert!(!rules.is_legal(&board, &dict(), &Move::new("CASA", 3, 3, Direction::Right)));
    }

    #[test]
    fn test_word_must_not_extend_a_run() {
        let mut board = Board::new(LetterPool::from_letters("CASAS").unwrap());
        play(&mut board, "CASA", 3, 3, Direction::Right);
        let rules = StandardRules::default();
        // "AS" at the end of CASA would really spell CASAS.
        assert!(!rules.is_legal(&board, &dict(), &Move::new("AS", 6, 3, Direction::Right)));
        assert!(rules.is_legal(&board, &dict(), &Move::new("CASAS", 3, 3, Direction::Right)));
    }

    #[test]
    fn test_crossing_words_are_checked() {
        let mut board = Board::new(LetterPool::from_letters("CASALA").unwrap());
        play(&mut board, "CASA", 3, 3, Direction::Right);
        let rules = StandardRules::default();
        // L under the first A forms "AL" vertically: not a word.
        assert!(!rules.is_legal(&board, &dict(), &Move::new("LA", 4, 4, Direction::Right)));
        // L above the first A forms "LA" vertically.
        assert!(rules.is_legal(&board, &dict(), &Move::new("LA", 4, 2, Direction::Down)));
    }

    #[test]
    fn test_closures_are_filters() {
        let board = Board::new(LetterPool::from_letters("CASA").unwrap());
        let only_down = |_: &Board, _: &Dictionary, mv: &Move| mv.direction() == Direction::Down;
        assert!(only_down.is_legal(&board, &dict(), &Move::new("CASA", 0, 0, Direction::Down)));
        assert!(!only_down.is_legal(&board, &dict(), &Move::new("CASA", 0, 0, Direction::Right)));
    }
}
