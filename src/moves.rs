//! Word placements and the record needed to take them back.
//!
//! A [`Move`] starts as a bare proposal (word, anchor, direction). Calling
//! [`Board::prepare`](crate::board::Board::prepare) fills in its
//! [`Placement`]: what the span held before, which letters are new and what
//! they score. Identity (equality and hashing) only looks at the proposal.

use std::fmt;
use std::hash::{Hash, Hasher};

use thiserror::Error;

use crate::constants::SIZE;

/// Direction a word is laid out in.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Along a row, x increasing.
    Right,
    /// Along a column, y increasing.
    Down,
}

impl Direction {
    pub const ALL: [Direction; 2] = [Direction::Right, Direction::Down];

    /// (dx, dy) for one step along this direction.
    #[inline]
    pub fn step(self) -> (usize, usize) {
        match self {
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
        }
    }

    #[inline]
    pub fn perpendicular(self) -> Direction {
        match self {
            Direction::Right => Direction::Down,
            Direction::Down => Direction::Right,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Right => write!(f, "RIGHT"),
            Direction::Down => write!(f, "DOWN"),
        }
    }
}

/// Why a move could not be prepared, applied or undone.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("move has an empty word")]
    EmptyWord,
    #[error("word of length {len} at ({x},{y}) going {direction} leaves the board")]
    OutOfBounds {
        x: usize,
        y: usize,
        direction: Direction,
        len: usize,
    },
    #[error("invalid letter {0:?} in word")]
    InvalidLetter(char),
    #[error("move {0} was not prepared")]
    NotPrepared(String),
    #[error("move {0} was prepared against a different board state")]
    StalePreparation(String),
    #[error("not enough {0:?} left in the letter pool")]
    InsufficientLetters(char),
    #[error("undo out of order: last applied move is {expected}, asked to undo {found}")]
    UndoOutOfOrder { expected: String, found: String },
    #[error("no applied move to undo")]
    NothingToUndo,
}

/// What a move does to one specific board state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Placement {
    /// Cell contents along the span before the move, `EMPTY` for blanks.
    pub previous: Vec<u8>,
    /// Letters written into cells that were empty, in span order.
    pub placed: Vec<u8>,
    /// Points contributed by `placed`.
    pub score: u32,
}

/// A proposed word placement.
#[derive(Clone, Debug)]
pub struct Move {
    word: Vec<u8>,
    x: usize,
    y: usize,
    direction: Direction,
    placement: Option<Placement>,
}

impl Move {
    /// Create a bare move. The word is upper-cased; validation happens in
    /// `prepare`.
    pub fn new(word: &str, x: usize, y: usize, direction: Direction) -> Self {
        Self {
            word: word.to_ascii_uppercase().into_bytes(),
            x,
            y,
            direction,
            placement: None,
        }
    }

    pub fn word(&self) -> &[u8] {
        &self.word
    }

    pub fn x(&self) -> usize {
        self.x
    }

    pub fn y(&self) -> usize {
        self.y
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// True when the whole word fits on the board.
    pub fn fits(&self) -> bool {
        let len = self.word.len();
        if len == 0 || self.x >= SIZE || self.y >= SIZE {
            return false;
        }
        let (dx, dy) = self.direction.step();
        self.x + dx * (len - 1) < SIZE && self.y + dy * (len - 1) < SIZE
    }

    /// Coordinates of every cell the word covers, paired with its letter.
    ///
    /// Only meaningful when [`fits`](Move::fits) holds.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, u8)> + '_ {
        let (dx, dy) = self.direction.step();
        self.word
            .iter()
            .enumerate()
            .map(move |(i, &c)| (self.x + dx * i, self.y + dy * i, c))
    }

    pub fn is_prepared(&self) -> bool {
        self.placement.is_some()
    }

    pub fn placement(&self) -> Option<&Placement> {
        self.placement.as_ref()
    }

    /// Points this move adds, once prepared.
    pub fn score(&self) -> Option<u32> {
        self.placement.as_ref().map(|p| p.score)
    }

    pub(crate) fn set_placement(&mut self, placement: Placement) {
        self.placement = Some(placement);
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.word == other.word
            && self.x == other.x
            && self.y == other.y
            && self.direction == other.direction
    }
}

impl Eq for Move {}

impl Hash for Move {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.word.hash(state);
        self.x.hash(state);
        self.y.hash(state);
        self.direction.hash(state);
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "\"{}\" @ ({},{}) going {}",
            String::from_utf8_lossy(&self.word),
            self.x,
            self.y,
            self.direction
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_identity_ignores_placement() {
        let a = Move::new("casa", 3, 7, Direction::Right);
        let mut b = Move::new("CASA", 3, 7, Direction::Right);
        b.set_placement(Placement {
            previous: vec![b' '; 4],
            placed: b"CASA".to_vec(),
            score: 6,
        });
        assert_eq!(a, b);

        let mut set = HashSet::new();
        set.insert(a);
        assert!(!set.insert(b));
        assert!(set.insert(Move::new("CASA", 3, 7, Direction::Down)));
    }

    #[test]
    fn test_fits() {
        assert!(Move::new("CASA", 11, 0, Direction::Right).fits());
        assert!(!Move::new("CASA", 12, 0, Direction::Right).fits());
        assert!(Move::new("CASA", 12, 11, Direction::Down).fits());
        assert!(!Move::new("CASA", 0, 12, Direction::Down).fits());
        assert!(!Move::new("", 0, 0, Direction::Down).fits());
        assert!(!Move::new("A", SIZE, 0, Direction::Down).fits());
    }

    #[test]
    fn test_cells_follow_direction() {
        let mv = Move::new("AB", 2, 5, Direction::Down);
        let cells: Vec<_> = mv.cells().collect();
        assert_eq!(cells, vec![(2, 5, b'A'), (2, 6, b'B')]);
    }

    #[test]
    fn test_display() {
        let mv = Move::new("CASA", 3, 7, Direction::Right);
        assert_eq!(mv.to_string(), "\"CASA\" @ (3,7) going RIGHT");
    }
}
