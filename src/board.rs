//! Board state: the letter grid, the letter pool and the running score.
//!
//! Moves are applied in place and taken back with [`Board::undo`]. Every
//! applied move is pushed onto a checkpoint journal together with the record
//! `prepare` computed for it, so undo restores exactly what apply changed and
//! refuses to take back anything but the most recent move.
//!
//! Two boards are equal when their grids are equal; score, pool and journal
//! are not part of identity.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::constants::{CELLS, EMPTY, SIZE};
use crate::letters::{LetterPool, letter_index, letter_points};
use crate::moves::{Direction, Move, MoveError, Placement};

#[derive(Clone, Debug)]
pub struct Board {
    cells: [u8; CELLS],
    pool: LetterPool,
    score: u32,
    /// Number of letters on the grid.
    tiles: usize,
    /// Applied moves, most recent last.
    journal: Vec<Move>,
}

impl Board {
    /// Empty board with the given letters available.
    pub fn new(pool: LetterPool) -> Self {
        Self {
            cells: [EMPTY; CELLS],
            pool,
            score: 0,
            tiles: 0,
            journal: Vec::new(),
        }
    }

    #[inline]
    fn idx(x: usize, y: usize) -> usize {
        y * SIZE + x
    }

    #[inline]
    fn in_bounds(x: isize, y: isize) -> bool {
        (0..SIZE as isize).contains(&x) && (0..SIZE as isize).contains(&y)
    }

    /// Letter at a cell, or `None` for empty or off-board cells.
    pub fn cell(&self, x: usize, y: usize) -> Option<u8> {
        if x >= SIZE || y >= SIZE {
            return None;
        }
        match self.cells[Self::idx(x, y)] {
            EMPTY => None,
            c => Some(c),
        }
    }

    /// Letter at a signed coordinate; off-board reads as empty.
    pub fn cell_at(&self, (x, y): (isize, isize)) -> Option<u8> {
        if x < 0 || y < 0 {
            return None;
        }
        self.cell(x as usize, y as usize)
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn pool(&self) -> &LetterPool {
        &self.pool
    }

    /// True when no letter has been placed.
    pub fn is_empty(&self) -> bool {
        self.tiles == 0
    }

    /// Number of letters on the grid.
    pub fn tiles(&self) -> usize {
        self.tiles
    }

    /// Number of applied moves not yet undone.
    pub fn depth(&self) -> usize {
        self.journal.len()
    }

    /// Applied moves, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.journal
    }

    /// True if the cell holds a letter or lies off the board.
    pub fn is_occupied(&self, x: isize, y: isize) -> bool {
        if !Self::in_bounds(x, y) {
            return true;
        }
        self.cells[Self::idx(x as usize, y as usize)] != EMPTY
    }

    /// True if the cell has a letter or border on at least one horizontal
    /// side and at least one vertical side.
    pub fn is_surrounded(&self, x: isize, y: isize) -> bool {
        (self.is_occupied(x - 1, y) || self.is_occupied(x + 1, y))
            && (self.is_occupied(x, y - 1) || self.is_occupied(x, y + 1))
    }

    /// True if an on-board neighbor (up, down, left, right) holds a letter.
    /// The border does not count.
    pub fn has_adjacent_letters(&self, x: isize, y: isize) -> bool {
        let last = SIZE as isize - 1;
        (x > 0 && self.is_occupied(x - 1, y))
            || (x < last && self.is_occupied(x + 1, y))
            || (y > 0 && self.is_occupied(x, y - 1))
            || (y < last && self.is_occupied(x, y + 1))
    }

    /// True if any letter is left in the pool.
    pub fn has_remaining_letters(&self) -> bool {
        self.pool.has_remaining()
    }

    /// The contiguous run of letters through `(x, y)` along `direction`,
    /// with `(x, y)` itself read as `letter` when given.
    ///
    /// Returns an empty vector when the cell is empty and no letter is given.
    pub fn word_through(
        &self,
        x: usize,
        y: usize,
        direction: Direction,
        letter: Option<u8>,
    ) -> Vec<u8> {
        let at = |cx: usize, cy: usize| {
            if (cx, cy) == (x, y) {
                letter.or_else(|| self.cell(cx, cy))
            } else {
                self.cell(cx, cy)
            }
        };
        if at(x, y).is_none() {
            return Vec::new();
        }
        let (dx, dy) = direction.step();
        let (mut sx, mut sy) = (x, y);
        while sx >= dx && sy >= dy && at(sx - dx, sy - dy).is_some() {
            sx -= dx;
            sy -= dy;
        }
        let mut word = Vec::new();
        while let Some(c) = at(sx, sy) {
            word.push(c);
            sx += dx;
            sy += dy;
        }
        word
    }

    /// Record what `mv` would change on this board: prior span contents,
    /// newly placed letters and the score they add.
    ///
    /// Must be called against the exact state the move is then applied to.
    pub fn prepare(&self, mv: &mut Move) -> Result<(), MoveError> {
        if mv.word().is_empty() {
            return Err(MoveError::EmptyWord);
        }
        if let Some(&bad) = mv.word().iter().find(|&&c| letter_index(c).is_none()) {
            return Err(MoveError::InvalidLetter(bad as char));
        }
        if !mv.fits() {
            return Err(MoveError::OutOfBounds {
                x: mv.x(),
                y: mv.y(),
                direction: mv.direction(),
                len: mv.word().len(),
            });
        }

        let len = mv.word().len();
        let mut previous = Vec::with_capacity(len);
        let mut placed = Vec::with_capacity(len);
        let mut score = 0;
        for (x, y, c) in mv.cells() {
            let prior = self.cells[Self::idx(x, y)];
            previous.push(prior);
            if prior == EMPTY {
                placed.push(c);
                score += letter_points(c);
            }
        }
        mv.set_placement(Placement {
            previous,
            placed,
            score,
        });
        Ok(())
    }

    /// Write a prepared move onto the board, add its score and take its
    /// newly placed letters from the pool.
    ///
    /// Fails without touching the board if the move is unprepared, was
    /// prepared against another state, or needs letters the pool lacks.
    pub fn apply(&mut self, mv: &Move) -> Result<(), MoveError> {
        let placement = mv
            .placement()
            .ok_or_else(|| MoveError::NotPrepared(mv.to_string()))?;
        let stale = placement.previous.len() != mv.word().len()
            || mv
                .cells()
                .zip(&placement.previous)
                .any(|((x, y, _), &prior)| self.cells[Self::idx(x, y)] != prior);
        if stale {
            return Err(MoveError::StalePreparation(mv.to_string()));
        }
        if let Some(short) = self.pool.first_shortage(&placement.placed) {
            return Err(MoveError::InsufficientLetters(short as char));
        }

        for (x, y, c) in mv.cells() {
            self.cells[Self::idx(x, y)] = c;
        }
        self.score += placement.score;
        self.tiles += placement.placed.len();
        self.pool.take(&placement.placed);
        self.journal.push(mv.clone());
        Ok(())
    }

    /// Take back the most recently applied move, which must be `mv`.
    pub fn undo(&mut self, mv: &Move) -> Result<(), MoveError> {
        let last = self.journal.last().ok_or(MoveError::NothingToUndo)?;
        if last != mv {
            return Err(MoveError::UndoOutOfOrder {
                expected: last.to_string(),
                found: mv.to_string(),
            });
        }
        let Some(applied) = self.journal.pop() else {
            return Err(MoveError::NothingToUndo);
        };
        let Some(placement) = applied.placement() else {
            return Err(MoveError::NotPrepared(applied.to_string()));
        };

        for ((x, y, _), &prior) in applied.cells().zip(&placement.previous) {
            self.cells[Self::idx(x, y)] = prior;
        }
        self.score -= placement.score;
        self.tiles -= placement.placed.len();
        self.pool.put_back(&placement.placed);
        Ok(())
    }

    /// Row-major serialization of the grid, one character per cell.
    pub fn to_key(&self) -> String {
        self.cells.iter().map(|&c| c as char).collect()
    }
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.cells == other.cells
    }
}

impl Eq for Board {}

impl Hash for Board {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.cells.hash(state);
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = vec!["-"; SIZE].join(" ");
        writeln!(f, "{rule}")?;
        for row in self.cells.chunks(SIZE) {
            for &c in row {
                write!(f, "{}|", c as char)?;
            }
            writeln!(f)?;
        }
        writeln!(f, "{rule}")
    }
}
