//! Letter pool: how many of each letter are still available to play.
//!
//! The pool is a plain count vector over A-Z. Only the board mutates it while
//! a search runs (taking newly placed letters on apply, putting them back on
//! undo); everything else reads it.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::constants::{ALPHABET_LEN, LETTER_POINTS};

/// Index of an upper-case ASCII letter in the alphabet, or `None`.
#[inline]
pub fn letter_index(letter: u8) -> Option<usize> {
    letter.is_ascii_uppercase().then(|| (letter - b'A') as usize)
}

/// Point value of a letter. Non-letters are worth nothing.
#[inline]
pub fn letter_points(letter: u8) -> u32 {
    letter_index(letter).map_or(0, |i| LETTER_POINTS[i])
}

/// Error building a pool from user input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PoolError {
    #[error("expected 26 letter counts, got {0}")]
    WrongLength(usize),
    #[error("invalid letter {0:?}")]
    InvalidLetter(char),
    #[error("invalid count in {0:?}")]
    InvalidCount(String),
}

/// Remaining count of each letter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct LetterPool {
    counts: [u32; ALPHABET_LEN],
}

impl LetterPool {
    pub fn new(counts: [u32; ALPHABET_LEN]) -> Self {
        Self { counts }
    }

    /// Build a pool from a slice of exactly 26 counts (A first).
    pub fn from_counts(counts: &[u32]) -> Result<Self, PoolError> {
        let counts: [u32; ALPHABET_LEN] = counts
            .try_into()
            .map_err(|_| PoolError::WrongLength(counts.len()))?;
        Ok(Self::new(counts))
    }

    /// One count per occurrence, e.g. `"CASA"` gives C:1 A:2 S:1.
    pub fn from_letters(letters: &str) -> Result<Self, PoolError> {
        let mut pool = Self::default();
        for c in letters.chars() {
            let i = u8::try_from(c.to_ascii_uppercase())
                .ok()
                .and_then(letter_index)
                .ok_or(PoolError::InvalidLetter(c))?;
            pool.counts[i] = pool.counts[i]
                .checked_add(1)
                .ok_or_else(|| PoolError::InvalidCount(c.to_string()))?;
        }
        Ok(pool)
    }

    /// Remaining count of `letter`.
    #[inline]
    pub fn count(&self, letter: u8) -> u32 {
        letter_index(letter).map_or(0, |i| self.counts[i])
    }

    /// Total number of letters left, saturating at `u32::MAX`.
    pub fn total(&self) -> u32 {
        self.counts.iter().fold(0, |acc: u32, &c| acc.saturating_add(c))
    }

    /// True if any letter count is positive.
    pub fn has_remaining(&self) -> bool {
        self.counts.iter().any(|&c| c > 0)
    }

    /// Sum of the point values of every remaining letter.
    ///
    /// No sequence of moves from this pool can add more than this to a score.
    /// Saturates at `u32::MAX`, which keeps it an upper bound.
    pub fn points(&self) -> u32 {
        self.counts
            .iter()
            .zip(LETTER_POINTS)
            .fold(0, |acc: u32, (&c, p)| acc.saturating_add(c.saturating_mul(p)))
    }

    /// First letter in `letters` the pool cannot cover, counting repeats.
    pub fn first_shortage(&self, letters: &[u8]) -> Option<u8> {
        let mut needed = [0u32; ALPHABET_LEN];
        for &l in letters {
            let Some(i) = letter_index(l) else {
                return Some(l);
            };
            needed[i] += 1;
            if needed[i] > self.counts[i] {
                return Some(l);
            }
        }
        None
    }

    /// True if every letter in `letters` can be taken from the pool.
    pub fn can_supply(&self, letters: &[u8]) -> bool {
        self.first_shortage(letters).is_none()
    }

    /// Remove `letters` from the pool. Callers check [`can_supply`] first.
    ///
    /// [`can_supply`]: LetterPool::can_supply
    pub(crate) fn take(&mut self, letters: &[u8]) {
        for i in letters.iter().filter_map(|&l| letter_index(l)) {
            debug_assert!(self.counts[i] > 0, "letter pool underflow");
            self.counts[i] -= 1;
        }
    }

    /// Return `letters` to the pool.
    pub(crate) fn put_back(&mut self, letters: &[u8]) {
        for i in letters.iter().filter_map(|&l| letter_index(l)) {
            self.counts[i] += 1;
        }
    }
}

/// Parses either `"C:1,A:2,S:1"` or a bare run of letters such as `"CASA"`.
impl FromStr for LetterPool {
    type Err = PoolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if !s.contains(':') {
            return Self::from_letters(s);
        }
        let mut pool = Self::default();
        for entry in s.split(',').map(str::trim).filter(|e| !e.is_empty()) {
            let (letter, count) = entry
                .split_once(':')
                .ok_or_else(|| PoolError::InvalidCount(entry.to_string()))?;
            let mut chars = letter.trim().chars();
            let c = match (chars.next(), chars.next()) {
                (Some(c), None) => c,
                _ => return Err(PoolError::InvalidCount(entry.to_string())),
            };
            let i = u8::try_from(c.to_ascii_uppercase())
                .ok()
                .and_then(letter_index)
                .ok_or(PoolError::InvalidLetter(c))?;
            let n: u32 = count
                .trim()
                .parse()
                .map_err(|_| PoolError::InvalidCount(entry.to_string()))?;
            pool.counts[i] = pool.counts[i]
                .checked_add(n)
                .ok_or_else(|| PoolError::InvalidCount(entry.to_string()))?;
        }
        Ok(pool)
    }
}

impl fmt::Display for LetterPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (i, &c) in self.counts.iter().enumerate() {
            if c == 0 {
                continue;
            }
            if !first {
                write!(f, " ")?;
            }
            write!(f, "{}:{c}", (b'A' + i as u8) as char)?;
            first = false;
        }
        if first {
            write!(f, "(empty)")?;
        }
        Ok(())
    }
}
