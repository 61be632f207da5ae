//! Board geometry, alphabet and scoring constants.
//!
//! The board is a fixed 15x15 grid stored row-major in a flat array.
//! Letters are stored as upper-case ASCII bytes; an empty cell holds [`EMPTY`].

// =============================================================================
// Board Geometry
// =============================================================================

/// Board size (NxN).
pub const SIZE: usize = 15;

/// Total number of cells on the board.
pub const CELLS: usize = SIZE * SIZE;

/// Center cell, the usual opening anchor.
pub const CENTER: (usize, usize) = (SIZE / 2, SIZE / 2);

// =============================================================================
// Alphabet
// =============================================================================

/// Number of distinct letters (A-Z).
pub const ALPHABET_LEN: usize = 26;

/// Empty cell marker. Also used as the "nothing was here" entry when
/// recording prior cell contents.
pub const EMPTY: u8 = b' ';

/// Flat point value per letter, indexed by `letter - b'A'`.
pub const LETTER_POINTS: [u32; ALPHABET_LEN] = [
    1, 3, 3, 2, 1, 4, 2, 4, 1, 8, // A-J
    5, 1, 3, 1, 1, 3, 10, 1, 1, 1, // K-T
    1, 4, 4, 8, 4, 10, // U-Z
];

// =============================================================================
// Rules
// =============================================================================

/// Shortest word accepted by the default rules.
pub const MIN_WORD_LEN: usize = 2;
