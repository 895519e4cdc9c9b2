use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Errors produced by the square codec.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NotationError {
    /// Grid coordinates outside the 8×8 board. Only ever caused by a
    /// programming error in a conversion, never by user input.
    #[error("coordinates ({row}, {col}) are outside the 8x8 board")]
    OutOfRange { row: i32, col: i32 },

    /// Text claiming to be a square name that is not a file letter `a`-`h`
    /// followed by a rank digit `1`-`8`. Arises from transcription noise
    /// and is recovered by discarding the candidate.
    #[error("malformed square notation: '{0}'")]
    Malformed(String),
}

/// A single board square, stored as (row, column) with both in 0-7.
///
/// Row 0 is black's back rank (rank 8), column 0 is the a-file. A `Square`
/// can only be constructed in range, so holding one is proof the coordinate
/// is on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Creates a square from grid coordinates, rejecting anything off-board.
    pub fn new(row: i32, col: i32) -> Result<Self, NotationError> {
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Ok(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            Err(NotationError::OutOfRange { row, col })
        }
    }

    /// Grid row, 0 (rank 8) to 7 (rank 1).
    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Grid column, 0 (a-file) to 7 (h-file).
    #[inline]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// The square displaced by (`dr`, `dc`), or None if that leaves the board.
    #[inline]
    pub fn offset(self, dr: i32, dc: i32) -> Option<Self> {
        Self::new(self.row as i32 + dr, self.col as i32 + dc).ok()
    }

    /// The file letter ('a'-'h') of this square.
    #[inline]
    pub const fn file_char(self) -> char {
        (b'a' + self.col) as char
    }

    /// The rank digit ('1'-'8') of this square.
    #[inline]
    pub const fn rank_char(self) -> char {
        (b'8' - self.row) as char
    }

    /// All 64 squares in row-major order: row 0 to 7, column 0 to 7 within
    /// a row. This is the documented scan order for command disambiguation.
    pub fn all() -> impl Iterator<Item = Self> {
        (0u8..64).map(|i| Self {
            row: i / 8,
            col: i % 8,
        })
    }
}

/// Parse an algebraic square name like "e4". Exact inverse of `Display`.
impl FromStr for Square {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(NotationError::Malformed(s.to_string()));
        };

        let file = file.to_ascii_lowercase();
        if !('a'..='h').contains(&file) || !('1'..='8').contains(&rank) {
            return Err(NotationError::Malformed(s.to_string()));
        }

        Ok(Self {
            row: b'8' - rank as u8,
            col: file as u8 - b'a',
        })
    }
}

/// Display as the algebraic square name (e.g. "e4"), the one wire format
/// worth preserving exactly: move history is displayed and may be exported.
impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank_char())
    }
}

impl Serialize for Square {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
