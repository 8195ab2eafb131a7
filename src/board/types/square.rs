//! Square type and its two-character notation.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::MoveParseError;

/// A square on the chess board, represented as (column, row).
///
/// Column 0 is file A, row 0 is rank 1 (white's back rank). The fields are
/// public so that callers can build squares directly; anything outside
/// `0..8` is rejected by the operations that check ranges.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(pub u8, pub u8); // (col, row)

impl Square {
    /// Create a new square with bounds checking
    #[must_use]
    pub const fn new(col: u8, row: u8) -> Option<Self> {
        if col < 8 && row < 8 {
            Some(Square(col, row))
        } else {
            None
        }
    }

    /// Get the column (0-7, where 0 = file A)
    #[inline]
    #[must_use]
    pub const fn col(self) -> u8 {
        self.0
    }

    /// Get the row (0-7, where 0 = rank 1)
    #[inline]
    #[must_use]
    pub const fn row(self) -> u8 {
        self.1
    }

    #[inline]
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.0 < 8 && self.1 < 8
    }

    /// Step by a (column, row) delta. Returns `None` once either coordinate
    /// leaves the board.
    #[inline]
    #[must_use]
    pub const fn offset(self, d_col: i8, d_row: i8) -> Option<Square> {
        let col = self.0 as i8 + d_col;
        let row = self.1 as i8 + d_row;
        if col < 0 || col > 7 || row < 0 || row > 7 {
            None
        } else {
            Some(Square(col as u8, row as u8))
        }
    }

    /// Scan-order index (0-63, A1=0, B1=1, ..., H8=63)
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.1 as usize * 8 + self.0 as usize
    }

    /// Create a square from a scan-order index (0-63)
    #[inline]
    #[must_use]
    pub const fn from_index(idx: usize) -> Self {
        Square((idx % 8) as u8, (idx / 8) as u8)
    }

    /// All 64 squares in scan order: columns ascending within a row, rows
    /// 0 to 7.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64).map(Square::from_index)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'A' + self.0) as char;
        let rank = (b'1' + self.1) as char;
        write!(f, "{file}{rank}")
    }
}

impl FromStr for Square {
    type Err = MoveParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || MoveParseError::InvalidSquare {
            notation: s.to_string(),
        };
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(invalid());
        }
        let file = bytes[0].to_ascii_uppercase();
        let rank = bytes[1];
        if !(b'A'..=b'H').contains(&file) || !(b'1'..=b'8').contains(&rank) {
            return Err(invalid());
        }
        Ok(Square(file - b'A', rank - b'1'))
    }
}
