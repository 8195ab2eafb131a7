//! Move type.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::square::Square;
use crate::board::error::MoveParseError;

/// A move from one square to another.
///
/// Moves carry no flags: promotion is implied by a pawn reaching the last
/// row and captures by an occupied destination.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    #[inline]
    #[must_use]
    pub const fn new(from: Square, to: Square) -> Self {
        Move { from, to }
    }

    /// Build a move from raw coordinates `(src_col, src_row, dst_col,
    /// dst_row)`. No range check is done here.
    #[inline]
    #[must_use]
    pub const fn from_coords(src_col: u8, src_row: u8, dst_col: u8, dst_row: u8) -> Self {
        Move {
            from: Square(src_col, src_row),
            to: Square(dst_col, dst_row),
        }
    }

    /// Both squares lie on the board.
    #[inline]
    #[must_use]
    pub const fn is_in_range(self) -> bool {
        self.from.is_valid() && self.to.is_valid()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

impl FromStr for Move {
    type Err = MoveParseError;

    /// Parse the fixed four-character form, e.g. `B3C3`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let len = s.chars().count();
        if len != 4 {
            return Err(MoveParseError::InvalidLength { len });
        }
        if !s.is_ascii() {
            return Err(MoveParseError::InvalidSquare {
                notation: s.to_string(),
            });
        }
        let from = s[..2].parse::<Square>()?;
        let to = s[2..].parse::<Square>()?;
        Ok(Move { from, to })
    }
}
