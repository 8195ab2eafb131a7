//! Text rendering of the board.

use std::fmt;

use super::{Board, Square};

const FILE_HEADER: &str = "  A  B  C  D  E  F  G  H";
const SEPARATOR: &str = " +--+--+--+--+--+--+--+--+";

impl fmt::Display for Board {
    /// Rank 8 at the top. Each occupied cell shows the color prefix (`w` or
    /// `b`) and the piece letter, e.g. `wp` or `bK`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{FILE_HEADER}")?;
        writeln!(f, "{SEPARATOR}")?;
        for row in (0..8u8).rev() {
            let rank = row + 1;
            write!(f, "{rank}|")?;
            for col in 0..8u8 {
                match self.piece_at(Square(col, row)) {
                    Some((color, piece)) => write!(f, "{}{}|", color.prefix(), piece.to_char())?,
                    None => write!(f, "  |")?,
                }
            }
            writeln!(f, "{rank}")?;
            writeln!(f, "{SEPARATOR}")?;
        }
        write!(f, "{FILE_HEADER}")
    }
}
