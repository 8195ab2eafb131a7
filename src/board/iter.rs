//! Lazy enumeration of every move for one side.

use std::iter::FusedIterator;

use super::{Board, Color, Move, Square};

/// Iterator over all moves of one color.
///
/// Squares are visited in scan order (columns ascending within a row, rows
/// 0 to 7). Destinations for the current square are generated when the
/// square is reached and handed out from the back of the list, so a
/// square's last-generated destination comes first.
#[derive(Clone, Debug)]
pub struct MoveIter<'a> {
    board: &'a Board,
    color: Color,
    /// Next square index to scan
    cursor: usize,
    from: Square,
    pending: Vec<Square>,
}

impl<'a> MoveIter<'a> {
    pub(crate) fn new(board: &'a Board, color: Color) -> Self {
        MoveIter {
            board,
            color,
            cursor: 0,
            from: Square(0, 0),
            pending: Vec::new(),
        }
    }

    /// The color whose moves are being enumerated.
    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }
}

impl Iterator for MoveIter<'_> {
    type Item = Move;

    fn next(&mut self) -> Option<Move> {
        loop {
            if let Some(to) = self.pending.pop() {
                return Some(Move::new(self.from, to));
            }
            if self.cursor >= 64 {
                return None;
            }
            let sq = Square::from_index(self.cursor);
            self.cursor += 1;
            if self.board.color_at(sq) == Some(self.color) {
                self.from = sq;
                self.pending = self.board.moves_from(sq);
            }
        }
    }
}

impl FusedIterator for MoveIter<'_> {}

impl Board {
    /// All moves for `color`, generated lazily.
    #[must_use]
    pub fn moves(&self, color: Color) -> MoveIter<'_> {
        MoveIter::new(self, color)
    }

    /// True if `color` has at least one move.
    #[must_use]
    pub fn has_moves(&self, color: Color) -> bool {
        self.moves(color).next().is_some()
    }
}
