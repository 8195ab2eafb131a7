//! Packed board state: accessors, setup, and move application.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::error::MoveError;
use super::types::{Color, Move, Piece, Square, COLOR_BIT, KIND_MASK, NIBBLE_MASK};

const BACK_RANK: [Piece; 8] = [
    Piece::Rook,
    Piece::Knight,
    Piece::Bishop,
    Piece::Queen,
    Piece::King,
    Piece::Bishop,
    Piece::Knight,
    Piece::Rook,
];

/// An 8x8 board packed into one `u32` per row.
///
/// Column `c` of a row occupies bits `4c..4c+4`: the low three bits hold
/// the piece code (0 for empty) and the top bit is set for white. The board
/// is `Copy`, so every copy is an independent position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Board {
    pub(crate) rows: [u32; 8],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// A board set up in the standard starting position.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        board.reset();
        board
    }

    /// A board with no pieces on it.
    #[must_use]
    pub const fn empty() -> Self {
        Board { rows: [0; 8] }
    }

    #[inline]
    fn nibble(&self, sq: Square) -> u32 {
        debug_assert!(sq.is_valid(), "square {sq:?} is off the board");
        (self.rows[sq.1 as usize] >> (4 * sq.0 as u32)) & NIBBLE_MASK
    }

    /// Piece on a square, or `None` if it is empty.
    #[inline]
    #[must_use]
    pub fn get(&self, sq: Square) -> Option<Piece> {
        Piece::from_code(self.nibble(sq) & KIND_MASK)
    }

    /// Raw color bit of a square. Meaningless for empty squares.
    #[inline]
    #[must_use]
    pub fn is_white(&self, sq: Square) -> bool {
        self.nibble(sq) & COLOR_BIT != 0
    }

    /// Color of the piece on a square, or `None` if it is empty.
    #[inline]
    #[must_use]
    pub fn color_at(&self, sq: Square) -> Option<Color> {
        self.get(sq).map(|_| Color::from_white(self.is_white(sq)))
    }

    /// Color and kind of the piece on a square.
    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        self.get(sq)
            .map(|piece| (Color::from_white(self.is_white(sq)), piece))
    }

    /// Overwrite a square. When `piece` is `None` the color bit is written
    /// as 0 regardless of `color`.
    #[inline]
    pub fn set(&mut self, sq: Square, piece: Option<Piece>, color: Color) {
        debug_assert!(sq.is_valid(), "square {sq:?} is off the board");
        let nibble = match piece {
            Some(p) if color.is_white() => p.code() | COLOR_BIT,
            Some(p) => p.code(),
            None => 0,
        };
        let shift = 4 * sq.0 as u32;
        let row = &mut self.rows[sq.1 as usize];
        *row = (*row & !(NIBBLE_MASK << shift)) | (nibble << shift);
    }

    #[inline]
    pub fn put(&mut self, sq: Square, color: Color, piece: Piece) {
        self.set(sq, Some(piece), color);
    }

    #[inline]
    pub fn clear(&mut self, sq: Square) {
        self.set(sq, None, Color::Black);
    }

    /// Set up the standard initial position.
    pub fn reset(&mut self) {
        self.rows = [0; 8];
        for (col, &piece) in BACK_RANK.iter().enumerate() {
            let col = col as u8;
            self.put(Square(col, 0), Color::White, piece);
            self.put(Square(col, 1), Color::White, Piece::Pawn);
            self.put(Square(col, 6), Color::Black, Piece::Pawn);
            self.put(Square(col, 7), Color::Black, piece);
        }
    }

    /// Number of pieces of the given color.
    #[must_use]
    pub fn piece_count(&self, color: Color) -> usize {
        Square::all()
            .filter(|&sq| self.color_at(sq) == Some(color))
            .count()
    }

    /// True iff the move's destination is among the source piece's
    /// generated destinations.
    #[must_use]
    pub fn is_valid_move(&self, mv: Move) -> bool {
        mv.is_in_range() && self.moves_from(mv.from).contains(&mv.to)
    }

    /// Move a piece. Returns `Ok(true)` if the move captured a king, in
    /// which case every remaining piece of the king's color is removed.
    ///
    /// A pawn landing on row 0 or row 7 becomes a queen.
    ///
    /// # Errors
    ///
    /// Returns an error if a square is off the board, the source square is
    /// empty, or the destination holds a piece of the mover's color.
    pub fn apply_move(&mut self, mv: Move) -> Result<bool, MoveError> {
        if !mv.is_in_range() {
            return Err(MoveError::OutOfRange { mv });
        }
        let (color, mut piece) = self
            .piece_at(mv.from)
            .ok_or(MoveError::EmptySource { square: mv.from })?;
        let target = self.piece_at(mv.to);
        if let Some((target_color, _)) = target {
            if target_color == color {
                return Err(MoveError::SelfCapture { square: mv.to });
            }
        }

        if piece == Piece::Pawn && (mv.to.1 == 0 || mv.to.1 == 7) {
            piece = Piece::Queen;
        }
        self.put(mv.to, color, piece);
        self.clear(mv.from);

        if matches!(target, Some((_, Piece::King))) {
            self.remove_all(color.opponent());
            return Ok(true);
        }
        Ok(false)
    }

    fn remove_all(&mut self, color: Color) {
        for sq in Square::all() {
            if self.color_at(sq) == Some(color) {
                self.clear(sq);
            }
        }
    }
}
