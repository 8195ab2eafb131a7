//! Per-piece destination generation.

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::{Board, Color, Piece, Square};

/// Upper bound on destinations for a single piece (a centralized queen).
pub(crate) const MAX_PIECE_MOVES: usize = 27;

impl Board {
    /// Destination squares for the piece on `from`, in generation order.
    /// Empty if the square is empty.
    #[must_use]
    pub fn moves_from(&self, from: Square) -> Vec<Square> {
        let Some((color, piece)) = self.piece_at(from) else {
            return Vec::new();
        };
        let mut moves = Vec::with_capacity(MAX_PIECE_MOVES);
        match piece {
            Piece::Pawn => self.generate_pawn_moves(from, color, &mut moves),
            Piece::Knight => self.generate_knight_moves(from, color, &mut moves),
            Piece::King => self.generate_king_moves(from, color, &mut moves),
            Piece::Bishop | Piece::Rook | Piece::Queen => {
                self.generate_slider_moves(from, color, piece, &mut moves);
            }
        }
        moves
    }

    /// Single-step rule shared by knights and kings: keep the target unless
    /// it is off the board or holds a piece of our color.
    #[inline]
    fn push_step(&self, target: Option<Square>, color: Color, moves: &mut Vec<Square>) {
        if let Some(to) = target {
            if self.color_at(to) != Some(color) {
                moves.push(to);
            }
        }
    }
}
