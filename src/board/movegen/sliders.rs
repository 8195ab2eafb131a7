//! Ray casting for rooks, bishops and queens.

use super::super::{Board, Color, Piece, Square};

const ROOK_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (-1, 1), (1, -1), (-1, -1)];

impl Board {
    pub(crate) fn generate_slider_moves(
        &self,
        from: Square,
        color: Color,
        piece: Piece,
        moves: &mut Vec<Square>,
    ) {
        debug_assert!(piece.is_slider());
        if matches!(piece, Piece::Rook | Piece::Queen) {
            for (d_col, d_row) in ROOK_DIRECTIONS {
                self.cast_ray(from, d_col, d_row, color, moves);
            }
        }
        if matches!(piece, Piece::Bishop | Piece::Queen) {
            for (d_col, d_row) in BISHOP_DIRECTIONS {
                self.cast_ray(from, d_col, d_row, color, moves);
            }
        }
    }

    /// Walk one direction until the edge or a piece. An enemy piece ends the
    /// ray and is included; a friendly one ends it and is not.
    fn cast_ray(&self, from: Square, d_col: i8, d_row: i8, color: Color, moves: &mut Vec<Square>) {
        let mut cursor = from.offset(d_col, d_row);
        while let Some(to) = cursor {
            match self.color_at(to) {
                None => moves.push(to),
                Some(c) if c == color => break,
                Some(_) => {
                    moves.push(to);
                    break;
                }
            }
            cursor = to.offset(d_col, d_row);
        }
    }
}
