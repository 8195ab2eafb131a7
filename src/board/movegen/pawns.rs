//! Pawn pushes and diagonal captures.

use super::super::{Board, Color, Square};

impl Board {
    /// Pushes, the double push from the start row, then captures toward
    /// column +1 and column -1. Promotion happens in `apply_move`.
    pub(crate) fn generate_pawn_moves(&self, from: Square, color: Color, moves: &mut Vec<Square>) {
        let dir = color.pawn_direction();

        if let Some(one) = from.offset(0, dir) {
            if self.get(one).is_none() {
                moves.push(one);
                if from.row() == color.pawn_start_row() {
                    if let Some(two) = one.offset(0, dir) {
                        if self.get(two).is_none() {
                            moves.push(two);
                        }
                    }
                }
            }
        }

        for d_col in [1, -1] {
            if let Some(to) = from.offset(d_col, dir) {
                if self.color_at(to) == Some(color.opponent()) {
                    moves.push(to);
                }
            }
        }
    }
}
