//! King steps.

use super::super::{Board, Color, Square};

const KING_OFFSETS: [(i8, i8); 8] = [
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

impl Board {
    pub(crate) fn generate_king_moves(&self, from: Square, color: Color, moves: &mut Vec<Square>) {
        for (d_col, d_row) in KING_OFFSETS {
            self.push_step(from.offset(d_col, d_row), color, moves);
        }
    }
}
