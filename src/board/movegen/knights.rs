//! Knight jumps.

use super::super::{Board, Color, Square};

const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

impl Board {
    pub(crate) fn generate_knight_moves(&self, from: Square, color: Color, moves: &mut Vec<Square>) {
        for (d_col, d_row) in KNIGHT_OFFSETS {
            self.push_step(from.offset(d_col, d_row), color, moves);
        }
    }
}
