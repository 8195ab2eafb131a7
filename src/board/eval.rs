//! Material evaluation.

use rand::Rng;

use super::{Board, Square};

impl Board {
    /// Signed material sum: positive favors White, negative favors Black.
    #[must_use]
    pub fn material(&self) -> i32 {
        Square::all()
            .filter_map(|sq| self.piece_at(sq))
            .map(|(color, piece)| color.sign() * piece.value())
            .sum()
    }

    /// Material sum plus a jitter in `{-1, 0, +1}` drawn from `rng`, so that
    /// positions of equal material don't always resolve to the first move
    /// searched.
    pub fn evaluate<R: Rng + ?Sized>(&self, rng: &mut R) -> i32 {
        self.material() + rng.gen_range(-1..=1)
    }
}
