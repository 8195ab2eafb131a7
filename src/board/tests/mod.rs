//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `state.rs` - Packed encoding, setup, and move application
//! - `movegen.rs` - Per-piece destination generation
//! - `iter.rs` - Scan order of the move iterator
//! - `eval.rs` - Material evaluation and jitter
//! - `search.rs` - Alpha-beta search behaviour
//! - `notation.rs` - Four-character move notation and board rendering
//! - `proptest.rs` - Property-based tests

mod notation;
mod state;

use crate::board::{Board, Color, Piece, Square};

/// Build a board from `(col, row, color, piece)` placements.
pub(super) fn board_with(pieces: &[(u8, u8, Color, Piece)]) -> Board {
    let mut board = Board::empty();
    for &(col, row, color, piece) in pieces {
        board.put(Square(col, row), color, piece);
    }
    board
}

/// Sorted destinations, for order-insensitive comparisons.
pub(super) fn sorted(mut squares: Vec<Square>) -> Vec<Square> {
    squares.sort_by_key(|sq| sq.index());
    squares
}
