//! Chess board representation and game-tree search.
//!
//! The board is packed into eight `u32` rows of 4-bit squares. Move
//! generation works square by square with ray casting for sliding pieces,
//! and the search is a plain fixed-depth minimax with alpha-beta pruning
//! over a material evaluation.
//!
//! # Example
//! ```
//! use nibble_chess::board::{Board, Color};
//!
//! let board = Board::new();
//! let moves = board.moves(Color::White).count();
//! println!("Starting position has {} moves", moves);
//! ```

mod error;
mod eval;
mod iter;
mod movegen;
pub mod prelude;
mod render;
mod search;
mod state;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use error::{MoveError, MoveParseError};
pub use iter::MoveIter;
pub use state::Board;
pub use types::{Color, Move, Piece, Square};

// Public API - search functions and configuration
pub use search::{
    find_best_move, search, search_with_stats, SearchConfig, SearchResult, SearchStats,
    SCORE_INFINITY, WIN_SCORE,
};
