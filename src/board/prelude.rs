//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions.
//!
//! # Example
//! ```
//! use nibble_chess::board::prelude::*;
//! ```

pub use super::{
    find_best_move, search, Board, Color, Move, MoveError, MoveParseError, Piece, SearchConfig,
    SearchResult, Square,
};
