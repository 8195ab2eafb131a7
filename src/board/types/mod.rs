//! Core chess types.
//!
//! This module contains the fundamental types used throughout the engine:
//! - `Piece` and `Color` - piece kinds and colors, with their nibble codes
//! - `Square` - a (column, row) board coordinate
//! - `Move` - a source/destination square pair

mod moves;
mod piece;
mod square;

pub use moves::Move;
pub use piece::{Color, Piece};
pub use square::Square;

pub(crate) use piece::{COLOR_BIT, KIND_MASK, NIBBLE_MASK};
