//! Error types for chess board operations.

use std::fmt;

use super::types::{Move, Square};

/// Error type for moves rejected by `Board::apply_move`.
///
/// These signal a caller bug: moves should be checked with
/// `Board::is_valid_move` first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// A source or destination coordinate is outside 0-7
    OutOfRange { mv: Move },
    /// There is no piece on the source square
    EmptySource { square: Square },
    /// The destination holds a piece of the mover's color
    SelfCapture { square: Square },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::OutOfRange { mv } => {
                write!(
                    f,
                    "Move ({},{}) -> ({},{}) is out of range",
                    mv.from.0, mv.from.1, mv.to.0, mv.to.1
                )
            }
            MoveError::EmptySource { square } => {
                write!(f, "There is no piece on {square}")
            }
            MoveError::SelfCapture { square } => {
                write!(f, "Cannot capture own piece on {square}")
            }
        }
    }
}

impl std::error::Error for MoveError {}

/// Error type for move notation parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    /// Move string has invalid length (must be exactly 4 characters)
    InvalidLength { len: usize },
    /// Invalid square notation in move
    InvalidSquare { notation: String },
}

impl fmt::Display for MoveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveParseError::InvalidLength { len } => {
                write!(f, "Move must be 4 characters, found {len}")
            }
            MoveParseError::InvalidSquare { notation } => {
                write!(f, "Invalid square notation in '{notation}'")
            }
        }
    }
}

impl std::error::Error for MoveParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_error_out_of_range() {
        let err = MoveError::OutOfRange {
            mv: Move::from_coords(0, 9, 1, 1),
        };
        assert!(err.to_string().contains('9'));
        assert!(err.to_string().contains("out of range"));
    }

    #[test]
    fn test_move_error_empty_source() {
        let err = MoveError::EmptySource {
            square: Square(3, 3),
        };
        assert!(err.to_string().contains("D4"));
    }

    #[test]
    fn test_move_error_self_capture() {
        let err = MoveError::SelfCapture {
            square: Square(0, 0),
        };
        assert!(err.to_string().contains("A1"));
    }

    #[test]
    fn test_parse_error_invalid_length() {
        let err = MoveParseError::InvalidLength { len: 3 };
        assert!(err.to_string().contains('3'));
    }

    #[test]
    fn test_parse_error_invalid_square() {
        let err = MoveParseError::InvalidSquare {
            notation: "Z9".to_string(),
        };
        assert!(err.to_string().contains("Z9"));
    }

    #[test]
    fn test_error_clone() {
        let err = MoveError::EmptySource {
            square: Square(1, 2),
        };
        let cloned = err.clone();
        assert_eq!(err, cloned);
    }
}
