//! Four-character move notation and board rendering.

use super::board_with;
use crate::board::{Board, Color, Move, MoveParseError, Piece, Square};

#[test]
fn test_parse_move() {
    let mv: Move = "B3C3".parse().unwrap();
    assert_eq!(mv, Move::from_coords(1, 2, 2, 2));
    let mv: Move = "e2e4".parse().unwrap();
    assert_eq!(mv, Move::from_coords(4, 1, 4, 3));
    let mv: Move = "  A1H8\n".parse().unwrap();
    assert_eq!(mv, Move::new(Square(0, 0), Square(7, 7)));
}

#[test]
fn test_display_move() {
    assert_eq!(Move::from_coords(1, 2, 2, 2).to_string(), "B3C3");
    assert_eq!(Move::from_coords(7, 6, 7, 7).to_string(), "H7H8");
    assert_eq!(Square(0, 7).to_string(), "A8");
}

#[test]
fn test_parse_square() {
    assert_eq!("h1".parse::<Square>(), Ok(Square(7, 0)));
    assert_eq!("D5".parse::<Square>(), Ok(Square(3, 4)));
    assert!("I1".parse::<Square>().is_err());
    assert!("A9".parse::<Square>().is_err());
    assert!("A".parse::<Square>().is_err());
}

#[test]
fn test_wrong_length_is_rejected() {
    assert_eq!(
        "E2E".parse::<Move>(),
        Err(MoveParseError::InvalidLength { len: 3 })
    );
    assert_eq!(
        "E2E45".parse::<Move>(),
        Err(MoveParseError::InvalidLength { len: 5 })
    );
    assert_eq!("".parse::<Move>(), Err(MoveParseError::InvalidLength { len: 0 }));
}

#[test]
fn test_bad_square_is_rejected() {
    assert_eq!(
        "Z9A1".parse::<Move>(),
        Err(MoveParseError::InvalidSquare {
            notation: "Z9".to_string()
        })
    );
    assert_eq!(
        "A1A0".parse::<Move>(),
        Err(MoveParseError::InvalidSquare {
            notation: "A0".to_string()
        })
    );
    assert!(matches!(
        "é2e4".parse::<Move>(),
        Err(MoveParseError::InvalidSquare { .. })
    ));
}

#[test]
fn test_parse_error_messages() {
    let err = "E2E".parse::<Move>().unwrap_err();
    assert_eq!(err.to_string(), "Move must be 4 characters, found 3");
}

#[test]
fn test_render_opening() {
    let text = Board::new().to_string();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 19);
    assert_eq!(lines[0], "  A  B  C  D  E  F  G  H");
    assert_eq!(lines[1], " +--+--+--+--+--+--+--+--+");
    assert_eq!(lines[2], "8|br|bn|bb|bq|bK|bb|bn|br|8");
    assert_eq!(lines[4], "7|bp|bp|bp|bp|bp|bp|bp|bp|7");
    assert_eq!(lines[6], "6|  |  |  |  |  |  |  |  |6");
    assert_eq!(lines[14], "2|wp|wp|wp|wp|wp|wp|wp|wp|2");
    assert_eq!(lines[16], "1|wr|wn|wb|wq|wK|wb|wn|wr|1");
    assert_eq!(lines[18], lines[0]);
    assert!(!text.ends_with('\n'));
}

#[test]
fn test_render_single_piece() {
    let board = board_with(&[(2, 3, Color::Black, Piece::Queen)]);
    let text = board.to_string();
    let rank4 = text.lines().nth(10).unwrap();
    assert_eq!(rank4, "4|  |  |bq|  |  |  |  |  |4");
}
