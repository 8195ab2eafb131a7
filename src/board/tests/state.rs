//! Packed board state and move application.

use super::board_with;
use crate::board::{Board, Color, Move, MoveError, Piece, Square};

#[test]
fn test_reset_reproduces_opening_layout() {
    let board = Board::new();
    let back_rank = [
        Piece::Rook,
        Piece::Knight,
        Piece::Bishop,
        Piece::Queen,
        Piece::King,
        Piece::Bishop,
        Piece::Knight,
        Piece::Rook,
    ];

    for col in 0..8u8 {
        assert_eq!(board.get(Square(col, 0)), Some(back_rank[col as usize]));
        assert!(board.is_white(Square(col, 0)));
        assert_eq!(board.get(Square(col, 1)), Some(Piece::Pawn));
        assert!(board.is_white(Square(col, 1)));
        assert_eq!(board.get(Square(col, 6)), Some(Piece::Pawn));
        assert!(!board.is_white(Square(col, 6)));
        assert_eq!(board.get(Square(col, 7)), Some(back_rank[col as usize]));
        assert!(!board.is_white(Square(col, 7)));
        for row in 2..6u8 {
            assert_eq!(board.get(Square(col, row)), None);
        }
    }

    let occupied = Square::all().filter(|&sq| board.get(sq).is_some()).count();
    assert_eq!(occupied, 32);
    assert_eq!(board.piece_count(Color::White), 16);
    assert_eq!(board.piece_count(Color::Black), 16);
}

#[test]
fn test_reset_overwrites_previous_position() {
    let mut board = board_with(&[(3, 3, Color::White, Piece::Queen)]);
    board.reset();
    assert_eq!(board, Board::new());
}

#[test]
fn test_packed_row_layout() {
    let board = Board::new();
    // Column 0 is the low nibble, so the hex reads H-file first.
    assert_eq!(board.rows[0], 0xA_B_C_E_D_C_B_A);
    assert_eq!(board.rows[1], 0x9999_9999);
    assert_eq!(board.rows[6], 0x1111_1111);
    assert_eq!(board.rows[7], 0x2_3_4_6_5_4_3_2);
    for row in 2..6 {
        assert_eq!(board.rows[row], 0);
    }
}

#[test]
fn test_set_empty_writes_zero_color_bit() {
    let mut board = Board::empty();
    board.put(Square(4, 4), Color::White, Piece::Knight);
    board.set(Square(4, 4), None, Color::White);
    assert_eq!(board.get(Square(4, 4)), None);
    assert!(!board.is_white(Square(4, 4)));
    assert_eq!(board, Board::empty());
}

#[test]
fn test_set_leaves_neighbours_untouched() {
    let mut board = Board::new();
    board.put(Square(3, 1), Color::Black, Piece::Queen);
    assert_eq!(board.piece_at(Square(3, 1)), Some((Color::Black, Piece::Queen)));
    assert_eq!(board.piece_at(Square(2, 1)), Some((Color::White, Piece::Pawn)));
    assert_eq!(board.piece_at(Square(4, 1)), Some((Color::White, Piece::Pawn)));
    assert_eq!(board.piece_at(Square(7, 1)), Some((Color::White, Piece::Pawn)));
}

#[test]
fn test_copies_are_independent() {
    let original = Board::new();
    let mut copy = original;
    copy.apply_move(Move::from_coords(4, 1, 4, 3)).unwrap();
    assert_eq!(original.get(Square(4, 1)), Some(Piece::Pawn));
    assert_eq!(original.get(Square(4, 3)), None);
    assert_ne!(original, copy);
}

#[test]
fn test_apply_quiet_move() {
    let mut board = Board::new();
    let ended = board.apply_move(Move::from_coords(1, 0, 2, 2)).unwrap();
    assert!(!ended);
    assert_eq!(board.get(Square(1, 0)), None);
    assert_eq!(board.piece_at(Square(2, 2)), Some((Color::White, Piece::Knight)));
}

#[test]
fn test_white_pawn_promotes_to_queen() {
    let mut board = board_with(&[(0, 6, Color::White, Piece::Pawn)]);
    board.apply_move(Move::from_coords(0, 6, 0, 7)).unwrap();
    assert_eq!(board.piece_at(Square(0, 7)), Some((Color::White, Piece::Queen)));
    assert_eq!(board.get(Square(0, 6)), None);
}

#[test]
fn test_black_pawn_promotes_on_capture() {
    let mut board = board_with(&[
        (5, 1, Color::Black, Piece::Pawn),
        (6, 0, Color::White, Piece::Knight),
    ]);
    board.apply_move(Move::from_coords(5, 1, 6, 0)).unwrap();
    assert_eq!(board.piece_at(Square(6, 0)), Some((Color::Black, Piece::Queen)));
}

#[test]
fn test_capturing_king_clears_losing_side() {
    let mut board = Board::new();
    // White rook on E7 in front of the black king.
    board.put(Square(4, 6), Color::White, Piece::Rook);
    let ended = board.apply_move(Move::from_coords(4, 6, 4, 7)).unwrap();

    assert!(ended);
    assert_eq!(board.piece_count(Color::Black), 0);
    assert_eq!(board.piece_at(Square(4, 7)), Some((Color::White, Piece::Rook)));
    // White pieces remain where they were.
    assert_eq!(board.piece_count(Color::White), 17);
    for row in 6..8u8 {
        for col in 0..8u8 {
            if (col, row) != (4, 7) {
                assert_eq!(board.get(Square(col, row)), None);
            }
        }
    }
}

#[test]
fn test_capturing_other_piece_is_local() {
    let mut board = Board::new();
    board.put(Square(3, 5), Color::White, Piece::Knight);
    let before = board;
    let ended = board.apply_move(Move::from_coords(3, 5, 2, 7)).unwrap();

    assert!(!ended);
    assert_eq!(board.piece_at(Square(2, 7)), Some((Color::White, Piece::Knight)));
    assert_eq!(board.get(Square(3, 5)), None);
    for sq in Square::all() {
        if sq != Square(3, 5) && sq != Square(2, 7) {
            assert_eq!(board.piece_at(sq), before.piece_at(sq), "square {sq} changed");
        }
    }
    assert_eq!(board.piece_count(Color::Black), 15);
}

#[test]
fn test_apply_move_rejects_out_of_range() {
    let mut board = Board::new();
    let mv = Move::from_coords(0, 1, 0, 8);
    assert_eq!(board.apply_move(mv), Err(MoveError::OutOfRange { mv }));
    let mv = Move::from_coords(9, 1, 0, 2);
    assert_eq!(board.apply_move(mv), Err(MoveError::OutOfRange { mv }));
    assert_eq!(board, Board::new());
}

#[test]
fn test_apply_move_rejects_empty_source() {
    let mut board = Board::new();
    let result = board.apply_move(Move::from_coords(3, 3, 3, 4));
    assert_eq!(
        result,
        Err(MoveError::EmptySource {
            square: Square(3, 3)
        })
    );
}

#[test]
fn test_apply_move_rejects_self_capture() {
    let mut board = Board::new();
    let result = board.apply_move(Move::from_coords(0, 0, 0, 1));
    assert_eq!(
        result,
        Err(MoveError::SelfCapture {
            square: Square(0, 1)
        })
    );
    assert_eq!(board, Board::new());
}

#[test]
fn test_is_valid_move() {
    let board = Board::new();
    assert!(board.is_valid_move(Move::from_coords(4, 1, 4, 3)));
    assert!(board.is_valid_move(Move::from_coords(6, 0, 5, 2)));
    assert!(!board.is_valid_move(Move::from_coords(4, 1, 4, 4)));
    assert!(!board.is_valid_move(Move::from_coords(0, 0, 0, 1)));
    assert!(!board.is_valid_move(Move::from_coords(3, 3, 3, 4)));
    assert!(!board.is_valid_move(Move::from_coords(4, 1, 4, 8)));
}
