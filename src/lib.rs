pub mod board;
pub mod game;

pub use board::{find_best_move, search, Board, Color, Move, Piece, SearchConfig, SearchResult, Square};
pub use game::{Game, GameConfig, Outcome, Player};
