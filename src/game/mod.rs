//! Game loop: alternates White and Black until a king falls, a side runs out
//! of moves, a human quits, or the ply limit is reached.

mod config;
mod input;

use std::fmt;
use std::io::{self, Write};

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::board::{find_best_move, Board, Color, Move, MoveError, SearchConfig};
pub use config::{ConfigError, GameConfig, Player, USAGE};
pub use input::{MoveSource, Routed, Tokens};

/// How a game finished.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// This side captured the opposing king
    Won(Color),
    /// A human entered `q` or their input ran out
    Quit,
    /// This side was to move and had no moves
    NoMoves(Color),
    PlyLimit,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Won(color) => write!(f, "{color} has won"),
            Outcome::Quit => write!(f, "Game abandoned"),
            Outcome::NoMoves(color) => write!(f, "{color} has no moves"),
            Outcome::PlyLimit => write!(f, "Ply limit reached"),
        }
    }
}

/// Error type for a game that could not be played to an outcome
#[derive(Debug)]
pub enum GameError {
    Io(io::Error),
    /// The engine produced a move the board rejected
    Move(MoveError),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::Io(e) => write!(f, "I/O error: {e}"),
            GameError::Move(e) => write!(f, "Engine move rejected: {e}"),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::Io(e) => Some(e),
            GameError::Move(e) => Some(e),
        }
    }
}

impl From<io::Error> for GameError {
    fn from(e: io::Error) -> Self {
        GameError::Io(e)
    }
}

impl From<MoveError> for GameError {
    fn from(e: MoveError) -> Self {
        GameError::Move(e)
    }
}

pub struct Game {
    board: Board,
    config: GameConfig,
    rng: StdRng,
    side_to_move: Color,
    plies: u32,
}

impl Game {
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self::from_position(Board::new(), Color::White, config)
    }

    /// Start from an arbitrary position.
    #[must_use]
    pub fn from_position(board: Board, side_to_move: Color, config: GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Game {
            board,
            config,
            rng,
            side_to_move,
            plies: 0,
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Plies played so far.
    #[must_use]
    pub fn plies(&self) -> u32 {
        self.plies
    }

    /// Play to the end. The board is written to `out` at the start and after
    /// every move, along with prompts for human players.
    ///
    /// # Errors
    ///
    /// Fails on I/O errors and if an engine move is rejected by the board.
    pub fn play<S, W>(&mut self, source: &mut S, out: &mut W) -> Result<Outcome, GameError>
    where
        S: MoveSource + ?Sized,
        W: Write,
    {
        writeln!(out, "{}", self.board)?;
        writeln!(out)?;
        let outcome = loop {
            if let Some(outcome) = self.step(source, out)? {
                break outcome;
            }
        };
        writeln!(out, "{outcome}")?;
        Ok(outcome)
    }

    /// Play one ply. Returns the outcome if the game ended.
    ///
    /// # Errors
    ///
    /// See [`Game::play`].
    pub fn step<S, W>(&mut self, source: &mut S, out: &mut W) -> Result<Option<Outcome>, GameError>
    where
        S: MoveSource + ?Sized,
        W: Write,
    {
        if self.config.max_plies.is_some_and(|limit| self.plies >= limit) {
            return Ok(Some(Outcome::PlyLimit));
        }
        let side = self.side_to_move;
        if !self.board.has_moves(side) {
            return Ok(Some(Outcome::NoMoves(side)));
        }

        let mv = match self.config.player(side) {
            Player::Human => match self.read_human_move(side, source, out)? {
                Some(mv) => mv,
                None => return Ok(Some(Outcome::Quit)),
            },
            Player::Engine { depth } => match self.engine_move(side, depth)? {
                Some(mv) => mv,
                None => return Ok(Some(Outcome::NoMoves(side))),
            },
        };

        let king_captured = self.board.apply_move(mv)?;
        self.plies += 1;
        self.side_to_move = side.opponent();

        #[cfg(feature = "logging")]
        log::info!("ply {} {side} {mv}", self.plies);

        writeln!(out, "{side} plays {mv}")?;
        writeln!(out, "{}", self.board)?;
        writeln!(out)?;

        Ok(king_captured.then_some(Outcome::Won(side)))
    }

    /// The engine's choice, or the first generated move when the search
    /// returns none (depth 0).
    fn engine_move(&mut self, side: Color, depth: u32) -> Result<Option<Move>, GameError> {
        let config = SearchConfig::with_depth(depth);
        let result = find_best_move(&self.board, side, &config, &mut self.rng)?;
        Ok(result.best_move.or_else(|| self.board.moves(side).next()))
    }

    /// Prompt until a legal move for `side` is entered. `None` on `q` or
    /// end of input.
    fn read_human_move<S, W>(
        &self,
        side: Color,
        source: &mut S,
        out: &mut W,
    ) -> io::Result<Option<Move>>
    where
        S: MoveSource + ?Sized,
        W: Write,
    {
        write!(out, "{side} to move (example: B2B3, q to quit): ")?;
        out.flush()?;
        loop {
            let Some(token) = source.next_token(side)? else {
                writeln!(out)?;
                return Ok(None);
            };
            if token.eq_ignore_ascii_case("q") {
                return Ok(None);
            }
            match token.parse::<Move>() {
                Ok(mv)
                    if self.board.color_at(mv.from) == Some(side)
                        && self.board.is_valid_move(mv) =>
                {
                    writeln!(out)?;
                    return Ok(Some(mv));
                }
                Ok(_) => write!(out, "Invalid move, please try again: ")?,
                Err(e) => write!(out, "{e}, please try again: ")?,
            }
            out.flush()?;
        }
    }
}
