//! Game configuration parsed from command-line arguments.

use std::fmt;
use std::path::PathBuf;

use crate::board::Color;

/// Who plays a side.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Player {
    Human,
    Engine { depth: u32 },
}

impl Player {
    /// Command-line convention: depth 0 is a human, anything else an engine
    /// searching that many plies.
    #[must_use]
    pub const fn from_depth(depth: u32) -> Self {
        if depth == 0 {
            Player::Human
        } else {
            Player::Engine { depth }
        }
    }
}

/// Error type for argument parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A depth or count was not a non-negative integer
    InvalidNumber { name: String, value: String },
    /// A flag that takes a value was last on the command line
    MissingValue { flag: String },
    /// Unrecognized `--flag`
    UnknownFlag { flag: String },
    /// More than two positional depths
    UnexpectedArgument { arg: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidNumber { name, value } => {
                write!(f, "Invalid value '{value}' for {name}, expected a non-negative integer")
            }
            ConfigError::MissingValue { flag } => write!(f, "Missing value for {flag}"),
            ConfigError::UnknownFlag { flag } => write!(f, "Unknown option '{flag}'"),
            ConfigError::UnexpectedArgument { arg } => {
                write!(f, "Unexpected argument '{arg}'")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

pub const USAGE: &str = "usage: nibble_chess [white_depth] [black_depth] [--seed N] \
[--max-plies N] [--white-moves FILE] [--black-moves FILE]
  a depth of 0 (the default) means that side is played by a human";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    pub white: Player,
    pub black: Player,
    /// Seed for the evaluation jitter; random when absent
    pub seed: Option<u64>,
    /// Stop after this many plies
    pub max_plies: Option<u32>,
    /// Read White's moves from this file instead of the console
    pub white_moves: Option<PathBuf>,
    /// Read Black's moves from this file instead of the console
    pub black_moves: Option<PathBuf>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            white: Player::Human,
            black: Player::Human,
            seed: None,
            max_plies: None,
            white_moves: None,
            black_moves: None,
        }
    }
}

impl GameConfig {
    #[must_use]
    pub fn new(white: Player, black: Player) -> Self {
        GameConfig {
            white,
            black,
            ..GameConfig::default()
        }
    }

    #[must_use]
    pub fn player(&self, color: Color) -> Player {
        match color {
            Color::White => self.white,
            Color::Black => self.black,
        }
    }

    /// Parse arguments (without the program name).
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` describing the first bad argument.
    pub fn from_args<I, S>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut config = GameConfig::default();
        let mut positional = 0;
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            let arg = arg.as_ref();
            if arg.starts_with("--") {
                let value = args
                    .next()
                    .ok_or_else(|| ConfigError::MissingValue {
                        flag: arg.to_string(),
                    })?;
                let value = value.as_ref();
                match arg {
                    "--seed" => config.seed = Some(parse_number(arg, value)?),
                    "--max-plies" => config.max_plies = Some(parse_number(arg, value)?),
                    "--white-moves" => config.white_moves = Some(PathBuf::from(value)),
                    "--black-moves" => config.black_moves = Some(PathBuf::from(value)),
                    _ => {
                        return Err(ConfigError::UnknownFlag {
                            flag: arg.to_string(),
                        })
                    }
                }
                continue;
            }

            match positional {
                0 => config.white = Player::from_depth(parse_number("white depth", arg)?),
                1 => config.black = Player::from_depth(parse_number("black depth", arg)?),
                _ => {
                    return Err(ConfigError::UnexpectedArgument {
                        arg: arg.to_string(),
                    })
                }
            }
            positional += 1;
        }
        Ok(config)
    }
}

fn parse_number<T: std::str::FromStr>(name: &str, value: &str) -> Result<T, ConfigError> {
    value.parse().map_err(|_| ConfigError::InvalidNumber {
        name: name.to_string(),
        value: value.to_string(),
    })
}
