use std::env;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;
use std::process::ExitCode;

use nibble_chess::board::Color;
use nibble_chess::game::{Game, GameConfig, GameError, MoveSource, Outcome, Routed, Tokens, USAGE};

fn open_moves(path: &Path) -> io::Result<Box<dyn MoveSource>> {
    let file = File::open(path)?;
    Ok(Box::new(Tokens::new(BufReader::new(file))))
}

fn run(config: GameConfig) -> Result<Outcome, GameError> {
    let mut source = Routed::new(Tokens::new(io::stdin().lock()));
    if let Some(path) = &config.white_moves {
        source = source.with_side(Color::White, open_moves(path)?);
    }
    if let Some(path) = &config.black_moves {
        source = source.with_side(Color::Black, open_moves(path)?);
    }

    let mut game = Game::new(config);
    let mut out = io::stdout().lock();
    game.play(&mut source, &mut out)
}

fn main() -> ExitCode {
    let config = match GameConfig::from_args(env::args().skip(1)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e}");
            eprintln!("{USAGE}");
            return ExitCode::from(2);
        }
    };

    match run(config) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
