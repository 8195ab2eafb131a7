//! Sources of human move tokens.

use std::collections::VecDeque;
use std::io::{self, BufRead};

use crate::board::Color;

/// Supplies whitespace-separated tokens (moves like `B3C3`, or `q`) for a
/// side. `Ok(None)` means the source is exhausted.
pub trait MoveSource {
    fn next_token(&mut self, side: Color) -> io::Result<Option<String>>;
}

/// Splits any buffered reader into tokens, line by line. Used for both the
/// console and move files.
pub struct Tokens<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> Tokens<R> {
    pub fn new(reader: R) -> Self {
        Tokens {
            reader,
            pending: VecDeque::new(),
        }
    }
}

impl<R: BufRead> MoveSource for Tokens<R> {
    fn next_token(&mut self, _side: Color) -> io::Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }
            // Bytes that are not UTF-8 decode to replacement characters and
            // fail move parsing like any other bad token.
            let mut line = Vec::new();
            if self.reader.read_until(b'\n', &mut line)? == 0 {
                return Ok(None);
            }
            self.pending.extend(
                String::from_utf8_lossy(&line)
                    .split_whitespace()
                    .map(str::to_string),
            );
        }
    }
}

/// Routes each side to its own source when one is set, falling back to a
/// shared console.
pub struct Routed<C> {
    console: C,
    white: Option<Box<dyn MoveSource>>,
    black: Option<Box<dyn MoveSource>>,
}

impl<C: MoveSource> Routed<C> {
    pub fn new(console: C) -> Self {
        Routed {
            console,
            white: None,
            black: None,
        }
    }

    #[must_use]
    pub fn with_side(mut self, side: Color, source: Box<dyn MoveSource>) -> Self {
        match side {
            Color::White => self.white = Some(source),
            Color::Black => self.black = Some(source),
        }
        self
    }
}

impl<C: MoveSource> MoveSource for Routed<C> {
    fn next_token(&mut self, side: Color) -> io::Result<Option<String>> {
        let routed = match side {
            Color::White => self.white.as_mut(),
            Color::Black => self.black.as_mut(),
        };
        match routed {
            Some(source) => source.next_token(side),
            None => self.console.next_token(side),
        }
    }
}
