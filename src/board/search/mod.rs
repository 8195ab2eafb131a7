//! Search module implementing fixed-depth minimax with alpha-beta pruning.
//!
//! Features:
//! - Moves are tried in `MoveIter` scan order; the first move to reach a
//!   score keeps it (bounds only move on strict improvement)
//! - Each branch works on its own copy of the board
//! - A king capture ends the branch with `WIN_SCORE` plus the remaining
//!   depth, signed for the capturing side
//! - Leaves are scored with `Board::evaluate`

mod constants;
mod params;

use rand::Rng;

use super::{Board, Color, Move, MoveError};
pub use constants::{SCORE_INFINITY, WIN_SCORE};
pub use params::SearchConfig;

/// Result of a search: the backed-up score and the move that produced it.
///
/// `best_move` is `None` when no move improved the bound passed in. From a
/// full window this only happens when the depth is 0 or the side to move
/// has no moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub score: i32,
    pub best_move: Option<Move>,
}

/// Statistics tracked during search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Positions visited, root included
    pub nodes: u64,
    /// Sibling loops cut short by `alpha >= beta`
    pub cutoffs: u64,
    /// Branches ended by a king capture
    pub king_captures: u64,
}

/// Minimax search with alpha-beta pruning.
///
/// `maximizing` is true when White is to move. Pass `-SCORE_INFINITY` and
/// `SCORE_INFINITY` for a full-window search.
///
/// # Errors
///
/// Propagates `MoveError` from `Board::apply_move`. Generated moves are
/// always legal, so this does not happen for a well-formed board.
pub fn search<R: Rng + ?Sized>(
    depth: u32,
    board: &Board,
    maximizing: bool,
    alpha: i32,
    beta: i32,
    rng: &mut R,
) -> Result<SearchResult, MoveError> {
    let mut stats = SearchStats::default();
    search_with_stats(depth, board, maximizing, alpha, beta, rng, &mut stats)
}

/// Same as [`search`], accumulating node and cutoff counts into `stats`.
///
/// # Errors
///
/// See [`search`].
pub fn search_with_stats<R: Rng + ?Sized>(
    depth: u32,
    board: &Board,
    maximizing: bool,
    alpha: i32,
    beta: i32,
    rng: &mut R,
    stats: &mut SearchStats,
) -> Result<SearchResult, MoveError> {
    alphabeta(depth, board, maximizing, alpha, beta, rng, stats)
}

fn alphabeta<R: Rng + ?Sized>(
    depth: u32,
    board: &Board,
    maximizing: bool,
    mut alpha: i32,
    mut beta: i32,
    rng: &mut R,
    stats: &mut SearchStats,
) -> Result<SearchResult, MoveError> {
    stats.nodes += 1;
    let color = Color::from_white(maximizing);
    let mut moves = board.moves(color).peekable();

    if depth == 0 || moves.peek().is_none() {
        return Ok(SearchResult {
            score: board.evaluate(rng),
            best_move: None,
        });
    }

    let mut best_move = None;
    for mv in moves {
        debug_assert!(board.is_valid_move(mv), "generated move {mv} is not valid");
        let mut child = *board;
        let score = if child.apply_move(mv)? {
            stats.king_captures += 1;
            // Remaining depth ranks a capture now above one found deeper.
            color.sign() * (WIN_SCORE + depth as i32)
        } else {
            alphabeta(depth - 1, &child, !maximizing, alpha, beta, rng, stats)?.score
        };

        if maximizing {
            if score > alpha {
                alpha = score;
                best_move = Some(mv);
            }
        } else if score < beta {
            beta = score;
            best_move = Some(mv);
        }

        if alpha >= beta {
            stats.cutoffs += 1;
            break;
        }
    }

    Ok(SearchResult {
        score: if maximizing { alpha } else { beta },
        best_move,
    })
}

/// Full-window search for `color` at the configured depth.
///
/// # Errors
///
/// See [`search`].
pub fn find_best_move<R: Rng + ?Sized>(
    board: &Board,
    color: Color,
    config: &SearchConfig,
    rng: &mut R,
) -> Result<SearchResult, MoveError> {
    let mut stats = SearchStats::default();
    let result = search_with_stats(
        config.depth,
        board,
        color.is_white(),
        -SCORE_INFINITY,
        SCORE_INFINITY,
        rng,
        &mut stats,
    )?;

    #[cfg(feature = "logging")]
    log::debug!(
        "search {color} depth {} score {} move {} nodes {} cutoffs {}",
        config.depth,
        result.score,
        result
            .best_move
            .map_or_else(|| "none".to_string(), |mv| mv.to_string()),
        stats.nodes,
        stats.cutoffs
    );

    Ok(result)
}
