//! Search constants.
//!
//! Material scores never exceed a few thousand (all 32 pieces sum to well
//! under 5000 per side), so both values below sit far outside the range the
//! evaluation can produce even with its +/-1 jitter.

// ============================================================================
// SCORE BOUNDS
// ============================================================================

/// Base score of a branch in which a king was captured. The search adds the
/// remaining depth and signs it for the side that captured.
pub const WIN_SCORE: i32 = 1_000_000;

/// Initial alpha/beta window half-width
pub const SCORE_INFINITY: i32 = 10_000_000;
