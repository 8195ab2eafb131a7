//! Search parameters.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SearchConfig {
    /// Plies to search below the root
    pub depth: u32,
}

impl SearchConfig {
    #[must_use]
    pub const fn with_depth(depth: u32) -> Self {
        SearchConfig { depth }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig { depth: 3 }
    }
}
