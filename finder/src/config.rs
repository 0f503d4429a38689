//! Finder configuration.

use serde::{Deserialize, Serialize};

/// Default bound on token→anchor hops explored per search.
pub const DEFAULT_MAX_DEPTH: usize = 32;

/// Tuning for a [`PathFinder`](crate::PathFinder).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinderConfig {
    /// Maximum number of conversions on a token→anchor route. Deeper routes
    /// are treated as dead ends.
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
}

fn default_max_depth() -> usize {
    DEFAULT_MAX_DEPTH
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            max_depth: default_max_depth(),
        }
    }
}
