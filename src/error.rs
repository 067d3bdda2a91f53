//! Error types for the Tabu Search engine.

/// Errors reported by [`TabuRunner`](crate::tabu::TabuRunner).
///
/// Every variant is a precondition or programming error. Nothing is retried:
/// the search is deterministic for a fixed seed and has no transient faults.
#[derive(Debug, Clone, PartialEq)]
pub enum TspError {
    /// The instance has fewer than two cities.
    TooFewCities {
        /// Number of cities supplied.
        found: usize,
    },
    /// The configuration was rejected by [`TabuConfig::validate`](crate::tabu::TabuConfig::validate).
    InvalidConfig(String),
    /// Every move in the catalog was tabu at the start of an iteration.
    DegenerateNeighborhood {
        /// 1-based iteration at which no eligible move was left.
        iteration: usize,
    },
}

impl std::fmt::Display for TspError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TspError::TooFewCities { found } => {
                write!(f, "instance needs at least 2 cities, found {found}")
            }
            TspError::InvalidConfig(reason) => write!(f, "invalid tabu configuration: {reason}"),
            TspError::DegenerateNeighborhood { iteration } => {
                write!(f, "all moves are tabu at iteration {iteration}")
            }
        }
    }
}

impl std::error::Error for TspError {}

impl From<String> for TspError {
    fn from(reason: String) -> Self {
        TspError::InvalidConfig(reason)
    }
}
