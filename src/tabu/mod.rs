//! Tabu Search (TS) over swap, reversion and insertion neighborhoods.
//!
//! A single-solution trajectory metaheuristic. Every iteration the whole
//! non-tabu neighborhood of the current tour is scanned and the best
//! candidate is accepted, even when it is worse. The move that produced it
//! is then forbidden for a fixed number of iterations, which prevents the
//! walk from cycling straight back into the local optimum it just left.
//!
//! # References
//!
//! - Glover, F. (1989). "Tabu Search—Part I", *ORSA Journal on Computing* 1(3), 190-206.
//! - Glover, F. (1990). "Tabu Search—Part II", *ORSA Journal on Computing* 2(1), 4-32.

mod config;
mod memory;
mod runner;
mod types;

pub use config::TabuConfig;
pub use memory::{default_tenure, TabuList};
pub use runner::{TabuResult, TabuRunner};
pub use types::{IterationSnapshot, TabuObserver};
