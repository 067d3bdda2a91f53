//! Tabu Search for the symmetric traveling salesman problem.
//!
//! Given city coordinates, the search looks for a short Hamiltonian cycle
//! visiting every city exactly once. The crate provides:
//!
//! - **Distance matrix**: precomputed pairwise Euclidean distances and tour
//!   length evaluation.
//! - **Move catalog**: the fixed universe of swap, reversion and insertion
//!   moves, each with a stable slot in the tabu memory.
//! - **Tabu Search engine**: full scan of the non-tabu neighborhood every
//!   iteration, counter-based tabu memory and global-best tracking.
//! - **Convergence tracking**: the global best length after every iteration.
//!
//! # Architecture
//!
//! Instance generation and visualization stay outside the crate. Callers
//! supply coordinates and may attach a [`TabuObserver`] to receive the best
//! tour and convergence history after each iteration.
//!
//! # Features
//!
//! - `parallel`: evaluate the neighborhood with rayon.
//! - `serde`: derive `Serialize`/`Deserialize` for moves, configuration and
//!   results.

pub mod convergence;
pub mod distance;
pub mod error;
pub mod moves;
pub mod tabu;

pub use convergence::ConvergenceTracker;
pub use distance::{is_permutation, DistanceMatrix, Tour};
pub use error::TspError;
pub use moves::{Move, MoveCatalog};
pub use tabu::{IterationSnapshot, TabuConfig, TabuObserver, TabuResult, TabuRunner};
