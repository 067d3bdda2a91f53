//! Neighborhood moves over TSP tours.
//!
//! Three move families are supported, each parameterized by two tour
//! positions `i` and `j`:
//!
//! - **Swap**: exchange the cities at two positions.
//! - **Reversion**: reverse the closed block between two positions (2-opt).
//! - **Insertion**: relocate one city next to another position (or-opt of
//!   length one).
//!
//! The [`MoveCatalog`] enumerates every admissible move once, in a fixed
//! order, so that a move's position in the catalog can be used as its slot
//! in the tabu memory.

mod catalog;
mod types;

pub use catalog::MoveCatalog;
pub use types::Move;
