//! Per-iteration observation hook.

use crate::moves::Move;

/// Read-only view of the search state after one iteration.
///
/// Handed to a [`TabuObserver`] after the tabu memory and the global best
/// have been updated and the convergence sample has been appended.
#[derive(Debug, Clone, Copy)]
pub struct IterationSnapshot<'a> {
    /// 1-based iteration number.
    pub iteration: usize,
    /// Catalog slot of the move taken this iteration.
    pub selected_slot: usize,
    /// The move taken this iteration.
    pub selected_move: Move,
    /// Current tour after the move.
    pub current_tour: &'a [usize],
    /// Length of the current tour.
    pub current_length: f64,
    /// Global best tour so far.
    pub best_tour: &'a [usize],
    /// Length of the global best tour.
    pub best_length: f64,
    /// Tabu counters in catalog slot order.
    pub tabu_counters: &'a [usize],
    /// Global best length after each iteration so far, this one included.
    pub history: &'a [f64],
}

/// Receives the search state after every iteration.
///
/// Typical consumers draw the best tour and the convergence curve. Any
/// `FnMut(&IterationSnapshot)` closure is an observer.
pub trait TabuObserver {
    fn on_iteration(&mut self, snapshot: &IterationSnapshot<'_>);
}

impl<F> TabuObserver for F
where
    F: FnMut(&IterationSnapshot<'_>),
{
    fn on_iteration(&mut self, snapshot: &IterationSnapshot<'_>) {
        self(snapshot)
    }
}
