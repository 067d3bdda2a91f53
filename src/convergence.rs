//! Convergence history of the global best tour length.

/// Append-only record of the global best length, one sample per iteration.
///
/// The tracker also remembers the last iteration at which the sample
/// strictly decreased. Iterations are 1-based; `0` means no improvement
/// over the initial tour has been recorded.
///
/// # Examples
///
/// ```
/// use u_tabu_tsp::ConvergenceTracker;
///
/// let mut tracker = ConvergenceTracker::new(10.0);
/// tracker.record(1, 9.0);
/// tracker.record(2, 9.0);
/// assert_eq!(tracker.history(), &[9.0, 9.0]);
/// assert_eq!(tracker.last_improvement(), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ConvergenceTracker {
    initial: f64,
    history: Vec<f64>,
    last_improvement: usize,
}

impl ConvergenceTracker {
    /// Starts a tracker from the length of the initial tour.
    pub fn new(initial_length: f64) -> Self {
        Self {
            initial: initial_length,
            history: Vec::new(),
            last_improvement: 0,
        }
    }

    /// Like [`ConvergenceTracker::new`], reserving room for `iterations` samples.
    pub fn with_capacity(initial_length: f64, iterations: usize) -> Self {
        Self {
            history: Vec::with_capacity(iterations),
            ..Self::new(initial_length)
        }
    }

    /// Appends the global best length observed after `iteration`.
    pub fn record(&mut self, iteration: usize, best_length: f64) {
        if best_length < self.current() {
            self.last_improvement = iteration;
        }
        self.history.push(best_length);
    }

    /// The latest sample, or the initial length if nothing was recorded.
    pub fn current(&self) -> f64 {
        self.history.last().copied().unwrap_or(self.initial)
    }

    /// Recorded samples in iteration order.
    pub fn history(&self) -> &[f64] {
        &self.history
    }

    /// Last 1-based iteration with a strict improvement, or `0`.
    pub fn last_improvement(&self) -> usize {
        self.last_improvement
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Consumes the tracker, returning the samples.
    pub fn into_history(self) -> Vec<f64> {
        self.history
    }
}
