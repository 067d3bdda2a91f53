//! Tabu Search execution engine.
//!
//! # Algorithm
//!
//! 1. Shuffle `0..n` into the initial tour; it is also the first global best
//! 2. At each iteration:
//!    a. Apply every non-tabu move in the catalog to the current tour
//!    b. Accept the shortest candidate, even if it is worse than the current
//!       tour (ties go to the earliest catalog slot)
//!    c. Make that move tabu for `tenure` iterations, count the others down
//!    d. Update the global best on strict improvement
//!    e. Record the global best length
//! 3. Terminate after the iteration budget or on cancellation
//!
//! There is no aspiration criterion: a tabu move is never taken, even if it
//! would beat the global best.
//!
//! # Reference
//!
//! Glover, F. (1989). "Tabu Search—Part I", *ORSA Journal on Computing* 1(3), 190-206.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::config::TabuConfig;
use super::memory::TabuList;
use super::types::{IterationSnapshot, TabuObserver};
use crate::convergence::ConvergenceTracker;
use crate::distance::{is_permutation, DistanceMatrix, Tour};
use crate::error::TspError;
use crate::moves::MoveCatalog;

const DEFAULT_SEED: u64 = 42;

/// Result of a Tabu Search run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TabuResult {
    /// Shortest tour found.
    pub best_tour: Tour,
    /// Length of the shortest tour.
    pub best_length: f64,
    /// Length of the shuffled starting tour.
    pub initial_length: f64,
    /// 1-based iteration of the last strict improvement; `0` if the initial
    /// tour was never beaten.
    pub last_improvement_iteration: usize,
    /// Iterations executed.
    pub iterations: usize,
    /// Whether the run was stopped through the cancellation flag.
    pub cancelled: bool,
    /// Global best length after each iteration.
    pub convergence_history: Vec<f64>,
    /// Tenure in effect for the run.
    pub tabu_tenure: usize,
    /// Size of the move catalog.
    pub move_count: usize,
}

/// Tabu Search runner.
pub struct TabuRunner;

impl TabuRunner {
    /// Executes Tabu Search on the cities at `coordinates`.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_tabu_tsp::tabu::{TabuConfig, TabuRunner};
    ///
    /// let square = [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)];
    /// let config = TabuConfig::default().with_max_iterations(50).with_seed(7);
    /// let result = TabuRunner::run(&square, &config).unwrap();
    /// assert!((result.best_length - 4.0).abs() < 1e-9);
    /// ```
    pub fn run(coordinates: &[(f64, f64)], config: &TabuConfig) -> Result<TabuResult, TspError> {
        Self::execute(
            coordinates,
            config,
            &mut |_: &IterationSnapshot<'_>| {},
            None,
        )
    }

    /// Executes Tabu Search, reporting every iteration to `observer`.
    pub fn run_with_observer<O: TabuObserver>(
        coordinates: &[(f64, f64)],
        config: &TabuConfig,
        observer: &mut O,
    ) -> Result<TabuResult, TspError> {
        Self::execute(coordinates, config, observer, None)
    }

    /// Executes Tabu Search with an optional cancellation token.
    ///
    /// If `cancel` is `Some` and the flag is set to `true`, the search stops
    /// before the next iteration and returns the best tour found so far.
    pub fn run_with_cancel<O: TabuObserver>(
        coordinates: &[(f64, f64)],
        config: &TabuConfig,
        observer: &mut O,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<TabuResult, TspError> {
        Self::execute(coordinates, config, observer, cancel)
    }

    #[tracing::instrument(
        level = "debug",
        name = "Tabu Search",
        skip_all,
        fields(cities = coordinates.len(), iterations = config.max_iterations)
    )]
    fn execute<O: TabuObserver>(
        coordinates: &[(f64, f64)],
        config: &TabuConfig,
        observer: &mut O,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<TabuResult, TspError> {
        let n = coordinates.len();
        if n < 2 {
            return Err(TspError::TooFewCities { found: n });
        }

        let catalog = MoveCatalog::new(n);
        config.validate(catalog.len())?;
        let tenure = config.resolve_tenure(catalog.len());
        let matrix = DistanceMatrix::from_coordinates(coordinates);

        let mut rng = StdRng::seed_from_u64(config.seed.unwrap_or(DEFAULT_SEED));
        let mut current: Tour = (0..n).collect();
        current.shuffle(&mut rng);
        let mut current_length = matrix.tour_length(&current);

        let initial_length = current_length;
        let mut best = current.clone();
        let mut best_length = current_length;

        let mut tabu = TabuList::new(catalog.len(), tenure);
        let mut tracker = ConvergenceTracker::with_capacity(best_length, config.max_iterations);
        let mut cancelled = false;

        tracing::debug!(
            moves = catalog.len(),
            tenure,
            initial_length,
            "starting tabu search"
        );

        for iteration in 1..=config.max_iterations {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    tracing::warn!(iteration, best_length, "tabu search cancelled");
                    break;
                }
            }

            let Some((slot, length)) =
                select_move(&catalog, &tabu, &matrix, &current, config.parallel)
            else {
                return Err(TspError::DegenerateNeighborhood { iteration });
            };

            let selected_move = catalog.moves()[slot];
            current = selected_move.apply(&current);
            current_length = length;
            debug_assert!(is_permutation(&current, n));

            tabu.commit(slot);

            if current_length < best_length {
                best.clone_from(&current);
                best_length = current_length;
                tracing::debug!(iteration, best_length, mv = %selected_move, "new global best");
            }

            tracker.record(iteration, best_length);

            tracing::trace!(iteration, current_length, best_length, mv = %selected_move);

            observer.on_iteration(&IterationSnapshot {
                iteration,
                selected_slot: slot,
                selected_move,
                current_tour: &current,
                current_length,
                best_tour: &best,
                best_length,
                tabu_counters: tabu.counters(),
                history: tracker.history(),
            });
        }

        let last_improvement_iteration = tracker.last_improvement();
        let iterations = tracker.len();

        tracing::info!(
            iterations,
            best_length,
            last_improvement_iteration,
            "tabu search finished"
        );

        Ok(TabuResult {
            best_tour: best,
            best_length,
            initial_length,
            last_improvement_iteration,
            iterations,
            cancelled,
            convergence_history: tracker.into_history(),
            tabu_tenure: tenure,
            move_count: catalog.len(),
        })
    }
}

/// Finds the shortest tour reachable from `current` by one non-tabu move.
///
/// Returns the winning slot and the resulting length. Ties go to the lowest
/// slot, in both the sequential and the parallel scan.
fn select_move(
    catalog: &MoveCatalog,
    tabu: &TabuList,
    matrix: &DistanceMatrix,
    current: &[usize],
    parallel: bool,
) -> Option<(usize, f64)> {
    #[cfg(feature = "parallel")]
    {
        if parallel {
            return catalog
                .moves()
                .par_iter()
                .enumerate()
                .filter(|&(slot, _)| !tabu.is_tabu(slot))
                .map(|(slot, mv)| (slot, matrix.tour_length(&mv.apply(current))))
                .reduce_with(|a, b| {
                    if b.1 < a.1 || (b.1 == a.1 && b.0 < a.0) {
                        b
                    } else {
                        a
                    }
                });
        }
    }
    #[cfg(not(feature = "parallel"))]
    let _ = parallel;

    let mut best: Option<(usize, f64)> = None;
    for (slot, mv) in catalog.iter().enumerate() {
        if tabu.is_tabu(slot) {
            continue;
        }
        let length = matrix.tour_length(&mv.apply(current));
        match best {
            Some((_, best_length)) if length >= best_length => {}
            _ => best = Some((slot, length)),
        }
    }
    best
}
