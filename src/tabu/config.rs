//! Tabu Search configuration.

use super::memory::default_tenure;

/// Configuration parameters for Tabu Search.
///
/// # Examples
///
/// ```
/// use u_tabu_tsp::tabu::TabuConfig;
///
/// let config = TabuConfig::default()
///     .with_max_iterations(1000)
///     .with_tabu_tenure(7)
///     .with_seed(42);
/// assert_eq!(config.max_iterations, 1000);
/// assert_eq!(config.tabu_tenure, Some(7));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TabuConfig {
    /// Number of iterations to run. The search never stops early on
    /// stagnation.
    pub max_iterations: usize,
    /// How many iterations a selected move stays tabu.
    ///
    /// `None` derives it from the catalog as half the move count, rounded
    /// half to even.
    pub tabu_tenure: Option<usize>,
    /// Random seed for the initial tour (None uses a fixed default).
    pub seed: Option<u64>,
    /// Whether to evaluate the neighborhood in parallel using rayon.
    ///
    /// Has no effect unless the `parallel` feature is enabled. Results are
    /// identical either way.
    pub parallel: bool,
}

impl Default for TabuConfig {
    fn default() -> Self {
        Self {
            max_iterations: 50,
            tabu_tenure: None,
            seed: None,
            parallel: false,
        }
    }
}

impl TabuConfig {
    /// Sets the number of iterations.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Sets an explicit tabu tenure instead of the derived one.
    pub fn with_tabu_tenure(mut self, tenure: usize) -> Self {
        self.tabu_tenure = Some(tenure);
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enables or disables parallel neighborhood evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// The tenure used for a catalog of `move_count` moves.
    pub fn resolve_tenure(&self, move_count: usize) -> usize {
        self.tabu_tenure.unwrap_or_else(|| default_tenure(move_count))
    }

    /// Validates the configuration against a catalog of `move_count` moves.
    ///
    /// A tenure at or above the move count could leave every move tabu at
    /// once, so it is rejected.
    pub fn validate(&self, move_count: usize) -> Result<(), String> {
        if self.max_iterations == 0 {
            return Err("max_iterations must be at least 1".into());
        }
        let tenure = self.resolve_tenure(move_count);
        if move_count > 0 && tenure >= move_count {
            return Err(format!(
                "tabu_tenure must be less than the move count {move_count}, got {tenure}"
            ));
        }
        Ok(())
    }
}
