//! Euclidean distance matrix and tour evaluation.
//!
//! The matrix is computed once from city coordinates and never changes
//! afterwards. Distances are stored row-major in a single flat buffer.

/// A tour: an ordered permutation of city indices forming a closed cycle.
///
/// The last city implicitly connects back to the first.
pub type Tour = Vec<usize>;

/// Symmetric matrix of pairwise Euclidean distances.
///
/// # Examples
///
/// ```
/// use u_tabu_tsp::DistanceMatrix;
///
/// let matrix = DistanceMatrix::from_coordinates(&[(0.0, 0.0), (3.0, 4.0)]);
/// assert_eq!(matrix.distance(0, 1), 5.0);
/// assert_eq!(matrix.tour_length(&[0, 1]), 10.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    n: usize,
    data: Vec<f64>,
}

impl DistanceMatrix {
    /// Builds the matrix from `(x, y)` coordinates.
    ///
    /// Only the upper triangle is computed; the lower triangle mirrors it so
    /// that `distance(i, j) == distance(j, i)` holds bit-for-bit.
    pub fn from_coordinates(coordinates: &[(f64, f64)]) -> Self {
        let n = coordinates.len();
        let mut data = vec![0.0; n * n];
        for i in 0..n {
            let (xi, yi) = coordinates[i];
            for j in (i + 1)..n {
                let (xj, yj) = coordinates[j];
                let d = ((xi - xj).powi(2) + (yi - yj).powi(2)).sqrt();
                data[i * n + j] = d;
                data[j * n + i] = d;
            }
        }
        Self { n, data }
    }

    /// Number of cities.
    pub fn len(&self) -> usize {
        self.n
    }

    /// Returns `true` if the matrix covers no cities.
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Distance between cities `i` and `j`.
    #[inline]
    pub fn distance(&self, i: usize, j: usize) -> f64 {
        self.data[i * self.n + j]
    }

    /// Length of the closed cycle described by `tour`.
    ///
    /// Sums consecutive edges and the closing edge from the last city back
    /// to the first. `tour` must be a permutation of `0..len()`; this is
    /// checked in debug builds only.
    pub fn tour_length(&self, tour: &[usize]) -> f64 {
        debug_assert!(
            is_permutation(tour, self.n),
            "tour is not a permutation of 0..{}",
            self.n
        );
        let Some((&first, &last)) = tour.first().zip(tour.last()) else {
            return 0.0;
        };
        let open: f64 = tour.windows(2).map(|w| self.distance(w[0], w[1])).sum();
        open + self.distance(last, first)
    }
}

/// Returns `true` if `tour` contains every index in `0..n` exactly once.
pub fn is_permutation(tour: &[usize], n: usize) -> bool {
    if tour.len() != n {
        return false;
    }
    let mut seen = vec![false; n];
    for &city in tour {
        if city >= n || seen[city] {
            return false;
        }
        seen[city] = true;
    }
    true
}
