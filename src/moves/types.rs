//! Move definitions and the pure move applicator.

use crate::distance::Tour;

/// A neighborhood move with its two position operands.
///
/// Moves never mutate a tour: [`Move::apply`] returns a fresh one.
///
/// # Examples
///
/// ```
/// use u_tabu_tsp::Move;
///
/// let tour = vec![0, 1, 2, 3, 4];
/// assert_eq!(Move::Reversion { i: 1, j: 3 }.apply(&tour), vec![0, 3, 2, 1, 4]);
/// assert_eq!(tour, vec![0, 1, 2, 3, 4]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Move {
    /// Exchange the cities at positions `i` and `j`.
    Swap { i: usize, j: usize },
    /// Reverse the closed block `[min(i, j), max(i, j)]`.
    Reversion { i: usize, j: usize },
    /// Remove the city at `i` and reinsert it next to position `j`.
    ///
    /// For `i < j` the city lands immediately before the city originally at
    /// `j`; for `i > j` it lands at position `j`, pushing the block
    /// `j..i` one slot to the right.
    Insertion { i: usize, j: usize },
}

impl Move {
    /// The two position operands `(i, j)`.
    pub fn positions(&self) -> (usize, usize) {
        match *self {
            Move::Swap { i, j } | Move::Reversion { i, j } | Move::Insertion { i, j } => (i, j),
        }
    }

    /// Applies the move to `tour` and returns the resulting tour.
    ///
    /// # Panics
    ///
    /// Panics if either position is out of bounds for `tour`.
    pub fn apply(&self, tour: &[usize]) -> Tour {
        let mut next = tour.to_vec();
        match *self {
            Move::Swap { i, j } => next.swap(i, j),
            Move::Reversion { i, j } => {
                let (lo, hi) = if i <= j { (i, j) } else { (j, i) };
                next[lo..=hi].reverse();
            }
            Move::Insertion { i, j } => {
                let city = next.remove(i);
                let at = if i < j { j - 1 } else { j };
                next.insert(at, city);
            }
        }
        next
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Move::Swap { i, j } => write!(f, "swap({i}, {j})"),
            Move::Reversion { i, j } => write!(f, "reversion({i}, {j})"),
            Move::Insertion { i, j } => write!(f, "insertion({i}, {j})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::is_permutation;
    use proptest::prelude::*;

    #[test]
    fn test_swap() {
        assert_eq!(Move::Swap { i: 0, j: 2 }.apply(&[0, 1, 2, 3]), vec![2, 1, 0, 3]);
    }

    #[test]
    fn test_reversion() {
        assert_eq!(
            Move::Reversion { i: 1, j: 3 }.apply(&[0, 1, 2, 3, 4]),
            vec![0, 3, 2, 1, 4]
        );
    }

    #[test]
    fn test_reversion_operand_order_irrelevant() {
        let tour = [4, 2, 0, 1, 3, 5];
        assert_eq!(
            Move::Reversion { i: 1, j: 4 }.apply(&tour),
            Move::Reversion { i: 4, j: 1 }.apply(&tour)
        );
        assert_eq!(Move::Reversion { i: 0, j: 5 }.apply(&tour), vec![5, 3, 1, 0, 2, 4]);
    }

    #[test]
    fn test_insertion_forward() {
        assert_eq!(
            Move::Insertion { i: 0, j: 3 }.apply(&[0, 1, 2, 3, 4]),
            vec![1, 2, 0, 3, 4]
        );
    }

    #[test]
    fn test_insertion_backward() {
        assert_eq!(
            Move::Insertion { i: 3, j: 1 }.apply(&[0, 1, 2, 3, 4]),
            vec![0, 3, 1, 2, 4]
        );
    }

    #[test]
    fn test_insertion_to_last_position() {
        assert_eq!(
            Move::Insertion { i: 1, j: 4 }.apply(&[0, 1, 2, 3, 4]),
            vec![0, 2, 3, 1, 4]
        );
        assert_eq!(
            Move::Insertion { i: 4, j: 0 }.apply(&[0, 1, 2, 3, 4]),
            vec![4, 0, 1, 2, 3]
        );
    }

    #[test]
    fn test_apply_leaves_input_untouched() {
        let tour = vec![3, 1, 4, 0, 2];
        let _ = Move::Insertion { i: 4, j: 0 }.apply(&tour);
        let _ = Move::Swap { i: 0, j: 4 }.apply(&tour);
        assert_eq!(tour, vec![3, 1, 4, 0, 2]);
    }

    #[test]
    fn test_display() {
        assert_eq!(Move::Swap { i: 1, j: 2 }.to_string(), "swap(1, 2)");
        assert_eq!(Move::Insertion { i: 5, j: 0 }.to_string(), "insertion(5, 0)");
        assert_eq!(Move::Reversion { i: 0, j: 3 }.positions(), (0, 3));
    }

    fn tour_and_positions() -> impl Strategy<Value = (Vec<usize>, usize, usize)> {
        (2usize..24).prop_flat_map(|n| {
            (
                Just((0..n).collect::<Vec<_>>()).prop_shuffle(),
                0..n,
                0..n,
            )
        })
    }

    proptest! {
        #[test]
        fn prop_every_move_keeps_permutation((tour, i, j) in tour_and_positions()) {
            let n = tour.len();
            for mv in [Move::Swap { i, j }, Move::Reversion { i, j }, Move::Insertion { i, j }] {
                let next = mv.apply(&tour);
                prop_assert!(is_permutation(&next, n), "{} broke {:?} into {:?}", mv, tour, next);
            }
        }
    }
}
