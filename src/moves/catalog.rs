//! The fixed universe of candidate moves for a given city count.

use super::types::Move;

/// Every admissible move for an `n`-city tour, in a stable order.
///
/// The order is: all swaps, then all reversions spanning more than two
/// positions, then all non-adjacent insertions. A move's index in the
/// catalog is its tabu slot for the whole run.
///
/// # Examples
///
/// ```
/// use u_tabu_tsp::{Move, MoveCatalog};
///
/// let catalog = MoveCatalog::new(4);
/// assert_eq!(catalog.get(0), Some(&Move::Swap { i: 0, j: 1 }));
/// assert_eq!(catalog.len(), MoveCatalog::count_for(4));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveCatalog {
    moves: Vec<Move>,
}

impl MoveCatalog {
    /// Enumerates the catalog for `n` cities.
    pub fn new(n: usize) -> Self {
        let mut moves = Vec::with_capacity(Self::count_for(n));

        for i in 0..n.saturating_sub(1) {
            for j in (i + 1)..n {
                moves.push(Move::Swap { i, j });
            }
        }

        // Reversions of length <= 3 are no-ops or plain swaps.
        for i in 0..n.saturating_sub(1) {
            for j in (i + 1)..n {
                if j - i > 2 {
                    moves.push(Move::Reversion { i, j });
                }
            }
        }

        // Insertions between neighbors only swap them.
        for i in 0..n {
            for j in 0..n {
                if i.abs_diff(j) > 1 {
                    moves.push(Move::Insertion { i, j });
                }
            }
        }

        Self { moves }
    }

    /// Number of moves [`MoveCatalog::new`] produces for `n` cities.
    pub fn count_for(n: usize) -> usize {
        let swaps = n * n.saturating_sub(1) / 2;
        let reversions = if n > 3 { (n - 3) * (n - 2) / 2 } else { 0 };
        let insertions = if n > 2 { (n - 2) * (n - 1) } else { 0 };
        swaps + reversions + insertions
    }

    /// Number of moves in the catalog.
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Returns `true` if the catalog has no moves (fewer than two cities).
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// The move occupying `slot`.
    pub fn get(&self, slot: usize) -> Option<&Move> {
        self.moves.get(slot)
    }

    /// All moves in slot order.
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Iterates over moves in slot order.
    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.moves.iter()
    }
}

impl<'a> IntoIterator for &'a MoveCatalog {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_matches_enumeration() {
        for n in 0..12 {
            assert_eq!(MoveCatalog::new(n).len(), MoveCatalog::count_for(n), "n = {n}");
        }
    }

    #[test]
    fn test_small_catalogs() {
        assert!(MoveCatalog::new(0).is_empty());
        assert!(MoveCatalog::new(1).is_empty());
        assert_eq!(MoveCatalog::new(2).moves(), &[Move::Swap { i: 0, j: 1 }]);
        // 3 swaps + 0 reversions + insertions (0,2) and (2,0)
        assert_eq!(MoveCatalog::new(3).len(), 5);
    }

    #[test]
    fn test_thirty_city_catalog_size() {
        // 435 swaps, 378 reversions, 812 insertions
        assert_eq!(MoveCatalog::new(30).len(), 435 + 378 + 812);
    }

    #[test]
    fn test_family_order_is_stable() {
        let catalog = MoveCatalog::new(6);
        let family = |m: &Move| match m {
            Move::Swap { .. } => 0,
            Move::Reversion { .. } => 1,
            Move::Insertion { .. } => 2,
        };
        let families: Vec<u8> = catalog.iter().map(family).collect();
        assert!(families.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(catalog, MoveCatalog::new(6));
    }

    #[test]
    fn test_operand_filters() {
        let catalog = MoveCatalog::new(7);
        for mv in &catalog {
            match *mv {
                Move::Swap { i, j } => assert!(i < j && j < 7),
                Move::Reversion { i, j } => assert!(i < j && j - i > 2),
                Move::Insertion { i, j } => assert!(i.abs_diff(j) > 1),
            }
        }
        assert_eq!(catalog.get(catalog.len()), None);
    }
}
