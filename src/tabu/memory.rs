//! Counter-based tabu memory indexed by move slot.

/// Derived tenure for a catalog of `move_count` moves: half the catalog,
/// rounded half to even.
pub fn default_tenure(move_count: usize) -> usize {
    (0.5 * move_count as f64).round_ties_even() as usize
}

/// Remaining tabu iterations for every move slot.
///
/// A slot with a zero counter is eligible. After each iteration the selected
/// slot is reset to the tenure and every other slot counts down by one,
/// floored at zero, so counters always lie in `[0, tenure]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabuList {
    counters: Vec<usize>,
    tenure: usize,
}

impl TabuList {
    /// Creates a table of `move_count` eligible slots.
    pub fn new(move_count: usize, tenure: usize) -> Self {
        Self {
            counters: vec![0; move_count],
            tenure,
        }
    }

    pub fn tenure(&self) -> usize {
        self.tenure
    }

    pub fn len(&self) -> usize {
        self.counters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counters.is_empty()
    }

    /// Returns `true` if `slot` may not be selected this iteration.
    #[inline]
    pub fn is_tabu(&self, slot: usize) -> bool {
        self.counters[slot] > 0
    }

    /// Remaining tabu iterations of `slot`.
    pub fn remaining(&self, slot: usize) -> usize {
        self.counters[slot]
    }

    /// Number of slots currently eligible.
    pub fn eligible_count(&self) -> usize {
        self.counters.iter().filter(|&&c| c == 0).count()
    }

    /// All counters in slot order.
    pub fn counters(&self) -> &[usize] {
        &self.counters
    }

    /// Records `selected` as the move taken this iteration.
    pub fn commit(&mut self, selected: usize) {
        for (slot, counter) in self.counters.iter_mut().enumerate() {
            if slot == selected {
                *counter = self.tenure;
            } else {
                *counter = counter.saturating_sub(1);
            }
        }
    }
}
