//! Local card-selection state for the viewer's hand.
//!
//! Indices refer to positions in `GameTableView::my_hand` and are only valid
//! for the hand they were chosen from; whenever the hand shrinks, stale
//! indices are dropped here rather than filtered by consumers.

use std::collections::BTreeSet;

use crate::errors::domain::{DomainError, ValidationKind};

/// Set of selected hand indices, scoped to one table-viewing session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionStore {
    selected: BTreeSet<usize>,
    hand_size: usize,
}

impl SelectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip membership of `index`. Rejects indices outside the current hand.
    pub fn toggle(&mut self, index: usize) -> Result<(), DomainError> {
        if index >= self.hand_size {
            return Err(DomainError::validation(
                ValidationKind::IndexOutOfRange,
                format!("card index {index} out of range for hand of {}", self.hand_size),
            ));
        }
        if !self.selected.remove(&index) {
            self.selected.insert(index);
        }
        Ok(())
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Select every index valid for the current hand.
    pub fn select_all(&mut self) {
        self.selected = (0..self.hand_size).collect();
    }

    /// Record a new hand length. Indices at or beyond `n` are dropped, not
    /// merely ignored.
    pub fn set_hand_size(&mut self, n: usize) {
        self.hand_size = n;
        self.selected.retain(|&i| i < n);
    }

    pub fn hand_size(&self) -> usize {
        self.hand_size
    }

    pub fn contains(&self, index: usize) -> bool {
        self.selected.contains(&index)
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Selected indices in ascending order, ready for a wire request.
    pub fn indices(&self) -> Vec<usize> {
        self.selected.iter().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn store_with_hand(n: usize) -> SelectionStore {
        let mut store = SelectionStore::new();
        store.set_hand_size(n);
        store
    }

    #[test]
    fn toggle_adds_then_removes() {
        let mut store = store_with_hand(5);
        store.toggle(2).unwrap();
        assert!(store.contains(2));
        store.toggle(2).unwrap();
        assert!(!store.contains(2));
    }

    #[test]
    fn toggle_rejects_out_of_range() {
        let mut store = store_with_hand(3);
        assert!(store.toggle(3).is_err());
        assert!(store.toggle(100).is_err());
        assert!(store.is_empty());

        // Empty hand accepts nothing.
        let mut empty = store_with_hand(0);
        assert!(empty.toggle(0).is_err());
    }

    #[test]
    fn select_all_fills_current_hand() {
        let mut store = store_with_hand(4);
        store.select_all();
        assert_eq!(store.indices(), vec![0, 1, 2, 3]);

        store.set_hand_size(2);
        assert_eq!(store.indices(), vec![0, 1]);
    }

    #[test]
    fn shrinking_hand_drops_stale_indices() {
        let mut store = store_with_hand(8);
        for i in [1, 4, 7] {
            store.toggle(i).unwrap();
        }
        store.set_hand_size(5);
        assert_eq!(store.indices(), vec![1, 4]);

        store.set_hand_size(0);
        assert!(store.is_empty());
    }

    #[test]
    fn indices_are_sorted() {
        let mut store = store_with_hand(10);
        for i in [9, 0, 4] {
            store.toggle(i).unwrap();
        }
        assert_eq!(store.indices(), vec![0, 4, 9]);
    }

    proptest! {
        /// An index is selected iff it was toggled an odd number of times
        /// since the last clear.
        #[test]
        fn prop_toggle_parity(toggles in proptest::collection::vec(0usize..16, 0..64)) {
            let mut store = store_with_hand(16);
            for &i in &toggles {
                store.toggle(i).unwrap();
            }
            for i in 0..16 {
                let odd = toggles.iter().filter(|&&t| t == i).count() % 2 == 1;
                prop_assert_eq!(store.contains(i), odd, "index {}", i);
            }
        }

        /// After any set_hand_size call the selection is a subset of [0, n).
        #[test]
        fn prop_selection_subset_of_hand(
            toggles in proptest::collection::vec(0usize..32, 0..64),
            n in 0usize..32,
        ) {
            let mut store = store_with_hand(32);
            for &i in &toggles {
                store.toggle(i).unwrap();
            }
            store.set_hand_size(n);
            prop_assert!(store.indices().iter().all(|&i| i < n));
        }
    }
}
