//! # State Table
//!
//! The storage shared by the typed and runtime registries. States are
//! identified by ordinal; the two views are kept in lockstep by
//! [`StateTable::transition`], the only mutating operation.

use std::collections::{BTreeSet, HashMap};

/// Two synchronized views of path membership: path → ordinal and
/// ordinal → paths.
///
/// ## Invariants
///
/// - `path_to_state[p] == s` iff `buckets[s]` contains `p`.
/// - A path is in at most one bucket.
/// - `buckets.len()` is fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct StateTable {
    path_to_state: HashMap<String, usize>,
    buckets: Vec<BTreeSet<String>>,
}

impl StateTable {
    /// Create a table with `state_count` empty buckets.
    pub(crate) fn new(state_count: usize) -> Self {
        Self {
            path_to_state: HashMap::new(),
            buckets: vec![BTreeSet::new(); state_count],
        }
    }

    /// Move `path` into bucket `next`, returning the ordinal it left.
    ///
    /// `next` must be below the bucket count; registries resolve ordinals
    /// before calling.
    pub(crate) fn transition(&mut self, path: &str, next: usize) -> Option<usize> {
        debug_assert!(next < self.buckets.len(), "ordinal {next} out of range");

        let prev = self.path_to_state.remove(path);
        if let Some(prev) = prev {
            self.buckets[prev].remove(path);
        }

        self.path_to_state.insert(path.to_string(), next);
        self.buckets[next].insert(path.to_string());
        prev
    }

    /// Ordinal of the bucket holding `path`.
    pub(crate) fn state_of(&self, path: &str) -> Option<usize> {
        self.path_to_state.get(path).copied()
    }

    /// The bucket at `ordinal`.
    pub(crate) fn bucket(&self, ordinal: usize) -> &BTreeSet<String> {
        &self.buckets[ordinal]
    }

    /// Whether any of the given buckets holds a path.
    pub(crate) fn any_occupied(&self, ordinals: &[usize]) -> bool {
        ordinals
            .iter()
            .any(|&o| self.buckets.get(o).is_some_and(|b| !b.is_empty()))
    }

    /// Number of tracked paths.
    pub(crate) fn len(&self) -> usize {
        self.path_to_state.len()
    }

    /// Paths in the given buckets, bucket by bucket in filter order.
    ///
    /// Repeated ordinals are visited once, so every path is yielded at most
    /// once.
    pub(crate) fn entries(&self, ordinals: Vec<usize>) -> impl Iterator<Item = (usize, &str)> + '_ {
        let mut selected: Vec<usize> = Vec::with_capacity(ordinals.len());
        for ordinal in ordinals {
            if !selected.contains(&ordinal) {
                selected.push(ordinal);
            }
        }

        selected
            .into_iter()
            .filter_map(move |o| self.buckets.get(o).map(|bucket| (o, bucket)))
            .flat_map(|(o, bucket)| bucket.iter().map(move |path| (o, path.as_str())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_consistent(table: &StateTable) {
        for (path, &ordinal) in &table.path_to_state {
            assert!(table.buckets[ordinal].contains(path));
        }
        let bucketed: usize = table.buckets.iter().map(BTreeSet::len).sum();
        assert_eq!(bucketed, table.path_to_state.len());
    }

    #[test]
    fn first_transition_has_no_previous_state() {
        let mut table = StateTable::new(3);
        assert_eq!(table.transition("a.b", 0), None);
        assert_eq!(table.state_of("a.b"), Some(0));
        assert_consistent(&table);
    }

    #[test]
    fn transition_moves_between_buckets() {
        let mut table = StateTable::new(3);
        table.transition("a.b", 0);
        assert_eq!(table.transition("a.b", 2), Some(0));
        assert!(table.bucket(0).is_empty());
        assert!(table.bucket(2).contains("a.b"));
        assert_consistent(&table);
    }

    #[test]
    fn same_state_transition_is_idempotent() {
        let mut table = StateTable::new(2);
        table.transition("x", 1);
        let before = table.clone();
        assert_eq!(table.transition("x", 1), Some(1));
        assert_eq!(table, before);
    }

    #[test]
    fn entries_skip_repeated_ordinals() {
        let mut table = StateTable::new(2);
        table.transition("a", 0);
        table.transition("b", 1);
        let paths: Vec<_> = table.entries(vec![1, 0, 1]).collect();
        assert_eq!(paths, vec![(1, "b"), (0, "a")]);
    }

    #[test]
    fn any_occupied_ignores_unknown_ordinals() {
        let mut table = StateTable::new(2);
        assert!(!table.any_occupied(&[0, 1, 7]));
        table.transition("a", 1);
        assert!(table.any_occupied(&[1]));
        assert!(!table.any_occupied(&[0]));
    }
}
