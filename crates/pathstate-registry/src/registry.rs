//! # Typed Path-State Registry
//!
//! [`PathStateRegistry<S>`] assigns each path to exactly one state of the
//! closed enum `S`. Because `S` is closed, every transition target and every
//! query filter is valid by construction; there is no runtime
//! `InvalidState` path outside snapshot restore.
//!
//! ## Filters
//!
//! Query and iteration methods take a state filter `&[S]`. An empty filter
//! selects every declared state, in declaration order. A state listed twice
//! is visited once.
//!
//! ## Traversal
//!
//! `for_each_in` and `map_in` borrow the registry immutably for the whole
//! traversal, so callbacks cannot transition paths while they are being
//! visited.

use std::collections::BTreeSet;
use std::marker::PhantomData;

use pathstate_core::{PathState, PathStateError, Vocabulary};

use crate::snapshot::{self, RegistrySnapshot};
use crate::table::StateTable;

/// Registry of path → state assignments over the closed vocabulary `S`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathStateRegistry<S: PathState> {
    table: StateTable,
    _states: PhantomData<S>,
}

impl<S: PathState> PathStateRegistry<S> {
    /// Create an empty registry with one bucket per state of `S`.
    pub fn new() -> Self {
        Self {
            table: StateTable::new(S::all().len()),
            _states: PhantomData,
        }
    }

    /// Move `path` into `state`, returning the state it left.
    ///
    /// Re-transitioning a path into the state it already occupies is a
    /// no-op that returns that state.
    pub fn transition(&mut self, state: S, path: impl AsRef<str>) -> Option<S> {
        let path = path.as_ref();
        let prev = self
            .table
            .transition(path, state.ordinal())
            .and_then(S::from_ordinal);
        tracing::trace!(
            path,
            from = prev.map(|s| s.as_str()),
            to = state.as_str(),
            "path state transition"
        );
        prev
    }

    /// The current state of `path`, or `None` if it was never transitioned.
    pub fn state_of(&self, path: &str) -> Option<S> {
        self.table.state_of(path).and_then(S::from_ordinal)
    }

    /// Whether `path` is currently in `state`.
    pub fn is_in(&self, path: &str, state: S) -> bool {
        self.state_of(path) == Some(state)
    }

    /// Whether at least one path is in one of `states`.
    pub fn some(&self, states: &[S]) -> bool {
        self.table.any_occupied(&Self::ordinals(states))
    }

    /// Number of paths currently in `state`.
    pub fn count(&self, state: S) -> usize {
        self.bucket(state).len()
    }

    /// Number of tracked paths.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Whether no path was ever transitioned.
    pub fn is_empty(&self) -> bool {
        self.table.len() == 0
    }

    /// The paths currently in `state`, sorted.
    pub fn bucket(&self, state: S) -> &BTreeSet<String> {
        self.table.bucket(state.ordinal())
    }

    /// Paths in any of `states`, bucket by bucket.
    pub fn paths_in(&self, states: &[S]) -> impl Iterator<Item = &str> + '_ {
        self.entries_in(states).map(|(_, path)| path)
    }

    /// `(state, path)` pairs for paths in any of `states`.
    pub fn entries_in(&self, states: &[S]) -> impl Iterator<Item = (S, &str)> + '_ {
        self.table
            .entries(Self::ordinals(states))
            .filter_map(|(o, path)| S::from_ordinal(o).map(|s| (s, path)))
    }

    /// Call `visit` for every path in any of `states`.
    pub fn for_each_in(&self, states: &[S], mut visit: impl FnMut(&str)) {
        for path in self.paths_in(states) {
            visit(path);
        }
    }

    /// Project every path in any of `states`, in visitation order.
    pub fn map_in<T>(&self, states: &[S], project: impl FnMut(&str) -> T) -> Vec<T> {
        self.paths_in(states).map(project).collect()
    }

    /// Export the registry as a serializable snapshot.
    ///
    /// # Errors
    ///
    /// [`PathStateError::DuplicateState`] if `S` declares a label twice.
    pub fn snapshot(&self) -> Result<RegistrySnapshot, PathStateError> {
        Ok(snapshot::capture(&Vocabulary::of::<S>()?, &self.table))
    }

    /// Restore a registry from a snapshot taken over the same vocabulary.
    ///
    /// # Errors
    ///
    /// - [`PathStateError::VocabularyMismatch`] if the snapshot's states are
    ///   not exactly `S`'s labels in declaration order.
    /// - [`PathStateError::InvalidState`] if a path records an undeclared
    ///   state.
    pub fn from_snapshot(snapshot: &RegistrySnapshot) -> Result<Self, PathStateError> {
        let vocabulary = Vocabulary::of::<S>()?;
        if vocabulary.names() != snapshot.states.as_slice() {
            let found = Vocabulary::new(snapshot.states.iter().cloned())
                .map(|v| v.to_string())
                .unwrap_or_else(|_| snapshot.states.join(", "));
            tracing::warn!(expected = %vocabulary, found = %found, "snapshot vocabulary mismatch");
            return Err(PathStateError::VocabularyMismatch {
                expected: vocabulary.to_string(),
                found,
            });
        }

        Ok(Self {
            table: snapshot::restore(&vocabulary, snapshot)?,
            _states: PhantomData,
        })
    }

    pub(crate) fn into_table(self) -> StateTable {
        self.table
    }

    fn ordinals(states: &[S]) -> Vec<usize> {
        if states.is_empty() {
            (0..S::all().len()).collect()
        } else {
            states.iter().map(S::ordinal).collect()
        }
    }
}

impl<S: PathState> Default for PathStateRegistry<S> {
    fn default() -> Self {
        Self::new()
    }
}

// ─── Tests ───────────────────────────────────────────────────────────
