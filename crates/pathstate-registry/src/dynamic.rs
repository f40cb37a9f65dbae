//! # Runtime-Vocabulary Registry
//!
//! [`DynPathStateRegistry`] is the registry for vocabularies that are only
//! known at runtime: state names loaded from a snapshot file or passed on a
//! command line. It mirrors [`PathStateRegistry`](crate::PathStateRegistry)
//! method for method, with state names checked against the [`Vocabulary`]
//! on every call.
//!
//! Prefer the typed registry whenever the states are known at compile time;
//! it cannot fail with `InvalidState`.

use pathstate_core::{PathState, PathStateError, Vocabulary};

use crate::registry::PathStateRegistry;
use crate::snapshot::{self, RegistrySnapshot};
use crate::table::StateTable;

/// Registry of path → state assignments over a runtime vocabulary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DynPathStateRegistry {
    vocabulary: Vocabulary,
    table: StateTable,
}

impl DynPathStateRegistry {
    /// Create an empty registry declaring `names` in order.
    ///
    /// # Errors
    ///
    /// [`PathStateError::EmptyVocabulary`] or
    /// [`PathStateError::DuplicateState`] if `names` is not a valid
    /// vocabulary.
    pub fn new<I, T>(names: I) -> Result<Self, PathStateError>
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Ok(Self::with_vocabulary(Vocabulary::new(names)?))
    }

    /// Create an empty registry over an already validated vocabulary.
    pub fn with_vocabulary(vocabulary: Vocabulary) -> Self {
        let table = StateTable::new(vocabulary.len());
        Self { vocabulary, table }
    }

    /// The declared states.
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Move `path` into the state named `state`, returning the name of the
    /// state it left.
    ///
    /// # Errors
    ///
    /// [`PathStateError::InvalidState`] if `state` is not declared. The
    /// registry is left unchanged.
    pub fn transition(&mut self, state: &str, path: &str) -> Result<Option<&str>, PathStateError> {
        let next = self.vocabulary.ordinal(state)?;
        let prev = self.table.transition(path, next);
        tracing::trace!(
            path,
            from = prev.and_then(|o| self.vocabulary.name(o)),
            to = state,
            "path state transition"
        );
        Ok(prev.and_then(|o| self.vocabulary.name(o)))
    }

    /// The current state of `path`, or `None` if it was never transitioned.
    pub fn state_of(&self, path: &str) -> Option<&str> {
        self.table
            .state_of(path)
            .and_then(|o| self.vocabulary.name(o))
    }

    /// Whether at least one path is in one of `states`. An empty filter
    /// checks every declared state.
    ///
    /// # Errors
    ///
    /// [`PathStateError::InvalidState`] for an undeclared filter name.
    pub fn some(&self, states: &[&str]) -> Result<bool, PathStateError> {
        Ok(self.table.any_occupied(&self.vocabulary.ordinals(states)?))
    }

    /// Number of paths currently in `state`.
    ///
    /// # Errors
    ///
    /// [`PathStateError::InvalidState`] if `state` is not declared.
    pub fn count(&self, state: &str) -> Result<usize, PathStateError> {
        let ordinal = self.vocabulary.ordinal(state)?;
        Ok(self.table.bucket(ordinal).len())
    }

    /// Number of tracked paths.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Whether no path was ever transitioned.
    pub fn is_empty(&self) -> bool {
        self.table.len() == 0
    }

    /// Paths in any of `states`, bucket by bucket. An empty filter selects
    /// every declared state in declaration order.
    ///
    /// # Errors
    ///
    /// [`PathStateError::InvalidState`] for an undeclared filter name.
    pub fn paths_in(
        &self,
        states: &[&str],
    ) -> Result<impl Iterator<Item = &str> + '_, PathStateError> {
        Ok(self.entries_in(states)?.map(|(_, path)| path))
    }

    /// `(state, path)` pairs for paths in any of `states`.
    ///
    /// # Errors
    ///
    /// [`PathStateError::InvalidState`] for an undeclared filter name.
    pub fn entries_in(
        &self,
        states: &[&str],
    ) -> Result<impl Iterator<Item = (&str, &str)> + '_, PathStateError> {
        let ordinals = self.vocabulary.ordinals(states)?;
        Ok(self
            .table
            .entries(ordinals)
            .filter_map(|(o, path)| self.vocabulary.name(o).map(|name| (name, path))))
    }

    /// Call `visit` for every path in any of `states`.
    ///
    /// The filter is validated before the first visit.
    ///
    /// # Errors
    ///
    /// [`PathStateError::InvalidState`] for an undeclared filter name.
    pub fn for_each_in(
        &self,
        states: &[&str],
        mut visit: impl FnMut(&str),
    ) -> Result<(), PathStateError> {
        for path in self.paths_in(states)? {
            visit(path);
        }
        Ok(())
    }

    /// Project every path in any of `states`, in visitation order.
    ///
    /// # Errors
    ///
    /// [`PathStateError::InvalidState`] for an undeclared filter name.
    pub fn map_in<T>(
        &self,
        states: &[&str],
        project: impl FnMut(&str) -> T,
    ) -> Result<Vec<T>, PathStateError> {
        Ok(self.paths_in(states)?.map(project).collect())
    }

    /// Export the registry as a serializable snapshot.
    pub fn snapshot(&self) -> RegistrySnapshot {
        snapshot::capture(&self.vocabulary, &self.table)
    }

    /// Restore a registry from a snapshot, adopting its vocabulary.
    ///
    /// # Errors
    ///
    /// - [`PathStateError::EmptyVocabulary`] or
    ///   [`PathStateError::DuplicateState`] for an invalid vocabulary.
    /// - [`PathStateError::InvalidState`] if a path records an undeclared
    ///   state.
    pub fn from_snapshot(snapshot: &RegistrySnapshot) -> Result<Self, PathStateError> {
        let vocabulary = snapshot::snapshot_vocabulary(snapshot)?;
        let table = snapshot::restore(&vocabulary, snapshot)?;
        Ok(Self { vocabulary, table })
    }
}

impl<S: PathState> TryFrom<PathStateRegistry<S>> for DynPathStateRegistry {
    type Error = PathStateError;

    /// Erase the state type, keeping every assignment.
    fn try_from(registry: PathStateRegistry<S>) -> Result<Self, Self::Error> {
        Ok(Self {
            vocabulary: Vocabulary::of::<S>()?,
            table: registry.into_table(),
        })
    }
}

// ─── Tests ───────────────────────────────────────────────────────────
