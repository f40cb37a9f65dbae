//! # Error Types
//!
//! All errors use `thiserror` for derive-based `Display` and `Error`
//! implementations.
//!
//! ## Design
//!
//! - An unknown path is never an error: lookups return `None` instead.
//! - Invalid state names fail fast and carry the declared vocabulary, so the
//!   message alone identifies the offending caller.

use thiserror::Error;

/// Top-level error type for path-state tracking.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathStateError {
    /// A state name outside the declared vocabulary was used as a
    /// transition target or a query filter.
    #[error("invalid state {name:?}: expected one of [{vocabulary}]")]
    InvalidState {
        /// The rejected state name.
        name: String,
        /// The declared vocabulary, comma-separated in declaration order.
        vocabulary: String,
    },

    /// A vocabulary was constructed with no states.
    #[error("state vocabulary must declare at least one state")]
    EmptyVocabulary,

    /// A vocabulary was constructed with the same state name twice.
    #[error("state {0:?} is declared more than once")]
    DuplicateState(String),

    /// A snapshot was restored into a registry with a different vocabulary.
    #[error("vocabulary mismatch: expected [{expected}], found [{found}]")]
    VocabularyMismatch {
        /// The registry's declared vocabulary.
        expected: String,
        /// The vocabulary recorded in the snapshot.
        found: String,
    },
}

impl PathStateError {
    /// Build an [`PathStateError::InvalidState`] for `name` against the
    /// declared state names.
    pub fn invalid_state<I, T>(name: &str, declared: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        Self::InvalidState {
            name: name.to_string(),
            vocabulary: join_names(declared),
        }
    }
}

/// Render state names as a comma-separated list.
pub(crate) fn join_names<I, T>(names: I) -> String
where
    I: IntoIterator<Item = T>,
    T: AsRef<str>,
{
    names
        .into_iter()
        .map(|n| n.as_ref().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
