//! # Runtime State Vocabularies
//!
//! A [`Vocabulary`] is the ordered, duplicate-free list of state names a
//! runtime registry accepts. It is the validation boundary for state names
//! that arrive as strings: every constructor, including deserialization,
//! rejects empty and duplicated lists.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{join_names, PathStateError};
use crate::state::PathState;

/// Ordered, non-empty, duplicate-free list of state names.
///
/// The position of a name is its ordinal, which is also its default
/// iteration order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct Vocabulary {
    names: Vec<String>,
}

impl Vocabulary {
    /// Validate and build a vocabulary from names in declaration order.
    ///
    /// # Errors
    ///
    /// - [`PathStateError::EmptyVocabulary`] if `names` is empty.
    /// - [`PathStateError::DuplicateState`] for the first repeated name.
    pub fn new<I, T>(names: I) -> Result<Self, PathStateError>
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        if names.is_empty() {
            return Err(PathStateError::EmptyVocabulary);
        }
        let mut seen = HashSet::with_capacity(names.len());
        for name in &names {
            if !seen.insert(name.as_str()) {
                return Err(PathStateError::DuplicateState(name.clone()));
            }
        }
        Ok(Self { names })
    }

    /// The vocabulary declared by a closed state enum.
    ///
    /// # Errors
    ///
    /// [`PathStateError::DuplicateState`] if two variants share a label.
    pub fn of<S: PathState>() -> Result<Self, PathStateError> {
        Self::new(S::labels())
    }

    /// Number of declared states.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Always `false`; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Declared names in declaration order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Iterate declared names in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Whether `name` is declared.
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// The name at `ordinal`.
    pub fn name(&self, ordinal: usize) -> Option<&str> {
        self.names.get(ordinal).map(String::as_str)
    }

    /// Resolve a state name to its ordinal.
    ///
    /// # Errors
    ///
    /// [`PathStateError::InvalidState`] if `name` is not declared.
    pub fn ordinal(&self, name: &str) -> Result<usize, PathStateError> {
        self.names
            .iter()
            .position(|n| n == name)
            .ok_or_else(|| PathStateError::invalid_state(name, &self.names))
    }

    /// Resolve a state filter to ordinals.
    ///
    /// An empty filter selects every declared state in declaration order.
    ///
    /// # Errors
    ///
    /// [`PathStateError::InvalidState`] for the first undeclared name.
    pub fn ordinals(&self, filter: &[&str]) -> Result<Vec<usize>, PathStateError> {
        if filter.is_empty() {
            return Ok((0..self.names.len()).collect());
        }
        filter.iter().map(|name| self.ordinal(name)).collect()
    }
}

impl TryFrom<Vec<String>> for Vocabulary {
    type Error = PathStateError;

    fn try_from(names: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(names)
    }
}

impl From<Vocabulary> for Vec<String> {
    fn from(vocabulary: Vocabulary) -> Self {
        vocabulary.names
    }
}

impl std::fmt::Display for Vocabulary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&join_names(&self.names))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> Vocabulary {
        Vocabulary::new(["require", "modify", "init", "default"]).unwrap()
    }

    #[test]
    fn preserves_declaration_order() {
        let v = roster();
        assert_eq!(v.len(), 4);
        assert_eq!(
            v.iter().collect::<Vec<_>>(),
            vec!["require", "modify", "init", "default"]
        );
        assert_eq!(v.name(2), Some("init"));
        assert_eq!(v.name(4), None);
    }

    #[test]
    fn empty_vocabulary_rejected() {
        let names: Vec<String> = Vec::new();
        assert_eq!(
            Vocabulary::new(names).unwrap_err(),
            PathStateError::EmptyVocabulary
        );
    }

    #[test]
    fn duplicate_name_rejected() {
        let err = Vocabulary::new(["init", "modify", "init"]).unwrap_err();
        assert_eq!(err, PathStateError::DuplicateState("init".to_string()));
    }

    #[test]
    fn ordinal_of_unknown_name_is_invalid_state() {
        let err = roster().ordinal("dirty").unwrap_err();
        assert!(matches!(err, PathStateError::InvalidState { ref name, .. } if name == "dirty"));
        assert!(err.to_string().contains("require, modify, init, default"));
    }

    #[test]
    fn empty_filter_selects_all_states() {
        assert_eq!(roster().ordinals(&[]).unwrap(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn filter_keeps_caller_order() {
        assert_eq!(roster().ordinals(&["init", "require"]).unwrap(), vec![2, 0]);
    }

    #[test]
    fn filter_with_unknown_name_fails() {
        assert!(roster().ordinals(&["init", "bogus"]).is_err());
    }

    #[test]
    fn deserialization_validates() {
        let ok: Vocabulary = serde_json::from_str(r#"["a","b"]"#).unwrap();
        assert_eq!(ok.names(), &["a".to_string(), "b".to_string()]);

        assert!(serde_json::from_str::<Vocabulary>("[]").is_err());
        assert!(serde_json::from_str::<Vocabulary>(r#"["a","a"]"#).is_err());
    }

    #[test]
    fn serializes_as_plain_list() {
        let json = serde_json::to_string(&roster()).unwrap();
        assert_eq!(json, r#"["require","modify","init","default"]"#);
    }

    #[test]
    fn display_is_comma_separated() {
        assert_eq!(roster().to_string(), "require, modify, init, default");
    }
}
