//! # Registry Snapshots
//!
//! Serializable form of a registry: its vocabulary and the state of every
//! tracked path. Buckets are not stored; they are rebuilt on restore.
//!
//! ## Security Invariant
//!
//! Snapshots are untrusted input. State names inside them are validated
//! against the vocabulary before any path is restored, and an unknown name
//! aborts the whole restore.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use pathstate_core::{PathStateError, Vocabulary};

use crate::table::StateTable;

/// Serialized registry contents.
///
/// ```json
/// { "states": ["require", "modify"], "paths": { "a.b": "modify" } }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrySnapshot {
    /// Declared state names in declaration order.
    pub states: Vec<String>,
    /// Current state of every tracked path, sorted by path.
    #[serde(default)]
    pub paths: BTreeMap<String, String>,
}

impl RegistrySnapshot {
    /// Number of tracked paths in the snapshot.
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Whether the snapshot tracks no paths.
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

/// Capture `table` using `vocabulary` to name ordinals.
pub(crate) fn capture(vocabulary: &Vocabulary, table: &StateTable) -> RegistrySnapshot {
    let ordinals: Vec<usize> = (0..vocabulary.len()).collect();
    let paths = table
        .entries(ordinals)
        .filter_map(|(o, path)| {
            vocabulary
                .name(o)
                .map(|name| (path.to_string(), name.to_string()))
        })
        .collect();

    RegistrySnapshot {
        states: vocabulary.names().to_vec(),
        paths,
    }
}

/// Rebuild a table from `snapshot.paths` against an already validated
/// vocabulary.
pub(crate) fn restore(
    vocabulary: &Vocabulary,
    snapshot: &RegistrySnapshot,
) -> Result<StateTable, PathStateError> {
    let mut table = StateTable::new(vocabulary.len());
    for (path, name) in &snapshot.paths {
        let ordinal = vocabulary.ordinal(name).map_err(|e| {
            tracing::warn!(path = %path, state = %name, "snapshot path has undeclared state");
            e
        })?;
        table.transition(path, ordinal);
    }
    Ok(table)
}

/// Validate the vocabulary recorded in a snapshot.
pub(crate) fn snapshot_vocabulary(snapshot: &RegistrySnapshot) -> Result<Vocabulary, PathStateError> {
    Vocabulary::new(snapshot.states.iter().cloned()).map_err(|e| {
        tracing::warn!(error = %e, "snapshot vocabulary rejected");
        e
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vocabulary() -> Vocabulary {
        Vocabulary::new(["require", "modify", "init"]).unwrap()
    }

    #[test]
    fn capture_names_every_path() {
        let v = vocabulary();
        let mut table = StateTable::new(v.len());
        table.transition("a.b", 1);
        table.transition("a.c", 2);

        let snapshot = capture(&v, &table);
        assert_eq!(snapshot.states, vec!["require", "modify", "init"]);
        assert_eq!(snapshot.paths.get("a.b").map(String::as_str), Some("modify"));
        assert_eq!(snapshot.paths.get("a.c").map(String::as_str), Some("init"));
        assert_eq!(snapshot.len(), 2);
    }

    #[test]
    fn restore_rebuilds_buckets() {
        let v = vocabulary();
        let snapshot: RegistrySnapshot = serde_json::from_str(
            r#"{"states":["require","modify","init"],"paths":{"x":"init","y":"init"}}"#,
        )
        .unwrap();

        let table = restore(&v, &snapshot).unwrap();
        assert_eq!(table.bucket(2).len(), 2);
        assert_eq!(table.state_of("x"), Some(2));
    }

    #[test]
    fn restore_rejects_undeclared_state() {
        let v = vocabulary();
        let mut snapshot = capture(&v, &StateTable::new(v.len()));
        snapshot.paths.insert("x".to_string(), "dirty".to_string());

        let err = restore(&v, &snapshot).unwrap_err();
        assert!(matches!(err, PathStateError::InvalidState { ref name, .. } if name == "dirty"));
    }

    #[test]
    fn missing_paths_field_defaults_to_empty() {
        let snapshot: RegistrySnapshot = serde_json::from_str(r#"{"states":["a"]}"#).unwrap();
        assert!(snapshot.is_empty());
    }

    #[test]
    fn snapshot_vocabulary_rejects_duplicates() {
        let snapshot = RegistrySnapshot {
            states: vec!["a".to_string(), "a".to_string()],
            paths: BTreeMap::new(),
        };
        assert_eq!(
            snapshot_vocabulary(&snapshot).unwrap_err(),
            PathStateError::DuplicateState("a".to_string())
        );
    }
}
