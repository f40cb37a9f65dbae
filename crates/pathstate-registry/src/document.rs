//! # Document Field States
//!
//! The vocabulary used by document trackers: every field path of a document
//! is either required by validation, modified by the caller, initialized
//! from stored data, or filled from a schema default.
//!
//! The tracker drives transitions from its own events (a field was read,
//! set, or initialized) and asks the registry which paths are dirty or still
//! required.

use crate::registry::PathStateRegistry;

pathstate_core::path_states! {
    /// Lifecycle state of a document field path.
    pub enum DocumentState {
        /// Field is required and has not been satisfied.
        Require => "require",
        /// Field was modified since it was loaded.
        Modify => "modify",
        /// Field was initialized from stored data.
        Init => "init",
        /// Field holds its schema default.
        Default => "default",
    }
}

/// Registry of document field paths.
pub type DocumentPaths = PathStateRegistry<DocumentState>;

impl PathStateRegistry<DocumentState> {
    /// Mark `path` as required.
    pub fn require(&mut self, path: impl AsRef<str>) -> Option<DocumentState> {
        self.transition(DocumentState::Require, path)
    }

    /// Mark `path` as modified.
    pub fn modify(&mut self, path: impl AsRef<str>) -> Option<DocumentState> {
        self.transition(DocumentState::Modify, path)
    }

    /// Mark `path` as initialized from stored data.
    pub fn init(&mut self, path: impl AsRef<str>) -> Option<DocumentState> {
        self.transition(DocumentState::Init, path)
    }

    /// Mark `path` as holding its schema default.
    pub fn apply_default(&mut self, path: impl AsRef<str>) -> Option<DocumentState> {
        self.transition(DocumentState::Default, path)
    }

    /// Whether `path` was modified.
    pub fn is_modified(&self, path: &str) -> bool {
        self.is_in(path, DocumentState::Modify)
    }

    /// Whether any path is modified.
    pub fn is_dirty(&self) -> bool {
        self.some(&[DocumentState::Modify])
    }

    /// Modified paths, sorted.
    pub fn modified_paths(&self) -> Vec<&str> {
        self.paths_in(&[DocumentState::Modify]).collect()
    }

    /// Required paths, sorted.
    pub fn required_paths(&self) -> Vec<&str> {
        self.paths_in(&[DocumentState::Require]).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pathstate_core::PathState;

    #[test]
    fn labels_follow_declaration_order() {
        assert_eq!(
            DocumentState::labels(),
            vec!["require", "modify", "init", "default"]
        );
    }

    #[test]
    fn per_state_methods_transition() {
        let mut doc = DocumentPaths::new();
        doc.init("name");
        doc.apply_default("tags");
        doc.require("email");
        assert_eq!(doc.modify("name"), Some(DocumentState::Init));

        assert_eq!(doc.state_of("name"), Some(DocumentState::Modify));
        assert_eq!(doc.state_of("tags"), Some(DocumentState::Default));
        assert_eq!(doc.required_paths(), vec!["email"]);
    }

    #[test]
    fn dirty_tracking() {
        let mut doc = DocumentPaths::default();
        doc.init("user.address.city");
        assert!(!doc.is_dirty());

        doc.modify("user.address.city");
        doc.modify("user.name");
        assert!(doc.is_dirty());
        assert!(doc.is_modified("user.name"));
        assert_eq!(doc.modified_paths(), vec!["user.address.city", "user.name"]);

        doc.init("user.name");
        assert!(!doc.is_modified("user.name"));
        assert_eq!(doc.modified_paths(), vec!["user.address.city"]);
    }

    #[test]
    fn satisfied_requirement_leaves_require_bucket() {
        let mut doc = DocumentPaths::new();
        doc.require("email");
        doc.modify("email");
        assert!(!doc.some(&[DocumentState::Require]));
        assert!(doc.required_paths().is_empty());
    }
}
