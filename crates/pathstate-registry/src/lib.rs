//! # pathstate-registry — Path-State Registry
//!
//! Assigns each named path (a field path in a document, e.g.
//! `"user.address.city"`) to exactly one of a fixed set of mutually exclusive
//! states, and answers "which paths are in state X?" without scanning.
//!
//! ## Registries
//!
//! - **Typed** (`registry.rs`): [`PathStateRegistry<S>`] over a closed enum
//!   declared with [`path_states!`]. Transition targets and filters cannot be
//!   invalid.
//!
//! - **Runtime** (`dynamic.rs`): [`DynPathStateRegistry`] over a
//!   [`Vocabulary`] validated at construction. Every state name is checked
//!   and undeclared names fail with [`PathStateError::InvalidState`].
//!
//! - **Document** (`document.rs`): [`DocumentPaths`], the typed registry over
//!   [`DocumentState`] with `require` / `modify` / `init` / `apply_default`
//!   transition methods.
//!
//! ## Invariants
//!
//! - A path is in at most one state; a transition removes it from its old
//!   bucket and inserts it into the new one in a single `&mut self` call.
//! - A path's recorded state and its bucket membership always agree.
//! - Never-transitioned paths are in no state: `state_of` returns `None`.
//! - Paths are never removed, only moved.
//!
//! ## Persistence
//!
//! Both registries export a [`RegistrySnapshot`] and restore from one,
//! validating every state name on the way in (`snapshot.rs`).

pub mod document;
pub mod dynamic;
pub mod registry;
pub mod snapshot;
mod table;

pub use document::{DocumentPaths, DocumentState};
pub use dynamic::DynPathStateRegistry;
pub use registry::PathStateRegistry;
pub use snapshot::RegistrySnapshot;

pub use pathstate_core::{path_states, PathState, PathStateError, Vocabulary};
