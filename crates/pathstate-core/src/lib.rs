//! # pathstate-core — Foundational Types for Path-State Tracking
//!
//! Defines the vocabulary side of the path-state registry: what a state is,
//! how a set of states is declared, and how invalid state names are reported.
//! `pathstate-registry` builds the registry itself on top of these types.
//!
//! ## Key Design Principles
//!
//! 1. **Closed state enums.** A registry's vocabulary is normally a Rust enum
//!    implementing [`PathState`], declared with [`path_states!`]. Transitioning
//!    to an undeclared state is then a compile error, not a runtime check.
//!
//! 2. **Validated runtime vocabularies.** When state names arrive as strings
//!    (snapshots, CLI arguments), they flow through [`Vocabulary`], whose only
//!    constructors reject empty and duplicated name lists.
//!
//! 3. **One error type.** Every failure in the workspace's library crates is
//!    a [`PathStateError`].
//!
//! ## Crate Policy
//!
//! - No dependencies on other `pathstate-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod error;
pub mod state;
pub mod vocabulary;

pub use error::PathStateError;
pub use state::PathState;
pub use vocabulary::Vocabulary;
