//! # pathstate-cli — Path-State Registry Command Line
//!
//! Operates on registry snapshot files backed by
//! `pathstate_registry::DynPathStateRegistry`.
//!
//! ## Subcommands
//!
//! - `new` — Create an empty registry with a state vocabulary.
//! - `transition` — Move paths into a state.
//! - `state-of` — Show the state of a path.
//! - `some` — Check whether any path is in the given states.
//! - `list` — List paths by state.
//!
//! ## Crate Policy
//!
//! - Argument parsing lives in `main.rs`; handlers live here and return an
//!   exit code.
//! - State semantics belong to `pathstate-registry`; handlers only load,
//!   call, print and save.

pub mod create;
pub mod query;
pub mod store;
pub mod transition;
