//! # Transition Subcommand
//!
//! Moves one or more paths into a state and saves the registry.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use crate::store::{load_registry, save_registry};

/// Arguments for `pathstate transition`.
#[derive(Args, Debug)]
pub struct TransitionArgs {
    /// Registry file.
    pub file: PathBuf,

    /// Target state.
    #[arg(long)]
    pub state: String,

    /// Paths to transition.
    #[arg(required = true)]
    pub paths: Vec<String>,
}

/// Execute `pathstate transition`.
///
/// The target state is validated before any path moves, so a rejected
/// state leaves the file untouched.
pub fn run_transition(args: &TransitionArgs) -> Result<u8> {
    let mut registry = load_registry(&args.file)?;
    registry.vocabulary().ordinal(&args.state)?;

    for path in &args.paths {
        let prev = registry
            .transition(&args.state, path)?
            .unwrap_or("none")
            .to_string();
        println!("{path}: {prev} → {}", args.state);
    }

    save_registry(&args.file, &registry)?;
    tracing::info!(
        file = %args.file.display(),
        state = %args.state,
        count = args.paths.len(),
        "transitioned paths"
    );
    Ok(0)
}
