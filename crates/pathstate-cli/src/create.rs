//! # New Subcommand
//!
//! Creates an empty registry file with a fixed state vocabulary.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;

use pathstate_registry::DynPathStateRegistry;

use crate::store::save_registry;

/// Arguments for `pathstate new`.
#[derive(Args, Debug)]
pub struct NewArgs {
    /// Registry file to create (`.json`, `.yaml` or `.yml`).
    pub file: PathBuf,

    /// Declared state, in order. Repeat for each state.
    #[arg(long = "state", required = true)]
    pub states: Vec<String>,
}

/// Execute `pathstate new`.
pub fn run_new(args: &NewArgs) -> Result<u8> {
    if args.file.exists() {
        bail!("registry already exists: {}", args.file.display());
    }

    let registry =
        DynPathStateRegistry::new(args.states.iter().cloned()).context("invalid state list")?;
    save_registry(&args.file, &registry)?;

    tracing::info!(file = %args.file.display(), states = %registry.vocabulary(), "created registry");
    println!(
        "OK: created {} with states [{}]",
        args.file.display(),
        registry.vocabulary()
    );
    Ok(0)
}
