//! # pathstate CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use pathstate_cli::create::{run_new, NewArgs};
use pathstate_cli::query::{run_list, run_some, run_state_of, FilterArgs, StateOfArgs};
use pathstate_cli::transition::{run_transition, TransitionArgs};

/// Track document field paths across a fixed set of states.
#[derive(Parser, Debug)]
#[command(name = "pathstate", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Create an empty registry file with the given states.
    New(NewArgs),

    /// Move paths into a state.
    Transition(TransitionArgs),

    /// Print the state of a path, or `none`.
    StateOf(StateOfArgs),

    /// Check whether any path is in the given states (all when omitted).
    #[command(name = "some")]
    Any(FilterArgs),

    /// List paths in the given states (all when omitted).
    List(FilterArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result = match &cli.command {
        Commands::New(args) => run_new(args),
        Commands::Transition(args) => run_transition(args),
        Commands::StateOf(args) => run_state_of(args),
        Commands::Any(args) => run_some(args),
        Commands::List(args) => run_list(args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
