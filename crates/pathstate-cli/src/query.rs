//! # Query Subcommands
//!
//! Read-only queries over a registry file:
//!
//! - `state-of` — the state of one path, or `none`.
//! - `some` — whether any path is in the given states (exit code 0 / 1).
//! - `list` — every path in the given states, one `state<TAB>path` per line.
//!
//! Omitting `--state` selects every declared state.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use crate::store::load_registry;

/// Arguments for `pathstate state-of`.
#[derive(Args, Debug)]
pub struct StateOfArgs {
    /// Registry file.
    pub file: PathBuf,

    /// Path to look up.
    pub path: String,
}

/// Arguments for `pathstate some` and `pathstate list`.
#[derive(Args, Debug)]
pub struct FilterArgs {
    /// Registry file.
    pub file: PathBuf,

    /// State to include. Repeat for several; omit for all.
    #[arg(long = "state")]
    pub states: Vec<String>,
}

impl FilterArgs {
    fn filter(&self) -> Vec<&str> {
        self.states.iter().map(String::as_str).collect()
    }
}

/// Execute `pathstate state-of`.
pub fn run_state_of(args: &StateOfArgs) -> Result<u8> {
    let registry = load_registry(&args.file)?;
    println!("{}", registry.state_of(&args.path).unwrap_or("none"));
    Ok(0)
}

/// Execute `pathstate some`. Exits 0 when a path matches, 1 otherwise.
pub fn run_some(args: &FilterArgs) -> Result<u8> {
    let registry = load_registry(&args.file)?;
    let found = registry.some(&args.filter())?;
    println!("{found}");
    Ok(if found { 0 } else { 1 })
}

/// Execute `pathstate list`.
pub fn run_list(args: &FilterArgs) -> Result<u8> {
    let registry = load_registry(&args.file)?;
    for line in list_lines(&registry, &args.filter())? {
        println!("{line}");
    }
    Ok(0)
}

fn list_lines(
    registry: &pathstate_registry::DynPathStateRegistry,
    filter: &[&str],
) -> Result<Vec<String>> {
    Ok(registry
        .entries_in(filter)?
        .map(|(state, path)| format!("{state}\t{path}"))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pathstate_registry::DynPathStateRegistry;

    use crate::store::save_registry;

    fn setup(dir: &tempfile::TempDir) -> PathBuf {
        let mut reg = DynPathStateRegistry::new(["required", "inited", "modified"]).unwrap();
        reg.transition("required", "a.b").unwrap();
        reg.transition("inited", "a.c").unwrap();
        reg.transition("modified", "a.b").unwrap();

        let file = dir.path().join("doc.json");
        save_registry(&file, &reg).unwrap();
        file
    }

    fn filter(file: &std::path::Path, states: &[&str]) -> FilterArgs {
        FilterArgs {
            file: file.to_path_buf(),
            states: states.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn state_of_known_and_unknown_paths() {
        let dir = tempfile::tempdir().unwrap();
        let file = setup(&dir);
        let args = StateOfArgs {
            file: file.clone(),
            path: "x.y".to_string(),
        };
        assert_eq!(run_state_of(&args).unwrap(), 0);
    }

    #[test]
    fn some_exit_codes() {
        let dir = tempfile::tempdir().unwrap();
        let file = setup(&dir);
        assert_eq!(run_some(&filter(&file, &["required"])).unwrap(), 1);
        assert_eq!(run_some(&filter(&file, &["modified"])).unwrap(), 0);
        assert_eq!(run_some(&filter(&file, &[])).unwrap(), 0);
    }

    #[test]
    fn some_rejects_undeclared_state() {
        let dir = tempfile::tempdir().unwrap();
        let file = setup(&dir);
        let err = run_some(&filter(&file, &["dirty"])).unwrap_err();
        assert!(err.to_string().contains("invalid state"));
    }

    #[test]
    fn list_lines_follow_filter_order() {
        let dir = tempfile::tempdir().unwrap();
        let file = setup(&dir);
        let reg = load_registry(&file).unwrap();

        assert_eq!(
            list_lines(&reg, &["modified", "inited"]).unwrap(),
            vec!["modified\ta.b", "inited\ta.c"]
        );
        assert_eq!(
            list_lines(&reg, &[]).unwrap(),
            vec!["inited\ta.c", "modified\ta.b"]
        );
        assert_eq!(run_list(&filter(&file, &["required"])).unwrap(), 0);
    }
}
