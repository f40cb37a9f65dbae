//! # Registry Files
//!
//! Loads and saves registry snapshots. The format follows the file
//! extension: `.yaml` / `.yml` are YAML, everything else is JSON.

use std::path::Path;

use anyhow::{bail, Context, Result};

use pathstate_registry::{DynPathStateRegistry, RegistrySnapshot};

/// On-disk snapshot encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotFormat {
    Json,
    Yaml,
}

impl SnapshotFormat {
    /// Pick the format for `path` from its extension.
    pub fn for_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml" | "yml") => Self::Yaml,
            _ => Self::Json,
        }
    }
}

/// Load and validate the registry stored at `path`.
pub fn load_registry(path: &Path) -> Result<DynPathStateRegistry> {
    if !path.exists() {
        bail!("registry not found: {}", path.display());
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    let snapshot: RegistrySnapshot = match SnapshotFormat::for_path(path) {
        SnapshotFormat::Json => serde_json::from_str(&content)
            .with_context(|| format!("failed to parse {}", path.display()))?,
        SnapshotFormat::Yaml => serde_yaml::from_str(&content)
            .with_context(|| format!("failed to parse {}", path.display()))?,
    };

    let registry = DynPathStateRegistry::from_snapshot(&snapshot)
        .with_context(|| format!("invalid registry {}", path.display()))?;

    tracing::debug!(
        file = %path.display(),
        states = %registry.vocabulary(),
        paths = registry.len(),
        "loaded registry"
    );
    Ok(registry)
}

/// Write `registry` to `path`, replacing any existing file.
pub fn save_registry(path: &Path, registry: &DynPathStateRegistry) -> Result<()> {
    let snapshot = registry.snapshot();
    let content = match SnapshotFormat::for_path(path) {
        SnapshotFormat::Json => serde_json::to_string_pretty(&snapshot)?,
        SnapshotFormat::Yaml => serde_yaml::to_string(&snapshot)?,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    std::fs::write(path, content).with_context(|| format!("failed to write {}", path.display()))?;

    tracing::debug!(file = %path.display(), paths = registry.len(), "saved registry");
    Ok(())
}
