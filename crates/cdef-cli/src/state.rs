//! # Registry State File
//!
//! The registry is persisted as a pretty-printed JSON [`RegistrySnapshot`].
//! Writes go to a uniquely named temp file in the same directory and are
//! then renamed over the target, so a crash never leaves a half-written
//! state file and readers never need a lock.
//!
//! Mutating commands go through [`update`], which holds an exclusive advisory
//! lock on `<state>.lock` from load to save. Concurrent `cdef` processes
//! therefore append one after another and every reported index is persisted.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use tempfile::NamedTempFile;

use cdef_core::Identity;
use cdef_registry::{Registry, RegistrySnapshot};
use cdef_zkp::BuiltinVerifier;

/// The registry type the CLI operates on.
pub type CliRegistry = Registry<BuiltinVerifier>;

/// Load the registry at `path`.
pub fn load(path: &Path) -> Result<CliRegistry> {
    if !path.exists() {
        bail!(
            "no registry state at {} -- run `cdef init` first",
            path.display()
        );
    }
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read registry state: {}", path.display()))?;
    let snapshot: RegistrySnapshot<BuiltinVerifier> = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse registry state: {}", path.display()))?;
    let registry = snapshot
        .restore()
        .with_context(|| format!("corrupt registry state: {}", path.display()))?;
    tracing::debug!(
        path = %path.display(),
        versions = registry.version_count(),
        "loaded registry state"
    );
    Ok(registry)
}

/// Atomically write `registry` to `path`.
///
/// Callers that loaded the registry first must hold the state lock, see
/// [`update`].
pub fn save(path: &Path, registry: &CliRegistry) -> Result<()> {
    let dir = parent_dir(path);
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create directory {}", dir.display()))?;

    let json = serde_json::to_string_pretty(&registry.snapshot())
        .context("failed to serialize registry state")?;
    let mut tmp = NamedTempFile::new_in(dir)
        .with_context(|| format!("failed to create temp file in {}", dir.display()))?;
    tmp.write_all(json.as_bytes())
        .and_then(|()| tmp.as_file().sync_all())
        .with_context(|| format!("failed to write {}", tmp.path().display()))?;
    tmp.persist(path)
        .map_err(|e| e.error)
        .with_context(|| format!("failed to move registry state into place at {}", path.display()))?;
    tracing::debug!(path = %path.display(), "saved registry state");
    Ok(())
}

/// Load, mutate and save the registry at `path` while holding the state
/// lock. If `mutate` fails nothing is written.
///
/// Returns the mutated registry together with `mutate`'s result.
pub fn update<T>(
    path: &Path,
    mutate: impl FnOnce(&mut CliRegistry) -> Result<T>,
) -> Result<(CliRegistry, T)> {
    with_state_lock(path, || {
        let mut registry = load(path)?;
        let out = mutate(&mut registry)?;
        save(path, &registry)?;
        Ok((registry, out))
    })
}

/// Create and save an empty registry. Refuses to overwrite existing state
/// unless `force` is set, since that would discard history.
pub fn create(path: &Path, authority: Identity, force: bool) -> Result<CliRegistry> {
    with_state_lock(path, || {
        if path.exists() && !force {
            bail!(
                "registry state already exists at {} (use --force to replace it)",
                path.display()
            );
        }
        let registry = CliRegistry::new(authority);
        save(path, &registry)?;
        Ok(registry)
    })
}

/// Run `f` holding an exclusive lock on the state's lock file. Blocks until
/// any other holder releases it.
fn with_state_lock<T>(path: &Path, f: impl FnOnce() -> Result<T>) -> Result<T> {
    let lock_path = lock_path(path);
    let dir = parent_dir(path);
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create directory {}", dir.display()))?;
    let file: File = OpenOptions::new()
        .read(true)
        .write(true)
        .create(true)
        .truncate(false)
        .open(&lock_path)
        .with_context(|| format!("failed to open lock file {}", lock_path.display()))?;

    let mut lock = fd_lock::RwLock::new(file);
    let _guard = lock
        .write()
        .with_context(|| format!("failed to lock {}", lock_path.display()))?;
    tracing::trace!(path = %lock_path.display(), "acquired state lock");
    f()
}

fn parent_dir(path: &Path) -> &Path {
    path.parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."))
}

fn lock_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".lock");
    path.with_file_name(name)
}
