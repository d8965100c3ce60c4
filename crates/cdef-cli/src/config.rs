//! # Configuration
//!
//! Settings come from three layers, highest precedence first:
//!
//! 1. Command-line flags (`--state`, `--receipts-dir`, `--caller`) and the
//!    `CDEF_CALLER` environment variable.
//! 2. A YAML config file given with `--config`.
//! 3. Built-in defaults (`cdef-state.json` in the working directory, no
//!    receipts, no default caller).
//!
//! ```yaml
//! state: /var/lib/cdef/sanctions.json
//! receipts_dir: /var/lib/cdef/receipts
//! caller: "0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266"
//! ```

use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;

use cdef_core::Identity;

/// Default registry state file.
pub const DEFAULT_STATE_FILE: &str = "cdef-state.json";

/// On-disk configuration file. Every key is optional.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Registry state file.
    pub state: Option<PathBuf>,
    /// Directory for JSON receipts.
    pub receipts_dir: Option<PathBuf>,
    /// Identity used for mutations when `--caller` is absent.
    pub caller: Option<Identity>,
}

impl ConfigFile {
    /// Load and parse a YAML config file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        serde_yaml::from_str(&content)
            .with_context(|| format!("failed to parse config file: {}", path.display()))
    }
}

/// Effective settings for one CLI invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Registry state file.
    pub state_path: PathBuf,
    /// Where receipts are written, if anywhere.
    pub receipts_dir: Option<PathBuf>,
    /// Fallback caller for mutations.
    pub default_caller: Option<Identity>,
}

impl Settings {
    /// Merge flags over an optional config file over defaults.
    pub fn resolve(
        config: Option<ConfigFile>,
        state: Option<PathBuf>,
        receipts_dir: Option<PathBuf>,
    ) -> Self {
        let file = config.unwrap_or_default();
        Self {
            state_path: state
                .or(file.state)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_STATE_FILE)),
            receipts_dir: receipts_dir.or(file.receipts_dir),
            default_caller: file.caller,
        }
    }

    /// Pick the caller for a mutation: the explicit one, else the configured
    /// default.
    pub fn caller(&self, explicit: Option<&Identity>) -> Result<Identity> {
        explicit
            .or(self.default_caller.as_ref())
            .cloned()
            .ok_or_else(|| {
                anyhow!("no caller identity: pass --caller, set CDEF_CALLER, or set `caller` in the config file")
            })
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::resolve(None, None, None)
    }
}
