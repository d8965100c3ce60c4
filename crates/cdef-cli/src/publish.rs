//! # Publishing Subcommands
//!
//! `add-version` appends a version with a freshly chosen verifier.
//! `update-params` rotates the parameter commitment, window and metadata
//! while keeping the verifier of the version active at `--height`.
//!
//! Defaults match a typical first publication: zero parameter root, window
//! open from height 0 forever, no metadata.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use cdef_core::{Height, HeightWindow, Identity, MetadataHash, ParamsRoot};
use cdef_registry::{ComplianceVersion, VersionIndex};
use cdef_zkp::BuiltinVerifier;

use crate::config::Settings;
use crate::state::CliRegistry;
use crate::{receipt, state};

/// Parameter, window and metadata arguments shared by both publishing
/// commands.
#[derive(Args, Debug, Clone)]
pub struct VersionParams {
    /// Parameter commitment as 32-byte hex.
    #[arg(long, value_name = "HEX", conflicts_with = "params_file")]
    pub params_root: Option<ParamsRoot>,

    /// Derive the parameter commitment as SHA-256 of this file's bytes.
    #[arg(long, value_name = "PATH")]
    pub params_file: Option<PathBuf>,

    /// First height (inclusive) at which the version may be active.
    #[arg(long, default_value_t = 0)]
    pub t_start: Height,

    /// Last height (inclusive) at which the version may be active.
    #[arg(long, default_value_t = Height::MAX)]
    pub t_end: Height,

    /// Off-chain metadata pointer, e.g. an IPFS CID.
    #[arg(long, value_name = "HASH", default_value = "")]
    pub metadata: String,
}

impl VersionParams {
    /// Resolve the parameter root from `--params-root`, `--params-file`, or
    /// the zero default.
    pub fn params_root(&self) -> Result<ParamsRoot> {
        if let Some(root) = self.params_root {
            return Ok(root);
        }
        match &self.params_file {
            Some(path) => {
                let bytes = std::fs::read(path)
                    .with_context(|| format!("failed to read params file: {}", path.display()))?;
                Ok(ParamsRoot::sha256_of(&bytes))
            }
            None => Ok(ParamsRoot::ZERO),
        }
    }

    /// The inclusive window from `--t-start` and `--t-end`.
    pub fn window(&self) -> HeightWindow {
        HeightWindow::new(self.t_start, self.t_end)
    }

    /// The metadata pointer.
    pub fn metadata_hash(&self) -> MetadataHash {
        MetadataHash::new(self.metadata.clone())
    }
}

/// Arguments for `cdef add-version`.
#[derive(Args, Debug)]
pub struct AddVersionArgs {
    /// Identity issuing the call. Must be the registry authority.
    #[arg(long, value_name = "ID", env = "CDEF_CALLER")]
    pub caller: Option<Identity>,

    /// Verifier capability for the new version.
    #[arg(long, value_name = "KIND")]
    pub verifier: BuiltinVerifier,

    #[command(flatten)]
    pub params: VersionParams,
}

/// Arguments for `cdef update-params`.
#[derive(Args, Debug)]
pub struct UpdateParamsArgs {
    /// Identity issuing the call. Must be the registry authority.
    #[arg(long, value_name = "ID", env = "CDEF_CALLER")]
    pub caller: Option<Identity>,

    /// Current height, used to find the version whose verifier is kept.
    #[arg(long)]
    pub height: Height,

    #[command(flatten)]
    pub params: VersionParams,
}

/// Receipt payload for both publishing commands.
#[derive(Debug, Serialize)]
struct AppendReceipt<'a> {
    state_path: String,
    caller: &'a Identity,
    version: &'a ComplianceVersion<BuiltinVerifier>,
    version_count: usize,
}

/// Execute `cdef add-version`.
pub fn run_add_version(args: &AddVersionArgs, settings: &Settings) -> Result<u8> {
    let caller = settings.caller(args.caller.as_ref())?;
    let params_root = args.params.params_root()?;
    let (registry, index) = state::update(&settings.state_path, |registry| {
        registry
            .add_version(
                &caller,
                args.verifier,
                params_root,
                args.params.window(),
                args.params.metadata_hash(),
            )
            .context("add-version rejected")
    })?;

    finish("add-version", &registry, index, &caller, settings)
}

/// Execute `cdef update-params`.
pub fn run_update_params(args: &UpdateParamsArgs, settings: &Settings) -> Result<u8> {
    let caller = settings.caller(args.caller.as_ref())?;
    let params_root = args.params.params_root()?;
    let (registry, index) = state::update(&settings.state_path, |registry| {
        registry
            .update_parameters(
                &caller,
                args.height,
                params_root,
                args.params.window(),
                args.params.metadata_hash(),
            )
            .context("update-params rejected")
    })?;

    finish("update-params", &registry, index, &caller, settings)
}

/// Report a committed append. Receipt failures are logged and do not fail
/// the command.
fn finish(
    command: &str,
    registry: &CliRegistry,
    index: VersionIndex,
    caller: &Identity,
    settings: &Settings,
) -> Result<u8> {
    let version = registry
        .version(index)
        .context("appended version missing from history")?;
    crate::query::print_version(version);
    println!("version_count={}", registry.version_count());

    receipt::emit(
        settings.receipts_dir.as_deref(),
        command,
        AppendReceipt {
            state_path: settings.state_path.display().to_string(),
            caller,
            version,
            version_count: registry.version_count(),
        },
    );
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> VersionParams {
        VersionParams {
            params_root: None,
            params_file: None,
            t_start: 0,
            t_end: Height::MAX,
            metadata: String::new(),
        }
    }

    #[test]
    fn params_root_defaults_to_zero() {
        assert_eq!(params().params_root().unwrap(), ParamsRoot::ZERO);
    }

    #[test]
    fn params_root_from_file_is_sha256_of_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sanctions.csv");
        std::fs::write(&path, b"abc").unwrap();
        let p = VersionParams {
            params_file: Some(path),
            ..params()
        };
        assert_eq!(p.params_root().unwrap(), ParamsRoot::sha256_of(b"abc"));
    }

    #[test]
    fn explicit_root_wins() {
        let root = ParamsRoot::from_bytes([5; 32]);
        let p = VersionParams {
            params_root: Some(root),
            ..params()
        };
        assert_eq!(p.params_root().unwrap(), root);
    }

    #[test]
    fn missing_params_file_is_an_error() {
        let p = VersionParams {
            params_file: Some(PathBuf::from("/nonexistent/params.bin")),
            ..params()
        };
        assert!(p.params_root().is_err());
    }

    #[test]
    fn window_is_taken_verbatim_even_if_inverted() {
        let p = VersionParams {
            t_start: 9,
            t_end: 3,
            ..params()
        };
        assert_eq!(p.window(), HeightWindow::new(9, 3));
    }
}
