//! # Query Subcommands
//!
//! Read-only views of the registry: `resolve`, `history` and `count`.

use anyhow::{Context, Result};
use clap::Args;

use cdef_core::Height;
use cdef_registry::ComplianceVersion;
use cdef_zkp::BuiltinVerifier;

use crate::config::Settings;
use crate::state;

/// Arguments for `cdef resolve`.
#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// Resolve the version active at the current height.
    #[arg(long, conflicts_with = "at", required_unless_present = "at")]
    pub height: Option<Height>,

    /// Resolve the version that governed a historical height.
    #[arg(long, value_name = "HEIGHT")]
    pub at: Option<Height>,
}

/// Execute `cdef resolve`.
pub fn run_resolve(args: &ResolveArgs, settings: &Settings) -> Result<u8> {
    let registry = state::load(&settings.state_path)?;
    let version = match (args.height, args.at) {
        (Some(h), _) => registry.resolve_active(h)?,
        (None, Some(h)) => registry.resolve_at(h)?,
        (None, None) => anyhow::bail!("one of --height or --at is required"),
    };
    print_version(version);
    Ok(0)
}

/// Execute `cdef history`: the full history as pretty JSON.
pub fn run_history(settings: &Settings) -> Result<u8> {
    let registry = state::load(&settings.state_path)?;
    let json = serde_json::to_string_pretty(registry.history())
        .context("failed to serialize history")?;
    println!("{json}");
    Ok(0)
}

/// Execute `cdef count`.
pub fn run_count(settings: &Settings) -> Result<u8> {
    let registry = state::load(&settings.state_path)?;
    println!("count={}", registry.version_count());
    Ok(0)
}

/// Print a version as `key=value` lines.
pub fn print_version(version: &ComplianceVersion<BuiltinVerifier>) {
    for line in version_lines(version) {
        println!("{line}");
    }
}

fn version_lines(version: &ComplianceVersion<BuiltinVerifier>) -> Vec<String> {
    vec![
        format!("index={}", version.index()),
        format!("verifier={}", version.verifier()),
        format!("params_root={}", version.params_root()),
        format!("t_start={}", version.t_start()),
        format!("t_end={}", version.t_end()),
        format!("metadata_hash={}", version.metadata_hash()),
    ]
}
