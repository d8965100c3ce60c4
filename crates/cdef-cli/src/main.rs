//! # cdef CLI entry point
//!
//! Parses command-line arguments, assembles [`Settings`] and dispatches to
//! subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use cdef_cli::config::{ConfigFile, Settings};
use cdef_cli::init::{run_init, InitArgs};
use cdef_cli::publish::{run_add_version, run_update_params, AddVersionArgs, UpdateParamsArgs};
use cdef_cli::query::{run_count, run_history, run_resolve, ResolveArgs};
use cdef_cli::verify::{run_prove, run_verify, ProveArgs, VerifyArgs};

/// Manage versioned compliance definitions.
///
/// A registry holds an append-only history of compliance versions, each
/// naming a verifier, a parameter commitment, an inclusive height window and
/// a metadata pointer. Only the authority set at `init` may append.
#[derive(Parser, Debug)]
#[command(name = "cdef", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a YAML configuration file.
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Registry state file.
    #[arg(long, global = true, value_name = "PATH", env = "CDEF_STATE")]
    state: Option<PathBuf>,

    /// Directory for JSON receipts (one per mutating command).
    #[arg(long, global = true, value_name = "DIR")]
    receipts_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Create an empty registry bound to an authority.
    Init(InitArgs),

    /// Append a version with a new verifier.
    AddVersion(AddVersionArgs),

    /// Append a version that keeps the active verifier but rotates parameters.
    UpdateParams(UpdateParamsArgs),

    /// Show the version active at a height, or governing a past height.
    Resolve(ResolveArgs),

    /// Print every version as JSON, in append order.
    History,

    /// Print the number of versions.
    Count,

    /// Verify a proof against the active version's verifier.
    Verify(VerifyArgs),

    /// Produce a proof for the sha256-commitment verifier.
    Prove(ProveArgs),
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

    match run(cli) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

fn run(cli: Cli) -> Result<u8> {
    let config = cli.config.as_deref().map(ConfigFile::load).transpose()?;
    let settings = Settings::resolve(config, cli.state, cli.receipts_dir);
    tracing::debug!(state = %settings.state_path.display(), "resolved settings");

    match cli.command {
        Commands::Init(args) => run_init(&args, &settings),
        Commands::AddVersion(args) => run_add_version(&args, &settings),
        Commands::UpdateParams(args) => run_update_params(&args, &settings),
        Commands::Resolve(args) => run_resolve(&args, &settings),
        Commands::History => run_history(&settings),
        Commands::Count => run_count(&settings),
        Commands::Verify(args) => run_verify(&args, &settings),
        Commands::Prove(args) => run_prove(&args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn add_version_defaults() {
        let cli = Cli::try_parse_from([
            "cdef",
            "add-version",
            "--caller",
            "0xabc",
            "--verifier",
            "accept-all",
        ])
        .unwrap();
        let Commands::AddVersion(args) = cli.command else {
            panic!("expected add-version");
        };
        assert_eq!(args.params.t_start, 0);
        assert_eq!(args.params.t_end, u64::MAX);
        assert!(args.params.params_root.is_none());
        assert_eq!(args.params.metadata, "");
    }

    #[test]
    fn rejects_unknown_verifier_and_bad_root() {
        assert!(Cli::try_parse_from(["cdef", "add-version", "--verifier", "groth16"]).is_err());
        assert!(Cli::try_parse_from([
            "cdef",
            "add-version",
            "--verifier",
            "accept-all",
            "--params-root",
            "0x1234",
        ])
        .is_err());
    }

    #[test]
    fn resolve_requires_exactly_one_height() {
        assert!(Cli::try_parse_from(["cdef", "resolve"]).is_err());
        assert!(Cli::try_parse_from(["cdef", "resolve", "--height", "1", "--at", "2"]).is_err());
        assert!(Cli::try_parse_from(["cdef", "resolve", "--at", "500000"]).is_ok());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["cdef", "count", "--state", "s.json", "-vv"]).unwrap();
        assert_eq!(cli.state, Some(PathBuf::from("s.json")));
        assert_eq!(cli.verbose, 2);
    }
}
