//! # Verification Subcommands
//!
//! `verify` dispatches a proof to the verifier of the version active at
//! `--height`. Exit status is 0 for a valid proof and 2 for an invalid one,
//! so scripts can distinguish rejection from operational failure (1).
//!
//! `prove` produces the commitment accepted by the `sha256-commitment`
//! verifier. It is development tooling; real circuit proofs come from the
//! external proving pipeline.

use anyhow::{Context, Result};
use clap::Args;

use cdef_core::{hex, Height, PublicInput};
use cdef_zkp::Sha256CommitmentVerifier;

use crate::config::Settings;
use crate::state;

/// Exit status for a well-formed but rejected proof.
pub const EXIT_INVALID_PROOF: u8 = 2;

/// Arguments for `cdef verify`.
#[derive(Args, Debug)]
pub struct VerifyArgs {
    /// Current height.
    #[arg(long)]
    pub height: Height,

    /// Proof bytes as hex.
    #[arg(long, value_name = "HEX")]
    pub proof: String,

    /// A 32-byte public input as hex. Repeat in order.
    #[arg(long = "input", value_name = "HEX")]
    pub inputs: Vec<PublicInput>,
}

/// Arguments for `cdef prove`.
#[derive(Args, Debug)]
pub struct ProveArgs {
    /// A 32-byte public input as hex. Repeat in order.
    #[arg(long = "input", value_name = "HEX")]
    pub inputs: Vec<PublicInput>,
}

/// Execute `cdef verify`.
pub fn run_verify(args: &VerifyArgs, settings: &Settings) -> Result<u8> {
    let proof = hex::decode(&args.proof).context("invalid --proof")?;
    let registry = state::load(&settings.state_path)?;

    let index = registry.resolve_active(args.height)?.index();
    let valid = registry.verify(&proof, &args.inputs, args.height)?;
    tracing::info!(index, height = args.height, valid, "proof verified");

    println!("index={index}");
    println!("result={}", if valid { "valid" } else { "invalid" });
    Ok(if valid { 0 } else { EXIT_INVALID_PROOF })
}

/// Execute `cdef prove`.
pub fn run_prove(args: &ProveArgs) -> Result<u8> {
    let proof = Sha256CommitmentVerifier.prove(&args.inputs);
    println!("proof={}", hex::encode(&proof));
    Ok(0)
}
