//! # Init Subcommand
//!
//! Creates an empty registry bound to a fixed authority.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use cdef_core::Identity;

use crate::config::Settings;
use crate::{receipt, state};

/// Arguments for `cdef init`.
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Identity that will hold exclusive mutation authority.
    #[arg(long, value_name = "ID")]
    pub authority: Identity,

    /// Replace an existing state file, discarding its history.
    #[arg(long)]
    pub force: bool,
}

#[derive(Debug, Serialize)]
struct InitReceipt {
    state_path: String,
    authority: Identity,
}

/// Execute `cdef init`.
pub fn run_init(args: &InitArgs, settings: &Settings) -> Result<u8> {
    state::create(&settings.state_path, args.authority.clone(), args.force)?;
    tracing::info!(
        path = %settings.state_path.display(),
        authority = %args.authority,
        "initialized compliance registry"
    );

    println!("state={}", settings.state_path.display());
    println!("authority={}", args.authority);

    receipt::emit(
        settings.receipts_dir.as_deref(),
        "init",
        InitReceipt {
            state_path: settings.state_path.display().to_string(),
            authority: args.authority.clone(),
        },
    );
    Ok(0)
}
