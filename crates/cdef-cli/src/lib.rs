//! # cdef-cli — Compliance Definition CLI
//!
//! Regulator-facing tooling over a registry persisted as a JSON snapshot.
//!
//! ## Subcommands
//!
//! - `init`: create an empty registry controlled by an authority
//! - `add-version`: append a version with a new verifier
//! - `update-params`: rotate parameters under the active verifier
//! - `resolve`: the version active at a height, or governing a past height
//! - `history` / `count`: inspect the full history
//! - `verify`: dispatch a proof to the active verifier
//! - `prove`: produce a commitment proof for the `sha256-commitment` verifier
//!
//! ## Crate Policy
//!
//! - Argument parsing lives in the subcommand modules; registry semantics
//!   live in `cdef-registry`. Handlers only load, delegate, save and report.
//! - Results go to stdout as `key=value` lines (JSON for `history`).
//!   Diagnostics go to stderr through `tracing`.
//! - Every successful mutation can leave a JSON receipt behind.

pub mod config;
pub mod init;
pub mod publish;
pub mod query;
pub mod receipt;
pub mod state;
pub mod verify;

pub use config::Settings;
