//! # cdef-core — Foundational Types for Compliance Definitions
//!
//! Every other crate in the workspace depends on `cdef-core`; it depends on
//! nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for domain primitives.** `Identity`, `ParamsRoot`,
//!    `MetadataHash`, `PublicInput`. No bare strings or byte arrays cross
//!    crate boundaries.
//!
//! 2. **Opaque commitments.** `ParamsRoot` and `MetadataHash` carry meaning
//!    only for the verifier and the off-chain publisher. Nothing in this
//!    workspace interprets them beyond equality and hex encoding.
//!
//! 3. **Explicit heights.** There is no ambient clock. Every height is a
//!    plain `u64` supplied by the caller, and windows are inclusive at both
//!    ends.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `cdef-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod commitment;
pub mod error;
pub mod hex;
pub mod identity;
pub mod window;

pub use commitment::{MetadataHash, ParamsRoot, PublicInput};
pub use error::ValidationError;
pub use identity::Identity;
pub use window::{Height, HeightWindow};
