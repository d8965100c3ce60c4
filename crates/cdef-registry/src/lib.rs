//! # cdef-registry — Compliance Definition Registry
//!
//! An append-only history of compliance versions under the exclusive
//! mutation authority of a single regulator identity.
//!
//! ## Model
//!
//! - A [`ComplianceVersion`] names a verifier capability, a parameter
//!   commitment, an inclusive height window and a metadata pointer. It never
//!   changes after it is appended, and its index is stable.
//!
//! - [`Registry`] owns the history. Only the authority fixed at construction
//!   may append, either with a new verifier ([`Registry::add_version`]) or by
//!   rotating parameters under the currently active verifier
//!   ([`Registry::update_parameters`]).
//!
//! - The active version at height `h` is the most recently appended version
//!   whose window contains `h`. Windows may overlap and are not required to
//!   be well formed; a later append always shadows earlier ones where their
//!   windows intersect.
//!
//! - [`Registry::verify`] resolves the active version and forwards the proof
//!   to its verifier unchanged, returning the verifier's answer verbatim.
//!
//! ## Concurrency
//!
//! `Registry` itself is a plain owned value. [`SharedRegistry`] wraps it in a
//! `parking_lot::RwLock` so mutations are atomic and totally ordered while
//! reads proceed concurrently.
//!
//! ## Scaling
//!
//! Resolution is a reverse linear scan over the history, O(n) per query.
//! Registries are expected to hold at most a few thousand versions.

pub mod error;
pub mod registry;
pub mod shared;
pub mod snapshot;
pub mod version;

pub use error::RegistryError;
pub use registry::Registry;
pub use shared::SharedRegistry;
pub use snapshot::{RegistrySnapshot, SnapshotError};
pub use version::{ComplianceVersion, VersionIndex};
