//! # Registry Errors
//!
//! Every failure is reported synchronously to the immediate caller and
//! leaves the history untouched. None of these are retried internally.

use cdef_core::{Height, Identity};
use thiserror::Error;

/// Errors returned by registry operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// A mutation was attempted by someone other than the authority.
    #[error("caller {caller} is not the registry authority")]
    NotAuthority {
        /// The rejected caller.
        caller: Identity,
    },

    /// No version's window covers the current height.
    #[error("no active compliance version at height {height}")]
    NoActiveVersion {
        /// The height that was queried.
        height: Height,
    },

    /// No version's window covers an explicitly queried historical height.
    #[error("no compliance version covers height {0}")]
    NoVersionAtHeight(Height),
}
