//! # Registry Snapshots
//!
//! The persisted state layout: one authority identity and the ordered
//! version records. Nothing else is stored.
//!
//! A snapshot is only restored if every recorded index equals its position,
//! so a hand-edited or truncated file cannot renumber history.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use cdef_core::Identity;
use cdef_zkp::Verifier;

use crate::registry::Registry;
use crate::version::ComplianceVersion;

/// Errors while restoring a registry from a snapshot.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SnapshotError {
    /// A version record is out of place.
    #[error("version at position {position} records index {recorded}")]
    IndexMismatch {
        /// Position of the record in the snapshot.
        position: usize,
        /// Index stored in the record.
        recorded: usize,
    },
}

/// Serializable registry state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrySnapshot<V> {
    /// The registry authority.
    pub authority: Identity,
    /// Version records in append order.
    pub versions: Vec<ComplianceVersion<V>>,
}

impl<V: Verifier + Clone> RegistrySnapshot<V> {
    /// Copy the state of `registry`.
    pub fn capture(registry: &Registry<V>) -> Self {
        Self {
            authority: registry.authority().clone(),
            versions: registry.history().to_vec(),
        }
    }

    /// Rebuild a registry, checking that indices are dense and in order.
    pub fn restore(self) -> Result<Registry<V>, SnapshotError> {
        if let Some((position, v)) = self
            .versions
            .iter()
            .enumerate()
            .find(|(i, v)| v.index() != *i)
        {
            return Err(SnapshotError::IndexMismatch {
                position,
                recorded: v.index(),
            });
        }
        tracing::debug!(
            authority = %self.authority,
            versions = self.versions.len(),
            "registry restored from snapshot"
        );
        Ok(Registry::from_parts(self.authority, self.versions))
    }
}

impl<V: Verifier + Clone> Registry<V> {
    /// Shorthand for [`RegistrySnapshot::capture`].
    pub fn snapshot(&self) -> RegistrySnapshot<V> {
        RegistrySnapshot::capture(self)
    }
}
