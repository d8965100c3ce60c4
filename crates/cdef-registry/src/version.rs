//! # Compliance Versions
//!
//! A single entry in the registry history. Fields are private and only
//! readable through accessors, so a version handed out by the registry
//! cannot be altered.

use serde::{Deserialize, Serialize};

use cdef_core::{HeightWindow, MetadataHash, ParamsRoot};

/// Position of a version in the history. Assigned on append, never reused.
pub type VersionIndex = usize;

/// An immutable compliance rule version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceVersion<V> {
    index: VersionIndex,
    verifier: V,
    params_root: ParamsRoot,
    window: HeightWindow,
    metadata_hash: MetadataHash,
}

impl<V> ComplianceVersion<V> {
    pub(crate) fn new(
        index: VersionIndex,
        verifier: V,
        params_root: ParamsRoot,
        window: HeightWindow,
        metadata_hash: MetadataHash,
    ) -> Self {
        Self {
            index,
            verifier,
            params_root,
            window,
            metadata_hash,
        }
    }

    /// Position in the registry history.
    pub fn index(&self) -> VersionIndex {
        self.index
    }

    /// The verifier capability proofs are forwarded to.
    pub fn verifier(&self) -> &V {
        &self.verifier
    }

    /// Commitment to this version's parameters.
    pub fn params_root(&self) -> &ParamsRoot {
        &self.params_root
    }

    /// Inclusive eligibility window.
    pub fn window(&self) -> HeightWindow {
        self.window
    }

    /// First height of the window.
    pub fn t_start(&self) -> u64 {
        self.window.start
    }

    /// Last height of the window.
    pub fn t_end(&self) -> u64 {
        self.window.end
    }

    /// Off-chain metadata pointer.
    pub fn metadata_hash(&self) -> &MetadataHash {
        &self.metadata_hash
    }
}
