//! # Shared Registry
//!
//! Thread-safe, cloneable handle over a [`Registry`].
//!
//! Mutations run under a single write lock, so each append is atomic and all
//! appends are totally ordered with respect to each other and to reads.
//! Reads take the read lock, clone what they need and release it. The lock
//! is `parking_lot`, which never poisons, and is never held across a
//! verifier call.

use std::sync::Arc;

use cdef_core::{Height, HeightWindow, Identity, MetadataHash, ParamsRoot, PublicInput};
use cdef_zkp::Verifier;
use parking_lot::RwLock;

use crate::error::RegistryError;
use crate::registry::Registry;
use crate::snapshot::RegistrySnapshot;
use crate::version::{ComplianceVersion, VersionIndex};

/// A registry shared between threads.
#[derive(Debug)]
pub struct SharedRegistry<V> {
    inner: Arc<RwLock<Registry<V>>>,
}

impl<V> Clone for SharedRegistry<V> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<V: Verifier + Clone> SharedRegistry<V> {
    /// Create an empty shared registry controlled by `authority`.
    pub fn new(authority: Identity) -> Self {
        Self::from_registry(Registry::new(authority))
    }

    /// Share an existing registry.
    pub fn from_registry(registry: Registry<V>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(registry)),
        }
    }

    /// See [`Registry::authority`].
    pub fn authority(&self) -> Identity {
        self.inner.read().authority().clone()
    }

    /// See [`Registry::add_version`].
    pub fn add_version(
        &self,
        caller: &Identity,
        verifier: V,
        params_root: ParamsRoot,
        window: HeightWindow,
        metadata_hash: MetadataHash,
    ) -> Result<VersionIndex, RegistryError> {
        self.inner
            .write()
            .add_version(caller, verifier, params_root, window, metadata_hash)
    }

    /// See [`Registry::update_parameters`]. Resolution of the active version
    /// and the append happen under the same write lock.
    pub fn update_parameters(
        &self,
        caller: &Identity,
        current_height: Height,
        params_root: ParamsRoot,
        window: HeightWindow,
        metadata_hash: MetadataHash,
    ) -> Result<VersionIndex, RegistryError> {
        self.inner.write().update_parameters(
            caller,
            current_height,
            params_root,
            window,
            metadata_hash,
        )
    }

    /// See [`Registry::resolve_active`].
    pub fn resolve_active(
        &self,
        current_height: Height,
    ) -> Result<ComplianceVersion<V>, RegistryError> {
        self.inner.read().resolve_active(current_height).cloned()
    }

    /// See [`Registry::resolve_at`].
    pub fn resolve_at(&self, height: Height) -> Result<ComplianceVersion<V>, RegistryError> {
        self.inner.read().resolve_at(height).cloned()
    }

    /// See [`Registry::version_count`].
    pub fn version_count(&self) -> usize {
        self.inner.read().version_count()
    }

    /// See [`Registry::version`].
    pub fn version(&self, index: VersionIndex) -> Option<ComplianceVersion<V>> {
        self.inner.read().version(index).cloned()
    }

    /// See [`Registry::verify`]. The verifier handle is cloned out of the
    /// lock before it is invoked, so a slow verifier never stalls writers.
    pub fn verify(
        &self,
        proof: &[u8],
        public_inputs: &[PublicInput],
        current_height: Height,
    ) -> Result<bool, RegistryError> {
        let (index, verifier) = {
            let registry = self.inner.read();
            let active = registry.resolve_active(current_height)?;
            (active.index(), active.verifier().clone())
        };
        let valid = verifier.verify(proof, public_inputs);
        tracing::debug!(
            index,
            height = current_height,
            valid,
            "proof dispatched to verifier"
        );
        Ok(valid)
    }

    /// Capture the current state for persistence.
    pub fn snapshot(&self) -> RegistrySnapshot<V> {
        RegistrySnapshot::capture(&self.inner.read())
    }
}
