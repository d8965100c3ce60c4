//! # Registry
//!
//! The authority-gated, append-only history of compliance versions and the
//! resolution rules over it.
//!
//! ## Invariants
//!
//! - The authority is fixed at construction.
//! - The history only grows. `history[i].index() == i` for every `i`.
//! - A failed call leaves the history exactly as it was.
//! - The active version at height `h` is the entry with the highest index
//!   whose window contains `h`. Window shape plays no part in the tie-break.

use cdef_core::{Height, HeightWindow, Identity, MetadataHash, ParamsRoot, PublicInput};
use cdef_zkp::Verifier;
use tracing::{debug, info, warn};

use crate::error::RegistryError;
use crate::version::{ComplianceVersion, VersionIndex};

/// A compliance-definition registry over verifier handles of type `V`.
///
/// `V` is whatever names a verifier capability in the hosting environment:
/// an `Arc<dyn Verifier>` for in-process dispatch, or a serializable handle
/// such as [`cdef_zkp::BuiltinVerifier`] for persisted registries. It must be
/// `Clone` because [`Registry::update_parameters`] carries the active
/// version's verifier forward into the new version.
#[derive(Debug, Clone)]
pub struct Registry<V> {
    authority: Identity,
    history: Vec<ComplianceVersion<V>>,
}

impl<V: Verifier + Clone> Registry<V> {
    /// Create an empty registry controlled by `authority`.
    pub fn new(authority: Identity) -> Self {
        info!(authority = %authority, "compliance registry created");
        Self {
            authority,
            history: Vec::new(),
        }
    }

    /// Rebuild a registry from parts that were already validated.
    pub(crate) fn from_parts(authority: Identity, history: Vec<ComplianceVersion<V>>) -> Self {
        Self { authority, history }
    }

    /// The identity allowed to mutate this registry.
    pub fn authority(&self) -> &Identity {
        &self.authority
    }

    // ── Mutation ────────────────────────────────────────────────────────

    /// Append a new version with its own verifier.
    ///
    /// The window is stored as given. An inverted window (`start > end`) is
    /// logged and accepted; such a version can never become active.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotAuthority`] if `caller` is not the
    /// authority.
    pub fn add_version(
        &mut self,
        caller: &Identity,
        verifier: V,
        params_root: ParamsRoot,
        window: HeightWindow,
        metadata_hash: MetadataHash,
    ) -> Result<VersionIndex, RegistryError> {
        self.ensure_authority(caller, "add_version")?;
        Ok(self.append(verifier, params_root, window, metadata_hash))
    }

    /// Append a new version that keeps the verifier of the version active at
    /// `current_height` but replaces its parameters, window and metadata.
    ///
    /// This is how a refreshed parameter set (e.g. a new sanctions list root)
    /// is rolled out without rebinding the verifier.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotAuthority`] if `caller` is not the
    /// authority, and [`RegistryError::NoActiveVersion`] if no version is
    /// active at `current_height`. Nothing is appended in either case.
    pub fn update_parameters(
        &mut self,
        caller: &Identity,
        current_height: Height,
        params_root: ParamsRoot,
        window: HeightWindow,
        metadata_hash: MetadataHash,
    ) -> Result<VersionIndex, RegistryError> {
        self.ensure_authority(caller, "update_parameters")?;

        let active = self.resolve_active(current_height)?;
        let verifier = active.verifier().clone();
        debug!(
            from_index = active.index(),
            height = current_height,
            "rotating parameters under active verifier"
        );

        Ok(self.append(verifier, params_root, window, metadata_hash))
    }

    fn ensure_authority(&self, caller: &Identity, operation: &str) -> Result<(), RegistryError> {
        if *caller != self.authority {
            warn!(
                caller = %caller,
                authority = %self.authority,
                operation,
                "mutation rejected: caller is not the authority"
            );
            return Err(RegistryError::NotAuthority {
                caller: caller.clone(),
            });
        }
        Ok(())
    }

    fn append(
        &mut self,
        verifier: V,
        params_root: ParamsRoot,
        window: HeightWindow,
        metadata_hash: MetadataHash,
    ) -> VersionIndex {
        if !window.is_well_formed() {
            warn!(
                t_start = window.start,
                t_end = window.end,
                "appending version with inverted window; it will never be active"
            );
        }

        let index = self.history.len();
        info!(
            index,
            t_start = window.start,
            t_end = window.end,
            params_root = %params_root,
            metadata = %metadata_hash,
            "compliance version appended"
        );
        self.history.push(ComplianceVersion::new(
            index,
            verifier,
            params_root,
            window,
            metadata_hash,
        ));
        index
    }

    // ── Resolution ──────────────────────────────────────────────────────

    /// The version active at `current_height`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NoActiveVersion`] if no window contains
    /// `current_height`, including when the history is empty.
    pub fn resolve_active(
        &self,
        current_height: Height,
    ) -> Result<&ComplianceVersion<V>, RegistryError> {
        self.covering(current_height)
            .ok_or(RegistryError::NoActiveVersion {
                height: current_height,
            })
    }

    /// The version that governed an arbitrary, possibly past, `height`.
    ///
    /// Same selection rule as [`Self::resolve_active`]; intended for audit
    /// queries such as "which rule applied at block 500,000?".
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NoVersionAtHeight`] carrying `height` if no
    /// window contains it.
    pub fn resolve_at(&self, height: Height) -> Result<&ComplianceVersion<V>, RegistryError> {
        self.covering(height)
            .ok_or(RegistryError::NoVersionAtHeight(height))
    }

    fn covering(&self, height: Height) -> Option<&ComplianceVersion<V>> {
        let found = self
            .history
            .iter()
            .rev()
            .find(|v| v.window().contains(height));
        debug!(height, index = ?found.map(ComplianceVersion::index), "resolved height");
        found
    }

    /// Number of versions ever appended.
    pub fn version_count(&self) -> usize {
        self.history.len()
    }

    /// The version at `index`, if it exists.
    pub fn version(&self, index: VersionIndex) -> Option<&ComplianceVersion<V>> {
        self.history.get(index)
    }

    /// The full history in append order.
    pub fn history(&self) -> &[ComplianceVersion<V>] {
        &self.history
    }

    // ── Verification ────────────────────────────────────────────────────

    /// Verify `proof` under the version active at `current_height`.
    ///
    /// The proof and public inputs are passed to the resolved verifier
    /// unmodified, and its answer is returned as is.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NoActiveVersion`] if no version is active.
    pub fn verify(
        &self,
        proof: &[u8],
        public_inputs: &[PublicInput],
        current_height: Height,
    ) -> Result<bool, RegistryError> {
        let active = self.resolve_active(current_height)?;
        let valid = active.verifier().verify(proof, public_inputs);
        debug!(
            index = active.index(),
            height = current_height,
            valid,
            "proof dispatched to verifier"
        );
        Ok(valid)
    }
}
