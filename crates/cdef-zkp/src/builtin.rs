//! # Builtin Verifiers
//!
//! A closed, serializable set of verifier capabilities. Persisted registries
//! store a [`BuiltinVerifier`] per version so the capability survives a
//! save/load cycle.

use serde::{Deserialize, Serialize};

use cdef_core::PublicInput;

use crate::commitment::Sha256CommitmentVerifier;
use crate::mock::MockVerifier;
use crate::traits::Verifier;

/// The verifier kinds available without external integrations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BuiltinVerifier {
    /// Always valid.
    AcceptAll,
    /// Always invalid.
    RejectAll,
    /// SHA-256 commitment over the public inputs.
    Sha256Commitment,
}

impl BuiltinVerifier {
    /// Every variant, in declaration order.
    pub const ALL: [Self; 3] = [Self::AcceptAll, Self::RejectAll, Self::Sha256Commitment];

    /// Return the kebab-case name used in serialization and on the CLI.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AcceptAll => "accept-all",
            Self::RejectAll => "reject-all",
            Self::Sha256Commitment => "sha256-commitment",
        }
    }
}

impl Verifier for BuiltinVerifier {
    fn verify(&self, proof: &[u8], public_inputs: &[PublicInput]) -> bool {
        match self {
            Self::AcceptAll => MockVerifier::AcceptAll.verify(proof, public_inputs),
            Self::RejectAll => MockVerifier::RejectAll.verify(proof, public_inputs),
            Self::Sha256Commitment => Sha256CommitmentVerifier.verify(proof, public_inputs),
        }
    }
}

impl std::fmt::Display for BuiltinVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for BuiltinVerifier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| {
                let names: Vec<&str> = Self::ALL.iter().map(|v| v.as_str()).collect();
                format!("unknown verifier {s:?} (expected one of: {})", names.join(", "))
            })
    }
}
