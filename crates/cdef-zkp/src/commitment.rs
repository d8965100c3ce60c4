//! # SHA-256 Commitment Verifier
//!
//! A deterministic, transparent stand-in for a circuit verifier. A "proof" is
//! `SHA-256(DOMAIN_TAG || input_0 || ... || input_n)`. Anyone who knows the
//! public inputs can produce it, so this verifier establishes nothing beyond
//! input integrity.
//!
//! ## Security Notice
//!
//! NO zero-knowledge or soundness guarantees. Suitable for wiring tests and
//! local dry runs of the publishing workflow only.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use cdef_core::PublicInput;

use crate::traits::Verifier;

/// Domain separation tag prefixed to every commitment.
pub const DOMAIN_TAG: &[u8] = b"cdef.sha256-commitment.v1";

/// Verifier that accepts exactly the commitment produced by [`Self::prove`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Sha256CommitmentVerifier;

impl Sha256CommitmentVerifier {
    /// Produce the proof this verifier accepts for `public_inputs`.
    pub fn prove(&self, public_inputs: &[PublicInput]) -> [u8; 32] {
        let mut hasher = Sha256::new();
        hasher.update(DOMAIN_TAG);
        for input in public_inputs {
            hasher.update(input.as_bytes());
        }
        let mut out = [0u8; 32];
        out.copy_from_slice(&hasher.finalize());
        out
    }
}

impl Verifier for Sha256CommitmentVerifier {
    fn verify(&self, proof: &[u8], public_inputs: &[PublicInput]) -> bool {
        proof.len() == 32 && proof == self.prove(public_inputs).as_slice()
    }
}
