//! # Mock Verifiers
//!
//! Constant-outcome stubs. They ignore their inputs entirely.

use serde::{Deserialize, Serialize};

use cdef_core::PublicInput;

use crate::traits::Verifier;

/// A verifier whose answer is fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MockVerifier {
    /// Every proof is valid.
    AcceptAll,
    /// Every proof is invalid.
    RejectAll,
}

impl Verifier for MockVerifier {
    fn verify(&self, _proof: &[u8], _public_inputs: &[PublicInput]) -> bool {
        matches!(self, Self::AcceptAll)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_ignores_inputs() {
        let input = PublicInput::from_bytes([7u8; 32]);
        assert!(MockVerifier::AcceptAll.verify(b"", &[]));
        assert!(MockVerifier::AcceptAll.verify(b"garbage", &[input]));
        assert!(!MockVerifier::RejectAll.verify(b"", &[]));
        assert!(!MockVerifier::RejectAll.verify(b"garbage", &[input]));
    }
}
