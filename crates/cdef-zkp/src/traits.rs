//! # Verifier Trait
//!
//! The capability a compliance version points at. Implementations decide
//! what a proof is and what the public inputs mean; callers only see the
//! boolean outcome.

use std::sync::Arc;

use cdef_core::PublicInput;

/// A proof verification capability.
///
/// `verify` must be free of side effects observable by the registry, and
/// must report malformed proofs as `false` rather than panicking.
///
/// The trait requires `Send + Sync` so a registry shared across threads can
/// dispatch to the same verifier from concurrent readers.
pub trait Verifier: Send + Sync {
    /// Check `proof` against `public_inputs`.
    fn verify(&self, proof: &[u8], public_inputs: &[PublicInput]) -> bool;
}

impl<T: Verifier + ?Sized> Verifier for &T {
    fn verify(&self, proof: &[u8], public_inputs: &[PublicInput]) -> bool {
        (**self).verify(proof, public_inputs)
    }
}

impl<T: Verifier + ?Sized> Verifier for Box<T> {
    fn verify(&self, proof: &[u8], public_inputs: &[PublicInput]) -> bool {
        (**self).verify(proof, public_inputs)
    }
}

impl<T: Verifier + ?Sized> Verifier for Arc<T> {
    fn verify(&self, proof: &[u8], public_inputs: &[PublicInput]) -> bool {
        (**self).verify(proof, public_inputs)
    }
}
