//! # cdef-zkp — Verifier Capabilities
//!
//! The registry never verifies proofs itself. Each compliance version names a
//! verifier capability, and the registry forwards `(proof, public_inputs)` to
//! it unchanged.
//!
//! ## Architecture
//!
//! - **Traits** (`traits.rs`): The [`Verifier`] trait is the only contract the
//!   registry relies on.
//!
//! - **Mock** (`mock.rs`): [`MockVerifier`] always accepts or always rejects.
//!   Used in tests and dry runs.
//!
//! - **Commitment** (`commitment.rs`): [`Sha256CommitmentVerifier`] accepts a
//!   proof iff it equals a domain-separated SHA-256 of the public inputs.
//!   Deterministic and transparent. It provides NO zero-knowledge guarantees.
//!
//! - **Builtin** (`builtin.rs`): [`BuiltinVerifier`] is a serializable enum
//!   over the above so persisted registries can name their verifier.
//!
//! Real circuit verifiers (e.g. a deployed Honk verifier) live outside this
//! workspace and plug in by implementing [`Verifier`].

pub mod builtin;
pub mod commitment;
pub mod mock;
pub mod traits;

pub use builtin::BuiltinVerifier;
pub use commitment::Sha256CommitmentVerifier;
pub use mock::MockVerifier;
pub use traits::Verifier;
