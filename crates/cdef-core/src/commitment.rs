//! # Commitments and Pointers
//!
//! Fixed-width values that the registry stores but never interprets:
//!
//! - [`ParamsRoot`]: 32-byte commitment to a version's parameters, e.g. the
//!   Merkle root of a sanctions list. Its meaning belongs to the verifier.
//! - [`PublicInput`]: one 32-byte public input forwarded to a verifier.
//! - [`MetadataHash`]: off-chain pointer (typically an IPFS CID) to the
//!   descriptive data published alongside a version.
//!
//! 32-byte values are rendered as `0x`-prefixed lowercase hex. Parsing
//! accepts the prefix as optional and hex digits in either case.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::error::ValidationError;
use crate::hex;

/// Opaque 32-byte commitment to a compliance version's parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ParamsRoot([u8; 32]);

impl ParamsRoot {
    /// The all-zero root, used when a verifier takes no parameters.
    pub const ZERO: Self = Self([0u8; 32]);

    /// Wrap raw bytes.
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Commit to an arbitrary payload with SHA-256.
    pub fn sha256_of(payload: &[u8]) -> Self {
        let hash = Sha256::digest(payload);
        let mut bytes = [0u8; 32];
        bytes.copy_from_slice(&hash);
        Self(bytes)
    }

    /// Parse from hex, with or without a `0x` prefix.
    pub fn from_hex(s: &str) -> Result<Self, ValidationError> {
        hex::decode32(s).map(Self)
    }

    /// Access the raw bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Render as `0x`-prefixed lowercase hex.
    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }
}

impl Default for ParamsRoot {
    fn default() -> Self {
        Self::ZERO
    }
}

/// A single 32-byte public input to a proof.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PublicInput([u8; 32]);

impl PublicInput {
    /// Wrap raw bytes.
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Parse from hex, with or without a `0x` prefix.
    pub fn from_hex(s: &str) -> Result<Self, ValidationError> {
        hex::decode32(s).map(Self)
    }

    /// Access the raw bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Render as `0x`-prefixed lowercase hex.
    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }
}

/// Off-chain metadata pointer. Any string is accepted, including the empty
/// string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetadataHash(String);

impl MetadataHash {
    /// Wrap a pointer value.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Access the pointer string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

macro_rules! hex32_conversions {
    ($ty:ident) => {
        impl TryFrom<String> for $ty {
            type Error = ValidationError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::from_hex(&value)
            }
        }

        impl From<$ty> for String {
            fn from(v: $ty) -> Self {
                v.to_hex()
            }
        }

        impl std::str::FromStr for $ty {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::from_hex(s)
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.to_hex())
            }
        }
    };
}

hex32_conversions!(ParamsRoot);
hex32_conversions!(PublicInput);

impl std::fmt::Display for MetadataHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
