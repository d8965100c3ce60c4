//! # Caller Identity
//!
//! The registry's authority and every mutating caller are represented as an
//! [`Identity`]. How an identity is authenticated (signature, transaction
//! sender, bearer token) belongs to the hosting environment; here an identity
//! is only ever compared for exact equality.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// An opaque caller or authority identity, e.g. `0x70997970C51812dc3A010C7d01b50e0d17dc79C8`.
///
/// Identities are compared byte-for-byte. No case folding is applied, so
/// callers that use checksummed addresses must present the same casing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Identity(String);

impl Identity {
    /// Create a validated identity.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidIdentity`] if the value is empty or
    /// contains whitespace.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let s = value.into();
        if s.is_empty() || s.chars().any(char::is_whitespace) {
            return Err(ValidationError::InvalidIdentity(s));
        }
        Ok(Self(s))
    }

    /// Access the identity string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Identity {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Identity> for String {
    fn from(id: Identity) -> Self {
        id.0
    }
}

impl std::str::FromStr for Identity {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl std::fmt::Display for Identity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_address_like_identity() {
        let id = Identity::new("0x70997970C51812dc3A010C7d01b50e0d17dc79C8").unwrap();
        assert_eq!(id.as_str(), "0x70997970C51812dc3A010C7d01b50e0d17dc79C8");
        assert_eq!(id.to_string(), id.as_str());
    }

    #[test]
    fn rejects_empty_and_whitespace() {
        assert!(matches!(
            Identity::new(""),
            Err(ValidationError::InvalidIdentity(_))
        ));
        assert!(Identity::new("regulator one").is_err());
        assert!(Identity::new("regulator\n").is_err());
    }

    #[test]
    fn equality_is_case_sensitive() {
        let a = Identity::new("0xAbC").unwrap();
        let b = Identity::new("0xabc").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn serde_rejects_invalid_identity() {
        let ok: Identity = serde_json::from_str("\"regulator\"").unwrap();
        assert_eq!(ok.as_str(), "regulator");
        assert!(serde_json::from_str::<Identity>("\"\"").is_err());
    }
}
