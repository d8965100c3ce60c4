//! # Validation Errors
//!
//! Errors raised while constructing domain primitives from untrusted input.
//! Each variant carries the rejected value so operators can diagnose
//! misconfiguration without guesswork.

use thiserror::Error;

/// Validation errors for domain primitive newtypes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Identity is empty or contains whitespace.
    #[error("invalid identity: \"{0}\" (expected a non-empty string without whitespace)")]
    InvalidIdentity(String),

    /// Hex string has the wrong number of digits for a 32-byte value.
    #[error("invalid length for 32-byte value: \"{value}\" has {digits} hex digits, expected 64")]
    InvalidLength {
        /// The string that failed to parse.
        value: String,
        /// Number of hex digits found after stripping an optional `0x`.
        digits: usize,
    },

    /// Hex string has an odd number of digits.
    #[error("odd number of hex digits in \"{0}\"")]
    OddLength(String),

    /// Hex string contains a non-hex character.
    #[error("invalid hex character {ch:?} in \"{value}\"")]
    InvalidHex {
        /// The string that failed to parse.
        value: String,
        /// The first offending character.
        ch: char,
    },
}
