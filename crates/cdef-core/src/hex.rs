//! # Hex Encoding
//!
//! `0x`-prefixed lowercase output; input accepts the prefix as optional and
//! digits in either case.

use crate::error::ValidationError;

/// Render bytes as `0x`-prefixed lowercase hex.
pub fn encode(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(2 + bytes.len() * 2);
    out.push_str("0x");
    for b in bytes {
        out.push_str(&format!("{b:02x}"));
    }
    out
}

/// Decode hex of any even length.
pub fn decode(s: &str) -> Result<Vec<u8>, ValidationError> {
    let digits = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);

    if let Some(ch) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(ValidationError::InvalidHex {
            value: s.to_string(),
            ch,
        });
    }
    if digits.len() % 2 != 0 {
        return Err(ValidationError::OddLength(s.to_string()));
    }

    Ok(digits
        .as_bytes()
        .chunks_exact(2)
        .map(|pair| (nibble(pair[0]) << 4) | nibble(pair[1]))
        .collect())
}

/// Decode exactly 32 bytes.
pub fn decode32(s: &str) -> Result<[u8; 32], ValidationError> {
    let bytes = decode(s)?;
    <[u8; 32]>::try_from(bytes.as_slice()).map_err(|_| ValidationError::InvalidLength {
        value: s.to_string(),
        digits: bytes.len() * 2,
    })
}

// Only called on bytes already checked with `is_ascii_hexdigit`.
fn nibble(c: u8) -> u8 {
    match c {
        b'0'..=b'9' => c - b'0',
        b'a'..=b'f' => c - b'a' + 10,
        _ => c - b'A' + 10,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_is_prefixed_lowercase() {
        assert_eq!(encode(&[0xde, 0xad, 0xbe, 0xef]), "0xdeadbeef");
        assert_eq!(encode(&[]), "0x");
    }

    #[test]
    fn decode_accepts_both_cases_and_optional_prefix() {
        assert_eq!(decode("0xDEADbeef").unwrap(), vec![0xde, 0xad, 0xbe, 0xef]);
        assert_eq!(decode("deadbeef").unwrap(), vec![0xde, 0xad, 0xbe, 0xef]);
        assert_eq!(decode("0x").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn decode_rejects_odd_length_and_bad_digits() {
        assert_eq!(decode("0xabc"), Err(ValidationError::OddLength("0xabc".into())));
        assert!(matches!(
            decode("0xzz"),
            Err(ValidationError::InvalidHex { ch: 'z', .. })
        ));
    }

    #[test]
    fn decode32_checks_length() {
        assert_eq!(decode32(&"11".repeat(32)).unwrap(), [0x11; 32]);
        assert_eq!(
            decode32("0xabcd"),
            Err(ValidationError::InvalidLength {
                value: "0xabcd".into(),
                digits: 4
            })
        );
    }
}
