//! # Document Identifiers
//!
//! ObjectId-style identifiers: 4-byte big-endian unix seconds, 5 random
//! bytes, and a 3-byte incrementing counter, rendered as 24 lowercase hex
//! characters. The counter starts at a random value per process.

use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::OnceLock;
use std::time::{SystemTime, UNIX_EPOCH};

use rand::RngCore;
use serde::{Serialize, Serializer};

use super::errors::StoreError;

/// Identifier length in bytes
pub const ID_BYTES: usize = 12;

/// Identifier length in hex characters
pub const ID_HEX_LEN: usize = 24;

/// A unique document identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DocumentId([u8; ID_BYTES]);

fn counter() -> &'static AtomicU32 {
    static COUNTER: OnceLock<AtomicU32> = OnceLock::new();
    COUNTER.get_or_init(|| AtomicU32::new(rand::thread_rng().next_u32()))
}

fn hex_digit(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

impl DocumentId {
    /// Generate a fresh identifier
    pub fn generate() -> Self {
        let secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0) as u32;

        let mut bytes = [0u8; ID_BYTES];
        bytes[..4].copy_from_slice(&secs.to_be_bytes());
        rand::thread_rng().fill_bytes(&mut bytes[4..9]);

        let count = counter().fetch_add(1, Ordering::Relaxed);
        bytes[9..].copy_from_slice(&count.to_be_bytes()[1..]);

        Self(bytes)
    }

    /// Parse a 24-character hex identifier
    ///
    /// This is the syntactic gate applied to every identifier taken from a
    /// request path before any store lookup happens.
    pub fn parse(s: &str) -> Result<Self, StoreError> {
        let raw = s.as_bytes();
        if raw.len() != ID_HEX_LEN {
            return Err(StoreError::InvalidId(s.to_string()));
        }

        let mut bytes = [0u8; ID_BYTES];
        for (i, pair) in raw.chunks_exact(2).enumerate() {
            let hi = hex_digit(pair[0]).ok_or_else(|| StoreError::InvalidId(s.to_string()))?;
            let lo = hex_digit(pair[1]).ok_or_else(|| StoreError::InvalidId(s.to_string()))?;
            bytes[i] = (hi << 4) | lo;
        }

        Ok(Self(bytes))
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

impl Serialize for DocumentId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_is_24_hex_chars() {
        let id = DocumentId::generate().to_string();
        assert_eq!(id.len(), ID_HEX_LEN);
        assert!(id.bytes().all(|b| b.is_ascii_hexdigit()));
    }

    #[test]
    fn test_generated_ids_are_distinct() {
        let mut seen = HashSet::new();
        for _ in 0..1000 {
            assert!(seen.insert(DocumentId::generate().to_string()));
        }
    }

    #[test]
    fn test_parse_roundtrip() {
        let id = DocumentId::generate();
        let parsed = DocumentId::parse(&id.to_string()).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_parse_accepts_uppercase() {
        let id = DocumentId::parse("5F9B1C2D3E4A5B6C7D8E9F0A").unwrap();
        assert_eq!(id.to_string(), "5f9b1c2d3e4a5b6c7d8e9f0a");
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(DocumentId::parse("").is_err());
        assert!(DocumentId::parse("123").is_err());
        assert!(DocumentId::parse("zzzzzzzzzzzzzzzzzzzzzzzz").is_err());
        // 23 and 25 chars
        assert!(DocumentId::parse("5f9b1c2d3e4a5b6c7d8e9f0").is_err());
        assert!(DocumentId::parse("5f9b1c2d3e4a5b6c7d8e9f0aa").is_err());
    }

    #[test]
    fn test_serializes_as_string() {
        let id = DocumentId::generate();
        let json = serde_json::to_value(id).unwrap();
        assert_eq!(json, serde_json::Value::String(id.to_string()));
    }
}
