//! SHA-256 fingerprints of container contents.
//!
//! Each container feeds its live contents, in a canonical order, into a
//! [`Fingerprinter`]. Two containers with the same fingerprint hold the
//! same data (and for the leaderboard, the same tower shape). Tests use
//! this to check determinism across seeded runs.
//!
//! Fingerprints are for comparison only, not a storage format.

use sha2::{Digest, Sha256};

/// Incremental SHA-256 over little-endian encoded fields.
#[derive(Debug, Clone, Default)]
pub struct Fingerprinter {
    hasher: Sha256,
}

impl Fingerprinter {
    /// Start a fingerprint tagged with a domain label so that, say, an
    /// empty registry and an empty leaderboard hash differently.
    pub fn new(domain: &str) -> Self {
        let mut fp = Self::default();
        fp.write_bytes(domain.as_bytes());
        fp
    }

    #[inline]
    pub fn write_u64(&mut self, value: u64) {
        self.hasher.update(value.to_le_bytes());
    }

    #[inline]
    pub fn write_i64(&mut self, value: i64) {
        self.hasher.update(value.to_le_bytes());
    }

    /// Length-prefixed so that adjacent strings cannot alias
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.write_u64(bytes.len() as u64);
        self.hasher.update(bytes);
    }

    pub fn finish(self) -> [u8; 32] {
        self.hasher.finalize().into()
    }
}

/// Hex encoding of a 32-byte fingerprint
pub fn to_hex(fingerprint: &[u8; 32]) -> String {
    hex::encode(fingerprint)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fingerprint_determinism() {
        let mut a = Fingerprinter::new("test");
        a.write_u64(42);
        let mut b = Fingerprinter::new("test");
        b.write_u64(42);
        assert_eq!(a.finish(), b.finish());
    }

    #[test]
    fn test_domain_separation() {
        let a = Fingerprinter::new("registry").finish();
        let b = Fingerprinter::new("leaderboard").finish();
        assert_ne!(a, b);
    }

    #[test]
    fn test_length_prefix_prevents_aliasing() {
        let mut a = Fingerprinter::new("x");
        a.write_bytes(b"ab");
        a.write_bytes(b"c");
        let mut b = Fingerprinter::new("x");
        b.write_bytes(b"a");
        b.write_bytes(b"bc");
        assert_ne!(a.finish(), b.finish());
    }

    #[test]
    fn test_hex_length() {
        let hex = to_hex(&Fingerprinter::new("x").finish());
        assert_eq!(hex.len(), 64);
        assert!(hex.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
