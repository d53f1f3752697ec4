//! # Content Digest — Manifest Hashes
//!
//! Defines `ContentDigest` and `DigestAlgorithm` for the bundle manifest.
//!
//! ## Fixed Algorithm
//!
//! Wallet clients recompute a SHA-1 digest for every archive member and
//! compare it with `manifest.json`. SHA-1 is weak as a collision-resistant
//! hash; it is used here because the consumer dictates it, and the manifest
//! itself is protected by the detached signature. `DigestAlgorithm` therefore
//! has a single variant and there is no way to select another one.

use serde::{Deserialize, Serialize};
use sha1::{Digest, Sha1};

use crate::canonical::CanonicalBytes;

/// The hash algorithm used to produce a manifest digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DigestAlgorithm {
    /// SHA-1, required by the consuming wallet client.
    Sha1,
}

impl DigestAlgorithm {
    /// Returns the algorithm identifier string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sha1 => "sha1",
        }
    }

    /// Length of a raw digest in bytes.
    pub fn output_len(&self) -> usize {
        match self {
            Self::Sha1 => 20,
        }
    }
}

impl std::fmt::Display for DigestAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A content digest with its algorithm tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContentDigest {
    /// The hash algorithm that produced this digest.
    pub algorithm: DigestAlgorithm,
    /// The raw 20-byte digest value.
    pub bytes: [u8; 20],
}

impl ContentDigest {
    /// Create a new content digest from raw bytes and algorithm.
    pub fn new(algorithm: DigestAlgorithm, bytes: [u8; 20]) -> Self {
        Self { algorithm, bytes }
    }

    /// Render the digest as a lowercase hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.bytes)
    }
}

impl std::fmt::Display for ContentDigest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.algorithm, self.to_hex())
    }
}

/// Compute the SHA-1 digest of an archive member.
///
/// Assets are opaque bytes, so this accepts a raw slice. The pass document
/// and manifest reach it through [`CanonicalBytes::as_bytes`].
pub fn sha1_digest(data: &[u8]) -> ContentDigest {
    let hash = Sha1::digest(data);
    let mut bytes = [0u8; 20];
    bytes.copy_from_slice(&hash);
    ContentDigest::new(DigestAlgorithm::Sha1, bytes)
}

/// Compute the lowercase hex SHA-1 digest of canonical bytes.
pub fn sha1_hex(data: &CanonicalBytes) -> String {
    sha1_digest(data.as_bytes()).to_hex()
}
