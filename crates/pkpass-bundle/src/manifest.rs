//! # Manifest Builder
//!
//! `manifest.json` maps every archive member except the signature and the
//! manifest itself to the lowercase hex SHA-1 of its bytes. The client
//! recomputes each digest and compares.
//!
//! Each file is hashed on its own. The pass document is hashed in exactly
//! the canonical form that is written to the archive.

use std::collections::BTreeMap;

use pkpass_core::{
    sha1_digest, sha1_hex, CanonicalBytes, CanonicalizationError, PASS_JSON,
};

/// Name → hex digest, ordered by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest(BTreeMap<String, String>);

impl Manifest {
    /// Digest the pass document and every asset.
    pub fn build(pass_json: &CanonicalBytes, assets: &BTreeMap<String, Vec<u8>>) -> Self {
        let mut entries = BTreeMap::new();
        entries.insert(PASS_JSON.to_string(), sha1_hex(pass_json));
        for (name, bytes) in assets {
            entries.insert(name.clone(), sha1_digest(bytes).to_hex());
        }
        tracing::debug!(entries = entries.len(), "built manifest");
        Self(entries)
    }

    /// Parse a `manifest.json` read back from an archive.
    pub fn from_json(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes).map(Self)
    }

    /// The bytes stored as `manifest.json` and fed to the signer.
    pub fn to_canonical_bytes(&self) -> Result<CanonicalBytes, CanonicalizationError> {
        CanonicalBytes::new(&self.0)
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// True when `bytes` hash to the digest recorded for `name`.
    pub fn verify_entry(&self, name: &str, bytes: &[u8]) -> bool {
        self.get(name)
            .is_some_and(|expected| expected == sha1_digest(bytes).to_hex())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(name, digest)| (name.as_str(), digest.as_str()))
    }

    pub fn entries(&self) -> &BTreeMap<String, String> {
        &self.0
    }

    pub fn into_entries(self) -> BTreeMap<String, String> {
        self.0
    }
}
