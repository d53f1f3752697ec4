//! # Canonical Serialization — Deterministic JSON Bytes
//!
//! This module defines `CanonicalBytes`, the sole construction path for the
//! bytes that are hashed into the manifest and signed.
//!
//! ## Determinism Invariant
//!
//! The pass document and the manifest are covered by a detached signature.
//! If two encodes of the same state produced different bytes, the manifest
//! digest and the signature would stop matching the archive contents. The
//! inner `Vec<u8>` is private; the only constructors serialize through
//! `serde_jcs` (RFC 8785): sorted object keys, compact separators, a single
//! number format. Map iteration order therefore never leaks into the output.
//!
//! Non-ASCII text passes through as UTF-8; it is not escaped.

use serde::Serialize;
use serde_json::Value;

use crate::error::CanonicalizationError;

/// Bytes produced exclusively by JCS canonicalization.
///
/// # Invariants
///
/// - Object keys are sorted lexicographically at every nesting level.
/// - No insignificant whitespace.
/// - Output is valid UTF-8 JSON.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CanonicalBytes(Vec<u8>);

impl CanonicalBytes {
    /// Construct canonical bytes from any serializable value.
    ///
    /// # Errors
    ///
    /// Returns `CanonicalizationError::SerializationFailed` if the value
    /// cannot be represented as JSON.
    pub fn new(obj: &impl Serialize) -> Result<Self, CanonicalizationError> {
        let value = serde_json::to_value(obj)?;
        Self::from_value(&value)
    }

    /// Construct canonical bytes from an already-built JSON value.
    pub fn from_value(value: &Value) -> Result<Self, CanonicalizationError> {
        let s = serde_jcs::to_string(value)?;
        Ok(Self(s.into_bytes()))
    }

    /// Access the canonical bytes for digest computation.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// View the canonical bytes as text. Always succeeds: JCS output is UTF-8.
    pub fn as_str(&self) -> &str {
        // The constructors only ever store the bytes of a `String`.
        std::str::from_utf8(&self.0).unwrap_or_default()
    }

    /// Returns the length of the canonical byte sequence.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the canonical byte sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consume the wrapper and return the owned bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }
}

impl AsRef<[u8]> for CanonicalBytes {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
