//! Reserved archive member names.
//!
//! Asset names may not collide with these; the bundler writes them itself.

/// The pass document.
pub const PASS_JSON: &str = "pass.json";

/// The digest map over every other member except the signature.
pub const MANIFEST_JSON: &str = "manifest.json";

/// The detached PKCS#7 signature over `manifest.json`.
pub const SIGNATURE: &str = "signature";

/// Returns true if `name` is written by the bundler and cannot be an asset.
pub fn is_reserved(name: &str) -> bool {
    matches!(name, PASS_JSON | MANIFEST_JSON | SIGNATURE)
}
