//! # pkpass-bundle — Pass Bundle Assembly
//!
//! Turns a [`pkpass_model::PassDocument`] into a signed `.pkpass` archive:
//!
//! ```text
//! PassDocument ──canonical_bytes──▶ pass.json
//!        │                              │
//!        └── assets ──────┐             │
//!                         ▼             ▼
//!                   Manifest (SHA-1 per member) ──▶ manifest.json
//!                                                      │
//!                                     ManifestSigner ──┴──▶ signature
//!
//! ArchiveWriter: signature, manifest.json, pass.json, assets...
//! ```
//!
//! ## Crate Policy
//!
//! - Validation happens before any digest or signature is computed.
//! - The pipeline is synchronous and single-threaded. Distinct documents can
//!   be assembled concurrently; one document cannot.

pub mod archive;
pub mod bundler;
pub mod error;
pub mod manifest;

pub use archive::ArchiveWriter;
pub use bundler::{PassBundle, PassBundler};
pub use error::BundleError;
pub use manifest::Manifest;
