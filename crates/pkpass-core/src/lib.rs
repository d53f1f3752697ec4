//! # pkpass-core — Foundational Types for Pass Bundles
//!
//! This crate is the leaf of the pkpass workspace. It defines the primitives
//! every later pipeline stage relies on, and depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **`CanonicalBytes` newtype.** The pass document and the manifest are
//!    hashed and signed, so the bytes that leave the encoder must be
//!    byte-identical for identical input. All JSON that enters a digest or a
//!    signature flows through `CanonicalBytes::new()`.
//!
//! 2. **One digest algorithm.** Wallet clients verify manifests with SHA-1.
//!    The algorithm is fixed by the consumer, so `DigestAlgorithm` has exactly
//!    one variant and no configuration knob.
//!
//! 3. **Validation at the boundary.** Lexical checks (colors, currency codes,
//!    ISO-8601 dates, authentication tokens) live here so that model
//!    constructors can reject bad input before any assembly work starts.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `pkpass-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod canonical;
pub mod color;
pub mod descriptor;
pub mod digest;
pub mod error;
pub mod layout;
pub mod source;
pub mod temporal;
pub mod validate;

// Re-export primary types for ergonomic imports.
pub use canonical::CanonicalBytes;
pub use color::{hex_to_rgb, rgb_color};
pub use descriptor::{Descriptor, DESCRIPTOR};
pub use digest::{sha1_digest, sha1_hex, ContentDigest, DigestAlgorithm};
pub use error::{CanonicalizationError, ValidationError};
pub use layout::{MANIFEST_JSON, PASS_JSON, SIGNATURE};
pub use source::{ByteSource, FileSource, MemorySource};
pub use temporal::format_iso8601;
pub use validate::{
    validate_authentication_token, validate_beacon_limits, validate_currency_code,
    validate_description, validate_iso8601_date, validate_location_limits, validate_rgb_color,
    validate_serial_number, MAX_BEACONS, MAX_LOCATIONS, MIN_AUTHENTICATION_TOKEN_LEN,
};
