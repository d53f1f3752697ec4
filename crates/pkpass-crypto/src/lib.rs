//! # pkpass-crypto — Signature Builder
//!
//! Loads the pass-type signing credentials and produces the detached PKCS#7
//! signature stored as the `signature` archive entry.
//!
//! The signing seam is the [`ManifestSigner`] trait. [`Pkcs7Signer`] is the
//! OpenSSL implementation; the assembly pipeline is generic over the trait so
//! that tests can observe whether signing happened at all.
//!
//! ## Crate Policy
//!
//! - Depends only on `pkpass-core` internally.
//! - No `unsafe` code. OpenSSL is reached only through the `openssl` crate's
//!   safe wrappers; the `SignedData` envelope is assembled in DER here so the
//!   signer digest stays SHA-1.
//! - Private keys are never logged or serialized.

pub mod credentials;
mod der;
pub mod error;
pub mod signer;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;

pub use credentials::SigningCredentials;
pub use error::CryptoError;
pub use signer::{ManifestSigner, Pkcs7Signer};
