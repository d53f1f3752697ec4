//! # Bundle Errors
//!
//! Top-level error for assembly. Each lower layer keeps its own error type;
//! this enum only wraps them so callers can match on the family.

use pkpass_core::{CanonicalizationError, ValidationError};
use pkpass_crypto::CryptoError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BundleError {
    /// The document failed a pre-assembly check. Nothing was hashed or signed.
    #[error("pass document is not ready for assembly: {0}")]
    Validation(#[from] ValidationError),

    #[error("canonical encoding failed: {0}")]
    Canonicalization(#[from] CanonicalizationError),

    #[error(transparent)]
    Crypto(#[from] CryptoError),

    #[error("archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
