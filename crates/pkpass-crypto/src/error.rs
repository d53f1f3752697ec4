//! # Cryptographic Errors
//!
//! Every failure here aborts assembly before any archive bytes are written.

use openssl::error::ErrorStack;
use thiserror::Error;

/// Errors from credential loading and manifest signing.
#[derive(Error, Debug)]
pub enum CryptoError {
    /// A credential source could not be read. The I/O error is passed
    /// through untouched.
    #[error("failed to read {what} from {origin}: {source}")]
    Read {
        what: &'static str,
        origin: String,
        #[source]
        source: std::io::Error,
    },

    /// A certificate was not valid PEM or not a valid X.509 structure.
    #[error("invalid {what} certificate: {source}")]
    Certificate {
        what: &'static str,
        #[source]
        source: ErrorStack,
    },

    /// The private key could not be parsed or decrypted.
    #[error("failed to load private key (wrong password or malformed PEM): {0}")]
    PrivateKey(#[source] ErrorStack),

    /// The signing certificate was not issued for the supplied private key.
    #[error("signing certificate does not match the private key")]
    KeyMismatch,

    /// The private key algorithm has no SHA-1 PKCS#7 signature scheme.
    /// Carries the OpenSSL key type identifier.
    #[error("unsupported signing key type {0}: expected RSA or EC")]
    UnsupportedKey(i32),

    /// OpenSSL failed while building the signature.
    #[error("PKCS#7 signing failed: {0}")]
    Signing(#[source] ErrorStack),
}
