//! # Signing Credentials
//!
//! The signer needs three PEM documents: the pass-type leaf certificate, its
//! password-protected private key, and the intermediate (WWDR) certificate
//! that links the leaf to the wallet vendor's root. They are parsed once,
//! up front, so that a wrong password or a malformed file surfaces before
//! any hashing starts.
//!
//! Key material never reaches a log line: [`SigningCredentials`] has a
//! hand-written `Debug` that prints only the certificate subjects.

use openssl::nid::Nid;
use openssl::pkey::{PKey, PKeyRef, Private};
use openssl::x509::{X509Ref, X509};
use pkpass_core::ByteSource;

use crate::error::CryptoError;

/// Parsed leaf certificate, private key and intermediate certificate.
pub struct SigningCredentials {
    certificate: X509,
    private_key: PKey<Private>,
    intermediate: X509,
}

impl SigningCredentials {
    /// Parse PEM-encoded credentials.
    ///
    /// # Errors
    ///
    /// - [`CryptoError::Certificate`] for an unparsable certificate.
    /// - [`CryptoError::PrivateKey`] for a malformed key or a wrong password.
    /// - [`CryptoError::KeyMismatch`] when the leaf certificate does not
    ///   carry the public half of `private_key`.
    pub fn from_pem(
        certificate: &[u8],
        private_key: &[u8],
        intermediate: &[u8],
        password: &str,
    ) -> Result<Self, CryptoError> {
        let certificate = X509::from_pem(certificate).map_err(|source| CryptoError::Certificate {
            what: "signing",
            source,
        })?;
        let intermediate =
            X509::from_pem(intermediate).map_err(|source| CryptoError::Certificate {
                what: "intermediate",
                source,
            })?;
        let private_key = PKey::private_key_from_pem_passphrase(private_key, password.as_bytes())
            .map_err(CryptoError::PrivateKey)?;

        let public_key = certificate
            .public_key()
            .map_err(|source| CryptoError::Certificate {
                what: "signing",
                source,
            })?;
        if !public_key.public_eq(&*private_key) {
            return Err(CryptoError::KeyMismatch);
        }

        let credentials = Self {
            certificate,
            private_key,
            intermediate,
        };
        tracing::debug!(
            signer = credentials.signer_name().as_deref().unwrap_or("<unnamed>"),
            "loaded signing credentials"
        );
        Ok(credentials)
    }

    /// Read all three documents from byte sources, then parse them.
    ///
    /// Read failures keep the underlying `io::Error` as their source.
    pub fn load(
        certificate: &dyn ByteSource,
        private_key: &dyn ByteSource,
        intermediate: &dyn ByteSource,
        password: &str,
    ) -> Result<Self, CryptoError> {
        let certificate_pem = read(certificate, "signing certificate")?;
        let key_pem = read(private_key, "private key")?;
        let intermediate_pem = read(intermediate, "intermediate certificate")?;
        Self::from_pem(&certificate_pem, &key_pem, &intermediate_pem, password)
    }

    pub fn certificate(&self) -> &X509Ref {
        &self.certificate
    }

    pub fn intermediate(&self) -> &X509Ref {
        &self.intermediate
    }

    pub(crate) fn private_key(&self) -> &PKeyRef<Private> {
        &self.private_key
    }

    /// Common name of the signing certificate, if it has one.
    pub fn signer_name(&self) -> Option<String> {
        common_name(&self.certificate)
    }
}

impl std::fmt::Debug for SigningCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SigningCredentials")
            .field("certificate", &common_name(&self.certificate))
            .field("intermediate", &common_name(&self.intermediate))
            .field("private_key", &"<redacted>")
            .finish()
    }
}

fn read(source: &dyn ByteSource, what: &'static str) -> Result<Vec<u8>, CryptoError> {
    source.read_bytes().map_err(|err| CryptoError::Read {
        what,
        origin: source.describe(),
        source: err,
    })
}

fn common_name(cert: &X509Ref) -> Option<String> {
    cert.subject_name()
        .entries_by_nid(Nid::COMMONNAME)
        .next()
        .and_then(|entry| entry.data().as_utf8().ok())
        .map(|name| name.to_string())
}
