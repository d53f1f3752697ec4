//! # Manifest Signing
//!
//! The wallet client trusts a pass only if `manifest.json` carries a
//! detached PKCS#7 signature chained to the vendor's root through the
//! intermediate certificate. [`Pkcs7Signer`] produces that signature in DER.
//!
//! ## Security Invariant
//!
//! The signing input is `&CanonicalBytes`, never a raw slice. A manifest can
//! only be signed after it went through the canonical encoder, so the
//! signed bytes and the archived bytes cannot drift apart.

use chrono::{DateTime, Utc};
use openssl::hash::MessageDigest;
use openssl::pkey::Id;
use openssl::sign::Signer;
use openssl::x509::X509Ref;
use pkpass_core::{sha1_digest, CanonicalBytes};

use crate::credentials::SigningCredentials;
use crate::der::{self, oid, TAG_SEQUENCE, TAG_SET};
use crate::error::CryptoError;

/// Produces the `signature` archive entry for a manifest.
pub trait ManifestSigner {
    /// Sign `manifest`, returning the binary signature artifact.
    fn sign(&self, manifest: &CanonicalBytes) -> Result<Vec<u8>, CryptoError>;
}

impl<S: ManifestSigner + ?Sized> ManifestSigner for &S {
    fn sign(&self, manifest: &CanonicalBytes) -> Result<Vec<u8>, CryptoError> {
        (**self).sign(manifest)
    }
}

/// Detached PKCS#7 `SignedData` signer backed by OpenSSL.
///
/// The output embeds the signing certificate and the intermediate but not
/// the manifest content. The signer digest is SHA-1, the same hash the
/// manifest uses for its entries. The signed attributes are content type,
/// signing time and the manifest's message digest.
#[derive(Debug)]
pub struct Pkcs7Signer {
    credentials: SigningCredentials,
    signing_time: Option<DateTime<Utc>>,
}

impl Pkcs7Signer {
    pub fn new(credentials: SigningCredentials) -> Self {
        Self {
            credentials,
            signing_time: None,
        }
    }

    /// Pin the signing-time attribute instead of reading the clock.
    pub fn with_signing_time(mut self, at: DateTime<Utc>) -> Self {
        self.signing_time = Some(at);
        self
    }

    pub fn credentials(&self) -> &SigningCredentials {
        &self.credentials
    }

    /// Algorithm identifier for the signature value. RSA keys use
    /// PKCS#1 v1.5 and EC keys use ECDSA, both over SHA-1.
    fn signature_algorithm(&self) -> Result<Vec<u8>, CryptoError> {
        let key_type = self.credentials.private_key().id();
        if key_type == Id::RSA {
            Ok(der::sequence(&[
                &der::object_id(oid::RSA_ENCRYPTION),
                &der::null(),
            ]))
        } else if key_type == Id::EC {
            Ok(der::sequence(&[&der::object_id(oid::ECDSA_WITH_SHA1)]))
        } else {
            Err(CryptoError::UnsupportedKey(key_type.as_raw()))
        }
    }
}

fn sha1_algorithm() -> Vec<u8> {
    der::sequence(&[&der::object_id(oid::SHA1), &der::null()])
}

fn attribute(kind: &[u8], value: Vec<u8>) -> Vec<u8> {
    der::sequence(&[&der::object_id(kind), &der::set_of(TAG_SET, vec![value])])
}

fn issuer_and_serial(certificate: &X509Ref) -> Result<Vec<u8>, CryptoError> {
    let issuer = certificate
        .issuer_name()
        .to_der()
        .map_err(CryptoError::Signing)?;
    let serial = certificate
        .serial_number()
        .to_bn()
        .map_err(CryptoError::Signing)?
        .to_vec();
    Ok(der::sequence(&[&issuer, &der::unsigned_integer(&serial)]))
}

impl ManifestSigner for Pkcs7Signer {
    fn sign(&self, manifest: &CanonicalBytes) -> Result<Vec<u8>, CryptoError> {
        let signature_algorithm = self.signature_algorithm()?;
        let signing_time = self.signing_time.unwrap_or_else(Utc::now);
        let digest = sha1_digest(manifest.as_bytes());

        let attributes = vec![
            attribute(oid::CONTENT_TYPE, der::object_id(oid::DATA)),
            attribute(oid::SIGNING_TIME, der::time(signing_time)),
            attribute(oid::MESSAGE_DIGEST, der::octet_string(&digest.bytes)),
        ];
        // The signature covers the attributes under the universal SET tag;
        // the SignerInfo carries the same content under [0].
        let signed_attributes = der::set_of(TAG_SET, attributes.clone());
        let embedded_attributes = der::set_of(der::context(0), attributes);

        let mut signer = Signer::new(MessageDigest::sha1(), self.credentials.private_key())
            .map_err(CryptoError::Signing)?;
        let signature_value = signer
            .sign_oneshot_to_vec(&signed_attributes)
            .map_err(CryptoError::Signing)?;

        let version = der::unsigned_integer(&[1]);
        let signer_info = der::sequence(&[
            &version,
            &issuer_and_serial(self.credentials.certificate())?,
            &sha1_algorithm(),
            &embedded_attributes,
            &signature_algorithm,
            &der::octet_string(&signature_value),
        ]);

        let leaf = self
            .credentials
            .certificate()
            .to_der()
            .map_err(CryptoError::Signing)?;
        let intermediate = self
            .credentials
            .intermediate()
            .to_der()
            .map_err(CryptoError::Signing)?;

        let signed_data = der::sequence(&[
            &version,
            &der::set_of(TAG_SET, vec![sha1_algorithm()]),
            // Detached: the encapsulated content info names the type only.
            &der::sequence(&[&der::object_id(oid::DATA)]),
            &der::constructed(der::context(0), &[&leaf, &intermediate]),
            &der::set_of(TAG_SET, vec![signer_info]),
        ]);
        let content_info = der::constructed(
            TAG_SEQUENCE,
            &[
                &der::object_id(oid::SIGNED_DATA),
                &der::constructed(der::context(0), &[&signed_data]),
            ],
        );

        tracing::debug!(
            manifest_bytes = manifest.len(),
            signature_bytes = content_info.len(),
            "signed manifest"
        );
        Ok(content_info)
    }
}
