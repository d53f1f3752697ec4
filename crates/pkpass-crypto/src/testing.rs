//! Throwaway certificate chains for tests.
//!
//! [`TestChain::generate`] issues a root, an intermediate and a pass-type
//! leaf, shaped like the production chain. The leaf key is exported
//! encrypted with [`TEST_PASSWORD`]. Nothing here is suitable for real
//! signing.

use openssl::asn1::Asn1Time;
use openssl::bn::BigNum;
use openssl::ec::{EcGroup, EcKey};
use openssl::error::ErrorStack;
use openssl::hash::MessageDigest;
use openssl::nid::Nid;
use openssl::pkey::{PKey, Private};
use openssl::rsa::Rsa;
use openssl::symm::Cipher;
use openssl::x509::extension::{BasicConstraints, KeyUsage};
use openssl::x509::store::{X509Store, X509StoreBuilder};
use openssl::x509::{X509Builder, X509NameBuilder, X509};

use crate::credentials::SigningCredentials;
use crate::error::CryptoError;

/// Password protecting the exported leaf key.
pub const TEST_PASSWORD: &str = "pass-signing-secret";

/// A root → intermediate → leaf chain.
pub struct TestChain {
    pub root: X509,
    pub intermediate: X509,
    pub leaf: X509,
    pub leaf_key: PKey<Private>,
}

impl TestChain {
    pub fn generate() -> Result<Self, ErrorStack> {
        let root_key = ec_key()?;
        let root = issue("Test Root CA", &root_key, None, 1, true)?;

        let intermediate_key = ec_key()?;
        let intermediate = issue(
            "Test WWDR Intermediate",
            &intermediate_key,
            Some((&root, &root_key)),
            2,
            true,
        )?;

        let leaf_key = PKey::from_rsa(Rsa::generate(2048)?)?;
        let leaf = issue(
            "Pass Type ID: pass.com.example.test",
            &leaf_key,
            Some((&intermediate, &intermediate_key)),
            3,
            false,
        )?;

        Ok(Self {
            root,
            intermediate,
            leaf,
            leaf_key,
        })
    }

    pub fn leaf_pem(&self) -> Result<Vec<u8>, ErrorStack> {
        self.leaf.to_pem()
    }

    pub fn intermediate_pem(&self) -> Result<Vec<u8>, ErrorStack> {
        self.intermediate.to_pem()
    }

    /// PKCS#8 PEM of the leaf key, AES-256 encrypted under `password`.
    pub fn encrypted_key_pem(&self, password: &str) -> Result<Vec<u8>, ErrorStack> {
        self.leaf_key
            .private_key_to_pem_pkcs8_passphrase(Cipher::aes_256_cbc(), password.as_bytes())
    }

    /// Credentials parsed through the same PEM path production code uses.
    pub fn credentials(&self) -> Result<SigningCredentials, CryptoError> {
        let pem = |result: Result<Vec<u8>, ErrorStack>| result.map_err(CryptoError::Signing);
        SigningCredentials::from_pem(
            &pem(self.leaf_pem())?,
            &pem(self.encrypted_key_pem(TEST_PASSWORD))?,
            &pem(self.intermediate_pem())?,
            TEST_PASSWORD,
        )
    }

    /// A store trusting only the root. Verification through it succeeds only
    /// when the signature embeds the intermediate.
    pub fn trust_store(&self) -> Result<X509Store, ErrorStack> {
        let mut builder = X509StoreBuilder::new()?;
        builder.add_cert(self.root.clone())?;
        Ok(builder.build())
    }
}

fn ec_key() -> Result<PKey<Private>, ErrorStack> {
    let group = EcGroup::from_curve_name(Nid::X9_62_PRIME256V1)?;
    PKey::from_ec_key(EcKey::generate(&group)?)
}

fn issue(
    common_name: &str,
    key: &PKey<Private>,
    issuer: Option<(&X509, &PKey<Private>)>,
    serial: u32,
    ca: bool,
) -> Result<X509, ErrorStack> {
    let mut name = X509NameBuilder::new()?;
    name.append_entry_by_text("O", "Example Test Authority")?;
    name.append_entry_by_text("CN", common_name)?;
    let name = name.build();

    let mut builder = X509Builder::new()?;
    builder.set_version(2)?;
    builder.set_serial_number(&*BigNum::from_u32(serial)?.to_asn1_integer()?)?;
    builder.set_subject_name(&name)?;
    match issuer {
        Some((issuer_cert, _)) => builder.set_issuer_name(issuer_cert.subject_name())?,
        None => builder.set_issuer_name(&name)?,
    }
    builder.set_pubkey(key)?;
    builder.set_not_before(&*Asn1Time::days_from_now(0)?)?;
    builder.set_not_after(&*Asn1Time::days_from_now(30)?)?;

    if ca {
        builder.append_extension(BasicConstraints::new().critical().ca().build()?)?;
        builder.append_extension(KeyUsage::new().critical().key_cert_sign().crl_sign().build()?)?;
    } else {
        builder.append_extension(BasicConstraints::new().build()?)?;
        builder.append_extension(KeyUsage::new().critical().digital_signature().build()?)?;
    }

    let signing_key = issuer.map_or(key, |(_, issuer_key)| issuer_key);
    builder.sign(signing_key, MessageDigest::sha256())?;
    Ok(builder.build())
}
