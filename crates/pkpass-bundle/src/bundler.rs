//! # Assembly Pipeline
//!
//! [`PassBundler::create`] runs the stages strictly in order:
//!
//! 1. `validate_for_assembly` on the document. Nothing else runs if it fails.
//! 2. Canonical encoding of the document.
//! 3. Manifest over the document bytes and every asset. The digests are
//!    recorded back on the document.
//! 4. Detached signature over the canonical manifest bytes.
//! 5. Archive: signature, manifest, document, assets.
//!
//! No stage re-enters an earlier one. Re-running `create` on an unchanged
//! document reproduces the same document and manifest bytes.

use std::io::{Cursor, Seek, Write};

use pkpass_core::{CanonicalBytes, MANIFEST_JSON, PASS_JSON, SIGNATURE};
use pkpass_crypto::{ManifestSigner, Pkcs7Signer, SigningCredentials};
use pkpass_model::PassDocument;

use crate::archive::ArchiveWriter;
use crate::error::BundleError;
use crate::manifest::Manifest;

/// Every artifact from one assembly, in memory.
#[derive(Debug, Clone)]
pub struct PassBundle {
    pass_json: CanonicalBytes,
    manifest: Manifest,
    manifest_json: CanonicalBytes,
    signature: Vec<u8>,
    archive: Vec<u8>,
}

impl PassBundle {
    pub fn pass_json(&self) -> &CanonicalBytes {
        &self.pass_json
    }

    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    /// The exact bytes stored as `manifest.json` and signed.
    pub fn manifest_json(&self) -> &CanonicalBytes {
        &self.manifest_json
    }

    pub fn signature(&self) -> &[u8] {
        &self.signature
    }

    /// The `.pkpass` archive.
    pub fn archive(&self) -> &[u8] {
        &self.archive
    }

    pub fn into_archive(self) -> Vec<u8> {
        self.archive
    }
}

/// Signed artifacts before they are packed.
struct Signed {
    pass_json: CanonicalBytes,
    manifest: Manifest,
    manifest_json: CanonicalBytes,
    signature: Vec<u8>,
}

/// Assembles pass documents into signed archives.
#[derive(Debug)]
pub struct PassBundler<S: ManifestSigner> {
    signer: S,
}

impl PassBundler<Pkcs7Signer> {
    /// A bundler that signs with PKCS#7 under `credentials`.
    pub fn with_credentials(credentials: SigningCredentials) -> Self {
        Self::new(Pkcs7Signer::new(credentials))
    }
}

impl<S: ManifestSigner> PassBundler<S> {
    pub fn new(signer: S) -> Self {
        Self { signer }
    }

    pub fn signer(&self) -> &S {
        &self.signer
    }

    /// Assemble `pass` and return every artifact, including the archive bytes.
    pub fn create(&self, pass: &mut PassDocument) -> Result<PassBundle, BundleError> {
        let signed = self.sign(pass)?;
        let archive = pack(&signed, pass, Cursor::new(Vec::new()))?.into_inner();
        tracing::info!(
            serial_number = pass.serial_number(),
            bytes = archive.len(),
            "assembled pass bundle"
        );
        Ok(PassBundle {
            pass_json: signed.pass_json,
            manifest: signed.manifest,
            manifest_json: signed.manifest_json,
            signature: signed.signature,
            archive,
        })
    }

    /// Assemble `pass` and write the archive into `sink`, returning the sink.
    ///
    /// On failure before packing starts, nothing has been written.
    pub fn create_into<W: Write + Seek>(
        &self,
        pass: &mut PassDocument,
        sink: W,
    ) -> Result<W, BundleError> {
        let signed = self.sign(pass)?;
        let sink = pack(&signed, pass, sink)?;
        tracing::info!(
            serial_number = pass.serial_number(),
            "wrote pass bundle"
        );
        Ok(sink)
    }

    fn sign(&self, pass: &mut PassDocument) -> Result<Signed, BundleError> {
        pass.validate_for_assembly()?;

        let pass_json = pass.canonical_bytes()?;
        let manifest = Manifest::build(&pass_json, pass.assets());
        pass.record_digests(manifest.entries().clone());

        let manifest_json = manifest.to_canonical_bytes()?;
        let signature = self.signer.sign(&manifest_json)?;

        Ok(Signed {
            pass_json,
            manifest,
            manifest_json,
            signature,
        })
    }
}

fn pack<W: Write + Seek>(
    signed: &Signed,
    pass: &PassDocument,
    sink: W,
) -> Result<W, BundleError> {
    let mut archive = ArchiveWriter::new(sink);
    archive.add(SIGNATURE, &signed.signature)?;
    archive.add(MANIFEST_JSON, signed.manifest_json.as_bytes())?;
    archive.add(PASS_JSON, signed.pass_json.as_bytes())?;
    for (name, bytes) in pass.assets() {
        archive.add(name, bytes)?;
    }
    archive.finish()
}
