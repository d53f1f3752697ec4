//! `pkpass verify`: check an archive's members against its own manifest.
//!
//! Only digests are checked. Whether the signature chains to a trusted
//! root is left to the wallet client.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;

use pkpass_bundle::Manifest;
use pkpass_core::{MANIFEST_JSON, SIGNATURE};

/// Exit code when the archive opens but does not match its manifest.
pub const EXIT_MISMATCH: u8 = 2;

#[derive(Args, Debug)]
pub struct VerifyArgs {
    /// The `.pkpass` archive to check.
    pub archive: PathBuf,
}

/// One problem found in an archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Finding {
    /// A member's bytes do not hash to the recorded digest.
    DigestMismatch(String),
    /// A member is present but not listed in the manifest.
    Unlisted(String),
    /// The manifest lists a member the archive does not contain.
    Missing(String),
    /// The archive has no `signature` member.
    NoSignature,
}

impl std::fmt::Display for Finding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DigestMismatch(name) => write!(f, "digest mismatch: {name}"),
            Self::Unlisted(name) => write!(f, "not in manifest: {name}"),
            Self::Missing(name) => write!(f, "missing from archive: {name}"),
            Self::NoSignature => write!(f, "missing from archive: {SIGNATURE}"),
        }
    }
}

pub fn run_verify(args: &VerifyArgs) -> Result<u8> {
    let findings = check_archive(&args.archive)?;
    if findings.is_empty() {
        println!("OK: {}", args.archive.display());
        return Ok(0);
    }
    for finding in &findings {
        println!("FAIL: {finding}");
    }
    Ok(EXIT_MISMATCH)
}

/// Read every member of the archive at `path` and compare it with the
/// archived manifest.
pub fn check_archive(path: &Path) -> Result<Vec<Finding>> {
    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    let mut zip = zip::ZipArchive::new(file)
        .with_context(|| format!("not a zip archive: {}", path.display()))?;

    let mut members = BTreeMap::new();
    for index in 0..zip.len() {
        let mut entry = zip.by_index(index)?;
        if entry.is_dir() {
            continue;
        }
        let mut bytes = Vec::new();
        entry
            .read_to_end(&mut bytes)
            .with_context(|| format!("failed to read member {}", entry.name()))?;
        members.insert(entry.name().to_string(), bytes);
    }

    let manifest_bytes = members
        .remove(MANIFEST_JSON)
        .with_context(|| format!("archive has no {MANIFEST_JSON}"))?;
    let manifest = Manifest::from_json(&manifest_bytes)
        .with_context(|| format!("{MANIFEST_JSON} is not a valid manifest"))?;

    let mut findings = Vec::new();
    if members.remove(SIGNATURE).is_none() {
        findings.push(Finding::NoSignature);
    }
    for (name, bytes) in &members {
        if manifest.get(name).is_none() {
            findings.push(Finding::Unlisted(name.clone()));
        } else if !manifest.verify_entry(name, bytes) {
            findings.push(Finding::DigestMismatch(name.clone()));
        }
    }
    for (name, _) in manifest.iter() {
        if !members.contains_key(name) {
            findings.push(Finding::Missing(name.to_string()));
        }
    }

    tracing::debug!(
        members = members.len(),
        findings = findings.len(),
        "checked archive against manifest"
    );
    Ok(findings)
}
