//! `pkpass build`: assemble and sign a pass from a definition file.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use zeroize::Zeroizing;

use pkpass_bundle::PassBundler;
use pkpass_core::FileSource;
use pkpass_crypto::SigningCredentials;

use crate::definition::load_document;

/// Arguments for the `build` subcommand.
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Path to the YAML pass definition.
    pub definition: PathBuf,

    /// Pass Type ID certificate (PEM).
    #[arg(long)]
    pub certificate: PathBuf,

    /// Encrypted private key for the certificate (PEM).
    #[arg(long)]
    pub key: PathBuf,

    /// WWDR intermediate certificate (PEM).
    #[arg(long)]
    pub wwdr: PathBuf,

    /// Private key password.
    #[arg(long, env = "PKPASS_KEY_PASSWORD", hide_env_values = true, default_value = "")]
    pub password: String,

    /// Where to write the archive.
    #[arg(short, long, default_value = "pass.pkpass")]
    pub output: PathBuf,
}

/// Execute the build subcommand.
///
/// The archive is assembled in memory and only written once every stage has
/// succeeded, so a failed build never leaves a partial file at `--output`.
pub fn run_build(args: &BuildArgs) -> Result<u8> {
    let mut pass = load_document(&args.definition)?;

    let password = Zeroizing::new(args.password.clone());
    let credentials = SigningCredentials::load(
        &FileSource::new(&args.certificate),
        &FileSource::new(&args.key),
        &FileSource::new(&args.wwdr),
        &password,
    )
    .context("failed to load signing credentials")?;
    tracing::info!(signer = ?credentials.signer_name(), "loaded signing credentials");

    let bundle = PassBundler::with_credentials(credentials)
        .create(&mut pass)
        .context("pass assembly failed")?;

    std::fs::write(&args.output, bundle.archive())
        .with_context(|| format!("failed to write {}", args.output.display()))?;

    println!(
        "Wrote {} ({} bytes, {} manifest entries)",
        args.output.display(),
        bundle.archive().len(),
        bundle.manifest().len()
    );
    Ok(0)
}
