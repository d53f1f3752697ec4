//! `pkpass manifest`: show what a definition would sign, without signing it.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use pkpass_bundle::Manifest;

use crate::definition::load_document;

#[derive(Args, Debug)]
pub struct ManifestArgs {
    /// Path to the YAML pass definition.
    pub definition: PathBuf,

    /// Also print the canonical `pass.json`.
    #[arg(long)]
    pub pass_json: bool,
}

pub fn run_manifest(args: &ManifestArgs) -> Result<u8> {
    let pass = load_document(&args.definition)?;
    pass.validate_for_assembly()?;

    let pass_json = pass.canonical_bytes()?;
    let manifest = Manifest::build(&pass_json, pass.assets());

    if args.pass_json {
        println!("{}", pass_json.as_str());
    }
    println!("{}", manifest.to_canonical_bytes()?.as_str());
    Ok(0)
}
