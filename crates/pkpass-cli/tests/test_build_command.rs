//! The `build`, `manifest` and `verify` handlers driven against a
//! temporary directory holding a definition, an asset and a generated
//! credential chain.

use std::fs;
use std::io::{Cursor, Read};
use std::path::{Path, PathBuf};

use pkpass_cli::build::{run_build, BuildArgs};
use pkpass_cli::manifest::{run_manifest, ManifestArgs};
use pkpass_cli::verify::{check_archive, run_verify, VerifyArgs};
use pkpass_crypto::testing::{TestChain, TEST_PASSWORD};
use tempfile::TempDir;

const DEFINITION: &str = r#"
style: eventTicket
pass_type_identifier: pass.com.example.test
organization_name: Example Venue
team_identifier: A1B2C3D4E5
serial_number: EVT-7
description: Concert ticket
appearance:
  background_color: rgb(20, 20, 60)
  foreground_color: rgb(255, 255, 255)
fields:
  primary:
    - { key: event, value: Night Concert, label: Event }
  secondary:
    - key: doors
      value: "2026-06-01T19:00:00+02:00"
      label: Doors
      date: { date_style: PKDateStyleShort, time_style: PKDateStyleShort }
barcodes:
  - { message: EVT-7, format: PKBarcodeFormatQR }
relevant_dates:
  - { date: "2026-06-01T18:30:00+02:00" }
assets:
  icon.png: icon.png
"#;

struct Workspace {
    dir: TempDir,
}

impl Workspace {
    fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let chain = TestChain::generate().unwrap();
        fs::write(dir.path().join("pass.yaml"), DEFINITION).unwrap();
        fs::write(dir.path().join("icon.png"), b"\x89PNG-icon").unwrap();
        fs::write(dir.path().join("cert.pem"), chain.leaf_pem().unwrap()).unwrap();
        fs::write(
            dir.path().join("key.pem"),
            chain.encrypted_key_pem(TEST_PASSWORD).unwrap(),
        )
        .unwrap();
        fs::write(dir.path().join("wwdr.pem"), chain.intermediate_pem().unwrap()).unwrap();
        Self { dir }
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    fn build_args(&self, password: &str) -> BuildArgs {
        BuildArgs {
            definition: self.path("pass.yaml"),
            certificate: self.path("cert.pem"),
            key: self.path("key.pem"),
            wwdr: self.path("wwdr.pem"),
            password: password.to_string(),
            output: self.path("out.pkpass"),
        }
    }
}

fn member(archive: &Path, name: &str) -> Vec<u8> {
    let bytes = fs::read(archive).unwrap();
    let mut zip = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
    let mut out = Vec::new();
    zip.by_name(name).unwrap().read_to_end(&mut out).unwrap();
    out
}

#[test]
fn build_writes_a_verifiable_archive() {
    let ws = Workspace::new();
    assert_eq!(run_build(&ws.build_args(TEST_PASSWORD)).unwrap(), 0);

    let output = ws.path("out.pkpass");
    assert!(check_archive(&output).unwrap().is_empty());
    assert_eq!(
        run_verify(&VerifyArgs {
            archive: output.clone()
        })
        .unwrap(),
        0
    );

    let doc: serde_json::Value = serde_json::from_slice(&member(&output, "pass.json")).unwrap();
    assert_eq!(doc["serialNumber"], "EVT-7");
    assert_eq!(doc["backgroundColor"], "rgb(20, 20, 60)");
    assert_eq!(doc["eventTicket"]["secondaryFields"][0]["dateStyle"], "PKDateStyleShort");
    assert_eq!(doc["relevantDate"], "2026-06-01T18:30:00+02:00");
    assert_eq!(member(&output, "icon.png"), b"\x89PNG-icon");
}

#[test]
fn wrong_password_writes_nothing() {
    let ws = Workspace::new();
    let err = run_build(&ws.build_args("not-the-password")).unwrap_err();
    assert!(format!("{err:#}").contains("signing credentials"));
    assert!(!ws.path("out.pkpass").exists());
}

#[test]
fn invalid_definition_writes_nothing() {
    let ws = Workspace::new();
    fs::write(
        ws.path("pass.yaml"),
        DEFINITION.replace("serial_number: EVT-7", "serial_number: \"\""),
    )
    .unwrap();
    assert!(run_build(&ws.build_args(TEST_PASSWORD)).is_err());
    assert!(!ws.path("out.pkpass").exists());
}

#[test]
fn tampered_member_fails_verification() {
    let ws = Workspace::new();
    run_build(&ws.build_args(TEST_PASSWORD)).unwrap();
    let output = ws.path("out.pkpass");

    let original = fs::read(&output).unwrap();
    let mut zip = zip::ZipArchive::new(Cursor::new(original)).unwrap();
    let rewritten = ws.path("tampered.pkpass");
    let mut writer = zip::ZipWriter::new(fs::File::create(&rewritten).unwrap());
    for i in 0..zip.len() {
        let mut entry = zip.by_index(i).unwrap();
        let name = entry.name().to_string();
        let mut bytes = Vec::new();
        entry.read_to_end(&mut bytes).unwrap();
        if name == "icon.png" {
            bytes.push(0);
        }
        writer
            .start_file(name, zip::write::SimpleFileOptions::default())
            .unwrap();
        std::io::Write::write_all(&mut writer, &bytes).unwrap();
    }
    writer.finish().unwrap();

    assert_eq!(
        run_verify(&VerifyArgs { archive: rewritten }).unwrap(),
        pkpass_cli::verify::EXIT_MISMATCH
    );
}

#[test]
fn manifest_command_needs_no_credentials() {
    let ws = Workspace::new();
    let args = ManifestArgs {
        definition: ws.path("pass.yaml"),
        pass_json: true,
    };
    assert_eq!(run_manifest(&args).unwrap(), 0);
}
