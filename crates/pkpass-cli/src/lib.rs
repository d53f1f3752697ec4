//! # pkpass-cli
//!
//! Subcommand implementations behind the `pkpass` binary. Each `run_*`
//! function takes its parsed arguments and returns a process exit code,
//! leaving logging setup and error reporting to `main`.
//!
//! - `build`: definition + credentials → signed `.pkpass` archive.
//! - `manifest`: print the manifest (and optionally `pass.json`) a
//!   definition would produce, without signing.
//! - `verify`: recompute every member digest of an existing archive and
//!   compare it with the archived manifest.

pub mod build;
pub mod definition;
pub mod manifest;
pub mod verify;
