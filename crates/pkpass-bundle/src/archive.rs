//! # Archive Assembler
//!
//! A `.pkpass` file is a plain zip archive. Members are written in a fixed
//! order (signature, manifest, document, then assets by name) with a fixed
//! timestamp and fixed permissions. Identical inputs therefore give
//! identical archive bytes.

use std::io::{Seek, Write};

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, DateTime, ZipWriter};

use crate::error::BundleError;

/// Streams archive members into any seekable sink.
pub struct ArchiveWriter<W: Write + Seek> {
    zip: ZipWriter<W>,
    entries: usize,
}

fn member_options() -> SimpleFileOptions {
    SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .last_modified_time(DateTime::default())
        .unix_permissions(0o644)
}

impl<W: Write + Seek> ArchiveWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            zip: ZipWriter::new(sink),
            entries: 0,
        }
    }

    /// Append one member.
    pub fn add(&mut self, name: &str, bytes: &[u8]) -> Result<(), BundleError> {
        self.zip.start_file(name, member_options())?;
        self.zip.write_all(bytes)?;
        self.entries += 1;
        Ok(())
    }

    pub fn entries(&self) -> usize {
        self.entries
    }

    /// Write the central directory and hand the sink back.
    pub fn finish(self) -> Result<W, BundleError> {
        let entries = self.entries;
        let sink = self.zip.finish()?;
        tracing::debug!(entries, "finished archive");
        Ok(sink)
    }
}
