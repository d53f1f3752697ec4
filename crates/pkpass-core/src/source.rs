//! # Byte Sources
//!
//! Assets and signing credentials arrive either as in-memory buffers or as
//! filesystem paths. [`ByteSource`] unifies both so callers never need to
//! care where the bytes live. Reads happen only when the bundler asks.

use std::io;
use std::path::{Path, PathBuf};

/// Anything that can yield a complete byte buffer on demand.
pub trait ByteSource: std::fmt::Debug {
    /// Read the full contents.
    fn read_bytes(&self) -> io::Result<Vec<u8>>;

    /// Short human-readable origin, used in error messages and logs.
    fn describe(&self) -> String;
}

/// Bytes read from a file at assembly time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSource(PathBuf);

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    pub fn path(&self) -> &Path {
        &self.0
    }
}

impl ByteSource for FileSource {
    fn read_bytes(&self) -> io::Result<Vec<u8>> {
        std::fs::read(&self.0)
    }

    fn describe(&self) -> String {
        self.0.display().to_string()
    }
}

/// Bytes already held in memory.
#[derive(Clone, PartialEq, Eq)]
pub struct MemorySource(Vec<u8>);

impl MemorySource {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }
}

impl std::fmt::Debug for MemorySource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "MemorySource({} bytes)", self.0.len())
    }
}

impl ByteSource for MemorySource {
    fn read_bytes(&self) -> io::Result<Vec<u8>> {
        Ok(self.0.clone())
    }

    fn describe(&self) -> String {
        format!("<memory: {} bytes>", self.0.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn file_source_reads_contents() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"\x89PNG fake").unwrap();
        let source = FileSource::new(file.path());
        assert_eq!(source.read_bytes().unwrap(), b"\x89PNG fake");
        assert_eq!(source.describe(), file.path().display().to_string());
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = FileSource::new(dir.path().join("absent.png"));
        let err = source.read_bytes().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn memory_source_debug_hides_contents() {
        let source = MemorySource::new(b"secret".to_vec());
        assert_eq!(format!("{source:?}"), "MemorySource(6 bytes)");
        assert_eq!(source.read_bytes().unwrap(), b"secret");
    }
}
