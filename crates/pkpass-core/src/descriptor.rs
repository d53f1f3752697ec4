//! Library descriptor constants.

/// Identifies this library in logs and CLI output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Descriptor {
    pub name: &'static str,
    pub version: &'static str,
    pub author: &'static str,
}

pub const DESCRIPTOR: Descriptor = Descriptor {
    name: "pkpass",
    version: env!("CARGO_PKG_VERSION"),
    author: "Primedigital Global",
};

impl std::fmt::Display for Descriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.name, self.version)
    }
}
