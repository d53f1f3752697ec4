//! Errors raised while attaching assets to a pass document.

use pkpass_core::ValidationError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AssetError {
    /// The asset name was rejected.
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    /// The asset source could not be read. The underlying error is kept
    /// unchanged.
    #[error("failed to read asset {name:?} from {origin}: {source}")]
    Read {
        name: String,
        origin: String,
        #[source]
        source: std::io::Error,
    },
}
