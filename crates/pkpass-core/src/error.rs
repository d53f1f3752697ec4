//! # Error Types — Validation and Canonicalization
//!
//! Structured errors for the checks that run before any hashing or signing.
//! All errors use `thiserror` for derive-based `Display` and `Error`.
//!
//! ## Design
//!
//! - Validation errors are raised at the point of construction or
//!   add-operation, never deferred to assembly.
//! - Each variant names the violated rule and carries the offending input
//!   so callers can report it without re-deriving context.

use thiserror::Error;

/// A rejected input: the model refused to construct or accept a value.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// A required identity field is empty.
    #[error("{field} is required and must be a non-empty string")]
    MissingRequired {
        /// Name of the required field (e.g. `serial_number`).
        field: &'static str,
    },

    /// Barcode message was empty.
    #[error("barcode message cannot be empty")]
    EmptyBarcodeMessage,

    /// Barcode format string is not one of the recognized formats.
    #[error("invalid barcode format: {0:?}; expected one of PKBarcodeFormatPDF417, PKBarcodeFormatQR, PKBarcodeFormatAztec, PKBarcodeFormatCode128")]
    UnknownBarcodeFormat(String),

    /// An enumerated string constant was not recognized.
    #[error("unknown {kind} value: {value:?}")]
    UnknownConstant {
        /// The constant family (e.g. `transit type`).
        kind: &'static str,
        /// The rejected input.
        value: String,
    },

    /// Too many entries of a bounded collection.
    #[error("maximum {limit} {collection} allowed per pass")]
    CardinalityExceeded {
        /// Collection name (`locations`, `beacons`).
        collection: &'static str,
        /// The limit that was hit.
        limit: usize,
    },

    /// A relevant date mixed a single `date` with a `start_date`/`end_date` interval.
    #[error("cannot specify both 'date' and 'start_date/end_date'")]
    RelevantDateConflict,

    /// A relevant date interval was missing one of its bounds.
    #[error("both 'start_date' and 'end_date' must be provided together")]
    RelevantDateIncomplete,

    /// A relevant date was given neither a `date` nor an interval.
    #[error("must provide either 'date' or both 'start_date' and 'end_date'")]
    RelevantDateMissing,

    /// Color string did not match `rgb(r, g, b)`.
    #[error("invalid RGB format: {0:?}; expected rgb(r, g, b)")]
    InvalidRgbColor(String),

    /// Hex color string was malformed.
    #[error("invalid hex color: {0:?}")]
    InvalidHexColor(String),

    /// Currency code is not three uppercase ASCII letters.
    #[error("invalid ISO 4217 currency code: {0:?}")]
    InvalidCurrencyCode(String),

    /// Date string did not match `YYYY-MM-DDTHH:MM:SS±HH:MM`.
    #[error("invalid ISO 8601 date format: {0:?}")]
    InvalidDate(String),

    /// Timezone offset did not match `±HH:MM` within the real-world range.
    #[error("timezone offset must be in format '+HH:MM' or '-HH:MM', got: {0:?}")]
    InvalidTimezoneOffset(String),

    /// Web service authentication token was too short.
    #[error("authenticationToken must be at least {min} characters, got {actual}")]
    AuthenticationTokenTooShort {
        /// Minimum accepted length.
        min: usize,
        /// Length of the rejected token.
        actual: usize,
    },

    /// Personalization was requested without any required fields.
    #[error("required personalization fields cannot be empty")]
    EmptyPersonalization,

    /// A personalization field name was not recognized.
    #[error("invalid personalization field: {0:?}")]
    UnknownPersonalizationField(String),

    /// A required model attribute (other than the identity fields) was empty.
    #[error("{0} cannot be empty")]
    EmptyAttribute(&'static str),

    /// An asset was given a name the bundle writes itself.
    #[error("asset name {0:?} is reserved")]
    ReservedAssetName(String),
}

/// Error during canonical serialization.
#[derive(Error, Debug)]
pub enum CanonicalizationError {
    /// JSON serialization failed.
    #[error("serialization failed: {0}")]
    SerializationFailed(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_required_names_the_field() {
        let err = ValidationError::MissingRequired {
            field: "serial_number",
        };
        assert!(err.to_string().contains("serial_number"));
    }

    #[test]
    fn cardinality_display_includes_limit() {
        let err = ValidationError::CardinalityExceeded {
            collection: "locations",
            limit: 10,
        };
        assert_eq!(err.to_string(), "maximum 10 locations allowed per pass");
    }

    #[test]
    fn token_error_reports_lengths() {
        let err = ValidationError::AuthenticationTokenTooShort { min: 16, actual: 5 };
        let msg = err.to_string();
        assert!(msg.contains("16"));
        assert!(msg.contains('5'));
    }

    #[test]
    fn serde_error_converts_into_canonicalization_error() {
        let bad = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = CanonicalizationError::from(bad);
        assert!(err.to_string().starts_with("serialization failed"));
    }
}
