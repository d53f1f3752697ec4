//! # Barcodes
//!
//! A barcode is validated at construction: the message must be non-empty and
//! the format must be one the wallet renders. Equality is structural.

use pkpass_core::ValidationError;
use serde_json::{Map, Value};

use crate::canonical::{CanonicalMap, Canonicalize};
use crate::constants::BarcodeFormat;

/// IANA charset used when none is given.
pub const DEFAULT_MESSAGE_ENCODING: &str = "iso-8859-1";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Barcode {
    format: BarcodeFormat,
    message: String,
    message_encoding: String,
    alt_text: Option<String>,
}

impl Barcode {
    /// Create a barcode with the default `iso-8859-1` message encoding.
    pub fn new(message: impl Into<String>, format: BarcodeFormat) -> Result<Self, ValidationError> {
        let message = message.into();
        if message.is_empty() {
            return Err(ValidationError::EmptyBarcodeMessage);
        }
        Ok(Self {
            format,
            message,
            message_encoding: DEFAULT_MESSAGE_ENCODING.to_string(),
            alt_text: None,
        })
    }

    /// Create a barcode from a format identifier such as `PKBarcodeFormatQR`.
    pub fn parse(message: impl Into<String>, format: &str) -> Result<Self, ValidationError> {
        Self::new(message, format.parse()?)
    }

    pub fn with_encoding(mut self, encoding: impl Into<String>) -> Self {
        self.message_encoding = encoding.into();
        self
    }

    /// Text shown beneath the symbol, typically a human-readable message.
    pub fn with_alt_text(mut self, alt_text: impl Into<String>) -> Self {
        self.alt_text = Some(alt_text.into());
        self
    }

    pub fn format(&self) -> BarcodeFormat {
        self.format
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn message_encoding(&self) -> &str {
        &self.message_encoding
    }

    pub fn alt_text(&self) -> Option<&str> {
        self.alt_text.as_deref()
    }

    /// Whether [`to_legacy`](Self::to_legacy) swaps the format out.
    pub fn needs_legacy_substitute(&self) -> bool {
        !self.format.is_legacy()
    }

    /// The barcode as a client that only reads the singular `barcode` key
    /// must see it.
    ///
    /// Legacy formats are returned unchanged. Any other format is replaced
    /// by PDF417 carrying the same message, encoding and alt text.
    pub fn to_legacy(&self) -> Barcode {
        if !self.needs_legacy_substitute() {
            return self.clone();
        }
        Barcode {
            format: BarcodeFormat::Pdf417,
            ..self.clone()
        }
    }
}

impl Canonicalize for Barcode {
    fn to_canonical(&self) -> Map<String, Value> {
        CanonicalMap::new()
            .insert("format", self.format.as_str())
            .insert("message", self.message.as_str())
            .insert("messageEncoding", self.message_encoding.as_str())
            .text("altText", self.alt_text.as_deref())
            .into_map()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn defaults_to_latin1_encoding() {
        let barcode = Barcode::new("123456789", BarcodeFormat::Pdf417).unwrap();
        assert_eq!(barcode.message_encoding(), "iso-8859-1");
        assert_eq!(
            Value::Object(barcode.to_canonical()),
            json!({
                "format": "PKBarcodeFormatPDF417",
                "message": "123456789",
                "messageEncoding": "iso-8859-1"
            })
        );
    }

    #[test]
    fn empty_message_is_rejected() {
        assert_eq!(
            Barcode::new("", BarcodeFormat::Qr),
            Err(ValidationError::EmptyBarcodeMessage)
        );
    }

    #[test]
    fn parse_rejects_unknown_format() {
        assert!(matches!(
            Barcode::parse("x", "PKBarcodeFormatDataMatrix"),
            Err(ValidationError::UnknownBarcodeFormat(_))
        ));
        let qr = Barcode::parse("x", "PKBarcodeFormatQR").unwrap();
        assert_eq!(qr.format(), BarcodeFormat::Qr);
    }

    #[test]
    fn alt_text_and_encoding_project() {
        let barcode = Barcode::new("会員番号: 12345", BarcodeFormat::Qr)
            .unwrap()
            .with_encoding("utf-8")
            .with_alt_text("ID: 12345");
        let map = barcode.to_canonical();
        assert_eq!(map["messageEncoding"], "utf-8");
        assert_eq!(map["altText"], "ID: 12345");
    }

    #[test]
    fn legacy_formats_pass_through() {
        let barcode = Barcode::new("abc", BarcodeFormat::Aztec).unwrap();
        assert_eq!(barcode.to_legacy(), barcode);
    }

    #[test]
    fn code128_legacy_becomes_pdf417() {
        let barcode = Barcode::new("1234567890", BarcodeFormat::Code128)
            .unwrap()
            .with_encoding("utf-8")
            .with_alt_text("Member 1234567890");
        let legacy = barcode.to_legacy();
        assert_eq!(legacy.format(), BarcodeFormat::Pdf417);
        assert_eq!(legacy.message(), "1234567890");
        assert_eq!(legacy.message_encoding(), "utf-8");
        assert_eq!(legacy.alt_text(), Some("Member 1234567890"));
    }

    #[test]
    fn only_non_legacy_formats_need_substitute() {
        for &format in BarcodeFormat::ALL {
            let barcode = Barcode::new("abc", format).unwrap();
            assert_eq!(barcode.needs_legacy_substitute(), !format.is_legacy());
            assert!(barcode.to_legacy().format().is_legacy());
        }
    }

    #[test]
    fn equality_is_structural() {
        let a = Barcode::new("m", BarcodeFormat::Qr).unwrap().with_alt_text("t");
        let b = Barcode::new("m", BarcodeFormat::Qr).unwrap().with_alt_text("t");
        let c = Barcode::new("m", BarcodeFormat::Qr).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
