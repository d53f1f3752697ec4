//! NFC payload for contactless readers (Value Added Services).

use pkpass_core::ValidationError;
use serde_json::{Map, Value};

use crate::canonical::{CanonicalMap, Canonicalize};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Nfc {
    message: String,
    encryption_public_key: Option<String>,
    requires_authentication: bool,
}

impl Nfc {
    pub fn new(message: impl Into<String>) -> Result<Self, ValidationError> {
        let message = message.into();
        if message.is_empty() {
            return Err(ValidationError::EmptyAttribute("nfc message"));
        }
        Ok(Self {
            message,
            encryption_public_key: None,
            requires_authentication: false,
        })
    }

    /// Base64 X.509 public key used by the terminal to encrypt the payload.
    pub fn with_encryption_public_key(mut self, key: impl Into<String>) -> Self {
        self.encryption_public_key = Some(key.into());
        self
    }

    /// Require device authentication before the payload is released.
    pub fn with_requires_authentication(mut self, required: bool) -> Self {
        self.requires_authentication = required;
        self
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Canonicalize for Nfc {
    fn to_canonical(&self) -> Map<String, Value> {
        CanonicalMap::new()
            .insert("message", self.message.as_str())
            .text("encryptionPublicKey", self.encryption_public_key.as_deref())
            .flag("requiresAuthentication", self.requires_authentication)
            .into_map()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn minimal_payload() {
        let nfc = Nfc::new("ABC123").unwrap();
        assert_eq!(Value::Object(nfc.to_canonical()), json!({"message": "ABC123"}));
    }

    #[test]
    fn full_payload() {
        let nfc = Nfc::new("ABC123")
            .unwrap()
            .with_encryption_public_key("MDkwEwYHKoZIzj0CAQYIKoZIzj0DAQcDIgAC")
            .with_requires_authentication(true);
        let map = nfc.to_canonical();
        assert_eq!(map["requiresAuthentication"], true);
        assert_eq!(map["encryptionPublicKey"], "MDkwEwYHKoZIzj0CAQYIKoZIzj0DAQcDIgAC");
    }

    #[test]
    fn message_is_required() {
        assert_eq!(Nfc::new(""), Err(ValidationError::EmptyAttribute("nfc message")));
    }
}
