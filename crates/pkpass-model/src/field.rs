//! # Display Fields
//!
//! A [`Field`] is one key/value cell on the face or back of a pass. The
//! value is not type-checked against the field kind: the client interprets
//! it at display time, so a date field holding free text is accepted here
//! and rendered as text on the device.
//!
//! Field keys must be unique across every slot of a pass. This is not
//! enforced; a duplicate key makes the client silently keep one of the two.

use std::str::FromStr;

use pkpass_core::{validate_currency_code, ValidationError};
use serde_json::{Map, Value};

use crate::canonical::{CanonicalMap, Canonicalize};
use crate::constants::{Alignment, DataDetectorType, DateStyle, NumberStyle};
use crate::semantics::SemanticTags;

/// The raw value of a field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Integer(i64),
    /// Non-finite values encode as JSON `null`.
    Decimal(f64),
}

impl FieldValue {
    fn to_json(&self) -> Option<Value> {
        match self {
            Self::Text(s) if s.is_empty() => None,
            Self::Text(s) => Some(Value::from(s.as_str())),
            Self::Integer(n) => Some(Value::from(*n)),
            Self::Decimal(x) => Some(Value::from(*x)),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<i64> for FieldValue {
    fn from(n: i64) -> Self {
        Self::Integer(n)
    }
}

impl From<i32> for FieldValue {
    fn from(n: i32) -> Self {
        Self::Integer(i64::from(n))
    }
}

impl From<u32> for FieldValue {
    fn from(n: u32) -> Self {
        Self::Integer(i64::from(n))
    }
}

impl From<f64> for FieldValue {
    fn from(x: f64) -> Self {
        Self::Decimal(x)
    }
}

/// Interpretation settings for date fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateFormat {
    pub date_style: DateStyle,
    pub time_style: DateStyle,
    /// Render relative to now ("in 2 hours").
    pub is_relative: bool,
    /// Show the time in the pass's zone rather than the device's.
    pub ignores_time_zone: bool,
}

impl Default for DateFormat {
    fn default() -> Self {
        Self {
            date_style: DateStyle::Short,
            time_style: DateStyle::Short,
            is_relative: false,
            ignores_time_zone: false,
        }
    }
}

/// An ISO 4217 currency code. Only three uppercase ASCII letters construct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyCode(String);

impl CurrencyCode {
    pub fn new(code: &str) -> Result<Self, ValidationError> {
        validate_currency_code(code)?;
        Ok(Self(code.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for CurrencyCode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// How the client interprets a field's value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FieldKind {
    #[default]
    Plain,
    Date(DateFormat),
    Number(NumberStyle),
    Currency {
        number_style: NumberStyle,
        currency_code: Option<CurrencyCode>,
    },
}

/// One display cell.
///
/// Presentation hints are public so they can be adjusted through the
/// `&mut Field` returned by the slot add-operations.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub key: String,
    pub value: FieldValue,
    pub label: Option<String>,
    /// Alert text shown when the value changes; `%@` is replaced by the new value.
    pub change_message: Option<String>,
    pub text_alignment: Option<Alignment>,
    /// HTML-formatted value; overrides `value` on the back of the pass.
    pub attributed_value: Option<String>,
    pub data_detector_types: Vec<DataDetectorType>,
    pub semantics: Option<SemanticTags>,
    pub kind: FieldKind,
}

impl Field {
    /// A plain text or number field. An empty label is treated as absent.
    pub fn new(key: impl Into<String>, value: impl Into<FieldValue>, label: &str) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            label: (!label.is_empty()).then(|| label.to_string()),
            change_message: None,
            text_alignment: None,
            attributed_value: None,
            data_detector_types: Vec::new(),
            semantics: None,
            kind: FieldKind::Plain,
        }
    }

    /// A date field with short date and time styles.
    pub fn date(key: impl Into<String>, value: impl Into<FieldValue>, label: &str) -> Self {
        Self::new(key, value, label).with_kind(FieldKind::Date(DateFormat::default()))
    }

    /// A number field with decimal style.
    pub fn number(key: impl Into<String>, value: impl Into<FieldValue>, label: &str) -> Self {
        Self::new(key, value, label).with_kind(FieldKind::Number(NumberStyle::Decimal))
    }

    /// A currency field. An empty code is allowed and omitted from the
    /// projection; a non-empty code must be three uppercase letters.
    pub fn currency(
        key: impl Into<String>,
        value: impl Into<FieldValue>,
        label: &str,
        currency_code: &str,
    ) -> Result<Self, ValidationError> {
        let currency_code = if currency_code.is_empty() {
            None
        } else {
            Some(CurrencyCode::new(currency_code)?)
        };
        Ok(Self::new(key, value, label).with_kind(FieldKind::Currency {
            number_style: NumberStyle::Decimal,
            currency_code,
        }))
    }

    pub fn with_kind(mut self, kind: FieldKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_change_message(mut self, message: impl Into<String>) -> Self {
        self.change_message = Some(message.into());
        self
    }

    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.text_alignment = Some(alignment);
        self
    }

    pub fn with_attributed_value(mut self, html: impl Into<String>) -> Self {
        self.attributed_value = Some(html.into());
        self
    }

    pub fn with_data_detectors(mut self, detectors: Vec<DataDetectorType>) -> Self {
        self.data_detector_types = detectors;
        self
    }

    pub fn with_semantics(mut self, semantics: SemanticTags) -> Self {
        self.semantics = Some(semantics);
        self
    }
}

impl Canonicalize for Field {
    fn to_canonical(&self) -> Map<String, Value> {
        let detectors = self
            .data_detector_types
            .iter()
            .map(DataDetectorType::as_str)
            .collect::<Vec<_>>();

        let map = CanonicalMap::new()
            .insert("key", self.key.as_str())
            .opt("value", self.value.to_json())
            .text("label", self.label.as_deref())
            .text("changeMessage", self.change_message.as_deref())
            .opt("textAlignment", self.text_alignment.map(|a| a.as_str()))
            .text("attributedValue", self.attributed_value.as_deref())
            .strings("dataDetectorTypes", &detectors)
            .nested("semantics", self.semantics.as_ref());

        let map = match &self.kind {
            FieldKind::Plain => map,
            FieldKind::Date(format) => map
                .insert("dateStyle", format.date_style.as_str())
                .insert("timeStyle", format.time_style.as_str())
                .insert("isRelative", format.is_relative)
                .flag("ignoresTimeZone", format.ignores_time_zone),
            FieldKind::Number(style) => map.insert("numberStyle", style.as_str()),
            FieldKind::Currency {
                number_style,
                currency_code,
            } => map
                .insert("numberStyle", number_style.as_str())
                .text("currencyCode", currency_code.as_ref().map(CurrencyCode::as_str)),
        };
        map.into_map()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn plain_field_projection() {
        let field = Field::new("offer", "20% off", "Special Offer");
        assert_eq!(
            Value::Object(field.to_canonical()),
            json!({"key": "offer", "value": "20% off", "label": "Special Offer"})
        );
    }

    #[test]
    fn empty_label_and_value_are_omitted() {
        let field = Field::new("blank", "", "");
        assert_eq!(Value::Object(field.to_canonical()), json!({"key": "blank"}));
    }

    #[test]
    fn numeric_values_keep_their_type() {
        let map = Field::new("points", 1500, "Points").to_canonical();
        assert_eq!(map["value"], 1500);
        let map = Field::number("score", 95.5, "").to_canonical();
        assert_eq!(map["value"], 95.5);
        assert_eq!(map["numberStyle"], "PKNumberStyleDecimal");
    }

    #[test]
    fn presentation_hints() {
        let field = Field::new("phone", "+1 555 0100", "Support")
            .with_change_message("Support line changed to %@")
            .with_alignment(Alignment::Center)
            .with_data_detectors(vec![DataDetectorType::PhoneNumber]);
        let map = field.to_canonical();
        assert_eq!(map["changeMessage"], "Support line changed to %@");
        assert_eq!(map["textAlignment"], "PKTextAlignmentCenter");
        assert_eq!(
            map["dataDetectorTypes"],
            json!(["PKDataDetectorTypePhoneNumber"])
        );
    }

    #[test]
    fn date_field_defaults() {
        let map = Field::date("departure", "2026-02-12T15:30:00-08:00", "Departs").to_canonical();
        assert_eq!(map["dateStyle"], "PKDateStyleShort");
        assert_eq!(map["timeStyle"], "PKDateStyleShort");
        assert_eq!(map["isRelative"], false);
        assert!(!map.contains_key("ignoresTimeZone"));
    }

    #[test]
    fn date_field_ignores_time_zone_only_when_true() {
        let field = Field::date("doors", "2026-02-12T19:00:00-08:00", "").with_kind(
            FieldKind::Date(DateFormat {
                date_style: DateStyle::Medium,
                time_style: DateStyle::None,
                is_relative: true,
                ignores_time_zone: true,
            }),
        );
        let map = field.to_canonical();
        assert_eq!(map["dateStyle"], "PKDateStyleMedium");
        assert_eq!(map["timeStyle"], "PKDateStyleNone");
        assert_eq!(map["isRelative"], true);
        assert_eq!(map["ignoresTimeZone"], true);
    }

    #[test]
    fn currency_field() {
        let map = Field::currency("balance", 1234.56, "Balance", "USD")
            .unwrap()
            .to_canonical();
        assert_eq!(map["currencyCode"], "USD");
        assert_eq!(map["numberStyle"], "PKNumberStyleDecimal");

        let map = Field::currency("balance", 10, "", "").unwrap().to_canonical();
        assert!(!map.contains_key("currencyCode"));

        assert_eq!(
            Field::currency("balance", 10, "", "dollars"),
            Err(ValidationError::InvalidCurrencyCode("dollars".to_string()))
        );
    }

    #[test]
    fn currency_kind_only_holds_checked_codes() {
        assert_eq!(
            "usd".parse::<CurrencyCode>(),
            Err(ValidationError::InvalidCurrencyCode("usd".to_string()))
        );
        assert!(CurrencyCode::new("EURO").is_err());

        let field = Field::new("total", 42, "Total").with_kind(FieldKind::Currency {
            number_style: NumberStyle::Percent,
            currency_code: Some("JPY".parse().unwrap()),
        });
        let map = field.to_canonical();
        assert_eq!(map["currencyCode"], "JPY");
        assert_eq!(map["numberStyle"], "PKNumberStylePercent");
    }

    #[test]
    fn field_semantics_nest() {
        let field = Field::new("event", "Concert", "").with_semantics(SemanticTags {
            event_name: Some("Concert".into()),
            ..SemanticTags::default()
        });
        assert_eq!(field.to_canonical()["semantics"], json!({"eventName": "Concert"}));
    }
}
