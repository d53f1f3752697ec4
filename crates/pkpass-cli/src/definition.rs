//! # Pass Definition Files
//!
//! A YAML description of one pass. Parsing is strict (`deny_unknown_fields`)
//! and the result is turned into a [`PassDocument`] only through the
//! document's public add-operations and setters, so file-driven input goes
//! through exactly the same validation as library callers.
//!
//! ```yaml
//! style: boardingPass
//! transit_type: PKTransitTypeTrain
//! pass_type_identifier: pass.com.example.rail
//! organization_name: Example Rail
//! team_identifier: A1B2C3D4E5
//! serial_number: TKT-0042
//! description: Regional train ticket
//! fields:
//!   primary:
//!     - { key: origin, value: AMS, label: Amsterdam }
//! barcodes:
//!   - { message: TKT-0042, format: PKBarcodeFormatQR }
//! assets:
//!   icon.png: images/icon.png
//! ```
//!
//! Asset paths are resolved against the directory holding the definition.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use serde_json::{Map, Value};

use pkpass_core::{hex_to_rgb, FileSource};
use pkpass_model::{
    Barcode, CurrencyAmount, DataDetectorType, DateFormat, EventType, Field, FieldKind,
    FieldSlot, FieldValue, IBeacon, Location, Nfc, NumberStyle, PassDocument, PassInformation,
    PersonNameComponents, Personalization, RelevantDate, Seat, SemanticTags, TransitStatus,
    TransitType, UpcomingEvent, WifiNetwork,
};

/// Root of a definition file.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PassDefinition {
    /// `boardingPass`, `coupon`, `eventTicket`, `generic` or `storeCard`.
    pub style: String,
    pub transit_type: Option<String>,
    pub pass_type_identifier: String,
    pub organization_name: String,
    pub team_identifier: String,
    pub serial_number: String,
    pub description: String,
    #[serde(default)]
    pub appearance: AppearanceDef,
    #[serde(default)]
    pub fields: FieldsDef,
    #[serde(default)]
    pub barcodes: Vec<BarcodeDef>,
    #[serde(default)]
    pub locations: Vec<LocationDef>,
    #[serde(default)]
    pub beacons: Vec<BeaconDef>,
    #[serde(default)]
    pub relevant_dates: Vec<DateDef>,
    pub expiration_date: Option<String>,
    #[serde(default)]
    pub voided: bool,
    pub sharing_prohibited: Option<bool>,
    pub grouping_identifier: Option<String>,
    pub app_launch_url: Option<String>,
    #[serde(default)]
    pub associated_store_identifiers: Vec<u64>,
    pub user_info: Option<Map<String, Value>>,
    pub web_service: Option<WebServiceDef>,
    pub nfc: Option<NfcDef>,
    pub personalization: Option<PersonalizationDef>,
    pub semantics: Option<SemanticsDef>,
    #[serde(default)]
    pub upcoming_events: Vec<UpcomingEventDef>,
    /// Archive member name → file path.
    #[serde(default)]
    pub assets: BTreeMap<String, PathBuf>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppearanceDef {
    pub background_color: Option<String>,
    pub foreground_color: Option<String>,
    pub label_color: Option<String>,
    pub logo_text: Option<String>,
    #[serde(default)]
    pub suppress_strip_shine: bool,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FieldsDef {
    pub header: Vec<FieldDef>,
    pub primary: Vec<FieldDef>,
    pub secondary: Vec<FieldDef>,
    pub auxiliary: Vec<FieldDef>,
    pub back: Vec<FieldDef>,
    pub additional_info: Vec<FieldDef>,
}

/// A YAML scalar that may be written as a number or as text.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ScalarDef {
    Integer(i64),
    Decimal(f64),
    Text(String),
}

impl ScalarDef {
    fn to_text(&self) -> String {
        match self {
            Self::Integer(i) => i.to_string(),
            Self::Decimal(d) => d.to_string(),
            Self::Text(s) => s.clone(),
        }
    }
}

impl From<ScalarDef> for FieldValue {
    fn from(value: ScalarDef) -> Self {
        match value {
            ScalarDef::Integer(i) => FieldValue::Integer(i),
            ScalarDef::Decimal(d) => FieldValue::Decimal(d),
            ScalarDef::Text(s) => FieldValue::Text(s),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldDef {
    pub key: String,
    pub value: ScalarDef,
    #[serde(default)]
    pub label: String,
    pub change_message: Option<String>,
    pub text_alignment: Option<String>,
    pub attributed_value: Option<String>,
    #[serde(default)]
    pub data_detector_types: Vec<String>,
    /// Makes this a date field.
    pub date: Option<DateFormatDef>,
    /// Makes this a number field, or sets the style of a currency field.
    pub number_style: Option<String>,
    /// Makes this a currency field.
    pub currency_code: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DateFormatDef {
    pub date_style: Option<String>,
    pub time_style: Option<String>,
    #[serde(default)]
    pub is_relative: bool,
    #[serde(default)]
    pub ignores_time_zone: bool,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BarcodeDef {
    pub message: String,
    pub format: Option<String>,
    pub encoding: Option<String>,
    pub alt_text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LocationDef {
    pub latitude: ScalarDef,
    pub longitude: ScalarDef,
    pub altitude: Option<ScalarDef>,
    pub max_distance: Option<ScalarDef>,
    pub relevant_text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BeaconDef {
    pub proximity_uuid: String,
    pub major: Option<u16>,
    pub minor: Option<u16>,
    pub relevant_text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DateDef {
    pub date: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl DateDef {
    fn to_relevant_date(&self) -> Result<RelevantDate> {
        Ok(RelevantDate::new(
            self.date.as_deref(),
            self.start_date.as_deref(),
            self.end_date.as_deref(),
        )?)
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WebServiceDef {
    pub url: String,
    pub authentication_token: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NfcDef {
    pub message: String,
    pub encryption_public_key: Option<String>,
    #[serde(default)]
    pub requires_authentication: bool,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PersonalizationDef {
    pub required_fields: Vec<String>,
    pub description: Option<String>,
    pub terms_and_conditions: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpcomingEventDef {
    pub identifier: String,
    pub name: String,
    pub date: Option<DateDef>,
}

/// The commonly used subset of semantic tags.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SemanticsDef {
    pub event_type: Option<String>,
    pub event_name: Option<String>,
    pub event_start_date: Option<String>,
    pub event_end_date: Option<String>,
    pub venue_name: Option<String>,
    pub venue_room: Option<String>,
    pub venue_entrance: Option<String>,
    pub genre: Option<String>,
    pub performer_names: Vec<String>,
    pub seats: Vec<SeatDef>,
    pub total_price: Option<AmountDef>,
    pub balance: Option<AmountDef>,
    pub wifi_access: Vec<WifiDef>,
    pub transit_provider: Option<String>,
    pub transit_status: Option<String>,
    pub confirmation_number: Option<String>,
    pub airline_code: Option<String>,
    pub flight_number: Option<u32>,
    pub departure_gate: Option<String>,
    pub membership_program_name: Option<String>,
    pub membership_program_number: Option<String>,
    pub passenger_name: Option<NameDef>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SeatDef {
    pub section: Option<String>,
    pub row: Option<String>,
    pub number: Option<String>,
    pub identifier: Option<String>,
    #[serde(rename = "type")]
    pub seat_type: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AmountDef {
    pub amount: ScalarDef,
    pub currency_code: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WifiDef {
    pub ssid: String,
    pub password: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NameDef {
    pub given_name: Option<String>,
    pub family_name: Option<String>,
    pub middle_name: Option<String>,
}

// ---------------------------------------------------------------------------
// Conversion
// ---------------------------------------------------------------------------

/// Read a definition file and build its document, loading assets relative
/// to the file's directory.
pub fn load_document(path: &Path) -> Result<PassDocument> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read pass definition: {}", path.display()))?;
    let definition = PassDefinition::from_yaml(&text)
        .with_context(|| format!("invalid pass definition: {}", path.display()))?;
    let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
    definition.into_document(base_dir)
}

impl PassDefinition {
    pub fn from_yaml(text: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(text)?)
    }

    pub fn into_document(self, base_dir: &Path) -> Result<PassDocument> {
        let transit_type = self
            .transit_type
            .as_deref()
            .map(str::parse::<TransitType>)
            .transpose()?;
        let info = PassInformation::from_json_key(&self.style, transit_type)
            .ok_or_else(|| anyhow!("unknown pass style {:?}", self.style))?;

        let mut pass = PassDocument::new(
            info,
            self.pass_type_identifier,
            self.organization_name,
            self.team_identifier,
        );
        pass.set_serial_number(self.serial_number);
        pass.set_description(self.description);

        apply_appearance(&mut pass, self.appearance)?;
        apply_fields(&mut pass, self.fields)?;

        for barcode in self.barcodes {
            pass.add_barcode(barcode_from(barcode)?);
        }
        for location in self.locations {
            pass.add_location(location_from(&location))?;
        }
        for beacon in self.beacons {
            let mut ibeacon = IBeacon::new(beacon.proximity_uuid)?;
            if let Some(major) = beacon.major {
                ibeacon = ibeacon.with_major(major);
            }
            if let Some(minor) = beacon.minor {
                ibeacon = ibeacon.with_minor(minor);
            }
            if let Some(text) = beacon.relevant_text {
                ibeacon = ibeacon.with_relevant_text(text);
            }
            pass.add_beacon(ibeacon)?;
        }
        for date in &self.relevant_dates {
            pass.add_relevant_date(date.to_relevant_date()?);
        }

        if let Some(date) = &self.expiration_date {
            pass.set_expiration_date(date)?;
        }
        pass.set_voided(self.voided);
        if let Some(prohibited) = self.sharing_prohibited {
            pass.set_sharing_prohibited(prohibited);
        }
        if let Some(identifier) = self.grouping_identifier {
            pass.set_grouping_identifier(identifier);
        }
        if let Some(url) = self.app_launch_url {
            pass.set_app_launch_url(url);
        }
        if !self.associated_store_identifiers.is_empty() {
            pass.set_associated_store_identifiers(self.associated_store_identifiers);
        }
        if let Some(user_info) = self.user_info {
            pass.set_user_info(user_info);
        }
        if let Some(service) = &self.web_service {
            pass.set_web_service(&service.url, &service.authentication_token)?;
        }
        if let Some(nfc) = self.nfc {
            let mut payload = Nfc::new(nfc.message)?.with_requires_authentication(nfc.requires_authentication);
            if let Some(key) = nfc.encryption_public_key {
                payload = payload.with_encryption_public_key(key);
            }
            pass.set_nfc(payload);
        }
        if let Some(def) = self.personalization {
            let mut personalization = Personalization::from_names(&def.required_fields)?;
            if let Some(description) = def.description {
                personalization = personalization.with_description(description);
            }
            if let Some(terms) = def.terms_and_conditions {
                personalization = personalization.with_terms_and_conditions(terms);
            }
            pass.set_personalization(personalization);
        }
        if let Some(semantics) = self.semantics {
            pass.set_semantics(semantics_from(semantics)?);
        }
        for event in self.upcoming_events {
            let mut upcoming = UpcomingEvent::new(event.identifier, event.name)?;
            if let Some(date) = &event.date {
                upcoming = upcoming.with_date(date.to_relevant_date()?);
            }
            pass.add_upcoming_event(upcoming);
        }

        for (name, path) in &self.assets {
            let source = FileSource::new(base_dir.join(path));
            pass.add_file_from(name, &source)?;
        }

        tracing::debug!(
            serial_number = pass.serial_number(),
            assets = pass.assets().len(),
            "built pass document from definition"
        );
        Ok(pass)
    }
}

/// Colors may be written as `rgb(r, g, b)` or as hex (`#RRGGBB`, `#RGB`).
fn color(value: &str) -> Result<String> {
    if value.starts_with('#') {
        Ok(hex_to_rgb(value)?)
    } else {
        Ok(value.to_string())
    }
}

fn apply_appearance(pass: &mut PassDocument, appearance: AppearanceDef) -> Result<()> {
    if let Some(value) = &appearance.background_color {
        pass.set_background_color(&color(value)?)?;
    }
    if let Some(value) = &appearance.foreground_color {
        pass.set_foreground_color(&color(value)?)?;
    }
    if let Some(value) = &appearance.label_color {
        pass.set_label_color(&color(value)?)?;
    }
    if let Some(text) = appearance.logo_text {
        pass.set_logo_text(text);
    }
    pass.set_suppress_strip_shine(appearance.suppress_strip_shine);
    Ok(())
}

fn apply_fields(pass: &mut PassDocument, fields: FieldsDef) -> Result<()> {
    let slots = [
        (FieldSlot::Header, fields.header),
        (FieldSlot::Primary, fields.primary),
        (FieldSlot::Secondary, fields.secondary),
        (FieldSlot::Auxiliary, fields.auxiliary),
        (FieldSlot::Back, fields.back),
        (FieldSlot::AdditionalInfo, fields.additional_info),
    ];
    for (slot, defs) in slots {
        for def in defs {
            pass.fields_mut().push(slot, field_from(def)?);
        }
    }
    Ok(())
}

fn field_from(def: FieldDef) -> Result<Field> {
    let number_style = def
        .number_style
        .as_deref()
        .map(str::parse::<NumberStyle>)
        .transpose()?;

    let mut field = match (&def.currency_code, &def.date) {
        (Some(code), _) => {
            let mut field = Field::currency(def.key, def.value, &def.label, code)?;
            if let (Some(style), FieldKind::Currency { number_style, .. }) =
                (number_style, &mut field.kind)
            {
                *number_style = style;
            }
            field
        }
        (None, Some(date)) => {
            let mut format = DateFormat {
                is_relative: date.is_relative,
                ignores_time_zone: date.ignores_time_zone,
                ..DateFormat::default()
            };
            if let Some(style) = &date.date_style {
                format.date_style = style.parse()?;
            }
            if let Some(style) = &date.time_style {
                format.time_style = style.parse()?;
            }
            Field::new(def.key, def.value, &def.label).with_kind(FieldKind::Date(format))
        }
        (None, None) => match number_style {
            Some(style) => {
                Field::new(def.key, def.value, &def.label).with_kind(FieldKind::Number(style))
            }
            None => Field::new(def.key, def.value, &def.label),
        },
    };

    if let Some(message) = def.change_message {
        field = field.with_change_message(message);
    }
    if let Some(alignment) = &def.text_alignment {
        field = field.with_alignment(alignment.parse()?);
    }
    if let Some(html) = def.attributed_value {
        field = field.with_attributed_value(html);
    }
    if !def.data_detector_types.is_empty() {
        let detectors = def
            .data_detector_types
            .iter()
            .map(|name| name.parse::<DataDetectorType>())
            .collect::<Result<Vec<_>, _>>()?;
        field = field.with_data_detectors(detectors);
    }
    Ok(field)
}

fn barcode_from(def: BarcodeDef) -> Result<Barcode> {
    let mut barcode = match &def.format {
        Some(format) => Barcode::parse(def.message, format)?,
        None => Barcode::new(def.message, Default::default())?,
    };
    if let Some(encoding) = def.encoding {
        barcode = barcode.with_encoding(encoding);
    }
    if let Some(alt_text) = def.alt_text {
        barcode = barcode.with_alt_text(alt_text);
    }
    Ok(barcode)
}

fn location_from(def: &LocationDef) -> Location {
    let altitude = def.altitude.as_ref().map(ScalarDef::to_text);
    let max_distance = def.max_distance.as_ref().map(ScalarDef::to_text);
    Location::from_raw(
        &def.latitude.to_text(),
        &def.longitude.to_text(),
        altitude.as_deref(),
        max_distance.as_deref(),
        def.relevant_text.as_deref(),
    )
}

fn semantics_from(def: SemanticsDef) -> Result<SemanticTags> {
    let amount = |def: Option<AmountDef>| -> Result<Option<CurrencyAmount>> {
        def.map(|a| CurrencyAmount::new(a.amount.to_text(), &a.currency_code))
            .transpose()
            .map_err(Into::into)
    };

    Ok(SemanticTags {
        event_type: def.event_type.as_deref().map(str::parse::<EventType>).transpose()?,
        event_name: def.event_name,
        event_start_date: def.event_start_date,
        event_end_date: def.event_end_date,
        venue_name: def.venue_name,
        venue_room: def.venue_room,
        venue_entrance: def.venue_entrance,
        genre: def.genre,
        performer_names: def.performer_names,
        seats: def
            .seats
            .into_iter()
            .map(|seat| Seat {
                seat_section: seat.section,
                seat_row: seat.row,
                seat_number: seat.number,
                seat_identifier: seat.identifier,
                seat_type: seat.seat_type,
                seat_description: seat.description,
            })
            .collect(),
        total_price: amount(def.total_price)?,
        balance: amount(def.balance)?,
        wifi_access: def
            .wifi_access
            .into_iter()
            .map(|wifi| WifiNetwork::new(wifi.ssid, wifi.password))
            .collect(),
        transit_provider: def.transit_provider,
        transit_status: def.transit_status.as_deref().map(str::parse::<TransitStatus>).transpose()?,
        confirmation_number: def.confirmation_number,
        airline_code: def.airline_code,
        flight_number: def.flight_number,
        departure_gate: def.departure_gate,
        membership_program_name: def.membership_program_name,
        membership_program_number: def.membership_program_number,
        passenger_name: def.passenger_name.map(|name| PersonNameComponents {
            given_name: name.given_name,
            family_name: name.family_name,
            middle_name: name.middle_name,
            ..PersonNameComponents::default()
        }),
        ..SemanticTags::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pkpass_model::Canonicalize;
    use serde_json::json;

    const MINIMAL: &str = r#"
style: coupon
pass_type_identifier: pass.com.example.coupon
organization_name: Example Corp
team_identifier: A1B2C3D4E5
serial_number: COUP-12345
description: 20% off coupon
"#;

    fn document(yaml: &str) -> Result<PassDocument> {
        PassDefinition::from_yaml(yaml)?.into_document(Path::new("."))
    }

    #[test]
    fn minimal_definition() {
        let pass = document(MINIMAL).unwrap();
        let map = pass.to_canonical();
        assert_eq!(map["coupon"], json!({}));
        assert_eq!(map["serialNumber"], "COUP-12345");
        assert!(pass.validate_for_assembly().is_ok());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let yaml = format!("{MINIMAL}colour: red\n");
        assert!(PassDefinition::from_yaml(&yaml).is_err());
    }

    #[test]
    fn unknown_style_is_rejected() {
        let yaml = MINIMAL.replace("style: coupon", "style: ticket");
        let err = document(&yaml).unwrap_err();
        assert!(err.to_string().contains("unknown pass style"));
    }

    #[test]
    fn fields_and_relevance() {
        let yaml = format!(
            "{MINIMAL}{}",
            r#"
fields:
  primary:
    - { key: offer, value: 20% Off, label: Special Offer }
  auxiliary:
    - key: expires
      value: "2026-12-31T23:59:59+00:00"
      label: Expires
      date: { date_style: PKDateStyleMedium, time_style: PKDateStyleNone }
    - { key: balance, value: 12.5, label: Balance, currency_code: USD }
    - { key: visits, value: 7, number_style: PKNumberStyleSpellOut }
barcodes:
  - { message: "1234567890", format: PKBarcodeFormatCode128, encoding: utf-8 }
locations:
  - { latitude: "37.33182", longitude: -122.03118, relevant_text: Store nearby }
  - { latitude: bad, longitude: 1 }
beacons:
  - { proximity_uuid: E2C56DB5-DFFB-48D2-B060-D0F5A71096E0, major: 1, minor: 2 }
relevant_dates:
  - { start_date: "2026-03-15T18:00:00-08:00", end_date: "2026-03-15T22:00:00-08:00" }
"#
        );
        let map = document(&yaml).unwrap().to_canonical();

        let aux = &map["coupon"]["auxiliaryFields"];
        assert_eq!(aux[0]["dateStyle"], "PKDateStyleMedium");
        assert_eq!(aux[0]["timeStyle"], "PKDateStyleNone");
        assert_eq!(aux[1]["currencyCode"], "USD");
        assert_eq!(aux[1]["value"], 12.5);
        assert_eq!(aux[2]["numberStyle"], "PKNumberStyleSpellOut");
        assert_eq!(aux[2]["value"], 7);

        assert_eq!(map["barcode"]["format"], "PKBarcodeFormatPDF417");
        assert_eq!(map["locations"][0]["latitude"], 37.33182);
        assert_eq!(map["locations"][1]["latitude"], 0.0);
        assert_eq!(map["beacons"][0]["major"], 1);
        assert_eq!(map["relevantDate"], "2026-03-15T18:00:00-08:00");
    }

    #[test]
    fn validation_errors_surface() {
        let bad_color = format!("{MINIMAL}appearance: {{ background_color: red }}\n");
        assert!(document(&bad_color).is_err());

        let bad_hex = format!("{MINIMAL}appearance: {{ label_color: \"#GG0000\" }}\n");
        assert!(document(&bad_hex).is_err());

        let bad_token = format!(
            "{MINIMAL}web_service: {{ url: \"https://example.com\", authentication_token: short }}\n"
        );
        assert!(document(&bad_token).is_err());

        let both_dates = format!(
            "{MINIMAL}relevant_dates:\n  - {{ date: \"2026-03-15T19:00:00-08:00\", start_date: \"2026-03-15T18:00:00-08:00\" }}\n"
        );
        assert!(document(&both_dates).is_err());

        let unknown_personalization =
            format!("{MINIMAL}personalization: {{ required_fields: [PKPassPersonalizationFieldAge] }}\n");
        assert!(document(&unknown_personalization).is_err());
    }

    #[test]
    fn hex_colors_are_converted() {
        let yaml = format!(
            "{MINIMAL}appearance: {{ background_color: \"#FF6E00\", foreground_color: \"rgb(0, 0, 0)\", label_color: \"#FFF\" }}\n"
        );
        let map = document(&yaml).unwrap().to_canonical();
        assert_eq!(map["backgroundColor"], "rgb(255, 110, 0)");
        assert_eq!(map["foregroundColor"], "rgb(0, 0, 0)");
        assert_eq!(map["labelColor"], "rgb(255, 255, 255)");
    }

    #[test]
    fn nested_objects() {
        let yaml = format!(
            "{MINIMAL}{}",
            r#"
nfc: { message: VAS-PAYLOAD, requires_authentication: true }
personalization:
  required_fields: [PKPassPersonalizationFieldName, PKPassPersonalizationFieldEmailAddress]
  description: Join the club
semantics:
  event_name: Summer Sale
  total_price: { amount: "19.99", currency_code: USD }
  seats:
    - { section: A, row: "3", type: Box }
upcoming_events:
  - identifier: sale-2
    name: Winter Sale
    date: { date: "2026-12-01T09:00:00+00:00" }
user_info: { customerId: C-1, tier: 2 }
sharing_prohibited: false
"#
        );
        let map = document(&yaml).unwrap().to_canonical();
        assert_eq!(map["nfc"]["requiresAuthentication"], true);
        assert_eq!(
            map["personalization"]["requiredPersonalizationFields"],
            json!([
                "PKPassPersonalizationFieldName",
                "PKPassPersonalizationFieldEmailAddress"
            ])
        );
        assert_eq!(map["semantics"]["eventName"], "Summer Sale");
        assert_eq!(
            map["semantics"]["totalPrice"],
            json!({"amount": "19.99", "currencyCode": "USD"})
        );
        assert_eq!(map["semantics"]["seats"][0]["seatType"], "Box");
        assert_eq!(map["upcomingEventInfo"][0]["identifier"], "sale-2");
        assert_eq!(map["userInfo"], json!({"customerId": "C-1", "tier": 2}));
        assert_eq!(map["sharingProhibited"], false);
    }

    #[test]
    fn assets_resolve_against_definition_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("images")).unwrap();
        std::fs::write(dir.path().join("images/icon.png"), b"icon").unwrap();
        let path = dir.path().join("pass.yaml");
        std::fs::write(
            &path,
            format!("{MINIMAL}assets:\n  icon.png: images/icon.png\n"),
        )
        .unwrap();

        let pass = load_document(&path).unwrap();
        assert_eq!(pass.assets()["icon.png"], b"icon");
    }

    #[test]
    fn missing_asset_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pass.yaml");
        std::fs::write(&path, format!("{MINIMAL}assets:\n  icon.png: nope.png\n")).unwrap();
        let err = load_document(&path).unwrap_err();
        assert!(format!("{err:#}").contains("nope.png"));
    }
}
