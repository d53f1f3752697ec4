//! # Pass Document
//!
//! [`PassDocument`] is the root aggregate: identity metadata, appearance,
//! the style-specific fields, relevance triggers, optional nested objects,
//! and the binary assets that travel with the pass.
//!
//! ## Lifecycle
//!
//! A document is constructed once and then mutated only through its
//! add-operations and setters. Each of those validates its input on the
//! spot, so an invalid value is rejected before any hashing or signing
//! starts. The identity checks that depend on the finished document (serial
//! number and description present) run in [`PassDocument::validate_for_assembly`].
//!
//! ## Legacy Keys
//!
//! Clients that predate multi-value support read a singular `barcode` and
//! `relevantDate`. Whenever the array forms are present, the projection also
//! emits the singular form derived from the first-attached entry:
//!
//! - `barcode`: the first barcode, with PDF417 substituted when its format
//!   is one legacy clients cannot render. This is lossy on purpose.
//! - `relevantDate`: the first entry's date, otherwise its start, otherwise
//!   its end.
//!
//! "First" is insertion order, never chronological order.

use std::collections::BTreeMap;

use pkpass_core::{
    layout, validate_authentication_token, validate_beacon_limits, validate_description,
    validate_iso8601_date, validate_location_limits, validate_rgb_color, validate_serial_number,
    ByteSource, CanonicalBytes, CanonicalizationError, ValidationError,
};
use serde_json::{Map, Value};

use crate::barcode::Barcode;
use crate::canonical::{CanonicalMap, Canonicalize};
use crate::constants::BarcodeFormat;
use crate::error::AssetError;
use crate::location::{IBeacon, Location};
use crate::nfc::Nfc;
use crate::pass_info::{PassFields, PassInformation};
use crate::personalization::Personalization;
use crate::relevant_date::RelevantDate;
use crate::semantics::SemanticTags;
use crate::upcoming::UpcomingEvent;

/// The only `formatVersion` the client accepts.
pub const FORMAT_VERSION: u32 = 1;

/// Update endpoint and the token the client presents to it.
#[derive(Debug, Clone, PartialEq, Eq)]
struct WebService {
    url: String,
    authentication_token: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PassDocument {
    pass_information: PassInformation,

    // Identity
    pass_type_identifier: String,
    organization_name: String,
    team_identifier: String,
    serial_number: String,
    description: String,

    // Appearance
    background_color: Option<String>,
    foreground_color: Option<String>,
    label_color: Option<String>,
    logo_text: Option<String>,
    suppress_strip_shine: bool,

    // Relevance
    barcodes: Vec<Barcode>,
    locations: Vec<Location>,
    beacons: Vec<IBeacon>,
    relevant_dates: Vec<RelevantDate>,

    // Behavior
    web_service: Option<WebService>,
    associated_store_identifiers: Vec<u64>,
    app_launch_url: Option<String>,
    expiration_date: Option<String>,
    voided: bool,
    user_info: Option<Map<String, Value>>,
    grouping_identifier: Option<String>,
    sharing_prohibited: Option<bool>,

    // Nested objects
    nfc: Option<Nfc>,
    semantics: Option<SemanticTags>,
    personalization: Option<Personalization>,
    upcoming_events: Vec<UpcomingEvent>,

    assets: BTreeMap<String, Vec<u8>>,
    digests: BTreeMap<String, String>,
}

impl PassDocument {
    /// Start a document. Serial number and description are set afterwards and
    /// checked at assembly.
    pub fn new(
        pass_information: PassInformation,
        pass_type_identifier: impl Into<String>,
        organization_name: impl Into<String>,
        team_identifier: impl Into<String>,
    ) -> Self {
        Self {
            pass_information,
            pass_type_identifier: pass_type_identifier.into(),
            organization_name: organization_name.into(),
            team_identifier: team_identifier.into(),
            serial_number: String::new(),
            description: String::new(),
            background_color: None,
            foreground_color: None,
            label_color: None,
            logo_text: None,
            suppress_strip_shine: false,
            barcodes: Vec::new(),
            locations: Vec::new(),
            beacons: Vec::new(),
            relevant_dates: Vec::new(),
            web_service: None,
            associated_store_identifiers: Vec::new(),
            app_launch_url: None,
            expiration_date: None,
            voided: false,
            user_info: None,
            grouping_identifier: None,
            sharing_prohibited: None,
            nfc: None,
            semantics: None,
            personalization: None,
            upcoming_events: Vec::new(),
            assets: BTreeMap::new(),
            digests: BTreeMap::new(),
        }
    }

    // -----------------------------------------------------------------------
    // Identity
    // -----------------------------------------------------------------------

    pub fn set_serial_number(&mut self, serial_number: impl Into<String>) {
        self.serial_number = serial_number.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    pub fn serial_number(&self) -> &str {
        &self.serial_number
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn pass_type_identifier(&self) -> &str {
        &self.pass_type_identifier
    }

    pub fn pass_information(&self) -> &PassInformation {
        &self.pass_information
    }

    /// The style's field slots, for the `add_*_field` operations.
    pub fn fields_mut(&mut self) -> &mut PassFields {
        self.pass_information.fields_mut()
    }

    // -----------------------------------------------------------------------
    // Relevance add-operations
    // -----------------------------------------------------------------------

    /// Append a barcode. The first barcode also drives the legacy `barcode` key.
    pub fn add_barcode(&mut self, barcode: Barcode) {
        if self.barcodes.is_empty() && barcode.needs_legacy_substitute() {
            tracing::warn!(
                format = %barcode.format(),
                substitute = %BarcodeFormat::Pdf417,
                "barcode format unsupported by legacy clients; substituting in singular barcode"
            );
        }
        self.barcodes.push(barcode);
    }

    /// Append a location; fails once the pass already holds the maximum.
    pub fn add_location(&mut self, location: Location) -> Result<(), ValidationError> {
        validate_location_limits(self.locations.len() + 1)?;
        self.locations.push(location);
        Ok(())
    }

    /// Append a beacon; fails once the pass already holds the maximum.
    pub fn add_beacon(&mut self, beacon: IBeacon) -> Result<(), ValidationError> {
        validate_beacon_limits(self.beacons.len() + 1)?;
        self.beacons.push(beacon);
        Ok(())
    }

    pub fn add_relevant_date(&mut self, date: RelevantDate) {
        self.relevant_dates.push(date);
    }

    /// Append a single-instant relevant date given as text.
    pub fn add_relevant_date_str(&mut self, date: &str) -> Result<(), ValidationError> {
        self.add_relevant_date(RelevantDate::at(date)?);
        Ok(())
    }

    pub fn add_upcoming_event(&mut self, event: UpcomingEvent) {
        self.upcoming_events.push(event);
    }

    pub fn barcodes(&self) -> &[Barcode] {
        &self.barcodes
    }

    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    pub fn beacons(&self) -> &[IBeacon] {
        &self.beacons
    }

    pub fn relevant_dates(&self) -> &[RelevantDate] {
        &self.relevant_dates
    }

    // -----------------------------------------------------------------------
    // Deprecated single-value aliases
    // -----------------------------------------------------------------------

    #[deprecated(since = "0.1.0", note = "use add_barcode")]
    pub fn set_barcode(&mut self, barcode: Barcode) {
        tracing::warn!("set_barcode is deprecated; use add_barcode");
        self.add_barcode(barcode);
    }

    #[deprecated(since = "0.1.0", note = "use add_location")]
    pub fn set_locations(&mut self, locations: Vec<Location>) -> Result<(), ValidationError> {
        tracing::warn!("set_locations is deprecated; use add_location");
        locations
            .into_iter()
            .try_for_each(|location| self.add_location(location))
    }

    #[deprecated(since = "0.1.0", note = "use add_beacon")]
    pub fn set_ibeacons(&mut self, beacons: Vec<IBeacon>) -> Result<(), ValidationError> {
        tracing::warn!("set_ibeacons is deprecated; use add_beacon");
        beacons
            .into_iter()
            .try_for_each(|beacon| self.add_beacon(beacon))
    }

    #[deprecated(since = "0.1.0", note = "use add_relevant_date")]
    pub fn set_relevant_date(&mut self, date: &str) -> Result<(), ValidationError> {
        tracing::warn!("set_relevant_date is deprecated; use add_relevant_date");
        self.add_relevant_date_str(date)
    }

    // -----------------------------------------------------------------------
    // Appearance
    // -----------------------------------------------------------------------

    pub fn set_background_color(&mut self, color: &str) -> Result<(), ValidationError> {
        validate_rgb_color(color)?;
        self.background_color = Some(color.to_string());
        Ok(())
    }

    pub fn set_foreground_color(&mut self, color: &str) -> Result<(), ValidationError> {
        validate_rgb_color(color)?;
        self.foreground_color = Some(color.to_string());
        Ok(())
    }

    pub fn set_label_color(&mut self, color: &str) -> Result<(), ValidationError> {
        validate_rgb_color(color)?;
        self.label_color = Some(color.to_string());
        Ok(())
    }

    pub fn set_logo_text(&mut self, text: impl Into<String>) {
        self.logo_text = Some(text.into());
    }

    pub fn set_suppress_strip_shine(&mut self, suppress: bool) {
        self.suppress_strip_shine = suppress;
    }

    // -----------------------------------------------------------------------
    // Behavior
    // -----------------------------------------------------------------------

    /// Register the update web service. URL and token are always emitted
    /// together.
    pub fn set_web_service(&mut self, url: &str, authentication_token: &str) -> Result<(), ValidationError> {
        if url.is_empty() {
            return Err(ValidationError::EmptyAttribute("web service URL"));
        }
        validate_authentication_token(authentication_token)?;
        self.web_service = Some(WebService {
            url: url.to_string(),
            authentication_token: authentication_token.to_string(),
        });
        Ok(())
    }

    /// App Store identifiers of companion apps.
    pub fn set_associated_store_identifiers(&mut self, identifiers: Vec<u64>) {
        self.associated_store_identifiers = identifiers;
    }

    pub fn set_app_launch_url(&mut self, url: impl Into<String>) {
        self.app_launch_url = Some(url.into());
    }

    pub fn set_expiration_date(&mut self, date: &str) -> Result<(), ValidationError> {
        validate_iso8601_date(date)?;
        self.expiration_date = Some(date.to_string());
        Ok(())
    }

    pub fn set_voided(&mut self, voided: bool) {
        self.voided = voided;
    }

    /// Arbitrary data for companion apps; the client does not display it.
    pub fn set_user_info(&mut self, user_info: Map<String, Value>) {
        self.user_info = Some(user_info);
    }

    pub fn set_grouping_identifier(&mut self, identifier: impl Into<String>) {
        self.grouping_identifier = Some(identifier.into());
    }

    /// Emitted whenever set, including `false`.
    pub fn set_sharing_prohibited(&mut self, prohibited: bool) {
        self.sharing_prohibited = Some(prohibited);
    }

    pub fn set_nfc(&mut self, nfc: Nfc) {
        self.nfc = Some(nfc);
    }

    pub fn set_semantics(&mut self, semantics: SemanticTags) {
        self.semantics = Some(semantics);
    }

    pub fn set_personalization(&mut self, personalization: Personalization) {
        self.personalization = Some(personalization);
    }

    // -----------------------------------------------------------------------
    // Assets
    // -----------------------------------------------------------------------

    /// Attach an asset (`icon.png`, `logo@2x.png`, `en.lproj/pass.strings`, ...).
    ///
    /// Adding a name twice replaces the earlier bytes.
    pub fn add_file(&mut self, name: &str, bytes: Vec<u8>) -> Result<(), ValidationError> {
        if name.is_empty() {
            return Err(ValidationError::EmptyAttribute("asset name"));
        }
        if layout::is_reserved(name) {
            return Err(ValidationError::ReservedAssetName(name.to_string()));
        }
        self.assets.insert(name.to_string(), bytes);
        Ok(())
    }

    /// Attach an asset by reading it fully from `source`.
    pub fn add_file_from(&mut self, name: &str, source: &dyn ByteSource) -> Result<(), AssetError> {
        let bytes = source.read_bytes().map_err(|source_err| AssetError::Read {
            name: name.to_string(),
            origin: source.describe(),
            source: source_err,
        })?;
        self.add_file(name, bytes)?;
        Ok(())
    }

    /// Attached assets in name order.
    pub fn assets(&self) -> &BTreeMap<String, Vec<u8>> {
        &self.assets
    }

    // -----------------------------------------------------------------------
    // Assembly support
    // -----------------------------------------------------------------------

    /// Checks that can only run on the finished document.
    pub fn validate_for_assembly(&self) -> Result<(), ValidationError> {
        validate_serial_number(&self.serial_number)?;
        validate_description(&self.description)?;
        Ok(())
    }

    /// Encode the document to the bytes that are hashed and signed.
    pub fn canonical_bytes(&self) -> Result<CanonicalBytes, CanonicalizationError> {
        let bytes = CanonicalBytes::from_value(&Value::Object(self.to_canonical()))?;
        tracing::debug!(
            serial_number = %self.serial_number,
            bytes = bytes.len(),
            "encoded pass document"
        );
        Ok(bytes)
    }

    /// Store the manifest digests computed during the latest assembly.
    pub fn record_digests(&mut self, digests: BTreeMap<String, String>) {
        self.digests = digests;
    }

    /// Digests from the latest assembly; empty before the first one.
    pub fn digests(&self) -> &BTreeMap<String, String> {
        &self.digests
    }
}

impl Canonicalize for PassDocument {
    fn to_canonical(&self) -> Map<String, Value> {
        let legacy_barcode = self.barcodes.first().map(Barcode::to_legacy);
        let legacy_date = self.relevant_dates.first().and_then(RelevantDate::legacy_date);

        let mut map = CanonicalMap::new()
            .insert("description", self.description.as_str())
            .insert("formatVersion", FORMAT_VERSION)
            .insert("organizationName", self.organization_name.as_str())
            .insert("passTypeIdentifier", self.pass_type_identifier.as_str())
            .insert("serialNumber", self.serial_number.as_str())
            .insert("teamIdentifier", self.team_identifier.as_str())
            .insert("suppressStripShine", self.suppress_strip_shine)
            .insert(
                self.pass_information.json_key(),
                Value::Object(self.pass_information.to_canonical()),
            )
            .list("barcodes", &self.barcodes)
            .nested("barcode", legacy_barcode.as_ref())
            .list("relevantDates", &self.relevant_dates)
            .text("relevantDate", legacy_date)
            .list("locations", &self.locations)
            .list("beacons", &self.beacons)
            .text("backgroundColor", self.background_color.as_deref())
            .text("foregroundColor", self.foreground_color.as_deref())
            .text("labelColor", self.label_color.as_deref())
            .text("logoText", self.logo_text.as_deref());

        if let Some(service) = &self.web_service {
            map = map
                .insert("webServiceURL", service.url.as_str())
                .insert("authenticationToken", service.authentication_token.as_str());
        }
        if !self.associated_store_identifiers.is_empty() {
            map = map.insert(
                "associatedStoreIdentifiers",
                self.associated_store_identifiers.clone(),
            );
        }
        if let Some(user_info) = self.user_info.as_ref().filter(|info| !info.is_empty()) {
            map = map.insert("userInfo", Value::Object(user_info.clone()));
        }

        map.text("appLaunchURL", self.app_launch_url.as_deref())
            .text("expirationDate", self.expiration_date.as_deref())
            .flag("voided", self.voided)
            .text("groupingIdentifier", self.grouping_identifier.as_deref())
            .opt("sharingProhibited", self.sharing_prohibited)
            .nested("nfc", self.nfc.as_ref())
            .nested("semantics", self.semantics.as_ref())
            .nested("personalization", self.personalization.as_ref())
            .list("upcomingEventInfo", &self.upcoming_events)
            .into_map()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{PersonalizationField, TransitType};
    use pkpass_core::MemorySource;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tracing::{Event, Level, Subscriber};
    use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

    struct WarnCounter(Arc<AtomicUsize>);

    impl<S: Subscriber> Layer<S> for WarnCounter {
        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            if *event.metadata().level() == Level::WARN {
                self.0.fetch_add(1, Ordering::SeqCst);
            }
        }
    }

    /// Run `f` and return how many warnings it logged.
    fn warnings_during(f: impl FnOnce()) -> usize {
        let count = Arc::new(AtomicUsize::new(0));
        let subscriber = tracing_subscriber::registry().with(WarnCounter(count.clone()));
        tracing::subscriber::with_default(subscriber, f);
        count.load(Ordering::SeqCst)
    }

    const EVENT: &str = "2026-03-15T19:00:00-08:00";
    const DOORS: &str = "2026-03-15T18:00:00-08:00";
    const CLOSE: &str = "2026-03-15T22:00:00-08:00";

    fn coupon() -> PassDocument {
        let mut doc = PassDocument::new(
            PassInformation::coupon(),
            "pass.com.example.coupon",
            "Example Corp",
            "A1B2C3D4E5",
        );
        doc.set_serial_number("COUP-12345");
        doc.set_description("20% off coupon");
        doc.fields_mut()
            .add_primary_field("offer", "20% Off", "Special Offer");
        doc
    }

    #[test]
    fn required_keys_are_always_present() {
        let map = coupon().to_canonical();
        assert_eq!(map["description"], "20% off coupon");
        assert_eq!(map["formatVersion"], 1);
        assert_eq!(map["organizationName"], "Example Corp");
        assert_eq!(map["passTypeIdentifier"], "pass.com.example.coupon");
        assert_eq!(map["serialNumber"], "COUP-12345");
        assert_eq!(map["teamIdentifier"], "A1B2C3D4E5");
        assert_eq!(map["suppressStripShine"], false);
        assert_eq!(
            map["coupon"],
            json!({"primaryFields": [{"key": "offer", "value": "20% Off", "label": "Special Offer"}]})
        );
        assert_eq!(map.len(), 8);
    }

    #[test]
    fn variant_key_follows_style() {
        let doc = PassDocument::new(
            PassInformation::boarding_pass(TransitType::Bus),
            "pass.t",
            "Org",
            "TEAM",
        );
        let map = doc.to_canonical();
        assert_eq!(map["boardingPass"], json!({"transitType": "PKTransitTypeBus"}));
        assert!(!map.contains_key("coupon"));
    }

    #[test]
    fn legacy_barcode_reuses_legacy_format() {
        let mut doc = coupon();
        doc.add_barcode(Barcode::new("12345", BarcodeFormat::Qr).unwrap());
        doc.add_barcode(Barcode::new("67890", BarcodeFormat::Code128).unwrap());
        let map = doc.to_canonical();
        assert_eq!(map["barcodes"].as_array().map(Vec::len), Some(2));
        assert_eq!(map["barcode"], map["barcodes"][0]);
    }

    #[test]
    fn legacy_barcode_substitutes_pdf417_for_code128() {
        let mut doc = coupon();
        doc.add_barcode(
            Barcode::new("1234567890", BarcodeFormat::Code128)
                .unwrap()
                .with_encoding("utf-8"),
        );
        let map = doc.to_canonical();
        assert_eq!(
            map["barcodes"],
            json!([{
                "format": "PKBarcodeFormatCode128",
                "message": "1234567890",
                "messageEncoding": "utf-8"
            }])
        );
        assert_eq!(
            map["barcode"],
            json!({
                "format": "PKBarcodeFormatPDF417",
                "message": "1234567890",
                "messageEncoding": "utf-8"
            })
        );
    }

    #[test]
    fn legacy_substitution_warns_once_at_add_time() {
        let mut doc = coupon();
        let added = warnings_during(|| {
            doc.add_barcode(Barcode::new("1234567890", BarcodeFormat::Code128).unwrap());
            doc.add_barcode(Barcode::new("abc", BarcodeFormat::Code128).unwrap());
        });
        assert_eq!(added, 1);

        let projected = warnings_during(|| {
            for _ in 0..3 {
                let map = doc.to_canonical();
                assert_eq!(map["barcode"]["format"], "PKBarcodeFormatPDF417");
            }
            doc.canonical_bytes().unwrap();
        });
        assert_eq!(projected, 0);
    }

    #[test]
    fn legacy_first_barcode_adds_silently() {
        let mut doc = coupon();
        let warnings = warnings_during(|| {
            doc.add_barcode(Barcode::new("12345", BarcodeFormat::Qr).unwrap());
            doc.add_barcode(Barcode::new("67890", BarcodeFormat::Code128).unwrap());
        });
        assert_eq!(warnings, 0);
    }

    #[test]
    fn no_barcodes_means_no_barcode_keys() {
        let map = coupon().to_canonical();
        assert!(!map.contains_key("barcodes"));
        assert!(!map.contains_key("barcode"));
    }

    #[test]
    fn legacy_relevant_date_uses_first_interval_start() {
        let mut doc = coupon();
        doc.add_relevant_date(RelevantDate::between(DOORS, CLOSE).unwrap());
        doc.add_relevant_date(RelevantDate::at(EVENT).unwrap());
        let map = doc.to_canonical();
        assert_eq!(map["relevantDate"], DOORS);
        assert_eq!(
            map["relevantDates"],
            json!([{"startDate": DOORS, "endDate": CLOSE}, {"date": EVENT}])
        );
    }

    #[test]
    fn legacy_relevant_date_prefers_single_date() {
        let mut doc = coupon();
        doc.add_relevant_date_str(EVENT).unwrap();
        assert_eq!(doc.to_canonical()["relevantDate"], EVENT);
    }

    #[test]
    fn first_means_first_attached_not_earliest() {
        let mut doc = coupon();
        doc.add_relevant_date_str(CLOSE).unwrap();
        doc.add_relevant_date_str(DOORS).unwrap();
        assert_eq!(doc.to_canonical()["relevantDate"], CLOSE);
    }

    #[test]
    fn eleventh_location_is_rejected() {
        let mut doc = coupon();
        for i in 0..10 {
            doc.add_location(Location::new(f64::from(i), 0.0)).unwrap();
        }
        assert_eq!(
            doc.add_location(Location::new(1.0, 1.0)),
            Err(ValidationError::CardinalityExceeded {
                collection: "locations",
                limit: 10
            })
        );
        assert_eq!(doc.locations().len(), 10);
    }

    #[test]
    fn eleventh_beacon_is_rejected() {
        let mut doc = coupon();
        for major in 0..10u16 {
            doc.add_beacon(IBeacon::new("E2C56DB5-DFFB-48D2-B060-D0F5A71096E0").unwrap().with_major(major))
                .unwrap();
        }
        assert!(matches!(
            doc.add_beacon(IBeacon::new("E2C56DB5-DFFB-48D2-B060-D0F5A71096E0").unwrap()),
            Err(ValidationError::CardinalityExceeded { collection: "beacons", .. })
        ));
        assert_eq!(doc.beacons().len(), 10);
    }

    #[test]
    fn web_service_emits_both_keys() {
        let mut doc = coupon();
        assert!(matches!(
            doc.set_web_service("https://example.com/passes", "short"),
            Err(ValidationError::AuthenticationTokenTooShort { .. })
        ));
        assert!(!doc.to_canonical().contains_key("webServiceURL"));

        doc.set_web_service("https://example.com/passes", "my_secure_token_12345")
            .unwrap();
        let map = doc.to_canonical();
        assert_eq!(map["webServiceURL"], "https://example.com/passes");
        assert_eq!(map["authenticationToken"], "my_secure_token_12345");
    }

    #[test]
    fn voided_only_when_true_but_sharing_whenever_set() {
        let mut doc = coupon();
        doc.set_voided(false);
        doc.set_sharing_prohibited(false);
        let map = doc.to_canonical();
        assert!(!map.contains_key("voided"));
        assert_eq!(map["sharingProhibited"], false);

        doc.set_voided(true);
        assert_eq!(doc.to_canonical()["voided"], true);
    }

    #[test]
    fn colors_are_validated() {
        let mut doc = coupon();
        assert!(doc.set_background_color("#FF0000").is_err());
        doc.set_background_color("rgb(255, 110, 0)").unwrap();
        doc.set_foreground_color("rgb(0, 0, 0)").unwrap();
        doc.set_label_color("rgb(255,255,255)").unwrap();
        let map = doc.to_canonical();
        assert_eq!(map["backgroundColor"], "rgb(255, 110, 0)");
        assert_eq!(map["labelColor"], "rgb(255,255,255)");
    }

    #[test]
    fn optional_metadata_keys() {
        let mut doc = coupon();
        doc.set_logo_text("Example");
        doc.set_expiration_date("2026-12-31T23:59:59+00:00").unwrap();
        assert!(doc.set_expiration_date("2026-12-31").is_err());
        doc.set_associated_store_identifiers(vec![284_882_215]);
        doc.set_app_launch_url("example://pass/COUP-12345");
        doc.set_grouping_identifier("summer-sale");
        let mut info = Map::new();
        info.insert("customerId".into(), json!("C-1"));
        doc.set_user_info(info);
        let map = doc.to_canonical();
        assert_eq!(map["logoText"], "Example");
        assert_eq!(map["expirationDate"], "2026-12-31T23:59:59+00:00");
        assert_eq!(map["associatedStoreIdentifiers"], json!([284_882_215]));
        assert_eq!(map["appLaunchURL"], "example://pass/COUP-12345");
        assert_eq!(map["groupingIdentifier"], "summer-sale");
        assert_eq!(map["userInfo"], json!({"customerId": "C-1"}));
    }

    #[test]
    fn nested_objects_only_when_set() {
        let mut doc = coupon();
        let map = doc.to_canonical();
        for key in ["nfc", "semantics", "personalization", "upcomingEventInfo", "locations", "beacons"] {
            assert!(!map.contains_key(key), "{key} should be absent");
        }

        doc.set_nfc(Nfc::new("VAS").unwrap());
        doc.set_personalization(Personalization::new(vec![PersonalizationField::Name]).unwrap());
        doc.set_semantics(SemanticTags {
            event_name: Some("Sale".into()),
            ..SemanticTags::default()
        });
        doc.add_upcoming_event(UpcomingEvent::new("e1", "Next sale").unwrap());
        let map = doc.to_canonical();
        assert_eq!(map["nfc"], json!({"message": "VAS"}));
        assert_eq!(map["semantics"], json!({"eventName": "Sale"}));
        assert_eq!(
            map["personalization"],
            json!({"requiredPersonalizationFields": ["PKPassPersonalizationFieldName"]})
        );
        assert_eq!(
            map["upcomingEventInfo"],
            json!([{"identifier": "e1", "name": "Next sale"}])
        );
    }

    #[test]
    fn assembly_requires_serial_and_description() {
        let mut doc = coupon();
        assert!(doc.validate_for_assembly().is_ok());
        doc.set_serial_number("");
        assert_eq!(
            doc.validate_for_assembly(),
            Err(ValidationError::MissingRequired {
                field: "serial_number"
            })
        );
        doc.set_serial_number("S");
        doc.set_description("");
        assert_eq!(
            doc.validate_for_assembly(),
            Err(ValidationError::MissingRequired {
                field: "description"
            })
        );
    }

    #[test]
    fn canonical_bytes_are_stable() {
        let mut doc = coupon();
        doc.add_barcode(Barcode::new("12345", BarcodeFormat::Code128).unwrap());
        doc.add_location(Location::new(37.33182, -122.03118)).unwrap();
        let a = doc.canonical_bytes().unwrap();
        let b = doc.canonical_bytes().unwrap();
        assert_eq!(a, b);
        assert!(a.as_str().starts_with(r#"{"barcode":{"format":"PKBarcodeFormatPDF417""#));
    }

    #[test]
    fn assets_reject_reserved_names() {
        let mut doc = coupon();
        assert_eq!(
            doc.add_file("manifest.json", vec![1]),
            Err(ValidationError::ReservedAssetName("manifest.json".into()))
        );
        assert!(doc.add_file("", vec![1]).is_err());
        doc.add_file("icon.png", vec![1, 2, 3]).unwrap();
        doc.add_file_from("logo.png", &MemorySource::new(vec![4, 5]))
            .unwrap();
        let names: Vec<_> = doc.assets().keys().cloned().collect();
        assert_eq!(names, ["icon.png", "logo.png"]);
    }

    #[test]
    #[allow(deprecated)]
    fn deprecated_aliases_forward_to_add_operations() {
        let mut doc = coupon();
        doc.set_barcode(Barcode::new("legacy", BarcodeFormat::Pdf417).unwrap());
        doc.set_locations(vec![Location::new(1.0, 2.0), Location::new(3.0, 4.0)])
            .unwrap();
        doc.set_ibeacons(vec![IBeacon::new("uuid").unwrap()]).unwrap();
        doc.set_relevant_date(EVENT).unwrap();
        assert_eq!(doc.barcodes().len(), 1);
        assert_eq!(doc.locations().len(), 2);
        assert_eq!(doc.beacons().len(), 1);
        assert_eq!(doc.relevant_dates().len(), 1);

        let too_many = (0..11).map(|_| Location::new(0.0, 0.0)).collect();
        let mut fresh = coupon();
        assert!(fresh.set_locations(too_many).is_err());
    }

    #[test]
    fn recorded_digests_replace_previous() {
        let mut doc = coupon();
        assert!(doc.digests().is_empty());
        let mut digests = BTreeMap::new();
        digests.insert("pass.json".to_string(), "00".repeat(20));
        doc.record_digests(digests.clone());
        assert_eq!(doc.digests(), &digests);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        fn format() -> impl Strategy<Value = BarcodeFormat> {
            prop::sample::select(BarcodeFormat::ALL.to_vec())
        }

        proptest! {
            #[test]
            fn encoding_is_deterministic(
                serial in "[A-Z0-9-]{1,24}",
                description in "\\PC{1,40}",
                messages in prop::collection::vec(("[ -~]{1,32}", format()), 0..4),
            ) {
                let mut doc = coupon();
                doc.set_serial_number(serial);
                doc.set_description(description);
                for (message, format) in messages {
                    doc.add_barcode(Barcode::new(message, format).unwrap());
                }
                prop_assert_eq!(doc.canonical_bytes().unwrap(), doc.clone().canonical_bytes().unwrap());
            }

            #[test]
            fn legacy_barcode_is_always_legacy_format(message in "[ -~]{1,32}", format in format()) {
                let mut doc = coupon();
                doc.add_barcode(Barcode::new(message.clone(), format).unwrap());
                let map = doc.to_canonical();
                let legacy = map["barcode"]["format"].as_str().unwrap();
                prop_assert!(BarcodeFormat::from_wire(legacy).unwrap().is_legacy());
                prop_assert_eq!(map["barcode"]["message"].as_str(), Some(message.as_str()));
            }
        }
    }
}
