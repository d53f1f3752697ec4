//! # Semantic Tags
//!
//! Machine-readable metadata the client uses for suggestions (do-not-disturb
//! during an event, flight status, venue directions). Nothing here is rendered
//! directly. Semantic tags attach either to the whole pass or to a single
//! field.
//!
//! Every attribute is optional and no attribute constrains another; the
//! projection simply lists each key once. Dates are free text in the same
//! `YYYY-MM-DDTHH:MM:SS±HH:MM` form used elsewhere but are not validated,
//! matching the client which ignores malformed semantic dates.

use pkpass_core::{validate_currency_code, ValidationError};
use serde_json::{Map, Value};

use crate::canonical::{CanonicalMap, Canonicalize};
use crate::constants::{EventType, TransitStatus};

/// A coordinate pair inside semantic tags.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SemanticLocation {
    pub latitude: f64,
    pub longitude: f64,
}

impl SemanticLocation {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl Canonicalize for SemanticLocation {
    fn to_canonical(&self) -> Map<String, Value> {
        CanonicalMap::new()
            .insert("latitude", self.latitude)
            .insert("longitude", self.longitude)
            .into_map()
    }
}

/// A monetary amount. The amount is carried as text so that decimal
/// precision survives encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyAmount {
    amount: String,
    currency_code: String,
}

impl CurrencyAmount {
    /// Rejects currency codes that are not three uppercase letters.
    pub fn new(amount: impl ToString, currency_code: &str) -> Result<Self, ValidationError> {
        validate_currency_code(currency_code)?;
        Ok(Self {
            amount: amount.to_string(),
            currency_code: currency_code.to_string(),
        })
    }

    pub fn amount(&self) -> &str {
        &self.amount
    }

    pub fn currency_code(&self) -> &str {
        &self.currency_code
    }
}

impl Canonicalize for CurrencyAmount {
    fn to_canonical(&self) -> Map<String, Value> {
        CanonicalMap::new()
            .insert("amount", self.amount.as_str())
            .insert("currencyCode", self.currency_code.as_str())
            .into_map()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Seat {
    pub seat_section: Option<String>,
    pub seat_row: Option<String>,
    pub seat_number: Option<String>,
    pub seat_identifier: Option<String>,
    pub seat_type: Option<String>,
    pub seat_description: Option<String>,
}

impl Canonicalize for Seat {
    fn to_canonical(&self) -> Map<String, Value> {
        CanonicalMap::new()
            .text("seatSection", self.seat_section.as_deref())
            .text("seatRow", self.seat_row.as_deref())
            .text("seatNumber", self.seat_number.as_deref())
            .text("seatIdentifier", self.seat_identifier.as_deref())
            .text("seatType", self.seat_type.as_deref())
            .text("seatDescription", self.seat_description.as_deref())
            .into_map()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonNameComponents {
    pub given_name: Option<String>,
    pub family_name: Option<String>,
    pub middle_name: Option<String>,
    pub name_prefix: Option<String>,
    pub name_suffix: Option<String>,
    pub nickname: Option<String>,
    pub phonetic_representation: Option<String>,
}

impl Canonicalize for PersonNameComponents {
    fn to_canonical(&self) -> Map<String, Value> {
        CanonicalMap::new()
            .text("givenName", self.given_name.as_deref())
            .text("familyName", self.family_name.as_deref())
            .text("middleName", self.middle_name.as_deref())
            .text("namePrefix", self.name_prefix.as_deref())
            .text("nameSuffix", self.name_suffix.as_deref())
            .text("nickname", self.nickname.as_deref())
            .text("phoneticRepresentation", self.phonetic_representation.as_deref())
            .into_map()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WifiNetwork {
    pub ssid: String,
    pub password: String,
}

impl WifiNetwork {
    pub fn new(ssid: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            ssid: ssid.into(),
            password: password.into(),
        }
    }
}

impl Canonicalize for WifiNetwork {
    fn to_canonical(&self) -> Map<String, Value> {
        CanonicalMap::new()
            .insert("ssid", self.ssid.as_str())
            .insert("password", self.password.as_str())
            .into_map()
    }
}

/// The semantic attribute bag.
///
/// Construct with `SemanticTags::default()` and assign the attributes you
/// need; unset attributes are omitted from the projection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SemanticTags {
    // Event
    pub event_type: Option<EventType>,
    pub event_name: Option<String>,
    pub event_start_date: Option<String>,
    pub event_end_date: Option<String>,
    /// Seconds.
    pub event_duration: Option<f64>,
    pub silence_requested: Option<bool>,

    // Venue
    pub venue_name: Option<String>,
    pub venue_location: Option<SemanticLocation>,
    pub venue_entrance: Option<String>,
    pub venue_phone_number: Option<String>,
    pub venue_room: Option<String>,
    pub seats: Vec<Seat>,

    // Sports
    pub home_team_abbreviation: Option<String>,
    pub home_team_location: Option<String>,
    pub home_team_name: Option<String>,
    pub away_team_abbreviation: Option<String>,
    pub away_team_location: Option<String>,
    pub away_team_name: Option<String>,
    pub sport_name: Option<String>,
    pub league_name: Option<String>,
    pub league_abbreviation: Option<String>,

    // Performance
    pub genre: Option<String>,
    pub performer_names: Vec<String>,
    pub artist_ids: Vec<String>,

    // Transit
    pub transit_provider: Option<String>,
    pub vehicle_name: Option<String>,
    pub vehicle_type: Option<String>,
    pub vehicle_number: Option<String>,
    pub origin_station_name: Option<String>,
    pub origin_station_code: Option<String>,
    pub destination_station_name: Option<String>,
    pub destination_station_code: Option<String>,
    pub transit_status: Option<TransitStatus>,
    pub transit_status_reason: Option<String>,
    pub boarding_group: Option<String>,
    pub boarding_sequence_number: Option<String>,
    pub confirmation_number: Option<String>,
    pub departure_location: Option<SemanticLocation>,
    pub destination_location: Option<SemanticLocation>,
    pub departure_gate: Option<String>,
    pub departure_platform: Option<String>,
    pub departure_terminal: Option<String>,
    pub destination_gate: Option<String>,
    pub destination_platform: Option<String>,
    pub destination_terminal: Option<String>,
    pub arrival_gate: Option<String>,
    pub arrival_platform: Option<String>,
    pub arrival_terminal: Option<String>,
    pub security_screening: Option<String>,
    pub car_number: Option<String>,

    // Flight
    pub airline_code: Option<String>,
    pub flight_code: Option<String>,
    pub flight_number: Option<u32>,
    pub original_departure_date: Option<String>,
    pub original_arrival_date: Option<String>,
    pub original_boarding_date: Option<String>,
    pub current_departure_date: Option<String>,
    pub current_arrival_date: Option<String>,
    pub current_boarding_date: Option<String>,

    // Money
    pub balance: Option<CurrencyAmount>,
    pub total_price: Option<CurrencyAmount>,

    // Connectivity
    pub wifi_access: Vec<WifiNetwork>,

    // Membership
    pub membership_program_name: Option<String>,
    pub membership_program_number: Option<String>,
    pub priority_status: Option<String>,
    pub passenger_name: Option<PersonNameComponents>,
}

impl SemanticTags {
    /// True when no attribute is set.
    pub fn is_empty(&self) -> bool {
        self.to_canonical().is_empty()
    }
}

impl Canonicalize for SemanticTags {
    fn to_canonical(&self) -> Map<String, Value> {
        CanonicalMap::new()
            .opt("eventType", self.event_type.map(|t| t.as_str()))
            .text("eventName", self.event_name.as_deref())
            .text("eventStartDate", self.event_start_date.as_deref())
            .text("eventEndDate", self.event_end_date.as_deref())
            .opt("eventDuration", self.event_duration)
            .opt("silenceRequested", self.silence_requested)
            .text("venueName", self.venue_name.as_deref())
            .nested("venueLocation", self.venue_location.as_ref())
            .text("venueEntrance", self.venue_entrance.as_deref())
            .text("venuePhoneNumber", self.venue_phone_number.as_deref())
            .text("venueRoom", self.venue_room.as_deref())
            .list("seats", &self.seats)
            .text("homeTeamAbbreviation", self.home_team_abbreviation.as_deref())
            .text("homeTeamLocation", self.home_team_location.as_deref())
            .text("homeTeamName", self.home_team_name.as_deref())
            .text("awayTeamAbbreviation", self.away_team_abbreviation.as_deref())
            .text("awayTeamLocation", self.away_team_location.as_deref())
            .text("awayTeamName", self.away_team_name.as_deref())
            .text("sportName", self.sport_name.as_deref())
            .text("leagueName", self.league_name.as_deref())
            .text("leagueAbbreviation", self.league_abbreviation.as_deref())
            .text("genre", self.genre.as_deref())
            .strings("performerNames", &self.performer_names)
            .strings("artistIDs", &self.artist_ids)
            .text("transitProvider", self.transit_provider.as_deref())
            .text("vehicleName", self.vehicle_name.as_deref())
            .text("vehicleType", self.vehicle_type.as_deref())
            .text("vehicleNumber", self.vehicle_number.as_deref())
            .text("originStationName", self.origin_station_name.as_deref())
            .text("originStationCode", self.origin_station_code.as_deref())
            .text("destinationStationName", self.destination_station_name.as_deref())
            .text("destinationStationCode", self.destination_station_code.as_deref())
            .opt("transitStatus", self.transit_status.map(|s| s.as_str()))
            .text("transitStatusReason", self.transit_status_reason.as_deref())
            .text("boardingGroup", self.boarding_group.as_deref())
            .text("boardingSequenceNumber", self.boarding_sequence_number.as_deref())
            .text("confirmationNumber", self.confirmation_number.as_deref())
            .nested("departureLocation", self.departure_location.as_ref())
            .nested("destinationLocation", self.destination_location.as_ref())
            .text("departureGate", self.departure_gate.as_deref())
            .text("departurePlatform", self.departure_platform.as_deref())
            .text("departureTerminal", self.departure_terminal.as_deref())
            .text("destinationGate", self.destination_gate.as_deref())
            .text("destinationPlatform", self.destination_platform.as_deref())
            .text("destinationTerminal", self.destination_terminal.as_deref())
            .text("arrivalGate", self.arrival_gate.as_deref())
            .text("arrivalPlatform", self.arrival_platform.as_deref())
            .text("arrivalTerminal", self.arrival_terminal.as_deref())
            .text("securityScreening", self.security_screening.as_deref())
            .text("carNumber", self.car_number.as_deref())
            .text("airlineCode", self.airline_code.as_deref())
            .text("flightCode", self.flight_code.as_deref())
            .opt("flightNumber", self.flight_number)
            .text("originalDepartureDate", self.original_departure_date.as_deref())
            .text("originalArrivalDate", self.original_arrival_date.as_deref())
            .text("originalBoardingDate", self.original_boarding_date.as_deref())
            .text("currentDepartureDate", self.current_departure_date.as_deref())
            .text("currentArrivalDate", self.current_arrival_date.as_deref())
            .text("currentBoardingDate", self.current_boarding_date.as_deref())
            .nested("balance", self.balance.as_ref())
            .nested("totalPrice", self.total_price.as_ref())
            .list("wifiAccess", &self.wifi_access)
            .text("membershipProgramName", self.membership_program_name.as_deref())
            .text("membershipProgramNumber", self.membership_program_number.as_deref())
            .text("priorityStatus", self.priority_status.as_deref())
            .nested("passengerName", self.passenger_name.as_ref())
            .into_map()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_tags_project_to_empty_object() {
        let tags = SemanticTags::default();
        assert!(tags.is_empty());
        assert!(tags.to_canonical().is_empty());
    }

    #[test]
    fn event_tags() {
        let tags = SemanticTags {
            event_type: Some(EventType::LivePerformance),
            event_name: Some("Summer Tour".into()),
            silence_requested: Some(false),
            performer_names: vec!["The Band".into()],
            venue_location: Some(SemanticLocation::new(37.7749, -122.4194)),
            seats: vec![Seat {
                seat_section: Some("A".into()),
                seat_row: Some("12".into()),
                ..Seat::default()
            }],
            ..SemanticTags::default()
        };
        let map = tags.to_canonical();
        assert_eq!(map["eventType"], "PKEventTypeLivePerformance");
        assert_eq!(map["eventName"], "Summer Tour");
        assert_eq!(map["silenceRequested"], false);
        assert_eq!(map["performerNames"], json!(["The Band"]));
        assert_eq!(
            map["venueLocation"],
            json!({"latitude": 37.7749, "longitude": -122.4194})
        );
        assert_eq!(map["seats"], json!([{"seatSection": "A", "seatRow": "12"}]));
        assert!(!map.contains_key("artistIDs"));
    }

    #[test]
    fn transit_and_money_tags() {
        let tags = SemanticTags {
            airline_code: Some("UA".into()),
            flight_number: Some(1234),
            transit_status: Some(TransitStatus::Delayed),
            balance: Some(CurrencyAmount::new("25.50", "USD").unwrap()),
            passenger_name: Some(PersonNameComponents {
                given_name: Some("Ada".into()),
                family_name: Some("Lovelace".into()),
                ..PersonNameComponents::default()
            }),
            wifi_access: vec![WifiNetwork::new("Lounge", "hunter22")],
            ..SemanticTags::default()
        };
        let map = tags.to_canonical();
        assert_eq!(map["flightNumber"], 1234);
        assert_eq!(map["transitStatus"], "PKTransitStatusDelayed");
        assert_eq!(
            map["balance"],
            json!({"amount": "25.50", "currencyCode": "USD"})
        );
        assert_eq!(
            map["passengerName"],
            json!({"givenName": "Ada", "familyName": "Lovelace"})
        );
        assert_eq!(
            map["wifiAccess"],
            json!([{"ssid": "Lounge", "password": "hunter22"}])
        );
    }

    #[test]
    fn currency_amount_validates_code() {
        assert!(CurrencyAmount::new(10, "usd").is_err());
        let amount = CurrencyAmount::new(19.99, "EUR").unwrap();
        assert_eq!(amount.amount(), "19.99");
        assert_eq!(amount.currency_code(), "EUR");
    }

    #[test]
    fn empty_strings_are_omitted() {
        let tags = SemanticTags {
            venue_name: Some(String::new()),
            ..SemanticTags::default()
        };
        assert!(tags.is_empty());
    }
}
