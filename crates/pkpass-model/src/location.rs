//! # Geofences and Beacons
//!
//! [`Location`] and [`IBeacon`] tell the client when a pass is relevant by
//! place. A pass holds at most ten of each; the limit is enforced by the
//! pass document's add-operations, not here.
//!
//! ## Coordinate Fallback
//!
//! `Location` construction never fails. A latitude outside `[-90, 90]`, a
//! longitude outside `[-180, 180]`, or any non-finite or unparseable
//! coordinate is replaced by `0.0` and a warning is logged. A point at
//! `(0, 0)` is a valid place in the Gulf of Guinea, so this fallback can
//! silently relocate a geofence; callers that care should range-check first.

use pkpass_core::ValidationError;
use serde_json::{Map, Value};

use crate::canonical::{CanonicalMap, Canonicalize};

#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    latitude: f64,
    longitude: f64,
    altitude: Option<f64>,
    max_distance: Option<f64>,
    relevant_text: Option<String>,
}

impl Location {
    /// Create a location. Invalid coordinates degrade to `0.0`.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude: coordinate("latitude", latitude, 90.0),
            longitude: coordinate("longitude", longitude, 180.0),
            altitude: None,
            max_distance: None,
            relevant_text: None,
        }
    }

    /// Create a location from text, as read from a configuration file.
    ///
    /// Unparseable coordinates and altitude degrade to `0.0`; an unparseable
    /// maximum distance is dropped.
    pub fn from_raw(
        latitude: &str,
        longitude: &str,
        altitude: Option<&str>,
        max_distance: Option<&str>,
        relevant_text: Option<&str>,
    ) -> Self {
        let parse = |s: &str| s.trim().parse::<f64>().unwrap_or(f64::NAN);
        let mut location = Self::new(parse(latitude), parse(longitude));
        if let Some(altitude) = altitude {
            location = location.with_altitude(parse(altitude));
        }
        if let Some(distance) = max_distance {
            location = location.with_max_distance(parse(distance));
        }
        if let Some(text) = relevant_text {
            location = location.with_relevant_text(text);
        }
        location
    }

    /// Altitude in meters. A non-finite altitude becomes `0.0`.
    pub fn with_altitude(mut self, altitude: f64) -> Self {
        self.altitude = Some(if altitude.is_finite() {
            altitude
        } else {
            tracing::warn!("location altitude is not a number; using 0.0");
            0.0
        });
        self
    }

    /// Radius in meters within which the pass is relevant. A non-finite
    /// distance leaves the client default in place.
    pub fn with_max_distance(mut self, meters: f64) -> Self {
        self.max_distance = meters.is_finite().then_some(meters);
        self
    }

    /// Lock-screen text. Empty text is treated as absent.
    pub fn with_relevant_text(mut self, text: impl Into<String>) -> Self {
        let text = text.into();
        self.relevant_text = (!text.is_empty()).then_some(text);
        self
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn altitude(&self) -> Option<f64> {
        self.altitude
    }

    pub fn max_distance(&self) -> Option<f64> {
        self.max_distance
    }

    pub fn relevant_text(&self) -> Option<&str> {
        self.relevant_text.as_deref()
    }
}

fn coordinate(axis: &'static str, value: f64, bound: f64) -> f64 {
    if value.is_finite() && (-bound..=bound).contains(&value) {
        value
    } else {
        tracing::warn!(axis, value, "coordinate out of range or not a number; using 0.0");
        0.0
    }
}

impl Canonicalize for Location {
    fn to_canonical(&self) -> Map<String, Value> {
        CanonicalMap::new()
            .insert("latitude", self.latitude)
            .insert("longitude", self.longitude)
            .opt("altitude", self.altitude)
            .opt("maxDistance", self.max_distance)
            .text("relevantText", self.relevant_text.as_deref())
            .into_map()
    }
}

/// A Bluetooth LE beacon region.
///
/// `major` and `minor` narrow the match; leaving them unset matches every
/// beacon advertising the UUID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IBeacon {
    proximity_uuid: String,
    major: Option<u16>,
    minor: Option<u16>,
    relevant_text: Option<String>,
}

impl IBeacon {
    pub fn new(proximity_uuid: impl Into<String>) -> Result<Self, ValidationError> {
        let proximity_uuid = proximity_uuid.into();
        if proximity_uuid.is_empty() {
            return Err(ValidationError::EmptyAttribute("proximity_uuid"));
        }
        Ok(Self {
            proximity_uuid,
            major: None,
            minor: None,
            relevant_text: None,
        })
    }

    pub fn with_major(mut self, major: u16) -> Self {
        self.major = Some(major);
        self
    }

    pub fn with_minor(mut self, minor: u16) -> Self {
        self.minor = Some(minor);
        self
    }

    pub fn with_relevant_text(mut self, text: impl Into<String>) -> Self {
        let text = text.into();
        self.relevant_text = (!text.is_empty()).then_some(text);
        self
    }

    pub fn proximity_uuid(&self) -> &str {
        &self.proximity_uuid
    }

    pub fn major(&self) -> Option<u16> {
        self.major
    }

    pub fn minor(&self) -> Option<u16> {
        self.minor
    }
}

impl Canonicalize for IBeacon {
    fn to_canonical(&self) -> Map<String, Value> {
        CanonicalMap::new()
            .insert("proximityUUID", self.proximity_uuid.as_str())
            .opt("major", self.major)
            .opt("minor", self.minor)
            .text("relevantText", self.relevant_text.as_deref())
            .into_map()
    }
}
