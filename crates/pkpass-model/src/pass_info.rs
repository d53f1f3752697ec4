//! # Pass Styles
//!
//! [`PassInformation`] is the closed set of pass styles. Every style owns the
//! same six field slots ([`PassFields`]); the style decides the key its
//! projection nests under in `pass.json` and, for boarding passes only,
//! carries a transit type.

use serde_json::{Map, Value};

use crate::canonical::{CanonicalMap, Canonicalize};
use crate::constants::TransitType;
use crate::field::{Field, FieldValue};

/// A presentation slot on the pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldSlot {
    Header,
    Primary,
    Secondary,
    Auxiliary,
    Back,
    /// Shown only on poster-style event tickets.
    AdditionalInfo,
}

impl FieldSlot {
    pub const ALL: [FieldSlot; 6] = [
        Self::Header,
        Self::Primary,
        Self::Secondary,
        Self::Auxiliary,
        Self::Back,
        Self::AdditionalInfo,
    ];

    pub fn json_key(&self) -> &'static str {
        match self {
            Self::Header => "headerFields",
            Self::Primary => "primaryFields",
            Self::Secondary => "secondaryFields",
            Self::Auxiliary => "auxiliaryFields",
            Self::Back => "backFields",
            Self::AdditionalInfo => "additionalInfoFields",
        }
    }
}

/// Ordered field collections, one per slot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PassFields {
    header: Vec<Field>,
    primary: Vec<Field>,
    secondary: Vec<Field>,
    auxiliary: Vec<Field>,
    back: Vec<Field>,
    additional_info: Vec<Field>,
}

impl PassFields {
    pub fn slot(&self, slot: FieldSlot) -> &[Field] {
        match slot {
            FieldSlot::Header => &self.header,
            FieldSlot::Primary => &self.primary,
            FieldSlot::Secondary => &self.secondary,
            FieldSlot::Auxiliary => &self.auxiliary,
            FieldSlot::Back => &self.back,
            FieldSlot::AdditionalInfo => &self.additional_info,
        }
    }

    fn slot_mut(&mut self, slot: FieldSlot) -> &mut Vec<Field> {
        match slot {
            FieldSlot::Header => &mut self.header,
            FieldSlot::Primary => &mut self.primary,
            FieldSlot::Secondary => &mut self.secondary,
            FieldSlot::Auxiliary => &mut self.auxiliary,
            FieldSlot::Back => &mut self.back,
            FieldSlot::AdditionalInfo => &mut self.additional_info,
        }
    }

    /// Append a field and return it for further adjustment.
    pub fn push(&mut self, slot: FieldSlot, field: Field) -> &mut Field {
        let fields = self.slot_mut(slot);
        let index = fields.len();
        fields.push(field);
        &mut fields[index]
    }

    pub fn add_header_field(
        &mut self,
        key: impl Into<String>,
        value: impl Into<FieldValue>,
        label: &str,
    ) -> &mut Field {
        self.push(FieldSlot::Header, Field::new(key, value, label))
    }

    pub fn add_primary_field(
        &mut self,
        key: impl Into<String>,
        value: impl Into<FieldValue>,
        label: &str,
    ) -> &mut Field {
        self.push(FieldSlot::Primary, Field::new(key, value, label))
    }

    pub fn add_secondary_field(
        &mut self,
        key: impl Into<String>,
        value: impl Into<FieldValue>,
        label: &str,
    ) -> &mut Field {
        self.push(FieldSlot::Secondary, Field::new(key, value, label))
    }

    pub fn add_auxiliary_field(
        &mut self,
        key: impl Into<String>,
        value: impl Into<FieldValue>,
        label: &str,
    ) -> &mut Field {
        self.push(FieldSlot::Auxiliary, Field::new(key, value, label))
    }

    pub fn add_back_field(
        &mut self,
        key: impl Into<String>,
        value: impl Into<FieldValue>,
        label: &str,
    ) -> &mut Field {
        self.push(FieldSlot::Back, Field::new(key, value, label))
    }

    /// Poster-style event tickets only; other styles ignore this slot on device.
    pub fn add_additional_info_field(
        &mut self,
        key: impl Into<String>,
        value: impl Into<FieldValue>,
        label: &str,
    ) -> &mut Field {
        self.push(FieldSlot::AdditionalInfo, Field::new(key, value, label))
    }

    /// Total number of fields across all slots.
    pub fn len(&self) -> usize {
        FieldSlot::ALL.iter().map(|s| self.slot(*s).len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Canonicalize for PassFields {
    fn to_canonical(&self) -> Map<String, Value> {
        FieldSlot::ALL
            .iter()
            .fold(CanonicalMap::new(), |map, slot| {
                map.list(slot.json_key(), self.slot(*slot))
            })
            .into_map()
    }
}

/// The pass style and its fields.
#[derive(Debug, Clone, PartialEq)]
pub enum PassInformation {
    BoardingPass {
        fields: PassFields,
        transit_type: TransitType,
    },
    Coupon(PassFields),
    EventTicket(PassFields),
    Generic(PassFields),
    StoreCard(PassFields),
}

impl PassInformation {
    pub fn boarding_pass(transit_type: TransitType) -> Self {
        Self::BoardingPass {
            fields: PassFields::default(),
            transit_type,
        }
    }

    pub fn coupon() -> Self {
        Self::Coupon(PassFields::default())
    }

    pub fn event_ticket() -> Self {
        Self::EventTicket(PassFields::default())
    }

    pub fn generic() -> Self {
        Self::Generic(PassFields::default())
    }

    pub fn store_card() -> Self {
        Self::StoreCard(PassFields::default())
    }

    /// Build an empty style from its `pass.json` key (`coupon`, `boardingPass`, ...).
    ///
    /// `transit_type` is used only for boarding passes and defaults to air.
    pub fn from_json_key(key: &str, transit_type: Option<TransitType>) -> Option<Self> {
        match key {
            "boardingPass" => Some(Self::boarding_pass(transit_type.unwrap_or_default())),
            "coupon" => Some(Self::coupon()),
            "eventTicket" => Some(Self::event_ticket()),
            "generic" => Some(Self::generic()),
            "storeCard" => Some(Self::store_card()),
            _ => None,
        }
    }

    /// The top-level key the projection nests under.
    pub fn json_key(&self) -> &'static str {
        match self {
            Self::BoardingPass { .. } => "boardingPass",
            Self::Coupon(_) => "coupon",
            Self::EventTicket(_) => "eventTicket",
            Self::Generic(_) => "generic",
            Self::StoreCard(_) => "storeCard",
        }
    }

    pub fn fields(&self) -> &PassFields {
        match self {
            Self::BoardingPass { fields, .. }
            | Self::Coupon(fields)
            | Self::EventTicket(fields)
            | Self::Generic(fields)
            | Self::StoreCard(fields) => fields,
        }
    }

    pub fn fields_mut(&mut self) -> &mut PassFields {
        match self {
            Self::BoardingPass { fields, .. }
            | Self::Coupon(fields)
            | Self::EventTicket(fields)
            | Self::Generic(fields)
            | Self::StoreCard(fields) => fields,
        }
    }

    pub fn transit_type(&self) -> Option<TransitType> {
        match self {
            Self::BoardingPass { transit_type, .. } => Some(*transit_type),
            _ => None,
        }
    }
}

impl Canonicalize for PassInformation {
    fn to_canonical(&self) -> Map<String, Value> {
        let map = CanonicalMap::new().extend(self.fields().to_canonical());
        let map = match self.transit_type() {
            Some(transit_type) => map.insert("transitType", transit_type.as_str()),
            None => map,
        };
        map.into_map()
    }
}
