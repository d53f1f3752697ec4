//! # Wallet Constants
//!
//! Closed sets of string constants understood by the wallet client. Each enum
//! maps one-to-one onto the `PK*` identifiers written into `pass.json`, and
//! parsing is case-sensitive: the client itself does no normalization.

use std::str::FromStr;

use pkpass_core::ValidationError;

/// Declares a constant enum with its wire values.
///
/// Generates `ALL`, `as_str`, `from_wire`, and `Display`. `FromStr` is
/// implemented by hand per type so each family reports its own error.
macro_rules! wallet_constant {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $value:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $name {
            /// Every variant in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// The identifier written into `pass.json`.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $( Self::$variant => $value, )+
                }
            }

            /// Look up a variant by its exact identifier.
            pub fn from_wire(value: &str) -> Option<Self> {
                match value {
                    $( $value => Some(Self::$variant), )+
                    _ => None,
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

fn unknown(kind: &'static str, value: &str) -> ValidationError {
    ValidationError::UnknownConstant {
        kind,
        value: value.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Barcodes
// ---------------------------------------------------------------------------

wallet_constant! {
    /// Symbologies the wallet can render.
    BarcodeFormat {
        Pdf417 => "PKBarcodeFormatPDF417",
        Qr => "PKBarcodeFormatQR",
        Aztec => "PKBarcodeFormatAztec",
        /// Not understood by clients that only read the singular `barcode` key.
        Code128 => "PKBarcodeFormatCode128",
    }
}

impl BarcodeFormat {
    /// Whether clients that predate the `barcodes` array can render this format.
    pub fn is_legacy(&self) -> bool {
        matches!(self, Self::Pdf417 | Self::Qr | Self::Aztec)
    }
}

impl Default for BarcodeFormat {
    fn default() -> Self {
        Self::Pdf417
    }
}

impl FromStr for BarcodeFormat {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_wire(s).ok_or_else(|| ValidationError::UnknownBarcodeFormat(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Pass structure
// ---------------------------------------------------------------------------

wallet_constant! {
    /// Mode of transport for a boarding pass.
    TransitType {
        Air => "PKTransitTypeAir",
        Train => "PKTransitTypeTrain",
        Bus => "PKTransitTypeBus",
        Boat => "PKTransitTypeBoat",
        Generic => "PKTransitTypeGeneric",
    }
}

impl Default for TransitType {
    fn default() -> Self {
        Self::Air
    }
}

impl FromStr for TransitType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_wire(s).ok_or_else(|| unknown("transit type", s))
    }
}

wallet_constant! {
    /// Horizontal alignment of a field's label and value.
    Alignment {
        Left => "PKTextAlignmentLeft",
        Center => "PKTextAlignmentCenter",
        Right => "PKTextAlignmentRight",
        Justified => "PKTextAlignmentJustified",
        Natural => "PKTextAlignmentNatural",
    }
}

impl FromStr for Alignment {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_wire(s).ok_or_else(|| unknown("text alignment", s))
    }
}

wallet_constant! {
    /// Display style for the date or time part of a date field.
    DateStyle {
        None => "PKDateStyleNone",
        Short => "PKDateStyleShort",
        Medium => "PKDateStyleMedium",
        Long => "PKDateStyleLong",
        Full => "PKDateStyleFull",
    }
}

impl Default for DateStyle {
    fn default() -> Self {
        Self::Short
    }
}

impl FromStr for DateStyle {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_wire(s).ok_or_else(|| unknown("date style", s))
    }
}

wallet_constant! {
    /// Display style of a number field.
    NumberStyle {
        Decimal => "PKNumberStyleDecimal",
        /// The value is a fraction: `0.15` renders as 15%.
        Percent => "PKNumberStylePercent",
        Scientific => "PKNumberStyleScientific",
        SpellOut => "PKNumberStyleSpellOut",
    }
}

impl Default for NumberStyle {
    fn default() -> Self {
        Self::Decimal
    }
}

impl FromStr for NumberStyle {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_wire(s).ok_or_else(|| unknown("number style", s))
    }
}

wallet_constant! {
    /// Content the client may turn into tappable links on the back of a pass.
    DataDetectorType {
        PhoneNumber => "PKDataDetectorTypePhoneNumber",
        Link => "PKDataDetectorTypeLink",
        Address => "PKDataDetectorTypeAddress",
        CalendarEvent => "PKDataDetectorTypeCalendarEvent",
    }
}

impl FromStr for DataDetectorType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_wire(s).ok_or_else(|| unknown("data detector type", s))
    }
}

// ---------------------------------------------------------------------------
// Semantic tags
// ---------------------------------------------------------------------------

wallet_constant! {
    EventType {
        Generic => "PKEventTypeGeneric",
        LivePerformance => "PKEventTypeLivePerformance",
        Movie => "PKEventTypeMovie",
        Sports => "PKEventTypeSports",
        Conference => "PKEventTypeConference",
        Convention => "PKEventTypeConvention",
        Workshop => "PKEventTypeWorkshop",
        SocialGathering => "PKEventTypeSocialGathering",
    }
}

impl FromStr for EventType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_wire(s).ok_or_else(|| unknown("event type", s))
    }
}

wallet_constant! {
    TransitStatus {
        Scheduled => "PKTransitStatusScheduled",
        Delayed => "PKTransitStatusDelayed",
        Cancelled => "PKTransitStatusCancelled",
        Boarding => "PKTransitStatusBoarding",
        Arrived => "PKTransitStatusArrived",
    }
}

impl FromStr for TransitStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_wire(s).ok_or_else(|| unknown("transit status", s))
    }
}

// ---------------------------------------------------------------------------
// Personalization
// ---------------------------------------------------------------------------

wallet_constant! {
    /// Personal details the wallet can collect before adding a pass.
    PersonalizationField {
        Name => "PKPassPersonalizationFieldName",
        PostalCode => "PKPassPersonalizationFieldPostalCode",
        EmailAddress => "PKPassPersonalizationFieldEmailAddress",
        PhoneNumber => "PKPassPersonalizationFieldPhoneNumber",
    }
}

impl FromStr for PersonalizationField {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_wire(s).ok_or_else(|| ValidationError::UnknownPersonalizationField(s.to_string()))
    }
}
