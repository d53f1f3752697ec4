//! # pkpass-model — Typed Wallet Pass Model
//!
//! Value objects for everything a pass can carry, and the [`PassDocument`]
//! aggregate that merges them into one `pass.json` projection.
//!
//! ## Projection Contract
//!
//! Every type implements [`Canonicalize`], listing its keys explicitly.
//! Absent values, empty strings and empty lists are omitted through the
//! shared [`CanonicalMap`] builder. Nested objects canonicalize themselves.
//!
//! ## Validation
//!
//! Constructors and add-operations are the validation boundary. Barcodes,
//! beacons, relevant dates, personalization, currency amounts and document
//! setters reject bad input with [`pkpass_core::ValidationError`] as soon as
//! the value is supplied. `Field` values are not type-checked; the client
//! interprets them at display time.
//!
//! ## Crate Policy
//!
//! - Depends only on `pkpass-core` internally.
//! - No serde derives on model types: projections are written by hand.

pub mod barcode;
pub mod canonical;
pub mod constants;
pub mod error;
pub mod field;
pub mod location;
pub mod nfc;
pub mod pass;
pub mod pass_info;
pub mod personalization;
pub mod relevant_date;
pub mod semantics;
pub mod upcoming;

pub use barcode::{Barcode, DEFAULT_MESSAGE_ENCODING};
pub use canonical::{CanonicalMap, Canonicalize};
pub use constants::{
    Alignment, BarcodeFormat, DataDetectorType, DateStyle, EventType, NumberStyle,
    PersonalizationField, TransitStatus, TransitType,
};
pub use error::AssetError;
pub use field::{CurrencyCode, DateFormat, Field, FieldKind, FieldValue};
pub use location::{IBeacon, Location};
pub use nfc::Nfc;
pub use pass::{PassDocument, FORMAT_VERSION};
pub use pass_info::{FieldSlot, PassFields, PassInformation};
pub use personalization::Personalization;
pub use relevant_date::RelevantDate;
pub use semantics::{
    CurrencyAmount, PersonNameComponents, Seat, SemanticLocation, SemanticTags, WifiNetwork,
};
pub use upcoming::UpcomingEvent;
