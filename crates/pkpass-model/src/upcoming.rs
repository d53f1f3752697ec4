//! Upcoming event entries for multi-event passes (season tickets, festivals).

use pkpass_core::ValidationError;
use serde_json::{Map, Value};

use crate::canonical::{CanonicalMap, Canonicalize};
use crate::relevant_date::RelevantDate;
use crate::semantics::SemanticTags;

#[derive(Debug, Clone, PartialEq)]
pub struct UpcomingEvent {
    identifier: String,
    name: String,
    date_information: Option<RelevantDate>,
    semantics: Option<SemanticTags>,
}

impl UpcomingEvent {
    /// `identifier` must be unique within the pass; both values are required.
    pub fn new(identifier: impl Into<String>, name: impl Into<String>) -> Result<Self, ValidationError> {
        let identifier = identifier.into();
        let name = name.into();
        if identifier.is_empty() {
            return Err(ValidationError::EmptyAttribute("upcoming event identifier"));
        }
        if name.is_empty() {
            return Err(ValidationError::EmptyAttribute("upcoming event name"));
        }
        Ok(Self {
            identifier,
            name,
            date_information: None,
            semantics: None,
        })
    }

    pub fn with_date(mut self, date: RelevantDate) -> Self {
        self.date_information = Some(date);
        self
    }

    pub fn with_semantics(mut self, semantics: SemanticTags) -> Self {
        self.semantics = Some(semantics);
        self
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }
}

impl Canonicalize for UpcomingEvent {
    fn to_canonical(&self) -> Map<String, Value> {
        CanonicalMap::new()
            .insert("identifier", self.identifier.as_str())
            .insert("name", self.name.as_str())
            .nested("dateInformation", self.date_information.as_ref())
            .nested("semantics", self.semantics.as_ref())
            .into_map()
    }
}
