//! Pass personalization: details the wallet collects from the user before
//! the pass is added, posted to the pass's web service.

use pkpass_core::ValidationError;
use serde_json::{Map, Value};

use crate::canonical::{CanonicalMap, Canonicalize};
use crate::constants::PersonalizationField;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Personalization {
    required_fields: Vec<PersonalizationField>,
    description: Option<String>,
    terms_and_conditions: Option<String>,
}

impl Personalization {
    /// At least one field must be requested.
    pub fn new(required_fields: Vec<PersonalizationField>) -> Result<Self, ValidationError> {
        if required_fields.is_empty() {
            return Err(ValidationError::EmptyPersonalization);
        }
        Ok(Self {
            required_fields,
            description: None,
            terms_and_conditions: None,
        })
    }

    /// Build from `PKPassPersonalizationField*` identifiers.
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Result<Self, ValidationError> {
        let fields = names
            .iter()
            .map(|name| name.as_ref().parse())
            .collect::<Result<Vec<PersonalizationField>, _>>()?;
        Self::new(fields)
    }

    /// Shown to the user to explain why the details are needed.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        let description = description.into();
        self.description = (!description.is_empty()).then_some(description);
        self
    }

    pub fn with_terms_and_conditions(mut self, terms: impl Into<String>) -> Self {
        let terms = terms.into();
        self.terms_and_conditions = (!terms.is_empty()).then_some(terms);
        self
    }

    pub fn required_fields(&self) -> &[PersonalizationField] {
        &self.required_fields
    }
}

impl Canonicalize for Personalization {
    fn to_canonical(&self) -> Map<String, Value> {
        let fields = self
            .required_fields
            .iter()
            .map(PersonalizationField::as_str)
            .collect::<Vec<_>>();
        CanonicalMap::new()
            .strings("requiredPersonalizationFields", &fields)
            .text("description", self.description.as_deref())
            .text("termsAndConditions", self.terms_and_conditions.as_deref())
            .into_map()
    }
}
