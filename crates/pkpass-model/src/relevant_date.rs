//! # Relevance Dates
//!
//! A [`RelevantDate`] is either a single instant, from which the client
//! derives its own interval, or an explicit start/end interval. The two
//! shapes are variants of one enum, so an entry can never carry both.

use pkpass_core::{validate_iso8601_date, ValidationError};
use serde_json::{Map, Value};

use crate::canonical::{CanonicalMap, Canonicalize};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelevantDate {
    /// One instant; the client decides how long the pass stays relevant.
    Single(String),
    /// An explicit relevance window.
    Interval { start: String, end: String },
}

impl RelevantDate {
    /// Build from the three optional inputs, rejecting every combination
    /// other than "date alone" or "start and end together".
    ///
    /// Empty strings count as absent.
    pub fn new(
        date: Option<&str>,
        start_date: Option<&str>,
        end_date: Option<&str>,
    ) -> Result<Self, ValidationError> {
        fn present(s: Option<&str>) -> Option<&str> {
            s.filter(|v| !v.is_empty())
        }
        match (present(date), present(start_date), present(end_date)) {
            (Some(_), Some(_), _) | (Some(_), _, Some(_)) => {
                Err(ValidationError::RelevantDateConflict)
            }
            (Some(date), None, None) => Self::at(date),
            (None, Some(start), Some(end)) => Self::between(start, end),
            (None, Some(_), None) | (None, None, Some(_)) => {
                Err(ValidationError::RelevantDateIncomplete)
            }
            (None, None, None) => Err(ValidationError::RelevantDateMissing),
        }
    }

    /// A single relevance instant in `YYYY-MM-DDTHH:MM:SS±HH:MM` form.
    pub fn at(date: &str) -> Result<Self, ValidationError> {
        validate_iso8601_date(date)?;
        Ok(Self::Single(date.to_string()))
    }

    /// An explicit interval; both bounds are validated.
    pub fn between(start: &str, end: &str) -> Result<Self, ValidationError> {
        validate_iso8601_date(start)?;
        validate_iso8601_date(end)?;
        Ok(Self::Interval {
            start: start.to_string(),
            end: end.to_string(),
        })
    }

    pub fn date(&self) -> Option<&str> {
        match self {
            Self::Single(date) => Some(date),
            Self::Interval { .. } => None,
        }
    }

    pub fn start_date(&self) -> Option<&str> {
        match self {
            Self::Single(_) => None,
            Self::Interval { start, .. } => Some(start),
        }
    }

    pub fn end_date(&self) -> Option<&str> {
        match self {
            Self::Single(_) => None,
            Self::Interval { end, .. } => Some(end),
        }
    }

    /// The value written to the singular `relevantDate` key: the single
    /// date, otherwise the interval start, otherwise the interval end.
    pub fn legacy_date(&self) -> Option<&str> {
        self.date()
            .or_else(|| self.start_date())
            .or_else(|| self.end_date())
    }
}

impl Canonicalize for RelevantDate {
    fn to_canonical(&self) -> Map<String, Value> {
        CanonicalMap::new()
            .text("date", self.date())
            .text("startDate", self.start_date())
            .text("endDate", self.end_date())
            .into_map()
    }
}
