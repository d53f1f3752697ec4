//! # Lexical Validators
//!
//! Input checks applied at construction and add-operation time. Each returns
//! `Ok(())` or a [`ValidationError`] naming the broken rule.
//!
//! Accepted shapes:
//!
//! | Check | Shape |
//! |-------|-------|
//! | ISO-8601 date | `YYYY-MM-DDTHH:MM:SS±HH:MM` |
//! | RGB color | `rgb(r, g, b)`, each component 0–255, whitespace around components allowed |
//! | Currency code | three uppercase ASCII letters |
//! | Authentication token | at least 16 characters |

use crate::error::ValidationError;

/// Maximum number of locations a pass may carry.
pub const MAX_LOCATIONS: usize = 10;

/// Maximum number of iBeacons a pass may carry.
pub const MAX_BEACONS: usize = 10;

/// Minimum length of a web service authentication token.
pub const MIN_AUTHENTICATION_TOKEN_LEN: usize = 16;

/// Validate an ISO-8601 date of the form `YYYY-MM-DDTHH:MM:SS±HH:MM`.
///
/// This is a shape check only; calendar validity is left to the client.
pub fn validate_iso8601_date(date: &str) -> Result<(), ValidationError> {
    const SHAPE: &[u8] = b"dddd-dd-ddTdd:dd:dd*dd:dd";
    let bytes = date.as_bytes();
    if bytes.len() != SHAPE.len() {
        return Err(ValidationError::InvalidDate(date.to_string()));
    }
    let matches = bytes.iter().zip(SHAPE).all(|(&c, &p)| match p {
        b'd' => c.is_ascii_digit(),
        b'*' => c == b'+' || c == b'-',
        literal => c == literal,
    });
    if matches {
        Ok(())
    } else {
        Err(ValidationError::InvalidDate(date.to_string()))
    }
}

/// Validate a color string of the form `rgb(r, g, b)`.
pub fn validate_rgb_color(color: &str) -> Result<(), ValidationError> {
    let invalid = || ValidationError::InvalidRgbColor(color.to_string());
    let inner = color
        .strip_prefix("rgb(")
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or_else(invalid)?;
    let components: Vec<&str> = inner.split(',').map(str::trim).collect();
    if components.len() != 3 {
        return Err(invalid());
    }
    for component in components {
        if component.is_empty()
            || component.len() > 3
            || !component.chars().all(|c| c.is_ascii_digit())
        {
            return Err(invalid());
        }
        let value: u16 = component.parse().map_err(|_| invalid())?;
        if value > 255 {
            return Err(invalid());
        }
    }
    Ok(())
}

/// Validate an ISO-4217 currency code (three uppercase ASCII letters).
pub fn validate_currency_code(code: &str) -> Result<(), ValidationError> {
    if code.len() == 3 && code.chars().all(|c| c.is_ascii_uppercase()) {
        Ok(())
    } else {
        Err(ValidationError::InvalidCurrencyCode(code.to_string()))
    }
}

/// Validate that the serial number is present.
pub fn validate_serial_number(serial_number: &str) -> Result<(), ValidationError> {
    require_non_empty("serial_number", serial_number)
}

/// Validate that the pass description is present.
pub fn validate_description(description: &str) -> Result<(), ValidationError> {
    require_non_empty("description", description)
}

/// Validate a web service authentication token length.
pub fn validate_authentication_token(token: &str) -> Result<(), ValidationError> {
    let actual = token.chars().count();
    if actual < MIN_AUTHENTICATION_TOKEN_LEN {
        return Err(ValidationError::AuthenticationTokenTooShort {
            min: MIN_AUTHENTICATION_TOKEN_LEN,
            actual,
        });
    }
    Ok(())
}

/// Validate that a location count stays within [`MAX_LOCATIONS`].
pub fn validate_location_limits(count: usize) -> Result<(), ValidationError> {
    check_cardinality("locations", count, MAX_LOCATIONS)
}

/// Validate that a beacon count stays within [`MAX_BEACONS`].
pub fn validate_beacon_limits(count: usize) -> Result<(), ValidationError> {
    check_cardinality("beacons", count, MAX_BEACONS)
}

fn require_non_empty(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::MissingRequired { field });
    }
    Ok(())
}

fn check_cardinality(
    collection: &'static str,
    count: usize,
    limit: usize,
) -> Result<(), ValidationError> {
    if count > limit {
        return Err(ValidationError::CardinalityExceeded { collection, limit });
    }
    Ok(())
}
