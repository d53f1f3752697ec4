//! # Temporal Formatting
//!
//! Pass dates are wall-clock times with an explicit offset:
//! `YYYY-MM-DDTHH:MM:SS±HH:MM`. The offset is supplied by the caller rather
//! than derived from the host timezone, so the same input always yields the
//! same string.

use chrono::NaiveDateTime;

use crate::error::ValidationError;

/// Format a wall-clock datetime with the given `±HH:MM` offset.
///
/// Sub-second precision is dropped.
pub fn format_iso8601(dt: NaiveDateTime, timezone_offset: &str) -> Result<String, ValidationError> {
    if !is_valid_timezone_offset(timezone_offset) {
        return Err(ValidationError::InvalidTimezoneOffset(
            timezone_offset.to_string(),
        ));
    }
    Ok(format!("{}{}", dt.format("%Y-%m-%dT%H:%M:%S"), timezone_offset))
}

/// Offsets range from `-14:00` to `+14:00`; `±14` only with zero minutes.
fn is_valid_timezone_offset(offset: &str) -> bool {
    let bytes = offset.as_bytes();
    if bytes.len() != 6 || !matches!(bytes[0], b'+' | b'-') || bytes[3] != b':' {
        return false;
    }
    let digits = [bytes[1], bytes[2], bytes[4], bytes[5]];
    if !digits.iter().all(u8::is_ascii_digit) {
        return false;
    }
    let hours = (bytes[1] - b'0') * 10 + (bytes[2] - b'0');
    let minutes = (bytes[4] - b'0') * 10 + (bytes[5] - b'0');
    hours <= 14 && minutes <= 59 && !(hours == 14 && minutes != 0)
}
