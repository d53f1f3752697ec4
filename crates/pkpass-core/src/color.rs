//! # Color Helpers
//!
//! Wallet passes express colors as CSS-style `rgb(r, g, b)` strings.

use crate::error::ValidationError;

/// Format an RGB triple as `rgb(r, g, b)`.
///
/// Components are `u8`, so the 0–255 range holds by construction.
pub fn rgb_color(r: u8, g: u8, b: u8) -> String {
    format!("rgb({r}, {g}, {b})")
}

/// Convert a hex color (`#RRGGBB`, `RRGGBB`, `#RGB` or `RGB`) to `rgb(r, g, b)`.
///
/// Three-digit forms expand each digit (`F60` → `FF6600`).
pub fn hex_to_rgb(hex_color: &str) -> Result<String, ValidationError> {
    let invalid = || ValidationError::InvalidHexColor(hex_color.to_string());
    let digits = hex_color.trim_start_matches('#');
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }
    let expanded: String = match digits.len() {
        6 => digits.to_string(),
        3 => digits.chars().flat_map(|c| [c, c]).collect(),
        _ => return Err(invalid()),
    };
    let channel = |i: usize| u8::from_str_radix(&expanded[i..i + 2], 16).map_err(|_| invalid());
    Ok(rgb_color(channel(0)?, channel(2)?, channel(4)?))
}
