//! Draw colors.
//!
//! Colors travel over the wire as opaque CSS-style strings and are echoed
//! back unchanged. Only the configuration layer insists on `#RRGGBB`.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// A polygon or draw color, e.g. `#DF00FF`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(String);

impl Color {
    /// Wrap a color string without validating it.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Parse a strict `#RRGGBB` hex color.
    pub fn parse_hex(value: &str) -> Result<Self, ColorError> {
        Self::rgb_of(value)?;
        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// RGB components, if the color is in `#RRGGBB` form.
    pub fn to_rgb(&self) -> Option<[u8; 3]> {
        Self::rgb_of(&self.0).ok()
    }

    fn rgb_of(value: &str) -> Result<[u8; 3], ColorError> {
        let hex = value.strip_prefix('#').ok_or_else(|| ColorError::MissingHash {
            value: value.to_string(),
        })?;
        if hex.len() != 6 {
            return Err(ColorError::InvalidLength {
                value: value.to_string(),
                len: hex.len(),
            });
        }
        let channel = |i: usize| {
            hex.get(i..i + 2)
                .and_then(|s| u8::from_str_radix(s, 16).ok())
                .ok_or_else(|| ColorError::InvalidHex {
                    value: value.to_string(),
                })
        };
        Ok([channel(0)?, channel(2)?, channel(4)?])
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::new(crate::constants::DEFAULT_DRAW_COLOR)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Color {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Errors from parsing a hex color.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    #[error("Color '{value}' must start with '#'")]
    MissingHash { value: String },

    #[error("Color '{value}' has {len} hex digits, expected 6")]
    InvalidLength { value: String, len: usize },

    #[error("Color '{value}' contains non-hex digits")]
    InvalidHex { value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex() {
        let c = Color::parse_hex("#DF00FF").unwrap();
        assert_eq!(c.to_rgb(), Some([0xDF, 0x00, 0xFF]));
        assert_eq!(c.to_string(), "#DF00FF");
    }

    #[test]
    fn test_parse_hex_rejects_malformed() {
        assert!(matches!(
            Color::parse_hex("DF00FF"),
            Err(ColorError::MissingHash { .. })
        ));
        assert!(matches!(
            Color::parse_hex("#FFF"),
            Err(ColorError::InvalidLength { len: 3, .. })
        ));
        assert!(matches!(
            Color::parse_hex("#GG00FF"),
            Err(ColorError::InvalidHex { .. })
        ));
    }

    #[test]
    fn test_unvalidated_colors_pass_through() {
        let c = Color::new("rebeccapurple");
        assert_eq!(c.to_rgb(), None);
        assert_eq!(serde_json::to_string(&c).unwrap(), "\"rebeccapurple\"");
    }

    #[test]
    fn test_default_is_draw_color() {
        assert_eq!(Color::default().as_str(), "#DF00FF");
    }
}
