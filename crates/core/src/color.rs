//! The `Srgb` color type used for confetti particles.
//!
//! Confetti colors are picked from small discrete palettes and never
//! interpolated, so components are stored as 8-bit values exactly as they
//! appear in a `#rrggbb` hex string. The hex form is also the canonical
//! serialization and the fill style handed to drawing surfaces.

use crate::error::EffectError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An 8-bit sRGB color.
///
/// Round-trips losslessly through its `"#rrggbb"` hex form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Srgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Srgb {
    /// Creates a color from its components.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses a hex color string like "#ff577f" or "FF577F" (case insensitive).
    ///
    /// Returns `EffectError::InvalidColor` if the input is not a valid
    /// 6-digit hex color.
    pub fn from_hex(hex: &str) -> Result<Srgb, EffectError> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 {
            return Err(EffectError::InvalidColor(format!(
                "expected 6 hex digits, got {}",
                hex.len()
            )));
        }
        let r = u8::from_str_radix(&hex[0..2], 16)
            .map_err(|e| EffectError::InvalidColor(format!("invalid red component: {e}")))?;
        let g = u8::from_str_radix(&hex[2..4], 16)
            .map_err(|e| EffectError::InvalidColor(format!("invalid green component: {e}")))?;
        let b = u8::from_str_radix(&hex[4..6], 16)
            .map_err(|e| EffectError::InvalidColor(format!("invalid blue component: {e}")))?;
        Ok(Srgb { r, g, b })
    }

    /// Formats the color as a lowercase `"#rrggbb"` string.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Serialize for Srgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Srgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Srgb::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- Parsing --

    #[test]
    fn from_hex_parses_with_hash_prefix() {
        let c = Srgb::from_hex("#ff577f").unwrap();
        assert_eq!(c, Srgb::new(0xff, 0x57, 0x7f));
    }

    #[test]
    fn from_hex_parses_without_hash_prefix() {
        let c = Srgb::from_hex("57cc99").unwrap();
        assert_eq!(c, Srgb::new(0x57, 0xcc, 0x99));
    }

    #[test]
    fn from_hex_is_case_insensitive() {
        let lower = Srgb::from_hex("#b983ff").unwrap();
        let upper = Srgb::from_hex("#B983FF").unwrap();
        assert_eq!(lower, upper);
    }

    #[test]
    fn from_hex_rejects_wrong_length() {
        assert!(Srgb::from_hex("#fff").is_err());
        assert!(Srgb::from_hex("#ff577f00").is_err());
        assert!(Srgb::from_hex("").is_err());
    }

    #[test]
    fn from_hex_rejects_non_hex_digits() {
        let result = Srgb::from_hex("#zzzzzz");
        assert!(matches!(result, Err(EffectError::InvalidColor(_))));
    }

    // -- Formatting --

    #[test]
    fn to_hex_is_lowercase_with_hash() {
        let c = Srgb::new(0xff, 0xc7, 0x64);
        assert_eq!(c.to_hex(), "#ffc764");
    }

    #[test]
    fn to_hex_pads_small_components() {
        let c = Srgb::new(0x00, 0x05, 0x0a);
        assert_eq!(c.to_hex(), "#00050a");
    }

    // -- Serde --

    #[test]
    fn serializes_as_hex_string() {
        let c = Srgb::new(0x94, 0xb3, 0xfd);
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, "\"#94b3fd\"");
    }

    #[test]
    fn deserializes_from_hex_string() {
        let c: Srgb = serde_json::from_str("\"#ffd6ec\"").unwrap();
        assert_eq!(c, Srgb::new(0xff, 0xd6, 0xec));
    }

    #[test]
    fn deserialize_rejects_invalid_hex() {
        let result: Result<Srgb, _> = serde_json::from_str("\"not-a-color\"");
        assert!(result.is_err());
    }

    // -- Property-based tests --

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn hex_round_trip_is_lossless(r: u8, g: u8, b: u8) {
                let original = Srgb::new(r, g, b);
                let restored = Srgb::from_hex(&original.to_hex()).unwrap();
                prop_assert_eq!(original, restored);
            }

            #[test]
            fn serde_round_trip_is_lossless(r: u8, g: u8, b: u8) {
                let original = Srgb::new(r, g, b);
                let json = serde_json::to_string(&original).unwrap();
                let restored: Srgb = serde_json::from_str(&json).unwrap();
                prop_assert_eq!(original, restored);
            }
        }
    }
}
