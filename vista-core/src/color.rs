//! Hex color parsing and the shade transform.
//!
//! Region hover fills are the base fill darkened by a fixed percentage. The
//! transform scales each RGB channel by `(100 + percent) / 100`, truncates and
//! clamps to `0..=255`, so the same input always yields the same output.

use crate::error::VistaError;
use std::fmt;
use std::str::FromStr;

/// Percentage applied to a region fill to obtain its hover fill.
pub const HOVER_PERCENTAGE: i32 = -10;

/// An opaque sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Scale every channel by `(100 + percent) / 100`, clamped to `0..=255`.
    pub fn shade(self, percent: i32) -> Self {
        let scale = |c: u8| -> u8 {
            let scaled = i64::from(c) * (100 + i64::from(percent)) / 100;
            scaled.clamp(0, 255) as u8
        };
        Self {
            r: scale(self.r),
            g: scale(self.g),
            b: scale(self.b),
        }
    }
}

impl FromStr for Rgb {
    type Err = VistaError;

    /// Parse `#rrggbb` or the `#rgb` shorthand (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || VistaError::InvalidHex(s.to_string());
        let hex = s.trim().strip_prefix('#').ok_or_else(invalid)?;
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |digits: &str| u8::from_str_radix(digits, 16).map_err(|_| invalid());
        match hex.len() {
            6 => Ok(Rgb::new(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            )),
            3 => {
                let expand = |i: usize| channel(&hex[i..=i].repeat(2));
                Ok(Rgb::new(expand(0)?, expand(1)?, expand(2)?))
            }
            _ => Err(invalid()),
        }
    }
}

impl fmt::Display for Rgb {
    /// Format as lowercase CSS hex: #rrggbb
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Lighten (positive `percent`) or darken (negative) a hex color.
///
/// Strings that are not hex colors (CSS keywords, `oklch(...)`, empty) are
/// returned unchanged.
pub fn shade_color(color: &str, percent: i32) -> String {
    match color.parse::<Rgb>() {
        Ok(rgb) => rgb.shade(percent).to_string(),
        Err(_) => {
            log::warn!("shade_color: leaving non-hex color {:?} unshaded", color);
            color.to_string()
        }
    }
}

/// The hover variant of a region fill.
pub fn hover_shade(color: &str) -> String {
    shade_color(color, HOVER_PERCENTAGE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_long_and_short_hex() {
        assert_eq!("#6366f1".parse::<Rgb>().unwrap(), Rgb::new(0x63, 0x66, 0xf1));
        assert_eq!("#ABC".parse::<Rgb>().unwrap(), Rgb::new(0xaa, 0xbb, 0xcc));
        assert_eq!(" #000000 ".parse::<Rgb>().unwrap(), Rgb::new(0, 0, 0));
    }

    #[test]
    fn test_parse_rejects_non_hex() {
        assert!("".parse::<Rgb>().is_err());
        assert!("6366f1".parse::<Rgb>().is_err());
        assert!("#6366f".parse::<Rgb>().is_err());
        assert!("#gggggg".parse::<Rgb>().is_err());
        assert_eq!(
            "red".parse::<Rgb>(),
            Err(VistaError::InvalidHex("red".to_string()))
        );
    }

    #[test]
    fn test_darken_by_ten_percent() {
        assert_eq!(hover_shade("#ffffff"), "#e5e5e5");
        assert_eq!(hover_shade("#111111"), "#0f0f0f");
        assert_eq!(hover_shade("#6366f1"), "#595bd8");
        assert_eq!(hover_shade("#abc"), "#99a8b7");
    }

    #[test]
    fn test_lighten_clamps_at_white() {
        assert_eq!(shade_color("#808080", 50), "#c0c0c0");
        assert_eq!(shade_color("#f0f0f0", 20), "#ffffff");
    }

    #[test]
    fn test_darken_clamps_at_black() {
        assert_eq!(shade_color("#808080", -150), "#000000");
    }

    #[test]
    fn test_extreme_percent_saturates() {
        assert_eq!(shade_color("#ffffff", 10_000_000), "#ffffff");
        assert_eq!(shade_color("#010203", i32::MAX), "#ffffff");
        assert_eq!(shade_color("#ffffff", i32::MIN), "#000000");
    }

    #[test]
    fn test_shade_is_deterministic() {
        let first = hover_shade("#3b82f6");
        for _ in 0..5 {
            assert_eq!(hover_shade("#3b82f6"), first);
        }
    }

    #[test]
    fn test_non_hex_passes_through() {
        assert_eq!(hover_shade(""), "");
        assert_eq!(hover_shade("currentColor"), "currentColor");
    }
}
