use std::{fmt, sync::LazyLock};

use regex::Regex;

static HEX_COLOR: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^#([0-9a-fA-F]{2})([0-9a-fA-F]{2})([0-9a-fA-F]{2})$").ok());

/// An 8-bit-per-channel color with alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba {
    /// Red channel.
    pub red: u8,
    /// Green channel.
    pub green: u8,
    /// Blue channel.
    pub blue: u8,
    /// Alpha channel, 255 is fully opaque.
    pub alpha: u8,
}

impl Rgba {
    /// Opaque white, used when a configured color cannot be parsed.
    pub const WHITE: Rgba = Rgba::new(255, 255, 255, 255);

    /// Creates a color from its four channels.
    pub const fn new(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Parses an opaque `#RRGGBB` color. Hex digits may be either case.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let captures = HEX_COLOR.as_ref()?.captures(hex.trim())?;
        let channel = |index: usize| {
            captures
                .get(index)
                .and_then(|m| u8::from_str_radix(m.as_str(), 16).ok())
        };

        Some(Self::new(channel(1)?, channel(2)?, channel(3)?, 255))
    }

    /// Builds a color from normalized `[0, 1]` float channels, as toolkits
    /// hand them out.
    pub fn from_unit(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self::new(
            unit_to_byte(red),
            unit_to_byte(green),
            unit_to_byte(blue),
            unit_to_byte(alpha),
        )
    }

    /// Lowercase `#rrggbb`, alpha dropped.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rgba({}, {}, {}, {})",
            self.red, self.green, self.blue, self.alpha
        )
    }
}

pub(crate) fn unit_to_byte(value: f64) -> u8 {
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_in_either_case() {
        assert_eq!(Rgba::from_hex("#ffffff"), Some(Rgba::WHITE));
        assert_eq!(Rgba::from_hex("#FF8000"), Some(Rgba::new(255, 128, 0, 255)));
        assert_eq!(Rgba::from_hex(" #00ff7f "), Some(Rgba::new(0, 255, 127, 255)));
    }

    #[test]
    fn rejects_malformed_hex() {
        assert_eq!(Rgba::from_hex("ffffff"), None);
        assert_eq!(Rgba::from_hex("#fff"), None);
        assert_eq!(Rgba::from_hex("#gggggg"), None);
        assert_eq!(Rgba::from_hex("#ffffff00"), None);
        assert_eq!(Rgba::from_hex(""), None);
    }

    #[test]
    fn hex_output_is_lowercase_without_alpha() {
        let color = Rgba::new(0xAB, 0x01, 0xFF, 10);
        assert_eq!(color.to_hex(), "#ab01ff");
    }

    #[test]
    fn unit_channels_round_and_clamp() {
        assert_eq!(Rgba::from_unit(1.0, 0.5, 0.0, 0.8), Rgba::new(255, 128, 0, 204));
        assert_eq!(Rgba::from_unit(1.5, -0.2, 0.0, 1.0), Rgba::new(255, 0, 0, 255));
    }
}
