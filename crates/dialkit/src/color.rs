use derive_more::{AsRef, Deref, From, Into};
use palette::{Srgba, WithAlpha};
use serde_with::DeserializeFromStr;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("invalid color '{0}'")]
    Malformed(String),
}

/// An 8-bit sRGB color with alpha.
#[derive(Debug, Clone, Copy, PartialEq, Deref, From, Into, AsRef, DeserializeFromStr)]
pub struct Color(Srgba<u8>);

impl Color {
    pub fn argb(alpha: u8, red: u8, green: u8, blue: u8) -> Self {
        Self(Srgba::new(red, green, blue, alpha))
    }

    pub fn black() -> Self {
        Self::argb(255, 0, 0, 0)
    }

    pub fn white() -> Self {
        Self::argb(255, 255, 255, 255)
    }

    pub fn red() -> Self {
        Self::argb(255, 255, 0, 0)
    }

    /// Components in `0.0..=1.0`, in the `(r, g, b, a)` order cairo expects.
    pub fn to_rgba_f64(&self) -> (f64, f64, f64, f64) {
        self.0.into_format::<f64, f64>().into_components()
    }

    fn parse_hex(hex: &str) -> Option<Self> {
        let digits = hex
            .chars()
            .map(|c| c.to_digit(16).map(|d| d as u8))
            .collect::<Option<Vec<u8>>>()?;

        let byte = |i: usize| digits[i] << 4 | digits[i + 1];
        match digits.len() {
            3 => Some(Self::argb(
                255,
                digits[0] * 17,
                digits[1] * 17,
                digits[2] * 17,
            )),
            6 => Some(Self::argb(255, byte(0), byte(2), byte(4))),
            8 => Some(Self::argb(byte(0), byte(2), byte(4), byte(6))),
            _ => None,
        }
    }
}

impl FromStr for Color {
    type Err = ColorError;

    /// Accepts `#RGB`, `#RRGGBB`, `#AARRGGBB` (alpha first) and CSS color names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let parsed = match s.strip_prefix('#') {
            Some(hex) => Self::parse_hex(hex),
            None => palette::named::from_str(&s.to_ascii_lowercase())
                .map(|rgb| Self(rgb.with_alpha(255))),
        };
        parsed.ok_or_else(|| ColorError::Malformed(s.to_string()))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (r, g, b, a) = self.0.into_components();
        write!(f, "#{a:02X}{r:02X}{g:02X}{b:02X}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_parsing() {
        let cases = vec![
            ("#000", Color::black()),
            ("#FF0000", Color::red()),
            ("#e1000000", Color::argb(225, 0, 0, 0)),
            ("#7D000000", Color::argb(125, 0, 0, 0)),
            ("white", Color::white()),
            ("Red", Color::red()),
        ];

        for (input, expected) in cases {
            assert_eq!(input.parse::<Color>().unwrap(), expected, "{input}");
        }
    }

    #[test]
    fn test_color_rejects_garbage() {
        for input in ["", "#", "#12345", "#GG0000", "not-a-color"] {
            assert!(input.parse::<Color>().is_err(), "{input}");
        }
    }

    #[test]
    fn test_color_display_is_argb() {
        assert_eq!(Color::argb(225, 0, 0, 0).to_string(), "#E1000000");
        let round: Color = Color::red().to_string().parse().unwrap();
        assert_eq!(round, Color::red());
    }

    #[test]
    fn test_color_to_rgba_f64() {
        let (r, g, b, a) = Color::red().to_rgba_f64();
        assert_eq!((r, g, b, a), (1.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn test_color_deserialization() {
        let c: Color = serde_json::from_str("\"#80FFFFFF\"").unwrap();
        assert_eq!(c, Color::argb(128, 255, 255, 255));
    }
}
