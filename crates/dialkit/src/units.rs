use derive_more::Display;
use serde_with::DeserializeFromStr;
use std::str::FromStr;
use thiserror::Error;

/// Pixels per density-independent unit (`dp`) and per scale-independent
/// unit (`sp`).
///
/// Both scales are finite and positive. Anything else is replaced by `1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Density {
    dp: f64,
    sp: f64,
}

impl Density {
    pub fn new(dp: f64, sp: f64) -> Self {
        Self {
            dp: Self::checked_scale(dp),
            sp: Self::checked_scale(sp),
        }
    }

    pub fn is_valid_scale(scale: f64) -> bool {
        scale.is_finite() && scale > 0.0
    }

    fn checked_scale(scale: f64) -> f64 {
        if Self::is_valid_scale(scale) {
            scale
        } else {
            log::warn!("Ignoring invalid density {}, using 1.0", scale);
            1.0
        }
    }

    pub fn uniform(scale: f64) -> Self {
        Self::new(scale, scale)
    }

    pub fn dp(&self, value: f64) -> f64 {
        value * self.dp
    }

    pub fn sp(&self, value: f64) -> f64 {
        value * self.sp
    }
}

impl Default for Density {
    fn default() -> Self {
        Self::uniform(1.0)
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DimensionError {
    #[error("empty dimension")]
    Empty,
    #[error("invalid dimension '{0}'")]
    Malformed(String),
    #[error("dimension out of range: {0}")]
    OutOfRange(f64),
}

/// A length as written in a style source. Bare numbers are pixels.
#[derive(Debug, Clone, Copy, PartialEq, Display, DeserializeFromStr)]
pub enum Dimension {
    #[display("{_0}px")]
    Px(f64),
    #[display("{_0}dp")]
    Dp(f64),
    #[display("{_0}sp")]
    Sp(f64),
}

impl Dimension {
    pub fn to_px(self, density: &Density) -> f64 {
        match self {
            Self::Px(v) => v,
            Self::Dp(v) => density.dp(v),
            Self::Sp(v) => density.sp(v),
        }
    }
}

impl FromStr for Dimension {
    type Err = DimensionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(DimensionError::Empty);
        }

        let lower = s.to_ascii_lowercase();
        let (number, ctor): (&str, fn(f64) -> Self) = if let Some(n) = lower.strip_suffix("dip") {
            (n, Self::Dp)
        } else if let Some(n) = lower.strip_suffix("dp") {
            (n, Self::Dp)
        } else if let Some(n) = lower.strip_suffix("sp") {
            (n, Self::Sp)
        } else if let Some(n) = lower.strip_suffix("px") {
            (n, Self::Px)
        } else {
            (lower.as_str(), Self::Px)
        };

        let value: f64 = number
            .trim()
            .parse()
            .map_err(|_| DimensionError::Malformed(s.to_string()))?;

        if !value.is_finite() || value < 0.0 {
            return Err(DimensionError::OutOfRange(value));
        }

        Ok(ctor(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_parsing() {
        let cases = vec![
            ("10dp", Dimension::Dp(10.0)),
            ("10DP", Dimension::Dp(10.0)),
            ("2.5dip", Dimension::Dp(2.5)),
            ("16sp", Dimension::Sp(16.0)),
            ("12px", Dimension::Px(12.0)),
            ("  7 ", Dimension::Px(7.0)),
            ("0", Dimension::Px(0.0)),
        ];

        for (input, expected) in cases {
            assert_eq!(input.parse::<Dimension>().unwrap(), expected, "{input}");
        }
    }

    #[test]
    fn test_dimension_rejects_bad_input() {
        assert_eq!("".parse::<Dimension>(), Err(DimensionError::Empty));
        assert!(matches!(
            "tall".parse::<Dimension>(),
            Err(DimensionError::Malformed(_))
        ));
        assert!(matches!(
            "-3dp".parse::<Dimension>(),
            Err(DimensionError::OutOfRange(_))
        ));
        assert!(matches!(
            "NaN".parse::<Dimension>(),
            Err(DimensionError::OutOfRange(_))
        ));
        assert!(matches!(
            "infpx".parse::<Dimension>(),
            Err(DimensionError::OutOfRange(_))
        ));
    }

    #[test]
    fn test_dimension_to_px() {
        let density = Density::new(2.0, 3.0);
        assert_eq!(Dimension::Px(5.0).to_px(&density), 5.0);
        assert_eq!(Dimension::Dp(5.0).to_px(&density), 10.0);
        assert_eq!(Dimension::Sp(5.0).to_px(&density), 15.0);
    }

    #[test]
    fn test_density_rejects_unusable_scales() {
        assert_eq!(Density::uniform(-1.0), Density::default());
        assert_eq!(Density::uniform(0.0), Density::default());
        assert_eq!(Density::uniform(f64::NAN), Density::default());
        assert_eq!(Density::new(2.0, f64::INFINITY), Density::new(2.0, 1.0));
        assert_eq!(Dimension::Dp(10.0).to_px(&Density::uniform(-1.0)), 10.0);
    }

    #[test]
    fn test_dimension_deserialization() {
        let d: Dimension = serde_json::from_str("\"10dp\"").unwrap();
        assert_eq!(d, Dimension::Dp(10.0));
        assert!(serde_json::from_str::<Dimension>("\"ten\"").is_err());
        assert_eq!(Dimension::Sp(16.0).to_string(), "16sp");
    }
}
