use crate::color::{Color, ColorError};
use crate::units::{Density, Dimension, DimensionError};
use std::collections::HashMap;
use std::str::FromStr;
use strum::{Display as StrumDisplay, EnumIter, EnumString};
use thiserror::Error;

/// Attribute keys understood by [`StyleConfig::resolve`]. Matching is
/// case-insensitive and the snake_case spelling is accepted too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, EnumIter, StrumDisplay)]
#[strum(ascii_case_insensitive)]
pub enum StyleKey {
    #[strum(serialize = "padding")]
    Padding,
    #[strum(to_string = "textSize", serialize = "text_size")]
    TextSize,
    #[strum(to_string = "hourPointerWidth", serialize = "hour_pointer_width")]
    HourPointerWidth,
    #[strum(to_string = "minutePointerWidth", serialize = "minute_pointer_width")]
    MinutePointerWidth,
    #[strum(to_string = "secondPointerWidth", serialize = "second_pointer_width")]
    SecondPointerWidth,
    #[strum(to_string = "pointerCornerRadius", serialize = "pointer_corner_radius")]
    PointerCornerRadius,
    #[strum(to_string = "pointerEndLength", serialize = "pointer_end_length")]
    PointerEndLength,
    #[strum(to_string = "scaleLongColor", serialize = "scale_long_color")]
    ScaleLongColor,
    #[strum(to_string = "scaleShortColor", serialize = "scale_short_color")]
    ScaleShortColor,
    #[strum(to_string = "minutePointerColor", serialize = "minute_pointer_color")]
    MinutePointerColor,
    #[strum(to_string = "secondPointerColor", serialize = "second_pointer_color")]
    SecondPointerColor,
}

#[derive(Debug, Error)]
pub enum StyleError {
    #[error("style source unavailable: {0}")]
    Unavailable(String),
    #[error("{key}: {source}")]
    Dimension {
        key: StyleKey,
        #[source]
        source: DimensionError,
    },
    #[error("{key}: {source}")]
    Color {
        key: StyleKey,
        #[source]
        source: ColorError,
    },
    #[error("{key}: {value} is out of range")]
    OutOfRange { key: StyleKey, value: f64 },
    #[error("{key} is a {kind} attribute")]
    WrongKind { key: StyleKey, kind: &'static str },
}

/// Read access to one acquired set of style attributes.
///
/// `Ok(None)` means the attribute is absent and the field keeps its default.
/// Any `Err` discards the whole resolution.
pub trait StyledAttributes {
    fn dimension(&self, key: StyleKey) -> Result<Option<Dimension>, StyleError>;
    fn color(&self, key: StyleKey) -> Result<Option<Color>, StyleError>;
}

/// Something attributes can be obtained from.
///
/// The value returned by [`StyleSource::obtain`] is held only for the duration
/// of [`StyleConfig::resolve`]; implementations release whatever backs it in
/// `Drop`, which runs on success and on every early error return alike.
pub trait StyleSource {
    type Attributes<'a>: StyledAttributes
    where
        Self: 'a;

    fn obtain(&self) -> Result<Self::Attributes<'_>, StyleError>;
}

/// Resolved, immutable style. All lengths are in pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleConfig {
    pub padding: f64,
    pub text_size: f64,
    pub hour_hand_width: f64,
    pub minute_hand_width: f64,
    pub second_hand_width: f64,
    pub hand_corner_radius: f64,
    pub hand_overhang_length: f64,
    pub long_tick_color: Color,
    pub short_tick_color: Color,
    pub hour_hand_color: Color,
    pub minute_hand_color: Color,
    pub second_hand_color: Color,
}

impl StyleConfig {
    pub fn defaults(density: &Density) -> Self {
        Self {
            padding: density.dp(10.0),
            text_size: density.sp(16.0),
            hour_hand_width: density.dp(5.0),
            minute_hand_width: density.dp(3.0),
            second_hand_width: density.dp(2.0),
            hand_corner_radius: density.dp(10.0).trunc(),
            hand_overhang_length: density.dp(10.0),
            long_tick_color: Color::argb(225, 0, 0, 0),
            short_tick_color: Color::argb(125, 0, 0, 0),
            // no attribute exists for it
            hour_hand_color: Color::black(),
            minute_hand_color: Color::black(),
            second_hand_color: Color::red(),
        }
    }

    /// Resolves every attribute from `source`. Never fails: if anything goes
    /// wrong, all fields fall back to [`StyleConfig::defaults`], including the
    /// ones that were read successfully.
    pub fn resolve<S: StyleSource>(source: &S, density: &Density) -> Self {
        match Self::try_resolve(source, density) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Invalid style, using defaults: {}", e);
                Self::defaults(density)
            }
        }
    }

    pub fn try_resolve<S: StyleSource>(source: &S, density: &Density) -> Result<Self, StyleError> {
        let attrs = source.obtain()?;
        let defaults = Self::defaults(density);

        let length = |key: StyleKey, default: f64| -> Result<f64, StyleError> {
            match attrs.dimension(key)? {
                Some(d) => {
                    let px = d.to_px(density);
                    if px.is_finite() && px >= 0.0 {
                        Ok(px)
                    } else {
                        Err(StyleError::OutOfRange { key, value: px })
                    }
                }
                None => Ok(default),
            }
        };
        let color = |key: StyleKey, default: Color| -> Result<Color, StyleError> {
            Ok(attrs.color(key)?.unwrap_or(default))
        };

        Ok(Self {
            padding: length(StyleKey::Padding, defaults.padding)?,
            text_size: length(StyleKey::TextSize, defaults.text_size)?,
            hour_hand_width: length(StyleKey::HourPointerWidth, defaults.hour_hand_width)?,
            minute_hand_width: length(StyleKey::MinutePointerWidth, defaults.minute_hand_width)?,
            second_hand_width: length(StyleKey::SecondPointerWidth, defaults.second_hand_width)?,
            hand_corner_radius: length(StyleKey::PointerCornerRadius, defaults.hand_corner_radius)?
                .trunc(),
            hand_overhang_length: length(
                StyleKey::PointerEndLength,
                defaults.hand_overhang_length,
            )?,
            long_tick_color: color(StyleKey::ScaleLongColor, defaults.long_tick_color)?,
            short_tick_color: color(StyleKey::ScaleShortColor, defaults.short_tick_color)?,
            hour_hand_color: defaults.hour_hand_color,
            minute_hand_color: color(StyleKey::MinutePointerColor, defaults.minute_hand_color)?,
            second_hand_color: color(StyleKey::SecondPointerColor, defaults.second_hand_color)?,
        })
    }
}

/// Attributes held as raw strings, e.g. a `[style]` table from a config file.
#[derive(Debug, Clone, Default)]
pub struct AttributeMap {
    values: HashMap<StyleKey, String>,
}

impl AttributeMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: StyleKey, value: impl Into<String>) {
        self.values.insert(key, value.into());
    }

    pub fn get(&self, key: StyleKey) -> Option<&str> {
        self.values.get(&key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: AsRef<str>, V: Into<String>> FromIterator<(K, V)> for AttributeMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (name, value) in iter {
            match StyleKey::from_str(name.as_ref()) {
                Ok(key) => map.insert(key, value),
                Err(_) => log::debug!("Ignoring unknown style attribute '{}'", name.as_ref()),
            }
        }
        map
    }
}

const COLOR_KEYS: &[StyleKey] = &[
    StyleKey::ScaleLongColor,
    StyleKey::ScaleShortColor,
    StyleKey::MinutePointerColor,
    StyleKey::SecondPointerColor,
];

impl StyleKey {
    pub fn is_color(&self) -> bool {
        COLOR_KEYS.contains(self)
    }
}

impl StyledAttributes for &AttributeMap {
    fn dimension(&self, key: StyleKey) -> Result<Option<Dimension>, StyleError> {
        if key.is_color() {
            return Err(StyleError::WrongKind { key, kind: "color" });
        }
        self.get(key)
            .map(|raw| {
                raw.parse::<Dimension>()
                    .map_err(|source| StyleError::Dimension { key, source })
            })
            .transpose()
    }

    fn color(&self, key: StyleKey) -> Result<Option<Color>, StyleError> {
        if !key.is_color() {
            return Err(StyleError::WrongKind {
                key,
                kind: "dimension",
            });
        }
        self.get(key)
            .map(|raw| {
                raw.parse::<Color>()
                    .map_err(|source| StyleError::Color { key, source })
            })
            .transpose()
    }
}

impl StyleSource for AttributeMap {
    type Attributes<'a> = &'a AttributeMap;

    fn obtain(&self) -> Result<Self::Attributes<'_>, StyleError> {
        Ok(self)
    }
}
