use crate::color::Color;
use crate::geometry::{DialGeometry, Point};
use crate::style::StyleConfig;
use chrono::Timelike;
use strum::{Display as StrumDisplay, EnumIter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, StrumDisplay)]
#[strum(serialize_all = "lowercase")]
pub enum HandKind {
    Hour,
    Minute,
    Second,
}

impl HandKind {
    /// Tip distance as a fraction of the dial radius.
    pub fn length_factor(&self) -> f64 {
        match self {
            Self::Hour => 0.5,
            Self::Minute => 0.7,
            Self::Second => 0.85,
        }
    }

    pub fn width(&self, style: &StyleConfig) -> f64 {
        match self {
            Self::Hour => style.hour_hand_width,
            Self::Minute => style.minute_hand_width,
            Self::Second => style.second_hand_width,
        }
    }

    pub fn color(&self, style: &StyleConfig) -> Color {
        match self {
            Self::Hour => style.hour_hand_color,
            Self::Minute => style.minute_hand_color,
            Self::Second => style.second_hand_color,
        }
    }
}

/// A hand as a rounded bar from `(0, overhang)` to `(0, -length)`, rotated
/// clockwise by `angle_degrees` from twelve o'clock.
#[derive(Debug, Clone, PartialEq)]
pub struct HandSegment {
    pub kind: HandKind,
    pub angle_degrees: f64,
    pub length: f64,
    pub overhang: f64,
    pub width: f64,
    pub corner_radius: f64,
    pub color: Color,
}

impl HandSegment {
    pub fn layout(
        kind: HandKind,
        angle_degrees: f64,
        geometry: &DialGeometry,
        style: &StyleConfig,
    ) -> Self {
        Self {
            kind,
            angle_degrees,
            length: geometry.center_radius * kind.length_factor(),
            overhang: geometry.hand_overhang,
            width: kind.width(style),
            corner_radius: style.hand_corner_radius,
            color: kind.color(style),
        }
    }

    pub fn tip(&self) -> Point {
        Point::new(0.0, -self.length).rotated(self.angle_degrees)
    }

    pub fn tail(&self) -> Point {
        Point::new(0.0, self.overhang).rotated(self.angle_degrees)
    }
}

/// Hand angles in degrees, clockwise from twelve o'clock.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HandAngles {
    pub hour: f64,
    pub minute: f64,
    pub second: f64,
}

impl HandAngles {
    pub fn from_time(time: &impl Timelike) -> Self {
        let (h, m, s) = (
            f64::from(time.hour() % 12),
            f64::from(time.minute()),
            f64::from(time.second().min(59)),
        );
        Self {
            hour: h * 30.0 + m / 2.0,
            minute: m * 6.0 + s / 10.0,
            second: s * 6.0,
        }
    }

    pub fn angle(&self, kind: HandKind) -> f64 {
        match kind {
            HandKind::Hour => self.hour,
            HandKind::Minute => self.minute,
            HandKind::Second => self.second,
        }
    }
}
