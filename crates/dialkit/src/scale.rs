use crate::color::Color;
use crate::geometry::{DialGeometry, Point};
use crate::style::StyleConfig;
use crate::units::Density;

pub const TICK_COUNT: usize = 60;
pub const TICKS_PER_HOUR: usize = 5;
pub const TICK_STEP_DEGREES: f64 = 360.0 / TICK_COUNT as f64;

// layout units, not scaled by density
pub const HOUR_TICK_LENGTH: f64 = 40.0;
pub const MINUTE_TICK_LENGTH: f64 = 30.0;

// dp
pub const HOUR_TICK_STROKE: f64 = 1.5;
pub const MINUTE_TICK_STROKE: f64 = 1.0;
pub const NUMERAL_GAP: f64 = 5.0;

/// Tight ink bounds of a string.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TextBounds {
    pub width: f64,
    pub height: f64,
}

impl TextBounds {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Measures text the way the rasterizer will draw it.
pub trait TextMeasure {
    fn text_bounds(&self, text: &str, font_size: f64) -> TextBounds;
}

/// Fixed-advance estimate of digit bounds, for layout without a font backend.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ApproximateMetrics {
    /// Glyph advance as a fraction of the font size.
    pub advance: f64,
    /// Digit height as a fraction of the font size.
    pub cap_height: f64,
}

impl Default for ApproximateMetrics {
    fn default() -> Self {
        Self {
            advance: 0.55,
            cap_height: 0.72,
        }
    }
}

impl TextMeasure for ApproximateMetrics {
    fn text_bounds(&self, text: &str, font_size: f64) -> TextBounds {
        let glyphs = text.chars().count() as f64;
        TextBounds::new(
            glyphs * self.advance * font_size,
            self.cap_height * font_size,
        )
    }
}

/// An hour numeral, positioned relative to the frame of its tick.
///
/// Drawing it: rotate by the tick angle, translate by `(0, offset)`, rotate by
/// `rotation_degrees` (which undoes the tick rotation so the glyph stays
/// upright), then draw `text` with its baseline origin at `origin`.
#[derive(Debug, Clone, PartialEq)]
pub struct Numeral {
    pub text: String,
    pub font_size: f64,
    pub color: Color,
    pub bounds: TextBounds,
    pub offset: f64,
    pub rotation_degrees: f64,
    pub origin: Point,
}

impl Numeral {
    /// Center of the glyph box in the dial frame.
    pub fn anchor(&self, tick_angle: f64) -> Point {
        Point::new(0.0, self.offset).rotated(tick_angle)
    }
}

/// One of the sixty scale marks. `start`/`end` are in the unrotated frame,
/// where every tick points at twelve o'clock.
#[derive(Debug, Clone, PartialEq)]
pub struct TickMark {
    pub index: usize,
    pub angle_degrees: f64,
    pub is_hour_tick: bool,
    pub length: f64,
    pub color: Color,
    pub stroke_width: f64,
    pub start: Point,
    pub end: Point,
    pub numeral: Option<Numeral>,
}

impl TickMark {
    pub fn label(&self) -> Option<&str> {
        self.numeral.as_ref().map(|n| n.text.as_str())
    }

    /// Segment endpoints after rotation into place.
    pub fn segment(&self) -> (Point, Point) {
        (
            self.start.rotated(self.angle_degrees),
            self.end.rotated(self.angle_degrees),
        )
    }
}

/// Twelve o'clock is tick 0, so hour `0` reads "12".
pub fn hour_label(tick_index: usize) -> String {
    match tick_index / TICKS_PER_HOUR {
        0 => "12".to_string(),
        hour => hour.to_string(),
    }
}

pub fn layout_ticks(
    geometry: &DialGeometry,
    style: &StyleConfig,
    density: &Density,
    metrics: &impl TextMeasure,
) -> Vec<TickMark> {
    let inner = -geometry.center_radius + style.padding;
    let mut frame_angle = 0.0;
    let mut ticks = Vec::with_capacity(TICK_COUNT);

    for index in 0..TICK_COUNT {
        let is_hour_tick = index % TICKS_PER_HOUR == 0;
        let (length, stroke, color) = if is_hour_tick {
            (HOUR_TICK_LENGTH, HOUR_TICK_STROKE, style.long_tick_color)
        } else {
            (MINUTE_TICK_LENGTH, MINUTE_TICK_STROKE, style.short_tick_color)
        };

        let numeral = is_hour_tick.then(|| {
            let text = hour_label(index);
            let bounds = metrics.text_bounds(&text, style.text_size);
            Numeral {
                offset: inner + density.dp(NUMERAL_GAP) + length + bounds.height,
                rotation_degrees: -frame_angle,
                origin: Point::new(-bounds.width / 2.0, bounds.height / 2.0),
                font_size: style.text_size,
                // numerals ignore the tick color
                color: Color::black(),
                bounds,
                text,
            }
        });

        ticks.push(TickMark {
            index,
            angle_degrees: frame_angle,
            is_hour_tick,
            length,
            color,
            stroke_width: density.dp(stroke),
            start: Point::new(0.0, inner),
            end: Point::new(0.0, inner + length),
            numeral,
        });

        frame_angle += TICK_STEP_DEGREES;
    }

    ticks
}
