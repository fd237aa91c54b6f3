use super::FONT_FAMILY;
use cairo::Context;
use dialkit::{
    Color, DialCircle, DrawInstruction, HandSegment, Numeral, TextBounds, TextMeasure, TickMark,
};
use std::f64::consts::PI;

/// Measures numerals with the font of the context being drawn on.
pub struct CairoMetrics<'a> {
    cr: &'a Context,
}

impl<'a> CairoMetrics<'a> {
    pub fn new(cr: &'a Context) -> Self {
        cr.select_font_face(
            FONT_FAMILY,
            cairo::FontSlant::Normal,
            cairo::FontWeight::Normal,
        );
        Self { cr }
    }
}

impl TextMeasure for CairoMetrics<'_> {
    fn text_bounds(&self, text: &str, font_size: f64) -> TextBounds {
        self.cr.set_font_size(font_size);
        match self.cr.text_extents(text) {
            Ok(ext) => TextBounds::new(ext.width(), ext.height()),
            Err(e) => {
                log::warn!("Failed to measure '{}': {}", text, e);
                TextBounds::default()
            }
        }
    }
}

fn set_color(cr: &Context, color: Color) {
    let (r, g, b, a) = color.to_rgba_f64();
    cr.set_source_rgba(r, g, b, a);
}

fn draw_circle(cr: &Context, circle: &DialCircle) -> Result<(), cairo::Error> {
    // nothing visible on a surface smaller than the padding
    if circle.radius <= 0.0 {
        return Ok(());
    }
    set_color(cr, circle.fill);
    cr.arc(circle.center.x, circle.center.y, circle.radius, 0.0, 2.0 * PI);
    cr.fill()
}

fn draw_numeral(cr: &Context, numeral: &Numeral) -> Result<(), cairo::Error> {
    cr.save()?;
    cr.translate(0.0, numeral.offset);
    cr.rotate(numeral.rotation_degrees.to_radians());
    set_color(cr, numeral.color);
    cr.set_font_size(numeral.font_size);
    cr.move_to(numeral.origin.x, numeral.origin.y);
    cr.show_text(&numeral.text)?;
    cr.restore()
}

fn draw_tick(cr: &Context, tick: &TickMark) -> Result<(), cairo::Error> {
    cr.save()?;
    cr.rotate(tick.angle_degrees.to_radians());

    if let Some(numeral) = &tick.numeral {
        draw_numeral(cr, numeral)?;
    }

    set_color(cr, tick.color);
    cr.set_line_width(tick.stroke_width);
    cr.move_to(tick.start.x, tick.start.y);
    cr.line_to(tick.end.x, tick.end.y);
    cr.stroke()?;
    cr.restore()
}

fn rounded_rect(cr: &Context, x: f64, y: f64, width: f64, height: f64, radius: f64) {
    let r = radius.min(width / 2.0).min(height / 2.0).max(0.0);
    cr.new_sub_path();
    cr.arc(x + width - r, y + r, r, -PI / 2.0, 0.0);
    cr.arc(x + width - r, y + height - r, r, 0.0, PI / 2.0);
    cr.arc(x + r, y + height - r, r, PI / 2.0, PI);
    cr.arc(x + r, y + r, r, PI, 3.0 * PI / 2.0);
    cr.close_path();
}

fn draw_hand(cr: &Context, hand: &HandSegment) -> Result<(), cairo::Error> {
    let height = hand.length + hand.overhang;
    if height <= 0.0 || hand.width <= 0.0 {
        return Ok(());
    }

    cr.save()?;
    cr.rotate(hand.angle_degrees.to_radians());
    set_color(cr, hand.color);
    rounded_rect(
        cr,
        -hand.width / 2.0,
        -hand.length,
        hand.width,
        height,
        hand.corner_radius,
    );
    cr.fill()?;
    cr.restore()
}

/// Paints `instructions` in order on a `width` x `height` surface, with the
/// dial frame's origin at the surface center.
pub fn draw(
    cr: &Context,
    instructions: &[DrawInstruction],
    width: f64,
    height: f64,
) -> Result<(), cairo::Error> {
    cr.save()?;
    cr.translate(width / 2.0, height / 2.0);

    for instruction in instructions {
        match instruction {
            DrawInstruction::Circle(circle) => draw_circle(cr, circle)?,
            DrawInstruction::Tick(tick) => draw_tick(cr, tick)?,
            DrawInstruction::Hand(hand) => draw_hand(cr, hand)?,
        }
    }

    cr.restore()
}
