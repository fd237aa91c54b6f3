use crate::color::Color;
use crate::geometry::{DEFAULT_SIZE, DialGeometry, LayoutConstraint, Point, Size};
use crate::hand::{HandAngles, HandKind, HandSegment};
use crate::scale::{self, TextMeasure, TickMark};
use crate::style::StyleConfig;
use crate::units::Density;
use strum::IntoEnumIterator;

/// The filled dial face.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DialCircle {
    pub center: Point,
    pub radius: f64,
    pub fill: Color,
}

/// One drawing step, in the dial frame (origin at the surface center).
/// Every instruction carries its own colors and widths.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawInstruction {
    Circle(DialCircle),
    Tick(TickMark),
    Hand(HandSegment),
}

/// Lays out the dial for the current surface size.
///
/// `on_resize` must run before the first render and after every size change;
/// until then the cached geometry describes the previous surface.
#[derive(Debug, Clone)]
pub struct DialLayout {
    style: StyleConfig,
    density: Density,
    geometry: DialGeometry,
}

impl DialLayout {
    pub fn new(style: StyleConfig, density: Density) -> Self {
        Self {
            style,
            density,
            geometry: DialGeometry::default(),
        }
    }

    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    pub fn density(&self) -> &Density {
        &self.density
    }

    pub fn geometry(&self) -> DialGeometry {
        self.geometry
    }

    /// The dial is always square. With both axes unconstrained it takes
    /// [`DEFAULT_SIZE`]; otherwise the smaller requested side, whether that
    /// side was a bound or an exact size.
    pub fn measure(
        &self,
        requested_width: f64,
        requested_height: f64,
        width: LayoutConstraint,
        height: LayoutConstraint,
    ) -> Size {
        if width == LayoutConstraint::Unconstrained && height == LayoutConstraint::Unconstrained {
            return Size::square(DEFAULT_SIZE);
        }
        Size::square(requested_width.min(requested_height))
    }

    pub fn on_resize(&mut self, width: f64, height: f64) -> DialGeometry {
        self.geometry = DialGeometry::compute(Size::new(width, height), self.style.padding);
        log::debug!(
            "Dial resized to {}x{}: radius {}, overhang {}",
            width,
            height,
            self.geometry.center_radius,
            self.geometry.hand_overhang
        );
        self.geometry
    }

    pub fn layout_dial(&self) -> DialCircle {
        DialCircle {
            center: Point::default(),
            radius: self.geometry.center_radius,
            fill: Color::white(),
        }
    }

    pub fn layout_scale(&self, metrics: &impl TextMeasure) -> Vec<TickMark> {
        scale::layout_ticks(&self.geometry, &self.style, &self.density, metrics)
    }

    pub fn layout_hand(&self, kind: HandKind, angle_degrees: f64) -> HandSegment {
        HandSegment::layout(kind, angle_degrees, &self.geometry, &self.style)
    }

    /// Hour, minute and second hands, in that drawing order.
    pub fn layout_hands(&self, angles: HandAngles) -> Vec<HandSegment> {
        HandKind::iter()
            .map(|kind| self.layout_hand(kind, angles.angle(kind)))
            .collect()
    }

    /// Full frame: the dial, the sixty ticks, then the hands if any.
    pub fn render(
        &self,
        hands: Option<HandAngles>,
        metrics: &impl TextMeasure,
    ) -> Vec<DrawInstruction> {
        let mut instructions = vec![DrawInstruction::Circle(self.layout_dial())];
        instructions.extend(
            self.layout_scale(metrics)
                .into_iter()
                .map(DrawInstruction::Tick),
        );
        if let Some(angles) = hands {
            instructions.extend(
                self.layout_hands(angles)
                    .into_iter()
                    .map(DrawInstruction::Hand),
            );
        }
        instructions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scale::ApproximateMetrics;

    fn engine(padding: f64) -> DialLayout {
        let style = StyleConfig {
            padding,
            ..StyleConfig::defaults(&Density::default())
        };
        DialLayout::new(style, Density::default())
    }

    #[test]
    fn test_measure_unconstrained_uses_default() {
        let e = engine(10.0);
        for (w, h) in [(0.0, 0.0), (300.0, 200.0), (5000.0, 5000.0)] {
            let size = e.measure(
                w,
                h,
                LayoutConstraint::Unconstrained,
                LayoutConstraint::Unconstrained,
            );
            assert_eq!(size, Size::square(1000.0));
        }
    }

    #[test]
    fn test_measure_constrained_takes_min() {
        let e = engine(10.0);
        let cases = [
            (300.0, 200.0, LayoutConstraint::Bounded, LayoutConstraint::Bounded),
            (300.0, 200.0, LayoutConstraint::Unconstrained, LayoutConstraint::Bounded),
            (200.0, 300.0, LayoutConstraint::Bounded, LayoutConstraint::Unconstrained),
        ];
        for (w, h, cw, ch) in cases {
            assert_eq!(e.measure(w, h, cw, ch), Size::square(200.0));
        }
        assert_eq!(
            e.measure(1500.0, 2000.0, LayoutConstraint::Bounded, LayoutConstraint::Bounded),
            Size::square(1500.0)
        );
    }

    #[test]
    fn test_resize_recomputes_geometry() {
        let mut e = engine(20.0);
        assert_eq!(e.geometry(), DialGeometry::default());

        let g = e.on_resize(500.0, 800.0);
        assert_eq!(g.center_radius, 230.0);
        assert!((g.hand_overhang - 230.0 / 6.0).abs() < 1e-12);
        assert_eq!(e.geometry(), g);

        let g = e.on_resize(100.0, 30.0);
        assert_eq!(g.center_radius, -5.0);
        assert_eq!(e.layout_dial().radius, -5.0);
    }

    #[test]
    fn test_resize_overrides_static_overhang() {
        let mut e = engine(10.0);
        e.on_resize(400.0, 400.0);
        let hand = e.layout_hand(HandKind::Hour, 0.0);
        assert_ne!(hand.overhang, e.style().hand_overhang_length);
        assert_eq!(hand.overhang, 190.0 / 6.0);
    }

    #[test]
    fn test_dial_is_white_and_centered() {
        let mut e = engine(10.0);
        e.on_resize(300.0, 300.0);
        let dial = e.layout_dial();
        assert_eq!(dial.center, Point::default());
        assert_eq!(dial.radius, 140.0);
        assert_eq!(dial.fill, Color::white());
    }

    #[test]
    fn test_render_order() {
        let mut e = engine(10.0);
        e.on_resize(300.0, 300.0);
        let metrics = ApproximateMetrics::default();

        let frame = e.render(None, &metrics);
        assert_eq!(frame.len(), 61);
        assert!(matches!(frame[0], DrawInstruction::Circle(_)));
        assert!(frame[1..].iter().all(|i| matches!(i, DrawInstruction::Tick(_))));

        let frame = e.render(Some(HandAngles::default()), &metrics);
        assert_eq!(frame.len(), 64);
        let kinds: Vec<HandKind> = frame
            .iter()
            .filter_map(|i| match i {
                DrawInstruction::Hand(h) => Some(h.kind),
                _ => None,
            })
            .collect();
        assert_eq!(kinds, vec![HandKind::Hour, HandKind::Minute, HandKind::Second]);
    }

    #[test]
    fn test_render_zero_surface() {
        let mut e = engine(10.0);
        e.on_resize(0.0, 0.0);
        let frame = e.render(Some(HandAngles::default()), &ApproximateMetrics::default());
        assert_eq!(frame.len(), 64);
    }
}
