use dialkit::{
    ApproximateMetrics, AttributeMap, Color, Density, DialLayout, DrawInstruction,
    LayoutConstraint, Size, StyleConfig, StyleError, StyleKey, StyleSource, StyledAttributes,
};
use dialkit::{Dimension, TickMark};

struct ThrowingSource;

struct ThrowingAttributes;

impl StyledAttributes for ThrowingAttributes {
    fn dimension(&self, key: StyleKey) -> Result<Option<Dimension>, StyleError> {
        match key {
            StyleKey::Padding => Ok(Some(Dimension::Px(42.0))),
            _ => Err(StyleError::Unavailable(format!("cannot read {key}"))),
        }
    }

    fn color(&self, _key: StyleKey) -> Result<Option<Color>, StyleError> {
        Ok(Some(Color::white()))
    }
}

impl StyleSource for ThrowingSource {
    type Attributes<'a> = ThrowingAttributes;

    fn obtain(&self) -> Result<Self::Attributes<'_>, StyleError> {
        Ok(ThrowingAttributes)
    }
}

fn ticks(frame: &[DrawInstruction]) -> Vec<&TickMark> {
    frame
        .iter()
        .filter_map(|i| match i {
            DrawInstruction::Tick(t) => Some(t),
            _ => None,
        })
        .collect()
}

#[test]
fn resize_with_custom_padding() {
    let map: AttributeMap = [("padding", "20px")].into_iter().collect();
    let style = StyleConfig::resolve(&map, &Density::default());
    let mut layout = DialLayout::new(style, Density::default());

    let g = layout.on_resize(500.0, 800.0);
    assert_eq!(g.center_radius, 230.0);
    assert!((g.hand_overhang - 38.33).abs() < 0.01);
}

#[test]
fn throwing_source_falls_back_to_defaults() {
    let density = Density::default();
    let style = StyleConfig::resolve(&ThrowingSource, &density);

    assert_eq!(style, StyleConfig::defaults(&density));
    assert_eq!(style.padding, 10.0);
    assert_eq!(style.text_size, 16.0);
    assert_eq!(style.second_hand_color, Color::red());
    assert!(StyleConfig::try_resolve(&ThrowingSource, &density).is_err());
}

#[test]
fn full_frame_from_config_map() {
    let map: AttributeMap = [
        ("padding", "12dp"),
        ("textSize", "20sp"),
        ("scaleLongColor", "#FF0000FF"),
    ]
    .into_iter()
    .collect();
    let density = Density::uniform(2.0);
    let mut layout = DialLayout::new(StyleConfig::resolve(&map, &density), density);

    let size = layout.measure(
        640.0,
        480.0,
        LayoutConstraint::Bounded,
        LayoutConstraint::Bounded,
    );
    assert_eq!(size, Size::square(480.0));
    layout.on_resize(size.width, size.height);

    let frame = layout.render(None, &ApproximateMetrics::default());
    let ticks = ticks(&frame);
    assert_eq!(ticks.len(), 60);

    let twelve = ticks[0];
    assert_eq!(twelve.label(), Some("12"));
    assert_eq!(twelve.color, Color::argb(255, 0, 0, 255));
    assert_eq!(twelve.stroke_width, 3.0);
    // radius 240 - 24 = 216, ticks start at -216 + 24
    assert_eq!(twelve.start.y, -192.0);

    let numeral = twelve.numeral.as_ref().unwrap();
    assert_eq!(numeral.color, Color::black());
    assert_eq!(numeral.font_size, 40.0);
}

#[test]
fn tiny_surface_is_not_an_error() {
    let mut layout = DialLayout::new(
        StyleConfig::defaults(&Density::default()),
        Density::default(),
    );
    let size = layout.measure(
        4.0,
        4.0,
        LayoutConstraint::Bounded,
        LayoutConstraint::Bounded,
    );
    let g = layout.on_resize(size.width, size.height);
    assert_eq!(g.center_radius, -8.0);

    let frame = layout.render(
        Some(dialkit::HandAngles::default()),
        &ApproximateMetrics::default(),
    );
    assert_eq!(frame.len(), 64);
}
