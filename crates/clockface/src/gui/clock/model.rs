use crate::config::Config;
use chrono::{Local, Timelike};
use dialkit::{
    DialGeometry, DialLayout, DrawInstruction, HandAngles, LayoutConstraint, Size, TextMeasure,
};

pub struct ClockState {
    pub layout: DialLayout,
    pub show_hands: bool,
    pub requested_size: Option<f64>,
    pub surface: Size,
}

impl ClockState {
    pub fn new(config: &Config) -> Self {
        Self {
            layout: DialLayout::new(config.resolve_style(), config.density()),
            show_hands: config.window.show_hands,
            requested_size: config.window.size,
            surface: Size::default(),
        }
    }

    /// Square size to request from the toolkit.
    pub fn preferred_size(&self) -> Size {
        match self.requested_size {
            Some(side) => self.layout.measure(
                side,
                side,
                LayoutConstraint::Bounded,
                LayoutConstraint::Bounded,
            ),
            None => self.layout.measure(
                0.0,
                0.0,
                LayoutConstraint::Unconstrained,
                LayoutConstraint::Unconstrained,
            ),
        }
    }

    pub fn resize(&mut self, width: f64, height: f64) -> DialGeometry {
        self.surface = Size::new(width, height);
        self.layout.on_resize(width, height)
    }

    /// Swaps in a freshly resolved style and keeps the current surface.
    pub fn reload(&mut self, config: &Config) {
        let surface = self.surface;
        *self = Self::new(config);
        self.resize(surface.width, surface.height);
    }

    pub fn frame(&self, metrics: &impl TextMeasure) -> Vec<DrawInstruction> {
        self.frame_at(&Local::now().time(), metrics)
    }

    pub fn frame_at(
        &self,
        time: &impl Timelike,
        metrics: &impl TextMeasure,
    ) -> Vec<DrawInstruction> {
        let hands = self.show_hands.then(|| HandAngles::from_time(time));
        self.layout.render(hands, metrics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parse_config;
    use chrono::NaiveTime;
    use dialkit::ApproximateMetrics;

    #[test]
    fn test_preferred_size() {
        let mut config = Config::default();
        config.window.size = Some(280.0);
        assert_eq!(ClockState::new(&config).preferred_size(), Size::square(280.0));

        config.window.size = None;
        assert_eq!(ClockState::new(&config).preferred_size(), Size::square(1000.0));
    }

    #[test]
    fn test_hands_follow_config() {
        let noon = NaiveTime::from_hms_opt(12, 0, 0).unwrap();
        let metrics = ApproximateMetrics::default();

        let mut config = Config::default();
        let mut state = ClockState::new(&config);
        state.resize(300.0, 300.0);
        assert_eq!(state.frame_at(&noon, &metrics).len(), 61);

        config.window.show_hands = true;
        state.reload(&config);
        assert_eq!(state.frame_at(&noon, &metrics).len(), 64);
    }

    #[test]
    fn test_reload_keeps_surface() {
        let mut state = ClockState::new(&Config::default());
        state.resize(400.0, 300.0);
        assert_eq!(state.layout.geometry().center_radius, 140.0);

        let config = parse_config("[style]\npadding = 50").unwrap();
        state.reload(&config);
        assert_eq!(state.surface, Size::new(400.0, 300.0));
        assert_eq!(state.layout.geometry().center_radius, 100.0);
    }
}
